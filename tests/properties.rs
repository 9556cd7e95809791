use extmath::prelude::*;
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f32> {
    -1000.0_f32..1000.0
}

fn vec2() -> impl Strategy<Value = Vec2> {
    (component(), component()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn vec3() -> impl Strategy<Value = Vec3> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn vec4() -> impl Strategy<Value = Vec4> {
    (component(), component(), component(), component())
        .prop_map(|(x, y, z, w)| Vec4::new(x, y, z, w))
}

fn vec2i() -> impl Strategy<Value = Vec2i> {
    (-10_000..10_000, -10_000..10_000).prop_map(|(x, y)| Vec2i::new(x, y))
}

fn vec3i() -> impl Strategy<Value = Vec3i> {
    (-10_000..10_000, -10_000..10_000, -10_000..10_000).prop_map(|(x, y, z)| Vec3i::new(x, y, z))
}

fn mat4() -> impl Strategy<Value = Mat4> {
    prop::array::uniform16(-100.0_f32..100.0).prop_map(|arr: [f32; 16]| Mat4::from(arr))
}

/// Well-conditioned transform: rotation, non-degenerate scale and translation.
fn transform() -> impl Strategy<Value = Mat4> {
    (
        vec3(),
        0.0_f32..360.0,
        (0.5_f32..2.0, 0.5_f32..2.0, 0.5_f32..2.0),
        (-5.0_f32..5.0, -5.0_f32..5.0, -5.0_f32..5.0),
    )
        .prop_filter("rotation axis must not be zero", |(axis, ..)| axis.length() > 1.0)
        .prop_map(|(axis, angle, (sx, sy, sz), (tx, ty, tz))| {
            let axis: Vec3 = axis.normalized();
            Mat4::translate_mat(tx, ty, tz)
                .rotate(axis.x, axis.y, axis.z, angle)
                .scale(sx, sy, sz)
        })
}

fn close(a: &Mat4, b: &Mat4, tolerance: f32) -> bool {
    a.as_array()
        .iter()
        .zip(b.as_array().iter())
        .all(|(x, y)| (x - y).abs() <= tolerance)
}

proptest! {
    #[test]
    fn float_vector_identities(v2 in vec2(), v3 in vec3(), v4 in vec4()) {
        prop_assert_eq!(v2 + Vec2::ORIGIN, v2);
        prop_assert_eq!(v2 - v2, Vec2::ORIGIN);
        prop_assert_eq!(-(-v2), v2);

        prop_assert_eq!(v3 + Vec3::ORIGIN, v3);
        prop_assert_eq!(v3 - v3, Vec3::ORIGIN);
        prop_assert_eq!(-(-v3), v3);

        prop_assert_eq!(v4 + Vec4::ORIGIN, v4);
        prop_assert_eq!(v4 - v4, Vec4::ORIGIN);
        prop_assert_eq!(-(-v4), v4);
    }

    #[test]
    fn integer_vector_identities(v2 in vec2i(), v3 in vec3i()) {
        prop_assert_eq!(v2 + Vec2i::ORIGIN, v2);
        prop_assert_eq!(v2 - v2, Vec2i::ORIGIN);
        prop_assert_eq!(-(-v2), v2);

        prop_assert_eq!(v3 + Vec3i::ORIGIN, v3);
        prop_assert_eq!(v3 - v3, Vec3i::ORIGIN);
        prop_assert_eq!(-(-v3), v3);
    }

    #[test]
    fn normalized_vec2_is_unit_and_parallel(v in vec2()) {
        prop_assume!(v.length() > 0.01);
        let n: Vec2 = v.normalized();
        prop_assert!(almost_equal(n.length(), 1.0));
        prop_assert!((v.x * n.y - v.y * n.x).abs() <= 1e-5 * v.length());
    }

    #[test]
    fn normalized_vec3_is_unit_and_parallel(v in vec3()) {
        prop_assume!(v.length() > 0.01);
        let n: Vec3 = v.normalized();
        prop_assert!(almost_equal(n.length(), 1.0));
        prop_assert!(v.cross_product(n).length() <= 1e-5 * v.length());
    }

    #[test]
    fn normalized_integer_vectors_are_unit(v2 in vec2i(), v3 in vec3i()) {
        prop_assume!(v2 != Vec2i::ORIGIN && v3 != Vec3i::ORIGIN);
        prop_assert!(almost_equal(v2.normalized().length(), 1.0));
        prop_assert!(almost_equal(v3.normalized().length(), 1.0));
    }

    #[test]
    fn identity_is_neutral(v in vec4(), m in mat4()) {
        prop_assert_eq!(Mat4::IDENTITY * v, v);
        prop_assert_eq!(Mat4::IDENTITY * m, m);
        prop_assert_eq!(m * Mat4::IDENTITY, m);
    }

    #[test]
    fn transpose_is_involution(m in mat4()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn inverse_roundtrip(m in transform()) {
        let inverse: Mat4 = m.inverse().expect("transform is invertible");
        prop_assert!(close(&(m * inverse), &Mat4::IDENTITY, 1e-4));
        prop_assert!(close(&inverse.inverse().expect("inverse is invertible"), &m, 1e-3));
    }

    #[test]
    fn translation_moves_origin(x in component(), y in component(), z in component()) {
        prop_assert_eq!(
            Mat4::translate_mat(x, y, z) * Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(x, y, z, 1.0)
        );
    }

    #[test]
    fn wheel_stays_in_range(min in -1000..1000, span in 1..1000, value in -100_000..100_000) {
        let wrapped: i32 = wheel(min, min + span, value);
        prop_assert!((min..min + span).contains(&wrapped));
        prop_assert_eq!(pmod(wrapped - value, span), 0);
    }
}
