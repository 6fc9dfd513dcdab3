use super::*;

/// Unit quad in the XY plane, facing +Z, with UVs aligned to X/Y.
fn quad() -> Geometry {
    Geometry {
        positions: vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ],
        indices: vec![0, 1, 2, 0, 2, 3],
        uvs: Some(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]),
        ..Geometry::default()
    }
}

#[test]
fn aabb_from_points_and_union() {
    let a = Aabb::from_points([Vec3::new(-1.0, 0.0, 2.0), Vec3::new(3.0, -2.0, 4.0)]);
    assert_eq!(a.min, Vec3::new(-1.0, -2.0, 2.0));
    assert_eq!(a.max, Vec3::new(3.0, 0.0, 4.0));

    let b = Aabb::from_points([Vec3::new(5.0, 5.0, 5.0)]);
    let u = a.union(b);
    assert_eq!(u.max, Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(u.min, a.min);

    assert!(Aabb::EMPTY.is_empty());
    assert_eq!(Aabb::EMPTY.union(b), b);
}

#[test]
fn aabb_size_center_max_dim() {
    let a = Aabb {
        min: Vec3::new(-1.0, -2.0, -3.0),
        max: Vec3::new(1.0, 2.0, 3.0),
    };
    assert_eq!(a.center(), Vec3::ZERO);
    assert_eq!(a.size(), Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(a.max_dim(), 6.0);
}

#[test]
fn aabb_transform_encloses_rotated_corners() {
    let a = Aabb {
        min: Vec3::new(-1.0, -1.0, -1.0),
        max: Vec3::new(1.0, 1.0, 1.0),
    };
    let rotated = a.transform(Mat4::from_rotation_y(std::f32::consts::FRAC_PI_4));
    let expect = 2.0f32.sqrt();
    assert!((rotated.max.x - expect).abs() < 1e-5);
    assert!((rotated.max.z - expect).abs() < 1e-5);
    assert!((rotated.max.y - 1.0).abs() < 1e-6);

    // Translation moves the box whole.
    let moved = a.transform(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
    assert_eq!(moved.center(), Vec3::new(10.0, 0.0, 0.0));
}

#[test]
fn computed_normals_face_out_of_the_quad() {
    let mut g = quad();
    ensure_shading_attributes(&mut g);
    let normals = g.normals.as_ref().unwrap();
    assert_eq!(normals.len(), 4);
    for n in normals {
        assert!((*n - Vec3::Z).length() < 1e-6, "normal {n} should be +Z");
    }
}

#[test]
fn existing_normals_are_left_alone() {
    let mut g = quad();
    g.normals = Some(vec![Vec3::X; 4]);
    ensure_shading_attributes(&mut g);
    assert_eq!(g.normals.as_ref().unwrap()[0], Vec3::X);
}

#[test]
fn tangents_follow_the_uv_x_axis() {
    let mut g = quad();
    ensure_shading_attributes(&mut g);
    let tangents = g.tangents.as_ref().unwrap();
    assert_eq!(tangents.len(), 4);
    for t in tangents {
        assert!((t.truncate() - Vec3::X).length() < 1e-5, "tangent {t}");
        assert_eq!(t.w, 1.0);
    }
}

#[test]
fn no_tangents_without_uvs() {
    let mut g = quad();
    g.uvs = None;
    ensure_shading_attributes(&mut g);
    assert!(g.tangents.is_none());
}

#[test]
fn bounds_are_recomputed() {
    let mut g = quad();
    ensure_shading_attributes(&mut g);
    let aabb = g.aabb.unwrap();
    assert_eq!(aabb.min, Vec3::ZERO);
    assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 0.0));

    let sphere = g.sphere.unwrap();
    assert!((sphere.center - Vec3::new(0.5, 0.5, 0.0)).length() < 1e-6);
    assert!((sphere.radius - (0.5f32 * 2.0f32.sqrt())).abs() < 1e-5);

    // A stale box is replaced, not trusted.
    g.positions.push(Vec3::new(9.0, 0.0, 0.0));
    g.normals.as_mut().unwrap().push(Vec3::Z);
    g.uvs.as_mut().unwrap().push(Vec2::ZERO);
    g.tangents.as_mut().unwrap().push(Vec4::new(1.0, 0.0, 0.0, 1.0));
    ensure_shading_attributes(&mut g);
    assert_eq!(g.aabb.unwrap().max.x, 9.0);
}

#[test]
fn validate_catches_structural_defects() {
    let mut g = quad();
    assert!(g.validate().is_ok());

    g.indices.push(0);
    assert!(g.validate().is_err()); // not a triangle list

    let mut g = quad();
    g.indices[0] = 99;
    assert!(g.validate().is_err()); // index out of bounds

    let mut g = quad();
    g.uvs.as_mut().unwrap().pop();
    assert!(g.validate().is_err()); // misaligned attribute
}
