use approx::assert_relative_eq;
use quadwarp_homography::{
    embed_as_mat4, get_perspective_transform, points_from_flat, solve_homography,
    HomographyCoefficients, HomographyError, PerspectiveTransform, Point2d, PointSet,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

const UNIT_SQUARE: [[f64; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// A convex quad obtained by jittering the corners of an axis-aligned rectangle.
fn random_quad(rng: &mut StdRng, width: f64, height: f64, offset: [f64; 2]) -> [Point2d; 4] {
    let corners = [[0.0, 0.0], [width, 0.0], [width, height], [0.0, height]];
    corners.map(|[x, y]| {
        Point2d::new(
            offset[0] + x + rng.random_range(-0.2f64..0.2) * width,
            offset[1] + y + rng.random_range(-0.2f64..0.2) * height,
        )
    })
}

#[test]
fn random_quads_map_exactly() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let src = random_quad(&mut rng, 1.0, 1.0, [0.0, 0.0]);
        let dst = random_quad(&mut rng, 640.0, 480.0, [100.0, 50.0]);

        let h = solve_homography(&src, &dst)?;
        assert_eq!(h.c3, 1.0);

        for (s, d) in src.iter().zip(dst.iter()) {
            let p = h.transform_point(*s).unwrap();
            assert_relative_eq!(p.x, d.x, max_relative = 1e-6);
            assert_relative_eq!(p.y, d.y, max_relative = 1e-6);
        }
    }
    Ok(())
}

/// A random quad between 1e-6 and 1e6 units wide, placed up to 1e5 units from the
/// origin.
fn random_placed_quad(rng: &mut StdRng) -> ([Point2d; 4], f64) {
    let width = 10f64.powf(rng.random_range(-6.0..=6.0));
    let height = width * rng.random_range(0.5..2.0);
    // further than 1e4 widths out, f64 keeps too few digits of the corners
    let reach = (1e4 * width).min(1e5);
    let offset = [
        rng.random_range(-reach..=reach),
        rng.random_range(-reach..=reach),
    ];
    (random_quad(rng, width, height, offset), width.max(height))
}

#[test]
fn random_quads_map_exactly_at_any_scale() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..500 {
        let (src, src_size) = random_placed_quad(&mut rng);
        let (dst, dst_size) = random_placed_quad(&mut rng);

        let t = PerspectiveTransform::new(&src, &dst)?;
        assert_eq!(t.coeffs().c3, 1.0);

        for (s, d) in src.iter().zip(dst.iter()) {
            let p = t.transform(*s).unwrap();
            assert_relative_eq!(p.x, d.x, epsilon = 1e-6 * dst_size);
            assert_relative_eq!(p.y, d.y, epsilon = 1e-6 * dst_size);

            let p = t.transform_inverse(*d).unwrap();
            assert_relative_eq!(p.x, s.x, epsilon = 1e-6 * src_size);
            assert_relative_eq!(p.y, s.y, epsilon = 1e-6 * src_size);
        }
    }
    Ok(())
}

#[test]
fn identity_when_src_equals_dst() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(7);
    let quad = random_quad(&mut rng, 4.0, 3.0, [-2.0, -1.5]);
    let h = solve_homography(&quad, &quad)?;
    let expected = HomographyCoefficients::IDENTITY.to_array();
    for (v, e) in h.to_array().iter().zip(expected.iter()) {
        assert_relative_eq!(*v, *e, epsilon = 1e-6);
    }
    Ok(())
}

#[test]
fn embedded_matrix_keeps_depth() -> Result<(), HomographyError> {
    let mut rng = StdRng::seed_from_u64(3);
    let src = random_quad(&mut rng, 2.0, 1.0, [-1.0, -0.5]);
    let dst = random_quad(&mut rng, 3.0, 2.0, [0.5, 0.5]);
    let m = get_perspective_transform(&src, &dst)?;

    for _ in 0..50 {
        let x: f64 = rng.random_range(-1.0..1.0);
        let y: f64 = rng.random_range(-0.5..0.5);
        let z: f64 = rng.random_range(-100.0..100.0);
        let row = m.row(2);
        assert_eq!(row.x * x + row.y * y + row.z * z + row.w, z);
    }

    // corners on any depth plane land on the destination corners
    for (s, d) in src.iter().zip(dst.iter()) {
        let p = m.transform_point3([s.x, s.y, 0.0]).unwrap();
        assert_relative_eq!(p[0], d.x, epsilon = 1e-9);
        assert_relative_eq!(p[1], d.y, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn collinear_source_is_degenerate() {
    let src = [[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [0.0, 1.0]].map(Point2d::from);
    let dst = UNIT_SQUARE.map(Point2d::from);
    let err = solve_homography(&src, &dst).unwrap_err();
    assert!(matches!(err, HomographyError::DegenerateConfiguration(_)));
    assert!(get_perspective_transform(&src, &dst).is_err());
}

#[test]
fn wrong_cardinality_is_rejected() {
    let square = UNIT_SQUARE.map(Point2d::from);
    let five = [
        square[0],
        square[1],
        square[2],
        square[3],
        Point2d::new(0.5, 0.5),
    ];

    for (src, dst, set, actual) in [
        (&square[..3], &square[..], PointSet::Source, 3),
        (&five[..], &square[..], PointSet::Source, 5),
        (&square[..], &square[..3], PointSet::Destination, 3),
        (&square[..], &five[..], PointSet::Destination, 5),
    ] {
        assert_eq!(
            solve_homography(src, dst),
            Err(HomographyError::InvalidInputCardinality {
                set,
                expected: 4,
                actual,
            })
        );
    }
}

#[test]
fn unit_square_to_scaled_square() -> Result<(), HomographyError> {
    let src = points_from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])?;
    let dst = points_from_flat(&[0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0])?;

    let h = solve_homography(&src, &dst)?;
    let expected = [2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0];
    for (v, e) in h.to_array().iter().zip(expected.iter()) {
        assert_relative_eq!(*v, *e, epsilon = 1e-9);
    }

    let m = embed_as_mat4(&h);
    let rows = m.to_rows_array();
    let expected_rows = [
        [2.0, 0.0, 0.0, 0.0],
        [0.0, 2.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];
    for (r, expected_row) in expected_rows.iter().enumerate() {
        for (c, e) in expected_row.iter().enumerate() {
            assert_relative_eq!(rows[4 * r + c], *e, epsilon = 1e-9);
        }
    }
    Ok(())
}
