//! Property tests for the index/physical coordinate mapping and for the
//! rigid composition performed by the in-place resample filter.

use ndarray::{ArrayD, IxDyn};
use proptest::prelude::*;
use rinplace_core::spatial::{Direction, Point, Spacing, Vector};
use rinplace_core::{Image, ResampleInPlaceFilter, RigidTransform};

const D: usize = 3;

fn make_rotation(angle_x: f64, angle_y: f64, angle_z: f64) -> Direction<D> {
    let cx = angle_x.cos();
    let sx = angle_x.sin();
    let cy = angle_y.cos();
    let sy = angle_y.sin();
    let cz = angle_z.cos();
    let sz = angle_z.sin();

    let rz = nalgebra::SMatrix::<f64, 3, 3>::new(
        cz, -sz, 0.0, //
        sz, cz, 0.0, //
        0.0, 0.0, 1.0,
    );
    let ry = nalgebra::SMatrix::<f64, 3, 3>::new(
        cy, 0.0, sy, //
        0.0, 1.0, 0.0, //
        -sy, 0.0, cy,
    );
    let rx = nalgebra::SMatrix::<f64, 3, 3>::new(
        1.0, 0.0, 0.0, //
        0.0, cx, -sx, //
        0.0, sx, cx,
    );

    Direction(rx * ry * rz)
}

fn make_image(
    origin: Point<D>,
    spacing: Spacing<D>,
    direction: Direction<D>,
) -> Image<i16, D> {
    // Minimal buffer; these properties do not read voxel values.
    let data = ArrayD::from_elem(IxDyn(&[2, 2, 2]), 0i16);
    Image::new(data, origin, spacing, direction).unwrap()
}

proptest! {
    #[test]
    fn coordinate_roundtrip(
        ox in -100.0f64..100.0, oy in -100.0f64..100.0, oz in -100.0f64..100.0,
        sx in 0.1f64..5.0, sy in 0.1f64..5.0, sz in 0.1f64..5.0,
        ax in -3.14f64..3.14, ay in -3.14f64..3.14, az in -3.14f64..3.14,
        px in -50.0f64..50.0, py in -50.0f64..50.0, pz in -50.0f64..50.0
    ) {
        let image = make_image(
            Point::<D>::new([ox, oy, oz]),
            Spacing::<D>::new([sx, sy, sz]),
            make_rotation(ax, ay, az),
        );
        let point = Point::<D>::new([px, py, pz]);

        let index = image.transform_physical_point_to_continuous_index(&point);
        let recovered = image.transform_continuous_index_to_physical_point(&index);

        for i in 0..D {
            prop_assert!(
                (point[i] - recovered[i]).abs() < 1e-4,
                "axis {} mismatch: {} vs {}", i, point[i], recovered[i]
            );
        }
    }

    #[test]
    fn resampled_lattice_follows_the_rigid_motion(
        ox in -100.0f64..100.0, oy in -100.0f64..100.0, oz in -100.0f64..100.0,
        sx in 0.1f64..5.0, sy in 0.1f64..5.0, sz in 0.1f64..5.0,
        ax in -3.14f64..3.14, ay in -3.14f64..3.14, az in -3.14f64..3.14,
        rx in -3.14f64..3.14, ry in -3.14f64..3.14, rz in -3.14f64..3.14,
        tx in -200.0f64..200.0, ty in -200.0f64..200.0, tz in -200.0f64..200.0,
        ix in 0.0f64..8.0, iy in 0.0f64..8.0, iz in 0.0f64..8.0
    ) {
        let input = make_image(
            Point::<D>::new([ox, oy, oz]),
            Spacing::<D>::new([sx, sy, sz]),
            make_rotation(ax, ay, az),
        );
        let transform = RigidTransform::from_euler_angles(rx, ry, rz)
            .with_translation(Vector::<D>::new([tx, ty, tz]));
        let output = ResampleInPlaceFilter::new()
            .with_rigid_transform(transform)
            .apply(&input)
            .unwrap();

        // Spacing is invariant under any rigid motion.
        for i in 0..D {
            prop_assert!((output.spacing()[i] - input.spacing()[i]).abs() < 1e-12);
        }

        // The new descriptor places every index where the rigid motion
        // moved its old physical position.
        let index = Point::<D>::new([ix, iy, iz]);
        let before = input.transform_continuous_index_to_physical_point(&index);
        let after = output.transform_continuous_index_to_physical_point(&index);
        let moved = transform.transform_point(&before);
        for i in 0..D {
            prop_assert!(
                (after[i] - moved[i]).abs() < 1e-6,
                "axis {} mismatch: {} vs {}", i, after[i], moved[i]
            );
        }

        // Composing two orthonormal matrices keeps the output orthonormal.
        prop_assert!(output.direction().is_orthogonal());
    }

    #[test]
    fn inverse_transform_restores_the_descriptor(
        rx in -3.14f64..3.14, ry in -3.14f64..3.14, rz in -3.14f64..3.14,
        tx in -100.0f64..100.0, ty in -100.0f64..100.0, tz in -100.0f64..100.0
    ) {
        let input = make_image(
            Point::<D>::new([5.0, -10.0, 20.0]),
            Spacing::<D>::new([1.0, 1.5, 2.0]),
            Direction::<D>::identity(),
        );
        let transform = RigidTransform::from_euler_angles(rx, ry, rz)
            .with_translation(Vector::<D>::new([tx, ty, tz]));

        let forward = ResampleInPlaceFilter::new()
            .with_rigid_transform(transform)
            .apply(&input)
            .unwrap();
        let back = ResampleInPlaceFilter::new()
            .with_rigid_transform(transform.inverse())
            .apply(&forward)
            .unwrap();

        for i in 0..D {
            prop_assert!((back.origin()[i] - input.origin()[i]).abs() < 1e-6);
        }
        for i in 0..D {
            for j in 0..D {
                prop_assert!(
                    (back.direction()[(i, j)] - input.direction()[(i, j)]).abs() < 1e-9
                );
            }
        }
    }
}
