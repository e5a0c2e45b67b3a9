//! Point cloud generators for the cube halo and the header field.
//!
//! The two clouds are distributed differently (a spherical shell around the
//! cube, a uniform box behind the header text), so each has its own
//! generator instead of a shared parameterized one.

use glam::Vec3;
use rand::Rng;

/// `count` points on a shell between `radius_min` and `radius_min + radius_span`.
///
/// Both angles are drawn over a full turn, which clusters points towards the
/// poles of the shell; the halo has always looked that way.
pub fn halo_points<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    radius_min: f32,
    radius_span: f32,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let radius = radius_min + rng.gen::<f32>() * radius_span;
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = rng.gen::<f32>() * std::f32::consts::TAU;
            Vec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            )
        })
        .collect()
}

/// `count` points uniformly inside an axis-aligned cube of edge `extent`
/// centred on the origin.
pub fn field_points<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
                (rng.gen::<f32>() - 0.5) * extent,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn halo_stays_in_shell() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts = halo_points(&mut rng, 50, 3.0, 2.0);
        assert_eq!(pts.len(), 50);
        for p in pts {
            let r = p.length();
            assert!((3.0 - 1e-4..=5.0 + 1e-4).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn field_stays_in_box() {
        let mut rng = StdRng::seed_from_u64(11);
        let pts = field_points(&mut rng, 100, 10.0);
        assert_eq!(pts.len(), 100);
        assert!(pts.iter().all(|p| p.abs().max_element() <= 5.0));
    }

    #[test]
    fn same_seed_same_cloud() {
        let a = halo_points(&mut StdRng::seed_from_u64(3), 8, 3.0, 2.0);
        let b = halo_points(&mut StdRng::seed_from_u64(3), 8, 3.0, 2.0);
        assert_eq!(a, b);
    }
}
