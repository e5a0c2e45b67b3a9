use crate::camera::Ray;
use crate::section::SectionId;
use glam::Mat4;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub section: SectionId,
    /// Ray parameter in world units.
    pub distance: f32,
}

/// Intersect `ray` with a square quad lying in the local XY plane of `model`,
/// facing +Z, with the given half extent. Only the front side is hit.
#[inline]
pub fn ray_quad(ray: &Ray, model: &Mat4, half_extent: f32) -> Option<f32> {
    let inv = model.inverse();
    let o = inv.transform_point3(ray.origin);
    // Unnormalized so that `t` stays in world units.
    let d = inv.transform_vector3(ray.dir);
    if d.z >= -f32::EPSILON {
        return None;
    }
    let t = -o.z / d.z;
    if !(t >= 0.0) {
        return None;
    }
    let p = o + d * t;
    (p.x.abs() <= half_extent && p.y.abs() <= half_extent).then_some(t)
}

/// All front-facing hits along `ray`, nearest first.
pub fn intersect_all<I>(ray: &Ray, quads: I, half_extent: f32) -> SmallVec<[Hit; 6]>
where
    I: IntoIterator<Item = (SectionId, Mat4)>,
{
    let mut hits: SmallVec<[Hit; 6]> = quads
        .into_iter()
        .filter_map(|(section, model)| {
            ray_quad(ray, &model, half_extent).map(|distance| Hit { section, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[inline]
pub fn pick_nearest<I>(ray: &Ray, quads: I, half_extent: f32) -> Option<Hit>
where
    I: IntoIterator<Item = (SectionId, Mat4)>,
{
    intersect_all(ray, quads, half_extent).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    fn ray(origin: Vec3, toward: Vec3) -> Ray {
        Ray {
            origin,
            dir: (toward - origin).normalize(),
        }
    }

    #[test]
    fn front_side_hit_reports_distance() {
        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0));
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        assert!((ray_quad(&r, &model, 1.9).unwrap() - 8.0).abs() < 1e-5);
    }

    #[test]
    fn back_side_and_outside_miss() {
        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0));
        let from_behind = ray(Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(ray_quad(&from_behind, &model, 1.9), None);
        let beside = ray(Vec3::new(3.0, 0.0, 10.0), Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(ray_quad(&beside, &model, 1.9), None);
        let away = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(ray_quad(&away, &model, 1.9), None);
    }

    #[test]
    fn scaled_quad_grows_hit_area() {
        let base = Mat4::from_rotation_translation(
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            Vec3::new(2.0, 0.0, 0.0),
        );
        let r = ray(Vec3::new(10.0, 0.0, 1.95), Vec3::new(0.0, 0.0, 1.95));
        assert_eq!(ray_quad(&r, &base, 1.9), None);
        let grown = base * Mat4::from_scale(Vec3::splat(1.1));
        assert!(ray_quad(&r, &grown, 1.9).is_some());
    }

    #[test]
    fn nearest_wins() {
        let near = Mat4::from_translation(Vec3::new(0.0, 0.0, 2.0));
        let far = Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0));
        let r = ray(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let hits = intersect_all(
            &r,
            [(SectionId::Skills, far), (SectionId::About, near)],
            1.9,
        );
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].section, SectionId::About);
        assert_eq!(
            pick_nearest(&r, [(SectionId::Skills, far)], 1.9).map(|h| h.section),
            Some(SectionId::Skills)
        );
    }
}
