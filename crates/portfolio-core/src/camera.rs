//! Perspective camera, viewport bounds and screen-space ray casting.
//!
//! All picking goes through [`Camera::ray_from_client`], which derives NDC
//! from the container bounds passed in at that moment. The aspect used for
//! the ray is whatever [`Camera::set_viewport`] last accepted, so callers keep
//! the two in sync by resizing before picking.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_START};
use crate::error::{PortfolioError, Result};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Container rectangle in CSS pixels, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A viewport anchored at the page origin.
    pub fn sized(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn aspect(&self) -> Result<f32> {
        if self.is_empty() {
            return Err(PortfolioError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.width / self.height)
    }

    /// Client coordinates to normalized device coordinates (x right, y up).
    pub fn client_to_ndc(&self, client: Vec2) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let x = (client.x - self.left) / self.width * 2.0 - 1.0;
        let y = -((client.y - self.top) / self.height) * 2.0 + 1.0;
        Some(Vec2::new(x, y))
    }

    /// Inverse of [`Viewport::client_to_ndc`].
    pub fn ndc_to_client(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            self.left + (ndc.x + 1.0) * 0.5 * self.width,
            self.top + (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_START),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Adopt the aspect of `viewport`. Empty viewports are rejected and the
    /// previous aspect is kept.
    pub fn set_viewport(&mut self, viewport: &Viewport) -> Result<()> {
        self.aspect = viewport.aspect()?;
        Ok(())
    }

    /// World-space ray through an NDC point, starting at the eye.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize(),
        }
    }

    pub fn ray_from_client(&self, client: Vec2, viewport: &Viewport) -> Option<Ray> {
        viewport
            .client_to_ndc(client)
            .map(|ndc| self.ray_from_ndc(ndc))
    }

    /// Project a world point to NDC. `None` when the point is behind the eye.
    pub fn project_ndc(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        (clip.w > 0.0).then(|| Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }

    pub fn project_client(&self, world: Vec3, viewport: &Viewport) -> Option<Vec2> {
        self.project_ndc(world).map(|ndc| viewport.ndc_to_client(ndc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_and_center() {
        let vp = Viewport::new(10.0, 20.0, 800.0, 600.0);
        let c = vp.client_to_ndc(Vec2::new(410.0, 320.0)).unwrap();
        assert!(c.length() < 1e-6);
        let tl = vp.client_to_ndc(Vec2::new(10.0, 20.0)).unwrap();
        assert_eq!(tl, Vec2::new(-1.0, 1.0));
        let back = vp.ndc_to_client(Vec2::new(0.5, -0.25));
        let again = vp.client_to_ndc(back).unwrap();
        assert!((again - Vec2::new(0.5, -0.25)).length() < 1e-5);
    }

    #[test]
    fn empty_viewport_keeps_aspect() {
        let mut cam = Camera::default();
        cam.set_viewport(&Viewport::sized(800.0, 600.0)).unwrap();
        let err = cam.set_viewport(&Viewport::sized(0.0, 300.0));
        assert!(matches!(err, Err(PortfolioError::EmptyViewport { .. })));
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!(Viewport::sized(100.0, 0.0)
            .client_to_ndc(Vec2::ZERO)
            .is_none());
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = Camera::default();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.eye).normalize();
        assert!((ray.dir - expected).length() < 1e-4);
        assert_eq!(ray.origin, cam.eye);
    }

    #[test]
    fn projection_round_trips_through_ray() {
        let mut cam = Camera::default();
        let vp = Viewport::sized(400.0, 300.0);
        cam.set_viewport(&vp).unwrap();
        let p = Vec3::new(1.0, 0.5, -0.5);
        let px = cam.project_client(p, &vp).unwrap();
        let ray = cam.ray_from_client(px, &vp).unwrap();
        let to_p = (p - ray.origin).normalize();
        assert!(ray.dir.dot(to_p) > 0.99999);
    }
}
