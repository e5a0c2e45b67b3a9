//! Orbit camera controls: drag to rotate around the target, wheel to zoom.
//!
//! Rotation input accumulates as a pending spherical delta that is bled into
//! the camera a fraction at a time (damping). Zoom is applied on the next
//! update and the distance is always clamped to the configured range.

use crate::camera::Camera;
use crate::constants::{
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPS, ORBIT_ROTATE_SPEED,
    ORBIT_ZOOM_STEP,
};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitConfig {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Fraction of the pending rotation applied per 60 Hz frame.
    pub damping: f32,
    pub rotate_speed: f32,
    /// Distance factor for one wheel notch towards the target.
    pub zoom_step: f32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    cfg: OrbitConfig,
    target: Vec3,
    radius: f32,
    theta: f32,
    phi: f32,
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    /// Attach to `camera`, adopting its current eye and target. The eye is
    /// moved immediately if it lies outside the distance range.
    pub fn new(camera: &mut Camera, cfg: OrbitConfig) -> Self {
        let offset = camera.eye - camera.target;
        let radius = offset.length().max(f32::EPSILON);
        let mut controls = Self {
            cfg,
            target: camera.target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
            drag_from: None,
        };
        controls.clamp();
        controls.apply(camera);
        controls
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn begin_drag(&mut self, pos: Vec2) {
        self.drag_from = Some(pos);
    }

    /// Pointer moved while dragging; `viewport_height` scales pixels to angle
    /// so a full-height drag turns the camera one revolution.
    pub fn drag_to(&mut self, pos: Vec2, viewport_height: f32) {
        let Some(from) = self.drag_from else {
            return;
        };
        if viewport_height > 0.0 {
            let d = (pos - from) * (TAU / viewport_height) * self.cfg.rotate_speed;
            self.pending_theta -= d.x;
            self.pending_phi -= d.y;
        }
        self.drag_from = Some(pos);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Positive `delta_y` (scrolling down) moves away from the target.
    pub fn wheel(&mut self, delta_y: f32) {
        if delta_y > 0.0 {
            self.pending_scale /= self.cfg.zoom_step;
        } else if delta_y < 0.0 {
            self.pending_scale *= self.cfg.zoom_step;
        }
    }

    /// Apply pending input and write the new eye into `camera`.
    pub fn update(&mut self, dt_sec: f32, camera: &mut Camera) {
        let k = 1.0 - (1.0 - self.cfg.damping).powf(dt_sec.max(0.0) * 60.0);
        self.theta += self.pending_theta * k;
        self.phi += self.pending_phi * k;
        self.pending_theta *= 1.0 - k;
        self.pending_phi *= 1.0 - k;
        self.radius *= self.pending_scale;
        self.pending_scale = 1.0;
        self.clamp();
        self.apply(camera);
    }

    fn clamp(&mut self) {
        self.radius = self
            .radius
            .clamp(self.cfg.min_distance, self.cfg.max_distance);
        self.phi = self.phi.clamp(ORBIT_POLAR_EPS, PI - ORBIT_POLAR_EPS);
    }

    fn apply(&self, camera: &mut Camera) {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let offset = Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta) * self.radius;
        camera.eye = self.target + offset;
        camera.target = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_clamps_far_start_position() {
        let mut cam = Camera::default();
        let dir = cam.eye.normalize();
        let controls = OrbitControls::new(&mut cam, OrbitConfig::default());
        assert!((controls.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-5);
        assert!((cam.eye.length() - ORBIT_MAX_DISTANCE).abs() < 1e-4);
        assert!((cam.eye.normalize() - dir).length() < 1e-5);
    }

    #[test]
    fn damping_spreads_rotation_over_frames() {
        let mut cam = Camera::default();
        let mut controls = OrbitControls::new(&mut cam, OrbitConfig::default());
        let start = cam.eye;
        controls.begin_drag(Vec2::new(100.0, 100.0));
        controls.drag_to(Vec2::new(160.0, 100.0), 600.0);
        controls.end_drag();
        controls.update(1.0 / 60.0, &mut cam);
        let first = cam.eye;
        assert!((first - start).length() > 0.0);
        for _ in 0..600 {
            controls.update(1.0 / 60.0, &mut cam);
        }
        let settled = cam.eye;
        controls.update(1.0 / 60.0, &mut cam);
        assert!((cam.eye - settled).length() < 1e-4);
        // Height is untouched by a purely horizontal drag.
        assert!((settled.y - start.y).abs() < 1e-3);
    }

    #[test]
    fn wheel_never_escapes_range() {
        let mut cam = Camera::default();
        let mut controls = OrbitControls::new(&mut cam, OrbitConfig::default());
        for _ in 0..200 {
            controls.wheel(-1.0);
            controls.update(0.016, &mut cam);
        }
        assert!((controls.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-5);
        for _ in 0..200 {
            controls.wheel(3.0);
            controls.update(0.016, &mut cam);
        }
        assert!((controls.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-5);
    }

    #[test]
    fn drag_without_begin_is_ignored() {
        let mut cam = Camera::default();
        let mut controls = OrbitControls::new(&mut cam, OrbitConfig::default());
        let eye = cam.eye;
        controls.drag_to(Vec2::new(500.0, 500.0), 600.0);
        controls.update(1.0, &mut cam);
        assert!((cam.eye - eye).length() < 1e-5);
    }
}
