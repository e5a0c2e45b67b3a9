//! The decorative header strip: a slowly turning particle field behind two
//! fading, floating text labels. It takes no input and reports nothing; the
//! web layer ticks it and paints [`AmbientScene::frame`] onto a 2D canvas.

use crate::camera::{Camera, Viewport};
use crate::constants::{
    HALO_SPIN_RATE, HEADER_CAMERA_Z, HEADER_FADE_SEC, HEADER_FIELD_EXTENT, HEADER_FLOAT_AMPLITUDE,
    HEADER_HEIGHT_PX, HEADER_LABEL_SIZE, HEADER_PARTICLE_COUNT, HEADER_PARTICLE_SIZE,
    PARTICLE_COLOR, PARTICLE_OPACITY,
};
use crate::motion::Spin;
use crate::particles::field_points;
use crate::tween::{Easing, TweenSpec, Tweened};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLabelSpec {
    pub text: &'static str,
    pub base_y: f32,
    pub fade_delay_sec: f32,
    /// Offset added to time in the float wave.
    pub phase: f32,
}

pub const HEADER_LABELS: [AmbientLabelSpec; 2] = [
    AmbientLabelSpec {
        text: "Welcome to",
        base_y: 1.0,
        fade_delay_sec: 0.5,
        phase: 0.0,
    },
    AmbientLabelSpec {
        text: "My Portfolio",
        base_y: 0.0,
        fade_delay_sec: 1.5,
        phase: 1.0,
    },
];

#[derive(Clone, Debug)]
pub struct AmbientConfig {
    pub particle_count: usize,
    pub field_extent: f32,
    pub spin: [f32; 2],
    pub fade_sec: f32,
    pub float_amplitude: f32,
    pub height_px: f32,
    pub seed: u64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            particle_count: HEADER_PARTICLE_COUNT,
            field_extent: HEADER_FIELD_EXTENT,
            spin: HALO_SPIN_RATE,
            fade_sec: HEADER_FADE_SEC,
            float_amplitude: HEADER_FLOAT_AMPLITUDE,
            height_px: HEADER_HEIGHT_PX,
            seed: 0,
        }
    }
}

#[derive(Clone, Debug)]
struct AmbientLabel {
    spec: AmbientLabelSpec,
    opacity: Tweened<f32>,
    y: f32,
}

/// A projected point, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientDot {
    pub center: Vec2,
    pub radius_px: f32,
}

/// A projected label rectangle, in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientText {
    pub text: &'static str,
    pub center: Vec2,
    pub size: Vec2,
    pub opacity: f32,
}

#[derive(Clone, Debug, Default)]
pub struct AmbientFrame {
    pub width_px: f32,
    pub height_px: f32,
    pub dot_rgba: [f32; 4],
    pub dots: Vec<AmbientDot>,
    pub texts: Vec<AmbientText>,
}

pub struct AmbientScene {
    cfg: AmbientConfig,
    camera: Camera,
    viewport: Viewport,
    points: Vec<Vec3>,
    spin: Spin,
    labels: Vec<AmbientLabel>,
    elapsed: f32,
}

impl AmbientScene {
    pub fn new(cfg: AmbientConfig, width_px: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let points = field_points(&mut rng, cfg.particle_count, cfg.field_extent);
        let labels = HEADER_LABELS
            .iter()
            .map(|spec| {
                let mut opacity = Tweened::new(0.0);
                opacity.start(
                    TweenSpec::to(1.0, cfg.fade_sec)
                        .delay(spec.fade_delay_sec)
                        .easing(Easing::QuadOut),
                );
                AmbientLabel {
                    spec: *spec,
                    opacity,
                    y: spec.base_y,
                }
            })
            .collect();
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, HEADER_CAMERA_Z),
            target: Vec3::ZERO,
            ..Camera::default()
        };
        let mut scene = Self {
            viewport: Viewport::sized(width_px.max(1.0), cfg.height_px),
            spin: Spin::new(cfg.spin),
            camera,
            points,
            labels,
            elapsed: 0.0,
            cfg,
        };
        scene.resize(width_px);
        scene
    }

    /// The strip keeps its fixed height; only the width follows the window.
    pub fn resize(&mut self, width_px: f32) {
        let vp = Viewport::sized(width_px, self.cfg.height_px);
        if self.camera.set_viewport(&vp).is_ok() {
            self.viewport = vp;
        }
    }

    pub fn tick(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        self.elapsed += dt;
        self.spin.advance(dt);
        for label in &mut self.labels {
            label.opacity.advance(dt);
            label.y = label.spec.base_y
                + (self.elapsed + label.spec.phase).sin() * self.cfg.float_amplitude;
        }
    }

    pub fn label_opacity(&self, text: &str) -> Option<f32> {
        self.labels
            .iter()
            .find(|l| l.spec.text == text)
            .map(|l| l.opacity.value())
    }

    pub fn label_y(&self, text: &str) -> Option<f32> {
        self.labels.iter().find(|l| l.spec.text == text).map(|l| l.y)
    }

    pub fn frame(&self) -> AmbientFrame {
        let rot = self.spin.matrix();
        let view = self.camera.view_matrix();
        // Points shrink with distance like a size-attenuated point sprite.
        let half_h = self.viewport.height * 0.5;
        let dots = self
            .points
            .iter()
            .filter_map(|p| {
                let world = rot.transform_point3(*p);
                let depth = -view.transform_point3(world).z;
                if depth <= self.camera.znear {
                    return None;
                }
                let center = self.camera.project_client(world, &self.viewport)?;
                Some(AmbientDot {
                    center,
                    radius_px: 0.5 * HEADER_PARTICLE_SIZE * half_h / depth,
                })
            })
            .collect();

        let half = Vec3::new(HEADER_LABEL_SIZE[0] * 0.5, HEADER_LABEL_SIZE[1] * 0.5, 0.0);
        let texts = self
            .labels
            .iter()
            .filter_map(|l| {
                let c = Vec3::new(0.0, l.y, 0.0);
                let a = self.camera.project_client(c - half, &self.viewport)?;
                let b = self.camera.project_client(c + half, &self.viewport)?;
                Some(AmbientText {
                    text: l.spec.text,
                    center: (a + b) * 0.5,
                    size: (b - a).abs(),
                    opacity: l.opacity.value(),
                })
            })
            .collect();

        AmbientFrame {
            width_px: self.viewport.width,
            height_px: self.viewport.height,
            dot_rgba: [
                PARTICLE_COLOR[0],
                PARTICLE_COLOR[1],
                PARTICLE_COLOR[2],
                PARTICLE_OPACITY,
            ],
            dots,
            texts,
        }
    }
}
