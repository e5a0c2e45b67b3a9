//! The interactive navigation cube.
//!
//! Six faces, each bound to one [`Section`], sit on the sides of a cube that
//! slowly spins inside a particle halo. Pointer moves highlight the nearest
//! face under the cursor; a click presses that face and reports its section
//! through the callback given at construction. Everything here is plain data
//! and math: the web layer forwards DOM events in, calls [`CubeScene::tick`]
//! from the frame loop, and draws whatever [`CubeScene::snapshot`] returns.

use crate::camera::{Camera, Viewport};
use crate::constants::*;
use crate::motion::Spin;
use crate::orbit::{OrbitConfig, OrbitControls};
use crate::particles::halo_points;
use crate::picking::{self, Hit};
use crate::section::{Section, SectionId, SECTIONS};
use crate::tween::{Easing, TweenSpec, Tweened};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI};

/// Tunables for one cube scene. `Default` gives the production values.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub entrance_sec: f32,
    pub hover_sec: f32,
    pub press_sec: f32,
    pub group_spin: [f32; 2],
    pub halo_spin: [f32; 2],
    pub halo_count: usize,
    pub seed: u64,
    pub orbit: OrbitConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            entrance_sec: ENTRANCE_SEC,
            hover_sec: HOVER_TWEEN_SEC,
            press_sec: PRESS_TWEEN_SEC,
            group_spin: GROUP_SPIN_RATE,
            halo_spin: HALO_SPIN_RATE,
            halo_count: HALO_PARTICLE_COUNT,
            seed: 0,
            orbit: OrbitConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverOutcome {
    pub hovered: Option<SectionId>,
    pub cursor: Cursor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceState {
    Idle,
    Hovered,
}

/// One clickable side of the cube.
#[derive(Clone, Debug)]
pub struct Face {
    section: Section,
    /// Position and rotation inside the group, without the animated scale.
    local: Mat4,
    normal: Vec3,
    state: FaceState,
    pub opacity: Tweened<f32>,
    pub scale: Tweened<f32>,
}

impl Face {
    fn new(section: Section) -> Self {
        let dir = section.direction_vec3();
        let rotation = face_rotation(dir);
        Self {
            section,
            local: Mat4::from_rotation_translation(rotation, dir * CUBE_HALF_EXTENT),
            normal: rotation * Vec3::Z,
            state: FaceState::Idle,
            opacity: Tweened::new(FACE_BASE_OPACITY),
            scale: Tweened::new(FACE_BASE_SCALE),
        }
    }

    pub fn section(&self) -> SectionId {
        self.section.id
    }

    pub fn color_rgb(&self) -> [f32; 3] {
        self.section.color_rgb()
    }

    pub fn state(&self) -> FaceState {
        self.state
    }

    /// Outward normal in group space.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    fn model(&self, group: &Mat4) -> Mat4 {
        *group * self.local * Mat4::from_scale(Vec3::splat(self.scale.value()))
    }

    fn label_model(&self, group: &Mat4) -> Mat4 {
        *group * Mat4::from_translation(self.normal * LABEL_NORMAL_OFFSET) * self.local
    }

    fn relax(&mut self, secs: f32) {
        self.state = FaceState::Idle;
        self.opacity.start(TweenSpec::to(FACE_BASE_OPACITY, secs));
        self.scale.start(TweenSpec::to(FACE_BASE_SCALE, secs));
    }

    fn highlight(&mut self, secs: f32) {
        self.state = FaceState::Hovered;
        self.opacity.start(TweenSpec::to(FACE_HOVER_OPACITY, secs));
        self.scale.start(TweenSpec::to(FACE_HOVER_SCALE, secs));
    }

    fn advance(&mut self, dt: f32) {
        self.opacity.advance(dt);
        self.scale.advance(dt);
    }
}

/// Orientation that turns a +Z facing quad towards `dir`, in XYZ Euler order.
fn face_rotation(dir: Vec3) -> Quat {
    let (mut rx, mut ry) = (0.0, 0.0);
    if dir.x != 0.0 {
        ry = FRAC_PI_2.copysign(dir.x);
    }
    if dir.y != 0.0 {
        rx = -FRAC_PI_2.copysign(dir.y);
    }
    if dir.z < 0.0 {
        ry = PI;
    }
    Quat::from_euler(EulerRot::XYZ, rx, ry, 0.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuadKind {
    /// Lit, solid colored face.
    Face { color: [f32; 3], opacity: f32 },
    /// Unlit text label; `slot` indexes the label atlas in section order.
    Label { slot: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadDraw {
    pub section: SectionId,
    /// Maps the unit quad ([-0.5, 0.5] in XY, facing +Z) to world space.
    pub model: Mat4,
    pub kind: QuadKind,
}

/// Everything needed to draw one frame, in world space.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub view_proj: Mat4,
    pub eye: Vec3,
    /// Faces and labels, back to front.
    pub quads: SmallVec<[QuadDraw; 12]>,
    pub wireframe: Vec<[Vec3; 2]>,
    pub particles: Vec<Vec3>,
}

pub struct CubeScene {
    cfg: SceneConfig,
    camera: Camera,
    orbit: OrbitControls,
    viewport: Viewport,
    faces: Vec<Face>,
    group_spin: Spin,
    group_scale: Tweened<f32>,
    halo_spin: Spin,
    halo: Vec<Vec3>,
    on_select: Option<Box<dyn FnMut(SectionId)>>,
    disposed: bool,
}

impl CubeScene {
    /// Build the scene for a container of size `viewport`. `on_select` runs
    /// once per click that lands on a face.
    pub fn new(
        cfg: SceneConfig,
        viewport: Viewport,
        on_select: impl FnMut(SectionId) + 'static,
    ) -> Self {
        let mut camera = Camera::default();
        if camera.set_viewport(&viewport).is_err() {
            log::warn!("[cube] created with an empty viewport, keeping default aspect");
        }
        let orbit = OrbitControls::new(&mut camera, cfg.orbit);
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let halo = halo_points(&mut rng, cfg.halo_count, HALO_RADIUS_MIN, HALO_RADIUS_SPAN);
        let mut group_scale = Tweened::new(0.0);
        group_scale.start(
            TweenSpec::to(1.0, cfg.entrance_sec).easing(Easing::BackOut(ENTRANCE_OVERSHOOT)),
        );
        Self {
            camera,
            orbit,
            viewport,
            faces: SECTIONS.iter().copied().map(Face::new).collect(),
            group_spin: Spin::new(cfg.group_spin),
            group_scale,
            halo_spin: Spin::new(cfg.halo_spin),
            halo,
            on_select: Some(Box::new(on_select)),
            disposed: false,
            cfg,
        }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn face(&self, id: SectionId) -> &Face {
        &self.faces[id.index()]
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The last accepted container size; the render output follows it.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn group_scale(&self) -> f32 {
        self.group_scale.value()
    }

    pub fn hovered(&self) -> Option<SectionId> {
        self.faces
            .iter()
            .find(|f| f.state == FaceState::Hovered)
            .map(Face::section)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn group_matrix(&self) -> Mat4 {
        self.group_spin.matrix() * Mat4::from_scale(Vec3::splat(self.group_scale.value()))
    }

    pub fn face_model(&self, id: SectionId) -> Mat4 {
        self.face(id).model(&self.group_matrix())
    }

    /// Nearest face under `client`, using a camera with the aspect of `bounds`.
    pub fn pick(&self, client: Vec2, bounds: &Viewport) -> Option<Hit> {
        let mut camera = self.camera.clone();
        camera.set_viewport(bounds).ok()?;
        let ray = camera.ray_from_client(client, bounds)?;
        let group = self.group_matrix();
        picking::pick_nearest(
            &ray,
            self.faces.iter().map(|f| (f.section(), f.model(&group))),
            FACE_SIZE * 0.5,
        )
    }

    /// Recompute every face's highlight from scratch. `None` once disposed.
    pub fn on_pointer_move(&mut self, client: Vec2, bounds: &Viewport) -> Option<HoverOutcome> {
        if self.disposed {
            return None;
        }
        let hit = self.pick(client, bounds);
        let secs = self.cfg.hover_sec;
        for face in &mut self.faces {
            face.relax(secs);
        }
        let hovered = hit.map(|h| {
            self.faces[h.section.index()].highlight(secs);
            h.section
        });
        Some(HoverOutcome {
            hovered,
            cursor: if hovered.is_some() {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
        })
    }

    /// Press the face under `client` and report its section.
    pub fn on_click(&mut self, client: Vec2, bounds: &Viewport) -> Option<SectionId> {
        if self.disposed {
            return None;
        }
        let hit = self.pick(client, bounds)?;
        let face = &mut self.faces[hit.section.index()];
        // Settle on the scale the face was heading for before the press.
        let rest = face.scale.target();
        face.scale.start(
            TweenSpec::to(FACE_PRESS_SCALE, self.cfg.press_sec)
                .yoyo(1)
                .returning_to(rest),
        );
        log::info!("[cube] selected {}", hit.section);
        if let Some(cb) = self.on_select.as_mut() {
            cb(hit.section);
        }
        Some(hit.section)
    }

    /// Adopt new container bounds. Empty bounds are ignored.
    pub fn resize(&mut self, bounds: Viewport) -> bool {
        if self.disposed {
            return false;
        }
        match self.camera.set_viewport(&bounds) {
            Ok(()) => {
                self.viewport = bounds;
                true
            }
            Err(e) => {
                log::debug!("[cube] resize ignored: {e}");
                false
            }
        }
    }

    pub fn on_drag_start(&mut self, client: Vec2) {
        if !self.disposed {
            self.orbit.begin_drag(client);
        }
    }

    pub fn on_drag_move(&mut self, client: Vec2) {
        if !self.disposed {
            self.orbit.drag_to(client, self.viewport.height);
        }
    }

    pub fn on_drag_end(&mut self) {
        self.orbit.end_drag();
    }

    pub fn on_wheel(&mut self, delta_y: f32) {
        if !self.disposed {
            self.orbit.wheel(delta_y);
        }
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if self.disposed {
            return;
        }
        self.group_spin.advance(dt_sec);
        self.halo_spin.advance(dt_sec);
        self.group_scale.advance(dt_sec);
        for face in &mut self.faces {
            face.advance(dt_sec);
        }
        self.orbit.update(dt_sec, &mut self.camera);
    }

    /// Stop reacting to input and release the selection callback. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.on_select = None;
        self.orbit.end_drag();
        log::info!("[cube] disposed");
    }

    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        if self.disposed {
            return None;
        }
        let group = self.group_matrix();
        let eye = self.camera.eye;
        let face_size = Mat4::from_scale(Vec3::new(FACE_SIZE, FACE_SIZE, 1.0));
        let label_size = Mat4::from_scale(Vec3::new(LABEL_SIZE, LABEL_SIZE, 1.0));

        let mut quads: SmallVec<[QuadDraw; 12]> = SmallVec::new();
        for (slot, face) in self.faces.iter().enumerate() {
            quads.push(QuadDraw {
                section: face.section(),
                model: face.model(&group) * face_size,
                kind: QuadKind::Face {
                    color: face.color_rgb(),
                    opacity: face.opacity.value(),
                },
            });
            quads.push(QuadDraw {
                section: face.section(),
                model: face.label_model(&group) * label_size,
                kind: QuadKind::Label { slot },
            });
        }
        let depth = |q: &QuadDraw| q.model.w_axis.truncate().distance_squared(eye);
        quads.sort_by(|a, b| depth(b).total_cmp(&depth(a)));

        let halo = group * self.halo_spin.matrix();
        Some(FrameSnapshot {
            view_proj: self.camera.view_proj(),
            eye,
            quads,
            wireframe: wireframe_segments(WIREFRAME_SIZE * 0.5)
                .map(|[a, b]| [group.transform_point3(a), group.transform_point3(b)])
                .collect(),
            particles: self.halo.iter().map(|p| halo.transform_point3(*p)).collect(),
        })
    }
}

/// Box outline plus one diagonal per side, matching a triangulated box drawn
/// as wireframe.
fn wireframe_segments(h: f32) -> impl Iterator<Item = [Vec3; 2]> {
    let c = move |x: f32, y: f32, z: f32| Vec3::new(x * h, y * h, z * h);
    let edges = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)]
        .into_iter()
        .flat_map(move |(s, t)| {
            [
                [c(-1.0, s, t), c(1.0, s, t)],
                [c(s, -1.0, t), c(s, 1.0, t)],
                [c(s, t, -1.0), c(s, t, 1.0)],
            ]
        });
    let diagonals = [
        [c(-1.0, -1.0, 1.0), c(1.0, 1.0, 1.0)],
        [c(-1.0, -1.0, -1.0), c(1.0, 1.0, -1.0)],
        [c(1.0, -1.0, -1.0), c(1.0, 1.0, 1.0)],
        [c(-1.0, -1.0, -1.0), c(-1.0, 1.0, 1.0)],
        [c(-1.0, 1.0, -1.0), c(1.0, 1.0, 1.0)],
        [c(-1.0, -1.0, -1.0), c(1.0, -1.0, 1.0)],
    ];
    edges.chain(diagonals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_point_outward() {
        for s in SECTIONS {
            let face = Face::new(s);
            assert!(
                (face.normal() - s.direction_vec3()).length() < 1e-5,
                "{} normal {:?}",
                s.id,
                face.normal()
            );
        }
    }

    #[test]
    fn wireframe_has_every_box_edge_once() {
        let segs: Vec<_> = wireframe_segments(2.0).collect();
        assert_eq!(segs.len(), 18);
        let outline: Vec<_> = segs
            .iter()
            .filter(|[a, b]| ((*a - *b).length() - 4.0).abs() < 1e-5)
            .collect();
        assert_eq!(outline.len(), 12);
        for (i, x) in outline.iter().enumerate() {
            for y in &outline[i + 1..] {
                let same = (x[0] == y[0] && x[1] == y[1]) || (x[0] == y[1] && x[1] == y[0]);
                assert!(!same);
            }
        }
    }

    #[test]
    fn zero_entrance_starts_full_size() {
        let cfg = SceneConfig {
            entrance_sec: 0.0,
            ..SceneConfig::default()
        };
        let scene = CubeScene::new(cfg, Viewport::sized(800.0, 600.0), |_| {});
        assert_eq!(scene.group_scale(), 1.0);
    }

    #[test]
    fn entrance_overshoots_then_settles() {
        let mut scene = CubeScene::new(
            SceneConfig::default(),
            Viewport::sized(800.0, 600.0),
            |_| {},
        );
        assert_eq!(scene.group_scale(), 0.0);
        let mut peak = 0.0_f32;
        for _ in 0..120 {
            scene.tick(1.0 / 60.0);
            peak = peak.max(scene.group_scale());
        }
        assert!(peak > 1.0);
        assert!((scene.group_scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn snapshot_sorts_back_to_front() {
        let cfg = SceneConfig {
            entrance_sec: 0.0,
            ..SceneConfig::default()
        };
        let scene = CubeScene::new(cfg, Viewport::sized(800.0, 600.0), |_| {});
        let snap = scene.snapshot().unwrap();
        assert_eq!(snap.quads.len(), 12);
        assert_eq!(snap.particles.len(), HALO_PARTICLE_COUNT);
        let d: Vec<f32> = snap
            .quads
            .iter()
            .map(|q| q.model.w_axis.truncate().distance(snap.eye))
            .collect();
        assert!(d.windows(2).all(|w| w[0] >= w[1]));
        // Labels on faces turned towards the camera are drawn after their face.
        for id in [SectionId::About, SectionId::Projects, SectionId::SocialLife] {
            let n = scene.face(id).normal();
            assert!(n.dot(snap.eye) > 0.0);
            let face = snap
                .quads
                .iter()
                .position(|q| q.section == id && matches!(q.kind, QuadKind::Face { .. }));
            let label = snap
                .quads
                .iter()
                .position(|q| q.section == id && matches!(q.kind, QuadKind::Label { .. }));
            assert!(face < label);
        }
    }
}
