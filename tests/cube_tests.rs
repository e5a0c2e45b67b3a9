// Host-side integration tests for the navigation cube: hover, click, resize
// and teardown, driven through client coordinates like the DOM would.

use glam::{Vec2, Vec3};
use portfolio_core::constants::{
    FACE_BASE_OPACITY, FACE_BASE_SCALE, FACE_HOVER_OPACITY, FACE_HOVER_SCALE, HOVER_TWEEN_SEC,
};
use portfolio_core::picking;
use portfolio_core::{Cursor, CubeScene, FaceState, Ray, SceneConfig, SectionId, Viewport};
use std::cell::RefCell;
use std::rc::Rc;

fn still_config() -> SceneConfig {
    SceneConfig {
        entrance_sec: 0.0,
        group_spin: [0.0, 0.0],
        halo_spin: [0.0, 0.0],
        ..SceneConfig::default()
    }
}

fn recording_scene(bounds: Viewport) -> (CubeScene, Rc<RefCell<Vec<SectionId>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = calls.clone();
    let scene = CubeScene::new(still_config(), bounds, move |id| sink.borrow_mut().push(id));
    (scene, calls)
}

fn face_center(id: SectionId) -> Vec3 {
    id.section().direction_vec3() * 2.0
}

fn client_of(scene: &CubeScene, world: Vec3, bounds: &Viewport) -> Vec2 {
    scene
        .camera()
        .project_client(world, bounds)
        .expect("point in front of the camera")
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn hover_highlights_only_the_face_under_the_cursor() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, _) = recording_scene(bounds);
    let at = client_of(&scene, face_center(SectionId::Projects), &bounds);

    let outcome = scene.on_pointer_move(at, &bounds).unwrap();
    assert_eq!(outcome.hovered, Some(SectionId::Projects));
    assert_eq!(outcome.cursor, Cursor::Pointer);

    for face in scene.faces() {
        if face.section() == SectionId::Projects {
            assert_eq!(face.state(), FaceState::Hovered);
            assert!(approx(face.opacity.target(), FACE_HOVER_OPACITY));
            assert!(approx(face.scale.target(), FACE_HOVER_SCALE));
        } else {
            assert_eq!(face.state(), FaceState::Idle);
            assert!(approx(face.opacity.target(), FACE_BASE_OPACITY));
            assert!(approx(face.scale.target(), FACE_BASE_SCALE));
        }
    }
}

#[test]
fn moving_off_the_cube_relaxes_every_face() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, _) = recording_scene(bounds);
    let on_face = client_of(&scene, face_center(SectionId::About), &bounds);
    scene.on_pointer_move(on_face, &bounds);
    scene.tick(0.1);

    let outcome = scene.on_pointer_move(Vec2::new(1.0, 1.0), &bounds).unwrap();
    assert_eq!(outcome.hovered, None);
    assert_eq!(outcome.cursor, Cursor::Default);
    assert_eq!(scene.hovered(), None);

    scene.tick(HOVER_TWEEN_SEC + 0.05);
    for face in scene.faces() {
        assert!(approx(face.opacity.value(), FACE_BASE_OPACITY));
        assert!(approx(face.scale.value(), FACE_BASE_SCALE));
    }
}

#[test]
fn click_on_a_face_reports_it_once() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, calls) = recording_scene(bounds);
    for id in [SectionId::About, SectionId::Projects, SectionId::SocialLife] {
        let at = client_of(&scene, face_center(id), &bounds);
        assert_eq!(scene.on_click(at, &bounds), Some(id));
    }
    assert_eq!(
        *calls.borrow(),
        vec![SectionId::About, SectionId::Projects, SectionId::SocialLife]
    );
}

#[test]
fn click_that_misses_reports_nothing() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, calls) = recording_scene(bounds);
    assert_eq!(scene.on_click(Vec2::new(2.0, 598.0), &bounds), None);
    assert!(calls.borrow().is_empty());
}

#[test]
fn click_presses_and_releases_the_face() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, _) = recording_scene(bounds);
    let at = client_of(&scene, face_center(SectionId::Projects), &bounds);
    scene.on_click(at, &bounds);
    scene.tick(0.1);
    assert!(scene.face(SectionId::Projects).scale.value() < 0.95);
    scene.tick(0.15);
    assert!(approx(scene.face(SectionId::Projects).scale.value(), 1.0));
}

#[test]
fn double_click_settles_back_on_the_hover_scale() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, calls) = recording_scene(bounds);
    let at = client_of(&scene, face_center(SectionId::Projects), &bounds);
    scene.on_pointer_move(at, &bounds);
    scene.tick(HOVER_TWEEN_SEC + 0.05);
    assert!(approx(scene.face(SectionId::Projects).scale.value(), FACE_HOVER_SCALE));

    scene.on_click(at, &bounds);
    scene.tick(0.05);
    scene.on_click(at, &bounds);
    scene.tick(1.0);

    let face = scene.face(SectionId::Projects);
    assert_eq!(face.state(), FaceState::Hovered);
    assert!(approx(face.scale.value(), FACE_HOVER_SCALE));
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn click_during_hover_tween_settles_on_the_hover_scale() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, _) = recording_scene(bounds);
    let at = client_of(&scene, face_center(SectionId::About), &bounds);
    scene.on_pointer_move(at, &bounds);
    scene.tick(0.1);
    assert!(scene.face(SectionId::About).scale.value() < FACE_HOVER_SCALE);

    scene.on_click(at, &bounds);
    scene.tick(1.0);
    assert!(approx(scene.face(SectionId::About).scale.value(), FACE_HOVER_SCALE));
}

#[test]
fn resize_with_same_aspect_keeps_relative_hits() {
    let big = Viewport::sized(800.0, 600.0);
    let (mut scene, calls) = recording_scene(big);
    let at = client_of(&scene, face_center(SectionId::Projects), &big);
    let relative = Vec2::new(at.x / big.width, at.y / big.height);

    let small = Viewport::sized(400.0, 300.0);
    assert!(scene.resize(small));
    let at_small = Vec2::new(relative.x * small.width, relative.y * small.height);
    assert_eq!(scene.on_click(at_small, &small), Some(SectionId::Projects));
    assert_eq!(*calls.borrow(), vec![SectionId::Projects]);
}

#[test]
fn resize_to_new_aspect_uses_the_new_camera() {
    let (mut scene, _) = recording_scene(Viewport::sized(800.0, 600.0));
    let tall = Viewport::new(50.0, 20.0, 300.0, 600.0);
    assert!(scene.resize(tall));
    assert!(approx(scene.camera().aspect, 0.5));
    for id in [SectionId::About, SectionId::Projects, SectionId::SocialLife] {
        let at = client_of(&scene, face_center(id), &tall);
        assert_eq!(scene.pick(at, &tall).map(|h| h.section), Some(id));
    }
}

#[test]
fn zero_sized_resize_keeps_last_aspect() {
    let (mut scene, _) = recording_scene(Viewport::sized(800.0, 600.0));
    assert!(!scene.resize(Viewport::sized(0.0, 300.0)));
    assert!(approx(scene.camera().aspect, 800.0 / 600.0));
    assert_eq!(scene.viewport(), Viewport::sized(800.0, 600.0));
}

#[test]
fn disposed_scene_ignores_everything() {
    let bounds = Viewport::sized(800.0, 600.0);
    let (mut scene, calls) = recording_scene(bounds);
    let at = client_of(&scene, face_center(SectionId::Projects), &bounds);
    let group = scene.group_matrix();

    scene.dispose();
    scene.dispose();
    assert!(scene.is_disposed());
    assert!(scene.on_pointer_move(at, &bounds).is_none());
    assert!(scene.on_click(at, &bounds).is_none());
    assert!(!scene.resize(Viewport::sized(400.0, 400.0)));
    scene.on_wheel(120.0);
    scene.tick(1.0);

    assert!(calls.borrow().is_empty());
    assert_eq!(scene.hovered(), None);
    assert_eq!(scene.group_matrix(), group);
    assert!(scene.snapshot().is_none());
    assert!(approx(scene.camera().aspect, 800.0 / 600.0));
}

#[test]
fn faces_seen_from_behind_are_not_picked() {
    let (scene, _) = recording_scene(Viewport::sized(800.0, 600.0));
    let faces = SectionId::ALL.map(|id| (id, scene.face_model(id)));
    for dir in [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z] {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir,
        };
        assert!(picking::pick_nearest(&ray, faces.iter().copied(), 1.9).is_none());
    }
}
