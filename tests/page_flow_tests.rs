// Host-side scenario: a cube click opens a panel through the shared
// selection, and the close control empties it again.

use glam::Vec2;
use portfolio_core::content::{EMAIL_HREF, GITHUB_HREF, LINKEDIN_HREF};
use portfolio_core::panel::{self, escape};
use portfolio_core::{CubeScene, PageConfig, PageState, SceneConfig, SectionId, Selection, View, Viewport};
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

/// Orbit half a turn so the -X and -Z faces point at the camera.
fn orbit_half_turn(scene: &mut CubeScene) {
    let h = scene.viewport().height;
    scene.on_drag_start(Vec2::new(100.0, 100.0));
    scene.on_drag_move(Vec2::new(100.0 + h * 0.5, 100.0));
    scene.on_drag_end();
    for _ in 0..900 {
        scene.tick(1.0 / 60.0);
    }
}

#[test]
fn clicking_contact_opens_and_close_clears_the_panel() {
    let bounds = Viewport::sized(800.0, 600.0);
    let selection = Rc::new(RefCell::new(Selection::new()));
    let rendered: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    {
        let rendered = rendered.clone();
        selection
            .borrow_mut()
            .subscribe(move |active| rendered.borrow_mut().push(panel::render_panel(active)));
    }
    let sel = selection.clone();
    let mut scene = CubeScene::new(still_config(), bounds, move |id| {
        sel.borrow_mut().select(id);
    });
    assert_eq!(selection.borrow().active(), None);

    orbit_half_turn(&mut scene);
    let contact = SectionId::Contact.section().direction_vec3() * 2.0;
    let at = scene.camera().project_client(contact, &bounds).unwrap();
    assert_eq!(scene.on_click(at, &bounds), Some(SectionId::Contact));
    assert_eq!(selection.borrow().active(), Some(SectionId::Contact));

    {
        let rendered = rendered.borrow();
        assert_eq!(rendered.len(), 1);
        let markup = rendered[0].as_deref().unwrap();
        for href in [EMAIL_HREF, LINKEDIN_HREF, GITHUB_HREF] {
            assert!(markup.contains(&*escape(href)), "missing {href}");
        }
    }

    // Same face again: already open, nobody is told.
    scene.on_click(at, &bounds);
    assert_eq!(rendered.borrow().len(), 1);

    assert!(selection.borrow_mut().close());
    assert_eq!(selection.borrow().active(), None);
    assert_eq!(rendered.borrow().last().cloned(), Some(None));
    assert_eq!(panel::render_panel(selection.borrow().active()), None);
}

#[test]
fn close_with_nothing_open_is_silent() {
    let fired = Rc::new(RefCell::new(0));
    let mut selection = Selection::new();
    {
        let fired = fired.clone();
        selection.subscribe(move |_| *fired.borrow_mut() += 1);
    }
    assert!(!selection.close());
    assert_eq!(selection.active(), None);
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn switching_sections_replaces_the_open_one() {
    let mut selection = Selection::new();
    assert!(selection.select(SectionId::Skills));
    assert!(selection.select(SectionId::Resume));
    assert_eq!(selection.active(), Some(SectionId::Resume));
}

#[test]
fn page_view_follows_capability_and_timer() {
    let mut page = PageState::new(PageConfig { loading_ms: 10 }, true);
    assert_eq!(page.view(), View::Loading);
    assert!(page.shows_main_content());
    assert_eq!(page.loading_elapsed(), View::Ready);

    let page = PageState::new(PageConfig::default(), false);
    assert_eq!(page.view(), View::Fallback);
    assert!(panel::render_fallback().contains(&*escape(GITHUB_HREF)));
}
