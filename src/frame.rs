use crate::constants::MAX_FRAME_DT_SEC;
use crate::cube::CubeView;
use crate::header::HeaderView;
use crate::input;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

pub struct FrameContext {
    pub last_instant: Instant,
    pub header: Option<Rc<RefCell<HeaderView>>>,
    pub cube: Option<Rc<RefCell<CubeView>>>,
}

impl FrameContext {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
            header: None,
            cube: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = input::frame_dt(dt.as_secs_f32(), MAX_FRAME_DT_SEC);

        if let Some(header) = &self.header {
            header.borrow_mut().frame(dt_sec);
        }
        if let Some(cube) = &self.cube {
            cube.borrow_mut().frame(dt_sec);
        }
    }
}

/// Owns the pending animation frame. Dropping it cancels the loop.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let pending = Rc::new(RefCell::new(None));
        schedule(ctx, pending.clone());
        Self { pending }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // breaks the handle <-> callback cycle as well
        self.pending.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn schedule(ctx: Rc<RefCell<FrameContext>>, pending: Rc<RefCell<Option<AnimationFrame>>>) {
    let slot = pending.clone();
    let handle = request_animation_frame(move |_| {
        slot.borrow_mut().take();
        ctx.borrow_mut().frame();
        schedule(ctx, slot);
    });
    *pending.borrow_mut() = Some(handle);
}
