// Pure pointer/wheel helpers. Kept free of `web_sys` so host tests can
// include this file directly.

use glam::Vec2;

/// `WheelEvent.deltaMode` values.
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

const LINE_HEIGHT_PX: f64 = 16.0;
const PAGE_HEIGHT_PX: f64 = 800.0;

/// Wheel delta in pixels regardless of the reporting mode. The zoom step
/// only reads the sign.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let px = match delta_mode {
        DOM_DELTA_PIXEL => delta_y,
        DOM_DELTA_LINE => delta_y * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta_y * PAGE_HEIGHT_PX,
        _ => delta_y,
    };
    px as f32
}

#[inline]
pub fn client_point(client_x: i32, client_y: i32) -> Vec2 {
    Vec2::new(client_x as f32, client_y as f32)
}

/// Backing store size for a canvas laid out at `css_w` x `css_h` CSS pixels.
#[inline]
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    let w = (css_w.max(0.0) * dpr) as u32;
    let h = (css_h.max(0.0) * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Raw frame delta clamped to `[0, max_sec]`; non-finite input gives 0.
#[inline]
pub fn frame_dt(raw_sec: f32, max_sec: f32) -> f32 {
    if raw_sec.is_finite() {
        raw_sec.clamp(0.0, max_sec)
    } else {
        0.0
    }
}
