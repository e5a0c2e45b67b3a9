//! Element ids shared with `index.html` and a few host-side tuning values.

pub const BIO_ID: &str = "bio";
pub const HEADER_CANVAS_ID: &str = "header-canvas";
pub const CUBE_MOUNT_ID: &str = "cube-mount";
pub const PANEL_OVERLAY_ID: &str = "panel-overlay";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const FALLBACK_ROOT_ID: &str = "fallback-root";
pub const MAIN_CONTENT_ID: &str = "main-content";
pub const INSTRUCTIONS_ID: &str = "instructions";

// Class toggled on #main-content once loading finishes; CSS fades it in.
pub const READY_CLASS: &str = "ready";
pub const HIDDEN_CLASS: &str = "hidden";

// Header strip text
pub const HEADER_FONT_FAMILY: &str = "Arial";
pub const HEADER_TEXT_COLOR: &str = "white";
pub const HEADER_DOT_MIN_RADIUS_PX: f64 = 0.5;

// Frame deltas above this are treated as a resumed tab, not a slow frame
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
