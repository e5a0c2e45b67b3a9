//! Platform-free core of the portfolio page: section data, the navigation
//! cube scene, the header ambience, selection state and panel markup.

pub mod ambient;
pub mod camera;
pub mod constants;
pub mod content;
pub mod cube;
pub mod error;
pub mod motion;
pub mod orbit;
pub mod page;
pub mod panel;
pub mod particles;
pub mod picking;
pub mod section;
pub mod selection;
pub mod tween;

pub use ambient::{AmbientConfig, AmbientFrame, AmbientScene};
pub use camera::{Camera, Ray, Viewport};
pub use cube::{CubeScene, Cursor, FaceState, FrameSnapshot, HoverOutcome, QuadKind, SceneConfig};
pub use error::{PortfolioError, Result};
pub use orbit::{OrbitConfig, OrbitControls};
pub use page::{PageConfig, PageState, View};
pub use section::{Section, SectionId, SECTIONS};
pub use selection::Selection;
pub use tween::{Easing, TweenHandle, TweenSpec, Tweened};
