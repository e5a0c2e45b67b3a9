pub mod pointer;
pub mod resize;

pub use pointer::{wire_cube_pointer, CubeWiring};
pub use resize::wire_cube_resize;
