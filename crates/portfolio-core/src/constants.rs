// Shared visual and interaction tuning constants for the cube and the header strip.

// Cube layout
pub const CUBE_HALF_EXTENT: f32 = 2.0; // faces sit at direction * half extent
pub const FACE_SIZE: f32 = 3.8;
pub const LABEL_SIZE: f32 = 3.6;
pub const LABEL_NORMAL_OFFSET: f32 = 0.01; // keeps labels in front of their face
pub const WIREFRAME_SIZE: f32 = 4.0;
pub const WIREFRAME_COLOR: [f32; 3] = [0.267, 0.267, 0.267]; // #444444
pub const WIREFRAME_OPACITY: f32 = 0.3;

// Face highlight states
pub const FACE_BASE_OPACITY: f32 = 0.8;
pub const FACE_BASE_SCALE: f32 = 1.0;
pub const FACE_HOVER_OPACITY: f32 = 1.0;
pub const FACE_HOVER_SCALE: f32 = 1.1;
pub const FACE_PRESS_SCALE: f32 = 0.9;
pub const HOVER_TWEEN_SEC: f32 = 0.3;
pub const PRESS_TWEEN_SEC: f32 = 0.1;

// Entrance animation for the whole group
pub const ENTRANCE_SEC: f32 = 1.5;
pub const ENTRANCE_OVERSHOOT: f32 = 1.7;

// Ambient motion (radians per second, x then y)
pub const GROUP_SPIN_RATE: [f32; 2] = [0.12, 0.30];
pub const HALO_SPIN_RATE: [f32; 2] = [0.06, 0.12];

// Particle halo around the cube
pub const HALO_PARTICLE_COUNT: usize = 50;
pub const HALO_RADIUS_MIN: f32 = 3.0;
pub const HALO_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_SIZE: f32 = 0.05;
pub const PARTICLE_COLOR: [f32; 3] = [0.231, 0.510, 0.965]; // #3b82f6
pub const PARTICLE_OPACITY: f32 = 0.8;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: [f32; 3] = [10.0, 7.0, 7.0];

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 8.0;
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending rotation applied per 60 Hz frame
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance factor per wheel notch
pub const ORBIT_POLAR_EPS: f32 = 1e-3;

// Lighting and fog
pub const AMBIENT_LIGHT: [f32; 4] = [0.251, 0.251, 0.251, 0.6]; // #404040, intensity
pub const DIRECTIONAL_LIGHT_POS: [f32; 3] = [10.0, 10.0, 5.0];
pub const DIRECTIONAL_LIGHT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const POINT_LIGHT_POS: [f32; 3] = [-5.0, 5.0, -5.0];
pub const POINT_LIGHT: [f32; 4] = [0.576, 0.773, 0.992, 0.8]; // #93c5fd, intensity
pub const POINT_LIGHT_RANGE: f32 = 20.0;
pub const FOG_COLOR: [f32; 3] = [0.102, 0.102, 0.180]; // #1a1a2e
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 50.0;

// Header strip
pub const HEADER_HEIGHT_PX: f32 = 100.0;
pub const HEADER_PARTICLE_COUNT: usize = 100;
pub const HEADER_FIELD_EXTENT: f32 = 10.0; // particles span [-extent/2, extent/2] per axis
pub const HEADER_PARTICLE_SIZE: f32 = 0.02;
pub const HEADER_CAMERA_Z: f32 = 5.0;
pub const HEADER_LABEL_SIZE: [f32; 2] = [4.0, 1.0];
pub const HEADER_FADE_SEC: f32 = 2.0;
pub const HEADER_FLOAT_AMPLITUDE: f32 = 0.1;

// Page
pub const LOADING_MS: u32 = 2000;
