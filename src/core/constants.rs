// Camera, geometry and colour constants for the particle tree.

// Fixed camera: scale = FOV / (FOV + z + DEPTH_OFFSET)
pub const FOV: f32 = 800.0;
pub const DEPTH_OFFSET: f32 = 400.0; // keeps the cloud in front of the camera

// Cone geometry (object space)
pub const CONE_RADIUS: f32 = 250.0; // max disk radius at height_fraction = 1
pub const CONE_HEIGHT: f32 = 500.0; // y spans [-CONE_HEIGHT/2, CONE_HEIGHT/2)

// Star ornament at the apex
pub const STAR_Y: f32 = -260.0;
pub const STAR_RADIUS: f32 = 8.0;
pub const STAR_HUE_RATE: f32 = 2.0; // star hue = global_hue * rate
pub const STAR_SATURATION: f32 = 100.0;
pub const STAR_LIGHTNESS: f32 = 80.0;

// Particles
pub const PARTICLE_RADIUS: f32 = 3.0;
pub const PARTICLE_SATURATION: f32 = 100.0;
pub const PARTICLE_LIGHTNESS: f32 = 60.0;
pub const MAX_PARTICLE_COUNT: usize = 20_000; // upper bound for typed-in counts

// Per-frame animation
pub const HUE_STEP_PER_FRAME: f32 = 0.5; // degrees
pub const DRAG_RADIANS_PER_PX: f32 = 0.005;

pub const HUE_PERIOD: f32 = 360.0;
