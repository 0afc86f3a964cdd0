use glam::Vec3;

// Shared scene/UI tuning constants used by the core and the web front end.

// Falling stars
pub const STARS_DEFAULT_COUNT: usize = 220;
pub const STARS_DEFAULT_AREA: [f32; 3] = [70.0, 40.0, 70.0];
pub const STARS_DEFAULT_SPEED: f32 = 0.8;
pub const STARS_DEFAULT_Z: f32 = -30.0;
pub const STARS_FALL_SCALE: f32 = 20.0; // world units per (speed * second)

pub const HERO_STARS_COUNT: usize = 260;
pub const HERO_STARS_AREA: [f32; 3] = [90.0, 52.0, 90.0];
pub const HERO_STARS_SPEED: f32 = 0.9;
pub const HERO_STARS_Z: f32 = -38.0;

pub const STAR_POINT_SIZE: f32 = 0.45;
pub const STAR_COLOR: [f32; 3] = [0.608, 0.910, 1.0]; // #9be8ff
pub const STAR_OPACITY: f32 = 0.85;

// Light grid
pub const GRID_DEFAULT_SIZE: f32 = 100.0;
pub const GRID_DEFAULT_DIVISIONS: u32 = 40;
pub const GRID_DEFAULT_Y: f32 = -10.0;
pub const GRID_DEFAULT_Z: f32 = -34.0;

pub const HERO_GRID_SIZE: f32 = 120.0;
pub const HERO_GRID_DIVISIONS: u32 = 48;
pub const HERO_GRID_Y: f32 = -11.0;
pub const HERO_GRID_Z: f32 = -40.0;

pub const GRID_COLOR: [f32; 3] = [0.494, 0.988, 1.0]; // #7efcff
pub const GRID_OPACITY: f32 = 0.12;

// Undulation: (angular rate, amplitude) per channel
pub const GRID_PITCH_RATE: f32 = 0.12;
pub const GRID_PITCH_AMPLITUDE: f32 = 0.01;
pub const GRID_BOB_RATE: f32 = 0.25;
pub const GRID_BOB_AMPLITUDE: f32 = 0.35;
pub const GRID_ROLL_RATE: f32 = 0.06;
pub const GRID_ROLL_AMPLITUDE: f32 = 0.02;

// Corner layout
pub const MOBILE_MARGIN_X: f32 = 8.0;
pub const MOBILE_MARGIN_Y: f32 = 6.0;
pub const DESKTOP_MARGIN_X: f32 = 18.0;
pub const DESKTOP_MARGIN_Y: f32 = 10.0;
pub const CORNER_Z_DEPTH: f32 = 0.5; // small forward offset in front of the background
pub const PROP_SCALE: f32 = 2.0;
pub const PROP_OPACITY: f32 = 0.9;

// Viewport breakpoints (CSS px, inclusive upper bounds)
pub const SMALL_MAX_WIDTH: f64 = 440.0;
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Camera
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 30.0);
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// UI timers (milliseconds)
pub const CONTACT_RESET_MS: u64 = 3000;
pub const COPY_RESET_MS: u64 = 2000;

// Contact form copy
pub const SUCCESS_TEXT: &str = "Your message is recorded ✅";
pub const SUBMIT_LABEL_IDLE: &str = "Send Message";
pub const SUBMIT_LABEL_BUSY: &str = "Recording...";

// Copy widget icons
pub const COPY_ICON: &str = "assets/copy.svg";
pub const COPIED_ICON: &str = "assets/tick.svg";
