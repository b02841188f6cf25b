pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 120.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 84.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const INSET_WIDTH: f32 = 300.0;
pub const INSET_HEIGHT: f32 = 200.0;
pub const INSET_PADDING: f32 = 14.0;

pub const MARKER_RADIUS: f32 = 6.0;

pub const SPEED_RANGE: (f32, f32) = (0.0, 120.0);
pub const ANGLE_RANGE: (f32, f32) = (-90.0, 180.0);
pub const ELEVATION_RANGE: (f32, f32) = (-90.0, 90.0);
pub const AZIMUTH_RANGE: (f32, f32) = (-180.0, 180.0);
pub const SPIN_RANGE: (f32, f32) = (-50.0, 50.0);
pub const GRAVITY_RANGE: (f32, f32) = (-20.0, 25.0);
pub const SAMPLES_RANGE: (f32, f32) = (1.0, 1000.0);
