/// Page wiring and input tuning constants for the web front-end.
///
/// Scene and animation tuning lives in `desk_core::constants`; these are
/// the knobs that only matter where browser events and DOM ids meet.
// Wheel zoom: deltaY after mode normalisation, scaled to world units
pub const WHEEL_ZOOM_SCALE: f32 = 0.015;
pub const WHEEL_LINE_PX: f32 = 16.0; // DOM_DELTA_LINE
pub const WHEEL_PAGE_PX: f32 = 800.0; // DOM_DELTA_PAGE

// Zoom buttons step the target distance by this many world units
pub const ZOOM_BUTTON_STEP: f32 = 2.0;

// Backing store is capped so high-density phones don't render 3x
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Element ids the page is expected to provide
pub const SCENE_CONTAINER_ID: &str = "scene-container";
pub const ZOOM_IN_ID: &str = "zoomIn";
pub const ZOOM_OUT_ID: &str = "zoomOut";
pub const LOADER_ID: &str = "loader";
pub const NAV_ID: &str = "nav";

// Monitor text
pub const SCREEN_COORDINATES: &str = "-1.2921\u{b0} S, 36.8219\u{b0} E";
pub const SCREEN_PLACE: &str = "NAIROBI";
pub const SCREEN_NAME: &str = "Simon Mutunga";
pub const SCREEN_TITLE: &str = "Geospatial Engineer";
pub const SCREEN_STATUS: &str = "ONLINE";

// Clamp for a single frame's dt so a backgrounded tab doesn't snap the zoom
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
