// Page element ids and web-side tuning.
// Camera and geometry constants live in `core/constants.rs`.

// Page elements
pub const CANVAS_ID: &str = "treeCanvas";
pub const CONTROLS_PANEL_ID: &str = "controls";
pub const TOGGLE_CONTROLS_ID: &str = "toggleControls";
pub const SPEED_INPUT_ID: &str = "speed";
pub const SIZE_INPUT_ID: &str = "size";
pub const COUNT_INPUT_ID: &str = "count";
pub const COLOR_INPUT_ID: &str = "color";

// CSS class that hides the control panel
pub const HIDDEN_CLASS: &str = "hidden";

// Frame statistics logging period
pub const STATS_INTERVAL_SECS: f32 = 5.0;
