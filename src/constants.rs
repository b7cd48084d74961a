/// Front-end tuning and DOM wiring constants.
///
/// Pure data only so host tests can `include!` this file without a browser.
// DOM ids
pub const CANVAS_ID: &str = "app-canvas";
pub const NOW_PLAYING_ID: &str = "now-playing";
pub const LEGEND_ID: &str = "legend";
pub const TITLE_ID: &str = "title";
pub const AUTO_CARD_ID: &str = "auto-card";
pub const AUTO_BUTTON_ID: &str = "auto-btn";
pub const AUTO_STATUS_ID: &str = "auto-status";
pub const MENU_BUTTON_ID: &str = "menu-btn";
pub const MENU_CLOSE_ID: &str = "menu-close";
pub const DRAWER_ID: &str = "drawer";
// Drawer entries; each one just closes the drawer
pub const DRAWER_LINK_IDS: [&str; 3] = ["nav-instructions", "nav-sounds", "nav-about"];

// Canvas attribute that overrides where clips are served from
pub const ASSET_BASE_ATTR: &str = "data-asset-base";
pub const DEFAULT_ASSET_BASE: &str = "/patatap-app/";

// Audio
pub const MASTER_GAIN: f32 = 0.8;

// Legend fades once nobody has pressed a key for this long
pub const LEGEND_IDLE_SEC: f32 = 4.0;

// Frame delta clamp so a backgrounded tab does not burst auto-play letters
pub const MAX_FRAME_DT_SEC: f32 = 0.25;

// Overlay content
pub const TITLE_LETTERS: [char; 7] = ['P', 'A', 'T', 'A', 'T', 'A', 'P'];
pub const TITLE_COLORS: [&str; 7] = [
    "#1abc9c", "#e74c3c", "#f1c40f", "#9b59b6", "#3498db", "#e67e22", "#2ecc71",
];
pub const FEATURED_KEYS: [char; 12] = ['Q', 'W', 'E', 'R', 'A', 'S', 'D', 'F', 'Z', 'X', 'C', 'V'];

// Background clear color (linear RGB)
pub const CLEAR_RGB: [f64; 3] = [0.02, 0.02, 0.03];
