// Particle and auto-play tuning constants shared by every front-end.

// Initial opacity
pub const FILL_ALPHA_START: f32 = 0.9;
pub const STROKE_ALPHA_START: f32 = 0.25;

// Sizing: radius = max(width, height) * BASE_RADIUS_FRACTION * factor,
// factor drawn from [RADIUS_FACTOR_MIN, RADIUS_FACTOR_MIN + RADIUS_FACTOR_SPAN)
pub const BASE_RADIUS_FRACTION: f32 = 0.25;
pub const RADIUS_FACTOR_MIN: f32 = 0.25;
pub const RADIUS_FACTOR_SPAN: f32 = 1.1;

// Stroke width drawn from [STROKE_WIDTH_MIN, STROKE_WIDTH_MIN + STROKE_WIDTH_SPAN)
pub const STROKE_WIDTH_MIN: f32 = 2.0;
pub const STROKE_WIDTH_SPAN: f32 = 5.0;

// Per-frame fill alpha decay
pub const FADE_RATE_MIN: f32 = 0.016;
pub const FADE_RATE_SPAN: f32 = 0.012;

// Per-frame stroke width growth
pub const STROKE_GROW_MIN: f32 = 0.35;
pub const STROKE_GROW_SPAN: f32 = 0.45;

// Per-frame update
pub const SHRINK_FACTOR: f32 = 0.93;
pub const HUE_STEP_DEG: f32 = 1.0;
pub const STROKE_FADE_RATIO: f32 = 0.6; // stroke fades at 60% of the fill rate

// Eviction thresholds
pub const MIN_AREA: f32 = 1.0;
pub const ALPHA_EPSILON: f32 = 0.01;

// Auto-play cadence (seconds between letters)
pub const AUTO_PLAY_PERIOD_SEC: f64 = 0.42;
