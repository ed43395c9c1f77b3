/// Interaction tuning constants shared by the page controllers.
///
/// These express intended behavior (e.g., trigger radii, clamp limits) and
/// keep magic numbers out of the event wiring.
// Runaway decline button (home page)
pub const REPEL_TRIGGER_DIST: f32 = 150.0;
pub const REPEL_STEP: f32 = 160.0;

// Accept button growth (home page)
pub const YES_SCALE_STEP: f32 = 0.10;
pub const YES_SCALE_MAX: f32 = 2.2;

// Shrinking decline button (date page)
pub const DECLINE_MAX_ATTEMPTS: u32 = 4;
pub const DECLINE_SCALE_STEP: f32 = 0.18;
pub const DECLINE_SCALE_MIN: f32 = 0.28;
pub const DECLINE_BRIGHTNESS_STEP: f32 = 0.06;
pub const DECLINE_BRIGHTNESS_MIN: f32 = 0.85;

// Confetti burst phases
pub const STREAM_DURATION_MS: u64 = 1500;
pub const FINALE_DELAY_MS: i32 = 260;

// Background track
pub const AUDIO_SRC: &str = "assets/audio/until-i-found-you.mp3";
pub const AUDIO_VOLUME: f64 = 0.85;
