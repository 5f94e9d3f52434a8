//! Shared numeric constants for the lightcast crate.

// ── Ray fan ─────────────────────────────────────────────────────

/// Number of rays in the emitter fan, one per degree.
pub const RAY_COUNT: usize = 360;

/// Number of segments framing the canvas.
pub const BORDER_SEGMENTS: usize = 4;

// ── Starfield ───────────────────────────────────────────────────

/// Default number of background stars.
pub const DEFAULT_STAR_COUNT: usize = 500;

/// Upper bound accepted from configuration.
pub const MAX_STAR_COUNT: usize = 10_000;

/// Star diameter range in pixels, `[min, max)`.
pub const STAR_SIZE_MIN: f64 = 1.0;
pub const STAR_SIZE_MAX: f64 = 3.0;

/// Star brightness bounds (grey level).
pub const STAR_BRIGHTNESS_MIN: f64 = 100.0;
pub const STAR_BRIGHTNESS_MAX: f64 = 255.0;

/// Per-frame brightness step magnitude range, `[min, max)`.
pub const STAR_FLICKER_MIN: f64 = 0.5;
pub const STAR_FLICKER_MAX: f64 = 1.5;

/// Star fill alpha.
pub const STAR_ALPHA: u8 = 200;

// ── Drawing ─────────────────────────────────────────────────────

/// Grey level used for walls, rays, the emitter and the caption.
pub const SILVER: u8 = 192;

/// Ray line alpha.
pub const RAY_ALPHA: u8 = 100;

/// Wall and ray stroke width in CSS pixels.
pub const STROKE_WIDTH: f64 = 2.0;

/// Emitter dot diameter.
pub const EMITTER_DIAMETER: f64 = 8.0;

/// Constellation vertex marker diameter.
pub const VERTEX_DIAMETER: f64 = 10.0;

/// Caption font size and its distance from the bottom edge.
pub const CAPTION_SIZE_PX: f64 = 24.0;
pub const CAPTION_BOTTOM_OFFSET: f64 = 20.0;

/// Constellation label font size and its lift above the vertex centroid.
pub const LABEL_SIZE_PX: f64 = 20.0;
pub const LABEL_LIFT: f64 = 15.0;
