// Frontend-local identifiers and tuning.

pub const CANVAS_ID: &str = "scene-canvas";
pub const OVERLAY_ID: &str = "stats-overlay";

// Overlay refresh cadence in frames; the DOM write is cheap but not free.
pub const OVERLAY_UPDATE_INTERVAL: u64 = 10;
