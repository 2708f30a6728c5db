// Shared effect tuning constants used by the fields and both frontends.

// Instance counts (fixed for a field's lifetime)
pub const CONFETTI_COUNT: usize = 150;
pub const RIBBON_COUNT: usize = 10;

// Confetti layout (world units; spans scale with the viewport aspect ratio)
pub const CONFETTI_SPAWN_Y: f32 = 5.0; // fresh instances start here
pub const CONFETTI_SPAWN_SPAN: f32 = 8.0; // spawn x in +-(aspect * span / 2)
pub const CONFETTI_KILL_SPAN: f32 = 5.0; // |x| beyond aspect * this respawns
pub const CONFETTI_KILL_Y: f32 = 5.0; // |y| beyond this respawns
pub const CONFETTI_RESCATTER_SPAN_Y: f32 = 5.0; // resize re-scatter y span, centered

// Confetti velocities (world units per tick)
pub const CONFETTI_DRIFT_SPAN: f32 = 0.03; // sideways drift in +-span/2
pub const CONFETTI_BASE_FALL_SPEED: f32 = 0.02;
pub const CONFETTI_EXTRA_FALL_SPEED: f32 = 0.04;

// Flutter rotation: two oscillators phase-shifted by instance index
pub const FLUTTER_AMPLITUDE: f32 = 0.2;
pub const FLUTTER_GAIN: f32 = 50.0;
pub const FLUTTER_FREQ_X: f32 = 3.0;
pub const FLUTTER_FREQ_Y: f32 = 2.0;
pub const FLUTTER_PHASE_X: f32 = 0.5;
pub const FLUTTER_PHASE_Y: f32 = 0.8;

// Ribbon control polygons
pub const RIBBON_CURVE_POINTS: usize = 20;
pub const RIBBON_CURVE_TOP_Y: f32 = 10.0;
pub const RIBBON_CURVE_BOTTOM_Y: f32 = -5.0;
pub const RIBBON_OFFSET_PAIRS: usize = 3; // +- pairs of horizontal offsets -> 6 curves
pub const RIBBON_OFFSET_MAX: f32 = 8.0;
pub const RIBBON_JITTER_X: f32 = 0.3; // alternating per-point sideways jitter
pub const RIBBON_PINNED_POINTS: usize = 2; // points anchored at each polygon end
pub const RIBBON_PINNED_DEPTH: f32 = -50.0; // anchors sit far behind the camera
pub const RIBBON_MID_DEPTH: f32 = 3.5; // +-z for the unpinned points

// Ribbon traversal
pub const RIBBON_ADVANCE_PER_TICK: f32 = 0.001;
pub const RIBBON_RESPACING_FACTOR: f32 = 0.05; // extra spacing applied on resize

// Base meshes
pub const CONFETTI_SIZE: f32 = 0.12;
pub const RIBBON_WIDTH: f32 = 0.1;
pub const RIBBON_LENGTH: f32 = 1.8;

// Curve sampling resolution for the arc-length table
pub const CURVE_ARC_SAMPLES: usize = 200;

// Camera framing shared by both frontends
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
