//! Thin orchestration over the two effect fields.

use crate::confetti::ConfettiField;
use crate::constants::{CONFETTI_COUNT, RIBBON_COUNT};
use crate::ribbon::RibbonField;

/// Host-facing construction parameters.
#[derive(Clone, Debug)]
pub struct EffectParams {
    pub confetti_count: usize,
    pub ribbon_count: usize,
    pub seed: u64,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            confetti_count: CONFETTI_COUNT,
            ribbon_count: RIBBON_COUNT,
            seed: 42,
        }
    }
}

/// Owns both fields and forwards the host's tick/resize signals. Each field
/// can be disposed independently; the other keeps animating.
pub struct EffectsDirector {
    confetti: Option<ConfettiField>,
    ribbon: Option<RibbonField>,
}

impl EffectsDirector {
    pub fn new(params: &EffectParams, width: f32, height: f32) -> Self {
        // Derive per-field RNG streams from the base seed so the fields can
        // be reseeded or reordered independently.
        let confetti_seed = mix_seed(params.seed, 0);
        let ribbon_seed = mix_seed(params.seed, 1);
        Self {
            confetti: Some(ConfettiField::new(
                confetti_seed,
                width,
                height,
                params.confetti_count,
            )),
            ribbon: Some(RibbonField::new(
                ribbon_seed,
                width,
                height,
                params.ribbon_count,
            )),
        }
    }

    pub fn confetti(&self) -> Option<&ConfettiField> {
        self.confetti.as_ref()
    }

    pub fn ribbon(&self) -> Option<&RibbonField> {
        self.ribbon.as_ref()
    }

    /// One animation step; `elapsed` is the host clock in seconds.
    pub fn tick(&mut self, elapsed: f32) {
        if let Some(confetti) = &mut self.confetti {
            confetti.tick(elapsed);
        }
        if let Some(ribbon) = &mut self.ribbon {
            ribbon.tick();
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(confetti) = &mut self.confetti {
            confetti.resize(width, height);
        }
        if let Some(ribbon) = &mut self.ribbon {
            ribbon.resize(width, height);
        }
    }

    /// Drop the confetti field. The host wires this to a click; the ribbon
    /// field keeps running.
    pub fn dispose_confetti(&mut self) {
        if self.confetti.take().is_some() {
            log::debug!("confetti field disposed");
        }
    }

    pub fn dispose_ribbon(&mut self) {
        if self.ribbon.take().is_some() {
            log::debug!("ribbon field disposed");
        }
    }
}

#[inline]
fn mix_seed(seed: u64, index: u64) -> u64 {
    seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
