//! Ribbon field: instances flowing along a generated set of smooth curves.

use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

use crate::constants::*;
use crate::curve::SampledCurve;
use crate::palette::random_palette_color;
use crate::state::InstanceRaw;

/// One ribbon bound to a curve by index.
#[derive(Clone, Debug)]
pub struct RibbonInstance {
    pub curve_index: usize,
    /// Normalized arc-parameter in [0, 1).
    pub arc_t: f32,
    pub color: [f32; 3],
}

pub struct RibbonField {
    curves: Vec<SampledCurve>,
    instances: Vec<RibbonInstance>,
    rng: StdRng,
}

impl RibbonField {
    /// Generate the curve set and bind `count` instances to it, evenly
    /// spaced along the path. Viewport dimensions are accepted for symmetry
    /// with the confetti field; the curve envelope itself is
    /// viewport-independent.
    pub fn new(seed: u64, _width: f32, _height: f32, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let curves = generate_curves(&mut rng);
        let instances = (0..count)
            .map(|i| RibbonInstance {
                curve_index: i % curves.len(),
                arc_t: i as f32 / count as f32,
                color: random_palette_color(&mut rng),
            })
            .collect();
        log::debug!("ribbon field: {} instances on {} curves", count, curves.len());
        Self {
            curves,
            instances,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn curves(&self) -> &[SampledCurve] {
        &self.curves
    }

    pub fn instances(&self) -> &[RibbonInstance] {
        &self.instances
    }

    /// Advance every instance a fixed arc-length step, wrapping at 1.
    pub fn tick(&mut self) {
        for inst in self.instances.iter_mut() {
            inst.arc_t = (inst.arc_t + RIBBON_ADVANCE_PER_TICK).fract();
        }
    }

    /// Regenerate the curve set from scratch and rebind the instances.
    /// Existing paths are discarded wholesale; the visual jump on resize is
    /// accepted for a decorative effect. Colors are untouched.
    pub fn resize(&mut self, _width: f32, _height: f32) {
        self.curves = generate_curves(&mut self.rng);
        let count = self.instances.len();
        for (i, inst) in self.instances.iter_mut().enumerate() {
            inst.curve_index = i % self.curves.len();
            // Spacing stretched slightly to keep rebound ribbons from
            // overlapping; wrapped so the parameter stays in [0, 1).
            inst.arc_t = ((i as f32 + RIBBON_RESPACING_FACTOR * i as f32) / count as f32).fract();
        }
        log::debug!("ribbon curves regenerated ({})", self.curves.len());
    }

    /// Emit one transform and color per instance, in instance-index order.
    pub fn write_instances(&self, out: &mut Vec<InstanceRaw>) {
        out.reserve(self.instances.len());
        for inst in &self.instances {
            let (position, rotation) = self.curves[inst.curve_index].transform_at(inst.arc_t);
            out.push(InstanceRaw::new(
                Mat4::from_rotation_translation(rotation, position),
                inst.color,
            ));
        }
    }
}

// Six 20-point control polygons descending from above the viewport to below
// it: three +- pairs of horizontal offsets, alternating sideways jitter, and
// endpoints pinned far behind the camera so the paths enter and leave
// off-screen. The per-point depth draw is shared across the six polygons of
// one generation.
fn generate_curves(rng: &mut StdRng) -> Vec<SampledCurve> {
    let mut offsets = [0.0f32; RIBBON_OFFSET_PAIRS * 2];
    for (k, offset) in offsets.iter_mut().enumerate() {
        let magnitude = rng.gen::<f32>() * RIBBON_OFFSET_MAX;
        *offset = if k % 2 == 0 { -magnitude } else { magnitude };
    }

    let y_step = (RIBBON_CURVE_TOP_Y - RIBBON_CURVE_BOTTOM_Y) / (RIBBON_CURVE_POINTS - 1) as f32;
    let mut polygons: Vec<SmallVec<[Vec3; 20]>> =
        offsets.iter().map(|_| SmallVec::new()).collect();

    let mut positive = true;
    for i in 0..RIBBON_CURVE_POINTS {
        let y = RIBBON_CURVE_TOP_Y - i as f32 * y_step;
        let pinned = i < RIBBON_PINNED_POINTS || i >= RIBBON_CURVE_POINTS - RIBBON_PINNED_POINTS;
        let z = if pinned {
            RIBBON_PINNED_DEPTH
        } else if rng.gen::<f32>() < 0.5 {
            -RIBBON_MID_DEPTH
        } else {
            RIBBON_MID_DEPTH
        };
        for (polygon, &offset) in polygons.iter_mut().zip(offsets.iter()) {
            let x = if positive {
                offset + RIBBON_JITTER_X
            } else {
                offset - RIBBON_JITTER_X
            };
            polygon.push(Vec3::new(x, y, z));
        }
        positive = !positive;
    }

    polygons.into_iter().map(SampledCurve::new).collect()
}
