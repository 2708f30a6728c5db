//! Smooth-path primitive used by the ribbon field.
//!
//! A `SampledCurve` interpolates an ordered set of control points with a
//! centripetal Catmull-Rom spline and resamples it into a cumulative
//! arc-length table, so callers address the path by a normalized
//! arc-parameter in [0, 1) and traverse it at uniform speed regardless of
//! how unevenly the control points are spaced.

use glam::{Mat3, Quat, Vec3};
use smallvec::SmallVec;

use crate::constants::CURVE_ARC_SAMPLES;

// Centripetal knot spacing; avoids the cusps and self-intersections the
// uniform variant produces on tight control polygons.
const KNOT_ALPHA: f32 = 0.5;
const MIN_KNOT_STEP: f32 = 1e-4;
const TANGENT_EPS: f32 = 1e-3;

#[derive(Clone, Debug)]
pub struct SampledCurve {
    points: SmallVec<[Vec3; 20]>,
    // Cumulative length at uniform spline-parameter samples, lengths[0] == 0.
    lengths: Vec<f32>,
    total_length: f32,
}

impl SampledCurve {
    /// Build a curve through `points` (at least two, by contract).
    pub fn new(points: SmallVec<[Vec3; 20]>) -> Self {
        debug_assert!(points.len() >= 2);
        let mut curve = Self {
            points,
            lengths: Vec::new(),
            total_length: 0.0,
        };
        curve.rebuild_length_table();
        curve
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    /// Position at normalized arc-parameter `u`.
    pub fn point_at(&self, u: f32) -> Vec3 {
        self.point_at_param(self.param_for_arc(u))
    }

    /// Unit tangent at normalized arc-parameter `u`.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let t = self.param_for_arc(u);
        let a = self.point_at_param((t - TANGENT_EPS).max(0.0));
        let b = self.point_at_param((t + TANGENT_EPS).min(1.0));
        (b - a).normalize_or_zero()
    }

    /// Position plus an orientation aligning the local +X axis with the
    /// path tangent at `u`. The basis is seeded from world up, falling back
    /// to +X where the tangent is near-vertical.
    pub fn transform_at(&self, u: f32) -> (Vec3, Quat) {
        let tangent = self.tangent_at(u);
        if tangent == Vec3::ZERO {
            return (self.point_at(u), Quat::IDENTITY);
        }
        let mut reference = Vec3::Y;
        if tangent.dot(reference).abs() > 0.9 {
            reference = Vec3::X;
        }
        let binormal = tangent.cross(reference).normalize_or_zero();
        let normal = binormal.cross(tangent);
        let rotation = Quat::from_mat3(&Mat3::from_cols(tangent, normal, binormal));
        (self.point_at(u), rotation)
    }

    // Map a normalized arc-parameter onto the spline parameter via the
    // length table.
    fn param_for_arc(&self, u: f32) -> f32 {
        let u = u.clamp(0.0, 1.0);
        if self.total_length <= 0.0 {
            return u;
        }
        let target = u * self.total_length;
        let i = match self
            .lengths
            .binary_search_by(|len| len.partial_cmp(&target).unwrap_or(std::cmp::Ordering::Less))
        {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let i = i.min(self.lengths.len() - 2);
        let span = self.lengths[i + 1] - self.lengths[i];
        let frac = if span > 0.0 {
            (target - self.lengths[i]) / span
        } else {
            0.0
        };
        (i as f32 + frac) / (self.lengths.len() - 1) as f32
    }

    // Evaluate the spline at a uniform parameter in [0, 1] spanning the
    // segments, with reflected endpoint extrapolation.
    fn point_at_param(&self, t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        let segments = (self.points.len() - 1) as f32;
        let scaled = t * segments;
        let i1 = (scaled.floor() as usize).min(self.points.len() - 2);
        let local = scaled - i1 as f32;

        let p1 = self.points[i1];
        let p2 = self.points[i1 + 1];
        let p0 = if i1 == 0 {
            p1 * 2.0 - p2
        } else {
            self.points[i1 - 1]
        };
        let p3 = if i1 + 2 >= self.points.len() {
            p2 * 2.0 - p1
        } else {
            self.points[i1 + 2]
        };

        centripetal_segment(p0, p1, p2, p3, local)
    }

    fn rebuild_length_table(&mut self) {
        let samples = CURVE_ARC_SAMPLES + 1;
        self.lengths.clear();
        self.lengths.reserve(samples);
        self.lengths.push(0.0);
        let mut prev = self.point_at_param(0.0);
        let mut total = 0.0;
        for i in 1..samples {
            let p = self.point_at_param(i as f32 / (samples - 1) as f32);
            total += p.distance(prev);
            self.lengths.push(total);
            prev = p;
        }
        self.total_length = total;
    }
}

// Barry-Goldman evaluation of one Catmull-Rom segment between p1 and p2,
// with centripetal knot spacing.
fn centripetal_segment(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, s: f32) -> Vec3 {
    let t0 = 0.0;
    let t1 = t0 + p0.distance(p1).powf(KNOT_ALPHA).max(MIN_KNOT_STEP);
    let t2 = t1 + p1.distance(p2).powf(KNOT_ALPHA).max(MIN_KNOT_STEP);
    let t3 = t2 + p2.distance(p3).powf(KNOT_ALPHA).max(MIN_KNOT_STEP);
    let t = t1 + (t2 - t1) * s.clamp(0.0, 1.0);

    let a1 = p0 * ((t1 - t) / (t1 - t0)) + p1 * ((t - t0) / (t1 - t0));
    let a2 = p1 * ((t2 - t) / (t2 - t1)) + p2 * ((t - t1) / (t2 - t1));
    let a3 = p2 * ((t3 - t) / (t3 - t2)) + p3 * ((t - t2) / (t3 - t2));
    let b1 = a1 * ((t2 - t) / (t2 - t0)) + a2 * ((t - t0) / (t2 - t0));
    let b2 = a2 * ((t3 - t) / (t3 - t1)) + a3 * ((t - t1) / (t3 - t1));
    b1 * ((t2 - t) / (t2 - t1)) + b2 * ((t - t1) / (t2 - t1))
}
