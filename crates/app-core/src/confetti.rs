//! Falling confetti field.
//!
//! Owns a fixed batch of instances whose motion state lives in a plain
//! `Vec` parallel to the GPU instance index; the renderer only ever sees
//! the transforms emitted by [`ConfettiField::write_instances`].

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::*;
use crate::palette::random_palette_color;
use crate::state::InstanceRaw;

/// Per-instance motion profile.
#[derive(Clone, Debug)]
pub struct ConfettiInstance {
    pub position: Vec3,
    /// World units per tick; y is always downward.
    pub velocity: Vec3,
    /// Constant zero by construction in the shipped effect; the term stays
    /// in the rotation formula so its shape is preserved.
    pub spin: f32,
    pub color: [f32; 3],
}

pub struct ConfettiField {
    instances: Vec<ConfettiInstance>,
    aspect: f32,
    elapsed: f32,
    rng: StdRng,
}

impl ConfettiField {
    /// Spawn `count` instances in a row at the top of the visible bounds,
    /// spread across the horizontal span for the given viewport.
    pub fn new(seed: u64, width: f32, height: f32, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let aspect = width / height;
        let instances = (0..count)
            .map(|_| ConfettiInstance {
                position: Vec3::new(spawn_x(&mut rng, aspect), CONFETTI_SPAWN_Y, 0.0),
                velocity: random_velocity(&mut rng),
                spin: 0.0,
                color: random_palette_color(&mut rng),
            })
            .collect();
        log::debug!("confetti field: {} instances, aspect {:.3}", count, aspect);
        Self {
            instances,
            aspect,
            elapsed: 0.0,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn instances(&self) -> &[ConfettiInstance] {
        &self.instances
    }

    /// Advance every instance by one tick. Instances leaving the visible
    /// bounds respawn at the top with a fresh random x; velocity and color
    /// survive the respawn so the rainfall is continuous.
    pub fn tick(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        let aspect = self.aspect;
        let x_limit = CONFETTI_KILL_SPAN * aspect;
        let rng = &mut self.rng;
        for inst in self.instances.iter_mut() {
            inst.position += inst.velocity;
            let out = inst.position.x < -x_limit
                || inst.position.x > x_limit
                || inst.position.y < -CONFETTI_KILL_Y
                || inst.position.y > CONFETTI_KILL_Y;
            if out {
                inst.position = Vec3::new(spawn_x(rng, aspect), CONFETTI_SPAWN_Y, 0.0);
            }
        }
    }

    /// Re-scatter every instance across the new bounds. Deliberately a full
    /// reset rather than a rescale; velocity and color are untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
        let aspect = self.aspect;
        let rng = &mut self.rng;
        for inst in self.instances.iter_mut() {
            inst.position = Vec3::new(
                spawn_x(rng, aspect),
                (rng.gen::<f32>() - 0.5) * CONFETTI_RESCATTER_SPAN_Y,
                0.0,
            );
        }
        log::debug!("confetti field re-scattered, aspect {:.3}", aspect);
    }

    /// Emit one transform and color per instance, in instance-index order.
    /// Call after `tick` so the whole batch reflects the same frame.
    pub fn write_instances(&self, out: &mut Vec<InstanceRaw>) {
        out.reserve(self.instances.len());
        for (i, inst) in self.instances.iter().enumerate() {
            let model = Mat4::from_rotation_translation(self.flutter(i, inst.spin), inst.position);
            out.push(InstanceRaw::new(model, inst.color));
        }
    }

    // Flutter is recomputed from scratch each frame, not integrated: two
    // oscillators at different frequencies, phase-shifted per instance.
    fn flutter(&self, index: usize, spin: f32) -> Quat {
        let i = index as f32;
        let ripple_x = (self.elapsed * FLUTTER_FREQ_X + i * FLUTTER_PHASE_X).sin() * FLUTTER_AMPLITUDE;
        let ripple_y = (self.elapsed * FLUTTER_FREQ_Y + i * FLUTTER_PHASE_Y).cos() * FLUTTER_AMPLITUDE;
        Quat::from_euler(
            EulerRot::XYZ,
            spin + ripple_x * FLUTTER_GAIN,
            spin + ripple_y * FLUTTER_GAIN,
            0.0,
        )
    }
}

fn spawn_x<R: Rng>(rng: &mut R, aspect: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * aspect * CONFETTI_SPAWN_SPAN
}

fn random_velocity<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * CONFETTI_DRIFT_SPAN,
        -(rng.gen::<f32>() * CONFETTI_EXTRA_FALL_SPEED + CONFETTI_BASE_FALL_SPEED),
        0.0,
    )
}
