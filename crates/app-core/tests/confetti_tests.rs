// Behavior tests for the confetti field and the director lifecycle.

use app_core::{
    ConfettiField, EffectParams, EffectsDirector, CONFETTI_BASE_FALL_SPEED,
    CONFETTI_EXTRA_FALL_SPEED, CONFETTI_SPAWN_Y,
};

fn make_field() -> ConfettiField {
    ConfettiField::new(42, 1920.0, 1080.0, 150)
}

#[test]
fn spawns_a_full_row_at_the_top() {
    let field = make_field();
    assert_eq!(field.len(), 150);
    let span = field.aspect() * 4.0;
    for inst in field.instances() {
        assert_eq!(inst.position.y, CONFETTI_SPAWN_Y);
        assert_eq!(inst.position.z, 0.0);
        assert!(inst.position.x >= -span && inst.position.x <= span);
    }
    // Positions are randomized, not a single column.
    let first_x = field.instances()[0].position.x;
    assert!(field.instances().iter().any(|i| i.position.x != first_x));
}

#[test]
fn velocity_profiles_stay_in_range() {
    let field = make_field();
    let min_fall = CONFETTI_BASE_FALL_SPEED;
    let max_fall = CONFETTI_BASE_FALL_SPEED + CONFETTI_EXTRA_FALL_SPEED;
    for inst in field.instances() {
        assert!(inst.velocity.x.abs() <= 0.015 + 1e-6);
        assert!(inst.velocity.y <= -min_fall && inst.velocity.y >= -max_fall);
        assert_eq!(inst.velocity.z, 0.0);
        assert_eq!(inst.spin, 0.0);
    }
}

#[test]
fn first_tick_descends_by_fall_speed() {
    let mut field = make_field();
    let fall_speeds: Vec<f32> = field.instances().iter().map(|i| i.velocity.y).collect();
    field.tick(0.0);
    for (inst, vy) in field.instances().iter().zip(fall_speeds) {
        assert!(inst.position.y < CONFETTI_SPAWN_Y);
        assert!((inst.position.y - (CONFETTI_SPAWN_Y + vy)).abs() < 1e-6);
    }
}

#[test]
fn instances_stay_inside_bounds_after_many_ticks() {
    let mut field = make_field();
    let x_limit = field.aspect() * 5.0;
    for step in 0..2000 {
        field.tick(step as f32 / 60.0);
        for inst in field.instances() {
            assert!(inst.position.y >= -5.0 && inst.position.y <= 5.0);
            assert!(inst.position.x >= -x_limit && inst.position.x <= x_limit);
        }
    }
}

#[test]
fn respawned_instances_keep_velocity_and_color() {
    let mut field = make_field();
    let before: Vec<_> = field
        .instances()
        .iter()
        .map(|i| (i.velocity, i.color))
        .collect();
    for step in 0..2000 {
        field.tick(step as f32 / 60.0);
    }
    field.resize(1024.0, 768.0);
    for (inst, (velocity, color)) in field.instances().iter().zip(before) {
        assert_eq!(inst.velocity, velocity);
        assert_eq!(inst.color, color);
    }
}

#[test]
fn resize_rescatters_across_the_new_bounds() {
    let mut field = make_field();
    field.resize(800.0, 600.0);
    assert_eq!(field.len(), 150);
    let span = (800.0 / 600.0) * 4.0;
    for inst in field.instances() {
        assert!(inst.position.x >= -span && inst.position.x <= span);
        assert!(inst.position.y >= -2.5 && inst.position.y <= 2.5);
        assert_eq!(inst.position.z, 0.0);
    }
}

#[test]
fn same_seed_fields_evolve_identically() {
    let mut a = ConfettiField::new(7, 1280.0, 720.0, 64);
    let mut b = ConfettiField::new(7, 1280.0, 720.0, 64);
    for step in 0..500 {
        let elapsed = step as f32 / 60.0;
        a.tick(elapsed);
        b.tick(elapsed);
    }
    for (ia, ib) in a.instances().iter().zip(b.instances()) {
        assert_eq!(ia.position, ib.position);
        assert_eq!(ia.color, ib.color);
    }
}

#[test]
fn write_instances_places_translation_in_the_model_matrix() {
    let mut field = make_field();
    field.tick(1.25);
    let mut out = Vec::new();
    field.write_instances(&mut out);
    assert_eq!(out.len(), field.len());
    for (raw, inst) in out.iter().zip(field.instances()) {
        assert!((raw.model[3][0] - inst.position.x).abs() < 1e-6);
        assert!((raw.model[3][1] - inst.position.y).abs() < 1e-6);
        assert!((raw.model[3][2] - inst.position.z).abs() < 1e-6);
        assert_eq!(raw.color[3], 1.0);
    }
}

#[test]
fn director_disposes_fields_independently() {
    let mut director = EffectsDirector::new(&EffectParams::default(), 1920.0, 1080.0);
    assert!(director.confetti().is_some());
    assert!(director.ribbon().is_some());

    director.dispose_confetti();
    assert!(director.confetti().is_none());
    assert!(director.ribbon().is_some());

    // Ticking after disposal still advances the surviving field.
    let before = director.ribbon().map(|r| r.instances()[0].arc_t);
    director.tick(1.0);
    let after = director.ribbon().map(|r| r.instances()[0].arc_t);
    assert_ne!(before, after);
    director.resize(640.0, 480.0);
    assert!(director.ribbon().is_some());

    director.dispose_ribbon();
    assert!(director.ribbon().is_none());
    director.tick(2.0);
}
