// Behavior tests for the ribbon field: curve generation, traversal, resize.

use app_core::{RibbonField, RIBBON_CURVE_POINTS, RIBBON_PINNED_DEPTH};

fn make_field() -> RibbonField {
    RibbonField::new(42, 1920.0, 1080.0, 10)
}

// Shortest distance to zero modulo 1, for wraparound comparisons.
fn dist_to_zero(t: f32) -> f32 {
    t.min(1.0 - t)
}

#[test]
fn generates_six_curves_with_even_instance_spacing() {
    let field = make_field();
    assert_eq!(field.curves().len(), 6);
    assert_eq!(field.len(), 10);

    let mut per_curve = [0usize; 6];
    for (i, inst) in field.instances().iter().enumerate() {
        assert_eq!(inst.curve_index, i % 6);
        assert!((inst.arc_t - i as f32 / 10.0).abs() < 1e-6);
        per_curve[inst.curve_index] += 1;
    }
    // 10 instances over 6 curves: at most ceil(10 / 6) = 2 per curve.
    assert!(per_curve.iter().all(|&n| n <= 2));
}

#[test]
fn control_polygons_match_the_layout_rule() {
    let field = make_field();
    for curve in field.curves() {
        let points = curve.control_points();
        assert_eq!(points.len(), RIBBON_CURVE_POINTS);

        // Endpoints pinned far behind the camera.
        for i in [0, 1, RIBBON_CURVE_POINTS - 2, RIBBON_CURVE_POINTS - 1] {
            assert_eq!(points[i].z, RIBBON_PINNED_DEPTH);
        }
        for p in &points[2..RIBBON_CURVE_POINTS - 2] {
            assert_eq!(p.z.abs(), 3.5);
        }

        // y descends linearly from the top bound to the bottom bound.
        assert!((points[0].y - 10.0).abs() < 1e-5);
        assert!((points[RIBBON_CURVE_POINTS - 1].y - -5.0).abs() < 1e-5);
        for pair in points.windows(2) {
            assert!(pair[1].y < pair[0].y);
        }
    }
}

#[test]
fn arc_parameter_stays_normalized() {
    let mut field = make_field();
    for _ in 0..5000 {
        field.tick();
        for inst in field.instances() {
            assert!(inst.arc_t >= 0.0 && inst.arc_t < 1.0);
        }
    }
}

#[test]
fn a_thousand_ticks_wrap_back_to_the_start() {
    let mut field = make_field();
    assert_eq!(field.instances()[0].arc_t, 0.0);
    for _ in 0..1000 {
        field.tick();
    }
    // 1000 * 0.001 is exactly one lap; only float accumulation error remains.
    assert!(dist_to_zero(field.instances()[0].arc_t) < 1e-3);
}

#[test]
fn resize_regenerates_curves_and_respaces_instances() {
    let mut field = make_field();
    let colors: Vec<_> = field.instances().iter().map(|i| i.color).collect();
    let old_first_points: Vec<_> = field
        .curves()
        .iter()
        .map(|c| c.control_points()[2])
        .collect();

    field.resize(1000.0, 500.0);

    assert_eq!(field.curves().len(), 6);
    for (i, inst) in field.instances().iter().enumerate() {
        assert_eq!(inst.curve_index, i % 6);
        assert!((inst.arc_t - (i as f32 + 0.05 * i as f32) / 10.0).abs() < 1e-6);
    }
    // Colors survive the rebinding.
    for (inst, color) in field.instances().iter().zip(colors) {
        assert_eq!(inst.color, color);
    }
    // The curve set is a fresh random draw, not the old one.
    let new_first_points: Vec<_> = field
        .curves()
        .iter()
        .map(|c| c.control_points()[2])
        .collect();
    assert_ne!(old_first_points, new_first_points);
}

#[test]
fn same_seed_fields_generate_identical_curves() {
    let a = RibbonField::new(11, 1280.0, 720.0, 10);
    let b = RibbonField::new(11, 1280.0, 720.0, 10);
    for (ca, cb) in a.curves().iter().zip(b.curves()) {
        assert_eq!(ca.control_points(), cb.control_points());
    }
    for (ia, ib) in a.instances().iter().zip(b.instances()) {
        assert_eq!(ia.color, ib.color);
        assert_eq!(ia.arc_t, ib.arc_t);
    }
}

#[test]
fn write_instances_emits_one_transform_per_ribbon() {
    let mut field = make_field();
    field.tick();
    let mut out = Vec::new();
    field.write_instances(&mut out);
    assert_eq!(out.len(), field.len());
    for raw in &out {
        assert_eq!(raw.color[3], 1.0);
        // Transforms sit somewhere on the curve envelope, not at the origin.
        let translation = [raw.model[3][0], raw.model[3][1], raw.model[3][2]];
        assert!(translation.iter().any(|&v| v != 0.0));
    }
}
