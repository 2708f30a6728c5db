// Tests for the arc-length-parameterized Catmull-Rom curve.

use app_core::SampledCurve;
use glam::Vec3;
use smallvec::SmallVec;

fn curve_through(points: &[Vec3]) -> SampledCurve {
    SampledCurve::new(points.iter().copied().collect::<SmallVec<[Vec3; 20]>>())
}

#[test]
fn interpolates_the_endpoint_control_points() {
    let curve = curve_through(&[
        Vec3::new(0.0, 10.0, 0.0),
        Vec3::new(0.3, 5.0, -3.5),
        Vec3::new(-0.3, 0.0, 3.5),
        Vec3::new(0.3, -5.0, 0.0),
    ]);
    assert!(curve.point_at(0.0).distance(Vec3::new(0.0, 10.0, 0.0)) < 1e-3);
    assert!(curve.point_at(1.0).distance(Vec3::new(0.3, -5.0, 0.0)) < 1e-3);
}

#[test]
fn straight_line_tangent_matches_the_line() {
    let curve = curve_through(&[
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
    ]);
    for u in [0.1, 0.25, 0.5, 0.75, 0.9] {
        let tangent = curve.tangent_at(u);
        assert!(tangent.dot(Vec3::X) > 0.999);
    }
}

#[test]
fn straight_line_length_matches_the_span() {
    let curve = curve_through(&[
        Vec3::ZERO,
        Vec3::new(0.0, -2.0, 0.0),
        Vec3::new(0.0, -4.0, 0.0),
        Vec3::new(0.0, -6.0, 0.0),
    ]);
    assert!((curve.total_length() - 6.0).abs() < 0.05);
}

#[test]
fn arc_parameter_moves_at_uniform_speed() {
    // Unevenly spaced control points: without the length table, equal
    // parameter steps would cover wildly different distances.
    let curve = curve_through(&[
        Vec3::ZERO,
        Vec3::new(0.2, -0.2, 0.0),
        Vec3::new(0.4, -0.4, 0.0),
        Vec3::new(4.0, -4.0, 0.0),
        Vec3::new(8.0, -8.0, 0.0),
    ]);
    let du = 0.05;
    let mut steps = Vec::new();
    let mut prev = curve.point_at(0.0);
    let mut u = du;
    while u <= 0.95 {
        let p = curve.point_at(u);
        steps.push(p.distance(prev));
        prev = p;
        u += du;
    }
    let mean = steps.iter().sum::<f32>() / steps.len() as f32;
    for step in steps {
        assert!((step - mean).abs() < mean * 0.25);
    }
}

#[test]
fn transform_aligns_local_x_with_the_tangent() {
    let curve = curve_through(&[
        Vec3::new(0.0, 5.0, 0.0),
        Vec3::new(0.5, 2.0, -1.0),
        Vec3::new(-0.5, -1.0, 1.0),
        Vec3::new(0.0, -4.0, 0.0),
    ]);
    for u in [0.1, 0.4, 0.6, 0.9] {
        let (position, rotation) = curve.transform_at(u);
        assert!(position.distance(curve.point_at(u)) < 1e-6);
        let aligned = rotation * Vec3::X;
        assert!(aligned.dot(curve.tangent_at(u)) > 0.99);
    }
}
