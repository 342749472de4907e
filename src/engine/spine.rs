use super::*;
use glam::Vec2;
use itertools::Itertools;

/// Builds a smooth curve through `points` with one cubic segment per consecutive pair.
///
/// Each segment interpolates its two endpoints and takes its control points from their vertices, so
/// neighbouring segments share a tangent direction. Fewer than two points give an empty curve.
pub fn spine_curve(points: &[Vec2]) -> Curve {
	derive_vertices(points)
		.iter()
		.tuple_windows()
		.map(|(a, b)| Bezier::new(a.origin, a.right_control, b.left_control, b.origin))
		.collect()
}
