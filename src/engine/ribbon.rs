use super::*;
use glam::Vec2;
use itertools::Itertools;

/// The offset points tracing both sides of a variable-width ribbon.
///
/// `right` runs in sample order while `left` runs backwards, so `right` followed by `left` walks
/// once around the ribbon.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RibbonPoints {
	pub right: Vec<Vec2>,
	pub left: Vec<Vec2>,
}

/// Offsets every sample along its vertex normal by its radius, on both sides.
///
/// Fewer than two samples have no normals, so both sides are empty.
pub fn ribbon_points(samples: &[Sample]) -> RibbonPoints {
	let positions = samples.iter().map(|s| s.position).collect_vec();
	let vertices = derive_vertices(&positions);
	let offsets = vertices
		.iter()
		.zip(samples)
		.map(|(vertex, sample)| (vertex.origin, vertex.normal * sample.radius))
		.collect_vec();

	RibbonPoints {
		right: offsets.iter().map(|&(origin, offset)| origin + offset).collect(),
		left: offsets
			.iter()
			.rev()
			.map(|&(origin, offset)| origin - offset)
			.collect(),
	}
}

/// Builds the `(right, left)` edge curves of the ribbon around `samples`.
///
/// Each edge is smoothed from its own offset points rather than by translating the spine, so the
/// control points follow the edge itself.
pub fn ribbon_curves(samples: &[Sample]) -> (Curve, Curve) {
	let RibbonPoints { right, left } = ribbon_points(samples);
	(spine_curve(&right), spine_curve(&left))
}
