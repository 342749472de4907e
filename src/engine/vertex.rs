use glam::Vec2;

/// Lengths at or below this are treated as degenerate directions.
pub const DEGENERATE_LENGTH: f32 = 1e-9;

/// The length of `v`, without overflowing for components beyond `sqrt(f32::MAX)`.
pub fn length(v: Vec2) -> f32 {
	v.x.hypot(v.y)
}

/// The unit vector along `v`, or `None` if `v` is too short to have a direction.
pub fn direction(v: Vec2) -> Option<Vec2> {
	let length = length(v);
	(length > DEGENERATE_LENGTH).then(|| v / length)
}

/// The geometric frame at one point of a polyline, used to build smooth cubic segments through it.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
	pub origin: Vec2,
	/// Incoming control point, offset backwards along the tangent by a sixth of the previous edge.
	pub left_control: Vec2,
	/// Outgoing control point, offset forwards along the tangent by a sixth of the next edge.
	pub right_control: Vec2,
	/// Unit vector on the clockwise side of the tangent, or zero where the tangent vanishes.
	pub normal: Vec2,
}

impl Vertex {
	fn new(previous: Vec2, origin: Vec2, next: Vec2) -> Self {
		let incoming = origin - previous;
		let outgoing = next - origin;

		// At the ends one of these is zero, so the tangent is just the other edge's direction. It is
		// intentionally not renormalized.
		let tangent = direction(incoming).unwrap_or(incoming) + direction(outgoing).unwrap_or(outgoing);
		let normal = direction(-tangent.perp()).unwrap_or(Vec2::ZERO);

		Self {
			origin,
			left_control: origin - tangent * (length(incoming) / 6.0),
			right_control: origin + tangent * (length(outgoing) / 6.0),
			normal,
		}
	}
}

/// Derives one [`Vertex`] per point, using clamped one-sided differences at the ends.
///
/// Returns an empty sequence for fewer than two points.
pub fn derive_vertices(points: &[Vec2]) -> Vec<Vertex> {
	let n = points.len();
	if n < 2 {
		return Vec::new();
	}
	(0..n)
		.map(|i| {
			let previous = points[i.saturating_sub(1)];
			let next = points[(i + 1).min(n - 1)];
			Vertex::new(previous, points[i], next)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::*;
	use approx::assert_abs_diff_eq;
	use glam::vec2;

	#[test]
	fn fewer_than_two_points() {
		assert!(derive_vertices(&[]).is_empty());
		assert!(derive_vertices(&[vec2(1.0, 2.0)]).is_empty());
	}

	#[test]
	fn two_points_share_normal() {
		let vertices = derive_vertices(&[vec2(0.0, 0.0), vec2(3.0, 4.0)]);
		assert_eq!(vertices.len(), 2);
		assert_eq!(vertices[0].normal, vertices[1].normal);
		assert_abs_diff_eq!(vertices[0].normal.x, 0.8, epsilon = 1e-6);
		assert_abs_diff_eq!(vertices[0].normal.y, -0.6, epsilon = 1e-6);
	}

	#[test]
	fn normal_is_clockwise() {
		let vertices = derive_vertices(&positions(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]));
		for vertex in &vertices {
			assert_eq!(vertex.normal, vec2(0.0, -1.0));
		}
	}

	#[test]
	fn end_controls() {
		let vertices = derive_vertices(&positions(&[(0.0, 0.0), (6.0, 0.0), (6.0, 12.0)]));

		// One-sided at the ends.
		assert_eq!(vertices[0].left_control, vertices[0].origin);
		assert_eq!(vertices[0].right_control, vec2(1.0, 0.0));
		assert_eq!(vertices[2].right_control, vertices[2].origin);
		assert_eq!(vertices[2].left_control, vec2(6.0, 10.0));

		// The corner tangent is the unnormalized sum of both edge directions.
		assert_eq!(vertices[1].left_control, vec2(5.0, -1.0));
		assert_eq!(vertices[1].right_control, vec2(8.0, 2.0));
		assert_abs_diff_eq!(vertices[1].normal.x, 0.5f32.sqrt(), epsilon = 1e-6);
		assert_abs_diff_eq!(vertices[1].normal.y, -(0.5f32.sqrt()), epsilon = 1e-6);
	}

	#[test]
	fn coincident_points_have_zero_normal() {
		let vertices = derive_vertices(&positions(&[(1.0, 1.0), (1.0, 1.0)]));
		assert_eq!(vertices.len(), 2);
		for vertex in &vertices {
			assert_eq!(vertex.normal, Vec2::ZERO);
			assert_eq!(vertex.left_control, vertex.origin);
			assert_eq!(vertex.right_control, vertex.origin);
		}

		let vertices = derive_vertices(&positions(&[(0.0, 0.0), (0.0, 0.0), (4.0, 0.0)]));
		assert_eq!(vertices[0].normal, Vec2::ZERO);
		assert_eq!(vertices[1].normal, vec2(0.0, -1.0));
		assert!(vertices.iter().all(|v| v.normal.is_finite()));
	}

	#[test]
	fn reversal_cancels_tangent() {
		let vertices = derive_vertices(&positions(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]));
		assert_eq!(vertices[1].normal, Vec2::ZERO);
		assert_eq!(vertices[1].left_control, vertices[1].origin);
	}

	#[test]
	fn huge_coordinates_stay_finite() {
		let vertices = derive_vertices(&positions(&[(0.0, 0.0), (3e19, 0.0), (6e19, 0.0)]));
		for vertex in &vertices {
			assert!(vertex.left_control.is_finite());
			assert!(vertex.right_control.is_finite());
			assert_eq!(vertex.normal, vec2(0.0, -1.0));
		}
		assert_abs_diff_eq!(vertices[0].right_control.x, 5e18, epsilon = 1e13);
		assert_abs_diff_eq!(vertices[2].left_control.x, 5.5e19, epsilon = 1e14);
	}

	#[test]
	fn random_input_stays_finite() {
		let mut rng = fastrand::Rng::with_seed(7);
		for _ in 0..64 {
			let n = rng.usize(0..24);
			let points = random_points(&mut rng, n);
			for vertex in derive_vertices(&points) {
				assert!(vertex.normal.is_finite());
				assert!(vertex.left_control.is_finite());
				assert!(vertex.right_control.is_finite());
				let length = vertex.normal.length();
				assert!(length == 0.0 || (length - 1.0).abs() < 1e-5);
			}
		}
	}
}
