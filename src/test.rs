use crate::*;
use glam::{vec2, Vec2};

pub fn positions(points: &[(f32, f32)]) -> Vec<Vec2> {
	points.iter().map(|&(x, y)| vec2(x, y)).collect()
}

pub fn samples(points: &[(f32, f32, f32)]) -> Vec<Sample> {
	points
		.iter()
		.map(|&(x, y, radius)| Sample::new(vec2(x, y), radius))
		.collect()
}

pub fn stroke(points: &[(f32, f32, f32)]) -> Stroke {
	samples(points).into_iter().collect()
}

/// Random points in a 100x100 square, with roughly one in four repeating its predecessor so that
/// degenerate tangents come up regularly.
pub fn random_points(rng: &mut fastrand::Rng, n: usize) -> Vec<Vec2> {
	let mut points: Vec<Vec2> = Vec::with_capacity(n);
	for _ in 0..n {
		let point = match points.last() {
			Some(&last) if rng.u8(0..4) == 0 => last,
			_ => vec2(100.0 * rng.f32(), 100.0 * rng.f32()),
		};
		points.push(point);
	}
	points
}
