use super::*;
use crate::geom::AABox;
use glam::Vec2;
use itertools::Itertools;

/// One pointer reading: where it was and the brush radius derived from its pressure.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Sample {
	pub position: Vec2,
	pub radius: f32,
}

impl Sample {
	pub fn new(position: Vec2, radius: f32) -> Self {
		Self { position, radius }
	}
}

/// The three curves a renderer draws for a stroke.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct StrokeGeometry {
	pub spine: Curve,
	pub left_edge: Curve,
	pub right_edge: Curve,
}

/// The samples captured between a press and a release of one input stream, in arrival order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Stroke {
	samples: Vec<Sample>,
}

impl Stroke {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn add_sample(&mut self, sample: Sample) {
		self.samples.push(sample);
	}

	pub(crate) fn clear(&mut self) {
		self.samples.clear();
	}

	pub fn samples(&self) -> &[Sample] {
		&self.samples
	}

	pub fn len(&self) -> usize {
		self.samples.len()
	}

	pub fn is_empty(&self) -> bool {
		self.samples.is_empty()
	}

	pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
		self.samples.iter().map(|s| s.position)
	}

	pub fn spine(&self) -> Curve {
		spine_curve(&self.positions().collect_vec())
	}

	/// The `(right, left)` ribbon edges.
	pub fn edges(&self) -> (Curve, Curve) {
		ribbon_curves(&self.samples)
	}

	pub fn geometry(&self) -> StrokeGeometry {
		let (right_edge, left_edge) = self.edges();
		StrokeGeometry {
			spine: self.spine(),
			left_edge,
			right_edge,
		}
	}

	/// The smallest box containing every sample's disk.
	pub fn bounds(&self) -> AABox {
		self.samples.iter().fold(AABox::empty(), |b, s| {
			b.expanded_to_contain_disk(s.position, s.radius)
		})
	}
}

impl FromIterator<Sample> for Stroke {
	fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
		Self {
			samples: iter.into_iter().collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::*;
	use glam::vec2;

	#[test]
	fn geometry_of_short_strokes_is_empty() {
		assert_eq!(Stroke::new().geometry(), StrokeGeometry::default());
		let single = stroke(&[(4.0, 4.0, 2.0)]);
		assert_eq!(single.geometry(), StrokeGeometry::default());
	}

	#[test]
	fn geometry_matches_builders() {
		let stroke = stroke(&[(0.0, 0.0, 1.0), (5.0, 5.0, 2.0), (10.0, 0.0, 1.5)]);
		let geometry = stroke.geometry();
		let positions = stroke.positions().collect_vec();
		let (right, left) = ribbon_curves(stroke.samples());
		assert_eq!(geometry.spine, spine_curve(&positions));
		assert_eq!(geometry.right_edge, right);
		assert_eq!(geometry.left_edge, left);
		assert_eq!(geometry.spine.len(), 2);
	}

	#[test]
	fn bounds_cover_sample_disks() {
		assert!(Stroke::new().bounds().is_empty());

		let stroke = stroke(&[(0.0, 0.0, 1.0), (10.0, 4.0, 3.0)]);
		let bounds = stroke.bounds();
		assert!(!bounds.is_empty());
		assert_eq!(bounds.min(), vec2(-1.0, -1.0));
		assert_eq!(bounds.max(), vec2(13.0, 7.0));
		assert!(bounds.contains(vec2(12.5, 6.5)));
		assert!(!bounds.contains(vec2(13.5, 0.0)));
	}

	#[test]
	fn samples_keep_insertion_order() {
		let mut stroke = Stroke::new();
		for i in 0..5 {
			stroke.add_sample(Sample::new(vec2(i as f32, 0.0), 1.0));
		}
		let xs = stroke.positions().map(|p| p.x).collect_vec();
		assert_eq!(xs, [0.0, 1.0, 2.0, 3.0, 4.0]);
		stroke.clear();
		assert!(stroke.is_empty());
	}
}
