use glam::Vec2;
use std::fmt;

/// A single cubic Bezier segment, parameterized over `[0, 1]`.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Bezier {
	pub p: [Vec2; 4],
}

impl Bezier {
	pub fn new(start: Vec2, control0: Vec2, control1: Vec2, end: Vec2) -> Self {
		Self {
			p: [start, control0, control1, end],
		}
	}

	pub fn linear(start: Vec2, end: Vec2) -> Self {
		Self::new(
			start,
			start.lerp(end, 1.0 / 3.0),
			start.lerp(end, 2.0 / 3.0),
			end,
		)
	}

	pub fn start(&self) -> Vec2 {
		self.p[0]
	}

	pub fn end(&self) -> Vec2 {
		self.p[3]
	}

	pub fn controls(&self) -> (Vec2, Vec2) {
		(self.p[1], self.p[2])
	}

	pub fn evaluate(&self, s: f32) -> Vec2 {
		debug_assert!((0.0..=1.0).contains(&s));
		let q = [
			self.p[0].lerp(self.p[1], s),
			self.p[1].lerp(self.p[2], s),
			self.p[2].lerp(self.p[3], s),
		];
		q[0].lerp(q[1], s).lerp(q[1].lerp(q[2], s), s)
	}

	pub fn derivative(&self, s: f32) -> Vec2 {
		debug_assert!((0.0..=1.0).contains(&s));
		let dq = [
			self.p[1] - self.p[0],
			self.p[2] - self.p[1],
			self.p[3] - self.p[2],
		];
		dq[0].lerp(dq[1], s).lerp(dq[1].lerp(dq[2], s), s) * 3.0
	}

	pub fn is_finite(&self) -> bool {
		self.p.iter().all(|p| p.is_finite())
	}
}

/// An ordered run of cubic segments, each starting where the previous one ended.
///
/// An empty curve is a valid value meaning there is nothing to draw.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Curve {
	segments: Vec<Bezier>,
}

impl Curve {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	pub fn len(&self) -> usize {
		self.segments.len()
	}

	pub fn segments(&self) -> &[Bezier] {
		&self.segments
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Bezier> {
		self.segments.iter()
	}

	pub fn start(&self) -> Option<Vec2> {
		self.segments.first().map(Bezier::start)
	}

	pub fn end(&self) -> Option<Vec2> {
		self.segments.last().map(Bezier::end)
	}

	pub fn is_finite(&self) -> bool {
		self.segments.iter().all(Bezier::is_finite)
	}
}

impl FromIterator<Bezier> for Curve {
	fn from_iter<I: IntoIterator<Item = Bezier>>(iter: I) -> Self {
		Self {
			segments: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Curve {
	type Item = &'a Bezier;
	type IntoIter = std::slice::Iter<'a, Bezier>;
	fn into_iter(self) -> Self::IntoIter {
		self.segments.iter()
	}
}

/// Formats the curve as SVG path data, e.g. `M 0 0 C 1 0, 2 0, 3 0`.
impl fmt::Display for Curve {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Some(start) = self.start() else {
			return Ok(());
		};
		write!(f, "M {} {}", start.x, start.y)?;
		for segment in &self.segments {
			let (c0, c1) = segment.controls();
			let end = segment.end();
			write!(
				f,
				" C {} {}, {} {}, {} {}",
				c0.x, c0.y, c1.x, c1.y, end.x, end.y
			)?;
		}
		Ok(())
	}
}
