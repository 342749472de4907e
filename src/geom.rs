use glam::Vec2;

/// An axis-aligned box, half-open on its upper edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn size(&self) -> Vec2 {
		if self.is_empty() {
			Vec2::ZERO
		} else {
			self.max - self.min
		}
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn expanded_to_contain_disk(self, center: Vec2, radius: f32) -> Self {
		let radius = Vec2::splat(radius.max(0.0));
		Self::new(self.min.min(center - radius), self.max.max(center + radius))
	}

	pub fn union(self, other: Self) -> Self {
		if other.is_empty() {
			return self;
		}
		self.expanded_to_contain(other.min).expanded_to_contain(other.max)
	}

	pub fn padded(self, padding: f32) -> Self {
		if self.is_empty() {
			return self;
		}
		Self::new(self.min - padding, self.max + padding)
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn contains(&self, point: Vec2) -> bool {
		point.x < self.max.x
			&& point.y < self.max.y
			&& !(point.x < self.min.x)
			&& !(point.y < self.min.y)
	}
}
