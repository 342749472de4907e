use super::*;
use glam::Vec2;

/// Distinguishes concurrent pointer streams, e.g. separate touch contacts.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display, derive_more::From,
)]
#[display("#{_0}")]
pub struct StreamId(pub u64);

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
	#[default]
	Idle,
	Capturing(StreamId),
}

/// Committed strokes, reset in bulk once full.
///
/// Committing into a full history clears it before appending, so it holds between one and
/// `capacity` strokes after any commit. Older strokes are not evicted one at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeHistory {
	strokes: Vec<Stroke>,
	capacity: usize,
}

impl StrokeHistory {
	pub fn new(capacity: usize) -> Self {
		Self {
			strokes: Vec::with_capacity(capacity),
			capacity,
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	pub fn len(&self) -> usize {
		self.strokes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strokes.is_empty()
	}

	pub fn commit(&mut self, stroke: Stroke) {
		if self.strokes.len() >= self.capacity {
			tracing::debug!(discarded = self.strokes.len(), "stroke history full, resetting");
			self.strokes.clear();
		}
		self.strokes.push(stroke);
	}
}

impl Default for StrokeHistory {
	fn default() -> Self {
		Self::new(DEFAULT_HISTORY_CAPACITY)
	}
}

/// Collects samples from one pointer stream at a time and commits finished strokes.
///
/// The first stream to press owns the capture until it releases or cancels. Events from any other
/// stream are ignored without touching the in-progress stroke.
#[derive(Debug, Clone)]
pub struct CaptureController {
	config: CaptureConfig,
	state: CaptureState,
	in_progress: Stroke,
	history: StrokeHistory,
}

impl Default for CaptureController {
	fn default() -> Self {
		Self::new(CaptureConfig::default())
	}
}

impl CaptureController {
	pub fn new(config: CaptureConfig) -> Self {
		Self {
			config,
			state: CaptureState::Idle,
			in_progress: Stroke::new(),
			history: StrokeHistory::new(config.history_capacity()),
		}
	}

	pub fn config(&self) -> &CaptureConfig {
		&self.config
	}

	pub fn state(&self) -> CaptureState {
		self.state
	}

	pub fn active_stream(&self) -> Option<StreamId> {
		match self.state {
			CaptureState::Idle => None,
			CaptureState::Capturing(stream) => Some(stream),
		}
	}

	/// The stroke being drawn, empty when idle.
	pub fn in_progress(&self) -> &Stroke {
		&self.in_progress
	}

	/// Committed strokes, oldest first.
	pub fn history(&self) -> &[Stroke] {
		self.history.strokes()
	}

	fn is_active(&self, stream: StreamId) -> bool {
		self.state == CaptureState::Capturing(stream)
	}

	pub fn press(&mut self, stream: StreamId) {
		if let CaptureState::Capturing(active) = self.state {
			tracing::trace!(%stream, %active, "ignoring press while capturing");
			return;
		}
		tracing::debug!(%stream, "capture started");
		self.state = CaptureState::Capturing(stream);
		self.in_progress.clear();
	}

	pub fn move_to(&mut self, stream: StreamId, position: Vec2, pressure: f32) {
		if !self.is_active(stream) {
			tracing::trace!(%stream, ?position, "ignoring move from inactive stream");
			return;
		}
		if !position.is_finite() {
			tracing::warn!(%stream, ?position, "dropping non-finite sample");
			return;
		}
		let radius = self.config.radius(pressure);
		tracing::trace!(%stream, ?position, radius, "sample");
		self.in_progress.add_sample(Sample::new(position, radius));
	}

	pub fn release(&mut self, stream: StreamId) {
		if !self.is_active(stream) {
			return;
		}
		let stroke = std::mem::take(&mut self.in_progress);
		if stroke.is_empty() {
			tracing::debug!(%stream, "released without samples, nothing to commit");
		} else {
			tracing::debug!(%stream, samples = stroke.len(), "committing stroke");
			self.history.commit(stroke);
		}
		self.state = CaptureState::Idle;
	}

	/// Abandons the active stream's stroke without committing it.
	pub fn cancel(&mut self, stream: StreamId) {
		if !self.is_active(stream) {
			return;
		}
		tracing::debug!(%stream, samples = self.in_progress.len(), "capture cancelled");
		self.in_progress.clear();
		self.state = CaptureState::Idle;
	}
}
