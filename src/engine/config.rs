use bon::builder;
use thiserror::Error;

pub const DEFAULT_BRUSH_SIZE: f32 = 20.0;
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
	#[error("invalid brush size {0}")]
	InvalidBrushSize(f32),
}

static_assertions::assert_impl_all!(ConfigError: std::error::Error, Send, Sync);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureConfig {
	brush_size: f32,
	history_capacity: usize,
}

impl Default for CaptureConfig {
	fn default() -> Self {
		Self {
			brush_size: DEFAULT_BRUSH_SIZE,
			history_capacity: DEFAULT_HISTORY_CAPACITY,
		}
	}
}

impl CaptureConfig {
	pub fn brush_size(&self) -> f32 {
		self.brush_size
	}

	pub fn history_capacity(&self) -> usize {
		self.history_capacity
	}

	/// The brush radius for a pressure reading. Readings outside `[0, 1]` are clamped and NaN
	/// counts as no pressure.
	pub fn radius(&self, pressure: f32) -> f32 {
		let pressure = if pressure.is_nan() {
			0.0
		} else {
			pressure.clamp(0.0, 1.0)
		};
		pressure * self.brush_size
	}
}

/// Builds a validated [`CaptureConfig`].
///
/// ```
/// let config = drawpen::capture_config().brush_size(8.0).create().unwrap();
/// assert_eq!(config.history_capacity(), 10);
/// ```
#[builder(finish_fn = create)]
pub fn capture_config(
	#[builder(default = DEFAULT_BRUSH_SIZE)] brush_size: f32,
	#[builder(default = DEFAULT_HISTORY_CAPACITY)] history_capacity: usize,
) -> Result<CaptureConfig, ConfigError> {
	use ConfigError::*;
	if !(brush_size.is_finite() && brush_size >= 0.0) {
		tracing::warn!(brush_size, "rejecting brush size");
		Err(InvalidBrushSize(brush_size))?;
	}
	Ok(CaptureConfig {
		brush_size,
		history_capacity,
	})
}
