use drawpen::geom::AABox;
use drawpen::util::ResultExt;
use drawpen::*;
use glam::{vec2, Vec2};
use std::f32::consts::{PI, TAU};
use std::io::Write;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	// Stdout carries the SVG document.
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.with_writer(std::io::stderr)
			.finish(),
	)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. Because we enable the "log" feature on the `tracing` crate, if we
	// failed to set the global subscriber above, `tracing` is redirected to `log` instead.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;
	Ok(())
}

fn brush_size_from_args() -> Option<f32> {
	let arg = std::env::args().nth(1)?;
	arg.parse::<f32>().ok_or_warn()
}

/// Plays back a short two-contact gesture. The second contact lands partway through the first
/// stroke and is ignored until the first one lifts.
fn replay_gesture(controller: &mut CaptureController) {
	let first = StreamId(1);
	let second = StreamId(2);

	controller.press(first);
	for i in 0..=24 {
		let t = i as f32 / 24.0;
		let position = vec2(40.0 + 320.0 * t, 120.0 + 60.0 * (t * TAU).sin());
		controller.move_to(first, position, (t * PI).sin());
		if i == 12 {
			controller.press(second);
		}
		if i > 12 {
			controller.move_to(second, position + vec2(0.0, 80.0), 1.0);
		}
	}
	controller.release(second);
	controller.release(first);

	controller.press(second);
	for i in 0..=16 {
		let angle = i as f32 / 16.0 * TAU;
		let position = vec2(200.0, 260.0) + 50.0 * Vec2::from_angle(angle);
		controller.move_to(second, position, 0.3 + 0.2 * angle.cos());
	}
	controller.release(second);
}

/// Draws each stroke the way the canvas does: sample disks in red, the spine in blue and both
/// ribbon edges in black.
fn write_svg(strokes: &[Stroke], out: &mut impl Write) -> std::io::Result<()> {
	let bounds = strokes
		.iter()
		.map(Stroke::bounds)
		.fold(AABox::empty(), AABox::union)
		.padded(8.0);
	let (origin, size) = if bounds.is_empty() {
		(Vec2::ZERO, Vec2::ONE)
	} else {
		(bounds.min(), bounds.size())
	};

	writeln!(
		out,
		r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
		origin.x, origin.y, size.x, size.y
	)?;
	for stroke in strokes {
		let geometry = stroke.geometry();
		for sample in stroke.samples() {
			writeln!(
				out,
				r#"  <circle cx="{}" cy="{}" r="{}" fill="red"/>"#,
				sample.position.x, sample.position.y, sample.radius
			)?;
		}
		let paths = [
			(&geometry.spine, "blue"),
			(&geometry.right_edge, "black"),
			(&geometry.left_edge, "black"),
		];
		for (curve, color) in paths {
			if curve.is_empty() {
				continue;
			}
			writeln!(out, r#"  <path d="{curve}" fill="none" stroke="{color}"/>"#)?;
		}
	}
	writeln!(out, "</svg>")
}

fn run() -> anyhow::Result<()> {
	let config = capture_config()
		.maybe_brush_size(brush_size_from_args())
		.create()?;
	tracing::info!(brush_size = config.brush_size(), "replaying gesture");

	let mut controller = CaptureController::new(config);
	replay_gesture(&mut controller);
	tracing::info!(strokes = controller.history().len(), "writing svg");

	let mut out = std::io::BufWriter::new(std::io::stdout().lock());
	write_svg(controller.history(), &mut out)?;
	out.flush()?;
	Ok(())
}

fn main() -> anyhow::Result<()> {
	// We can technically continue without logging.
	configure_logging().ok_or_log();

	run()
}
