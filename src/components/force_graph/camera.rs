use force_graph::DefaultNodeIdx;

use super::state::{MAX_ZOOM, MIN_ZOOM};
use crate::actions::{Easing, FocusOptions, Offset};

/// Seconds between two `requestAnimationFrame` timestamps. The first frame advances nothing.
pub fn frame_seconds(previous_ms: Option<f64>, now_ms: f64) -> f64 {
	match previous_ms {
		Some(prev) if (now_ms - prev).is_finite() => ((now_ms - prev) / 1000.0).max(0.0),
		_ => 0.0,
	}
}

fn finite_or(value: f64, fallback: f64) -> f64 {
	if value.is_finite() { value } else { fallback }
}

/// Screen position `(x, y)` of the graph origin and zoom `k`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	#[cfg(test)]
	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		((sx - self.x) / self.k, (sy - self.y) / self.k)
	}

	/// View at zoom `k` with graph point `(gx, gy)` at the viewport centre, shifted by `offset` pixels.
	pub fn centred_on(gx: f64, gy: f64, k: f64, width: f64, height: f64, offset: Offset) -> Self {
		Self {
			x: width / 2.0 + offset.x - gx * k,
			y: height / 2.0 + offset.y - gy * k,
			k,
		}
	}

	fn lerp(&self, to: &Self, t: f64) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

/// Camera flight towards a node, re-aimed every frame since the node keeps moving.
#[derive(Clone, Debug)]
pub struct CameraAnimation {
	pub node: DefaultNodeIdx,
	pub scale: f64,
	pub offset: Offset,
	from: ViewTransform,
	duration_ms: f64,
	elapsed_ms: f64,
	easing: Easing,
}

impl CameraAnimation {
	/// Scale is clamped to the wheel zoom range; a non-finite or non-positive duration jumps.
	pub fn new(node: DefaultNodeIdx, from: ViewTransform, options: &FocusOptions) -> Self {
		let duration = options.animation.duration;
		Self {
			node,
			scale: finite_or(options.scale, from.k).clamp(MIN_ZOOM, MAX_ZOOM),
			offset: Offset {
				x: finite_or(options.offset.x, 0.0),
				y: finite_or(options.offset.y, 0.0),
			},
			from,
			duration_ms: if duration.is_finite() { duration.max(0.0) } else { 0.0 },
			elapsed_ms: 0.0,
			easing: options.animation.easing_function,
		}
	}

	/// Advances by `dt` seconds and returns the view for this frame.
	pub fn step(&mut self, dt: f64, target: &ViewTransform) -> ViewTransform {
		self.elapsed_ms += finite_or(dt, 0.0).max(0.0) * 1000.0;
		if self.is_finished() {
			return *target;
		}
		let t = self.easing.apply(self.elapsed_ms / self.duration_ms);
		self.from.lerp(target, t)
	}

	pub fn is_finished(&self) -> bool {
		self.elapsed_ms >= self.duration_ms
	}
}
