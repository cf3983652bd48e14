use serde::{Deserialize, Serialize};

/// Easing curves understood by vis-network camera animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum Easing {
	Linear,
	EaseInQuad,
	EaseOutQuad,
	#[default]
	EaseInOutQuad,
	EaseInCubic,
	EaseOutCubic,
	EaseInOutCubic,
	EaseInQuart,
	EaseOutQuart,
	EaseInOutQuart,
	EaseInQuint,
	EaseOutQuint,
	EaseInOutQuint,
}

impl Easing {
	/// Maps linear progress `t` in `[0, 1]` onto the curve. Input is clamped.
	pub fn apply(self, t: f64) -> f64 {
		let t = t.clamp(0.0, 1.0);
		match self {
			Easing::Linear => t,
			Easing::EaseInQuad => t.powi(2),
			Easing::EaseOutQuad => 1.0 - (1.0 - t).powi(2),
			Easing::EaseInOutQuad => in_out(t, 2),
			Easing::EaseInCubic => t.powi(3),
			Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
			Easing::EaseInOutCubic => in_out(t, 3),
			Easing::EaseInQuart => t.powi(4),
			Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
			Easing::EaseInOutQuart => in_out(t, 4),
			Easing::EaseInQuint => t.powi(5),
			Easing::EaseOutQuint => 1.0 - (1.0 - t).powi(5),
			Easing::EaseInOutQuint => in_out(t, 5),
		}
	}
}

fn in_out(t: f64, power: i32) -> f64 {
	if t < 0.5 {
		2f64.powi(power - 1) * t.powi(power)
	} else {
		1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [Easing; 13] = [
		Easing::Linear,
		Easing::EaseInQuad,
		Easing::EaseOutQuad,
		Easing::EaseInOutQuad,
		Easing::EaseInCubic,
		Easing::EaseOutCubic,
		Easing::EaseInOutCubic,
		Easing::EaseInQuart,
		Easing::EaseOutQuart,
		Easing::EaseInOutQuart,
		Easing::EaseInQuint,
		Easing::EaseOutQuint,
		Easing::EaseInOutQuint,
	];

	#[test]
	fn every_curve_starts_at_zero_and_ends_at_one() {
		for easing in ALL {
			assert!(easing.apply(0.0).abs() < 1e-12, "{easing:?}");
			assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing:?}");
		}
	}

	#[test]
	fn ease_in_out_quad_matches_reference_points() {
		let e = Easing::EaseInOutQuad;
		assert!((e.apply(0.25) - 0.125).abs() < 1e-12);
		assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
		assert!((e.apply(0.75) - 0.875).abs() < 1e-12);
	}

	#[test]
	fn progress_outside_unit_range_is_clamped() {
		assert_eq!(Easing::EaseInCubic.apply(-3.0), 0.0);
		assert_eq!(Easing::EaseOutQuad.apply(7.0), 1.0);
	}

	#[test]
	fn uses_vis_network_names() {
		assert_eq!(
			serde_json::to_value(Easing::EaseInOutQuad).unwrap(),
			serde_json::json!("easeInOutQuad")
		);
		let parsed: Easing = serde_json::from_str("\"linear\"").unwrap();
		assert_eq!(parsed, Easing::Linear);
	}
}
