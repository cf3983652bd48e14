use log::debug;
use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::error::ActionError;
use super::host::{NetworkView, PageHost};
use crate::config::ActionConfig;

/// Pixel offset of the focused node from the viewport centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct Offset {
	pub x: f64,
	pub y: f64,
}

/// Camera transition used when focusing a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationOptions {
	/// Transition length in milliseconds.
	pub duration: f64,
	/// Curve applied to the transition progress.
	pub easing_function: Easing,
}

impl Default for AnimationOptions {
	fn default() -> Self {
		Self {
			duration: 1000.0,
			easing_function: Easing::EaseInOutQuad,
		}
	}
}

/// Options of a focus command, shaped like vis-network's `focus` options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusOptions {
	/// Zoom level once the camera arrives.
	pub scale: f64,
	/// Offset from the viewport centre.
	pub offset: Offset,
	/// How the camera gets there.
	pub animation: AnimationOptions,
}

impl Default for FocusOptions {
	fn default() -> Self {
		Self {
			scale: 1.5,
			offset: Offset::default(),
			animation: AnimationOptions::default(),
		}
	}
}

/// Focuses and selects the node named in the search input.
///
/// The input value is passed through untouched: what an empty or unknown id
/// does is up to the network view. A failed focus stops before selection.
pub fn search_node<H, N>(page: &H, network: &N, config: &ActionConfig) -> Result<(), ActionError>
where
	H: PageHost,
	N: NetworkView + ?Sized,
{
	let node_id = page.input_value(&config.search_input_id)?;
	debug!("focusing node {node_id:?}");
	network.focus(&node_id, &config.focus)?;
	network.select_nodes(&[node_id])
}
