//! Element ids, file name and options shared by the page actions.

use log::warn;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::actions::{ActionError, FocusOptions, RasterOptions};

/// Name of the optional page global that overrides [`ActionConfig`] fields.
pub const CONFIG_GLOBAL: &str = "graphActionsConfig";

/// Everything the actions read from their surroundings.
///
/// Every field has a default, so a partial override only replaces what it names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionConfig {
	/// Id of the element rasterized by the export.
	pub container_id: String,
	/// Id of the text input holding the searched node id.
	pub search_input_id: String,
	/// Suggested name of the downloaded file.
	pub file_name: String,
	/// Rasterizer options.
	pub raster: RasterOptions,
	/// Camera options used when focusing a node.
	pub focus: FocusOptions,
}

impl Default for ActionConfig {
	fn default() -> Self {
		Self {
			container_id: "mynetwork".into(),
			search_input_id: "searchNode".into(),
			file_name: "network_graph.png".into(),
			raster: RasterOptions::default(),
			focus: FocusOptions::default(),
		}
	}
}

impl ActionConfig {
	/// Parses a JS object, leaving absent fields at their defaults.
	pub fn from_js(value: JsValue) -> Result<Self, ActionError> {
		serde_wasm_bindgen::from_value(value).map_err(invalid_options)
	}

	/// Reads the page override, falling back to defaults when it is absent or malformed.
	pub fn load() -> Self {
		let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(CONFIG_GLOBAL))
			.unwrap_or(JsValue::UNDEFINED);
		let parsed = if value.is_undefined() || value.is_null() {
			None
		} else {
			Some(Self::from_js(value))
		};
		Self::or_default(parsed)
	}

	/// Outcome of reading the override: `None` when absent, defaults when it failed to parse.
	fn or_default(parsed: Option<Result<Self, ActionError>>) -> Self {
		match parsed {
			Some(Ok(config)) => config,
			Some(Err(e)) => {
				warn!("ignoring window.{CONFIG_GLOBAL}: {e}");
				Self::default()
			}
			None => Self::default(),
		}
	}
}

fn invalid_options(e: impl std::fmt::Display) -> ActionError {
	ActionError::Options(e.to_string())
}
