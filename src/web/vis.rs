use wasm_bindgen::prelude::*;

use super::describe;
use crate::actions::{ActionError, FocusOptions, NetworkView};

#[wasm_bindgen]
extern "C" {
	/// A vis-network `Network` instance created by the hosting page.
	#[derive(Clone, Debug)]
	pub type VisNetwork;

	#[wasm_bindgen(method, catch, js_name = focus)]
	fn focus_js(this: &VisNetwork, node_id: &str, options: &JsValue) -> Result<(), JsValue>;

	#[wasm_bindgen(method, catch, js_name = selectNodes)]
	fn select_nodes_js(this: &VisNetwork, node_ids: &js_sys::Array) -> Result<(), JsValue>;
}

impl VisNetwork {
	/// Returns the page's global `network`, if one was created.
	pub fn from_global() -> Option<Self> {
		let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("network")).ok()?;
		if value.is_undefined() || value.is_null() {
			return None;
		}
		Some(value.unchecked_into())
	}
}

impl NetworkView for VisNetwork {
	fn focus(&self, node_id: &str, options: &FocusOptions) -> Result<(), ActionError> {
		let options = serde_wasm_bindgen::to_value(options)
			.map_err(|e| ActionError::Options(e.to_string()))?;
		self.focus_js(node_id, &options)
			.map_err(|e| ActionError::Network(describe(&e)))
	}

	fn select_nodes(&self, node_ids: &[String]) -> Result<(), ActionError> {
		let ids: js_sys::Array = node_ids.iter().map(|id| JsValue::from_str(id)).collect();
		self.select_nodes_js(&ids)
			.map_err(|e| ActionError::Network(describe(&e)))
	}
}
