//! Browser implementations of the action seams.

mod html2canvas;
mod network;
mod page;
mod vis;

use wasm_bindgen::{JsCast, JsValue};

pub use html2canvas::Html2Canvas;
pub use network::NetworkHandle;
pub use page::BrowserPage;
pub use vis::VisNetwork;

/// Human readable form of a thrown JS value.
fn describe(value: &JsValue) -> String {
	if let Some(err) = value.dyn_ref::<js_sys::Error>() {
		return err.message().into();
	}
	value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
