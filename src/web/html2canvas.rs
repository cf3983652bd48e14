use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

use super::describe;
use crate::actions::{ActionError, RasterImage, RasterOptions, Rasterizer};

#[wasm_bindgen]
extern "C" {
	#[wasm_bindgen(js_name = html2canvas, catch)]
	fn html2canvas_js(element: &HtmlElement, options: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Rasterizer backed by the page's `html2canvas` script.
#[derive(Clone, Copy, Debug, Default)]
pub struct Html2Canvas;

impl Rasterizer<HtmlElement> for Html2Canvas {
	type Raster = HtmlCanvasElement;

	async fn rasterize(
		&self,
		element: &HtmlElement,
		options: &RasterOptions,
	) -> Result<HtmlCanvasElement, ActionError> {
		let options = serde_wasm_bindgen::to_value(options)
			.map_err(|e| ActionError::Options(e.to_string()))?;
		let promise =
			html2canvas_js(element, &options).map_err(|e| ActionError::Rasterize(describe(&e)))?;
		let canvas = JsFuture::from(promise)
			.await
			.map_err(|e| ActionError::Rasterize(describe(&e)))?;
		debug!("html2canvas resolved");
		canvas
			.dyn_into()
			.map_err(|_| ActionError::Rasterize("html2canvas did not return a canvas".into()))
	}
}

impl RasterImage for HtmlCanvasElement {
	fn to_data_url(&self, mime: &str) -> Result<String, ActionError> {
		self.to_data_url_with_type(mime)
			.map_err(|e| ActionError::Encode(describe(&e)))
	}
}
