use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, HtmlElement, HtmlInputElement};

use super::describe;
use crate::actions::{ActionError, PageHost};

/// The live document of the current window.
#[derive(Clone, Debug)]
pub struct BrowserPage {
	document: Document,
}

impl BrowserPage {
	/// Wraps the current window's document.
	pub fn current() -> Result<Self, ActionError> {
		let document = web_sys::window()
			.ok_or(ActionError::Unavailable("window"))?
			.document()
			.ok_or(ActionError::Unavailable("document"))?;
		Ok(Self { document })
	}
}

impl PageHost for BrowserPage {
	type Element = HtmlElement;
	type Anchor = HtmlAnchorElement;

	fn element_by_id(&self, id: &str) -> Option<HtmlElement> {
		self.document
			.get_element_by_id(id)
			.and_then(|el| el.dyn_into().ok())
	}

	fn input_value(&self, id: &str) -> Result<String, ActionError> {
		let element = self
			.document
			.get_element_by_id(id)
			.ok_or_else(|| ActionError::ElementNotFound { id: id.into() })?;
		let input: HtmlInputElement = element
			.dyn_into()
			.map_err(|_| ActionError::NotAnInput { id: id.into() })?;
		Ok(input.value())
	}

	fn attach_download_anchor(
		&self,
		href: &str,
		file_name: &str,
	) -> Result<HtmlAnchorElement, ActionError> {
		let anchor: HtmlAnchorElement = self
			.document
			.create_element("a")
			.map_err(|e| ActionError::Download(describe(&e)))?
			.dyn_into()
			.map_err(|_| ActionError::Download("created element is not an anchor".into()))?;
		anchor.set_href(href);
		anchor.set_download(file_name);
		self.document
			.body()
			.ok_or(ActionError::Unavailable("document body"))?
			.append_child(&anchor)
			.map_err(|e| ActionError::Download(describe(&e)))?;
		Ok(anchor)
	}

	fn click_anchor(&self, anchor: &HtmlAnchorElement) -> Result<(), ActionError> {
		anchor.click();
		Ok(())
	}

	fn detach_anchor(&self, anchor: &HtmlAnchorElement) {
		anchor.remove();
	}
}
