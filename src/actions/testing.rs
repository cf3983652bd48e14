//! In-memory doubles for the page, the rasterizer and the network view.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::error::ActionError;
use super::export::RasterOptions;
use super::host::{NetworkView, PageHost, RasterImage, Rasterizer};
use super::search::FocusOptions;

pub const PNG_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
	Attached { href: String, file_name: String },
	Clicked,
	Detached,
}

#[derive(Default)]
pub struct FakePage {
	elements: HashSet<String>,
	inputs: HashMap<String, String>,
	events: RefCell<Vec<PageEvent>>,
	attached: Cell<usize>,
	fail_attach: bool,
	fail_click: bool,
}

impl FakePage {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_element(mut self, id: &str) -> Self {
		self.elements.insert(id.into());
		self
	}

	pub fn with_input(mut self, id: &str, value: &str) -> Self {
		self.inputs.insert(id.into(), value.into());
		self
	}

	pub fn failing_attach(mut self) -> Self {
		self.fail_attach = true;
		self
	}

	pub fn failing_click(mut self) -> Self {
		self.fail_click = true;
		self
	}

	pub fn events(&self) -> Vec<PageEvent> {
		self.events.borrow().clone()
	}

	pub fn take_events(&self) -> Vec<PageEvent> {
		std::mem::take(&mut *self.events.borrow_mut())
	}

	/// Anchors currently attached to the fake document.
	pub fn attached_count(&self) -> usize {
		self.attached.get()
	}
}

impl PageHost for FakePage {
	type Element = String;
	type Anchor = ();

	fn element_by_id(&self, id: &str) -> Option<String> {
		self.elements.get(id).cloned()
	}

	fn input_value(&self, id: &str) -> Result<String, ActionError> {
		if let Some(value) = self.inputs.get(id) {
			return Ok(value.clone());
		}
		if self.elements.contains(id) {
			return Err(ActionError::NotAnInput { id: id.into() });
		}
		Err(ActionError::ElementNotFound { id: id.into() })
	}

	fn attach_download_anchor(&self, href: &str, file_name: &str) -> Result<(), ActionError> {
		if self.fail_attach {
			return Err(ActionError::Unavailable("document body"));
		}
		self.attached.set(self.attached.get() + 1);
		self.events.borrow_mut().push(PageEvent::Attached {
			href: href.into(),
			file_name: file_name.into(),
		});
		Ok(())
	}

	fn click_anchor(&self, _: &()) -> Result<(), ActionError> {
		if self.fail_click {
			return Err(ActionError::Download("click blocked".into()));
		}
		self.events.borrow_mut().push(PageEvent::Clicked);
		Ok(())
	}

	fn detach_anchor(&self, _: &()) {
		self.attached.set(self.attached.get().saturating_sub(1));
		self.events.borrow_mut().push(PageEvent::Detached);
	}
}

enum Outcome {
	Resolve(String),
	Reject(String),
	FailEncode(String),
}

pub struct FakeRasterizer {
	outcome: Outcome,
	calls: RefCell<Vec<(String, RasterOptions)>>,
	encoded: Rc<RefCell<Vec<String>>>,
}

impl FakeRasterizer {
	fn with(outcome: Outcome) -> Self {
		Self {
			outcome,
			calls: RefCell::default(),
			encoded: Rc::default(),
		}
	}

	pub fn resolving(url: &str) -> Self {
		Self::with(Outcome::Resolve(url.into()))
	}

	pub fn rejecting(reason: &str) -> Self {
		Self::with(Outcome::Reject(reason.into()))
	}

	pub fn failing_encode(reason: &str) -> Self {
		Self::with(Outcome::FailEncode(reason.into()))
	}

	pub fn calls(&self) -> Vec<(String, RasterOptions)> {
		self.calls.borrow().clone()
	}

	/// MIME types requested from produced rasters.
	pub fn encoded_as(&self) -> Vec<String> {
		self.encoded.borrow().clone()
	}
}

pub struct FakeRaster {
	encoding: Result<String, String>,
	encoded: Rc<RefCell<Vec<String>>>,
}

impl RasterImage for FakeRaster {
	fn to_data_url(&self, mime: &str) -> Result<String, ActionError> {
		self.encoded.borrow_mut().push(mime.into());
		self.encoding.clone().map_err(ActionError::Encode)
	}
}

impl Rasterizer<String> for FakeRasterizer {
	type Raster = FakeRaster;

	async fn rasterize(
		&self,
		element: &String,
		options: &RasterOptions,
	) -> Result<FakeRaster, ActionError> {
		self.calls
			.borrow_mut()
			.push((element.clone(), options.clone()));
		let encoding = match &self.outcome {
			Outcome::Resolve(url) => Ok(url.clone()),
			Outcome::FailEncode(reason) => Err(reason.clone()),
			Outcome::Reject(reason) => return Err(ActionError::Rasterize(reason.clone())),
		};
		Ok(FakeRaster {
			encoding,
			encoded: self.encoded.clone(),
		})
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum NetworkCall {
	Focus(String, FocusOptions),
	Select(Vec<String>),
}

#[derive(Default)]
pub struct FakeNetwork {
	calls: RefCell<Vec<NetworkCall>>,
	focus_error: Option<String>,
}

impl FakeNetwork {
	pub fn failing_focus(message: &str) -> Self {
		Self {
			focus_error: Some(message.into()),
			..Self::default()
		}
	}

	pub fn calls(&self) -> Vec<NetworkCall> {
		self.calls.borrow().clone()
	}

	pub fn take_calls(&self) -> Vec<NetworkCall> {
		std::mem::take(&mut *self.calls.borrow_mut())
	}
}

impl NetworkView for FakeNetwork {
	fn focus(&self, node_id: &str, options: &FocusOptions) -> Result<(), ActionError> {
		self.calls
			.borrow_mut()
			.push(NetworkCall::Focus(node_id.into(), *options));
		match &self.focus_error {
			Some(message) => Err(ActionError::Network(message.clone())),
			None => Ok(()),
		}
	}

	fn select_nodes(&self, node_ids: &[String]) -> Result<(), ActionError> {
		self.calls
			.borrow_mut()
			.push(NetworkCall::Select(node_ids.to_vec()));
		Ok(())
	}
}
