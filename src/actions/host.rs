//! Seams between the actions and the page they run in.

use super::error::ActionError;
use super::export::RasterOptions;
use super::search::FocusOptions;

/// Document access needed by the actions.
pub trait PageHost {
	/// Element handed to the rasterizer.
	type Element;
	/// Transient anchor used to start a download.
	type Anchor;

	/// Looks up an element by id.
	fn element_by_id(&self, id: &str) -> Option<Self::Element>;

	/// Reads the current value of a text input.
	fn input_value(&self, id: &str) -> Result<String, ActionError>;

	/// Creates an anchor pointing at `href` with a suggested file name and attaches it to the document.
	fn attach_download_anchor(&self, href: &str, file_name: &str)
	-> Result<Self::Anchor, ActionError>;

	/// Dispatches a click on an attached anchor.
	fn click_anchor(&self, anchor: &Self::Anchor) -> Result<(), ActionError>;

	/// Removes an anchor from the document. Must tolerate an already detached anchor.
	fn detach_anchor(&self, anchor: &Self::Anchor);
}

/// Converts a live element subtree into a raster image.
#[allow(async_fn_in_trait)]
pub trait Rasterizer<E> {
	/// Raster produced on success.
	type Raster: RasterImage;

	/// Renders `element`, suspending until the library finishes.
	async fn rasterize(&self, element: &E, options: &RasterOptions)
	-> Result<Self::Raster, ActionError>;
}

/// Canvas-like result of rasterization.
pub trait RasterImage {
	/// Encodes the pixels as a data URL of the given MIME type.
	fn to_data_url(&self, mime: &str) -> Result<String, ActionError>;
}

/// Camera and selection commands of a graph visualization.
pub trait NetworkView {
	/// Moves the camera onto `node_id`.
	fn focus(&self, node_id: &str, options: &FocusOptions) -> Result<(), ActionError>;

	/// Replaces the current selection with `node_ids`.
	fn select_nodes(&self, node_ids: &[String]) -> Result<(), ActionError>;
}
