use thiserror::Error;

/// Failure of a page action, reported to the user instead of crashing the page.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ActionError {
	/// No element with this id exists in the document.
	#[error("no element with id `{id}`")]
	ElementNotFound {
		/// The id that was looked up.
		id: String,
	},
	/// The element exists but cannot hold a text value.
	#[error("element `{id}` is not a text input")]
	NotAnInput {
		/// The id that was looked up.
		id: String,
	},
	/// A browser global (window, document, body) is missing.
	#[error("{0} is not available")]
	Unavailable(&'static str),
	/// The rasterization library rejected or could not be called.
	#[error("rasterization failed: {0}")]
	Rasterize(String),
	/// The raster could not be encoded, usually a tainted canvas.
	#[error("image encoding failed: {0}")]
	Encode(String),
	/// The encoded image carries no pixel data.
	#[error("rendered image is empty")]
	EmptyImage,
	/// The download trigger could not be created or clicked.
	#[error("download failed: {0}")]
	Download(String),
	/// The visualization rejected a focus or selection command.
	#[error("network view error: {0}")]
	Network(String),
	/// Options could not be converted to or from their JS form.
	#[error("invalid options: {0}")]
	Options(String),
}
