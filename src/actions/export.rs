use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::ActionError;
use super::host::{PageHost, RasterImage, Rasterizer};
use super::trigger::DownloadTrigger;
use crate::config::ActionConfig;

/// MIME type of exported images.
pub const PNG_MIME: &str = "image/png";

/// Options forwarded to the rasterization library.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
	/// Fetch cross-origin images with CORS so the canvas stays exportable.
	#[serde(rename = "useCORS")]
	pub use_cors: bool,
	/// Let the library log its progress to the console.
	pub logging: bool,
}

impl Default for RasterOptions {
	fn default() -> Self {
		Self {
			use_cors: true,
			logging: true,
		}
	}
}

/// Rasterizes the graph container and downloads it as a PNG.
///
/// The container is looked up before anything else: when it is missing the
/// rasterizer is never invoked. The download anchor only exists between the
/// successful encode and the end of this call.
pub async fn download_image<H, R>(
	page: &H,
	rasterizer: &R,
	config: &ActionConfig,
) -> Result<(), ActionError>
where
	H: PageHost,
	R: Rasterizer<H::Element>,
{
	let container = page
		.element_by_id(&config.container_id)
		.ok_or_else(|| ActionError::ElementNotFound {
			id: config.container_id.clone(),
		})?;

	debug!("rasterizing #{}", config.container_id);
	let raster = rasterizer.rasterize(&container, &config.raster).await?;

	let url = raster.to_data_url(PNG_MIME)?;
	if !url.starts_with("data:image/png") {
		return Err(ActionError::EmptyImage);
	}

	let trigger = DownloadTrigger::attach(page, &url, &config.file_name)?;
	trigger.fire()?;
	info!("downloaded graph image as {}", config.file_name);
	Ok(())
}
