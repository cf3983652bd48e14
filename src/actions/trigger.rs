use log::debug;

use super::error::ActionError;
use super::host::PageHost;

/// An anchor attached to the page for the lifetime of the guard.
///
/// The anchor is detached on drop, so it never outlives the call that created
/// it, whether the click succeeded or not.
pub struct DownloadTrigger<'a, H: PageHost> {
	page: &'a H,
	anchor: H::Anchor,
}

impl<'a, H: PageHost> DownloadTrigger<'a, H> {
	/// Creates and attaches the anchor.
	pub fn attach(page: &'a H, href: &str, file_name: &str) -> Result<Self, ActionError> {
		let anchor = page.attach_download_anchor(href, file_name)?;
		debug!("download trigger for {file_name} attached");
		Ok(Self { page, anchor })
	}

	/// Clicks the anchor, starting the browser download.
	pub fn fire(&self) -> Result<(), ActionError> {
		self.page.click_anchor(&self.anchor)
	}
}

impl<H: PageHost> Drop for DownloadTrigger<'_, H> {
	fn drop(&mut self) {
		self.page.detach_anchor(&self.anchor);
		debug!("download trigger detached");
	}
}
