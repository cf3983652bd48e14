//! Graph page actions: PNG export and node search.
//!
//! The actions only talk to the page through [`PageHost`], [`Rasterizer`] and
//! [`NetworkView`], so they run unchanged against the browser or a test double.

mod easing;
mod error;
mod export;
mod host;
mod search;
mod trigger;

#[cfg(test)]
pub(crate) mod testing;

pub use easing::Easing;
pub use error::ActionError;
pub use export::{PNG_MIME, RasterOptions, download_image};
pub use host::{NetworkView, PageHost, RasterImage, Rasterizer};
pub use search::{AnimationOptions, FocusOptions, Offset, search_node};
pub use trigger::DownloadTrigger;
