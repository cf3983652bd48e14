use log::info;

use super::vis::VisNetwork;
use crate::actions::{ActionError, FocusOptions, NetworkView};
use crate::components::force_graph::GraphHandle;

/// The visualization the search action drives.
#[derive(Clone)]
pub enum NetworkHandle {
	/// A vis-network instance owned by the hosting page.
	Vis(VisNetwork),
	/// The built-in canvas graph.
	Canvas(GraphHandle),
}

impl NetworkHandle {
	/// Prefers the page's global vis-network, falling back to `canvas`.
	pub fn resolve(canvas: GraphHandle) -> Self {
		match VisNetwork::from_global() {
			Some(network) => {
				info!("using page vis-network instance");
				Self::Vis(network)
			}
			None => Self::Canvas(canvas),
		}
	}

	fn view(&self) -> &dyn NetworkView {
		match self {
			Self::Vis(network) => network,
			Self::Canvas(graph) => graph,
		}
	}
}

impl NetworkView for NetworkHandle {
	fn focus(&self, node_id: &str, options: &FocusOptions) -> Result<(), ActionError> {
		self.view().focus(node_id, options)
	}

	fn select_nodes(&self, node_ids: &[String]) -> Result<(), ActionError> {
		self.view().select_nodes(node_ids)
	}
}
