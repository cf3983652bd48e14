use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use super::state::GraphState;
use crate::actions::{ActionError, FocusOptions, NetworkView};

/// Shared handle to a mounted [`ForceGraphCanvas`](super::ForceGraphCanvas).
///
/// Commands sent before the canvas mounts fail with [`ActionError::Network`].
#[derive(Clone, Default)]
pub struct GraphHandle {
	state: Rc<RefCell<Option<GraphState>>>,
}

impl GraphHandle {
	pub(super) fn install(&self, state: GraphState) {
		*self.state.borrow_mut() = Some(state);
	}

	pub(super) fn with_state<R>(&self, f: impl FnOnce(&mut GraphState) -> R) -> Option<R> {
		self.state.borrow_mut().as_mut().map(f)
	}

	fn mounted<R>(&self, f: impl FnOnce(&mut GraphState) -> R) -> Result<R, ActionError> {
		self.with_state(f)
			.ok_or_else(|| ActionError::Network("graph canvas is not mounted".into()))
	}
}

impl NetworkView for GraphHandle {
	fn focus(&self, node_id: &str, options: &FocusOptions) -> Result<(), ActionError> {
		if !self.mounted(|s| s.focus(node_id, options))? {
			warn!("Node: {node_id} cannot be found.");
		}
		Ok(())
	}

	fn select_nodes(&self, node_ids: &[String]) -> Result<(), ActionError> {
		self.mounted(|s| s.select(node_ids))
	}
}
