//! Browser entry point.

use leptos::prelude::*;
use network_graph_actions::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
