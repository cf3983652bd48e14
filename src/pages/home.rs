use leptos::prelude::*;

use crate::components::force_graph::{
	ForceGraphCanvas, GraphData, GraphHandle, GraphLink, GraphNode,
};
use crate::components::toolbar::Toolbar;
use crate::config::ActionConfig;
use crate::web::NetworkHandle;

/// Random tree whose node ids are `node0..node{n-1}`.
fn generate_sample_data(n: usize) -> GraphData {
	let nodes = (0..n)
		.map(|i| GraphNode {
			label: Some(format!("node{i}")),
			group: Some((i % 10) as u32),
			..GraphNode::new(format!("node{i}"))
		})
		.collect();

	let links = (1..n)
		.map(|i| {
			let parent = (rand_simple(i) * (i as f64)) as usize;
			GraphLink::new(format!("node{i}"), format!("node{parent}"))
		})
		.collect();

	GraphData { nodes, links }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Graph container plus the export and search toolbar.
#[component]
fn GraphPage() -> impl IntoView {
	let config = ActionConfig::load();
	let graph_data = Signal::derive(move || generate_sample_data(100));
	let graph = GraphHandle::default();
	let network = NetworkHandle::resolve(graph.clone());
	let container_id = config.container_id.clone();

	view! {
		<div class="fullscreen-graph">
			<div id=container_id class="graph-container">
				<ForceGraphCanvas data=graph_data handle=graph fullscreen=true />
			</div>
			<div class="graph-overlay">
				<h1>"Network Graph"</h1>
				<p class="subtitle">"Scroll to zoom. Drag to pan. Search a node id to focus it."</p>
				<Toolbar network=network config=config />
			</div>
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<GraphPage />
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_ids_are_searchable_and_links_stay_in_range() {
		let data = generate_sample_data(100);
		assert_eq!(data.nodes.len(), 100);
		assert_eq!(data.nodes[42].id, "node42");
		assert_eq!(data.links.len(), 99);
		for (i, link) in data.links.iter().enumerate() {
			let parent: usize = link.target.trim_start_matches("node").parse().unwrap();
			assert!(parent <= i, "link {link:?} points forward");
		}
	}
}
