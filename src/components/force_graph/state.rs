use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::camera::{CameraAnimation, ViewTransform};
use super::types::GraphData;
use crate::actions::FocusOptions;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 5.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: Option<String>,
	pub color: String,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct GraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub selection: HashSet<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	camera: Option<CameraAnimation>,
	ids: HashMap<String, DefaultNodeIdx>,
}

impl GraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut ids = HashMap::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let color = node.color.clone().unwrap_or_else(|| {
				let group = node.group.unwrap_or(0) as usize;
				COLORS[group % COLORS.len()].into()
			});
			// Seed on a circle around the origin; the simulation spreads them out.
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (100.0 * angle.cos()) as f32,
				y: (100.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color,
				},
			});
			ids.insert(node.id.clone(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (ids.get(&link.source), ids.get(&link.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			pan: PanState::default(),
			selection: HashSet::new(),
			width,
			height,
			flow_time: 0.0,
			camera: None,
			ids,
		}
	}

	pub fn node_index(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	pub fn node_position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	/// Starts flying the camera to `id`. Returns `false` for unknown ids.
	pub fn focus(&mut self, id: &str, options: &FocusOptions) -> bool {
		let Some(idx) = self.node_index(id) else {
			return false;
		};
		let animation = CameraAnimation::new(idx, self.transform, options);
		if animation.is_finished() {
			if let Some(target) = self.camera_target(&animation) {
				self.transform = target;
			}
			self.camera = None;
		} else {
			self.camera = Some(animation);
		}
		true
	}

	/// Replaces the selection with the known ids among `ids`.
	pub fn select(&mut self, ids: &[String]) {
		self.selection = ids.iter().filter_map(|id| self.node_index(id)).collect();
	}

	pub fn is_selected(&self, idx: DefaultNodeIdx) -> bool {
		self.selection.contains(&idx)
	}

	pub fn is_animating(&self) -> bool {
		self.camera.is_some()
	}

	/// Steps the simulation by `physics_dt` and the camera by `elapsed` wall-clock seconds.
	pub fn tick(&mut self, physics_dt: f32, elapsed: f64) {
		self.graph.update(physics_dt);
		self.flow_time += physics_dt as f64;

		let Some(mut camera) = self.camera.take() else {
			return;
		};
		let Some(target) = self.camera_target(&camera) else {
			return;
		};
		self.transform = camera.step(elapsed, &target);
		if !camera.is_finished() {
			self.camera = Some(camera);
		}
	}

	fn camera_target(&self, camera: &CameraAnimation) -> Option<ViewTransform> {
		let (gx, gy) = self.node_position(camera.node)?;
		Some(ViewTransform::centred_on(
			gx,
			gy,
			camera.scale,
			self.width,
			self.height,
			camera.offset,
		))
	}

	pub fn start_pan(&mut self, x: f64, y: f64) {
		self.camera = None;
		self.pan = PanState {
			active: true,
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, x: f64, y: f64) {
		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	/// Zooms one wheel notch around the screen point `(x, y)`.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		self.camera = None;
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::actions::{AnimationOptions, Easing, Offset};
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn sample() -> GraphState {
		let data = GraphData {
			nodes: (0..4).map(|i| GraphNode::new(format!("node{i}"))).collect(),
			links: vec![
				GraphLink::new("node0", "node1"),
				GraphLink::new("node1", "node2"),
				GraphLink::new("node2", "missing"),
			],
		};
		GraphState::new(&data, 800.0, 600.0)
	}

	fn assert_close(a: ViewTransform, b: ViewTransform) {
		assert!((a.x - b.x).abs() < 1e-6, "{a:?} != {b:?}");
		assert!((a.y - b.y).abs() < 1e-6, "{a:?} != {b:?}");
		assert!((a.k - b.k).abs() < 1e-9, "{a:?} != {b:?}");
	}

	fn centred(state: &GraphState, id: &str, options: &FocusOptions) -> ViewTransform {
		let idx = state.node_index(id).unwrap();
		let (gx, gy) = state.node_position(idx).unwrap();
		ViewTransform::centred_on(gx, gy, options.scale, state.width, state.height, options.offset)
	}

	#[test]
	fn focus_flies_to_the_node_and_stops_on_target() {
		let mut state = sample();
		let options = FocusOptions::default();

		assert!(state.focus("node2", &options));
		state.tick(0.016, 0.5);
		assert!(state.is_animating());
		state.tick(0.016, 0.5);

		assert!(!state.is_animating());
		assert_close(state.transform, centred(&state, "node2", &options));
		assert_eq!(state.transform.k, 1.5);
	}

	#[test]
	fn focus_is_halfway_at_half_time_with_ease_in_out() {
		let mut state = sample();
		let start = state.transform;
		let options = FocusOptions::default();

		state.focus("node1", &options);
		state.tick(0.016, 0.5);

		// easeInOutQuad is exactly 0.5 at the midpoint
		assert!((state.transform.k - (start.k + (1.5 - start.k) * 0.5)).abs() < 1e-9);
	}

	#[test]
	fn zero_duration_jumps_immediately() {
		let mut state = sample();
		let options = FocusOptions {
			scale: 2.0,
			offset: Offset { x: 10.0, y: 0.0 },
			animation: AnimationOptions {
				duration: 0.0,
				easing_function: Easing::Linear,
			},
		};

		assert!(state.focus("node3", &options));

		assert!(!state.is_animating());
		assert_close(state.transform, centred(&state, "node3", &options));
	}

	#[test]
	fn unknown_node_leaves_the_camera_alone() {
		let mut state = sample();
		let before = state.transform;

		assert!(!state.focus("nope", &FocusOptions::default()));
		assert!(!state.focus("", &FocusOptions::default()));

		assert!(!state.is_animating());
		assert_eq!(state.transform, before);
	}

	#[test]
	fn selection_is_replaced_and_cleared_by_unknown_ids() {
		let mut state = sample();
		let node1 = state.node_index("node1").unwrap();
		let node2 = state.node_index("node2").unwrap();

		state.select(&["node1".into()]);
		assert!(state.is_selected(node1));

		state.select(&["node2".into()]);
		assert!(state.is_selected(node2));
		assert!(!state.is_selected(node1));

		state.select(&["ghost".into()]);
		assert!(state.selection.is_empty());
	}

	#[test]
	fn camera_follows_wall_clock_time_not_frame_count() {
		let mut state = sample();
		state.focus("node1", &FocusOptions::default());

		// Many fast frames still cover only the elapsed time.
		for _ in 0..100 {
			state.tick(0.016, 0.004);
		}
		assert!(state.is_animating());
		state.tick(0.016, 0.7);
		assert!(!state.is_animating());
	}

	#[test]
	fn zero_scale_is_clamped_so_later_zooms_stay_finite() {
		let mut state = sample();
		let options = FocusOptions {
			scale: 0.0,
			animation: AnimationOptions {
				duration: 0.0,
				..AnimationOptions::default()
			},
			..FocusOptions::default()
		};

		assert!(state.focus("node1", &options));
		assert_eq!(state.transform.k, MIN_ZOOM);

		state.zoom_at(400.0, 300.0, -1.0);
		assert!(state.transform.x.is_finite() && state.transform.y.is_finite());
		assert!((state.transform.k - MIN_ZOOM * 1.1).abs() < 1e-9);
	}

	#[test]
	fn oversized_scale_is_clamped() {
		let mut state = sample();
		let options = FocusOptions {
			scale: 1e6,
			animation: AnimationOptions {
				duration: -5.0,
				..AnimationOptions::default()
			},
			..FocusOptions::default()
		};

		state.focus("node2", &options);

		assert!(!state.is_animating());
		assert_eq!(state.transform.k, MAX_ZOOM);
	}

	#[test]
	fn non_finite_options_jump_instead_of_animating_forever() {
		let mut state = sample();
		let options = FocusOptions {
			scale: f64::NAN,
			offset: Offset {
				x: f64::INFINITY,
				y: 0.0,
			},
			animation: AnimationOptions {
				duration: f64::NAN,
				..AnimationOptions::default()
			},
		};

		assert!(state.focus("node1", &options));
		for _ in 0..10 {
			state.tick(0.016, 0.016);
		}

		assert!(!state.is_animating());
		let view = state.transform;
		assert!(view.x.is_finite() && view.y.is_finite() && view.k.is_finite());
		assert!((MIN_ZOOM..=MAX_ZOOM).contains(&view.k));
	}

	#[test]
	fn user_zoom_cancels_a_camera_flight() {
		let mut state = sample();
		state.focus("node0", &FocusOptions::default());
		state.zoom_at(400.0, 300.0, -1.0);
		assert!(!state.is_animating());
		assert!((state.transform.k - 1.1).abs() < 1e-9);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut state = sample();
		for _ in 0..100 {
			state.zoom_at(0.0, 0.0, 1.0);
		}
		assert_eq!(state.transform.k, MIN_ZOOM);
	}

	#[test]
	fn panning_moves_the_view_by_the_drag_distance() {
		let mut state = sample();
		let before = state.transform;
		state.start_pan(100.0, 100.0);
		state.pan_to(130.0, 90.0);
		state.end_pan();
		state.pan_to(500.0, 500.0);
		assert_eq!(state.transform.x, before.x + 30.0);
		assert_eq!(state.transform.y, before.y - 10.0);
	}
}
