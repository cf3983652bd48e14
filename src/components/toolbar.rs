use leptos::prelude::*;
use log::error;
use web_sys::KeyboardEvent;

use crate::actions::{ActionError, download_image, search_node};
use crate::config::ActionConfig;
use crate::web::{BrowserPage, Html2Canvas, NetworkHandle};

/// Status line text for a finished action; `None` clears it.
fn status_message(action: &str, result: &Result<(), ActionError>) -> Option<String> {
	result
		.as_ref()
		.err()
		.map(|e| format!("{action} failed: {e}"))
}

fn report(status: RwSignal<Option<String>>, action: &str, result: Result<(), ActionError>) {
	if let Err(e) = &result {
		error!("{action} failed: {e}");
	}
	status.set(status_message(action, &result));
}

/// Download and search controls for the graph page.
#[component]
pub fn Toolbar(network: NetworkHandle, config: ActionConfig) -> impl IntoView {
	let status = RwSignal::new(None::<String>);
	let input_id = config.search_input_id.clone();

	let config_dl = config.clone();
	let on_download = move |_| {
		let config = config_dl.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let result = match BrowserPage::current() {
				Ok(page) => download_image(&page, &Html2Canvas, &config).await,
				Err(e) => Err(e),
			};
			report(status, "Download", result);
		});
	};

	let search = move || {
		let result = BrowserPage::current().and_then(|page| search_node(&page, &network, &config));
		report(status, "Search", result);
	};
	let search_click = search.clone();
	let on_search = move |_| search_click();
	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			search();
		}
	};

	view! {
		<div class="graph-toolbar">
			<button on:click=on_download>"Download PNG"</button>
			<input id=input_id type="text" placeholder="Node id" on:keydown=on_keydown />
			<button on:click=on_search>"Search"</button>
			{move || status.get().map(|msg| view! { <p class="action-status">{msg}</p> })}
		</div>
	}
}
