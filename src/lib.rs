//! portfolio-particles: interactive particle background for a portfolio page.
//!
//! This crate provides a WASM-based canvas component that renders a drifting
//! particle field with pointer repulsion, click bursts, proximity links, and
//! light/dark theming.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	FieldConfig, ParticleBackground, ParticleField, ParticleScene, Renderer, SceneError, ThemeMode,
};

/// `localStorage` key holding the selected theme.
const THEME_STORAGE_KEY: &str = "theme";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-particles: logging initialized");
}

/// Load field parameters from a script element with id="particle-config".
/// Expected format: JSON object with any subset of [`FieldConfig`] fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"portfolio-particles: loaded config ({} initial, capacity {})",
				config.initial_count, config.capacity
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-particles: failed to parse particle config: {}", e);
			None
		}
	}
}

/// Read the persisted theme, defaulting to dark.
fn load_stored_theme() -> ThemeMode {
	let stored = web_sys::window()
		.and_then(|w| w.local_storage().ok().flatten())
		.and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());

	match stored.map(|s| s.parse::<ThemeMode>()) {
		Some(Ok(mode)) => mode,
		Some(Err(e)) => {
			warn!("portfolio-particles: {}, using dark", e);
			ThemeMode::Dark
		}
		None => ThemeMode::Dark,
	}
}

/// Persist the theme and mirror it onto `<html data-theme=…>` for CSS.
fn apply_theme(mode: ThemeMode) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Ok(Some(storage)) = window.local_storage() {
		if storage.set_item(THEME_STORAGE_KEY, mode.as_str()).is_err() {
			warn!("portfolio-particles: could not persist theme");
		}
	}
	if let Some(root) = window.document().and_then(|d| d.document_element()) {
		let _ = root.set_attribute("data-theme", mode.as_str());
	}
	debug!("portfolio-particles: theme applied: {}", mode);
}

/// Main application component.
/// Restores the stored theme and renders the particle background with a toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();
	let theme = RwSignal::new(load_stored_theme());

	Effect::new(move |_| apply_theme(theme.get()));

	let toggle = move |_| theme.update(|mode| *mode = mode.toggled());
	let icon = move || match theme.get() {
		ThemeMode::Light => "☀",
		ThemeMode::Dark => "☾",
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground theme=theme config=config />
		<button class="theme-toggle" aria-label="Toggle theme" on:click=toggle>
			{icon}
		</button>
	}
}
