//! Leptos component wrapping the particle background canvas.
//!
//! The component creates a fixed full-viewport canvas and wires window-level
//! pointer, click and resize listeners into the scene. An animation loop runs
//! via `requestAnimationFrame`, calling [`ParticleScene::tick`] each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::config::FieldConfig;
use super::error::SceneError;
use super::scene::ParticleScene;
use super::surface::CanvasSurface;
use super::theme::ThemeMode;

/// Scene plus the canvas it draws to.
struct SceneContext {
	scene: ParticleScene,
	surface: CanvasSurface,
}

type Shared<T> = Rc<RefCell<Option<T>>>;

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Seed for the field's RNG. The browser has no `getrandom` backend wired in,
/// so this draws from `Math.random` instead.
fn browser_seed() -> u64 {
	let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
	(hi << 32) | lo
}

/// Size the canvas to the viewport and build the scene on it.
fn mount_scene(
	canvas: HtmlCanvasElement,
	config: &FieldConfig,
	mode: ThemeMode,
) -> Result<SceneContext, SceneError> {
	let window = web_sys::window().ok_or(SceneError::NoWindow)?;
	let (w, h) = viewport_size(&window);

	let surface = CanvasSurface::new(canvas)?;
	surface.set_size(w, h);

	let scene = ParticleScene::new(config, w, h, mode, SmallRng::seed_from_u64(browser_seed()));
	info!(
		"particle background: {} particles on {}x{} ({})",
		scene.field.len(),
		w,
		h,
		mode
	);

	Ok(SceneContext { scene, surface })
}

/// Renders the decorative particle field behind the page content.
///
/// The `theme` signal is followed for the component's lifetime; each change
/// recolors the particles on the next frame. Pointer and click input is read
/// from the window, so the canvas itself never intercepts events.
#[component]
pub fn ParticleBackground(
	#[prop(into)] theme: Signal<ThemeMode>,
	#[prop(default = FieldConfig::default())] config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Shared<SceneContext> = Rc::new(RefCell::new(None));
	let animate: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let resize_cb: Shared<Closure<dyn FnMut()>> = Rc::new(RefCell::new(None));
	let move_cb: Shared<Closure<dyn FnMut(MouseEvent)>> = Rc::new(RefCell::new(None));
	let click_cb: Shared<Closure<dyn FnMut(MouseEvent)>> = Rc::new(RefCell::new(None));
	let context_init = context.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			error!("particle background: {}", SceneError::NoWindow);
			wasm_bindgen::throw_str(&SceneError::NoWindow.to_string());
		};

		match mount_scene(canvas.into(), &config, theme.get_untracked()) {
			Ok(ctx) => *context_init.borrow_mut() = Some(ctx),
			Err(e) => {
				error!("particle background: failed to start: {}", e);
				wasm_bindgen::throw_str(&e.to_string());
			}
		}

		let context_resize = context_init.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.surface.set_size(nw, nh);
				c.scene.resized(nw, nh);
			}
		}));

		let context_move = context_init.clone();
		*move_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_move.borrow_mut() {
				c.scene.pointer_moved(
					ev.client_x() as f64,
					ev.client_y() as f64,
					ev.movement_x() as f64,
					ev.movement_y() as f64,
				);
			}
		}));

		let context_click = context_init.clone();
		*click_cb.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_click.borrow_mut() {
				c.scene.clicked(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));

		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = *move_cb.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(ref cb) = *click_cb.borrow() {
			let _ = window.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				if let Err(e) = c.scene.tick(&mut c.surface) {
					warn!("particle background: frame dropped: {}", e);
				}
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_theme = context.clone();
	Effect::new(move |_| {
		let mode = theme.get();
		if let Some(ref mut c) = *context_theme.borrow_mut() {
			c.scene.set_theme(mode);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}
