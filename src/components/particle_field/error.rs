//! Error types for the particle scene.
//!
//! Simulation itself never fails; errors come from acquiring the browser
//! drawing surface at startup and from canvas calls while drawing a frame.

use std::fmt;

use wasm_bindgen::JsValue;

/// Errors raised while mounting or drawing the particle scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
	/// `window` is not available (not running in a browser).
	NoWindow,
	/// `window.document` is not available.
	NoDocument,
	/// The canvas has no usable 2D rendering context.
	ContextUnavailable(String),
	/// A canvas drawing call failed.
	Draw(String),
}

impl SceneError {
	/// Wrap a failed canvas call.
	pub fn draw(value: JsValue) -> Self {
		SceneError::Draw(js_message(&value))
	}

	/// Wrap a failed `getContext("2d")`.
	pub fn context(value: JsValue) -> Self {
		SceneError::ContextUnavailable(js_message(&value))
	}
}

impl fmt::Display for SceneError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SceneError::NoWindow => write!(f, "No browser window available"),
			SceneError::NoDocument => write!(f, "No document attached to the window"),
			SceneError::ContextUnavailable(msg) => {
				write!(f, "Canvas 2D context unavailable: {}", msg)
			}
			SceneError::Draw(msg) => write!(f, "Canvas draw call failed: {}", msg),
		}
	}
}

impl std::error::Error for SceneError {}

/// Best-effort string form of a thrown JS value.
fn js_message(value: &JsValue) -> String {
	value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
