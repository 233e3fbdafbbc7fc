//! Scene controller tying the particle field to its renderer.
//!
//! Input handlers only mutate state here; nothing is drawn until the frame
//! driver calls [`ParticleScene::tick`], so every change becomes visible on the
//! next frame.

use log::debug;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::error::SceneError;
use super::field::ParticleField;
use super::render::Renderer;
use super::surface::DrawSurface;
use super::theme::ThemeMode;

/// Owns one [`ParticleField`] and one [`Renderer`].
///
/// Created once when the background mounts, then advanced once per animation
/// frame. Speed is tied to the frame rate: each tick is one unit step.
pub struct ParticleScene {
	pub field: ParticleField,
	renderer: Renderer,
}

impl ParticleScene {
	/// Build the scene and seed `config.initial_count` particles.
	pub fn new(
		config: &FieldConfig,
		width: f64,
		height: f64,
		mode: ThemeMode,
		rng: SmallRng,
	) -> Self {
		let mut field = ParticleField::new(config, width, height, mode, rng);
		field.seed(config.initial_count);

		Self {
			field,
			renderer: Renderer::new(config),
		}
	}

	pub fn renderer(&self) -> &Renderer {
		&self.renderer
	}

	/// Advance the simulation one step and draw the result.
	pub fn tick<S: DrawSurface>(&mut self, surface: &mut S) -> Result<(), SceneError> {
		self.field.update();
		self.renderer.frame(surface, &self.field)
	}

	/// Pointer moved to `(x, y)` by `(dx, dy)` since the last event.
	pub fn pointer_moved(&mut self, x: f64, y: f64, dx: f64, dy: f64) {
		self.field.set_pointer(x, y);
		self.field.on_fast_pointer_move(x, y, dx, dy);
	}

	pub fn clicked(&mut self, x: f64, y: f64) {
		self.field.on_click(x, y);
	}

	pub fn resized(&mut self, width: f64, height: f64) {
		debug!("particle scene: resized to {}x{}", width, height);
		self.field.resize(width, height);
	}

	pub fn set_theme(&mut self, mode: ThemeMode) {
		if self.field.mode() == mode {
			return;
		}
		debug!("particle scene: theme -> {}", mode);
		self.field.set_theme(mode);
	}
}
