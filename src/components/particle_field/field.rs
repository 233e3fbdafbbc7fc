//! Particle state and its per-frame physical update.
//!
//! The field owns every particle, the last known pointer position, the
//! drawing-surface bounds, and the active theme palette. Particles live in
//! creation order; the pointer-trail path evicts from the front once the pool
//! exceeds its capacity.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::SmallRng;

use super::config::FieldConfig;
use super::theme::{Color, ParticleTheme, ThemeMode};

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub color: Color,
}

impl Particle {
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Last known pointer position and its interaction radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
}

/// Owns the particle pool and advances it one step per frame.
pub struct ParticleField {
	particles: VecDeque<Particle>,
	pointer: Pointer,
	width: f64,
	height: f64,
	theme: ParticleTheme,
	config: FieldConfig,
	rng: SmallRng,
}

impl ParticleField {
	/// Create an empty field. Call [`seed`](Self::seed) to populate it.
	pub fn new(
		config: &FieldConfig,
		width: f64,
		height: f64,
		mode: ThemeMode,
		rng: SmallRng,
	) -> Self {
		Self {
			particles: VecDeque::with_capacity(config.capacity + config.click_burst),
			pointer: Pointer {
				x: 0.0,
				y: 0.0,
				radius: config.pointer_radius,
			},
			width,
			height,
			theme: ParticleTheme::for_mode(mode),
			config: config.clone(),
			rng,
		}
	}

	pub fn particles(&self) -> &VecDeque<Particle> {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn pointer(&self) -> Pointer {
		self.pointer
	}

	pub fn bounds(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	pub fn theme(&self) -> &ParticleTheme {
		&self.theme
	}

	pub fn mode(&self) -> ThemeMode {
		self.theme.mode
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Build a particle at `at`, or at a random point inside the bounds.
	///
	/// Size, velocity and color are drawn fresh. The particle is not added to
	/// the field.
	pub fn create(&mut self, at: Option<(f64, f64)>) -> Particle {
		let (x, y) = match at {
			Some(pos) => pos,
			None => (
				self.rng.r#gen::<f64>() * self.width,
				self.rng.r#gen::<f64>() * self.height,
			),
		};
		let (size_min, size_max) = (self.config.size_min, self.config.size_max);
		let speed = self.config.max_speed;
		let size = size_min + self.rng.r#gen::<f64>() * (size_max - size_min);
		let vx = self.rng.r#gen::<f64>() * 2.0 * speed - speed;
		let vy = self.rng.r#gen::<f64>() * 2.0 * speed - speed;
		let color = self.random_color();

		Particle {
			x,
			y,
			vx,
			vy,
			size,
			color,
		}
	}

	/// Append `count` particles at random positions.
	pub fn seed(&mut self, count: usize) {
		for _ in 0..count {
			let p = self.create(None);
			self.particles.push_back(p);
		}
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer.x = x;
		self.pointer.y = y;
	}

	/// Spawn a trail particle when the pointer moved faster than the threshold
	/// on either axis, evicting the oldest particle if over capacity.
	///
	/// Returns whether a particle was spawned.
	pub fn on_fast_pointer_move(&mut self, x: f64, y: f64, dx: f64, dy: f64) -> bool {
		let threshold = self.config.spawn_speed_threshold;
		if dx.abs() <= threshold && dy.abs() <= threshold {
			return false;
		}

		let p = self.create(Some((x, y)));
		self.particles.push_back(p);
		if self.particles.len() > self.config.capacity {
			self.particles.pop_front();
		}
		true
	}

	/// Burst of particles at the click point. Never evicts; the pool may
	/// exceed capacity until the next trail spawn.
	pub fn on_click(&mut self, x: f64, y: f64) {
		for _ in 0..self.config.click_burst {
			let p = self.create(Some((x, y)));
			self.particles.push_back(p);
		}
	}

	/// Advance every particle by one frame.
	pub fn update(&mut self) {
		let Pointer { x: mx, y: my, radius } = self.pointer;
		let strength = self.config.repulsion_strength;
		let (width, height) = (self.width, self.height);

		for p in &mut self.particles {
			// Pointer repulsion: a positional push, not a force
			let (dx, dy) = (mx - p.x, my - p.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance < radius {
				let angle = dy.atan2(dx);
				let push = (radius - distance) / radius * strength;
				p.x -= angle.cos() * push;
				p.y -= angle.sin() * push;
			}

			p.x += p.vx;
			p.y += p.vy;

			if p.x > width || p.x < 0.0 {
				p.vx = -p.vx;
			}
			if p.y > height || p.y < 0.0 {
				p.vy = -p.vy;
			}

			// max/min rather than clamp: bounds may be negative
			p.x = p.x.min(width).max(0.0);
			p.y = p.y.min(height).max(0.0);
		}
	}

	/// Switch palette and re-roll every particle's color from it.
	pub fn set_theme(&mut self, mode: ThemeMode) {
		self.theme = ParticleTheme::for_mode(mode);
		for i in 0..self.particles.len() {
			let color = self.random_color();
			self.particles[i].color = color;
		}
	}

	/// New bounds apply from the next update; positions are left as they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn random_color(&mut self) -> Color {
		let idx = self.rng.gen_range(0..self.theme.palette.len());
		self.theme.palette[idx]
	}
}
