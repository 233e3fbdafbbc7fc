//! Frame rendering for the particle field.
//!
//! Each frame is drawn in three passes:
//! 1. Translucent theme fill over the whole surface (leaves motion trails)
//! 2. Particles with their glow halos, in field order
//! 3. Proximity links for every pair closer than the link distance

use super::config::FieldConfig;
use super::error::SceneError;
use super::field::{Particle, ParticleField};
use super::surface::DrawSurface;
use super::theme::ParticleTheme;

/// Draws a [`ParticleField`] onto a [`DrawSurface`].
#[derive(Clone, Debug)]
pub struct Renderer {
	link_distance: f64,
	link_width: f64,
	glow_scale: f64,
}

impl Renderer {
	pub fn new(config: &FieldConfig) -> Self {
		Self {
			link_distance: config.link_distance,
			link_width: config.link_width,
			glow_scale: config.glow_scale,
		}
	}

	/// Renders one complete frame.
	pub fn frame<S: DrawSurface>(
		&self,
		surface: &mut S,
		field: &ParticleField,
	) -> Result<(), SceneError> {
		let theme = field.theme();
		let particles = field.particles();

		self.clear(surface, theme)?;

		for p in particles {
			self.draw_particle(surface, p)?;
		}

		// O(n²), fine for a pool of ~100
		for i in 0..particles.len() {
			for j in (i + 1)..particles.len() {
				self.draw_connection(surface, &particles[i], &particles[j], theme)?;
			}
		}

		Ok(())
	}

	pub fn clear<S: DrawSurface>(
		&self,
		surface: &mut S,
		theme: &ParticleTheme,
	) -> Result<(), SceneError> {
		let (w, h) = surface.size();
		surface.fill_rect(0.0, 0.0, w, h, theme.trail)
	}

	/// Solid disk plus a halo fading to full transparency.
	pub fn draw_particle<S: DrawSurface>(
		&self,
		surface: &mut S,
		p: &Particle,
	) -> Result<(), SceneError> {
		surface.fill_circle(p.x, p.y, p.size, p.color)?;
		surface.fill_radial_glow(
			p.x,
			p.y,
			p.size,
			p.size * self.glow_scale,
			p.color,
			p.color.with_alpha(0.0),
		)
	}

	/// Opacity of a link between particles `distance` apart, or `None` when
	/// they are too far apart to be linked.
	pub fn link_opacity(&self, distance: f64, theme: &ParticleTheme) -> Option<f64> {
		if distance >= self.link_distance {
			return None;
		}
		Some(theme.link_opacity * (1.0 - distance / self.link_distance))
	}

	/// Draws a link if the two particles are close enough.
	///
	/// Returns whether a line was drawn.
	pub fn draw_connection<S: DrawSurface>(
		&self,
		surface: &mut S,
		p1: &Particle,
		p2: &Particle,
		theme: &ParticleTheme,
	) -> Result<bool, SceneError> {
		let Some(opacity) = self.link_opacity(p1.distance_to(p2), theme) else {
			return Ok(false);
		};

		surface.stroke_line(
			(p1.x, p1.y),
			(p2.x, p2.y),
			self.link_width,
			theme.link.with_alpha(opacity),
		)?;
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::surface::recording::{DrawCall, RecordingSurface};
	use super::super::theme::{Color, ThemeMode};
	use super::*;

	fn particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			color: Color::rgba(0, 217, 255, 0.8),
		}
	}

	fn renderer() -> Renderer {
		Renderer::new(&FieldConfig::default())
	}

	#[test]
	fn test_connection_skipped_at_threshold() {
		let mut surface = RecordingSurface::new(400.0, 400.0);
		let theme = ParticleTheme::dark();
		let r = renderer();

		let drawn = r
			.draw_connection(&mut surface, &particle(0.0, 0.0), &particle(100.0, 0.0), &theme)
			.unwrap();
		assert!(!drawn);
		let drawn = r
			.draw_connection(&mut surface, &particle(0.0, 0.0), &particle(60.0, 80.0), &theme)
			.unwrap();
		assert!(!drawn);
		let drawn = r
			.draw_connection(&mut surface, &particle(0.0, 0.0), &particle(300.0, 0.0), &theme)
			.unwrap();
		assert!(!drawn);
		assert!(surface.calls.is_empty());
	}

	#[test]
	fn test_connection_opacity_falls_with_distance() {
		let r = renderer();
		for theme in [ParticleTheme::light(), ParticleTheme::dark()] {
			let mut prev = f64::INFINITY;
			for d in [0.0, 10.0, 25.0, 50.0, 75.0, 99.0] {
				let opacity = r.link_opacity(d, &theme).unwrap();
				assert!(opacity < prev, "opacity did not fall at distance {}", d);
				assert!(opacity > 0.0);
				prev = opacity;
			}
			assert_eq!(r.link_opacity(0.0, &theme), Some(theme.link_opacity));
		}
	}

	#[test]
	fn test_connection_line_style() {
		let mut surface = RecordingSurface::new(400.0, 400.0);
		let theme = ParticleTheme::light();
		let drawn = renderer()
			.draw_connection(&mut surface, &particle(10.0, 10.0), &particle(10.0, 60.0), &theme)
			.unwrap();
		assert!(drawn);

		match &surface.calls[..] {
			[DrawCall::Line { from, to, width, color }] => {
				assert_eq!(*from, (10.0, 10.0));
				assert_eq!(*to, (10.0, 60.0));
				assert_eq!(*width, 0.5);
				assert_eq!((color.r, color.g, color.b), (0, 102, 204));
				assert!((color.a - 0.025).abs() < 1e-12);
			}
			other => panic!("unexpected calls: {:?}", other),
		}
	}

	#[test]
	fn test_particle_glow_fades_to_transparent() {
		let mut surface = RecordingSurface::new(400.0, 400.0);
		let p = particle(5.0, 6.0);
		renderer().draw_particle(&mut surface, &p).unwrap();

		assert_eq!(surface.calls.len(), 2);
		assert_eq!(
			surface.calls[0],
			DrawCall::Circle {
				x: 5.0,
				y: 6.0,
				radius: 2.0,
				color: p.color
			}
		);
		match &surface.calls[1] {
			DrawCall::Glow {
				inner_radius,
				outer_radius,
				inner,
				outer,
				..
			} => {
				assert_eq!(*inner_radius, 2.0);
				assert_eq!(*outer_radius, 6.0);
				assert_eq!(*inner, p.color);
				assert_eq!(outer.a, 0.0);
			}
			other => panic!("expected glow, got {:?}", other),
		}
	}

	#[test]
	fn test_clear_uses_translucent_theme_fill() {
		let mut surface = RecordingSurface::new(320.0, 240.0);
		renderer()
			.clear(&mut surface, &ParticleTheme::light())
			.unwrap();
		assert_eq!(
			surface.calls,
			vec![DrawCall::Rect {
				x: 0.0,
				y: 0.0,
				w: 320.0,
				h: 240.0,
				color: Color::rgba(248, 249, 250, 0.05),
			}]
		);
	}

	#[test]
	fn test_frame_draw_order_and_counts() {
		let mut field = ParticleField::new(
			&FieldConfig::default(),
			1000.0,
			1000.0,
			ThemeMode::Dark,
			SmallRng::seed_from_u64(3),
		);
		// Three particles in a row 40 apart: pairs at 40, 40 and 80 are linked
		field.on_click(100.0, 100.0);
		field.on_click(140.0, 100.0);
		field.on_click(180.0, 100.0);
		field.on_fast_pointer_move(900.0, 900.0, 10.0, 10.0);
		assert_eq!(field.len(), 16);

		let mut surface = RecordingSurface::new(1000.0, 1000.0);
		renderer().frame(&mut surface, &field).unwrap();

		assert!(matches!(surface.calls[0], DrawCall::Rect { .. }));
		let body = &surface.calls[1..1 + 2 * field.len()];
		for pair in body.chunks(2) {
			assert!(matches!(pair[0], DrawCall::Circle { .. }));
			assert!(matches!(pair[1], DrawCall::Glow { .. }));
		}

		// 5 coincident per cluster: C(5,2) * 3 inside clusters + 25 * 3 across them
		let lines = surface.lines();
		assert_eq!(lines.len(), 10 * 3 + 25 * 3);
		assert_eq!(surface.calls.len(), 1 + 2 * field.len() + lines.len());
	}
}
