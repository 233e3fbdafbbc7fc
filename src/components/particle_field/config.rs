//! Tunable parameters for the particle field, loadable from page JSON.

use serde::Deserialize;

/// Simulation and drawing parameters.
///
/// Every field has a default, so a page may supply any subset as JSON:
///
/// ```ignore
/// <script id="particle-config" type="application/json">{ "capacity": 60 }</script>
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Particles seeded at startup.
	pub initial_count: usize,
	/// Soft pool bound enforced by pointer-trail spawning only.
	pub capacity: usize,
	/// Pointer interaction radius.
	pub pointer_radius: f64,
	/// Maximum positional push applied at the pointer's center.
	pub repulsion_strength: f64,
	/// Per-axis pointer delta that must be exceeded to spawn a trail particle.
	pub spawn_speed_threshold: f64,
	/// Particles added per click.
	pub click_burst: usize,
	pub size_min: f64,
	pub size_max: f64,
	/// Per-axis velocity bound at creation, `[-max_speed, max_speed)`.
	pub max_speed: f64,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	pub link_width: f64,
	/// Glow halo radius as a multiple of the particle size.
	pub glow_scale: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			initial_count: 50,
			capacity: 100,
			pointer_radius: 100.0,
			repulsion_strength: 5.0,
			spawn_speed_threshold: 5.0,
			click_burst: 5,
			size_min: 1.0,
			size_max: 3.0,
			max_speed: 0.25,
			link_distance: 100.0,
			link_width: 0.5,
			glow_scale: 3.0,
		}
	}
}
