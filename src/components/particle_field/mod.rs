//! Decorative particle-field background.
//!
//! Renders a full-viewport canvas of drifting particles with:
//! - Pointer repulsion and trail spawning on fast pointer movement
//! - Click bursts
//! - Glow halos and proximity links between nearby particles
//! - Light/dark palettes that follow the page theme
//!
//! The simulation ([`ParticleField`]), drawing ([`Renderer`]) and controller
//! ([`ParticleScene`]) have no DOM dependency; only [`CanvasSurface`] and the
//! component touch the browser.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_particles::{ParticleBackground, ThemeMode};
//!
//! let theme = RwSignal::new(ThemeMode::Dark);
//! view! { <ParticleBackground theme=theme /> }
//! ```

mod component;
mod config;
mod error;
mod field;
mod render;
mod scene;
mod surface;
pub mod theme;

pub use component::ParticleBackground;
pub use config::FieldConfig;
pub use error::SceneError;
pub use field::{Particle, ParticleField, Pointer};
pub use render::Renderer;
pub use scene::ParticleScene;
pub use surface::{CanvasSurface, DrawSurface};
pub use theme::{Color, ParticleTheme, ThemeMode};
