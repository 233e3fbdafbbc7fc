//! Visual theming for the particle field.
//!
//! Provides the RGBA color type, the two-valued theme tag pushed in by the page,
//! and the per-theme palette the field and renderer draw from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Two-valued theme tag pushed in by the page's theme toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
	Light,
	#[default]
	Dark,
}

impl ThemeMode {
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}
}

impl fmt::Display for ThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a stored theme string is neither `light` nor `dark`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl fmt::Display for UnknownThemeMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown theme mode: {:?}", self.0)
	}
}

impl std::error::Error for UnknownThemeMode {}

impl FromStr for ThemeMode {
	type Err = UnknownThemeMode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"light" => Ok(ThemeMode::Light),
			"dark" => Ok(ThemeMode::Dark),
			other => Err(UnknownThemeMode(other.to_string())),
		}
	}
}

/// Colors used for one theme: particle palette, trail fill, and link style.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleTheme {
	pub mode: ThemeMode,
	/// Particle fill colors; each particle picks one uniformly at random.
	pub palette: [Color; 3],
	/// Translucent full-surface fill drawn every frame. Its low alpha leaves trails.
	pub trail: Color,
	/// Hue of the proximity lines (alpha is computed per line).
	pub link: Color,
	/// Line opacity for two coincident particles, fading to zero at the link distance.
	pub link_opacity: f64,
}

impl ParticleTheme {
	/// Subtle palette for the light page background
	pub fn light() -> Self {
		Self {
			mode: ThemeMode::Light,
			palette: [
				Color::rgba(0, 102, 204, 0.4),  // Blue
				Color::rgba(138, 43, 226, 0.4), // Purple
				Color::rgba(0, 170, 85, 0.4),   // Green
			],
			trail: Color::rgba(248, 249, 250, 0.05),
			link: Color::rgb(0, 102, 204),
			link_opacity: 0.05,
		}
	}

	/// Vibrant palette for the dark page background
	pub fn dark() -> Self {
		Self {
			mode: ThemeMode::Dark,
			palette: [
				Color::rgba(0, 217, 255, 0.8),  // Cyan
				Color::rgba(138, 43, 226, 0.8), // Purple
				Color::rgba(0, 255, 170, 0.8),  // Mint
			],
			trail: Color::rgba(10, 10, 15, 0.05),
			link: Color::rgb(0, 217, 255),
			link_opacity: 0.2,
		}
	}

	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Light => Self::light(),
			ThemeMode::Dark => Self::dark(),
		}
	}

	pub fn contains(&self, color: Color) -> bool {
		self.palette.contains(&color)
	}
}

impl Default for ParticleTheme {
	fn default() -> Self {
		Self::for_mode(ThemeMode::default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_theme_mode_parse() {
		assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
		assert_eq!(" dark\n".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
		assert!("sepia".parse::<ThemeMode>().is_err());
	}

	#[test]
	fn test_theme_mode_serde() {
		let mode: ThemeMode = serde_json::from_str("\"light\"").unwrap();
		assert_eq!(mode, ThemeMode::Light);
		assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
	}

	#[test]
	fn test_palettes_are_disjoint_by_alpha() {
		let light = ParticleTheme::light();
		let dark = ParticleTheme::dark();
		for c in light.palette {
			assert!(!dark.contains(c));
		}
		assert_eq!(ParticleTheme::default().mode, ThemeMode::Dark);
	}

	#[test]
	fn test_color_css() {
		assert_eq!(Color::rgb(0, 217, 255).to_css(), "#00d9ff");
		assert_eq!(
			Color::rgba(10, 10, 15, 0.05).to_css(),
			"rgba(10, 10, 15, 0.05)"
		);
		assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.0).a, 0.0);
	}
}
