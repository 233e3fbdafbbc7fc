//! Typed 2D drawing surface used by the renderer.
//!
//! [`DrawSurface`] exposes only the primitives the particle renderer needs.
//! [`CanvasSurface`] implements it over an HTML canvas 2D context.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::SceneError;
use super::theme::Color;

/// Raster drawing primitives.
pub trait DrawSurface {
	/// Current surface width and height in pixels.
	fn size(&self) -> (f64, f64);

	fn fill_rect(
		&mut self,
		x: f64,
		y: f64,
		w: f64,
		h: f64,
		color: Color,
	) -> Result<(), SceneError>;

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> Result<(), SceneError>;

	/// Fill a disk of `outer_radius` with a two-stop radial gradient running
	/// from `inner` at `inner_radius` to `outer` at the edge.
	fn fill_radial_glow(
		&mut self,
		x: f64,
		y: f64,
		inner_radius: f64,
		outer_radius: f64,
		inner: Color,
		outer: Color,
	) -> Result<(), SceneError>;

	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	) -> Result<(), SceneError>;
}

/// [`DrawSurface`] backed by a `<canvas>` 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the canvas' 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SceneError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(SceneError::context)?
			.ok_or_else(|| SceneError::ContextUnavailable("getContext returned null".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SceneError::ContextUnavailable("not a CanvasRenderingContext2d".into()))?;

		Ok(Self { canvas, ctx })
	}

	/// Resize the backing canvas. Resizing also clears it.
	pub fn set_size(&self, width: f64, height: f64) {
		self.canvas.set_width(width.max(0.0) as u32);
		self.canvas.set_height(height.max(0.0) as u32);
	}
}

impl DrawSurface for CanvasSurface {
	fn size(&self) -> (f64, f64) {
		(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn fill_rect(
		&mut self,
		x: f64,
		y: f64,
		w: f64,
		h: f64,
		color: Color,
	) -> Result<(), SceneError> {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(x, y, w, h);
		Ok(())
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> Result<(), SceneError> {
		self.ctx.begin_path();
		self.ctx
			.arc(x, y, radius, 0.0, PI * 2.0)
			.map_err(SceneError::draw)?;
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
		Ok(())
	}

	fn fill_radial_glow(
		&mut self,
		x: f64,
		y: f64,
		inner_radius: f64,
		outer_radius: f64,
		inner: Color,
		outer: Color,
	) -> Result<(), SceneError> {
		let gradient = self
			.ctx
			.create_radial_gradient(x, y, inner_radius, x, y, outer_radius)
			.map_err(SceneError::draw)?;
		gradient
			.add_color_stop(0.0, &inner.to_css())
			.map_err(SceneError::draw)?;
		gradient
			.add_color_stop(1.0, &outer.to_css())
			.map_err(SceneError::draw)?;

		self.ctx.begin_path();
		self.ctx
			.arc(x, y, outer_radius, 0.0, PI * 2.0)
			.map_err(SceneError::draw)?;
		#[allow(deprecated)]
		self.ctx.set_fill_style(&gradient);
		self.ctx.fill();
		Ok(())
	}

	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		width: f64,
		color: Color,
	) -> Result<(), SceneError> {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
		Ok(())
	}
}

/// Surface that records draw calls instead of rasterizing them.
#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Rect {
			x: f64,
			y: f64,
			w: f64,
			h: f64,
			color: Color,
		},
		Circle {
			x: f64,
			y: f64,
			radius: f64,
			color: Color,
		},
		Glow {
			x: f64,
			y: f64,
			inner_radius: f64,
			outer_radius: f64,
			inner: Color,
			outer: Color,
		},
		Line {
			from: (f64, f64),
			to: (f64, f64),
			width: f64,
			color: Color,
		},
	}

	pub struct RecordingSurface {
		pub width: f64,
		pub height: f64,
		pub calls: Vec<DrawCall>,
	}

	impl RecordingSurface {
		pub fn new(width: f64, height: f64) -> Self {
			Self {
				width,
				height,
				calls: Vec::new(),
			}
		}

		pub fn lines(&self) -> Vec<&DrawCall> {
			self.calls
				.iter()
				.filter(|c| matches!(c, DrawCall::Line { .. }))
				.collect()
		}
	}

	impl DrawSurface for RecordingSurface {
		fn size(&self) -> (f64, f64) {
			(self.width, self.height)
		}

		fn fill_rect(
			&mut self,
			x: f64,
			y: f64,
			w: f64,
			h: f64,
			color: Color,
		) -> Result<(), SceneError> {
			self.calls.push(DrawCall::Rect { x, y, w, h, color });
			Ok(())
		}

		fn fill_circle(
			&mut self,
			x: f64,
			y: f64,
			radius: f64,
			color: Color,
		) -> Result<(), SceneError> {
			self.calls.push(DrawCall::Circle {
				x,
				y,
				radius,
				color,
			});
			Ok(())
		}

		fn fill_radial_glow(
			&mut self,
			x: f64,
			y: f64,
			inner_radius: f64,
			outer_radius: f64,
			inner: Color,
			outer: Color,
		) -> Result<(), SceneError> {
			self.calls.push(DrawCall::Glow {
				x,
				y,
				inner_radius,
				outer_radius,
				inner,
				outer,
			});
			Ok(())
		}

		fn stroke_line(
			&mut self,
			from: (f64, f64),
			to: (f64, f64),
			width: f64,
			color: Color,
		) -> Result<(), SceneError> {
			self.calls.push(DrawCall::Line {
				from,
				to,
				width,
				color,
			});
			Ok(())
		}
	}
}
