use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::GameError;
use crate::geometry::Rect;

pub const PLAYER_COLOR: &str = "#00ff00";
pub const COIN_COLOR: &str = "#ffd700";
pub const PLATFORM_COLOR: &str = "#654321";

/// Anything the session can draw a frame onto.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: &Rect, color: &str);
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Sizes `canvas` to the play field and grabs its 2d context.
    pub fn new(
        canvas: &HtmlCanvasElement,
        id: &'static str,
        width: u32,
        height: u32,
    ) -> Result<Self, GameError> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or(GameError::NoContext(id))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::NoContext(id))?;

        Ok(Self {
            ctx,
            width: width as f64,
            height: height as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, rect: &Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
}
