use crate::constants::*;
use desk_core::screen::{self, ScreenLabels, ScreenOp, TextAlign};
use desk_core::{SCREEN_TEX_HEIGHT, SCREEN_TEX_WIDTH};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const LABELS: ScreenLabels<'static> = ScreenLabels {
    coordinates: SCREEN_COORDINATES,
    place: SCREEN_PLACE,
    name: SCREEN_NAME,
    title: SCREEN_TITLE,
    status: SCREEN_STATUS,
};

/// Offscreen 2D canvas that replays the monitor display list each frame.
pub struct ScreenPainter {
    ctx: web::CanvasRenderingContext2d,
    ops: Vec<ScreenOp<'static>>,
}

impl ScreenPainter {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(SCREEN_TEX_WIDTH);
        canvas.set_height(SCREEN_TEX_HEIGHT);
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context for screen canvas"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            ctx,
            ops: Vec::with_capacity(160),
        })
    }

    /// Paint the screen for `time_sec` and return its RGBA8 pixels, rows top
    /// to bottom.
    pub fn draw(&mut self, time_sec: f64) -> Result<Vec<u8>, JsValue> {
        screen::paint_into(&mut self.ops, time_sec, &LABELS);
        for op in &self.ops {
            execute(&self.ctx, op)?;
        }
        let image = self.ctx.get_image_data(
            0.0,
            0.0,
            SCREEN_TEX_WIDTH as f64,
            SCREEN_TEX_HEIGHT as f64,
        )?;
        Ok(image.data().0)
    }
}

fn execute(ctx: &web::CanvasRenderingContext2d, op: &ScreenOp<'_>) -> Result<(), JsValue> {
    match op {
        ScreenOp::VerticalGradient { top, bottom } => {
            let h = SCREEN_TEX_HEIGHT as f64;
            let g = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
            g.add_color_stop(0.0, &top.to_css())?;
            g.add_color_stop(1.0, &bottom.to_css())?;
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill_rect(0.0, 0.0, SCREEN_TEX_WIDTH as f64, h);
        }
        ScreenOp::Line {
            from,
            to,
            color,
            width,
        } => {
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.set_stroke_style_str(&color.to_css());
            ctx.set_line_width(*width as f64);
            ctx.stroke();
        }
        ScreenOp::RadialGlow {
            center,
            inner_radius,
            outer_radius,
            inner,
            outer,
        } => {
            let (x, y) = (center.x as f64, center.y as f64);
            let r = *outer_radius as f64;
            let g = ctx.create_radial_gradient(x, y, *inner_radius as f64, x, y, r)?;
            g.add_color_stop(0.0, &inner.to_css())?;
            g.add_color_stop(1.0, &outer.to_css())?;
            ctx.set_fill_style_canvas_gradient(&g);
            ctx.fill_rect(x - r, y - r, r * 2.0, r * 2.0);
        }
        ScreenOp::StrokeEllipse {
            center,
            radii,
            color,
            width,
        } => {
            ctx.begin_path();
            ctx.ellipse(
                center.x as f64,
                center.y as f64,
                radii.x.max(0.0) as f64,
                radii.y.max(0.0) as f64,
                0.0,
                0.0,
                TAU,
            )?;
            ctx.set_stroke_style_str(&color.to_css());
            ctx.set_line_width(*width as f64);
            ctx.stroke();
        }
        ScreenOp::FillCircle {
            center,
            radius,
            color,
        } => {
            ctx.begin_path();
            ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
            ctx.set_fill_style_str(&color.to_css());
            ctx.fill();
        }
        ScreenOp::Text {
            text,
            position,
            font,
            color,
            align,
        } => {
            ctx.set_font(font);
            ctx.set_fill_style_str(&color.to_css());
            ctx.set_text_align(match align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
            });
            ctx.fill_text(text, position.x as f64, position.y as f64)?;
        }
    }
    Ok(())
}
