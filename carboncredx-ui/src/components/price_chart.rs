//! Price Chart Component
//!
//! CCX price series drawn on an HTML5 canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use carboncredx::views::market::PricePoint;

const LINE_COLOR: &str = "#22c55e"; // green-500

/// Line chart of a price series
#[component]
pub fn PriceChart(
    #[prop(into)]
    series: Signal<Vec<PricePoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when the series changes
    create_effect(move |_| {
        let points = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &points);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Draw the series on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[PricePoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No price data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    let (mut min, mut max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });

    // Add padding to y range
    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    min -= padding;
    max += padding;

    let x_at = |i: usize| {
        let steps = (points.len().max(2) - 1) as f64;
        margin_left + (i as f64 / steps) * chart_width
    };
    let y_at = |price: f64| margin_top + ((max - price) / (max - min)) * chart_height;

    // Horizontal grid lines with price labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * (max - min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("₹{:.2}", value), 5.0, y + 4.0);
    }

    // Series line
    ctx.set_stroke_style(&LINE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let (x, y) = (x_at(i), y_at(point.price));
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // X-axis labels, every sixth point
    ctx.set_fill_style(&"#9ca3af".into());
    for (i, point) in points.iter().enumerate().step_by(6) {
        let _ = ctx.fill_text(&point.label, x_at(i) - 15.0, height - 10.0);
    }
}
