//! Canvas bar chart for per-category moderation counts.
//!
//! DESIGN
//! ======
//! Pure presentation: the analytics page decides what data to chart and this
//! component draws whatever it is handed. Layout math lives in `bar_layout`
//! so geometry stays testable without a DOM.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::net::types::CategoryCount;

#[cfg(any(test, feature = "hydrate"))]
const SIDE_PADDING: f64 = 24.0;
#[cfg(any(test, feature = "hydrate"))]
const TOP_PADDING: f64 = 24.0;
#[cfg(any(test, feature = "hydrate"))]
const LABEL_STRIP: f64 = 36.0;

/// One positioned bar, in canvas pixel coordinates.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq)]
struct BarRect {
    label: String,
    count_label: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Scale category counts into bar rectangles for a canvas of the given size.
///
/// Bars share the horizontal space evenly with a 20% gutter on each side of
/// every slot; the tallest bar spans the full plot height. Negative counts
/// clamp to zero-height bars.
#[cfg(any(test, feature = "hydrate"))]
fn bar_layout(width: f64, height: f64, data: &[CategoryCount]) -> Vec<BarRect> {
    if data.is_empty() {
        return Vec::new();
    }

    let plot_width = (width - (SIDE_PADDING * 2.0)).max(1.0);
    let plot_height = (height - TOP_PADDING - LABEL_STRIP).max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let slot = plot_width / data.len() as f64;
    #[allow(clippy::cast_precision_loss)]
    let max_count = data.iter().map(|entry| entry.count.max(0)).max().unwrap_or(0).max(1) as f64;

    data.iter()
        .enumerate()
        .map(|(index, entry)| {
            #[allow(clippy::cast_precision_loss)]
            let slot_start = SIDE_PADDING + (slot * index as f64);
            #[allow(clippy::cast_precision_loss)]
            let bar_height = (entry.count.max(0) as f64 / max_count) * plot_height;
            BarRect {
                label: entry.category.clone(),
                count_label: entry.count.to_string(),
                x: slot_start + (slot * 0.2),
                y: TOP_PADDING + (plot_height - bar_height),
                width: slot * 0.6,
                height: bar_height,
            }
        })
        .collect()
}

/// Bar chart of moderation categories, drawn into a 2d canvas context.
#[component]
pub fn BarChart(data: Vec<CategoryCount>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let category_count = data.len();

    #[cfg(feature = "hydrate")]
    {
        let canvas_ref = canvas_ref.clone();
        let data = data.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            draw_bar_chart(&canvas, &data);
        });
    }

    view! {
        <div class="bar-chart">
            <canvas class="bar-chart__canvas" node_ref=canvas_ref width="640" height="320"></canvas>
            <span class="bar-chart__meta">{format!("{category_count} categories")}</span>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn draw_bar_chart(canvas: &web_sys::HtmlCanvasElement, data: &[CategoryCount]) {
    let width = f64::from(canvas.width().max(1));
    let height = f64::from(canvas.height().max(1));

    let Some(ctx_value) = canvas.get_context("2d").ok().flatten() else {
        return;
    };
    let Ok(ctx) = ctx_value.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_text_align("center");

    let bars = bar_layout(width, height, data);
    if bars.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        let _ = ctx.fill_text("No category data", width * 0.5, height * 0.5);
        return;
    }

    // Baseline under the bars, above the label strip.
    ctx.set_stroke_style_str("#d1d5db");
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(SIDE_PADDING, height - LABEL_STRIP);
    ctx.line_to(width - SIDE_PADDING, height - LABEL_STRIP);
    ctx.stroke();

    for bar in &bars {
        ctx.set_fill_style_str("#4f46e5");
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

        ctx.set_fill_style_str("#111827");
        let center = bar.x + (bar.width * 0.5);
        let _ = ctx.fill_text(&bar.label, center, height - 12.0);
        let _ = ctx.fill_text(&bar.count_label, center, (bar.y - 6.0).max(12.0));
    }
}
