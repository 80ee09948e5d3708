//! Chart Components
//!
//! Weekly trend line chart and cognitive profile radar, drawn on HTML5 Canvas.

use leptos::*;
use neurogrow::dashboard::{PerformancePoint, SkillScore};
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Series colours: memory, attention, processing
const SERIES_COLORS: [&str; 3] = ["#3b82f6", "#eab308", "#22c55e"];

const SERIES_LABELS: [&str; 3] = ["Memory", "Attention", "Processing Speed"];

const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#6b7280";

/// Weekly performance line chart
#[component]
pub fn WeeklyChart(points: &'static [PerformancePoint]) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_weekly(&canvas, points);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="600"
                height="300"
                class="w-full h-72 rounded-lg"
            />

            // Legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {SERIES_LABELS
                    .iter()
                    .zip(SERIES_COLORS)
                    .map(|(label, color)| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">{*label}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Cognitive profile radar chart
#[component]
pub fn RadarChart(skills: &'static [SkillScore]) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_radar(&canvas, skills);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="400"
            height="300"
            class="w-full h-72 rounded-lg"
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Value range for the y axis, padded by 10% and never empty
pub fn y_bounds(points: &[PerformancePoint]) -> (f64, f64) {
    let values = points
        .iter()
        .flat_map(|p| [p.memory, p.attention, p.processing]);
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !min.is_finite() {
        return (0.0, 100.0);
    }

    let padding = if max > min { (max - min) * 0.1 } else { 1.0 };
    (min - padding, max + padding)
}

/// Canvas y for a value (inverted because canvas y grows downward)
pub fn scale_y(value: f64, bounds: (f64, f64), top: f64, height: f64) -> f64 {
    let (min, max) = bounds;
    top + (max - value) / (max - min) * height
}

/// Point on a radar axis; axis 0 points straight up
pub fn radar_point(
    axis: usize,
    axes: usize,
    fraction: f64,
    center: (f64, f64),
    radius: f64,
) -> (f64, f64) {
    let angle = -PI / 2.0 + axis as f64 * 2.0 * PI / axes as f64;
    (
        center.0 + angle.cos() * radius * fraction,
        center.1 + angle.sin() * radius * fraction,
    )
}

fn draw_weekly(canvas: &HtmlCanvasElement, points: &[PerformancePoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let bounds = y_bounds(points);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = bounds.1 - (i as f64 / 4.0) * (bounds.1 - bounds.0);
        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    if points.is_empty() {
        return;
    }

    let step = if points.len() > 1 {
        chart_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_at = |i: usize| margin_left + i as f64 * step;

    let series: [fn(&PerformancePoint) -> f64; 3] =
        [|p| p.memory, |p| p.attention, |p| p.processing];

    for (value_of, color) in series.iter().zip(SERIES_COLORS) {
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, point) in points.iter().enumerate() {
            let y = scale_y(value_of(point), bounds, margin_top, chart_height);
            if i == 0 {
                ctx.move_to(x_at(i), y);
            } else {
                ctx.line_to(x_at(i), y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.into());
        for (i, point) in points.iter().enumerate() {
            let y = scale_y(value_of(point), bounds, margin_top, chart_height);
            ctx.begin_path();
            let _ = ctx.arc(x_at(i), y, 3.0, 0.0, PI * 2.0);
            ctx.fill();
        }
    }

    // Day labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(point.day, x_at(i) - 12.0, height - 8.0);
    }
}

fn draw_radar(canvas: &HtmlCanvasElement, skills: &[SkillScore]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center = (width / 2.0, height / 2.0);
    let radius = height / 2.0 - 40.0;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let axes = skills.len();
    if axes < 3 {
        return;
    }

    // Rings and spokes
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    for ring in 1..=4 {
        let fraction = ring as f64 / 4.0;
        ctx.begin_path();
        for axis in 0..=axes {
            let (x, y) = radar_point(axis % axes, axes, fraction, center, radius);
            if axis == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }
    for axis in 0..axes {
        let (x, y) = radar_point(axis, axes, 1.0, center, radius);
        ctx.begin_path();
        ctx.move_to(center.0, center.1);
        ctx.line_to(x, y);
        ctx.stroke();
    }

    // Score polygon
    ctx.begin_path();
    for (axis, skill) in skills.iter().enumerate() {
        let (x, y) = radar_point(axis, axes, skill.percent() / 100.0, center, radius);
        if axis == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.set_global_alpha(0.3);
    ctx.set_fill_style(&SERIES_COLORS[0].into());
    ctx.fill();
    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style(&SERIES_COLORS[0].into());
    ctx.set_line_width(2.0);
    ctx.stroke();

    // Axis labels
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("11px sans-serif");
    ctx.set_text_align("center");
    for (axis, skill) in skills.iter().enumerate() {
        let (x, y) = radar_point(axis, axes, 1.0, center, radius + 18.0);
        let _ = ctx.fill_text(skill.skill, x, y + 4.0);
    }
}
