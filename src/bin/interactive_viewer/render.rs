use macroquad::prelude::*;
use parabolic_flight::Point2;
use parabolic_flight::core::window::PlotWindow;

use crate::constants::{MARKER_RADIUS, X_GRID_LINES, Y_GRID_LINES};
use crate::model::Guides;

/// Screen rectangle a world window is mapped onto.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlotArea {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotArea {
    fn width(&self) -> f32 {
        (self.right - self.left).max(1.0)
    }

    fn height(&self) -> f32 {
        (self.bottom - self.top).max(1.0)
    }
}

pub(crate) fn world_to_screen(world: Point2, window: &PlotWindow, area: &PlotArea) -> Vec2 {
    let tx = (world.x - window.min_x) / window.x_span();
    let ty = (world.y - window.min_y) / window.y_span();
    vec2(
        area.left + (tx as f32) * area.width(),
        area.bottom - (ty as f32) * area.height(),
    )
}

fn format_axis_value(value: f64, axis_span: f64) -> String {
    if axis_span >= 1000.0 {
        format!("{value:.0}")
    } else if axis_span >= 100.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(area: &PlotArea, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        draw_line(x, area.top, x, area.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        draw_line(area.left, y, area.right, y, 1.0, color);
    }
}

pub(crate) fn draw_axis_tick_labels(
    area: &PlotArea,
    window: &PlotWindow,
    x_label: &str,
    font: Option<&Font>,
) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = area.left + t * area.width();
        let value = window.min_x + f64::from(t) * window.x_span();
        let label = format_axis_value(value, window.x_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            area.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = area.bottom - t * area.height();
        let value = window.min_y + f64::from(t) * window.y_span();
        let label = format_axis_value(value, window.y_span());
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (area.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        x_label,
        area.right - 160.0,
        area.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text(
        "Height (m)",
        area.left + 10.0,
        area.top - 8.0,
        18,
        label_color,
        font,
    );
}

/// Ground line at height zero, when it falls inside the window.
pub(crate) fn draw_ground(area: &PlotArea, window: &PlotWindow) {
    if window.min_y > 0.0 || window.max_y < 0.0 {
        return;
    }
    let y = world_to_screen(Point2::ORIGIN, window, area).y;
    draw_line(area.left, y, area.right, y, 2.0, DARKGRAY);
}

pub(crate) fn draw_path(
    points: &[Point2],
    window: &PlotWindow,
    area: &PlotArea,
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    let mut prev = world_to_screen(points[0], window, area);
    for point in points.iter().skip(1).copied() {
        let cur = world_to_screen(point, window, area);
        draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        prev = cur;
    }
}

pub(crate) fn draw_marker(point: Point2, window: &PlotWindow, area: &PlotArea, fill: Color) {
    let p = world_to_screen(point, window, area);
    draw_circle(p.x, p.y, MARKER_RADIUS, fill);
    draw_circle_lines(p.x, p.y, MARKER_RADIUS, 2.0, Color::from_rgba(32, 32, 36, 255));
}

pub(crate) fn draw_guides(guides: Guides, window: &PlotWindow, area: &PlotArea) {
    let apex_y = world_to_screen(Point2::new(0.0, guides.apex_height_m), window, area).y;
    draw_dashed_line(
        vec2(area.left, apex_y),
        vec2(area.right, apex_y),
        Color::from_rgba(220, 38, 38, 200),
    );

    let range_x = world_to_screen(Point2::new(guides.range_m, 0.0), window, area).x;
    draw_dashed_line(
        vec2(range_x, area.top),
        vec2(range_x, area.bottom),
        Color::from_rgba(22, 163, 74, 200),
    );
}

fn draw_dashed_line(from: Vec2, to: Vec2, color: Color) {
    const DASH_PX: f32 = 10.0;
    const GAP_PX: f32 = 6.0;

    let length = from.distance(to);
    if length < 1.0 || !length.is_finite() {
        return;
    }
    let dir = (to - from) / length;
    let mut travelled = 0.0;
    while travelled < length {
        let start = from + dir * travelled;
        let end = from + dir * (travelled + DASH_PX).min(length);
        draw_line(start.x, start.y, end.x, end.y, 1.5, color);
        travelled += DASH_PX + GAP_PX;
    }
}

/// Top-down footprint of a spatial flight in a framed box.
pub(crate) fn draw_ground_track_inset(track: &[Point2], area: &PlotArea, font: Option<&Font>) {
    draw_rectangle(
        area.left,
        area.top,
        area.width(),
        area.height(),
        Color::from_rgba(255, 255, 255, 235),
    );
    draw_rectangle_lines(
        area.left,
        area.top,
        area.width(),
        area.height(),
        1.5,
        Color::from_rgba(148, 156, 168, 255),
    );
    draw_ui_text(
        "Top view (x, y)",
        area.left + 8.0,
        area.top + 18.0,
        16,
        DARKGRAY,
        font,
    );

    let inner = PlotArea {
        left: area.left + 8.0,
        right: area.right - 8.0,
        top: area.top + 26.0,
        bottom: area.bottom - 8.0,
    };
    let window = PlotWindow::fixed_ratio(track.iter().copied());
    draw_path(track, &window, &inner, 2.0, Color::from_rgba(54, 123, 245, 255));
    if let Some(last) = track.last() {
        draw_marker(*last, &window, &inner, Color::from_rgba(81, 201, 122, 255));
    }
}
