use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::model::{SceneView, ViewMode};
use crate::render::draw_ui_text;
use crate::state::ViewerState;

pub(crate) fn draw_hud(
    state: &ViewerState,
    scene: &SceneView,
    left: f32,
    right: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_header_block(state, left, right, font);
    draw_status_block(state, scene, left, screen_h, font);
}

fn draw_header_block(state: &ViewerState, left: f32, right: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text(
        "Parabolic Flight - Trajectory Viewer",
        left,
        TITLE_Y,
        30,
        header_color,
        font,
    );
    let mode = format!("{} mode", state.mode.label());
    let mode_size = measure_text(&mode, font, 24, 1.0);
    draw_ui_text(
        &mode,
        right - mode_size.width,
        TITLE_Y + 2.0,
        24,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        "Controls: sliders edit the launch | M 2D/3D | G guides | E export SVG | R reset",
        left,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn draw_status_block(
    state: &ViewerState,
    scene: &SceneView,
    left: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let config = state.config;
    let launch = match state.mode {
        ViewMode::Planar => format!(
            "Speed: {:.1} m/s | Angle: {:.1} deg | g: {:.2} m/s^2",
            config.speed_mps, config.angle_deg, config.gravity_mps2
        ),
        ViewMode::Spatial => format!(
            "Speed: {:.1} m/s | Elevation: {:.1} deg | Azimuth: {:.1} deg | Spin: {:.1} | g: {:.2} m/s^2",
            config.speed_mps,
            config.elevation_deg,
            config.azimuth_deg,
            config.spin,
            config.gravity_mps2
        ),
    };
    draw_ui_text(&launch, left, screen_h - 45.0, 24, header_color, font);

    match &scene.error {
        Some(error) => draw_ui_text(
            &format!("Error: {error}"),
            left,
            screen_h - 14.0,
            20,
            RED,
            font,
        ),
        None => draw_ui_text(&scene.readout, left, screen_h - 14.0, 20, BLUE, font),
    }

    draw_ui_text(
        &state.status_line,
        left,
        screen_h - 76.0,
        18,
        DARKGRAY,
        font,
    );
}
