use chrono::Local;
use macroquad::prelude::*;
use parabolic_flight::presenter::PresenterResult;
use parabolic_flight::presenter::plot::{auto_file_name, write_planar_svg, write_spatial_svg};
use parabolic_flight::{compute_trajectory_2d, compute_trajectory_3d};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, INSET_HEIGHT, INSET_PADDING,
    INSET_WIDTH, LEFT_MARGIN, MSAA_SAMPLES, RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{FrameActions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::model::{ViewMode, build_scene};
use crate::render::{
    PlotArea, draw_axis_tick_labels, draw_grid, draw_ground, draw_ground_track_inset,
    draw_guides, draw_marker, draw_path,
};
use crate::state::ViewerState;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Parabolic Flight Viewer".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn export_chart(state: &ViewerState) -> PresenterResult<String> {
    let path = auto_file_name(state.mode.file_tag(), Local::now());
    match state.mode {
        ViewMode::Planar => {
            let params = state.config.planar();
            // The scene already showed the error; nothing to export.
            let Ok((trajectory, summary)) = compute_trajectory_2d(&params) else {
                return Ok("Nothing to export: planar launch is invalid".to_string());
            };
            write_planar_svg(&path, &params, &trajectory, &summary)?;
        }
        ViewMode::Spatial => {
            let params = state.config.spatial();
            let (trajectory, summary) = compute_trajectory_3d(&params);
            write_spatial_svg(&path, &params, &trajectory, &summary)?;
        }
    }
    Ok(format!("Exported {}", path.display()))
}

fn apply_actions(state: &mut ViewerState, actions: FrameActions) {
    if actions.toggle_mode {
        state.toggle_mode();
    }
    if actions.toggle_guides {
        state.show_guides = !state.show_guides;
    }
    if actions.reset {
        state.reset();
    }
    if actions.export {
        state.status_line = match export_chart(state) {
            Ok(status) => {
                info!("{status}");
                status
            }
            Err(err) => {
                warn!(error = %err, "chart export failed");
                format!("Export failed: {err}")
            }
        };
    }
}

pub(crate) async fn run() {
    init_logging();

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = ViewerState::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);

        let scene = build_scene(state.mode, &state.config);
        let area = PlotArea {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(&area, Color::from_rgba(227, 231, 236, 255));
        draw_line(area.left, area.top, area.left, area.bottom, 2.0, DARKGRAY);
        draw_ground(&area, &scene.window);
        let x_label = match state.mode {
            ViewMode::Planar => "Distance (m)",
            ViewMode::Spatial => "Downrange (m)",
        };
        draw_axis_tick_labels(&area, &scene.window, x_label, ui_font.as_ref());

        if let Some(guides) = scene.guides.filter(|_| state.show_guides) {
            draw_guides(guides, &scene.window, &area);
        }

        draw_path(
            &scene.side_path,
            &scene.window,
            &area,
            3.0,
            Color::from_rgba(54, 123, 245, 255),
        );
        if scene.error.is_none() {
            draw_marker(
                scene.landing,
                &scene.window,
                &area,
                Color::from_rgba(81, 201, 122, 255),
            );
            draw_marker(
                scene.apex,
                &scene.window,
                &area,
                Color::from_rgba(245, 89, 89, 255),
            );
        }

        if state.show_inset && state.mode == ViewMode::Spatial {
            let inset = PlotArea {
                left: area.right - INSET_WIDTH - INSET_PADDING,
                right: area.right - INSET_PADDING,
                top: area.top + INSET_PADDING,
                bottom: area.top + INSET_PADDING + INSET_HEIGHT,
            };
            draw_ground_track_inset(&scene.ground_track, &inset, ui_font.as_ref());
        }

        draw_hud(
            &state,
            &scene,
            area.left,
            area.right,
            screen_h,
            ui_font.as_ref(),
        );

        next_frame().await;
    }
}
