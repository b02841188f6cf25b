use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{
    ANGLE_RANGE, AZIMUTH_RANGE, ELEVATION_RANGE, GRAVITY_RANGE, SAMPLES_RANGE, SPEED_RANGE,
    SPIN_RANGE,
};
use crate::model::ViewMode;
use crate::state::ViewerState;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) toggle_mode: bool,
    pub(crate) toggle_guides: bool,
    pub(crate) reset: bool,
    pub(crate) export: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            toggle_mode: self.toggle_mode || other.toggle_mode,
            toggle_guides: self.toggle_guides || other.toggle_guides,
            reset: self.reset || other.reset,
            export: self.export || other.export,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        toggle_mode: is_key_pressed(KeyCode::M),
        toggle_guides: is_key_pressed(KeyCode::G),
        reset: is_key_pressed(KeyCode::R),
        export: is_key_pressed(KeyCode::E),
    }
}

pub(crate) fn draw_control_panel(state: &mut ViewerState) -> FrameActions {
    let mode = state.mode;
    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), vec2(18.0, 110.0), vec2(360.0, 330.0))
        .label(&format!("{} Launch", mode.label()))
        .ui(&mut *root_ui(), |ui| {
            let config = &mut state.config;
            ui.slider(
                hash!(),
                "Speed (m/s)",
                SPEED_RANGE.0..SPEED_RANGE.1,
                &mut config.speed_mps,
            );
            match mode {
                ViewMode::Planar => {
                    ui.slider(
                        hash!(),
                        "Angle (deg)",
                        ANGLE_RANGE.0..ANGLE_RANGE.1,
                        &mut config.angle_deg,
                    );
                }
                ViewMode::Spatial => {
                    ui.slider(
                        hash!(),
                        "Elevation (deg)",
                        ELEVATION_RANGE.0..ELEVATION_RANGE.1,
                        &mut config.elevation_deg,
                    );
                    ui.slider(
                        hash!(),
                        "Azimuth (deg)",
                        AZIMUTH_RANGE.0..AZIMUTH_RANGE.1,
                        &mut config.azimuth_deg,
                    );
                    ui.slider(hash!(), "Spin", SPIN_RANGE.0..SPIN_RANGE.1, &mut config.spin);
                }
            }
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                GRAVITY_RANGE.0..GRAVITY_RANGE.1,
                &mut config.gravity_mps2,
            );
            ui.slider(
                hash!(),
                "Samples",
                SAMPLES_RANGE.0..SAMPLES_RANGE.1,
                &mut config.samples,
            );
            ui.separator();
            if ui.button(None, "Switch 2D/3D (M)") {
                actions.toggle_mode = true;
            }
            if ui.button(None, "Toggle Guides (G)") {
                actions.toggle_guides = true;
            }
            if ui.button(None, "Toggle Top View") {
                state.show_inset = !state.show_inset;
            }
            if ui.button(None, "Export SVG (E)") {
                actions.export = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
        });

    actions
}
