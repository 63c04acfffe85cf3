//! Settings page, writing through the settings store.
//!
//! Every control routes through `SettingsStore::update`, which persists and
//! then notifies subscribers; the app loop applies theme and zoom changes
//! when the change event arrives, so this panel never touches `egui` style
//! state directly.

use aisle_business::settings::{DateFormat, Theme};
use egui::{ComboBox, Slider, Ui};

use crate::state::UiState;

const FONT_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.75..=1.5;

pub fn settings_panel(state: &mut UiState, ui: &mut Ui) {
    let current = state.settings.settings().clone();

    ui.heading("Settings");
    ui.add_space(8.0);

    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([24.0, 12.0])
        .show(ui, |ui| {
            ui.label("Theme:");
            let mut theme = current.theme;
            ComboBox::from_id_salt("settings_theme")
                .selected_text(theme.label())
                .show_ui(ui, |ui| {
                    for choice in [Theme::System, Theme::Light, Theme::Dark] {
                        ui.selectable_value(&mut theme, choice, choice.label());
                    }
                });
            if theme != current.theme
                && let Err(err) = state.settings.update(|s| s.theme = theme)
            {
                log::error!("failed to save theme: {err}");
            }
            ui.end_row();

            ui.label("Font scale:");
            let mut font_scale = current.font_scale;
            let slider = ui.add(Slider::new(&mut font_scale, FONT_SCALE_RANGE).step_by(0.05));
            // Write once the user releases the handle, not on every pixel.
            if slider.drag_stopped() || (slider.changed() && !slider.dragged()) {
                if let Err(err) = state.settings.update(|s| s.font_scale = font_scale) {
                    log::error!("failed to save font scale: {err}");
                }
            }
            ui.end_row();

            ui.label("Date format:");
            let mut date_format = current.date_format;
            ComboBox::from_id_salt("settings_date_format")
                .selected_text(date_format.label())
                .show_ui(ui, |ui| {
                    for choice in [
                        DateFormat::MonthDayYear,
                        DateFormat::DayMonthYear,
                        DateFormat::Iso8601,
                    ] {
                        ui.selectable_value(&mut date_format, choice, choice.label());
                    }
                });
            if date_format != current.date_format
                && let Err(err) = state.settings.update(|s| s.date_format = date_format)
            {
                log::error!("failed to save date format: {err}");
            }
            ui.end_row();
        });
}

#[cfg(test)]
mod settings_panel_tests {
    use super::*;
    use aisle_business::BusinessConfig;
    use aisle_business::settings::MemoryBackend;
    use egui_kittest::Harness;
    use kittest::Queryable;

    fn test_state() -> UiState {
        UiState::with_config(
            BusinessConfig::new("http://127.0.0.1:9"),
            Box::new(MemoryBackend::default()),
        )
    }

    #[test]
    fn test_all_controls_render() {
        let mut state = test_state();
        let harness = Harness::new_ui_state(
            |ui, state| {
                settings_panel(state, ui);
            },
            &mut state,
        );

        assert!(harness.query_by_label_contains("Theme:").is_some());
        assert!(harness.query_by_label_contains("Font scale:").is_some());
        assert!(harness.query_by_label_contains("Date format:").is_some());
    }

    #[test]
    fn test_theme_change_notifies_subscribers() {
        let mut state = test_state();
        state
            .settings
            .update(|s| s.theme = Theme::Dark)
            .expect("memory backend cannot fail");

        let event = state.settings_rx.try_recv().expect("change event");
        let aisle_business::settings::SettingsEvent::Changed(settings) = event;
        assert_eq!(settings.theme, Theme::Dark);
    }
}
