//! Backend availability dot for the top bar.

use aisle_business::{ApiAvailability, ApiHealthCompute, version_info};
use aisle_states::StateCtx;
use egui::{Color32, Response, Ui};

const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);
const COLOR_AMBER: Color32 = Color32::from_rgb(255, 165, 0);
const COLOR_RED: Color32 = Color32::from_rgb(200, 40, 40);

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

fn ui_version() -> &'static str {
    use std::sync::OnceLock;
    static UI_VERSION: OnceLock<String> = OnceLock::new();
    UI_VERSION.get_or_init(version_info::format_env_version)
}

fn status_info(state_ctx: &StateCtx) -> (String, Color32) {
    let ui_ver = ui_version();
    match state_ctx
        .cached::<ApiHealthCompute>()
        .map(ApiHealthCompute::availability)
    {
        Some(ApiAvailability::Available(at)) => (
            format!("UI: {ui_ver}\nService: healthy, checked {}", at.format("%H:%M")),
            COLOR_GREEN,
        ),
        Some(ApiAvailability::Unavailable(_, err)) => {
            (format!("UI: {ui_ver}\nService: {err}"), COLOR_RED)
        }
        _ => (format!("UI: {ui_ver}\nService: checking"), COLOR_AMBER),
    }
}

/// A colored dot with the check detail in its hover text.
pub fn api_status(state_ctx: &StateCtx, ui: &mut Ui) -> Response {
    let (tooltip, color) = status_info(state_ctx);

    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::hover(),
    );
    ui.painter()
        .circle(rect.center(), STATUS_DOT_RADIUS, color, egui::Stroke::NONE);

    response.on_hover_text(tooltip)
}
