use aisle_business::version_info;
use egui::{Color32, Response, Ui};

/// Displays the current environment and version info in the top bar.
///
/// Display format varies by environment:
/// - Prod (stable): `stable:{version}`
/// - Staging: `staging:{commit}`
/// - Test: `main:{commit}`
pub fn env_version(ui: &mut Ui) -> Response {
    let display_text = version_info::format_env_version();
    let (env_name, _) = version_info::env_version_info();

    let color = match env_name {
        "stable" => Color32::GREEN,
        "staging" => Color32::from_rgb(255, 165, 0),
        "main" => Color32::from_rgb(200, 200, 200),
        _ => Color32::WHITE,
    };

    ui.colored_label(color, display_text)
}

#[cfg(test)]
mod env_version_widget_test {
    use egui_kittest::Harness;
    use kittest::Queryable;

    #[test]
    fn test_env_version_widget() {
        let harness = Harness::new_ui(|ui| {
            super::env_version(ui);
        });

        // The widget should display something in 'env:info' format.
        assert!(harness.query_by_label_contains(":").is_some());
    }
}
