use aisle_business::CheckHealthCommand;
use aisle_business::settings::{AppSettings, SettingsEvent, Theme};
use aisle_states::Time;

use crate::state::UiState;
use crate::widgets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Page {
    #[default]
    Guests,
    Expenses,
    Events,
    Settings,
}

pub struct AisleApp {
    state: UiState,
    page: Page,
    guests: widgets::GuestsPanel,
    expenses: widgets::ExpensesPanel,
    events: widgets::EventsPanel,
}

impl AisleApp {
    /// Called once before the first frame.
    pub fn new(egui_ctx: &egui::Context, state: UiState) -> Self {
        apply_settings(egui_ctx, state.settings.settings());
        Self {
            state,
            page: Page::default(),
            guests: widgets::GuestsPanel::default(),
            expenses: widgets::ExpensesPanel::default(),
            events: widgets::EventsPanel::default(),
        }
    }

    fn drain_settings_events(&mut self, egui_ctx: &egui::Context) {
        while let Ok(SettingsEvent::Changed(settings)) = self.state.settings_rx.try_recv() {
            apply_settings(egui_ctx, &settings);
        }
    }
}

impl eframe::App for AisleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.ctx.update::<Time>(Time::tick);

        // Apply command results before any widget reads state.
        self.state.ctx.sync_computes();
        self.drain_settings_events(ctx);

        // Rate-limited inside the command; dispatching every frame is fine.
        self.state.ctx.dispatch::<CheckHealthCommand>();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.selectable_value(&mut self.page, Page::Guests, "Guests");
                ui.selectable_value(&mut self.page, Page::Expenses, "Budget");
                ui.selectable_value(&mut self.page, Page::Events, "Schedule");
                ui.selectable_value(&mut self.page, Page::Settings, "Settings");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::env_version(ui);
                    widgets::api_status(&self.state.ctx, ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Guests => self.guests.ui(&mut self.state, ui),
            Page::Expenses => self.expenses.ui(&mut self.state, ui),
            Page::Events => self.events.ui(&mut self.state, ui),
            Page::Settings => widgets::settings_panel(&mut self.state, ui),
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.ctx.shutdown();
    }
}

fn apply_settings(egui_ctx: &egui::Context, settings: &AppSettings) {
    egui_ctx.set_theme(match settings.theme {
        Theme::System => egui::ThemePreference::System,
        Theme::Light => egui::ThemePreference::Light,
        Theme::Dark => egui::ThemePreference::Dark,
    });
    egui_ctx.set_zoom_factor(settings.font_scale);
}
