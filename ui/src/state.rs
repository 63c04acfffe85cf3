use aisle_business::settings::{MemoryBackend, SettingsBackend, SettingsEvent, SettingsStore};
use aisle_business::{
    ApiHealthCompute, BusinessConfig, CheckHealthCommand, EventListCompute, ExpenseListCompute,
    GuestActionCommand, GuestActionCompute, GuestActionInput, GuestListCompute, GuestsPanelState,
    RefreshEventsCommand, RefreshExpensesCommand, RefreshGuestsCommand,
};
use aisle_states::{StateCtx, Time};

/// Everything the app owns: the state context the widgets read through, plus
/// the settings store with its change channel.
pub struct UiState {
    pub ctx: StateCtx,
    pub settings: SettingsStore,
    pub settings_rx: flume::Receiver<SettingsEvent>,
}

impl UiState {
    pub fn new() -> Self {
        Self::with_config(BusinessConfig::default(), default_backend())
    }

    /// Used by tests to point at a mock server and avoid the filesystem.
    pub fn with_config(config: BusinessConfig, backend: Box<dyn SettingsBackend>) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(GuestsPanelState::default());
        ctx.add_state(GuestActionInput::default());

        ctx.record_compute(GuestListCompute::default());
        ctx.record_compute(GuestActionCompute::default());
        ctx.record_compute(ExpenseListCompute::default());
        ctx.record_compute(EventListCompute::default());
        ctx.record_compute(ApiHealthCompute::default());

        ctx.record_command(RefreshGuestsCommand);
        ctx.record_command(GuestActionCommand);
        ctx.record_command(RefreshExpensesCommand);
        ctx.record_command(RefreshEventsCommand);
        ctx.record_command(CheckHealthCommand);

        let mut settings = SettingsStore::open(backend);
        let settings_rx = settings.subscribe();

        Self {
            ctx,
            settings,
            settings_rx,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_backend() -> Box<dyn SettingsBackend> {
    use aisle_business::settings::FileBackend;

    match eframe::storage_dir("Aisle") {
        Some(dir) => Box::new(FileBackend::new(dir.join("settings.json"))),
        None => {
            log::warn!("no storage directory available; settings will not persist");
            Box::new(MemoryBackend::default())
        }
    }
}

// Browsers get no filesystem; preferences last for the session only.
#[cfg(target_arch = "wasm32")]
fn default_backend() -> Box<dyn SettingsBackend> {
    Box::new(MemoryBackend::default())
}
