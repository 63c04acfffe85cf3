//! Application settings service.
//!
//! Display preferences (theme, font scale, date format) live in an explicit
//! store with an injected persistence backend instead of ambient global
//! state. Interested parties subscribe and receive typed
//! [`SettingsEvent`]s when something changes; there is no environment-wide
//! untyped event bus.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    #[default]
    MonthDayYear,
    DayMonthYear,
    Iso8601,
}

impl DateFormat {
    pub fn label(self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Iso8601 => "YYYY-MM-DD",
        }
    }

    pub fn format(self, date: NaiveDate) -> String {
        let pattern = match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::Iso8601 => "%Y-%m-%d",
        };
        date.format(pattern).to_string()
    }
}

/// Everything the settings panel edits, serialized as one JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: Theme,
    pub font_scale: f32,
    pub date_format: DateFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_scale: 1.0,
            date_format: DateFormat::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Raw persistence for one [`AppSettings`] document.
///
/// The store is the only caller; injecting the backend keeps the UI testable
/// without a filesystem.
pub trait SettingsBackend: Send {
    fn load(&self) -> Result<Option<AppSettings>, SettingsError>;
    fn store(&mut self, settings: &AppSettings) -> Result<(), SettingsError>;
}

/// JSON file on disk.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsBackend for FileBackend {
    fn load(&self) -> Result<Option<AppSettings>, SettingsError> {
        let raw = match std::fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    fn store(&mut self, settings: &AppSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(settings)?)?;
        Ok(())
    }
}

/// In-memory backend for tests and for wasm32, where there is no filesystem.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored: Option<AppSettings>,
}

impl SettingsBackend for MemoryBackend {
    fn load(&self) -> Result<Option<AppSettings>, SettingsError> {
        Ok(self.stored.clone())
    }

    fn store(&mut self, settings: &AppSettings) -> Result<(), SettingsError> {
        self.stored = Some(settings.clone());
        Ok(())
    }
}

/// Typed change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Changed(AppSettings),
}

/// Owner of the current settings value.
///
/// Mutations go through [`update`](Self::update), which persists first and
/// notifies subscribers after. Subscribers whose receiver is gone are pruned
/// on the next notify.
pub struct SettingsStore {
    backend: Box<dyn SettingsBackend>,
    current: AppSettings,
    subscribers: Vec<flume::Sender<SettingsEvent>>,
}

impl SettingsStore {
    /// Load from the backend, falling back to defaults when nothing is
    /// persisted yet or the stored document is unreadable.
    pub fn open(backend: Box<dyn SettingsBackend>) -> Self {
        let current = match backend.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => AppSettings::default(),
            Err(err) => {
                log::warn!("settings: failed to load persisted settings: {err}");
                AppSettings::default()
            }
        };
        Self {
            backend,
            current,
            subscribers: Vec::new(),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.current
    }

    pub fn subscribe(&mut self) -> flume::Receiver<SettingsEvent> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.push(tx);
        rx
    }

    pub fn update(
        &mut self,
        mutate: impl FnOnce(&mut AppSettings),
    ) -> Result<(), SettingsError> {
        let mut next = self.current.clone();
        mutate(&mut next);
        if next == self.current {
            return Ok(());
        }

        self.backend.store(&next)?;
        self.current = next;
        self.notify();
        Ok(())
    }

    fn notify(&mut self) {
        let event = SettingsEvent::Changed(self.current.clone());
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}
