//! Application runtime
//!
//! `App` owns the model together with everything that does I/O: the local
//! storage handle and the workout loader. Handlers and the UI work through it.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::time::Instant;
use tokio::sync::mpsc;

use crate::api::WorkoutClient;
use crate::config::Config;
use crate::logic;
use crate::model::water::WaterEntry;
use crate::model::{LoadState, Model, WaterModel, WorkoutSource};
use crate::services::{WorkoutLoader, WorkoutOutcome, WorkoutResponse};
use crate::storage::LocalStorage;
use crate::Page;

/// Storage key holding the JSON array of water entries
pub const WATER_STORAGE_KEY: &str = "waterIntake";

pub const REMINDER_MESSAGE: &str = "Time to drink water and stay hydrated!";

pub struct App {
    pub model: Model,

    config: Config,
    storage: LocalStorage,
    loader: WorkoutLoader,
    workout_rx: mpsc::UnboundedReceiver<WorkoutResponse>,

    last_reminder: Instant,
}

impl App {
    pub fn new(config: Config, storage: LocalStorage, offline: bool) -> Result<Self> {
        let client = WorkoutClient::new(
            config.workout_api_url.clone(),
            config.workout_limit,
            config.workout_language,
        );
        let (loader, workout_rx) = WorkoutLoader::new(client, config.api_timeout(), offline);

        let mut model = Model::new(config.profile.clone(), config.water_goal);
        model.water.entries = load_water_entries(&storage)?;
        tracing::debug!(entries = model.water.entries.len(), "loaded water log");

        Ok(Self {
            model,
            config,
            storage,
            loader,
            workout_rx,
            last_reminder: Instant::now(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch pages; entering Workouts starts a fetch, leaving it cancels one
    pub fn navigate(&mut self, page: Page) {
        let previous = self.model.ui.page;
        if previous == page {
            return;
        }

        if previous == Page::Workouts {
            self.loader.unmount();
            self.model.workouts.search_mode = false;
            if self.model.workouts.is_loading() {
                self.model.workouts.load_state = LoadState::Idle;
            }
        }

        self.model.ui.page = page;
        tracing::debug!(from = previous.as_str(), to = page.as_str(), "navigate");

        match page {
            Page::Workouts => self.mount_workouts(),
            Page::Water => self.last_reminder = Instant::now(),
            Page::Dashboard | Page::Profile => {}
        }
    }

    /// Throw away the current list and fetch again
    pub fn reload_workouts(&mut self) {
        if self.model.ui.page == Page::Workouts {
            self.mount_workouts();
        }
    }

    /// Each mount starts from an empty search
    fn mount_workouts(&mut self) {
        self.model.workouts.clear_search();
        self.model.workouts.begin_loading();
        self.loader.mount();
    }

    /// Apply any finished workout loads (non-blocking)
    pub fn process_workout_responses(&mut self) {
        while let Ok(response) = self.workout_rx.try_recv() {
            if !self.loader.accept(&response) {
                continue;
            }
            match response.outcome {
                WorkoutOutcome::Live(workouts) => {
                    self.model
                        .workouts
                        .finish_loading(workouts, WorkoutSource::Live);
                }
                WorkoutOutcome::Fallback { reason, workouts } => {
                    tracing::info!(%reason, "using fallback workout data");
                    self.model
                        .workouts
                        .finish_loading(workouts, WorkoutSource::Fallback);
                }
            }
        }

        if self.model.workouts.is_loading() && self.loader.died_silently() {
            tracing::error!("workout loader stopped without a response");
            self.model
                .workouts
                .fail("workout loader stopped unexpectedly".to_string());
        }
    }

    /// Today's date key
    pub fn today(&self) -> String {
        logic::water::date_key(Local::now().naive_local())
    }

    pub fn add_glass(&mut self) -> Result<()> {
        self.add_glass_at(Local::now().naive_local())
    }

    /// Log a glass at `now` and mirror the whole log to storage
    pub fn add_glass_at(&mut self, now: NaiveDateTime) -> Result<()> {
        let entry = self.model.water.add_glass(now);
        tracing::debug!(date = %entry.date, time = %entry.time, "added glass");
        self.save_water_log()
    }

    fn save_water_log(&self) -> Result<()> {
        let json = self.model.water.entries_to_json()?;
        self.storage
            .set_item(WATER_STORAGE_KEY, &json)
            .context("Failed to save water log")
    }

    /// Fire the hydration reminder when its interval has passed
    ///
    /// The timer runs only while the Water page is shown and restarts each
    /// time the page is entered. The reminder only surfaces in debug mode;
    /// otherwise the timer just rearms.
    pub fn tick_reminder(&mut self) {
        if self.model.ui.page != Page::Water {
            return;
        }
        if self.last_reminder.elapsed() < self.config.reminder_interval() {
            return;
        }
        self.last_reminder = Instant::now();

        if self.config.debug_mode {
            tracing::info!("{}", REMINDER_MESSAGE);
            self.model.show_toast(format!("💧 {}", REMINDER_MESSAGE));
        }
    }

    /// Cancel any in-flight fetch before exit
    pub fn shutdown(&mut self) {
        self.loader.unmount();
    }
}

/// Read the water log out of storage
///
/// A missing key is an empty log. A value that no longer parses is logged and
/// treated as empty rather than keeping the app from starting.
pub fn load_water_entries(storage: &LocalStorage) -> Result<Vec<WaterEntry>> {
    let Some(json) = storage.get_item(WATER_STORAGE_KEY)? else {
        return Ok(Vec::new());
    };

    match WaterModel::entries_from_json(&json) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable water log");
            Ok(Vec::new())
        }
    }
}
