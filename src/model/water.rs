//! Water Model
//!
//! The water log: every glass ever logged, kept as an unordered append-only
//! list. Days are told apart only by the entry's date key.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::logic::water;

/// One logged drink, as stored
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterEntry {
    pub date: String,
    pub time: String,
    pub amount: u32,
}

#[derive(Clone, Debug)]
pub struct WaterModel {
    pub entries: Vec<WaterEntry>,

    /// Glasses per day to aim for (display only)
    pub goal: u32,
}

impl WaterModel {
    pub fn new(goal: u32) -> Self {
        Self {
            entries: Vec::new(),
            goal,
        }
    }

    /// Parse the stored JSON array
    pub fn entries_from_json(json: &str) -> Result<Vec<WaterEntry>> {
        serde_json::from_str(json).context("Failed to parse water log")
    }

    pub fn entries_to_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).context("Failed to serialize water log")
    }

    /// Log one glass at `now` and return the new entry
    pub fn add_glass(&mut self, now: NaiveDateTime) -> &WaterEntry {
        self.entries.push(WaterEntry {
            date: water::date_key(now),
            time: water::time_label(now),
            amount: 1,
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries_on(&self, date: &str) -> Vec<&WaterEntry> {
        water::entries_for(&self.entries, date)
    }

    pub fn total_on(&self, date: &str) -> u32 {
        water::total_for(&self.entries, date)
    }
}
