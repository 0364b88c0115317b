// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Aggregate yield reports.
//!
//! All sums read the stored `total_liters` column; nothing is recomputed
//! from the morning and evening readings.

use rusqlite::params;

use crate::connection::RecordStore;
use crate::error::Result;

/// Figures shown for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyReport {
    pub date: String,
    /// Sum over all animals for `date`
    pub total_liters: f64,
    /// Average per-animal total over all dates
    pub average_per_animal: f64,
}

impl RecordStore {
    /// Total milk produced on a given date.
    ///
    /// The date is matched verbatim. Returns 0 when nothing was recorded.
    pub fn total_milk_by_date(&self, entry_date: &str) -> Result<f64> {
        let conn = self.connect()?;
        let total: Option<f64> = conn.query_row(
            "SELECT SUM(total_liters) FROM milk_entries WHERE entry_date = ?1",
            params![entry_date],
            |row| row.get(0),
        )?;
        Ok(total.unwrap_or(0.0))
    }

    /// Total milk produced by one animal over all dates.
    pub fn total_milk_by_animal(&self, animal_id: i64) -> Result<f64> {
        let conn = self.connect()?;
        let total: Option<f64> = conn.query_row(
            "SELECT SUM(total_liters) FROM milk_entries WHERE animal_id = ?1",
            params![animal_id],
            |row| row.get(0),
        )?;
        Ok(total.unwrap_or(0.0))
    }

    /// Average of the per-animal totals.
    ///
    /// Each animal with at least one entry contributes its summed yield once,
    /// so an animal with many entries does not weigh more than one with few.
    /// Returns 0 when there are no entries.
    pub fn average_milk_per_animal(&self) -> Result<f64> {
        let conn = self.connect()?;
        let average: Option<f64> = conn.query_row(
            r#"
            SELECT AVG(total) FROM (
                SELECT SUM(total_liters) AS total
                FROM milk_entries
                GROUP BY animal_id
            )
            "#,
            [],
            |row| row.get(0),
        )?;
        Ok(average.unwrap_or(0.0))
    }

    /// Day total plus the overall per-animal average.
    pub fn daily_report(&self, entry_date: &str) -> Result<DailyReport> {
        Ok(DailyReport {
            date: entry_date.to_owned(),
            total_liters: self.total_milk_by_date(entry_date)?,
            average_per_animal: self.average_milk_per_animal()?,
        })
    }
}
