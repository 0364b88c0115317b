// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Database row types for farmers, animals and milk entries.

use rusqlite::Row;

/// A farmer owning zero or more animals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Farmer {
    /// Database row ID
    pub id: i64,
    /// Trimmed, never empty
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Farmer {
    pub(crate) const COLUMNS: &'static str = "id, name, phone, address";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            address: row.get(3)?,
        })
    }
}

/// A tracked dairy animal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    /// Database row ID
    pub id: i64,
    /// Owning farmer, cleared when the farmer is removed
    pub farmer_id: Option<i64>,
    /// Unique ear tag (stored trimmed)
    pub tag_id: String,
    pub name: Option<String>,
    /// Date of birth (ISO 8601 text, not validated)
    pub dob: Option<String>,
    pub breed: Option<String>,
    /// Start of the current lactation (ISO 8601 text, not validated)
    pub lactation_start_date: Option<String>,
}

impl Animal {
    pub(crate) const COLUMNS: &'static str =
        "id, farmer_id, tag_id, name, dob, breed, lactation_start_date";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            farmer_id: row.get(1)?,
            tag_id: row.get(2)?,
            name: row.get(3)?,
            dob: row.get(4)?,
            breed: row.get(5)?,
            lactation_start_date: row.get(6)?,
        })
    }
}

/// One dated yield record for one animal.
///
/// `total_liters` is stored at insertion time and is not recomputed on read.
#[derive(Debug, Clone, PartialEq)]
pub struct MilkEntry {
    /// Database row ID
    pub id: i64,
    pub animal_id: i64,
    /// ISO 8601 date text, compared verbatim by reports
    pub entry_date: String,
    pub morning_liters: f64,
    pub evening_liters: f64,
    pub total_liters: f64,
    pub notes: Option<String>,
    /// UTC timestamp assigned by SQLite (`YYYY-MM-DD HH:MM:SS`)
    pub created_at: String,
}

impl MilkEntry {
    pub(crate) const COLUMNS: &'static str = "id, animal_id, entry_date, morning_liters, \
         evening_liters, total_liters, notes, created_at";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            animal_id: row.get(1)?,
            entry_date: row.get(2)?,
            morning_liters: row.get::<_, Option<f64>>(3)?.unwrap_or(0.0),
            evening_liters: row.get::<_, Option<f64>>(4)?.unwrap_or(0.0),
            total_liters: row.get::<_, Option<f64>>(5)?.unwrap_or(0.0),
            notes: row.get(6)?,
            created_at: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        })
    }
}
