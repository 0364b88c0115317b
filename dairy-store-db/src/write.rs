// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Write operations for the record store.

use rusqlite::params;
use tracing::{debug, warn};

use crate::connection::RecordStore;
use crate::error::{Constraint, Error, Result, violated_constraint};

/// Parameters for registering a new animal.
#[derive(Debug, Clone, Default)]
pub struct NewAnimal {
    /// Owning farmer (if known)
    pub farmer_id: Option<i64>,
    /// Unique ear tag; surrounding whitespace is dropped
    pub tag_id: String,
    pub name: Option<String>,
    /// Date of birth (YYYY-MM-DD)
    pub dob: Option<String>,
    pub breed: Option<String>,
    /// Start of the current lactation (YYYY-MM-DD)
    pub lactation_start_date: Option<String>,
}

/// Parameters for recording one day's yield of an animal.
#[derive(Debug, Clone, Default)]
pub struct NewMilkEntry {
    pub animal_id: i64,
    /// Entry date (YYYY-MM-DD), stored verbatim
    pub entry_date: String,
    pub morning_liters: f64,
    pub evening_liters: f64,
    pub notes: Option<String>,
}

impl NewMilkEntry {
    /// Total yield stored alongside the two readings.
    pub fn total_liters(&self) -> f64 {
        self.morning_liters + self.evening_liters
    }
}

impl RecordStore {
    /// Add a farmer.
    ///
    /// Returns the database ID of the new farmer.
    pub fn add_farmer(
        &self,
        name: &str,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> Result<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Farmer name is required".into()));
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO farmers (name, phone, address) VALUES (?1, ?2, ?3)",
            params![name, phone, address],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!("Added farmer {id} ({name})");
        Ok(id)
    }

    /// Add an animal.
    ///
    /// Fails with [`Error::DuplicateTag`] if the tag is taken and with
    /// [`Error::UnknownFarmer`] if `farmer_id` names no farmer.
    pub fn add_animal(&self, animal: &NewAnimal) -> Result<i64> {
        let tag_id = animal.tag_id.trim();
        if tag_id.is_empty() {
            return Err(Error::Validation("Tag ID is required".into()));
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let inserted = tx.execute(
            r#"
            INSERT INTO animals (farmer_id, tag_id, name, dob, breed, lactation_start_date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                animal.farmer_id,
                tag_id,
                animal.name,
                animal.dob,
                animal.breed,
                animal.lactation_start_date,
            ],
        );

        // Dropping `tx` on the error path rolls the insert back.
        if let Err(e) = inserted {
            let err = match violated_constraint(&e) {
                Some(Constraint::Unique) => Error::DuplicateTag(tag_id.to_owned()),
                Some(Constraint::ForeignKey) => {
                    Error::UnknownFarmer(animal.farmer_id.unwrap_or_default())
                }
                None => e.into(),
            };
            warn!("Rejected animal {tag_id}: {err}");
            return Err(err);
        }

        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!("Added animal {id} (tag {tag_id})");
        Ok(id)
    }

    /// Record a milk entry.
    ///
    /// Dates and liter values are stored as given, negative readings
    /// included. Readings must be finite: SQLite stores NaN as NULL, which
    /// would break `total_liters`. A missing animal is rejected by the
    /// foreign key and reported as [`Error::UnknownAnimal`].
    pub fn add_milk_entry(&self, entry: &NewMilkEntry) -> Result<i64> {
        if !entry.morning_liters.is_finite() || !entry.evening_liters.is_finite() {
            return Err(Error::Validation("Milk readings must be finite numbers".into()));
        }

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let inserted = tx.execute(
            r#"
            INSERT INTO milk_entries
                (animal_id, entry_date, morning_liters, evening_liters, total_liters, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                entry.animal_id,
                entry.entry_date,
                entry.morning_liters,
                entry.evening_liters,
                entry.total_liters(),
                entry.notes,
            ],
        );

        if let Err(e) = inserted {
            let err = match violated_constraint(&e) {
                Some(Constraint::ForeignKey) => Error::UnknownAnimal(entry.animal_id),
                _ => e.into(),
            };
            warn!("Rejected milk entry for animal {}: {err}", entry.animal_id);
            return Err(err);
        }

        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(
            "Added milk entry {id} (animal {}, {}, {} L)",
            entry.animal_id,
            entry.entry_date,
            entry.total_liters()
        );
        Ok(id)
    }

    /// Delete a farmer.
    ///
    /// Animals owned by the farmer are kept with their owner cleared.
    pub fn remove_farmer(&self, farmer_id: i64) -> Result<bool> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let rows = tx.execute("DELETE FROM farmers WHERE id = ?1", params![farmer_id])?;
        tx.commit()?;

        debug!("Removed farmer {farmer_id}: {}", rows > 0);
        Ok(rows > 0)
    }

    /// Delete an animal.
    ///
    /// This will cascade-delete its milk entries.
    pub fn remove_animal(&self, animal_id: i64) -> Result<bool> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let rows = tx.execute("DELETE FROM animals WHERE id = ?1", params![animal_id])?;
        tx.commit()?;

        debug!("Removed animal {animal_id}: {}", rows > 0);
        Ok(rows > 0)
    }
}
