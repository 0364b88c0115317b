// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Read query operations for the record store.

use rusqlite::{OptionalExtension, params};

use crate::connection::RecordStore;
use crate::error::Result;
use crate::types::{Animal, Farmer, MilkEntry};

impl RecordStore {
    /// Get all farmers, ordered by ID.
    pub fn list_farmers(&self) -> Result<Vec<Farmer>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM farmers ORDER BY id",
            Farmer::COLUMNS
        ))?;

        let mut farmers = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            farmers.push(Farmer::from_row(row)?);
        }
        Ok(farmers)
    }

    /// Query a farmer by database ID.
    ///
    /// Returns `None` if no farmer has this ID.
    pub fn get_farmer(&self, farmer_id: i64) -> Result<Option<Farmer>> {
        let conn = self.connect()?;
        let farmer = conn
            .query_row(
                &format!("SELECT {} FROM farmers WHERE id = ?1", Farmer::COLUMNS),
                params![farmer_id],
                Farmer::from_row,
            )
            .optional()?;
        Ok(farmer)
    }

    /// Get animals ordered by ID, optionally only those owned by one farmer.
    pub fn list_animals(&self, farmer_id: Option<i64>) -> Result<Vec<Animal>> {
        let conn = self.connect()?;
        let mut animals = Vec::new();

        match farmer_id {
            Some(farmer_id) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM animals WHERE farmer_id = ?1 ORDER BY id",
                    Animal::COLUMNS
                ))?;
                let mut rows = stmt.query(params![farmer_id])?;
                while let Some(row) = rows.next()? {
                    animals.push(Animal::from_row(row)?);
                }
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM animals ORDER BY id",
                    Animal::COLUMNS
                ))?;
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    animals.push(Animal::from_row(row)?);
                }
            }
        }
        Ok(animals)
    }

    /// Query an animal by database ID.
    pub fn get_animal(&self, animal_id: i64) -> Result<Option<Animal>> {
        let conn = self.connect()?;
        let animal = conn
            .query_row(
                &format!("SELECT {} FROM animals WHERE id = ?1", Animal::COLUMNS),
                params![animal_id],
                Animal::from_row,
            )
            .optional()?;
        Ok(animal)
    }

    /// Query an animal by its tag.
    ///
    /// Returns `None` if no animal carries this tag.
    pub fn get_animal_by_tag(&self, tag_id: &str) -> Result<Option<Animal>> {
        let conn = self.connect()?;
        let animal = conn
            .query_row(
                &format!("SELECT {} FROM animals WHERE tag_id = ?1", Animal::COLUMNS),
                params![tag_id],
                Animal::from_row,
            )
            .optional()?;
        Ok(animal)
    }

    /// Get all milk entries, most recent date first.
    ///
    /// Entries sharing a date keep insertion order.
    pub fn list_milk_entries(&self) -> Result<Vec<MilkEntry>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM milk_entries ORDER BY entry_date DESC, id ASC",
            MilkEntry::COLUMNS
        ))?;

        let mut entries = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            entries.push(MilkEntry::from_row(row)?);
        }
        Ok(entries)
    }

    /// Get the milk entries of one animal, most recent date first.
    pub fn list_milk_entries_for_animal(&self, animal_id: i64) -> Result<Vec<MilkEntry>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM milk_entries WHERE animal_id = ?1 ORDER BY entry_date DESC, id ASC",
            MilkEntry::COLUMNS
        ))?;

        let mut entries = Vec::new();
        let mut rows = stmt.query(params![animal_id])?;
        while let Some(row) = rows.next()? {
            entries.push(MilkEntry::from_row(row)?);
        }
        Ok(entries)
    }

    /// Count the number of farmers.
    pub fn count_farmers(&self) -> Result<u64> {
        self.count("farmers")
    }

    /// Count the number of animals.
    pub fn count_animals(&self) -> Result<u64> {
        self.count("animals")
    }

    /// Count the number of milk entries.
    pub fn count_milk_entries(&self) -> Result<u64> {
        self.count("milk_entries")
    }

    // `table` is always one of the fixed names above.
    fn count(&self, table: &str) -> Result<u64> {
        let conn = self.connect()?;
        let count: i64 =
            conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
        Ok(count as u64)
    }
}
