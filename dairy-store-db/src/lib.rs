// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! SQLite record store for small dairy operations.
//!
//! This crate owns the on-disk database that tracks farmers, the animals they
//! own and the daily milk yield recorded for each animal, and exposes typed
//! create/read/aggregate operations over it.
//!
//! **Architecture**: every operation opens its own connection, runs a single
//! statement (writes inside a transaction) and closes the connection again.
//! [`RecordStore`] only remembers where the database file lives.
//!
//! # Key Features
//!
//! - Idempotent schema creation with foreign keys enforced
//!   (animal owner is set to null on farmer removal, milk entries cascade
//!   with their animal)
//! - Typed row structs instead of dynamically keyed rows
//! - Reports: total by date, total by animal, average per animal
//!
//! # Example
//!
//! ```ignore
//! use dairy_store_db::{NewAnimal, NewMilkEntry, RecordStore};
//!
//! let store = RecordStore::open("data/milk.db")?;
//! let farmer = store.add_farmer("Asha", None, None)?;
//! let cow = store.add_animal(&NewAnimal {
//!     farmer_id: Some(farmer),
//!     tag_id: "TAG-001".into(),
//!     ..Default::default()
//! })?;
//! store.add_milk_entry(&NewMilkEntry {
//!     animal_id: cow,
//!     entry_date: "2024-05-01".into(),
//!     morning_liters: 3.5,
//!     evening_liters: 4.0,
//!     ..Default::default()
//! })?;
//! assert_eq!(store.total_milk_by_date("2024-05-01")?, 7.5);
//! ```

mod connection;
mod error;
mod query;
mod report;
mod schema;
mod types;
mod write;

pub use connection::{DEFAULT_DB_PATH, RecordStore};
pub use error::{Error, Result};
pub use report::DailyReport;
pub use types::*;
pub use write::*;
