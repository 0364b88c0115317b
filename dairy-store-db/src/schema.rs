// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Database schema definitions for the record store.

/// Tables created on first use. Safe to run repeatedly.
pub const SCHEMA_SQL: &str = r#"
create table if not exists farmers (
    id      integer primary key autoincrement,
    name    text not null,
    phone   text,
    address text
);

create table if not exists animals (
    id                   integer primary key autoincrement,
    farmer_id            integer,
    tag_id               text unique,
    name                 text,
    dob                  text,
    breed                text,
    lactation_start_date text,
    foreign key (farmer_id) references farmers(id) on delete set null
);

create table if not exists milk_entries (
    id             integer primary key autoincrement,
    animal_id      integer not null,
    entry_date     text not null,
    morning_liters real default 0,
    evening_liters real default 0,
    total_liters   real default 0,
    notes          text,
    created_at     text default (datetime('now')),
    foreign key (animal_id) references animals(id) on delete cascade
);
"#;

/// Tables that must exist for the store to be usable.
pub const TABLES: [&str; 3] = ["farmers", "animals", "milk_entries"];
