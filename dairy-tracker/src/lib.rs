// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

pub mod config;
pub mod error;
pub mod menu;
