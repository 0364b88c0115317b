// SPDX-FileCopyrightText: 2025 Dairy Tracker contributors
// SPDX-License-Identifier: MIT

//! Interactive text menu over the record store.
//!
//! The menu only collects and renders values; every rule about what may be
//! stored lives in [`dairy_store_db`].

use std::fmt::Display;
use std::io::{BufRead, Write};

use dairy_store_db::{NewAnimal, NewMilkEntry, RecordStore};
use log::{debug, warn};

use crate::error::{IoContext, Result};

/// Menu entries in display order.
const ENTRIES: [&str; 8] = [
    "Add Farmer",
    "List Farmers",
    "Add Animal",
    "List Animals",
    "Add Milk Entry",
    "List Milk Entries",
    "Daily Milk Report",
    "Exit",
];

pub struct Menu<R, W> {
    store: RecordStore,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Show the menu until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;
            let Some(choice) = self.read_line("Enter choice (1-8): ")? else {
                debug!("Input closed, leaving menu");
                break;
            };
            match choice.as_str() {
                "1" => self.add_farmer()?,
                "2" => self.list_farmers()?,
                "3" => self.add_animal()?,
                "4" => self.list_animals()?,
                "5" => self.add_milk_entry()?,
                "6" => self.list_milk_entries()?,
                "7" => self.daily_report()?,
                "8" => break,
                _ => self.say("Invalid choice, enter 1-8.")?,
            }
        }
        self.say("Exiting. Bye!")
    }

    fn show_menu(&mut self) -> Result<()> {
        self.say("\n==============================")?;
        self.say("   MILK PRODUCTION TRACKER")?;
        self.say("==============================")?;
        for (i, entry) in ENTRIES.iter().enumerate() {
            self.say(format!("{}. {entry}", i + 1))?;
        }
        Ok(())
    }

    fn add_farmer(&mut self) -> Result<()> {
        self.say("\n--- Add Farmer ---")?;
        let name = self.ask_text("Farmer name: ")?;
        let phone = self.ask_optional("Phone (optional): ")?;
        let address = self.ask_optional("Address (optional): ")?;

        match self
            .store
            .add_farmer(&name, phone.as_deref(), address.as_deref())
        {
            Ok(id) => self.say(format!("Farmer added with ID: {id}")),
            Err(e) => self.failed("add farmer", e),
        }
    }

    fn list_farmers(&mut self) -> Result<()> {
        self.say("\n--- Farmers ---")?;
        let farmers = match self.store.list_farmers() {
            Ok(farmers) => farmers,
            Err(e) => return self.failed("list farmers", e),
        };
        if farmers.is_empty() {
            return self.say("No farmers found.");
        }
        for f in farmers {
            self.say(format!(
                "[{}] {} | Phone: {} | Address: {}",
                f.id,
                f.name,
                or_dash(&f.phone),
                or_dash(&f.address)
            ))?;
        }
        Ok(())
    }

    fn add_animal(&mut self) -> Result<()> {
        self.say("\n--- Add Animal ---")?;
        let Some(farmer_id) = self.ask_int("Farmer ID (owner): ")? else {
            return self.say("Cancelled.");
        };
        let animal = NewAnimal {
            farmer_id: Some(farmer_id),
            tag_id: self.ask_text("Tag ID (unique): ")?,
            name: self.ask_optional("Animal name (optional): ")?,
            dob: self.ask_optional("DOB (YYYY-MM-DD, optional): ")?,
            breed: self.ask_optional("Breed (optional): ")?,
            lactation_start_date: self
                .ask_optional("Lactation start date (YYYY-MM-DD, optional): ")?,
        };

        match self.store.add_animal(&animal) {
            Ok(id) => self.say(format!("Animal added with ID: {id}")),
            Err(e) => self.failed("add animal", e),
        }
    }

    fn list_animals(&mut self) -> Result<()> {
        self.say("\n--- Animals ---")?;
        let farmer_id = self.ask_int("Filter by Farmer ID (or Enter for all): ")?;
        let animals = match self.store.list_animals(farmer_id) {
            Ok(animals) => animals,
            Err(e) => return self.failed("list animals", e),
        };
        if animals.is_empty() {
            return self.say("No animals found.");
        }
        for a in animals {
            let owner = a.farmer_id.map(|id| id.to_string());
            self.say(format!(
                "[{}] Tag: {} | Name: {} | Farmer ID: {} | Breed: {}",
                a.id,
                a.tag_id,
                or_dash(&a.name),
                or_dash(&owner),
                or_dash(&a.breed)
            ))?;
        }
        Ok(())
    }

    fn add_milk_entry(&mut self) -> Result<()> {
        self.say("\n--- Add Milk Entry ---")?;
        let Some(animal_id) = self.ask_int("Animal ID: ")? else {
            return self.say("Cancelled.");
        };
        let entry = NewMilkEntry {
            animal_id,
            entry_date: self.ask_text("Date (YYYY-MM-DD): ")?,
            morning_liters: self.ask_liters("Morning liters (0 if none): ")?,
            evening_liters: self.ask_liters("Evening liters (0 if none): ")?,
            notes: self.ask_optional("Notes (optional): ")?,
        };

        match self.store.add_milk_entry(&entry) {
            Ok(id) => self.say(format!("Milk entry added with ID: {id}")),
            Err(e) => self.failed("add milk entry", e),
        }
    }

    fn list_milk_entries(&mut self) -> Result<()> {
        self.say("\n--- Milk Entries ---")?;
        let entries = match self.store.list_milk_entries() {
            Ok(entries) => entries,
            Err(e) => return self.failed("list milk entries", e),
        };
        if entries.is_empty() {
            return self.say("No milk entries found.");
        }
        for e in entries {
            self.say(format!(
                "[{}] Animal {} | Date: {} | Morning: {} L | Evening: {} L | Total: {} L | Notes: {}",
                e.id,
                e.animal_id,
                e.entry_date,
                e.morning_liters,
                e.evening_liters,
                e.total_liters,
                or_dash(&e.notes)
            ))?;
        }
        Ok(())
    }

    fn daily_report(&mut self) -> Result<()> {
        self.say("\n--- Daily Milk Report ---")?;
        let date = self.ask_text("Date (YYYY-MM-DD): ")?;
        match self.store.daily_report(&date) {
            Ok(report) => {
                self.say(format!(
                    "Total milk on {}: {} liters",
                    report.date, report.total_liters
                ))?;
                self.say(format!(
                    "Average milk per animal (all dates): {:.2} liters",
                    report.average_per_animal
                ))
            }
            Err(e) => self.failed("build report", e),
        }
    }

    fn failed(&mut self, action: &str, err: dairy_store_db::Error) -> Result<()> {
        warn!("Failed to {action}: {err}");
        self.say(format!("Failed to {action}: {err}"))
    }

    fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").io_context(|| "Failed to write to terminal".into())
    }

    /// Prompt and read one trimmed line. `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").io_context(|| "Failed to write to terminal".into())?;
        self.output
            .flush()
            .io_context(|| "Failed to flush terminal".into())?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .io_context(|| "Failed to read from terminal".into())?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn ask_text(&mut self, prompt: &str) -> Result<String> {
        Ok(self.read_line(prompt)?.unwrap_or_default())
    }

    fn ask_optional(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.read_line(prompt)?.filter(|s| !s.is_empty()))
    }

    /// Empty input cancels; malformed input is asked again.
    fn ask_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        loop {
            let Some(value) = self.read_line(prompt)? else {
                return Ok(None);
            };
            if value.is_empty() {
                return Ok(None);
            }
            match value.parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.say("Please enter a number (or press Enter to cancel).")?,
            }
        }
    }

    /// Empty input means 0; malformed input is asked again.
    fn ask_liters(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let Some(value) = self.read_line(prompt)? else {
                return Ok(0.0);
            };
            if value.is_empty() {
                return Ok(0.0);
            }
            match value.parse::<f64>() {
                Ok(n) if n.is_finite() => return Ok(n),
                _ => self.say("Please enter a number (e.g. 4 or 3.5).")?,
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
