//! The state of a single user working on their allocations.

use std::collections::HashMap;

use log::{info, warn};
use rust_decimal::Decimal;

use crate::allocation::{
    EditBatch, EditError, MonthKey, Pensum, SelectionError, WeeklyAllocation, WorkMonth,
};
use crate::balance::compute_balance;
use crate::report::{self, Document, ExportError, ExportOptions, ReportRequest};

/// The values of the form that are not part of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    teacher_name: String,
    pensum: Pensum,
    weekly: WeeklyAllocation,
}

impl Settings {
    #[must_use]
    pub fn new(teacher_name: impl Into<String>, pensum: Pensum, weekly: WeeklyAllocation) -> Self {
        Self {
            teacher_name: teacher_name.into(),
            pensum,
            weekly,
        }
    }

    #[must_use]
    pub fn teacher_name(&self) -> &str {
        &self.teacher_name
    }

    #[must_use]
    pub const fn pensum(&self) -> Pensum {
        self.pensum
    }

    #[must_use]
    pub const fn weekly(&self) -> &WeeklyAllocation {
        &self.weekly
    }

    pub fn set_teacher_name(&mut self, teacher_name: impl Into<String>) {
        self.teacher_name = teacher_name.into();
    }

    pub fn set_pensum(&mut self, pensum: Pensum) {
        self.pensum = pensum;
    }

    pub fn weekly_mut(&mut self) -> &mut WeeklyAllocation {
        &mut self.weekly
    }
}

/// Owns every table of the session. Each action borrows the session mutably and either
/// completes or leaves the state untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    settings: Settings,
    tables: HashMap<MonthKey, WorkMonth>,
    generation: u64,
    balance: Decimal,
    document: Option<Document>,
}

impl Session {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Generates a fresh table for the month with the current pensum.
    ///
    /// An existing table of the same month is replaced, all of its edits are lost.
    pub fn generate(&mut self, year: usize, month: usize) -> Result<&WorkMonth, SelectionError> {
        let key = MonthKey::new(year, month)?;

        self.generation += 1;
        let work_month =
            WorkMonth::generate(key, self.settings.pensum().hours()).with_generation(self.generation);

        if self.tables.insert(key, work_month).is_some() {
            warn!("replaced the allocation of {}, previous edits were discarded", key);
        }

        Ok(&self.tables[&key])
    }

    #[must_use]
    pub fn table(&self, key: MonthKey) -> Option<&WorkMonth> {
        self.tables.get(&key)
    }

    /// Applies the `batch` to the table of `key` and returns the new balance.
    ///
    /// On error, the stored table and balance are not changed.
    pub fn apply_edits(&mut self, key: MonthKey, batch: &EditBatch) -> Result<Decimal, EditError> {
        let current = self.tables.get(&key).ok_or(EditError::NoTable {
            year: key.year().as_usize(),
            month: key.month().as_usize(),
        })?;

        let updated = current.apply_edits(batch)?;
        let balance = compute_balance(&updated);

        self.tables.insert(key, updated);
        self.balance = balance;

        info!("applied changes to {}, balance: {} hours", key, balance);

        Ok(balance)
    }

    /// Assigns every day of the table the hours of the weekly allocation.
    pub fn apply_weekly(&mut self, key: MonthKey) -> Result<Decimal, EditError> {
        let batch = match self.tables.get(&key) {
            Some(work_month) => self.settings.weekly().to_edit_batch(work_month),
            None => EditBatch::default(),
        };

        self.apply_edits(key, &batch)
    }

    /// The balance as of the last time edits were applied.
    #[must_use]
    pub const fn balance(&self) -> Decimal {
        self.balance
    }

    /// Snapshot of the table of the month for the report.
    ///
    /// If no table has been generated, an empty one with the current pensum is used.
    pub fn report_request(&self, year: usize, month: usize) -> Result<ReportRequest, SelectionError> {
        let key = MonthKey::new(year, month)?;
        let work_month = self.tables.get(&key).cloned().unwrap_or_else(|| {
            info!("no allocation for {}, exporting an empty one", key);
            WorkMonth::generate(key, self.settings.pensum().hours())
        });

        Ok(ReportRequest::new(self.settings.teacher_name(), work_month))
    }

    /// Renders the report of the month. The document replaces the previous one.
    pub fn export(
        &mut self,
        year: usize,
        month: usize,
        options: &ExportOptions,
    ) -> Result<&Document, ExportError> {
        let request = self.report_request(year, month)?;
        let document = report::render(&request, options)?;

        Ok(self.document.insert(document))
    }

    /// The last exported document.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}
