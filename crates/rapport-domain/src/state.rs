use crate::{date, MetaUpdate, ReportMeta, TaskEntry, TaskUpdate};
use chrono::NaiveDate;
use rapport_core::{RapportError, RapportResult};
use serde::{Deserialize, Serialize};

/// Everything the user has typed: header fields plus the ordered task list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportState {
    #[serde(default)]
    pub meta: ReportMeta,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

impl ReportState {
    /// An empty report dated `day` with a weekday-derived title.
    pub fn fresh(day: NaiveDate, author: impl Into<String>) -> Self {
        Self {
            meta: ReportMeta::for_date(day, author),
            tasks: Vec::new(),
        }
    }

    /// Fills the gaps a partially stored state may have: an empty date
    /// becomes `today`, an empty title is derived from the date.
    pub fn normalize(&mut self, today: NaiveDate) {
        if self.meta.date.trim().is_empty() {
            self.meta.date = date::to_iso(today);
        }
        if self.meta.title.is_empty() {
            self.meta.derive_title();
        }
    }

    pub fn reset(&mut self, today: NaiveDate, author: impl Into<String>) {
        *self = Self::fresh(today, author);
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn task(&self, index: usize) -> Option<&TaskEntry> {
        self.tasks.get(index)
    }

    /// Appends an empty task and returns its index.
    pub fn add_task(&mut self) -> usize {
        self.tasks.push(TaskEntry::new());
        self.tasks.len() - 1
    }

    pub fn remove_task(&mut self, index: usize) -> RapportResult<TaskEntry> {
        if index >= self.tasks.len() {
            return Err(RapportError::task_not_found(index, self.tasks.len()));
        }
        Ok(self.tasks.remove(index))
    }

    pub fn update_task(&mut self, index: usize, update: TaskUpdate) -> RapportResult<&TaskEntry> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| RapportError::task_not_found(index, len))?;
        update.apply_to(task);
        Ok(task)
    }

    /// Applies the date first so an explicit title in the same update wins
    /// over the derived one.
    pub fn update_meta(&mut self, update: MetaUpdate) {
        if let Some(date) = update.date {
            self.meta.set_date(date);
        }
        if let Some(title) = update.title {
            self.meta.set_title(title);
        }
        if let Some(author) = update.author {
            self.meta.set_author(author);
        }
    }

    /// Tasks that make it into a report, paired with their 1-based position
    /// among the survivors.
    pub fn reportable_tasks(&self) -> impl Iterator<Item = (usize, &TaskEntry)> {
        self.tasks
            .iter()
            .filter(|task| !task.is_blank())
            .enumerate()
            .map(|(i, task)| (i + 1, task))
    }
}
