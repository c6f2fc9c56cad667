use crate::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Header fields of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMeta {
    #[serde(default)]
    pub title: String,
    /// ISO `yyyy-mm-dd`; kept as text so a half-typed date survives a save.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub author: String,
}

impl ReportMeta {
    pub fn for_date(day: NaiveDate, author: impl Into<String>) -> Self {
        let mut meta = Self {
            title: String::new(),
            date: date::to_iso(day),
            author: author.into(),
        };
        meta.derive_title();
        meta
    }

    /// Overwrites the title with the weekday-derived one. Returns false and
    /// leaves the title alone when the date does not parse.
    pub fn derive_title(&mut self) -> bool {
        match date::title_for_date(&self.date) {
            Some(title) => {
                self.title = title;
                true
            }
            None => false,
        }
    }

    pub fn set_date(&mut self, date: String) {
        self.date = date;
        self.derive_title();
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn set_author(&mut self, author: String) {
        self.author = author;
    }

    pub fn formatted_date(&self) -> String {
        if self.date.is_empty() {
            String::new()
        } else {
            date::format_date_fr(&self.date)
        }
    }
}
