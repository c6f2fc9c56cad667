//! Calendar helpers for the report's single fixed locale (French).

use chrono::{Datelike, Local, NaiveDate, Weekday};

const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_iso() -> String {
    to_iso(today())
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn parse_iso(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), ISO_FORMAT).ok()
}

/// `2026-03-04` becomes `04/03/2026`; anything unparsable is returned as is.
pub fn format_date_fr(date: &str) -> String {
    match parse_iso(date) {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => date.to_string(),
    }
}

pub fn weekday_fr(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

/// Title derived from an ISO date, `None` when the date does not parse.
pub fn title_for_date(date: &str) -> Option<String> {
    parse_iso(date).map(|d| format!("Rapport du {}", weekday_fr(d.weekday())))
}
