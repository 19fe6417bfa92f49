use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Monday of the week containing `d`. Pure calendar arithmetic, no
/// timezone handling beyond the date's own calendar day.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// Human-readable label for the Monday of the week containing `d`,
/// e.g. "02 June 2025". Identical for every day of that week.
pub fn week_start_label(d: NaiveDate) -> String {
    week_start(d).format("%d %B %Y").to_string()
}

/// True when `d` lies within one year of `reference` in either
/// direction. Mirrors the bounded date picker of the UI.
pub fn within_one_year(d: NaiveDate, reference: NaiveDate) -> bool {
    (d - reference).num_days().abs() <= 366
}
