use chrono::NaiveDate;

/// Parses an `MM-YYYY` value into the first day of that month.
pub fn parse_month_year(value: Option<&str>) -> Option<NaiveDate> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(&format!("01-{raw}"), "%d-%m-%Y") {
        Ok(d) if crate::domain::validation::is_month_year(raw) => Some(d),
        _ => {
            tracing::warn!(value = %raw, "month_year_parse_failed");
            None
        }
    }
}
