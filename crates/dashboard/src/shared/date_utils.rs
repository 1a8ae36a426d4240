/// Utilities for date formatting in the ru-RU style
use chrono::{Datelike, NaiveDate};

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

/// Format date to DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format date as "15 февраля 2024"
pub fn format_date_long(date: NaiveDate) -> String {
    format!("{} {}", format_day_month(date), date.year())
}

/// Format date as "15 февраля"
pub fn format_day_month(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {}", date.day(), month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(format_date(date), "05.02.2024");
        assert_eq!(format_date_long(date), "5 февраля 2024");
        assert_eq!(format_day_month(date), "5 февраля");
    }

    #[test]
    fn test_december() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(format_date_long(date), "31 декабря 2023");
    }
}
