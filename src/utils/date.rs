use chrono::NaiveDate;

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(parse_date("2024-06-15").unwrap(), expected);
        assert_eq!(parse_date("20240615").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("June 15").is_err());
        assert!(parse_date("2024/06/15").is_err());
        assert!(parse_date("").is_err());
    }
}
