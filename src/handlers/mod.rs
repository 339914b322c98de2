//! HTTP handlers: extract path/body, call one service method, return JSON.

pub mod customers;
pub mod menu;
pub mod orders;
pub mod restaurants;

use crate::error::AppError;

/// Path ids are decimal integers; anything else is rejected before touching the store.
pub(crate) fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id(" 7 ").unwrap(), 7);
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("1.5").is_err());
        assert!(parse_id("99999999999").is_err());
    }
}
