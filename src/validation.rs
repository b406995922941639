//! Field constraints declared on the catalog entities, applied before a row
//! reaches storage.
//!
//! Text is trimmed, then measured in characters. Decimals are checked the way
//! a `NUMERIC(max_digits, decimal_places)` column would accept them.

use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};

/// A non-blank string of at most `max_length` characters.
pub fn required_text(field: &str, value: &str, max_length: usize) -> AppResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::RequiredFieldMissing(field.to_string()));
    }
    check_length(field, value, max_length)?;
    Ok(value.to_string())
}

/// Blank input is stored as absent so it never competes for a unique slot.
pub fn optional_text(
    field: &str,
    value: Option<&str>,
    max_length: usize,
) -> AppResult<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            check_length(field, value, max_length)?;
            Ok(Some(value.to_string()))
        }
    }
}

fn check_length(field: &str, value: &str, max_length: usize) -> AppResult<()> {
    let length = value.chars().count();
    if length > max_length {
        return Err(AppError::BadRequest(format!(
            "{field}: ensure this value has at most {max_length} characters (it has {length})"
        )));
    }
    Ok(())
}

pub fn decimal(
    field: &str,
    value: Decimal,
    max_digits: u32,
    decimal_places: u32,
) -> AppResult<Decimal> {
    let normalized = value.normalize();
    let decimals = normalized.scale();
    let whole = normalized.trunc().abs();
    let whole_digits = if whole.is_zero() {
        0
    } else {
        whole.to_string().len() as u32
    };

    if whole_digits + decimals > max_digits {
        return Err(AppError::BadRequest(format!(
            "{field}: ensure that there are no more than {max_digits} digits in total"
        )));
    }
    if decimals > decimal_places {
        return Err(AppError::BadRequest(format!(
            "{field}: ensure that there are no more than {decimal_places} decimal places"
        )));
    }
    if whole_digits > max_digits - decimal_places {
        return Err(AppError::BadRequest(format!(
            "{field}: ensure that there are no more than {} digits before the decimal point",
            max_digits - decimal_places
        )));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("name", "  Laptops ", 100).unwrap(), "Laptops");
        let err = required_text("name", "   ", 100).unwrap_err();
        assert!(matches!(err, AppError::RequiredFieldMissing(field) if field == "name"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let cyrillic = "Ноутбук".repeat(14); // 98 chars, 196 bytes
        assert!(required_text("name", &cyrillic, 100).is_ok());
        let too_long = "x".repeat(101);
        assert!(matches!(
            required_text("name", &too_long, 100),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn optional_text_maps_blank_to_none() {
        assert_eq!(optional_text("name", None, 100).unwrap(), None);
        assert_eq!(optional_text("name", Some("  "), 100).unwrap(), None);
        assert_eq!(
            optional_text("name", Some(" Phone "), 100).unwrap(),
            Some("Phone".to_string())
        );
    }

    #[test]
    fn decimal_accepts_values_within_precision() {
        assert_eq!(
            decimal("price", Decimal::new(1999, 2), 10, 2).unwrap(),
            Decimal::new(1999, 2)
        );
        assert!(decimal("price", Decimal::new(9999999999, 2), 10, 2).is_ok());
        // trailing zeros do not count as decimal places
        assert!(decimal("price", Decimal::new(15000, 4), 10, 2).is_ok());
        assert!(decimal("price", Decimal::new(-500, 2), 10, 2).is_ok());
    }

    #[test]
    fn decimal_rejects_extra_places_and_whole_digits() {
        assert!(decimal("price", Decimal::new(1999, 3), 10, 2).is_err());
        assert!(decimal("price", Decimal::new(123456789, 0), 10, 2).is_err());
        assert!(decimal("version_number", Decimal::new(1234567, 0), 10, 3).is_ok());
        assert!(decimal("version_number", Decimal::new(12345678, 0), 10, 3).is_err());
    }
}
