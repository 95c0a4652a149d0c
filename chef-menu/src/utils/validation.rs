//! Input validation helpers
//!
//! Text length constants and the management-form checks. A failed check
//! returns an [`AppError`] whose message can be shown to the user as-is.

use menu_shared::{AppError, MenuItem, MenuItemForm};

// ── Text length limits ──────────────────────────────────────────────

/// Dish names and course labels
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Parse price text into a finite number greater than zero.
pub fn parse_price(raw: &str) -> Result<f64, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::required_field("price"));
    }
    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(price),
        _ => Err(AppError::invalid_price(raw)),
    }
}

/// Validated form values, ready to be written into a menu item
#[derive(Debug, Clone, PartialEq)]
pub struct ValidForm {
    pub name: String,
    pub description: String,
    pub course: String,
    pub price: f64,
}

/// Validate a create/update form.
///
/// Blank fields are reported before a bad price, so an empty price yields
/// "Please fill in all fields" rather than a price error.
pub fn validate_menu_form(form: &MenuItemForm) -> Result<ValidForm, AppError> {
    validate_required_text(&form.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&form.description, "description", MAX_NOTE_LEN)?;
    if form.price.trim().is_empty() {
        return Err(AppError::required_field("price"));
    }
    validate_required_text(&form.course, "course", MAX_NAME_LEN)?;
    let price = parse_price(&form.price)?;

    Ok(ValidForm {
        name: form.name.clone(),
        description: form.description.clone(),
        course: form.course.clone(),
        price,
    })
}

/// Check a menu item loaded from a seed menu
///
/// Name and course must be non-blank and the price a finite number >= 0.
pub fn validate_seed_item(item: &MenuItem) -> Result<(), AppError> {
    let problem = if item.name.trim().is_empty() {
        Some("name is blank")
    } else if item.course.trim().is_empty() {
        Some("course is blank")
    } else if !item.price.is_finite() || item.price < 0.0 {
        Some("price must be a finite number >= 0")
    } else {
        None
    };
    match problem {
        Some(reason) => Err(AppError::validation(format!(
            "Menu item {}: {reason}",
            item.id
        ))
        .with_detail("id", item.id)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use menu_shared::ErrorCode;

    fn form(name: &str, description: &str, course: &str, price: &str) -> MenuItemForm {
        MenuItemForm {
            name: name.into(),
            description: description.into(),
            course: course.into(),
            price: price.into(),
        }
    }

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Burger", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let err = validate_required_text("abcdef", "name", 5).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("too long"));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("89.99").unwrap(), 89.99);
        assert_eq!(parse_price(" 25 ").unwrap(), 25.0);
        assert_eq!(parse_price("1500000").unwrap(), 1_500_000.0);
        assert_eq!(parse_price("2e9").unwrap(), 2e9);
        for bad in ["0", "-5", "abc", "NaN", "inf", "12,50"] {
            let err = parse_price(bad).unwrap_err();
            assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice, "{bad}");
            assert_eq!(err.message, "Please enter a valid price");
        }
        assert_eq!(parse_price("").unwrap_err().code, ErrorCode::RequiredField);
    }

    #[test]
    fn test_validate_form_ok() {
        let valid = validate_menu_form(&form("Tea", "Hot tea", "Beverages", "15.5")).unwrap();
        assert_eq!(valid.price, 15.5);
        assert_eq!(valid.course, "Beverages");
    }

    #[test]
    fn test_validate_form_missing_fields() {
        for f in [
            form("", "d", "Pizza", "10"),
            form("n", "", "Pizza", "10"),
            form("n", "d", "Pizza", ""),
            form("n", "d", "", "10"),
        ] {
            let err = validate_menu_form(&f).unwrap_err();
            assert_eq!(err.code, ErrorCode::RequiredField);
            assert_eq!(err.message, "Please fill in all fields");
        }
    }

    #[test]
    fn test_validate_form_large_price() {
        let valid = validate_menu_form(&form("Banquet", "For 500", "Dessert", "1500000")).unwrap();
        assert_eq!(valid.price, 1_500_000.0);
    }

    #[test]
    fn test_seed_item_checks() {
        assert!(validate_seed_item(&MenuItem::new(1, "Water", "Still", "Beverages", 0.0)).is_ok());
        for item in [
            MenuItem::new(1, "", "d", "Pizza", 10.0),
            MenuItem::new(2, "Pie", "d", " ", 10.0),
            MenuItem::new(3, "Pie", "d", "Pizza", -5.0),
            MenuItem::new(4, "Pie", "d", "Pizza", f64::NAN),
        ] {
            let err = validate_seed_item(&item).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed, "{}", item.id);
        }
    }

    #[test]
    fn test_validate_form_bad_price() {
        let err = validate_menu_form(&form("n", "d", "Pizza", "free")).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
    }
}
