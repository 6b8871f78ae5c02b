use crate::domain::model::MenuItem;
use crate::utils::error::{GeneratorError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GeneratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GeneratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GeneratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks an item list before generation.
///
/// Empty ids are always rejected. Unknown categories and repeated ids only fail
/// in strict mode; otherwise they are logged and generation carries on.
pub fn validate_items(items: &[MenuItem], strict: bool) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        validate_non_empty_string("items.id", &item.id)?;

        if !item.id.starts_with("ITEM_") {
            tracing::debug!("Item {} has no ITEM_ prefix, using it as-is for generated ids", item.id);
        }

        if !item.category.is_known() {
            if strict {
                return Err(GeneratorError::UnknownCategory {
                    item_id: item.id.clone(),
                    code: item.category.code().to_string(),
                });
            }
            tracing::warn!(
                "Item {} has unknown category '{}', no Add-ons group will be generated",
                item.id,
                item.category
            );
        }

        if !seen.insert(item.id.as_str()) {
            if strict {
                return Err(GeneratorError::DuplicateItem {
                    item_id: item.id.clone(),
                });
            }
            tracing::warn!("Item {} is listed more than once, generated ids will collide", item.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "out.sql").is_ok());
        assert!(validate_path("output", "").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_items_permissive() {
        let items = vec![
            MenuItem::new("ITEM_A", "GS"),
            MenuItem::new("ITEM_B", "ZZ"),
            MenuItem::new("ITEM_A", "GS"),
        ];
        assert!(validate_items(&items, false).is_ok());
    }

    #[test]
    fn test_validate_items_strict() {
        let unknown = vec![MenuItem::new("ITEM_B", "ZZ")];
        assert!(matches!(
            validate_items(&unknown, true),
            Err(GeneratorError::UnknownCategory { ref code, .. }) if code == "ZZ"
        ));

        let duplicated = vec![MenuItem::new("ITEM_A", "GS"), MenuItem::new("ITEM_A", "SW")];
        assert!(matches!(
            validate_items(&duplicated, true),
            Err(GeneratorError::DuplicateItem { ref item_id }) if item_id == "ITEM_A"
        ));
    }

    #[test]
    fn test_validate_items_rejects_blank_id() {
        let items = vec![MenuItem::new("  ", "GS")];
        assert!(validate_items(&items, false).is_err());
    }
}
