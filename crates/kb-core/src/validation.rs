use crate::error::ValidationError;

/// Hard cap on columns per board, enforced at create/edit time rather
/// than at the storage level.
pub const MAX_BOARD_COLUMNS: usize = 5;

/// Rejects empty or whitespace-only values with a field-level error.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

pub fn validate_column_count(count: usize) -> Result<(), ValidationError> {
    if count > MAX_BOARD_COLUMNS {
        return Err(ValidationError::TooManyColumns {
            max: MAX_BOARD_COLUMNS,
        });
    }
    Ok(())
}
