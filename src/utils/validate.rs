use crate::error::ApiError;

/// Rejects empty and oversized strings before they reach the store.
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation(format!(
            "Field '{field}' must not be empty."
        )));
    }
    if value.len() > max_len {
        return Err(ApiError::Validation(format!(
            "Field '{field}' must be at most {max_len} characters."
        )));
    }
    Ok(())
}

/// Minimal mailbox syntax check: exactly one '@', a non-empty local part, and
/// a dotted domain with non-empty labels.
pub fn require_email(field: &str, value: &str) -> Result<(), ApiError> {
    require_text(field, value, 255)?;

    let well_formed = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };

    if !well_formed {
        return Err(ApiError::Validation(format!(
            "Field '{field}' must be a valid email address."
        )));
    }
    Ok(())
}
