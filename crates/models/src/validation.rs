use crate::errors::ModelError;

/// Shape checks applied to request bodies before they reach the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

pub fn require_non_blank(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::invalid(field, "is required"));
    }
    Ok(())
}

pub fn require_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), ModelError> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(ModelError::invalid(field, &format!("must contain at least {min} character(s)")));
    }
    if len > max {
        return Err(ModelError::invalid(field, &format!("must contain at most {max} character(s)")));
    }
    Ok(())
}

pub fn require_range(field: &str, value: i64, min: i64, max: i64) -> Result<(), ModelError> {
    if value < min || value > max {
        return Err(ModelError::invalid(field, &format!("must be between {min} and {max}")));
    }
    Ok(())
}

/// Uniqueness is compared on the raw value, so padded input is rejected
/// instead of stored next to its trimmed twin.
pub fn reject_padding(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim() != value {
        return Err(ModelError::invalid(field, "must not start or end with whitespace"));
    }
    Ok(())
}

/// Accepts `local@domain.tld`; anything stricter is left to the mail provider.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    reject_padding("email", email)?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    };
    if !valid {
        return Err(ModelError::invalid("email", "must be a valid email address"));
    }
    Ok(())
}
