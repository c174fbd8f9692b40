//! Validation helpers for DTOs.

use validator::ValidationError;

/// Maximum accepted length for a player name.
const USER_NAME_MAX_LENGTH: usize = 64;

/// Validates that a player name is non-blank and reasonably short.
///
/// # Examples
///
/// ```ignore
/// validate_user_name("alice")   // Ok
/// validate_user_name("  ")      // Err - blank
/// validate_user_name(&long)     // Err - over 64 characters
/// ```
pub fn validate_user_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("user_name_blank");
        err.message = Some("User name must not be blank".into());
        return Err(err);
    }

    if name.chars().count() > USER_NAME_MAX_LENGTH {
        let mut err = ValidationError::new("user_name_length");
        err.message = Some(
            format!(
                "User name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user_name_valid() {
        assert!(validate_user_name("alice").is_ok());
        assert!(validate_user_name("player one").is_ok());
        assert!(validate_user_name("x").is_ok());
    }

    #[test]
    fn test_validate_user_name_blank() {
        assert!(validate_user_name("").is_err());
        assert!(validate_user_name("   ").is_err());
        assert!(validate_user_name("\t\n").is_err());
    }

    #[test]
    fn test_validate_user_name_too_long() {
        let long = "a".repeat(USER_NAME_MAX_LENGTH + 1);
        assert!(validate_user_name(&long).is_err());

        let at_limit = "a".repeat(USER_NAME_MAX_LENGTH);
        assert!(validate_user_name(&at_limit).is_ok());
    }
}
