//! Client-side input validation.
//!
//! These checks run before any request is issued; their messages are the
//! user-facing strings the calling surface displays inline.

/// Validation error for user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Email address is empty.
    EmptyEmail,
    /// Email address format is invalid.
    InvalidEmail,
    /// OTP is not six digits.
    IncompleteOtp,
    /// Password or confirmation is empty.
    MissingPassword,
    /// Password is shorter than eight characters.
    PasswordTooShort,
    /// Password and confirmation differ.
    PasswordMismatch,
    /// AI prompt is blank.
    EmptyPrompt,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "Please enter your email address",
            Self::InvalidEmail => "Please enter a valid email address",
            Self::IncompleteOtp => "Please enter the complete 6-digit OTP",
            Self::MissingPassword => "Please fill in all fields",
            Self::PasswordTooShort => "Password must be at least 8 characters long",
            Self::PasswordMismatch => "Passwords do not match",
            Self::EmptyPrompt => "Please enter a prompt for AI generation",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Validates an email address.
///
/// # Errors
///
/// Returns `EmptyEmail` or `InvalidEmail`.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Validates a password-reset OTP: exactly six ASCII digits.
///
/// # Errors
///
/// Returns `IncompleteOtp` for anything else.
pub fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    if otp.len() == 6 && otp.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::IncompleteOtp)
    }
}

/// Validates a new password and its confirmation.
///
/// # Errors
///
/// Returns `MissingPassword`, `PasswordTooShort`, or `PasswordMismatch`.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), ValidationError> {
    if password.is_empty() || confirm.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Validates an AI-generation prompt.
///
/// # Errors
///
/// Returns `EmptyPrompt` when the prompt is blank.
pub fn validate_prompt(prompt: &str) -> Result<(), ValidationError> {
    if prompt.trim().is_empty() {
        return Err(ValidationError::EmptyPrompt);
    }
    Ok(())
}

/// Basic email shape check: one `@`, non-empty local part, dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("user.name@sub.example.com").is_ok());
        assert!(validate_email("  padded@example.com  ").is_ok());
    }

    #[test]
    fn invalid_emails() {
        assert_eq!(validate_email(""), Err(ValidationError::EmptyEmail));
        assert_eq!(validate_email("   "), Err(ValidationError::EmptyEmail));
        assert_eq!(validate_email("user"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("user@example..com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn otp_requires_six_digits() {
        assert!(validate_otp("123456").is_ok());
        assert_eq!(validate_otp("12345"), Err(ValidationError::IncompleteOtp));
        assert_eq!(validate_otp("1234567"), Err(ValidationError::IncompleteOtp));
        assert_eq!(validate_otp("12345a"), Err(ValidationError::IncompleteOtp));
        assert_eq!(validate_otp(""), Err(ValidationError::IncompleteOtp));
    }

    #[test]
    fn otp_message_is_exact() {
        let err = validate_otp("123").unwrap_err();
        assert_eq!(err.to_string(), "Please enter the complete 6-digit OTP");
    }

    #[test]
    fn new_password_rules() {
        assert!(validate_new_password("longenough", "longenough").is_ok());
        assert_eq!(
            validate_new_password("", "x"),
            Err(ValidationError::MissingPassword)
        );
        assert_eq!(
            validate_new_password("short", "short"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            validate_new_password("longenough", "different1"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn prompt_must_not_be_blank() {
        assert!(validate_prompt("write a polite follow-up").is_ok());
        assert_eq!(validate_prompt(""), Err(ValidationError::EmptyPrompt));
        assert_eq!(validate_prompt("   \n"), Err(ValidationError::EmptyPrompt));
    }
}
