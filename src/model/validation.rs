use thiserror::Error;

use super::session::{AuthFields, AuthMode};

/// Minimum accepted password length for sign up.
const MIN_PASSWORD_LEN: usize = 6;

/// Validation failures for an auth form submission.
///
/// The display strings are the notices shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please fill in all required fields")]
    EmptyRequiredField,
    #[error("Please enter your full name")]
    MissingFullName,
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Validates a submission of the auth form. Runs only on submit.
///
/// Checks in order: required email/password (both modes, blank after
/// trimming fails), then for sign up only: full name present, passwords
/// match (compared untrimmed), password long enough. Any syntactically
/// valid input succeeds; there is no credential check.
pub fn validate_submission(mode: AuthMode, fields: &AuthFields) -> Result<(), AuthError> {
    if fields.email.trim().is_empty() || fields.password.trim().is_empty() {
        return Err(AuthError::EmptyRequiredField);
    }

    if mode == AuthMode::Signup {
        if fields.full_name.trim().is_empty() {
            return Err(AuthError::MissingFullName);
        }
        if fields.password != fields.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if fields.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn fields(email: &str, password: &str) -> AuthFields {
        AuthFields {
            email: email.into(),
            password: password.into(),
            confirm_password: password.into(),
            full_name: "Jane".into(),
            remember: false,
        }
    }

    // --- required fields, both modes ---

    #[test]
    fn signin_valid_credentials_accepted() {
        assert_eq!(
            validate_submission(AuthMode::Signin, &fields("j@x.com", "pw")),
            Ok(())
        );
    }

    #[test]
    fn empty_email_rejected() {
        assert_eq!(
            validate_submission(AuthMode::Signin, &fields("", "pw")),
            Err(AuthError::EmptyRequiredField)
        );
    }

    #[test]
    fn whitespace_only_email_rejected() {
        assert_eq!(
            validate_submission(AuthMode::Signin, &fields("   ", "pw")),
            Err(AuthError::EmptyRequiredField)
        );
    }

    #[test]
    fn whitespace_only_password_rejected() {
        assert_eq!(
            validate_submission(AuthMode::Signin, &fields("j@x.com", " \t ")),
            Err(AuthError::EmptyRequiredField)
        );
    }

    #[test]
    fn signup_empty_password_fails_before_signup_checks() {
        let mut f = fields("j@x.com", "");
        f.full_name.clear();
        assert_eq!(
            validate_submission(AuthMode::Signup, &f),
            Err(AuthError::EmptyRequiredField)
        );
    }

    #[quickcheck]
    fn whitespace_only_inputs_always_fail(spaces: u8) -> bool {
        let blank = " ".repeat(usize::from(spaces % 8));
        let f = fields(&blank, "pw");
        validate_submission(AuthMode::Signin, &f) == Err(AuthError::EmptyRequiredField)
    }

    // --- signup-only checks ---

    #[test]
    fn signup_missing_full_name_rejected() {
        let mut f = fields("j@x.com", "abcdef");
        f.full_name = "  ".into();
        assert_eq!(
            validate_submission(AuthMode::Signup, &f),
            Err(AuthError::MissingFullName)
        );
    }

    #[test]
    fn signup_password_mismatch_rejected() {
        let mut f = fields("j@x.com", "abcdef");
        f.confirm_password = "abcdeg".into();
        assert_eq!(
            validate_submission(AuthMode::Signup, &f),
            Err(AuthError::PasswordMismatch)
        );
    }

    #[test]
    fn signup_short_password_rejected_even_when_confirmed() {
        assert_eq!(
            validate_submission(AuthMode::Signup, &fields("j@x.com", "ab")),
            Err(AuthError::PasswordTooShort)
        );
    }

    #[test]
    fn signup_five_chars_rejected_six_accepted() {
        assert_eq!(
            validate_submission(AuthMode::Signup, &fields("j@x.com", "abcde")),
            Err(AuthError::PasswordTooShort)
        );
        assert_eq!(
            validate_submission(AuthMode::Signup, &fields("j@x.com", "abcdef")),
            Ok(())
        );
    }

    #[test]
    fn signup_valid_submission_accepted() {
        assert_eq!(
            validate_submission(AuthMode::Signup, &fields("j@x.com", "abcdef")),
            Ok(())
        );
    }

    #[test]
    fn signin_ignores_signup_rules() {
        // Short password and stale confirm field are fine when signing in.
        let mut f = fields("j@x.com", "ab");
        f.confirm_password = "something else".into();
        f.full_name.clear();
        assert_eq!(validate_submission(AuthMode::Signin, &f), Ok(()));
    }

    #[test]
    fn mismatch_reported_before_length() {
        // "ab" vs "cd": both too short, but mismatch wins per check order.
        let mut f = fields("j@x.com", "ab");
        f.confirm_password = "cd".into();
        assert_eq!(
            validate_submission(AuthMode::Signup, &f),
            Err(AuthError::PasswordMismatch)
        );
    }

    #[quickcheck]
    fn signup_differing_passwords_never_accepted(a: String, b: String) -> bool {
        if a == b {
            return true; // only interested in differing pairs
        }
        let mut f = fields("j@x.com", &a);
        f.password = a;
        f.confirm_password = b;
        if f.password.trim().is_empty() {
            return true; // caught earlier as EmptyRequiredField
        }
        validate_submission(AuthMode::Signup, &f) == Err(AuthError::PasswordMismatch)
    }

    #[quickcheck]
    fn signup_short_matching_passwords_never_accepted(p: String) -> bool {
        let p: String = p.chars().take(MIN_PASSWORD_LEN - 1).collect();
        if p.trim().is_empty() {
            return true;
        }
        let f = fields("j@x.com", &p);
        validate_submission(AuthMode::Signup, &f) == Err(AuthError::PasswordTooShort)
    }

    #[test]
    fn error_messages_are_user_notices() {
        assert_eq!(
            AuthError::EmptyRequiredField.to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(
            AuthError::PasswordMismatch.to_string(),
            "Passwords do not match!"
        );
        assert_eq!(
            AuthError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            AuthError::MissingFullName.to_string(),
            "Please enter your full name"
        );
    }
}
