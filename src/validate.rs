//! Form Validation
//!
//! Pure field validators. Each returns `None` when valid or the message the
//! form renders next to the field. Nothing here touches the network.

/// Minimum password length accepted by the signup form
pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_username(username: &str) -> Option<String> {
    if username.is_empty() {
        Some("Username is required".to_string())
    } else {
        None
    }
}

/// Required, and shaped like `local@domain.tld`: no whitespace, a single
/// `@`, and a dot in the domain with text on both sides.
pub fn validate_email(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(email) {
        Some("Email is invalid".to_string())
    } else {
        None
    }
}

pub fn validate_password(password: &str) -> Option<String> {
    if password.is_empty() {
        Some("Password is required".to_string())
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some("Password must be at least 8 characters".to_string())
    } else {
        None
    }
}

pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if confirm.is_empty() {
        Some("Please confirm your password".to_string())
    } else if confirm != password {
        Some("Passwords do not match".to_string())
    } else {
        None
    }
}

pub fn validate_title(title: &str) -> Option<String> {
    if title.is_empty() {
        Some("Title is required".to_string())
    } else {
        None
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let clean = |part: &str| {
        !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@')
    };
    clean(local) && clean(host) && clean(tld)
}

/// Per-field signup errors, computed in one pass before submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupErrors {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl SignupErrors {
    pub fn is_ok(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }
}

pub fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> SignupErrors {
    SignupErrors {
        username: validate_username(username),
        email: validate_email(email),
        password: validate_password(password),
        confirm_password: validate_confirm_password(password, confirm),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_each_get_a_message() {
        let errors = validate_signup("", "", "", "");
        assert_eq!(errors.username.as_deref(), Some("Username is required"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
        assert_eq!(errors.password.as_deref(), Some("Password is required"));
        assert_eq!(
            errors.confirm_password.as_deref(),
            Some("Please confirm your password")
        );
        assert!(!errors.is_ok());
    }

    #[test]
    fn short_password_mentions_minimum_length() {
        let message = validate_password("1234567").unwrap();
        assert!(message.contains("at least 8 characters"));
    }

    #[test]
    fn short_password_flagged_regardless_of_other_fields() {
        let errors = validate_signup("user", "user@example.com", "short", "short");
        assert!(errors.username.is_none());
        assert!(errors.email.is_none());
        assert!(errors.password.as_deref().unwrap().contains("at least 8 characters"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let errors = validate_signup("user", "user@example.com", "password1", "password2");
        assert_eq!(errors.confirm_password.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn valid_submission_has_no_errors() {
        let errors = validate_signup("user", "user@example.com", "password1", "password1");
        assert!(errors.is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b@sub.example.co"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@com."));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn title_must_be_non_empty() {
        assert_eq!(validate_title("").as_deref(), Some("Title is required"));
        assert!(validate_title("Write report").is_none());
    }
}
