//! Sign-up form state and validation. Every rule runs on each submit so the
//! user sees all problems at once; no request is sent while any error remains.

use regex::Regex;
use std::collections::BTreeMap;

/// Minimum password length, counted in UTF-16 code units the way the browser
/// measures string length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Form fields that can carry a validation message. The wire names double as
/// multipart part names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignUpField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    ProfilePicture,
}

impl SignUpField {
    pub fn as_str(self) -> &'static str {
        match self {
            SignUpField::FirstName => "firstName",
            SignUpField::LastName => "lastName",
            SignUpField::Email => "email",
            SignUpField::Password => "password",
            SignUpField::ConfirmPassword => "confirmPassword",
            SignUpField::ProfilePicture => "profilePicture",
        }
    }
}

/// Validation messages keyed by field, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<SignUpField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: SignUpField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: SignUpField, message: &'static str) {
        self.0.insert(field, message);
    }

    /// Drops the message for `field`; called when the user edits it.
    pub fn clear(&mut self, field: SignUpField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = SignUpField> + '_ {
        self.0.keys().copied()
    }
}

/// Text fields of the sign-up form. The profile picture travels separately
/// because the browser file handle is not plain data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Runs every rule and collects all failures.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.first_name.trim().is_empty() {
            errors.insert(SignUpField::FirstName, "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert(SignUpField::LastName, "Last name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(SignUpField::Email, "Email is required");
        } else if !valid_email(&self.email) {
            errors.insert(SignUpField::Email, "Email is invalid");
        }
        if self.password.is_empty() {
            errors.insert(SignUpField::Password, "Password is required");
        } else if self.password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
            errors.insert(
                SignUpField::Password,
                "Password must be at least 6 characters",
            );
        }
        if self.password != self.confirm_password {
            errors.insert(SignUpField::ConfirmPassword, "Passwords do not match");
        }

        errors
    }

    /// Text parts of the registration request, in submission order. The
    /// confirmation never leaves the client.
    pub fn text_parts(&self) -> [(&'static str, &str); 4] {
        [
            (SignUpField::FirstName.as_str(), self.first_name.as_str()),
            (SignUpField::LastName.as_str(), self.last_name.as_str()),
            (SignUpField::Email.as_str(), self.email.as_str()),
            (SignUpField::Password.as_str(), self.password.as_str()),
        ]
    }
}

fn valid_email(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").is_ok_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::{FieldErrors, SignUpField, SignUpForm, valid_email};

    fn valid_form() -> SignUpForm {
        SignUpForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn every_rule_reports_at_once() {
        let form = SignUpForm {
            first_name: String::new(),
            last_name: "   ".to_string(),
            email: "a@b".to_string(),
            password: "123".to_string(),
            confirm_password: "456".to_string(),
        };

        let errors = form.validate();

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(SignUpField::FirstName), Some("First name is required"));
        assert_eq!(errors.get(SignUpField::LastName), Some("Last name is required"));
        assert_eq!(errors.get(SignUpField::Email), Some("Email is invalid"));
        assert_eq!(
            errors.get(SignUpField::Password),
            Some("Password must be at least 6 characters")
        );
        assert_eq!(
            errors.get(SignUpField::ConfirmPassword),
            Some("Passwords do not match")
        );
        assert_eq!(errors.get(SignUpField::ProfilePicture), None);
    }

    #[test]
    fn blank_email_and_password_say_required() {
        let form = SignUpForm {
            email: "  ".to_string(),
            password: String::new(),
            confirm_password: String::new(),
            ..valid_form()
        };

        let errors = form.validate();

        assert_eq!(errors.get(SignUpField::Email), Some("Email is required"));
        assert_eq!(errors.get(SignUpField::Password), Some("Password is required"));
        assert_eq!(errors.get(SignUpField::ConfirmPassword), None);
    }

    #[test]
    fn password_length_counts_utf16_units() {
        let accented = SignUpForm {
            password: "ääääää".to_string(),
            confirm_password: "ääääää".to_string(),
            ..valid_form()
        };
        assert!(accented.validate().is_empty());

        // Each emoji is a surrogate pair, so three of them reach six units.
        let emoji = SignUpForm {
            password: "😀😀😀".to_string(),
            confirm_password: "😀😀😀".to_string(),
            ..valid_form()
        };
        assert!(emoji.validate().is_empty());

        let short = SignUpForm {
            password: "😀😀".to_string(),
            confirm_password: "😀😀".to_string(),
            ..valid_form()
        };
        assert_eq!(
            short.validate().get(SignUpField::Password),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn email_pattern_matches_loosely() {
        assert!(valid_email("jane@example.com"));
        assert!(valid_email("first.last@sub.example.co"));
        assert!(!valid_email("a@b"));
        assert!(!valid_email("jane.example.com"));
        assert!(!valid_email("@example.com"));
    }

    #[test]
    fn clearing_a_field_keeps_the_others() {
        let mut errors = FieldErrors::default();
        errors.insert(SignUpField::Email, "Email is invalid");
        errors.insert(SignUpField::Password, "Password is required");

        errors.clear(SignUpField::Email);

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![SignUpField::Password]);
    }

    #[test]
    fn text_parts_skip_the_confirmation() {
        let form = valid_form();
        let names: Vec<_> = form.text_parts().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["firstName", "lastName", "email", "password"]);
    }
}
