//! Field validators for the contact form. Pure functions, no rendering.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern compiles")
});

/// South African mobile numbers: `+27` or `0`, then 6/7/8, then eight digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+27|0)[6-8][0-9]{8}$").expect("phone pattern compiles"));

/// How a field's value is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Must be non-blank; `missing` is the message shown when it is.
    RequiredText { missing: &'static str },
    OptionalText,
    /// Required, then must look like `local@domain.tld`.
    Email { missing: &'static str },
    /// Required, then must be a South African mobile number.
    Phone { missing: &'static str },
    /// At least one option selected.
    MultiSelect { missing: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Missing(&'static str),
    InvalidEmail,
    InvalidPhone,
    NothingSelected(&'static str),
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Missing(message) | Self::NothingSelected(message) => message,
            Self::InvalidEmail => "Please enter a valid email address",
            Self::InvalidPhone => "Please enter a valid phone number",
        }
    }

    /// Whether the error only reports an empty value (as opposed to a malformed one).
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_) | Self::NothingSelected(_))
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

pub const GENERIC_REQUIRED: &str = "This field is required";

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whitespace as browsers count it in form input: Unicode `White_Space` plus
/// the byte-order mark, which pasted text often carries.
pub fn is_form_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Remove every whitespace character (`"068 379 4897"` -> `"0683794897"`).
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(|c| !is_form_space(*c)).collect()
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(value))
}

pub fn is_blank(value: &str) -> bool {
    value.trim_matches(is_form_space).is_empty()
}

/// Validate a single-valued field. The first failing check wins: emptiness is
/// reported before format.
pub fn validate_text(kind: FieldKind, value: &str) -> Result<(), ValidationError> {
    match kind {
        FieldKind::OptionalText => Ok(()),
        FieldKind::RequiredText { missing } => {
            if is_blank(value) {
                Err(ValidationError::Missing(missing))
            } else {
                Ok(())
            }
        }
        FieldKind::Email { missing } => {
            if is_blank(value) {
                Err(ValidationError::Missing(missing))
            } else if !is_valid_email(value) {
                Err(ValidationError::InvalidEmail)
            } else {
                Ok(())
            }
        }
        FieldKind::Phone { missing } => {
            if is_blank(value) {
                Err(ValidationError::Missing(missing))
            } else if !is_valid_phone(value) {
                Err(ValidationError::InvalidPhone)
            } else {
                Ok(())
            }
        }
        FieldKind::MultiSelect { missing } => {
            if is_blank(value) {
                Err(ValidationError::NothingSelected(missing))
            } else {
                Ok(())
            }
        }
    }
}

pub fn validate_selection<S: AsRef<str>>(
    kind: FieldKind,
    selected: &[S],
) -> Result<(), ValidationError> {
    match kind {
        FieldKind::MultiSelect { missing } => {
            if selected.iter().any(|s| !is_blank(s.as_ref())) {
                Ok(())
            } else {
                Err(ValidationError::NothingSelected(missing))
            }
        }
        other => {
            let joined = selected
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(",");
            validate_text(other, &joined)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: FieldKind = FieldKind::RequiredText {
        missing: "Name is required",
    };

    #[test]
    fn email_shape() {
        for ok in ["a@b.co", "thabo.m@leanosecurity.co.za", "x+tag@sub.domain.org"] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "plain",
            "no-at.example.com",
            "a@b",
            "a @b.co",
            "a@ b.co",
            "a@@b.co",
            "@b.co",
            "a@.",
            " a@b.co",
        ] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn phone_normalizes_whitespace() {
        assert_eq!(normalize_phone("068 379 4897"), "0683794897");
        assert_eq!(normalize_phone("\t+27 68\n379 4897 "), "+27683794897");
        assert!(is_valid_phone("068 379 4897"));
        assert!(is_valid_phone("+27683794897"));
        assert!(is_valid_phone("0712345678"));
        assert!(is_valid_phone("0821234567"));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(is_valid_phone("\u{FEFF}068 379\u{FEFF}4897"));
        assert!(!is_valid_email("a\u{FEFF}@b.co"));
        assert!(!is_valid_email("a@b.co\u{FEFF}"));
        assert!(is_blank("\u{FEFF} \u{FEFF}"));
        assert_eq!(
            validate_text(REQUIRED, "\u{FEFF}"),
            Err(ValidationError::Missing("Name is required"))
        );
    }

    #[test]
    fn phone_rejects_non_mobile_or_wrong_length() {
        for bad in [
            "123",
            "",
            "0583794897",
            "0983794897",
            "068379489",
            "06837948970",
            "27683794897",
            "+270683794897",
            "068-379-4897",
            "+44683794897",
        ] {
            assert!(!is_valid_phone(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn required_text_trims() {
        assert_eq!(
            validate_text(REQUIRED, "   "),
            Err(ValidationError::Missing("Name is required"))
        );
        assert!(validate_text(REQUIRED, " Naledi ").is_ok());
        assert!(validate_text(FieldKind::OptionalText, "").is_ok());
    }

    #[test]
    fn empty_email_reports_missing_before_format() {
        let kind = FieldKind::Email {
            missing: "Valid email is required",
        };
        let err = validate_text(kind, "").unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err.message(), "Valid email is required");

        let err = validate_text(kind, "nope").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn phone_field_messages() {
        let kind = FieldKind::Phone {
            missing: "Phone number is required",
        };
        assert_eq!(
            validate_text(kind, " ").unwrap_err().message(),
            "Phone number is required"
        );
        assert_eq!(
            validate_text(kind, "123").unwrap_err().message(),
            "Please enter a valid phone number"
        );
        assert!(validate_text(kind, "068 379 4897").is_ok());
    }

    #[test]
    fn multi_select_needs_one_option() {
        let kind = FieldKind::MultiSelect {
            missing: "Please select at least one service",
        };
        let none: [&str; 0] = [];
        assert_eq!(
            validate_selection(kind, &none),
            Err(ValidationError::NothingSelected(
                "Please select at least one service"
            ))
        );
        assert!(validate_selection(kind, &["cctv"]).is_ok());
    }
}
