//! Contact form model: the field set, its option lists, and form-level validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::validate::{validate_selection, validate_text, FieldKind, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Urgency,
    Message,
    Newsletter,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Service,
        Field::Urgency,
        Field::Message,
        Field::Newsletter,
    ];

    /// The `name`/`id` attribute of the control, also the draft key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Service => "service",
            Field::Urgency => "urgency",
            Field::Message => "message",
            Field::Newsletter => "newsletter",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Name => FieldKind::RequiredText {
                missing: "Name is required",
            },
            Field::Email => FieldKind::Email {
                missing: "Valid email is required",
            },
            Field::Phone => FieldKind::Phone {
                missing: "Phone number is required",
            },
            Field::Service => FieldKind::MultiSelect {
                missing: "Please select at least one service",
            },
            Field::Message => FieldKind::RequiredText {
                missing: "Message is required",
            },
            Field::Company | Field::Urgency | Field::Newsletter => FieldKind::OptionalText,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICE_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "armed-response",
        label: "Armed Response",
    },
    ChoiceOption {
        value: "guarding",
        label: "Guarding Services",
    },
    ChoiceOption {
        value: "cctv",
        label: "CCTV Surveillance",
    },
    ChoiceOption {
        value: "alarms",
        label: "Alarm Systems",
    },
    ChoiceOption {
        value: "access-control",
        label: "Access Control",
    },
    ChoiceOption {
        value: "event-security",
        label: "Event Security",
    },
    ChoiceOption {
        value: "risk-assessment",
        label: "Risk Assessment",
    },
];

pub const URGENCY_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption {
        value: "standard",
        label: "Standard (within 48 hours)",
    },
    ChoiceOption {
        value: "priority",
        label: "Priority (within 24 hours)",
    },
    ChoiceOption {
        value: "emergency",
        label: "Emergency (call me now)",
    },
];

pub const DEFAULT_URGENCY: &str = "standard";

pub fn service_label(value: &str) -> Option<&'static str> {
    SERVICE_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// Selected `SERVICE_OPTIONS` values, in option order.
    pub services: Vec<String>,
    pub urgency: String,
    pub message: String,
    pub newsletter: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            services: Vec::new(),
            urgency: DEFAULT_URGENCY.to_string(),
            message: String::new(),
            newsletter: false,
        }
    }
}

impl ContactForm {
    /// Value of a single-valued text control. `None` for the service list and checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Company => Some(&self.company),
            Field::Urgency => Some(&self.urgency),
            Field::Message => Some(&self.message),
            Field::Service | Field::Newsletter => None,
        }
    }

    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Company => self.company = value,
            Field::Urgency => self.urgency = value,
            Field::Message => self.message = value,
            Field::Service | Field::Newsletter => {}
        }
    }

    pub fn is_service_selected(&self, value: &str) -> bool {
        self.services.iter().any(|s| s == value)
    }

    /// Select or deselect a service. Unknown values are ignored and the
    /// selection stays in option order.
    pub fn set_service(&mut self, value: &str, selected: bool) {
        if service_label(value).is_none() {
            return;
        }
        if selected {
            if !self.is_service_selected(value) {
                self.services.push(value.to_string());
            }
        } else {
            self.services.retain(|s| s != value);
        }
        self.services.sort_by_key(|s| {
            SERVICE_OPTIONS
                .iter()
                .position(|option| option.value == s.as_str())
                .unwrap_or(usize::MAX)
        });
    }

    pub fn selected_service_labels(&self) -> Vec<&'static str> {
        self.services
            .iter()
            .filter_map(|value| service_label(value))
            .collect()
    }

    pub fn validate_field(&self, field: Field) -> Result<(), ValidationError> {
        match field {
            Field::Service => validate_selection(field.kind(), &self.services),
            Field::Newsletter => Ok(()),
            other => validate_text(other.kind(), self.text(other).unwrap_or_default()),
        }
    }

    /// Validate every field, keeping the first failure of each.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Err(err) = self.validate_field(field) {
                errors.insert(field, err);
            }
        }
        errors
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl FieldErrors {
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn clear(&mut self, field: Field) -> Option<ValidationError> {
        self.errors.remove(&field)
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(ValidationError::message)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Record the outcome of a single-field check.
    pub fn record(&mut self, field: Field, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => {
                self.clear(field);
            }
            Err(err) => self.insert(field, err),
        }
    }
}

#[cfg(test)]
pub(crate) fn filled_form() -> ContactForm {
    ContactForm {
        name: "Naledi Mokoena".into(),
        email: "naledi@example.co.za".into(),
        phone: "068 379 4897".into(),
        company: "Mokoena Logistics".into(),
        services: vec!["armed-response".into(), "cctv".into()],
        urgency: "priority".into(),
        message: "Please quote for a warehouse in Midrand.".into(),
        newsletter: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("fax"), None);
    }

    #[test]
    fn empty_form_reports_each_required_field() {
        let errors = ContactForm::default().validate();
        let failed: Vec<Field> = errors.fields().collect();
        assert_eq!(
            failed,
            vec![
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Service,
                Field::Message
            ]
        );
        assert_eq!(errors.message(Field::Email), Some("Valid email is required"));
        assert_eq!(
            errors.message(Field::Service),
            Some("Please select at least one service")
        );
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(filled_form().validate().is_empty());
    }

    #[test]
    fn malformed_contact_details_fail_with_format_messages() {
        let mut form = filled_form();
        form.email = "naledi at example".into();
        form.phone = "123".into();
        let errors = form.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.message(Field::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.message(Field::Phone),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn services_keep_option_order_and_ignore_unknown_values() {
        let mut form = ContactForm::default();
        form.set_service("risk-assessment", true);
        form.set_service("armed-response", true);
        form.set_service("armed-response", true);
        form.set_service("drones", true);
        assert_eq!(form.services, vec!["armed-response", "risk-assessment"]);
        assert_eq!(
            form.selected_service_labels(),
            vec!["Armed Response", "Risk Assessment"]
        );
        form.set_service("armed-response", false);
        assert_eq!(form.services, vec!["risk-assessment"]);
    }

    #[test]
    fn record_clears_on_success() {
        let mut errors = FieldErrors::default();
        errors.record(Field::Name, Err(ValidationError::Missing("Name is required")));
        assert!(!errors.is_empty());
        errors.record(Field::Name, Ok(()));
        assert!(errors.is_empty());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.urgency, DEFAULT_URGENCY);
    }
}
