//! Outbound inquiry delivery. The form only depends on the [`Mailer`] seam;
//! which provider backs it is decided once, at startup, by [`MailerConfig`].

use std::collections::BTreeMap;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use super::form::ContactForm;
use crate::core::config::{CONTACT_EMAIL, SIMULATED_SEND_DELAY_MS};
use crate::core::timing;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("could not reach the email provider: {0}")]
    Transport(String),
    #[error("email provider rejected the message (HTTP {status})")]
    Rejected { status: u16 },
}

/// Opaque proof of delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub provider: &'static str,
    pub reference: Option<String>,
}

/// Everything the recipient needs to follow up on an inquiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    /// Selected service labels joined with `", "`.
    pub services: String,
    pub urgency: String,
    pub message: String,
    pub newsletter: bool,
    pub submitted_at: String,
}

impl InquiryPayload {
    pub fn from_form(form: &ContactForm) -> Self {
        let submitted_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();
        Self::from_form_at(form, submitted_at)
    }

    pub fn from_form_at(form: &ContactForm, submitted_at: impl Into<String>) -> Self {
        let company = form.company.trim();
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            company: (!company.is_empty()).then(|| company.to_string()),
            services: form.selected_service_labels().join(", "),
            urgency: form.urgency.clone(),
            message: form.message.trim().to_string(),
            newsletter: form.newsletter,
            submitted_at: submitted_at.into(),
        }
    }

    pub fn subject(&self) -> String {
        format!("Security Inquiry from {}", self.name)
    }

    /// JSON body accepted by a Formspree form endpoint.
    pub fn formspree_body(&self) -> serde_json::Value {
        json!({
            "_replyto": self.email,
            "_subject": self.subject(),
            "name": self.name,
            "email": self.email,
            "phone": self.phone,
            "company": self.company.clone().unwrap_or_default(),
            "services": self.services,
            "urgency": self.urgency,
            "message": self.message,
            "newsletter": if self.newsletter { "yes" } else { "no" },
        })
    }

    /// Template parameters for a hosted email template (EmailJS-style).
    pub fn template_params(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("to_email", CONTACT_EMAIL.to_string()),
            ("from_name", self.name.clone()),
            ("from_email", self.email.clone()),
            ("phone", self.phone.clone()),
            (
                "company",
                self.company
                    .clone()
                    .unwrap_or_else(|| "Not provided".to_string()),
            ),
            ("services", self.services.clone()),
            ("urgency", self.urgency.clone()),
            ("message", self.message.clone()),
            (
                "newsletter",
                if self.newsletter {
                    "Subscribed"
                } else {
                    "Not subscribed"
                }
                .to_string(),
            ),
            ("date", self.submitted_at.clone()),
        ])
    }
}

/// Delivers an inquiry. Resolves with a [`Receipt`] or a [`DeliveryError`];
/// nothing else about the provider leaks to the form.
pub trait Mailer {
    fn provider(&self) -> &'static str;
    fn send(&self, payload: InquiryPayload) -> LocalBoxFuture<'static, Result<Receipt, DeliveryError>>;
}

/// Stand-in used until a provider is configured: logs and reports success
/// after a short delay so the form's busy state is visible.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedMailer {
    pub delay_ms: u64,
}

impl Default for SimulatedMailer {
    fn default() -> Self {
        Self {
            delay_ms: SIMULATED_SEND_DELAY_MS,
        }
    }
}

impl Mailer for SimulatedMailer {
    fn provider(&self) -> &'static str {
        "simulated"
    }

    fn send(&self, payload: InquiryPayload) -> LocalBoxFuture<'static, Result<Receipt, DeliveryError>> {
        tracing::warn!(
            "[mailer] email service not configured; simulating delivery of \"{}\"",
            payload.subject()
        );
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            timing::sleep_ms(delay_ms).await;
            Ok(Receipt {
                provider: "simulated",
                reference: None,
            })
        })
    }
}

/// Posts the inquiry as JSON to a Formspree form endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormspreeMailer {
    pub endpoint: String,
}

impl Mailer for FormspreeMailer {
    fn provider(&self) -> &'static str {
        "formspree"
    }

    fn send(&self, payload: InquiryPayload) -> LocalBoxFuture<'static, Result<Receipt, DeliveryError>> {
        let endpoint = self.endpoint.clone();
        Box::pin(async move { post_json(&endpoint, &payload.formspree_body()).await })
    }
}

#[cfg(target_arch = "wasm32")]
async fn post_json(endpoint: &str, body: &serde_json::Value) -> Result<Receipt, DeliveryError> {
    use gloo_net::http::Request;

    let request = Request::post(endpoint)
        .header("Accept", "application/json")
        .json(body)
        .map_err(|err| DeliveryError::Transport(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| DeliveryError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(DeliveryError::Rejected {
            status: response.status(),
        });
    }
    let reference = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|value| value.get("next").and_then(|v| v.as_str()).map(String::from));
    Ok(Receipt {
        provider: "formspree",
        reference,
    })
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json(endpoint: &str, _body: &serde_json::Value) -> Result<Receipt, DeliveryError> {
    Err(DeliveryError::Transport(format!(
        "HTTP delivery to {endpoint} is only available in the browser"
    )))
}

/// Which provider backs the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailerConfig {
    Simulated,
    Formspree { endpoint: String },
}

impl MailerConfig {
    /// Read the provider from the build environment: set
    /// `LEANO_FORMSPREE_ENDPOINT` at compile time to post to Formspree.
    pub fn from_build_env() -> Self {
        Self::from_endpoint(option_env!("LEANO_FORMSPREE_ENDPOINT"))
    }

    pub fn from_endpoint(endpoint: Option<&str>) -> Self {
        match endpoint.map(str::trim) {
            Some(endpoint) if endpoint.starts_with("https://") => Self::Formspree {
                endpoint: endpoint.to_string(),
            },
            Some(other) if !other.is_empty() => {
                tracing::warn!("[mailer] ignoring non-https endpoint {other:?}");
                Self::Simulated
            }
            _ => Self::Simulated,
        }
    }

    pub fn build(self) -> Rc<dyn Mailer> {
        match self {
            Self::Simulated => Rc::new(SimulatedMailer::default()),
            Self::Formspree { endpoint } => Rc::new(FormspreeMailer { endpoint }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::filled_form;

    #[test]
    fn payload_carries_labels_and_optional_company() {
        let payload = InquiryPayload::from_form_at(&filled_form(), "2025-03-01T08:00:00Z");
        assert_eq!(payload.services, "Armed Response, CCTV Surveillance");
        assert_eq!(payload.company.as_deref(), Some("Mokoena Logistics"));
        assert_eq!(payload.subject(), "Security Inquiry from Naledi Mokoena");

        let mut form = filled_form();
        form.company = "   ".into();
        form.newsletter = false;
        let payload = InquiryPayload::from_form_at(&form, "2025-03-01T08:00:00Z");
        assert_eq!(payload.company, None);

        let params = payload.template_params();
        assert_eq!(params["company"], "Not provided");
        assert_eq!(params["newsletter"], "Not subscribed");
        assert_eq!(params["to_email"], CONTACT_EMAIL);
        assert_eq!(params["date"], "2025-03-01T08:00:00Z");
    }

    #[test]
    fn formspree_body_shape() {
        let body = InquiryPayload::from_form_at(&filled_form(), "t").formspree_body();
        assert_eq!(body["_replyto"], "naledi@example.co.za");
        assert_eq!(body["_subject"], "Security Inquiry from Naledi Mokoena");
        assert_eq!(body["newsletter"], "yes");
        assert_eq!(body["phone"], "068 379 4897");
    }

    #[test]
    fn simulated_mailer_succeeds() {
        let mailer = SimulatedMailer { delay_ms: 0 };
        let receipt = futures::executor::block_on(
            mailer.send(InquiryPayload::from_form_at(&filled_form(), "t")),
        )
        .unwrap();
        assert_eq!(receipt.provider, "simulated");
    }

    #[test]
    fn config_requires_https_endpoint() {
        assert_eq!(MailerConfig::from_endpoint(None), MailerConfig::Simulated);
        assert_eq!(MailerConfig::from_endpoint(Some("  ")), MailerConfig::Simulated);
        assert_eq!(
            MailerConfig::from_endpoint(Some("http://formspree.io/f/abc")),
            MailerConfig::Simulated
        );
        assert_eq!(
            MailerConfig::from_endpoint(Some("https://formspree.io/f/abc")),
            MailerConfig::Formspree {
                endpoint: "https://formspree.io/f/abc".into()
            }
        );
        assert_eq!(MailerConfig::Simulated.build().provider(), "simulated");
    }
}
