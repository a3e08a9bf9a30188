//! Submission flow for the contact form.
//!
//! ```text
//! Idle ──begin──▶ (invalid) ──▶ Idle
//!   │
//!   └──begin──▶ Submitting ──settle──▶ Succeeded | Failed
//! ```
//!
//! Validation is a synchronous gate inside [`InquirySubmission::begin`]; the
//! send itself happens between `begin` and `settle`, owned by whoever drives
//! the flow (the form component, or [`submit`] in tests).

use super::draft::DraftStore;
use super::form::{ContactForm, FieldErrors};
use super::mailer::{DeliveryError, InquiryPayload, Mailer, Receipt};
use crate::core::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection {
    /// A send is already pending.
    InFlight,
    /// At least one field failed validation; nothing was sent.
    Invalid(FieldErrors),
}

#[derive(Debug, Clone)]
pub struct InquirySubmission<S> {
    phase: SubmitPhase,
    drafts: DraftStore<S>,
}

impl<S: KeyValueStore> InquirySubmission<S> {
    pub fn new(drafts: DraftStore<S>) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            drafts,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn drafts(&self) -> &DraftStore<S> {
        &self.drafts
    }

    /// Gate a submit attempt. On success the flow is `Submitting` and the
    /// caller must deliver the returned payload and then call [`Self::settle`].
    pub fn begin(&mut self, form: &ContactForm) -> Result<InquiryPayload, SubmitRejection> {
        if self.phase.is_busy() {
            return Err(SubmitRejection::InFlight);
        }

        let errors = form.validate();
        if !errors.is_empty() {
            self.phase = SubmitPhase::Idle;
            return Err(SubmitRejection::Invalid(errors));
        }

        self.phase = SubmitPhase::Submitting;
        Ok(InquiryPayload::from_form(form))
    }

    /// Apply the delivery outcome. A delivered inquiry removes the draft; a
    /// failed one keeps it so the visitor can retry without retyping.
    pub fn settle(&mut self, outcome: &Result<Receipt, DeliveryError>) -> SubmitPhase {
        self.phase = match outcome {
            Ok(receipt) => {
                tracing::info!("[contact] inquiry delivered via {}", receipt.provider);
                if let Err(err) = self.drafts.clear() {
                    tracing::warn!("[contact] delivered but could not clear draft: {err}");
                }
                SubmitPhase::Succeeded
            }
            Err(err) => {
                tracing::error!("[contact] inquiry delivery failed: {err}");
                SubmitPhase::Failed
            }
        };
        self.phase
    }
}

/// Drive one full attempt: gate, send, settle.
pub async fn submit<S: KeyValueStore, M: Mailer + ?Sized>(
    submission: &mut InquirySubmission<S>,
    mailer: &M,
    form: &ContactForm,
) -> Result<SubmitPhase, SubmitRejection> {
    let payload = submission.begin(form)?;
    let outcome = mailer.send(payload).await;
    Ok(submission.settle(&outcome))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;

    use super::*;
    use crate::contact::draft::Draft;
    use crate::contact::form::{filled_form, Field};
    use crate::core::config::DRAFT_STORAGE_KEY;
    use crate::core::storage::MemoryStore;

    #[derive(Default)]
    struct CountingMailer {
        sends: Rc<Cell<u32>>,
        fail: bool,
    }

    impl Mailer for CountingMailer {
        fn provider(&self) -> &'static str {
            "counting"
        }

        fn send(
            &self,
            _payload: InquiryPayload,
        ) -> LocalBoxFuture<'static, Result<Receipt, DeliveryError>> {
            self.sends.set(self.sends.get() + 1);
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    Err(DeliveryError::Rejected { status: 503 })
                } else {
                    Ok(Receipt {
                        provider: "counting",
                        reference: None,
                    })
                }
            })
        }
    }

    fn submission_with_draft(form: &ContactForm) -> (InquirySubmission<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let drafts = DraftStore::new(store.clone());
        drafts.save(form).unwrap();
        (InquirySubmission::new(drafts), store)
    }

    #[test]
    fn empty_required_field_never_sends() {
        let mut form = filled_form();
        form.name = "  ".into();
        let (mut submission, _) = submission_with_draft(&form);
        let mailer = CountingMailer::default();

        let result = block_on(submit(&mut submission, &mailer, &form));
        match result {
            Err(SubmitRejection::Invalid(errors)) => {
                assert_eq!(errors.message(Field::Name), Some("Name is required"));
            }
            other => panic!("expected validation rejection, got {other:?}"),
        }
        assert_eq!(mailer.sends.get(), 0);
        assert_eq!(submission.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn valid_form_sends_once_and_clears_draft() {
        let form = filled_form();
        let (mut submission, store) = submission_with_draft(&form);
        let mailer = CountingMailer::default();

        let phase = block_on(submit(&mut submission, &mailer, &form)).unwrap();
        assert_eq!(phase, SubmitPhase::Succeeded);
        assert_eq!(mailer.sends.get(), 1);
        assert!(!store.contains(DRAFT_STORAGE_KEY));
    }

    #[test]
    fn no_second_send_while_in_flight() {
        let form = filled_form();
        let (mut submission, _) = submission_with_draft(&form);

        let first = submission.begin(&form);
        assert!(first.is_ok());
        assert_eq!(submission.phase(), SubmitPhase::Submitting);
        assert_eq!(submission.begin(&form), Err(SubmitRejection::InFlight));

        submission.settle(&Ok(Receipt {
            provider: "test",
            reference: None,
        }));
        assert!(submission.begin(&form).is_ok());
    }

    #[test]
    fn failed_send_keeps_draft_for_retry() {
        let form = filled_form();
        let (mut submission, store) = submission_with_draft(&form);
        let mailer = CountingMailer {
            fail: true,
            ..CountingMailer::default()
        };

        let phase = block_on(submit(&mut submission, &mailer, &form)).unwrap();
        assert_eq!(phase, SubmitPhase::Failed);
        assert!(!phase.is_busy());

        let reloaded = DraftStore::new(store).load().expect("draft retained");
        assert_eq!(reloaded, Draft::capture(&form));
        assert_eq!(reloaded.to_form(), form);

        let retry = CountingMailer::default();
        let phase = block_on(submit(&mut submission, &retry, &form)).unwrap();
        assert_eq!(phase, SubmitPhase::Succeeded);
        assert_eq!(retry.sends.get(), 1);
    }
}
