//! Contact page logic: validators, the form model, draft persistence,
//! inquiry delivery and the submission state machine. The view lives in
//! [`view`]; everything else here is free of rendering concerns.

pub mod draft;
pub mod form;
pub mod mailer;
pub mod submission;
pub mod validate;
mod view;

pub use form::{ContactForm, Field, FieldErrors};
pub use submission::{InquirySubmission, SubmitPhase};
pub use view::ContactFormView;
