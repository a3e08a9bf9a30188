use std::rc::Rc;

use dioxus::prelude::*;

use super::draft::DraftStore;
use super::form::{ContactForm, Field, FieldErrors, SERVICE_OPTIONS, URGENCY_OPTIONS};
use super::mailer::{Mailer, MailerConfig};
use super::submission::{InquirySubmission, SubmitPhase, SubmitRejection};
use crate::core::storage::BrowserStorage;
use crate::t;

type Drafts = DraftStore<BrowserStorage>;

/// Shared editing behaviour for every control.
fn edit(
    mut form: Signal<ContactForm>,
    mut errors: Signal<FieldErrors>,
    field: Field,
    change: impl FnOnce(&mut ContactForm),
) {
    let saved = Drafts::new(BrowserStorage).record_edit(
        &mut form.write(),
        &mut errors.write(),
        field,
        change,
    );
    if let Err(err) = saved {
        tracing::warn!("[draft] could not save draft: {err}");
    }
}

fn check(form: Signal<ContactForm>, mut errors: Signal<FieldErrors>, field: Field) {
    let outcome = form.peek().validate_field(field);
    errors.with_mut(|e| e.record(field, outcome));
}

#[component]
fn FieldError(errors: Signal<FieldErrors>, field: Field) -> Element {
    let message = errors.read().message(field).unwrap_or_default();
    rsx! {
        span { class: "error-message", id: "{field.name()}-error", role: "alert", "{message}" }
    }
}

fn group_class(errors: &FieldErrors, field: Field) -> &'static str {
    if errors.get(field).is_some() {
        "form-group error"
    } else {
        "form-group"
    }
}

#[component]
fn TextInput(
    form: Signal<ContactForm>,
    errors: Signal<FieldErrors>,
    field: Field,
    label: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
    #[props(default)] required: bool,
) -> Element {
    let name = field.name();
    let value = form.read().text(field).unwrap_or_default().to_string();
    let class = group_class(&errors.read(), field);

    rsx! {
        div { class,
            label { r#for: "{name}",
                "{label}"
                if required { span { class: "required", " *" } }
            }
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                aria_describedby: "{name}-error",
                oninput: move |evt| edit(form, errors, field, |f| f.set_text(field, evt.value())),
                onblur: move |_| check(form, errors, field),
            }
            FieldError { errors, field }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBanner {
    Sent,
    Failed,
}

/// Contact form with inline validation, local draft persistence and a guarded
/// asynchronous send.
#[component]
pub fn ContactFormView() -> Element {
    let mut form = use_signal(|| match Drafts::new(BrowserStorage).load() {
        Some(draft) => {
            tracing::debug!("[draft] restoring saved contact draft");
            draft.to_form()
        }
        None => ContactForm::default(),
    });
    let mut errors = use_signal(FieldErrors::default);
    let mut status = use_signal(|| None::<StatusBanner>);
    let mut submission = use_signal(|| InquirySubmission::new(Drafts::new(BrowserStorage)));
    let mailer: Rc<dyn Mailer> = use_hook(|| {
        let mailer = MailerConfig::from_build_env().build();
        tracing::info!("[contact] delivering inquiries via {}", mailer.provider());
        mailer
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        status.set(None);

        let snapshot = form.peek().clone();
        let begun = submission.with_mut(|s| s.begin(&snapshot));
        let payload = match begun {
            Ok(payload) => payload,
            Err(SubmitRejection::InFlight) => return,
            Err(SubmitRejection::Invalid(found)) => {
                tracing::debug!("[contact] submit blocked by {} invalid field(s)", found.len());
                errors.set(found);
                return;
            }
        };

        errors.with_mut(FieldErrors::clear_all);
        let mailer = mailer.clone();
        spawn(async move {
            let outcome = mailer.send(payload).await;
            match submission.with_mut(|s| s.settle(&outcome)) {
                SubmitPhase::Succeeded => {
                    form.with_mut(ContactForm::reset);
                    status.set(Some(StatusBanner::Sent));
                }
                _ => status.set(Some(StatusBanner::Failed)),
            }
        });
    };

    let busy = submission.read().phase().is_busy();
    let urgency = form.read().urgency.clone();
    let newsletter = form.read().newsletter;
    let message = form.read().message.clone();
    let service_class = group_class(&errors.read(), Field::Service);

    rsx! {
        form { id: "contactForm", class: "contact-form", novalidate: true, onsubmit: on_submit,
            div { class: "form-row",
                TextInput { form, errors, field: Field::Name, label: t!("form-name"), required: true }
                TextInput {
                    form,
                    errors,
                    field: Field::Email,
                    label: t!("form-email"),
                    input_type: "email",
                    placeholder: "you@example.co.za",
                    required: true,
                }
            }
            div { class: "form-row",
                TextInput {
                    form,
                    errors,
                    field: Field::Phone,
                    label: t!("form-phone"),
                    input_type: "tel",
                    placeholder: "068 379 4897",
                    required: true,
                }
                TextInput { form, errors, field: Field::Company, label: t!("form-company") }
            }

            fieldset { class: "{service_class}",
                legend { {t!("form-services")} span { class: "required", " *" } }
                div { class: "service-options",
                    for option in SERVICE_OPTIONS.iter().copied() {
                        label { key: "{option.value}", class: "service-option",
                            input {
                                r#type: "checkbox",
                                name: "service",
                                value: "{option.value}",
                                checked: form.read().is_service_selected(option.value),
                                onchange: move |evt| {
                                    let selected = evt.checked();
                                    edit(form, errors, Field::Service, |f| f.set_service(option.value, selected));
                                },
                                onblur: move |_| check(form, errors, Field::Service),
                            }
                            span { "{option.label}" }
                        }
                    }
                }
                FieldError { errors, field: Field::Service }
            }

            div { class: "form-group",
                label { r#for: "urgency", {t!("form-urgency")} }
                select {
                    id: "urgency",
                    name: "urgency",
                    value: "{urgency}",
                    onchange: move |evt| edit(form, errors, Field::Urgency, |f| f.set_text(Field::Urgency, evt.value())),
                    for option in URGENCY_OPTIONS.iter().copied() {
                        option {
                            key: "{option.value}",
                            value: "{option.value}",
                            selected: urgency == option.value,
                            "{option.label}"
                        }
                    }
                }
            }

            div { class: group_class(&errors.read(), Field::Message),
                label { r#for: "message", {t!("form-message")} span { class: "required", " *" } }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "5",
                    value: "{message}",
                    aria_describedby: "message-error",
                    oninput: move |evt| edit(form, errors, Field::Message, |f| f.set_text(Field::Message, evt.value())),
                    onblur: move |_| check(form, errors, Field::Message),
                }
                FieldError { errors, field: Field::Message }
            }

            div { class: "form-group checkbox-group",
                label {
                    input {
                        r#type: "checkbox",
                        name: "newsletter",
                        checked: newsletter,
                        onchange: move |evt| {
                            let checked = evt.checked();
                            edit(form, errors, Field::Newsletter, |f| f.newsletter = checked);
                        },
                    }
                    span { {t!("form-newsletter")} }
                }
            }

            button { r#type: "submit", class: "submit-btn", disabled: busy,
                span { class: "btn-text",
                    if busy { {t!("form-sending")} } else { {t!("form-submit")} }
                }
                if busy {
                    span { class: "loading-spinner", aria_hidden: "true" }
                }
            }

            {match status() {
                Some(StatusBanner::Sent) => rsx! {
                    div { id: "successMessage", class: "form-message success", role: "status",
                        {t!("form-success")}
                    }
                },
                Some(StatusBanner::Failed) => rsx! {
                    div { id: "errorMessage", class: "form-message error", role: "alert",
                        {t!("form-failure")}
                    }
                },
                None => rsx! {},
            }}
        }
    }
}
