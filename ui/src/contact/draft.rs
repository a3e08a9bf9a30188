//! Draft persistence for the contact form: a flat name -> value map stored as
//! JSON under a single key, written on every change and restored on load.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::form::{service_label, ContactForm, Field, FieldErrors};
use crate::core::config::DRAFT_STORAGE_KEY;
use crate::core::storage::{self, KeyValueStore, StorageError};

const CHECKED: &str = "on";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Draft(BTreeMap<String, String>);

impl Draft {
    /// Snapshot the form the way a browser serializes form data: every text
    /// control, the checkbox only when checked (`"on"`), the service list
    /// comma-joined and only when something is selected.
    pub fn capture(form: &ContactForm) -> Self {
        let mut entries = BTreeMap::new();
        for field in Field::ALL {
            match field {
                Field::Service => {
                    if !form.services.is_empty() {
                        entries.insert(field.name().to_string(), form.services.join(","));
                    }
                }
                Field::Newsletter => {
                    if form.newsletter {
                        entries.insert(field.name().to_string(), CHECKED.to_string());
                    }
                }
                other => {
                    if let Some(value) = form.text(other) {
                        entries.insert(other.name().to_string(), value.to_string());
                    }
                }
            }
        }
        Self(entries)
    }

    /// Write stored values back into `form` by name. Unknown names are skipped.
    pub fn restore_into(&self, form: &mut ContactForm) {
        for (name, value) in &self.0 {
            let Some(field) = Field::from_name(name) else {
                continue;
            };
            match field {
                Field::Newsletter => form.newsletter = value == CHECKED,
                Field::Service => {
                    form.services.clear();
                    for selected in value.split(',') {
                        if service_label(selected).is_some() {
                            form.set_service(selected, true);
                        }
                    }
                }
                other => form.set_text(other, value.as_str()),
            }
        }
    }

    pub fn to_form(&self) -> ContactForm {
        let mut form = ContactForm::default();
        self.restore_into(&mut form);
        form
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads and writes the draft through any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct DraftStore<S> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DRAFT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    /// Load the stored draft. A missing or unreadable draft is treated as none.
    pub fn load(&self) -> Option<Draft> {
        match storage::load_json::<Draft>(&self.store, self.key) {
            Ok(draft) => draft,
            Err(err) => {
                tracing::warn!("[draft] ignoring stored draft: {err}");
                None
            }
        }
    }

    pub fn save(&self, form: &ContactForm) -> Result<(), StorageError> {
        storage::save_json(&self.store, self.key, &Draft::capture(form))
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(self.key)
    }

    /// Apply one visitor edit to `field`: change the form, drop the error
    /// that field was showing and persist the new draft. Errors on other
    /// fields stay until those fields are edited or re-checked.
    pub fn record_edit(
        &self,
        form: &mut ContactForm,
        errors: &mut FieldErrors,
        field: Field,
        change: impl FnOnce(&mut ContactForm),
    ) -> Result<(), StorageError> {
        change(form);
        errors.clear(field);
        self.save(form)
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::filled_form;
    use crate::core::storage::MemoryStore;

    #[test]
    fn capture_uses_form_data_encodings() {
        let draft = Draft::capture(&filled_form());
        assert_eq!(draft.get("name"), Some("Naledi Mokoena"));
        assert_eq!(draft.get("service"), Some("armed-response,cctv"));
        assert_eq!(draft.get("newsletter"), Some("on"));
        assert_eq!(draft.get("urgency"), Some("priority"));

        let empty = Draft::capture(&ContactForm::default());
        assert_eq!(empty.get("service"), None);
        assert_eq!(empty.get("newsletter"), None);
        assert_eq!(empty.get("name"), Some(""));
    }

    #[test]
    fn restore_round_trips_through_storage() {
        let store = MemoryStore::new();
        let drafts = DraftStore::new(store.clone());
        let mut form = filled_form();
        form.services = vec!["armed-response".into(), "cctv".into()];
        drafts.save(&form).unwrap();
        assert!(store.contains(DRAFT_STORAGE_KEY));

        let restored = drafts.load().expect("draft stored").to_form();
        assert_eq!(restored, form);
    }

    #[test]
    fn restore_is_name_matched_and_tolerant() {
        let store = MemoryStore::new();
        store
            .set(
                DRAFT_STORAGE_KEY,
                r#"{"name":"Sipho","fax":"011","service":"cctv,drones,alarms","newsletter":"off"}"#,
            )
            .unwrap();
        let form = DraftStore::new(store).load().unwrap().to_form();
        assert_eq!(form.name, "Sipho");
        assert_eq!(form.services, vec!["cctv", "alarms"]);
        assert!(!form.newsletter);
        assert_eq!(form.email, "");
    }

    #[test]
    fn malformed_draft_loads_as_none() {
        let store = MemoryStore::new();
        store.set(DRAFT_STORAGE_KEY, "[1,2").unwrap();
        assert!(DraftStore::new(store).load().is_none());
    }

    #[test]
    fn clear_removes_the_key() {
        let store = MemoryStore::new();
        let drafts = DraftStore::new(store.clone());
        drafts.save(&filled_form()).unwrap();
        drafts.clear().unwrap();
        assert!(!store.contains(DRAFT_STORAGE_KEY));
        assert!(drafts.load().is_none());
    }
}
