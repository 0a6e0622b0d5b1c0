//! Listing-form draft, required-field check, and submit flow.
//!
//! DESIGN
//! ======
//! The draft is edited field-by-field from input events and snapshotted into
//! a `NewItem` at submit time. The draft is reset after every post attempt,
//! successful or not, but kept intact when validation blocks the submit so
//! the user can fix it.
//!
//! The default required-field check compares each empty field's *value*
//! against the required names, so an empty value never matches and nothing
//! is ever reported missing. `ValidationMode::FieldKey` checks the field name
//! instead.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::fmt;

use leptos::prelude::*;

use crate::net::api::MarketplaceApi;
use crate::net::types::NewItem;

pub const REQUIRED_FIELDS: [&str; 2] = ["name", "image"];

pub const LISTED_MESSAGE: &str = "Item listed successfully";
pub const FAILED_MESSAGE: &str = "Failed to list this item";

/// How `Draft::missing_fields` matches empty fields against `REQUIRED_FIELDS`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Match on the field's current value.
    #[default]
    FieldValue,
    /// Match on the field's name.
    FieldKey,
}

/// Fields of the listing form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Category,
    Image,
}

impl DraftField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Category, Self::Image];

    /// Input `name` attribute for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Image => "image",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The in-progress item held by the listing form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft<F> {
    pub name: String,
    pub category: String,
    pub image: Option<F>,
}

impl<F> Default for Draft<F> {
    fn default() -> Self {
        Self { name: String::new(), category: String::new(), image: None }
    }
}

impl<F> Draft<F> {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<F: Clone> Draft<F> {
    /// Overwrite a text field by its input name.
    pub fn set_text(&mut self, field_name: &str, value: String) {
        match DraftField::from_name(field_name) {
            Some(DraftField::Name) => self.name = value,
            Some(DraftField::Category) => self.category = value,
            Some(DraftField::Image) | None => {
                log::debug!("ignoring text input for field {field_name:?}");
            }
        }
    }

    /// Keep the first file of a selection; an empty selection clears it.
    pub fn set_image(&mut self, files: impl IntoIterator<Item = F>) {
        self.image = files.into_iter().next();
    }

    fn is_blank(&self, field: DraftField) -> bool {
        match field {
            DraftField::Name => self.name.is_empty(),
            DraftField::Category => self.category.is_empty(),
            DraftField::Image => self.image.is_none(),
        }
    }

    /// Textual value of a field; files have none.
    fn text_value(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Name => Some(&self.name),
            DraftField::Category => Some(&self.category),
            DraftField::Image => None,
        }
    }

    /// Blank fields that count as required under `mode`, in display order.
    pub fn missing_fields(&self, mode: ValidationMode) -> Vec<DraftField> {
        DraftField::ALL
            .into_iter()
            .filter(|&field| {
                self.is_blank(field)
                    && match mode {
                        ValidationMode::FieldValue => self
                            .text_value(field)
                            .is_some_and(|value| REQUIRED_FIELDS.contains(&value)),
                        ValidationMode::FieldKey => REQUIRED_FIELDS.contains(&field.as_str()),
                    }
            })
            .collect()
    }

    /// Validate and snapshot the draft for posting.
    ///
    /// # Errors
    ///
    /// Returns the missing fields when validation blocks the submit.
    pub fn prepare_submit(&self, mode: ValidationMode) -> Result<NewItem<F>, MissingFields> {
        let missing = self.missing_fields(mode);
        if !missing.is_empty() {
            return Err(MissingFields(missing));
        }
        Ok(NewItem {
            name: self.name.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        })
    }
}

/// Fields that blocked a submit. Displays as the alert text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingFields(pub Vec<DraftField>);

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.as_str()).collect();
        write!(f, "Missing fields: {}", names.join(", "))
    }
}

/// Result of one post attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Listed,
    Failed,
}

impl SubmitOutcome {
    pub fn alert_message(self) -> &'static str {
        match self {
            Self::Listed => LISTED_MESSAGE,
            Self::Failed => FAILED_MESSAGE,
        }
    }
}

/// Post a validated item. Failures are logged and folded into the outcome.
pub async fn submit_listing<A: MarketplaceApi>(api: &A, item: &NewItem<A::File>) -> SubmitOutcome {
    match api.post_item(item).await {
        Ok(()) => {
            log::debug!("POST success: {}", item.name);
            SubmitOutcome::Listed
        }
        Err(e) => {
            log::error!("POST error: {e}");
            SubmitOutcome::Failed
        }
    }
}

/// Where the form keeps its draft between edits.
pub trait DraftStore {
    fn reset_draft(&self);
}

impl<F: 'static> DraftStore for RwSignal<Draft<F>, LocalStorage> {
    fn reset_draft(&self) {
        self.update(Draft::reset);
    }
}

/// Post a validated item and close out the attempt.
///
/// Whatever the outcome: alert it, run `on_completed`, then reset the draft.
pub async fn finish_listing<A, S>(
    api: &A,
    item: &NewItem<A::File>,
    store: &S,
    alert: impl FnOnce(&str),
    on_completed: impl FnOnce(),
) -> SubmitOutcome
where
    A: MarketplaceApi,
    S: DraftStore + ?Sized,
{
    let outcome = submit_listing(api, item).await;
    alert(outcome.alert_message());
    on_completed();
    store.reset_draft();
    outcome
}
