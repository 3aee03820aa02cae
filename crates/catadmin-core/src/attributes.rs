//! Attribute definitions as served by the catalog API, and the per-product
//! selection of attributes that drives SKU generation.

use serde::{Deserialize, Serialize};

use crate::DraftError;

/// An attribute as stored by the remote catalog, e.g. `Color` with
/// `["Red", "Blue"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Attribute {
    /// Builds a selection of `chosen` values from this attribute.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::UnknownAttributeValue`] if a chosen value is not
    /// one of this attribute's values, or [`DraftError::EmptyValueSelection`]
    /// if nothing was chosen.
    pub fn select<S: AsRef<str>>(&self, chosen: &[S]) -> Result<AttributeSelection, DraftError> {
        for value in chosen {
            let value: &str = value.as_ref();
            if !self.values.iter().any(|v| v == value) {
                return Err(DraftError::UnknownAttributeValue {
                    attribute: self.name.clone(),
                    value: value.to_string(),
                });
            }
        }

        AttributeSelection::new(
            self.id.clone(),
            self.name.clone(),
            chosen.iter().map(|c| c.as_ref().to_string()).collect(),
        )
    }
}

/// Payload for creating an attribute, validated the same way the attribute
/// form validates it before sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAttribute {
    pub name: String,
    pub values: Vec<String>,
}

impl NewAttribute {
    /// Trims the name and drops blank values.
    ///
    /// # Errors
    ///
    /// - [`DraftError::EmptyAttributeName`] when the name is blank.
    /// - [`DraftError::NoAttributeValues`] when no non-blank value remains.
    pub fn new<S: Into<String>>(name: &str, values: Vec<S>) -> Result<Self, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyAttributeName);
        }

        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|v| !v.trim().is_empty())
            .collect();
        if values.is_empty() {
            return Err(DraftError::NoAttributeValues);
        }

        Ok(Self {
            name: name.to_string(),
            values,
        })
    }
}

/// One attribute picked for a product, with the subset of its values that
/// should appear in the SKU matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSelection {
    pub attribute_id: String,
    /// Copied from the attribute when selected; later renames do not follow.
    pub name: String,
    values: Vec<String>,
}

impl AttributeSelection {
    /// Repeated values are collapsed, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyValueSelection`] if `values` is empty.
    pub fn new(
        attribute_id: impl Into<String>,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<Self, DraftError> {
        let name = name.into();
        if values.is_empty() {
            return Err(DraftError::EmptyValueSelection(name));
        }

        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        Ok(Self {
            attribute_id: attribute_id.into(),
            name,
            values: unique,
        })
    }

    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Ordered attribute selections for one product. Order matters: it decides
/// the position of each value inside a SKU model and which attribute varies
/// fastest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: Vec<AttributeSelection>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selection as the new last entry.
    ///
    /// # Errors
    ///
    /// - [`DraftError::EmptyValueSelection`] if the selection has no values.
    /// - [`DraftError::DuplicateAttribute`] if an entry with the same name is
    ///   already present.
    ///
    /// The set is left unchanged on error.
    pub fn add(&mut self, selection: AttributeSelection) -> Result<(), DraftError> {
        if selection.values.is_empty() {
            return Err(DraftError::EmptyValueSelection(selection.name));
        }
        if self.contains(&selection.name) {
            return Err(DraftError::DuplicateAttribute(selection.name));
        }
        self.entries.push(selection);
        Ok(())
    }

    /// Removes the entry at `index`; later entries shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::AttributeIndexOutOfRange`] if `index` is past
    /// the end.
    pub fn remove(&mut self, index: usize) -> Result<AttributeSelection, DraftError> {
        if index >= self.entries.len() {
            return Err(DraftError::AttributeIndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeSelection> {
        self.entries.iter()
    }

    /// The chosen value lists in selection order, ready for the combinator.
    #[must_use]
    pub fn value_sets(&self) -> Vec<&[String]> {
        self.entries.iter().map(AttributeSelection::values).collect()
    }
}
