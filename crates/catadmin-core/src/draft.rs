//! The in-progress product form: a name, the selected attributes and the SKU
//! table derived from them.
//!
//! All edits go through [`ProductDraft::apply`]. An edit that changes the
//! selection recomputes and reconciles the SKU table before returning, so a
//! caller never sees a table that disagrees with the selection. A rejected
//! edit returns an error and leaves the draft untouched.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::attributes::{Attribute, AttributeSelection, SelectionSet};
use crate::combinator::combinations_for;
use crate::sku::{reconcile, IdSource, SkuId, SkuRow, UuidIds};
use crate::DraftError;

/// A single user edit to a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEvent {
    SetName(String),
    AddAttribute(AttributeSelection),
    /// Position in the selection, not an attribute id.
    RemoveAttribute(usize),
    SetPrice { id: SkuId, price: Decimal },
    SetStock { id: SkuId, stock: u32 },
}

#[derive(Debug, Clone)]
pub struct ProductDraft<I: IdSource = UuidIds> {
    name: String,
    selections: SelectionSet,
    skus: Vec<SkuRow>,
    ids: I,
}

impl Default for ProductDraft<UuidIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDraft<UuidIds> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(UuidIds)
    }
}

impl<I: IdSource> ProductDraft<I> {
    /// An empty draft that takes SKU ids from `ids`.
    pub fn with_ids(ids: I) -> Self {
        Self {
            name: String::new(),
            selections: SelectionSet::new(),
            skus: Vec::new(),
            ids,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    #[must_use]
    pub fn skus(&self) -> &[SkuRow] {
        &self.skus
    }

    /// `true` when no attribute is selected, so there is nothing to price.
    /// Front ends show this as "no SKUs generated".
    #[must_use]
    pub fn has_no_skus(&self) -> bool {
        self.skus.is_empty()
    }

    /// Applies one edit.
    ///
    /// # Errors
    ///
    /// - [`DraftError::DuplicateAttribute`] when adding an attribute whose
    ///   name is already selected.
    /// - [`DraftError::AttributeIndexOutOfRange`] when removing past the end.
    /// - [`DraftError::UnknownSku`] when editing a row that does not exist.
    /// - [`DraftError::NegativePrice`] for a price below zero.
    pub fn apply(&mut self, event: DraftEvent) -> Result<(), DraftError> {
        self.transition(event).map_err(rejected)
    }

    fn transition(&mut self, event: DraftEvent) -> Result<(), DraftError> {
        match event {
            DraftEvent::SetName(name) => {
                self.name = name;
            }
            DraftEvent::AddAttribute(selection) => {
                self.selections.add(selection)?;
                self.recompute();
            }
            DraftEvent::RemoveAttribute(index) => {
                self.selections.remove(index)?;
                self.recompute();
            }
            DraftEvent::SetPrice { id, price } => {
                if price.is_sign_negative() && !price.is_zero() {
                    return Err(DraftError::NegativePrice(price));
                }
                self.row_mut(&id)?.price = price;
            }
            DraftEvent::SetStock { id, stock } => {
                self.row_mut(&id)?.stock = stock;
            }
        }
        Ok(())
    }

    /// Selects `values` of an attribute and appends it to the selection.
    ///
    /// # Errors
    ///
    /// [`DraftError::EmptyValueSelection`] if `values` is empty, or
    /// [`DraftError::DuplicateAttribute`] if `name` is already selected.
    pub fn add_attribute(
        &mut self,
        attribute_id: impl Into<String>,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<(), DraftError> {
        let selection = AttributeSelection::new(attribute_id, name, values).map_err(rejected)?;
        self.apply(DraftEvent::AddAttribute(selection))
    }

    /// Selects `chosen` values of a catalog attribute and appends it to the
    /// selection.
    ///
    /// # Errors
    ///
    /// [`DraftError::UnknownAttributeValue`] if a value is not one of the
    /// attribute's values, plus the errors of [`Self::add_attribute`].
    pub fn select_attribute<S: AsRef<str>>(
        &mut self,
        attribute: &Attribute,
        chosen: &[S],
    ) -> Result<(), DraftError> {
        let selection = attribute.select(chosen).map_err(rejected)?;
        self.apply(DraftEvent::AddAttribute(selection))
    }

    /// Removes the selected attribute at `index`.
    ///
    /// # Errors
    ///
    /// [`DraftError::AttributeIndexOutOfRange`] if `index` is past the end.
    pub fn remove_attribute(&mut self, index: usize) -> Result<(), DraftError> {
        self.apply(DraftEvent::RemoveAttribute(index))
    }

    fn recompute(&mut self) {
        let combinations = combinations_for(&self.selections.value_sets());
        let previous = std::mem::take(&mut self.skus);
        self.skus = reconcile(combinations, previous, &mut self.ids);
    }

    fn row_mut(&mut self, id: &SkuId) -> Result<&mut SkuRow, DraftError> {
        self.skus
            .iter_mut()
            .find(|row| &row.id == id)
            .ok_or_else(|| DraftError::UnknownSku(id.clone()))
    }

    /// Model strings of the current table, in table order.
    #[must_use]
    pub fn sku_models(&self) -> Vec<&str> {
        self.skus.iter().map(|row| row.model.as_str()).collect()
    }

    /// Price and stock for each model, parallel to [`Self::sku_models`].
    #[must_use]
    pub fn sku_pricing(&self) -> Vec<SkuPricing> {
        self.skus
            .iter()
            .map(|row| SkuPricing {
                model: row.model.clone(),
                price: row.price,
                in_stock: row.stock,
            })
            .collect()
    }

    /// Packages the draft for the create-product endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyProductName`] if the name is blank after
    /// trimming.
    pub fn to_submission(&self) -> Result<ProductSubmission, DraftError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptyProductName);
        }

        Ok(ProductSubmission {
            name: name.to_string(),
            attributes: self
                .selections
                .iter()
                .map(|s| SubmittedAttribute {
                    name: s.name.clone(),
                    values: s.values().to_vec(),
                })
                .collect(),
            skus_ids: self.sku_models().into_iter().map(str::to_string).collect(),
            skus: self.sku_pricing(),
        })
    }
}

fn rejected(error: DraftError) -> DraftError {
    tracing::warn!(error = %error, "draft edit rejected");
    error
}

/// Body of `POST /api/products`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSubmission {
    pub name: String,
    pub attributes: Vec<SubmittedAttribute>,
    /// Model strings of every SKU, in table order.
    pub skus_ids: Vec<String>,
    pub skus: Vec<SkuPricing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedAttribute {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuPricing {
    pub model: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub in_stock: u32,
}

#[cfg(test)]
#[path = "draft_test.rs"]
mod tests;
