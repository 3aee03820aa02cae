//! SKU rows and reconciliation of a freshly generated combination list
//! against the rows a user has already edited.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Joins the chosen values of a combination into its model string.
pub const MODEL_SEPARATOR: &str = " / ";

/// Opaque SKU row identifier, stable for as long as the row's combination
/// keeps existing in the draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkuId(String);

impl SkuId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh SKU identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> SkuId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> SkuId {
        SkuId(Uuid::new_v4().to_string())
    }
}

/// `sku-1`, `sku-2`, ... Deterministic, for previews and tests.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    issued: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> SkuId {
        self.issued += 1;
        SkuId(format!("sku-{}", self.issued))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkuRow {
    pub id: SkuId,
    /// One chosen value per selected attribute, in selection order.
    pub values: Vec<String>,
    /// `values` joined with [`MODEL_SEPARATOR`], e.g. `"Red / S"`.
    pub model: String,
    pub price: Decimal,
    pub stock: u32,
}

impl SkuRow {
    fn fresh(id: SkuId, values: Vec<String>) -> Self {
        let model = values.join(MODEL_SEPARATOR);
        Self {
            id,
            values,
            model,
            price: Decimal::ZERO,
            stock: 0,
        }
    }
}

/// Produces the next SKU table for `combinations`, in their order.
///
/// Rows from `previous` whose combination is still present keep their id,
/// price and stock. Combinations seen for the first time get a row with an
/// id from `ids` and zero price and stock. Everything else is dropped.
///
/// Rows are matched on the combination's values rather than on the joined
/// model string, so a value that itself contains the separator cannot make
/// two different combinations collide.
pub fn reconcile(
    combinations: Vec<Vec<String>>,
    previous: Vec<SkuRow>,
    ids: &mut dyn IdSource,
) -> Vec<SkuRow> {
    let mut carried: HashMap<Vec<String>, SkuRow> = previous
        .into_iter()
        .map(|row| (row.values.clone(), row))
        .collect();

    let mut created = 0usize;
    let rows: Vec<SkuRow> = combinations
        .into_iter()
        .map(|values| match carried.remove(&values) {
            Some(existing) => existing,
            None => {
                created += 1;
                SkuRow::fresh(ids.next_id(), values)
            }
        })
        .collect();

    tracing::debug!(
        rows = rows.len(),
        created,
        dropped = carried.len(),
        "reconciled SKU table"
    );

    rows
}
