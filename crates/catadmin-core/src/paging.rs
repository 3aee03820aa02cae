//! Page-numbered product listings.

use serde::{Deserialize, Serialize};

/// One product row as returned by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "countOfSKUs", default)]
    pub count_of_skus: u64,
}

/// Response of `GET /api/products`. Missing fields mean an empty page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    #[serde(default)]
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub total_items: u64,
}

/// Position within a 1-based, fixed-size page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
}

impl PageInfo {
    /// `page` and `per_page` are raised to 1 if zero.
    #[must_use]
    pub fn new(page: u32, per_page: u32, total_items: u64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
            total_items,
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(u64::from(self.per_page))
    }

    #[must_use]
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages() > 1
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        u64::from(self.page) >= self.total_pages()
    }

    /// The following page number, clamped to the last page.
    #[must_use]
    pub fn next(&self) -> u32 {
        let last = u32::try_from(self.total_pages().max(1)).unwrap_or(u32::MAX);
        self.page.saturating_add(1).min(last)
    }

    /// The preceding page number, clamped to 1.
    #[must_use]
    pub fn previous(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }

    /// 1-based position of the `index`-th row of this page in the full listing.
    #[must_use]
    pub fn row_number(&self, index: usize) -> u64 {
        let offset = u64::from(self.page - 1) * u64::from(self.per_page);
        offset + index as u64 + 1
    }
}
