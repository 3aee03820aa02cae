pub mod app_config;
pub mod attributes;
pub mod combinator;
pub mod config;
pub mod draft;
pub mod paging;
pub mod sku;

pub use app_config::{AppConfig, Environment};
pub use attributes::{Attribute, AttributeSelection, NewAttribute, SelectionSet};
pub use combinator::{cartesian_product, combinations_for};
pub use config::{load_app_config, load_app_config_from_env};
pub use draft::{DraftEvent, ProductDraft, ProductSubmission, SkuPricing, SubmittedAttribute};
pub use paging::{PageInfo, ProductListing, ProductSummary};
pub use sku::{reconcile, IdSource, SequentialIds, SkuId, SkuRow, UuidIds, MODEL_SEPARATOR};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Rejections raised while editing a product draft or validating an
/// attribute definition. A rejected edit never changes the draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("attribute \"{0}\" is already added")]
    DuplicateAttribute(String),

    #[error("attribute \"{0}\" needs at least one selected value")]
    EmptyValueSelection(String),

    #[error("\"{value}\" is not a value of attribute \"{attribute}\"")]
    UnknownAttributeValue { attribute: String, value: String },

    #[error("no attribute at position {index} (selection has {len})")]
    AttributeIndexOutOfRange { index: usize, len: usize },

    #[error("no SKU with id {0}")]
    UnknownSku(SkuId),

    #[error("price must not be negative (got {0})")]
    NegativePrice(rust_decimal::Decimal),

    #[error("product name is required")]
    EmptyProductName,

    #[error("attribute name cannot be empty")]
    EmptyAttributeName,

    #[error("at least one value is required")]
    NoAttributeValues,
}
