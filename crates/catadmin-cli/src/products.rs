//! Product command handlers.

use anyhow::Context;

use catadmin_client::CatalogClient;
use catadmin_core::{
    AppConfig, Attribute, DraftEvent, IdSource, PageInfo, ProductDraft, ProductListing,
};

use crate::args::{AttributeSpec, ModelPrice, ModelStock};
use crate::skus::render_sku_table;

/// Everything `products create` was asked to put into the draft.
#[derive(Debug, Clone)]
pub(crate) struct CreateRequest {
    pub name: String,
    pub attributes: Vec<AttributeSpec>,
    pub prices: Vec<ModelPrice>,
    pub stocks: Vec<ModelStock>,
}

/// Drives `draft` through the edits described by `request`, resolving each
/// attribute against the catalog's definitions.
///
/// # Errors
///
/// Returns an error naming the offending argument if an attribute is not in
/// the catalog, a value does not belong to its attribute, an attribute is
/// repeated, or a price/stock targets a model that was not generated.
pub(crate) fn build_draft<I: IdSource>(
    draft: &mut ProductDraft<I>,
    catalog: &[Attribute],
    request: &CreateRequest,
) -> anyhow::Result<()> {
    draft.apply(DraftEvent::SetName(request.name.clone()))?;

    for spec in &request.attributes {
        let attribute = catalog
            .iter()
            .find(|a| a.name == spec.name)
            .with_context(|| format!("attribute \"{}\" does not exist", spec.name))?;
        draft.select_attribute(attribute, spec.values.as_slice())?;
    }

    for edit in &request.prices {
        let id = sku_id_for(draft, &edit.model)?;
        draft.apply(DraftEvent::SetPrice {
            id,
            price: edit.price,
        })?;
    }

    for edit in &request.stocks {
        let id = sku_id_for(draft, &edit.model)?;
        draft.apply(DraftEvent::SetStock {
            id,
            stock: edit.stock,
        })?;
    }

    Ok(())
}

fn sku_id_for<I: IdSource>(
    draft: &ProductDraft<I>,
    model: &str,
) -> anyhow::Result<catadmin_core::SkuId> {
    draft
        .skus()
        .iter()
        .find(|row| row.model == model)
        .map(|row| row.id.clone())
        .with_context(|| format!("no generated SKU has model \"{model}\""))
}

/// Renders one listing page: numbered rows continuing across pages, then a
/// page footer when there is more than one page.
pub(crate) fn render_listing(listing: &ProductListing, info: &PageInfo) -> String {
    if listing.products.is_empty() {
        return "No products found.".to_string();
    }

    let mut lines = vec![format!("{:>4}  {:<40} {:>5}", "ID", "NAME", "SKUS")];
    for (index, product) in listing.products.iter().enumerate() {
        let name = if product.name.is_empty() {
            "---"
        } else {
            product.name.as_str()
        };
        lines.push(format!(
            "{:>4}  {:<40} {:>5}",
            info.row_number(index),
            name,
            product.count_of_skus
        ));
    }

    if info.has_multiple_pages() {
        lines.push(format!("Page {} of {}", info.page, info.total_pages()));
    }
    lines.join("\n")
}

/// Print one page of the product listing.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub(crate) async fn run_list(config: &AppConfig, page: u32) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config).context("failed to build catalog client")?;
    let page = page.max(1);
    let listing = client
        .list_products(page, config.page_size)
        .await
        .with_context(|| format!("failed to fetch products page {page}"))?;

    let info = PageInfo::new(page, config.page_size, listing.total_items);
    println!("{}", render_listing(&listing, &info));
    Ok(())
}

/// Build a product draft from the command arguments, print its SKU table and
/// submit it.
///
/// When `dry_run` is `true` the table is printed and nothing is submitted.
///
/// # Errors
///
/// Returns an error if the attribute catalog cannot be fetched, the draft
/// rejects an edit, the name is blank, or the API rejects the product.
pub(crate) async fn run_create(
    config: &AppConfig,
    request: &CreateRequest,
    dry_run: bool,
) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config).context("failed to build catalog client")?;
    let catalog = client
        .list_attributes()
        .await
        .context("failed to load attributes for product form")?;

    let mut draft = ProductDraft::new();
    build_draft(&mut draft, &catalog, request)?;
    let submission = draft.to_submission()?;

    println!("{}", render_sku_table(draft.skus()));

    if dry_run {
        println!(
            "dry-run: would create product \"{}\" with {} SKUs",
            submission.name,
            submission.skus_ids.len()
        );
        return Ok(());
    }

    client
        .create_product(&submission)
        .await
        .with_context(|| format!("failed to save product \"{}\"", submission.name))?;

    println!("Product saved successfully!");
    Ok(())
}
