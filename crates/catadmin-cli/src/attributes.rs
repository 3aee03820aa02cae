//! Attribute command handlers.

use anyhow::Context;

use catadmin_client::CatalogClient;
use catadmin_core::{AppConfig, Attribute, NewAttribute};

/// One display line per attribute: name, then its values joined with `", "`
/// or `---` when it has none.
pub(crate) fn format_attribute_row(attribute: &Attribute) -> String {
    let values = if attribute.values.is_empty() {
        "---".to_string()
    } else {
        attribute.values.join(", ")
    };
    format!("{:<24} {values}", attribute.name)
}

/// Print every attribute known to the catalog.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the request fails.
pub(crate) async fn run_list(config: &AppConfig) -> anyhow::Result<()> {
    let client = CatalogClient::from_config(config).context("failed to build catalog client")?;
    let attributes = client
        .list_attributes()
        .await
        .context("failed to fetch attributes")?;

    if attributes.is_empty() {
        println!("No attributes found.");
        return Ok(());
    }

    println!("{:<24} VALUES", "NAME");
    for attribute in &attributes {
        println!("{}", format_attribute_row(attribute));
    }
    Ok(())
}

/// Validate and create one attribute.
///
/// # Errors
///
/// Returns an error if the name is blank, no non-blank value was given, or
/// the API rejects the attribute.
pub(crate) async fn run_create(
    config: &AppConfig,
    name: &str,
    values: Vec<String>,
) -> anyhow::Result<()> {
    let payload = NewAttribute::new(name, values)?;

    let client = CatalogClient::from_config(config).context("failed to build catalog client")?;
    let created = client
        .create_attribute(&payload)
        .await
        .with_context(|| format!("failed to create attribute \"{}\"", payload.name))?;

    println!("created attribute {} ({})", created.name, created.id);
    println!("{}", format_attribute_row(&created));
    Ok(())
}
