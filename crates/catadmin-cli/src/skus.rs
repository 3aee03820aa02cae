//! SKU table rendering and the offline `skus preview` command.

use catadmin_core::{IdSource, ProductDraft, SkuRow};

use crate::args::AttributeSpec;

/// Renders the SKU table, or the explicit empty-state line when no
/// attribute is selected.
pub(crate) fn render_sku_table(skus: &[SkuRow]) -> String {
    if skus.is_empty() {
        return "No SKUs generated.".to_string();
    }

    let width = skus
        .iter()
        .map(|row| row.model.chars().count())
        .max()
        .unwrap_or(0)
        .max("MODEL".len());

    let mut out = format!("{:<width$}  {:>10}  {:>8}", "MODEL", "PRICE", "STOCK");
    for row in skus {
        out.push('\n');
        out.push_str(&format!(
            "{:<width$}  {:>10}  {:>8}",
            row.model,
            row.price.round_dp(2).to_string(),
            row.stock
        ));
    }
    out
}

/// Adds each `--attribute` spec to `draft` in order. Attributes without a
/// catalog id (offline previews) use `local-<n>`.
pub(crate) fn add_specs<I: IdSource>(
    draft: &mut ProductDraft<I>,
    specs: &[AttributeSpec],
) -> anyhow::Result<()> {
    for (i, spec) in specs.iter().enumerate() {
        draft.add_attribute(format!("local-{}", i + 1), spec.name.as_str(), spec.values.clone())?;
    }
    Ok(())
}

/// Print the SKU matrix for the given selections without contacting the API.
///
/// # Errors
///
/// Returns an error if an attribute is repeated or has no values.
pub(crate) fn run_preview(specs: &[AttributeSpec]) -> anyhow::Result<()> {
    let mut draft = ProductDraft::with_ids(catadmin_core::SequentialIds::default());
    add_specs(&mut draft, specs)?;

    println!("{}", render_sku_table(draft.skus()));
    if !draft.has_no_skus() {
        println!("{} SKUs", draft.skus().len());
    }
    Ok(())
}
