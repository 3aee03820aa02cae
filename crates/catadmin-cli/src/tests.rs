use catadmin_core::{
    Attribute, DraftError, PageInfo, ProductDraft, ProductListing, ProductSummary, SequentialIds,
};
use rust_decimal::Decimal;

use super::*;
use crate::products::{build_draft, render_listing, CreateRequest};
use crate::skus::{add_specs, render_sku_table};

fn catalog() -> Vec<Attribute> {
    vec![
        Attribute {
            id: "a1".to_string(),
            name: "Color".to_string(),
            values: vec!["Red".to_string(), "Blue".to_string(), "Green".to_string()],
        },
        Attribute {
            id: "a2".to_string(),
            name: "Size".to_string(),
            values: vec!["S".to_string(), "M".to_string()],
        },
    ]
}

fn spec(name: &str, values: &[&str]) -> AttributeSpec {
    AttributeSpec {
        name: name.to_string(),
        values: values.iter().map(|v| (*v).to_string()).collect(),
    }
}

fn request(attributes: Vec<AttributeSpec>) -> CreateRequest {
    CreateRequest {
        name: "T-Shirt".to_string(),
        attributes,
        prices: vec![],
        stocks: vec![],
    }
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

#[test]
fn parses_attributes_list_command() {
    let cli = Cli::try_parse_from(["catadmin", "attributes", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Attributes {
            command: AttributeCommands::List
        }
    ));
}

#[test]
fn parses_attributes_create_with_repeated_values() {
    let cli = Cli::try_parse_from([
        "catadmin", "attributes", "create", "--name", "Color", "--value", "Red", "--value", "Blue",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Attributes {
            command: AttributeCommands::Create { ref name, ref values }
        } if name == "Color" && values == &vec!["Red".to_string(), "Blue".to_string()]
    ));
}

#[test]
fn products_list_defaults_to_first_page() {
    let cli = Cli::try_parse_from(["catadmin", "products", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Products {
            command: ProductCommands::List { page: 1 }
        }
    ));
}

#[test]
fn parses_products_create_with_selections_and_edits() {
    let cli = Cli::try_parse_from([
        "catadmin",
        "products",
        "create",
        "--name",
        "T-Shirt",
        "--attribute",
        "Color=Red,Blue",
        "--attribute",
        "Size=S",
        "--price",
        "Red / S=9.99",
        "--stock",
        "Blue / S=4",
        "--dry-run",
    ])
    .unwrap();

    let Commands::Products {
        command:
            ProductCommands::Create {
                name,
                attributes,
                prices,
                stocks,
                dry_run,
            },
    } = cli.command
    else {
        panic!("expected products create");
    };

    assert_eq!(name, "T-Shirt");
    assert_eq!(attributes, vec![spec("Color", &["Red", "Blue"]), spec("Size", &["S"])]);
    assert_eq!(prices[0].model, "Red / S");
    assert_eq!(prices[0].price, Decimal::new(999, 2));
    assert_eq!(stocks[0].stock, 4);
    assert!(dry_run);
}

#[test]
fn products_create_rejects_malformed_attribute() {
    let result = Cli::try_parse_from([
        "catadmin",
        "products",
        "create",
        "--name",
        "T-Shirt",
        "--attribute",
        "Color",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_skus_preview() {
    let cli =
        Cli::try_parse_from(["catadmin", "skus", "preview", "--attribute", "Color=Red"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Skus {
            command: SkuCommands::Preview { ref attributes }
        } if attributes.len() == 1
    ));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["catadmin"]).is_err());
}

// ---------------------------------------------------------------------------
// Draft construction
// ---------------------------------------------------------------------------

#[test]
fn build_draft_generates_matrix_and_applies_edits() {
    let mut draft = ProductDraft::with_ids(SequentialIds::default());
    let mut req = request(vec![spec("Color", &["Red", "Blue"]), spec("Size", &["S", "M"])]);
    req.prices = vec![crate::args::parse_model_price("Red / S=9.99").unwrap()];
    req.stocks = vec![crate::args::parse_model_stock("Blue / M=7").unwrap()];

    build_draft(&mut draft, &catalog(), &req).unwrap();

    assert_eq!(
        draft.sku_models(),
        vec!["Red / S", "Red / M", "Blue / S", "Blue / M"]
    );
    assert_eq!(draft.skus()[0].price, Decimal::new(999, 2));
    assert_eq!(draft.skus()[3].stock, 7);
    assert_eq!(draft.name(), "T-Shirt");
}

#[test]
fn build_draft_rejects_unknown_attribute() {
    let mut draft = ProductDraft::with_ids(SequentialIds::default());
    let err = build_draft(&mut draft, &catalog(), &request(vec![spec("Weight", &["1kg"])]))
        .unwrap_err();
    assert!(err.to_string().contains("Weight"));
}

#[test]
fn build_draft_rejects_value_outside_attribute() {
    let mut draft = ProductDraft::with_ids(SequentialIds::default());
    let err = build_draft(&mut draft, &catalog(), &request(vec![spec("Size", &["XL"])]))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DraftError>(),
        Some(DraftError::UnknownAttributeValue { .. })
    ));
}

#[test]
fn build_draft_rejects_repeated_attribute() {
    let mut draft = ProductDraft::with_ids(SequentialIds::default());
    let err = build_draft(
        &mut draft,
        &catalog(),
        &request(vec![spec("Color", &["Red"]), spec("Color", &["Blue"])]),
    )
    .unwrap_err();
    assert_eq!(
        err.downcast_ref::<DraftError>(),
        Some(&DraftError::DuplicateAttribute("Color".to_string()))
    );
    assert_eq!(draft.sku_models(), vec!["Red"]);
}

#[test]
fn build_draft_rejects_price_for_missing_model() {
    let mut draft = ProductDraft::with_ids(SequentialIds::default());
    let mut req = request(vec![spec("Color", &["Red"])]);
    req.prices = vec![crate::args::parse_model_price("Blue=1").unwrap()];
    let err = build_draft(&mut draft, &catalog(), &req).unwrap_err();
    assert!(err.to_string().contains("Blue"));
}

#[test]
fn add_specs_rejects_empty_value_list() {
    let mut draft = ProductDraft::with_ids(SequentialIds::default());
    let err = add_specs(&mut draft, &[spec("Color", &[])]).unwrap_err();
    assert_eq!(
        err.downcast_ref::<DraftError>(),
        Some(&DraftError::EmptyValueSelection("Color".to_string()))
    );
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn empty_sku_table_renders_explicit_state() {
    assert_eq!(render_sku_table(&[]), "No SKUs generated.");
}

#[test]
fn sku_table_lists_models_in_order() {
    let mut draft = ProductDraft::with_ids(SequentialIds::default());
    add_specs(&mut draft, &[spec("Color", &["Red", "Blue"])]).unwrap();
    let table = render_sku_table(draft.skus());
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("MODEL"));
    assert!(lines[1].starts_with("Red"));
    assert!(lines[2].starts_with("Blue"));
}

#[test]
fn empty_listing_renders_no_products() {
    let info = PageInfo::new(1, 10, 0);
    assert_eq!(
        render_listing(&ProductListing::default(), &info),
        "No products found."
    );
}

#[test]
fn listing_numbers_rows_and_shows_page_footer() {
    let listing = ProductListing {
        products: vec![ProductSummary {
            id: "p11".to_string(),
            name: String::new(),
            count_of_skus: 0,
        }],
        total_items: 11,
    };
    let info = PageInfo::new(2, 10, 11);
    let rendered = render_listing(&listing, &info);
    assert!(rendered.contains("  11  ---"));
    assert!(rendered.ends_with("Page 2 of 2"));
}
