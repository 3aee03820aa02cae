//! Value parsers for `NAME=...` style arguments.

use std::str::FromStr;

use rust_decimal::Decimal;

/// `--attribute Color=Red,Blue`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttributeSpec {
    pub name: String,
    pub values: Vec<String>,
}

/// `--price "Red / S=9.99"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ModelPrice {
    pub model: String,
    pub price: Decimal,
}

/// `--stock "Red / S=12"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ModelStock {
    pub model: String,
    pub stock: u32,
}

/// Splits `key=value` at the last `=`, so keys may themselves contain `=`.
fn split_assignment(raw: &str) -> Result<(&str, &str), String> {
    let (key, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got \"{raw}\""))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing name before '=' in \"{raw}\""));
    }
    Ok((key, value.trim()))
}

pub(crate) fn parse_attribute_spec(raw: &str) -> Result<AttributeSpec, String> {
    let (name, values) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=value1,value2, got \"{raw}\""))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing attribute name in \"{raw}\""));
    }

    let values: Vec<String> = values
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    Ok(AttributeSpec {
        name: name.to_string(),
        values,
    })
}

pub(crate) fn parse_model_price(raw: &str) -> Result<ModelPrice, String> {
    let (model, price) = split_assignment(raw)?;
    let price =
        Decimal::from_str(price).map_err(|e| format!("invalid price \"{price}\": {e}"))?;
    Ok(ModelPrice {
        model: model.to_string(),
        price,
    })
}

pub(crate) fn parse_model_stock(raw: &str) -> Result<ModelStock, String> {
    let (model, stock) = split_assignment(raw)?;
    let stock = stock
        .parse::<u32>()
        .map_err(|e| format!("invalid stock \"{stock}\": {e}"))?;
    Ok(ModelStock {
        model: model.to_string(),
        stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_spec_splits_and_trims_values() {
        let spec = parse_attribute_spec("Color= Red , Blue,,").unwrap();
        assert_eq!(spec.name, "Color");
        assert_eq!(spec.values, vec!["Red", "Blue"]);
    }

    #[test]
    fn attribute_spec_without_values_is_kept_empty() {
        let spec = parse_attribute_spec("Color=").unwrap();
        assert!(spec.values.is_empty());
    }

    #[test]
    fn attribute_spec_requires_equals() {
        assert!(parse_attribute_spec("Color").is_err());
        assert!(parse_attribute_spec("=Red").is_err());
    }

    #[test]
    fn model_price_keeps_separator_in_model() {
        let parsed = parse_model_price("Red / S=9.99").unwrap();
        assert_eq!(parsed.model, "Red / S");
        assert_eq!(parsed.price, Decimal::new(999, 2));
    }

    #[test]
    fn model_price_rejects_garbage() {
        assert!(parse_model_price("Red=cheap").is_err());
    }

    #[test]
    fn model_stock_parses_count() {
        let parsed = parse_model_stock("Blue / M=12").unwrap();
        assert_eq!(parsed.model, "Blue / M");
        assert_eq!(parsed.stock, 12);
    }

    #[test]
    fn model_stock_rejects_negative() {
        assert!(parse_model_stock("Blue=-1").is_err());
    }
}
