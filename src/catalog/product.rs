//! Product rows as returned by the catalog read.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the products sheet.
///
/// Wire keys follow the sheet's column headers. Spreadsheet cells often come
/// back as text, so numeric text is read as a number for both price and
/// stock. A price that is neither decodes as `None`; such a stock decodes
/// as `0`.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::catalog::Product;
///
/// let product: Product =
///     serde_json::from_str(r#"{"Nome":"Mesa","Preço":120,"Descrição":"Carvalho","Stock":3}"#)
///         .unwrap();
///
/// assert_eq!(product.name.as_deref(), Some("Mesa"));
/// assert_eq!(product.price, Some(120.0));
/// assert_eq!(product.stock, 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product name.
    #[serde(rename = "Nome", default, deserialize_with = "text_or_none")]
    pub name: Option<String>,

    /// Unit price.
    #[serde(rename = "Preço", default, deserialize_with = "number_or_none")]
    pub price: Option<f64>,

    /// Free-form description.
    #[serde(rename = "Descrição", default, deserialize_with = "text_or_none")]
    pub description: Option<String>,

    /// Units in stock.
    #[serde(rename = "Stock", default, deserialize_with = "integer_or_zero")]
    pub stock: i64,
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn number_or_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|price| price.is_finite()))
}

#[allow(clippy::cast_possible_truncation)]
fn integer_or_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let whole = |f: f64| f.is_finite().then(|| f.trunc() as i64);
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole))
        }
        _ => None,
    }
    .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_row() {
        let product: Product = serde_json::from_str(
            r#"{"Nome":"Cadeira","Preço":45.5,"Descrição":"Pinho","Stock":12}"#,
        )
        .unwrap();

        assert_eq!(product.name.as_deref(), Some("Cadeira"));
        assert_eq!(product.price, Some(45.5));
        assert_eq!(product.description.as_deref(), Some("Pinho"));
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let product: Product = serde_json::from_str("{}").unwrap();

        assert_eq!(product, Product::default());
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_empty_cells_decode_leniently() {
        let product: Product = serde_json::from_str(
            r#"{"Nome":"Banco","Preço":"","Descrição":null,"Stock":""}"#,
        )
        .unwrap();

        assert_eq!(product.name.as_deref(), Some("Banco"));
        assert_eq!(product.price, None);
        assert_eq!(product.description, None);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_numeric_text_stock_is_parsed() {
        let product: Product = serde_json::from_str(r#"{"Stock":" 7 "}"#).unwrap();
        assert_eq!(product.stock, 7);

        let product: Product = serde_json::from_str(r#"{"Stock":"muitos"}"#).unwrap();
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_numeric_text_price_is_parsed() {
        let product: Product = serde_json::from_str(r#"{"Preço":" 12.50 "}"#).unwrap();
        assert_eq!(product.price, Some(12.5));

        let product: Product = serde_json::from_str(r#"{"Preço":"grátis"}"#).unwrap();
        assert_eq!(product.price, None);

        let product: Product = serde_json::from_str(r#"{"Preço":"NaN"}"#).unwrap();
        assert_eq!(product.price, None);
    }

    #[test]
    fn test_fractional_stock_is_truncated() {
        let product: Product = serde_json::from_str(r#"{"Stock":4.0}"#).unwrap();
        assert_eq!(product.stock, 4);
    }

    #[test]
    fn test_numeric_name_becomes_text() {
        let product: Product = serde_json::from_str(r#"{"Nome":1984}"#).unwrap();
        assert_eq!(product.name.as_deref(), Some("1984"));
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let product: Product =
            serde_json::from_str(r#"{"Nome":"Mesa","Categoria":"Sala"}"#).unwrap();
        assert_eq!(product.name.as_deref(), Some("Mesa"));
    }
}
