//! Reading the pre-filled product name from the order page's query string.

use std::borrow::Cow;

/// Query parameter carrying the product name from a catalog card.
pub const PRODUCT_QUERY_PARAM: &str = "produto";

/// Form field that receives the pre-filled product name.
pub const PRODUCT_FIELD: &str = "Produto";

/// Extracts the decoded `produto` parameter from a query string.
///
/// Accepts a bare query (`produto=Mesa`), a query with a leading `?`, or a
/// full URL or path; any `#fragment` is ignored. Values are decoded with
/// form rules: `+` is a space and `%XX` escapes are expanded (invalid UTF-8
/// is replaced). An empty value counts as absent.
///
/// # Example
///
/// ```rust
/// use sheet_storefront::order::product_from_query;
///
/// assert_eq!(
///     product_from_query("encomenda.html?produto=Mesa%20Grande").as_deref(),
///     Some("Mesa Grande")
/// );
/// assert_eq!(product_from_query("?outro=1"), None);
/// ```
#[must_use]
pub fn product_from_query(query: &str) -> Option<String> {
    let query = query.split('#').next().unwrap_or_default();
    let query = query.split_once('?').map_or(query, |(_, q)| q);

    query
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            (decode_component(key) == PRODUCT_QUERY_PARAM)
                .then(|| decode_component(parts.next().unwrap_or_default()).into_owned())
        })
        .next()
        .filter(|value| !value.is_empty())
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['+', '%']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}
