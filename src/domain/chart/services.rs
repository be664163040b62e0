use url::form_urlencoded;

use super::value_objects::{QueryEncoding, Symbol};

/// Query parameter carrying the symbol
pub const SYMBOL_PARAM: &str = "symbol";

/// Builds `<endpoint>?symbol=<value>`.
///
/// With [`QueryEncoding::Raw`] the value is appended verbatim, so reserved
/// characters such as `&` or `#` change the meaning of the query. That is
/// the long-standing behavior of the page and stays the default.
pub fn build_chart_url(endpoint: &str, symbol: &Symbol, encoding: QueryEncoding) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    let value = match encoding {
        QueryEncoding::Raw => symbol.value().to_string(),
        QueryEncoding::Percent => form_urlencoded::byte_serialize(symbol.value().as_bytes()).collect(),
    };
    format!("{endpoint}{separator}{SYMBOL_PARAM}={value}")
}
