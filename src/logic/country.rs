//! Country selection and display names
//!
//! The backend only understands a closed set of two-letter codes. The
//! selector shows them in a fixed order behind an empty "no selection" row.

/// Supported country codes with their display names, in selector order
pub const SUPPORTED_COUNTRIES: [(&str, &str); 6] = [
    ("us", "United States"),
    ("gb", "United Kingdom"),
    ("in", "India"),
    ("au", "Australia"),
    ("jp", "Japan"),
    ("fr", "France"),
];

/// Label for the empty selector row
pub const EMPTY_SELECTION_LABEL: &str = "Select a country";

/// Resolve a country code to its display name
///
/// Unknown codes come back uppercased, so the UI always has something to show.
///
/// # Examples
/// ```
/// use newstui::logic::country::country_name;
///
/// assert_eq!(country_name("jp"), "Japan");
/// assert_eq!(country_name("de"), "DE");
/// ```
pub fn country_name(code: &str) -> String {
    SUPPORTED_COUNTRIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// Number of rows in the selector, including the empty row
pub fn selector_len() -> usize {
    SUPPORTED_COUNTRIES.len() + 1
}

/// Country code at a selector row (row 0 is the empty selection)
pub fn code_at(index: usize) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| SUPPORTED_COUNTRIES.get(i))
        .map(|(code, _)| *code)
}

/// Selector row for a country code, if the code is supported
pub fn index_of(code: &str) -> Option<usize> {
    let code = code.to_lowercase();
    SUPPORTED_COUNTRIES
        .iter()
        .position(|(c, _)| *c == code)
        .map(|i| i + 1)
}
