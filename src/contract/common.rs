//! Common helpers for contract rendering.

pub const CONTRACT_MIME_TYPE: &str = "application/pdf";

/// Download name proposed for contract number `number`.
pub fn contract_filename(number: u64) -> String {
    format!("Sales_Contract_{}.pdf", number)
}

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\n', r"\n")
        .replace('\r', r"\r")
        .replace('\t', r"\t")
}

/// Typst array literal of escaped strings. One-element arrays need the trailing comma.
pub fn typst_string_array(values: &[String]) -> String {
    if values.is_empty() {
        return "()".to_string();
    }

    let items: Vec<String> = values
        .iter()
        .map(|v| format!("\"{}\"", escape_typst_string(v)))
        .collect();
    format!("({},)", items.join(", "))
}
