/// Case-folds a free-text tag and collapses stray whitespace and invisible characters.
pub(crate) fn normalize_tag(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}
