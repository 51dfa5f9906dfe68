/// Normalize a raw name field into its display form.
///
/// Strips leading/trailing whitespace, collapses internal whitespace runs of
/// any length to a single space, and title-cases each word: first character
/// upper-cased, remaining characters lower-cased. Whitespace-only input
/// produces the empty string. Pure and total; idempotent.
pub fn format_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
