use once_cell::sync::Lazy;
use regex::Regex;

/// A raw (identifier, name) pair as it appears in the source text,
/// before name normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub student_id: &'a str,
    pub raw_name: &'a str,
}

/// A student identifier: a literal `F` followed by exactly 10 ASCII digits.
static STUDENT_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"F[0-9]{10}").unwrap());

/// Scan document text for raw student records.
///
/// The pattern is an identifier (`F` + 10 ASCII digits), one or more
/// whitespace characters, then a greedy run of uppercase ASCII letters and
/// whitespace (the name field). Matching is non-overlapping and
/// left-to-right; the scan anchors on identifier occurrences, and a name
/// field never extends across the start of the next identifier.
///
/// An identifier with no trailing whitespace yields no record. A text with
/// no identifiers yields an empty vec — a normal outcome, not an error.
pub fn scan_raw_records(text: &str) -> Vec<RawRecord<'_>> {
    let ids: Vec<regex::Match> = STUDENT_ID_RE.find_iter(text).collect();

    let mut records = Vec::with_capacity(ids.len());
    for (i, id) in ids.iter().enumerate() {
        let window_end = ids.get(i + 1).map_or(text.len(), |next| next.start());
        let window = &text[id.end()..window_end];
        if let Some(raw_name) = capture_name_field(window) {
            records.push(RawRecord {
                student_id: id.as_str(),
                raw_name,
            });
        }
    }
    records
}

/// Capture the name field from the text following an identifier.
///
/// The field is whitespace-separated from the identifier and admits only
/// uppercase ASCII letters and whitespace, so any lowercase letter, digit,
/// or punctuation terminates the capture at that point. A separator with no
/// letters after it still matches, producing a whitespace-only name that
/// normalizes to the empty string. Returns `None` when the identifier is
/// not followed by whitespace at all.
fn capture_name_field(window: &str) -> Option<&str> {
    let run_end = window
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_uppercase() || c.is_whitespace()))
        .map_or(window.len(), |(i, _)| i);
    let run = &window[..run_end];

    if !run.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    let ws_end = run
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(run.len(), |(i, _)| i);

    if ws_end < run.len() {
        return Some(&run[ws_end..]);
    }

    // Whitespace-only run: the separator keeps all but the final character,
    // which becomes the (empty-normalizing) name field.
    match run.char_indices().last() {
        Some((last_start, _)) if last_start > 0 => Some(&run[last_start..]),
        _ => None,
    }
}
