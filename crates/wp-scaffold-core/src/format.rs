//! Identifier derivation from a human-entered project name
//!
//! All transforms are pure and deterministic. Each one folds the Scandinavian
//! letters handled by [`normalize_diacritics`] before doing anything else.

/// Replace å/ä/Å/Ä/ö/Ö with their unaccented equivalents
pub fn normalize_diacritics(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'å' | 'ä' => 'a',
            'Å' | 'Ä' => 'A',
            'ö' => 'o',
            'Ö' => 'O',
            other => other,
        })
        .collect()
}

/// Capitalized, underscore-joined identifier: `"my-cool theme!"` -> `"My_Cool_Theme"`
///
/// Every run of characters outside `[A-Za-z0-9]` acts as one separator
/// (underscores included), and empty segments are dropped. Only the first
/// character of each segment is upper-cased; the rest is kept as entered.
pub fn to_namespace(text: &str) -> String {
    normalize_diacritics(text)
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("_")
}

/// Lower-cased, every space replaced by an underscore: `"My Theme"` -> `"my_theme"`
pub fn to_underscore_slug(text: &str) -> String {
    join_lowercase_words(text, "_")
}

/// Lower-cased, every space replaced by a hyphen: `"My Theme"` -> `"my-theme"`
pub fn to_dash_slug(text: &str) -> String {
    join_lowercase_words(text, "-")
}

/// Short uppercase prefix: `"My Cool Theme"` -> `"MCT"`, `"Zzz"` -> `"ZZZ"`
///
/// Names of two or more space-separated words give an acronym. When that yields
/// fewer than two letters and the name is longer than two characters, the first
/// three characters are used instead. Anything shorter gives an empty prefix.
pub fn to_prefix(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').collect();

    let mut prefix = String::new();
    if words.len() >= 2 {
        for word in &words {
            if let Some(first) = word.chars().next() {
                prefix.extend(first.to_uppercase());
            }
        }
    }

    if prefix.chars().count() < 2 && text.chars().count() > 2 {
        prefix = text.chars().take(3).collect::<String>().to_uppercase();
    }

    normalize_diacritics(&prefix)
}

fn join_lowercase_words(text: &str, separator: &str) -> String {
    normalize_diacritics(text)
        .to_lowercase()
        .split(' ')
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
