/// Lowercase, drop everything but Spanish letters and whitespace, split.
///
/// Dropped characters are removed in place, so `"día,"` becomes `"día"` and
/// `"hola,mundo"` a single token.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|ch| is_word_char(*ch) || ch.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

pub fn normalize_opt(text: Option<&str>) -> Vec<String> {
    text.map(normalize).unwrap_or_default()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || matches!(ch, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'ü')
}
