//! Word-boundary insertion for declared constant names.

/// Converts a mixed-case identifier into its `_`-delimited lowercase form.
///
/// A separator goes before an uppercase character (never the first one) when
/// the next character is lowercase or the previous one is. Acronyms with no
/// lowercase neighbour stay a single token, and an acronym followed by a
/// capitalized word splits before that word's first letter:
///
/// ```
/// use enumlabel_core::casing::to_snake_label;
///
/// assert_eq!(to_snake_label("SnakeIDGoogle"), "snake_id_google");
/// assert_eq!(to_snake_label("OMGWTFBBQ"), "omgwtfbbq");
/// assert_eq!(to_snake_label("omg_wtf_bbq"), "omg_wtf_bbq");
/// ```
pub fn to_snake_label(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut out = String::with_capacity(identifier.len() + chars.len() / 2);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let prev_is_lower = chars[i - 1].is_lowercase();
            if next_is_lower || prev_is_lower {
                out.push('_');
            }
        }
        out.push(lower_char(c));
    }

    out
}

/// Uppercases `label` one character at a time.
///
/// Every character maps to exactly one character, so distinct labels of the
/// same length never merge through expansions such as `ß` -> `SS`.
pub fn to_upper_label(label: &str) -> String {
    label.chars().map(upper_char).collect()
}

/// Single-character lowercase mapping. A multi-character expansion keeps its
/// leading character (`İ` -> `i`).
fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Single-character uppercase mapping. A character whose uppercase form is
/// several characters stays as it is.
fn upper_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(only), None) => only,
        _ => c,
    }
}
