/// Convert a game title into its normalized, comparable form.
///
/// This is the identity key used to match scraped entries against catalog
/// blocks across runs and across scrapers:
///
/// 1. uppercase
/// 2. drop `(...)`, `[...]` and `{...}` annotations
/// 3. transliterate to plain ASCII
/// 4. trim surrounding spaces
/// 5. drop `- `, `.`, `,`, `!`, `?`, `'`, `"` and `-`
/// 6. `": "`, `":"` and `" "` become `_`
/// 7. `&` becomes `AND`
///
/// ```
/// use bsneo_core::util::normalize_name;
///
/// assert_eq!(normalize_name("The Legend of Zelda (USA)"), "THE_LEGEND_OF_ZELDA");
/// assert_eq!(normalize_name("Pokémon: Red & Blue"), "POKEMON_RED_AND_BLUE");
/// ```
pub fn normalize_name(name: &str) -> String {
    let upper = name.to_uppercase();
    let stripped = strip_annotations(&upper);
    let ascii = deunicode::deunicode(&stripped);
    let trimmed = ascii.trim_matches(' ');

    let mut removed = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // "- " goes as a unit so "A - B" becomes "A_B", not "A__B"
            '-' => {
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
            }
            '.' | ',' | '!' | '?' | '\'' | '"' => {}
            other => removed.push(other),
        }
    }

    let mut out = String::with_capacity(removed.len());
    let mut chars = removed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' => {
                if chars.peek() == Some(&' ') {
                    chars.next();
                }
                out.push('_');
            }
            ' ' => out.push('_'),
            '&' => out.push_str("AND"),
            other => out.push(other),
        }
    }
    out
}

/// Remove bracketed annotations.
///
/// Each opening bracket swallows everything up to the *last* matching
/// closing bracket on the line, so `A (x) B (y)` becomes `A `. An opening
/// bracket with no closing partner is kept as-is.
fn strip_annotations(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        let close = match chars[i] {
            '(' => Some(')'),
            '[' => Some(']'),
            '{' => Some('}'),
            _ => None,
        };
        if let Some(close) = close {
            if let Some(end) = chars[i + 1..].iter().rposition(|&c| c == close) {
                i += end + 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
