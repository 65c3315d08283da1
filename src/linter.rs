//! Source normalization.
//!
//! Classroom pseudocode rarely arrives in clean ASCII: textbooks print `≤`
//! and `←`, scans carry box-drawing indentation bars, word processors smarten
//! quotes, and Romanian keyboards add diacritics. This pass folds all of that
//! into the plain forms the lexer recognizes, so pasted exercises run as-is.
//! It runs automatically before lexing and is also exposed on the CLI.

/// Replacement table, applied longest-match-first at every position.
///
/// The order of entries does not matter; [`normalize`] always picks the
/// longest key matching at the current position.
const REPLACEMENTS: &[(&str, &str)] = &[// Symbols
                                        ("\u{2264}", "<="), // ≤
                                        ("\u{2260}", "!="), // ≠
                                        ("\u{2265}", ">="), // ≥
                                        ("\u{2190}", "<-"), // ←
                                        ("\u{2192}", "->"), // →
                                        ("\u{25a0}", "sf"), // ■
                                        ("<--->", "<->"),
                                        // Indentation bars
                                        ("\u{2502} ", "    "),
                                        ("\u{2502}", "    "),
                                        ("| ", "    "),
                                        ("|", "    "),
                                        // Quotes
                                        ("\u{2019}", "'"),
                                        ("\u{2018}", "'"),
                                        ("\u{201d}", "\""),
                                        ("\u{201e}", "\""),
                                        ("\u{201c}", "\""),
                                        // Box drawing
                                        ("\u{250c}", ""),
                                        ("\u{2514}", ""),
                                        // Romanian diacritics
                                        ("\u{103}", "a"), // ă
                                        ("\u{e2}", "a"),  // â
                                        ("\u{ee}", "i"),  // î
                                        ("\u{219}", "s"), // ș
                                        ("\u{15f}", "s"), // ş
                                        ("\u{21b}", "t"), // ț
                                        ("\u{163}", "t")  /* ţ */];

/// Normalizes pseudocode source to the ASCII forms the lexer expects.
///
/// Scans the input left to right; at each position the longest matching
/// replacement key is substituted, otherwise the character is copied
/// through. The result always ends with a newline.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The normalized source.
///
/// # Example
/// ```
/// use pseudocod::linter::normalize;
///
/// assert_eq!(normalize("x \u{2190} 5"), "x <- 5\n");
/// assert_eq!(normalize("daca x \u{2264} 3 atunci"),
///            "daca x <= 3 atunci\n");
/// ```
#[must_use]
pub fn normalize(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(ch) = rest.chars().next() {
        match longest_replacement(rest) {
            Some((from, to)) => {
                result.push_str(to);
                rest = &rest[from.len()..];
            },
            None => {
                result.push(ch);
                rest = &rest[ch.len_utf8()..];
            },
        }
    }

    if !result.ends_with('\n') {
        result.push('\n');
    }

    result
}

/// Finds the longest replacement key that is a prefix of `rest`.
fn longest_replacement(rest: &str) -> Option<(&'static str, &'static str)> {
    REPLACEMENTS.iter()
                .filter(|(from, _)| rest.starts_with(from))
                .max_by_key(|(from, _)| from.len())
                .copied()
}
