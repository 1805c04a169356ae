//! ASCII folding for canonical strings.
//!
//! The WEB-SRM wire format is ASCII-only. Accented Latin letters common in
//! Québec French are mapped to their unaccented equivalent; any remaining
//! non-ASCII character (emoji, CJK, ...) is dropped with no replacement
//! character inserted.

/// Fold a string to its ASCII canonical form.
///
/// # Example
///
/// ```rust
/// use websrm_canonical::fold_ascii;
///
/// assert_eq!(fold_ascii("Café Montréal"), "Cafe Montreal");
/// assert_eq!(fold_ascii("🍕"), "");
/// ```
pub fn fold_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(mapped) = fold_char(c) {
            out.push_str(mapped);
        }
        // Unmapped non-ASCII is dropped.
    }
    out
}

/// Fixed folding table for Latin-1 accented letters plus the French
/// ligatures from Latin Extended-A.
fn fold_char(c: char) -> Option<&'static str> {
    let mapped = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'Æ' => "AE",
        'Ç' => "C",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ð' => "D",
        'Ñ' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' => "Y",
        'Þ' => "TH",
        'ß' => "ss",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'æ' => "ae",
        'ç' => "c",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ð' => "d",
        'ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'þ' => "th",
        'Œ' => "OE",
        'œ' => "oe",
        'Š' => "S",
        'š' => "s",
        'Ž' => "Z",
        'ž' => "z",
        'Ÿ' => "Y",
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(fold_ascii("Plain ASCII 123!"), "Plain ASCII 123!");
    }

    #[test]
    fn test_french_accents() {
        assert_eq!(fold_ascii("crème brûlée"), "creme brulee");
        assert_eq!(fold_ascii("Québec"), "Quebec");
        assert_eq!(fold_ascii("hors-d'œuvre"), "hors-d'oeuvre");
    }

    #[test]
    fn test_uppercase_accents() {
        assert_eq!(fold_ascii("ÉÈÊË"), "EEEE");
        assert_eq!(fold_ascii("ÆŒ"), "AEOE");
    }

    #[test]
    fn test_emoji_dropped_without_replacement() {
        assert_eq!(fold_ascii("Café Montréal 🍕"), "Cafe Montreal ");
    }

    #[test]
    fn test_cjk_dropped() {
        assert_eq!(fold_ascii("poutine 世界"), "poutine ");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(fold_ascii(""), "");
    }

    #[test]
    fn test_sharp_s() {
        assert_eq!(fold_ascii("straße"), "strasse");
    }
}
