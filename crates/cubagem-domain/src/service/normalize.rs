//! Name normalization for lenient vehicle lookup

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Fold a name for comparison: compatibility decomposition, combining marks
/// stripped, lowercased and trimmed.
///
/// "Caminhão Truck" and "caminhao truck " normalize to the same string.
pub fn normalize_name(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(normalize_name("Caminhão Truck"), "caminhao truck");
        assert_eq!(normalize_name("Veículo 3/4"), "veiculo 3/4");
        assert_eq!(normalize_name("Van Utilitário"), "van utilitario");
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize_name("  FIORINO "), "fiorino");
    }

    #[test]
    fn test_compatibility_forms() {
        // fullwidth letters fold to ASCII under NFKD
        assert_eq!(normalize_name("ＶＵＣ"), "vuc");
    }

    #[test]
    fn test_plain_ascii_untouched() {
        assert_eq!(normalize_name("(hr)"), "(hr)");
    }
}
