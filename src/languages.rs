//! Supported-language table: read-only code -> display-name mapping.
//! Built once at process start; all lookups are case-insensitive.

use std::collections::HashMap;

/// Lowercase and trim a language code before any lookup or comparison.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Immutable language table shared by the whole broker.
pub struct LanguageTable {
    by_code: HashMap<String, String>,
}

impl LanguageTable {
    /// Build a table from arbitrary (code, name) pairs. Codes are normalized
    /// on the way in so later lookups stay case-insensitive.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let by_code = pairs
            .into_iter()
            .map(|(code, name)| (normalize_code(&code), name))
            .collect();
        Self { by_code }
    }

    /// The builtin Google Translate language list.
    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN
                .iter()
                .map(|&(code, name)| (code.to_string(), name.to_string())),
        )
    }

    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(&normalize_code(code))
    }

    /// Display name for a code, or "Unknown" if absent.
    pub fn name(&self, code: &str) -> &str {
        self.by_code
            .get(&normalize_code(code))
            .map(String::as_str)
            .unwrap_or("Unknown")
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.by_code
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

const BUILTIN: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("sq", "Albanian"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("hy", "Armenian"),
    ("az", "Azerbaijani"),
    ("eu", "Basque"),
    ("be", "Belarusian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("ceb", "Cebuano"),
    ("ny", "Chichewa"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("co", "Corsican"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("et", "Estonian"),
    ("tl", "Filipino"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fy", "Frisian"),
    ("gl", "Galician"),
    ("ka", "Georgian"),
    ("de", "German"),
    ("el", "Greek"),
    ("gu", "Gujarati"),
    ("ht", "Haitian Creole"),
    ("ha", "Hausa"),
    ("haw", "Hawaiian"),
    ("iw", "Hebrew"),
    ("hi", "Hindi"),
    ("hmn", "Hmong"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("ig", "Igbo"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("kn", "Kannada"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("ku", "Kurdish (Kurmanji)"),
    ("ky", "Kyrgyz"),
    ("lo", "Lao"),
    ("la", "Latin"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("lb", "Luxembourgish"),
    ("mk", "Macedonian"),
    ("mg", "Malagasy"),
    ("ms", "Malay"),
    ("ml", "Malayalam"),
    ("mt", "Maltese"),
    ("mi", "Maori"),
    ("mr", "Marathi"),
    ("mn", "Mongolian"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("ps", "Pashto"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("pa", "Punjabi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sm", "Samoan"),
    ("gd", "Scots Gaelic"),
    ("sr", "Serbian"),
    ("st", "Sesotho"),
    ("sn", "Shona"),
    ("sd", "Sindhi"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("es", "Spanish"),
    ("su", "Sundanese"),
    ("sw", "Swahili"),
    ("sv", "Swedish"),
    ("tg", "Tajik"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("xh", "Xhosa"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("zu", "Zulu"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_are_case_insensitive() {
        let table = LanguageTable::builtin();
        assert!(table.contains("fr"));
        assert!(table.contains("FR"));
        assert!(table.contains(" Fr "));
        assert_eq!(table.name("EN"), "English");
    }

    #[test]
    fn unknown_code_maps_to_unknown() {
        let table = LanguageTable::builtin();
        assert!(!table.contains("xx-not-real"));
        assert_eq!(table.name("xx-not-real"), "Unknown");
    }

    #[test]
    fn from_pairs_normalizes_codes() {
        let table = LanguageTable::from_pairs(vec![("ZH-CN".to_string(), "Chinese".to_string())]);
        assert!(table.contains("zh-cn"));
        assert_eq!(table.len(), 1);
    }
}
