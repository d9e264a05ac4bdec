//! Built-in UI strings, picked by the site's `lang`.

use crate::types::NavStrings;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    pub nav: NavStrings,
}

fn strings(index: &str, about: &str, rss: &str, search: &str) -> NavStrings {
    NavStrings {
        index: index.to_owned(),
        about: about.to_owned(),
        rss: rss.to_owned(),
        search: search.to_owned(),
    }
}

/// Returns the table for `lang`. Matching ignores case and accepts a bare
/// primary subtag (`fr` for `fr-FR`); anything unknown gets English.
#[must_use]
pub fn locale(lang: &str) -> Locale {
    let lang = lang.trim().to_ascii_lowercase();
    let primary = lang.split(['-', '_']).next().unwrap_or_default();

    let nav = match (primary, lang.as_str()) {
        ("zh", "zh-tw" | "zh-hk" | "zh_tw" | "zh_hk") => strings("首頁", "關於", "訂閱", "搜尋"),
        ("zh", _) => strings("首页", "关于", "订阅", "搜索"),
        ("ja", _) => strings("ブログ", "について", "RSS", "検索"),
        ("es", _) => strings("Blog", "Acerca de", "RSS", "Buscar"),
        ("fr", _) => strings("Blog", "À propos", "RSS", "Rechercher"),
        ("de", _) => strings("Blog", "Über", "RSS", "Suche"),
        _ => NavStrings::default(),
    };
    Locale { nav }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_default() {
        assert_eq!(locale("en-US"), Locale::default());
        assert_eq!(locale("").nav.about, "About");
    }

    #[test]
    fn test_unknown_lang_falls_back_to_english() {
        for lang in ["tlh", "xx-YY", "not a tag"] {
            assert_eq!(locale(lang).nav, NavStrings::default(), "lang {lang}");
        }
    }

    #[test]
    fn test_primary_subtag_and_case() {
        assert_eq!(locale("FR").nav.about, "À propos");
        assert_eq!(locale("fr-CA").nav.search, "Rechercher");
        assert_eq!(locale("ja-JP").nav.index, "ブログ");
    }

    #[test]
    fn test_chinese_scripts() {
        assert_eq!(locale("zh-CN").nav.about, "关于");
        assert_eq!(locale("zh-TW").nav.about, "關於");
        assert_eq!(locale("zh").nav.search, "搜索");
    }
}
