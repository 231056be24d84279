//! lid.176 模型支持的语言代码

use std::collections::HashSet;

use lazy_static::lazy_static;

/// 模型标签的命名空间前缀（`__label__en` → `en`）
pub const LABEL_PREFIX: &str = "__label__";

lazy_static! {
    /// 模型可识别的 176 种语言
    pub static ref SUPPORTED_LANGS: HashSet<&'static str> = [
        "af", "als", "am", "an", "ar", "arz", "as", "ast", "av", "az", "azb", "ba", "bar", "bcl",
        "be", "bg", "bh", "bn", "bo", "bpy", "br", "bs", "bxr", "ca", "cbk", "ce", "ceb", "ckb",
        "co", "cs", "cv", "cy", "da", "de", "diq", "dsb", "dty", "dv", "el", "eml", "en", "eo",
        "es", "et", "eu", "fa", "fi", "fr", "frr", "fy", "ga", "gd", "gl", "gn", "gom", "gu", "gv",
        "he", "hi", "hif", "hr", "hsb", "ht", "hu", "hy", "ia", "id", "ie", "ilo", "io", "is",
        "it", "ja", "jbo", "jv", "ka", "kk", "km", "kn", "ko", "krc", "ku", "kv", "kw", "ky", "la",
        "lb", "lez", "li", "lmo", "lo", "lrc", "lt", "lv", "mai", "mg", "mhr", "min", "mk", "ml",
        "mn", "mr", "mrj", "ms", "mt", "mwl", "my", "myv", "mzn", "nah", "nap", "nds", "ne", "new",
        "nl", "nn", "no", "oc", "or", "os", "pa", "pam", "pfl", "pl", "pms", "pnb", "ps", "pt",
        "qu", "rm", "ro", "ru", "rue", "sa", "sah", "sc", "scn", "sco", "sd", "sh", "si", "sk",
        "sl", "so", "sq", "sr", "su", "sv", "sw", "ta", "te", "tg", "th", "tk", "tl", "tr", "tt",
        "tyv", "ug", "uk", "ur", "uz", "vec", "vep", "vi", "vls", "vo", "wa", "war", "wuu", "xal",
        "xmf", "yi", "yo", "yue", "zh",
    ]
    .into_iter()
    .collect();
}

/// 全部支持的语言代码（按字母排序）
pub fn supported_langs() -> Vec<&'static str> {
    let mut langs: Vec<&'static str> = SUPPORTED_LANGS.iter().copied().collect();
    langs.sort_unstable();
    langs
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED_LANGS.contains(code)
}

/// 去掉模型标签前缀，得到裸语言代码
pub fn strip_label(label: &str) -> &str {
    label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_langs_count() {
        assert_eq!(SUPPORTED_LANGS.len(), 176);
        assert!(is_supported("en"));
        assert!(is_supported("zh"));
        assert!(!is_supported("xx"));
        assert!(!is_supported("EN"));
    }

    #[test]
    fn test_supported_langs_sorted() {
        let langs = supported_langs();
        assert_eq!(langs.first(), Some(&"af"));
        assert_eq!(langs.last(), Some(&"zh"));
    }

    #[test]
    fn test_strip_label() {
        assert_eq!(strip_label("__label__en"), "en");
        assert_eq!(strip_label("__label__yue"), "yue");
        assert_eq!(strip_label("de"), "de");
    }
}
