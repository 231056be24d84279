//! 语言限定
//!
//! 调用方可以给出一个候选语言列表，检测结果只在列表内的语言中挑选。
//! 列表先经过一次校验：去除首尾空白、转小写、丢弃空项，不在支持列表中的
//! 代码记录错误后丢弃，其余照常生效。

use crate::langs::{is_supported, strip_label};
use crate::oracle::Prediction;

/// 校验结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validation {
    pub valid: Vec<String>,
    pub dropped: Vec<String>,
}

/// 规范化并校验语言代码
pub fn validate_languages<I, S>(codes: I) -> Validation
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut validation = Validation::default();

    for code in codes {
        let code = code.as_ref().trim().to_lowercase();
        if code.is_empty() {
            continue;
        }

        if !is_supported(&code) {
            tracing::error!("{} 不在支持的语言列表中", code);
            validation.dropped.push(code);
            continue;
        }

        if !validation.valid.contains(&code) {
            validation.valid.push(code);
        }
    }

    if !validation.dropped.is_empty() {
        tracing::warn!(
            "限定语言中有 {} 项不受支持，已忽略: {:?}",
            validation.dropped.len(),
            validation.dropped
        );
    }

    validation
}

/// 已校验的候选语言列表
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRestriction {
    codes: Vec<String>,
    dropped: Vec<String>,
}

impl LanguageRestriction {
    /// 构建限定列表
    ///
    /// 校验后没有可用代码（空列表或全部不受支持）时返回 `None`，即不限定
    pub fn new<I, S>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Validation { valid, dropped } = validate_languages(codes);
        if valid.is_empty() {
            tracing::warn!("限定语言列表中没有可用的语言，不做限定");
            return None;
        }

        tracing::debug!("限定语言: {:?}", valid);
        Some(Self {
            codes: valid,
            dropped,
        })
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }
}

/// 按限定列表过滤模型的完整排序输出
///
/// `ranked` 必须是全部标签（k = 全部）的结果。保持原有顺序，不重新归一化概率，
/// 也不截断；返回值中的 k 在超过限定语言数时被下调。
pub fn apply_restriction(
    ranked: Vec<Prediction>,
    restriction: &LanguageRestriction,
    k: usize,
) -> (Vec<Prediction>, usize) {
    let filtered: Vec<Prediction> = ranked
        .into_iter()
        .filter(|p| restriction.contains(strip_label(&p.label)))
        .collect();

    tracing::debug!(
        "过滤后: {:?}",
        filtered
            .iter()
            .map(|p| (p.label.as_str(), p.prob))
            .collect::<Vec<_>>()
    );

    let limit = restriction.len();
    let k = if k > limit {
        tracing::warn!(
            "k (={}) 大于限定语言数 ({})，k 调整为 {}",
            k,
            limit,
            limit
        );
        limit
    } else {
        k
    };

    (filtered, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked() -> Vec<Prediction> {
        vec![
            Prediction::new("__label__en", 0.6),
            Prediction::new("__label__fr", 0.2),
            Prediction::new("__label__de", 0.1),
            Prediction::new("__label__zh", 0.05),
        ]
    }

    #[test]
    fn test_validate_normalizes_entries() {
        let validation = validate_languages([" EN ", "de", "", "  "]);
        assert_eq!(validation.valid, vec!["en", "de"]);
        assert!(validation.dropped.is_empty());
    }

    #[test]
    fn test_validate_drops_unsupported() {
        let validation = validate_languages(["de", "xx", "yy", "en"]);
        assert_eq!(validation.valid, vec!["de", "en"]);
        assert_eq!(validation.dropped, vec!["xx", "yy"]);
    }

    #[test]
    fn test_validate_dedup() {
        let validation = validate_languages(["de", "DE", "de "]);
        assert_eq!(validation.valid, vec!["de"]);
    }

    #[test]
    fn test_new_empty_is_none() {
        assert!(LanguageRestriction::new(Vec::<String>::new()).is_none());
        assert!(LanguageRestriction::new([" ", ""]).is_none());
    }

    #[test]
    fn test_new_all_invalid_is_none() {
        assert!(LanguageRestriction::new(["xx"]).is_none());
        assert!(LanguageRestriction::new(["xx", " YY "]).is_none());
    }

    #[test]
    fn test_new_keeps_dropped_codes() {
        let restriction = LanguageRestriction::new(["de", "xx"]).expect("restriction");
        assert_eq!(restriction.codes(), ["de".to_string()]);
        assert_eq!(restriction.dropped(), ["xx".to_string()]);
    }

    #[test]
    fn test_apply_keeps_oracle_order() {
        let restriction = LanguageRestriction::new(["zh", "en"]).unwrap();
        let (filtered, k) = apply_restriction(ranked(), &restriction, 2);
        let labels: Vec<&str> = filtered.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["__label__en", "__label__zh"]);
        assert_eq!(filtered[1].prob, 0.05);
        assert_eq!(k, 2);
    }

    #[test]
    fn test_apply_clamps_k() {
        let restriction = LanguageRestriction::new(["de", "xx"]).unwrap();
        let (filtered, k) = apply_restriction(ranked(), &restriction, 5);
        assert_eq!(filtered.len(), 1);
        assert_eq!(k, 1);
    }
}
