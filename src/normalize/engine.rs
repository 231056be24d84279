//! 规范化引擎

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{LidError, Result};
use crate::normalize::types::SpacingMethod;

lazy_static! {
    /// 单个汉字 | 数字串 | 单词串（左侧分支优先）
    static ref RUN_PATTERN: std::result::Result<Regex, regex::Error> =
        Regex::new(r"[\x{4e00}-\x{9fef}]|\d+|\w+");
}

/// 文本规范化器
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    method: SpacingMethod,
}

impl Normalizer {
    pub fn new(method: SpacingMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> SpacingMethod {
        self.method
    }

    /// 规范化文本
    ///
    /// 不可失败：空格插入出错时记录日志并沿用原文
    pub fn normalize(&self, text: &str) -> String {
        let spaced = match self.method {
            SpacingMethod::Interleave => interleave_spaces(text),
            SpacingMethod::Runs => match separate_runs(text) {
                Ok(spaced) => spaced,
                Err(e) => {
                    tracing::error!("{}, 继续使用原文", e);
                    text.to_string()
                }
            },
        };

        // 换行符会干扰模型
        spaced.replace('\n', " ")
    }
}

/// 每个字符前（以及末尾）插入空格，两个拉丁字母之间的空格除外
///
/// `"ab中"` → `" ab 中 "`，空串 → `" "`
fn interleave_spaces(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2 + 1);
    let mut prev: Option<char> = None;

    for ch in text.chars() {
        let joined = matches!(prev, Some(p) if is_latin(p)) && is_latin(ch);
        if !joined {
            result.push(' ');
        }
        result.push(ch);
        prev = Some(ch);
    }
    result.push(' ');

    result
}

/// 在每个汉字、数字串、单词串之后追加空格
fn separate_runs(text: &str) -> Result<String> {
    let pattern = RUN_PATTERN
        .as_ref()
        .map_err(|e| LidError::Pattern(e.to_string()))?;
    Ok(pattern.replace_all(text, "$0 ").into_owned())
}

fn is_latin(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}
