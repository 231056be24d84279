//! 规范化类型定义

use serde::{Deserialize, Serialize};

/// 插入空格的方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpacingMethod {
    /// 默认：每个字符前插入空格，再删除两个拉丁字母之间的空格
    ///
    /// 效果：汉字等非拉丁字符各自成为独立 token，拉丁字母串保持连续
    #[default]
    Interleave,
    /// 在每个汉字、数字串、单词串之后追加一个空格
    Runs,
}

impl std::str::FromStr for SpacingMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "interleave" => Ok(Self::Interleave),
            "runs" => Ok(Self::Runs),
            other => Err(format!("未知的空格插入方式: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method() {
        assert_eq!("interleave".parse(), Ok(SpacingMethod::Interleave));
        assert_eq!(" Runs ".parse(), Ok(SpacingMethod::Runs));
        assert!("cjk".parse::<SpacingMethod>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SpacingMethod::Runs).unwrap();
        assert_eq!(json, "\"runs\"");
        let method: SpacingMethod = serde_json::from_str("\"interleave\"").unwrap();
        assert_eq!(method, SpacingMethod::Interleave);
    }
}
