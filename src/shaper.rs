//! 结果整形：去标签前缀、概率保留三位小数、按 k 截断

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LidError, Result};
use crate::langs::strip_label;
use crate::oracle::Prediction;

/// (语言代码, 概率)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    pub lang: String,
    pub prob: f64,
}

/// 检测结果
///
/// k ≤ 1 时为单个结果，k > 1 时为两个等长的并行列表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DetectionResult {
    Single(RankedPrediction),
    Multiple { langs: Vec<String>, probs: Vec<f64> },
}

impl DetectionResult {
    /// 排名第一的语言
    pub fn top(&self) -> Option<&str> {
        match self {
            Self::Single(p) => Some(p.lang.as_str()),
            Self::Multiple { langs, .. } => langs.first().map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple { langs, .. } => langs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按排名顺序展开为 (语言, 概率)
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        match self {
            Self::Single(p) => vec![(p.lang.as_str(), p.prob)],
            Self::Multiple { langs, probs } => langs
                .iter()
                .map(String::as_str)
                .zip(probs.iter().copied())
                .collect(),
        }
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .pairs()
            .into_iter()
            .map(|(lang, prob)| format!("{} {}", lang, prob))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// 概率保留三位小数
pub fn round_prob(prob: f32) -> f64 {
    let rounded = (f64::from(prob) * 1000.0).round() / 1000.0;
    rounded.clamp(0.0, 1.0)
}

/// 将已排序（且已过滤）的模型输出整形为返回值
pub fn shape(predictions: Vec<Prediction>, k: usize) -> Result<DetectionResult> {
    let mut ranked = predictions.into_iter().map(|p| RankedPrediction {
        lang: strip_label(&p.label).to_string(),
        prob: round_prob(p.prob),
    });

    if k <= 1 {
        return ranked
            .next()
            .map(DetectionResult::Single)
            .ok_or(LidError::EmptyPrediction);
    }

    let (langs, probs): (Vec<String>, Vec<f64>) = ranked.take(k).map(|p| (p.lang, p.prob)).unzip();
    Ok(DetectionResult::Multiple { langs, probs })
}
