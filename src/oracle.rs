//! 语言识别模型接口
//!
//! 模型被视为黑盒：给定文本、k 和阈值，返回按概率降序排列的
//! (标签, 概率) 列表，标签带 `__label__` 前缀。

use std::path::Path;

use fasttext::FastText;

use crate::error::{LidError, Result};

/// 请求全部标签（按概率排序）
pub const ALL_LABELS: i32 = -1;

/// 模型原始输出
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// 带前缀的标签，如 `__label__en`
    pub label: String,
    pub prob: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, prob: f32) -> Self {
        Self {
            label: label.into(),
            prob,
        }
    }
}

pub trait LanguageModel {
    /// 返回最多 `k` 个概率不低于 `threshold` 的预测，按概率降序
    ///
    /// `k` 为 [`ALL_LABELS`] 时返回全部标签
    fn predict(&self, text: &str, k: i32, threshold: f32) -> Result<Vec<Prediction>>;
}

/// 基于 fastText 的模型（lid.176.ftz / lid.176.bin）
pub struct FastTextModel {
    inner: FastText,
    label_count: i32,
}

impl FastTextModel {
    /// 加载模型文件，失败时调用方应终止启动
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path
            .to_str()
            .ok_or_else(|| LidError::ModelLoad(format!("模型路径不是合法 UTF-8: {:?}", path)))?;

        let mut inner = FastText::new();
        inner.load_model(path_str).map_err(LidError::ModelLoad)?;

        let model = Self::from_fasttext(inner)?;
        tracing::debug!("模型已加载: {:?}, {} 个标签", path, model.label_count());
        Ok(model)
    }

    /// 包装已加载（或已训练）的 fastText 模型
    pub fn from_fasttext(inner: FastText) -> Result<Self> {
        let (labels, _) = inner.get_labels().map_err(LidError::ModelLoad)?;
        Ok(Self {
            inner,
            label_count: labels.len() as i32,
        })
    }

    pub fn label_count(&self) -> usize {
        self.label_count as usize
    }
}

/// 以换行结尾的模型输入
///
/// fastText 读到行尾才补 `</s>` 句末 token；C 接口不会自动追加换行，
/// 不补则概率与逐行预测的结果不一致，空文本也会得不到任何标签
fn model_input(text: &str) -> String {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    if !line.ends_with('\n') {
        line.push('\n');
    }
    line
}

impl LanguageModel for FastTextModel {
    fn predict(&self, text: &str, k: i32, threshold: f32) -> Result<Vec<Prediction>> {
        let k = if k == ALL_LABELS { self.label_count } else { k };

        let predictions = self.inner.predict(&model_input(text), k, threshold).map_err(|e| {
            tracing::error!("模型预测失败: {}", e);
            LidError::Prediction(e)
        })?;

        Ok(predictions
            .into_iter()
            .map(|p| Prediction {
                label: p.label,
                prob: p.prob,
            })
            .collect())
    }
}
