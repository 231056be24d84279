//! 语言检测入口
//!
//! 规范化文本 → 调用模型 → （可选）按限定语言过滤 → 整形结果

use crate::error::Result;
use crate::normalize::{Normalizer, SpacingMethod};
use crate::oracle::{LanguageModel, ALL_LABELS};
use crate::restriction::{apply_restriction, LanguageRestriction};
use crate::shaper::{shape, DetectionResult};

/// 语言检测器
///
/// 持有已加载的模型和当前的限定语言列表。修改限定列表需要 `&mut self`，
/// 只读检测可以在多个调用方之间共享。
pub struct LangDetector<M> {
    model: M,
    normalizer: Normalizer,
    restriction: Option<LanguageRestriction>,
}

impl<M: LanguageModel> LangDetector<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            normalizer: Normalizer::default(),
            restriction: None,
        }
    }

    pub fn with_method(mut self, method: SpacingMethod) -> Self {
        self.normalizer = Normalizer::new(method);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// 设置限定语言
    ///
    /// 校验后没有可用语言（空列表或全部不受支持）则清除限定
    pub fn set_languages<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.restriction = LanguageRestriction::new(codes);
    }

    pub fn clear_languages(&mut self) {
        self.restriction = None;
    }

    pub fn languages(&self) -> Option<&LanguageRestriction> {
        self.restriction.as_ref()
    }

    /// 使用当前限定列表检测
    pub fn detect(&self, text: &str, k: usize, threshold: f32) -> Result<DetectionResult> {
        self.detect_with(text, k, threshold, self.restriction.as_ref())
    }

    /// 检测文本语言
    ///
    /// # Arguments
    /// * `k` - 返回前 k 个结果；k ≤ 1 时返回单个结果
    /// * `threshold` - 概率下限，低于此值的标签不返回
    /// * `restriction` - 限定语言；`None` 表示不限定
    pub fn detect_with(
        &self,
        text: &str,
        k: usize,
        threshold: f32,
        restriction: Option<&LanguageRestriction>,
    ) -> Result<DetectionResult> {
        let text = self.normalizer.normalize(text);

        let Some(restriction) = restriction else {
            // 不限定时 k 不做调整，结果可能少于 k 个
            let top_k = i32::try_from(k.max(1)).unwrap_or(i32::MAX);
            let predictions = self.model.predict(&text, top_k, threshold)?;
            return shape(predictions, k);
        };

        tracing::debug!("限定语言: {:?}", restriction.codes());

        let ranked = self.model.predict(&text, ALL_LABELS, threshold)?;
        let (filtered, k) = apply_restriction(ranked, restriction, k);
        shape(filtered, k)
    }
}
