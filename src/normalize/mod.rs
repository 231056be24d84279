//! 文本规范化层
//!
//! 在调用语言识别模型之前对输入做确定性改写。模型按空白切分 token，
//! 中英混排文本需要先在字符块之间插入空格才能被正确切分。
//!
//! ## 处理流程
//! 1. 按 [`SpacingMethod`] 插入空格
//! 2. 换行符替换为空格

mod engine;
mod types;

pub use engine::Normalizer;
pub use types::SpacingMethod;
