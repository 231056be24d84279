/// 检测流程的错误类型
#[derive(Debug, thiserror::Error)]
pub enum LidError {
    #[error("模型加载失败: {0}")]
    ModelLoad(String),
    #[error("模型预测失败: {0}")]
    Prediction(String),
    #[error("没有可返回的预测结果")]
    EmptyPrediction,
    #[error("正则替换失败: {0}")]
    Pattern(String),
    #[error("模型文件 md5 不匹配: {actual} != {expected}")]
    ChecksumMismatch { actual: String, expected: String },
}

pub type Result<T> = std::result::Result<T, LidError>;
