//! 日志初始化
//!
//! 沿用数值日志级别：10 debug、20 info、30 warn、40 及以上 error。

use tracing::Level;

pub const DEFAULT_LOGLEVEL: i64 = 20;

/// 数值级别转换为 tracing 级别，低于 10 按 10 处理
pub fn level_from_numeric(loglevel: i64) -> Level {
    match loglevel.max(10) {
        10..=19 => Level::DEBUG,
        20..=29 => Level::INFO,
        30..=39 => Level::WARN,
        _ => Level::ERROR,
    }
}

/// 初始化日志（输出到 stderr，stdout 只留给检测结果）
pub fn init(loglevel: i64) {
    tracing_subscriber::fmt()
        .with_max_level(level_from_numeric(loglevel))
        .with_writer(std::io::stderr)
        .init();
}
