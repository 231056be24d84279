// fastlid 命令行工具
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use fastlid::{logging, model_fetch, FastTextModel, LangDetector, LidConfig, SpacingMethod};

/// 识别文本的语言（fastText lid.176 模型）
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 返回前 k 个结果（默认取配置，配置缺省为 1）
    k: Option<usize>,

    /// 待识别文本
    #[arg(default_value = "test")]
    text: String,

    /// 概率下限
    #[arg(short, long)]
    threshold: Option<f32>,

    /// 空格插入方式：interleave | runs
    #[arg(short, long)]
    method: Option<SpacingMethod>,

    /// 限定语言，逗号分隔，如 en,de
    #[arg(short, long, value_delimiter = ',')]
    languages: Option<Vec<String>>,

    /// 模型文件路径
    #[arg(long)]
    model: Option<PathBuf>,

    /// 日志级别：10 debug、20 info、30 warn、40 error
    #[arg(long, default_value_t = logging::DEFAULT_LOGLEVEL, allow_negative_numbers = true)]
    loglevel: i64,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 列出支持的语言后退出
    #[arg(long)]
    list_langs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    logging::init(cli.loglevel);
    tracing::debug!("{:?}", cli);

    if cli.list_langs {
        println!("{}", fastlid::supported_langs().join(" "));
        return Ok(());
    }

    let config = match LidConfig::load() {
        Ok((config, _)) => config,
        Err(e) => {
            tracing::warn!("读取配置失败，使用默认配置: {}", e);
            LidConfig::default()
        }
    };

    let model_path = match cli.model.or(config.model_path.clone()) {
        Some(path) => path,
        None => model_fetch::default_model_path()?,
    };

    // 模型缺失或损坏时无法继续
    if let Err(e) =
        model_fetch::ensure_model(&model_path, &config.model_url, &config.model_md5).await
    {
        tracing::error!("{}", e);
        return Err(e);
    }

    let model = FastTextModel::load(&model_path).map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    let method = cli.method.unwrap_or(config.method);
    let mut detector = LangDetector::new(model).with_method(method);

    let languages = cli.languages.unwrap_or(config.languages);
    if !languages.is_empty() {
        detector.set_languages(&languages);
    }

    let k = cli.k.unwrap_or(config.k);
    let threshold = cli.threshold.unwrap_or(config.threshold);
    tracing::info!("text: {}", cli.text);

    let result = detector.detect(&cli.text, k, threshold)?;

    if cli.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result);
    }

    Ok(())
}
