use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use futures_util::StreamExt;

use crate::error::LidError;

pub const MODEL_FILENAME: &str = "lid.176.ftz";
pub const MODEL_URL: &str =
    "https://dl.fbaipublicfiles.com/fasttext/supervised-models/lid.176.ftz";
pub const MODEL_MD5: &str = "340156704bb8c8e50c4abf35a7ec2569";
pub const REQUEST_TIMEOUT_SECS: u64 = 120;
/// lid.176.ftz 不到 1MB
pub const MAX_MODEL_BYTES: usize = 16 * 1024 * 1024;

pub fn default_model_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| anyhow::anyhow!("无法获取数据目录"))?;
    let app_dir = data_dir.join("FastLid");
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join(MODEL_FILENAME))
}

/// 确保模型文件存在且校验通过
///
/// 文件缺失时从 `url` 下载一次；之后校验 md5，不匹配则返回错误，调用方应终止启动
pub async fn ensure_model(path: &Path, url: &str, expected_md5: &str) -> Result<()> {
    if !path.exists() {
        tracing::info!("下载 {} (仅需一次)", url);
        let data = fetch_model(url).await?;
        install_model(path, &data, expected_md5)?;
        tracing::info!("模型已保存: {:?}", path);
        return Ok(());
    }

    let data = std::fs::read(path)?;
    verify_md5(&data, expected_md5)?;
    tracing::debug!("模型 md5 校验通过: {:?}", path);
    Ok(())
}

pub fn verify_md5(data: &[u8], expected: &str) -> Result<()> {
    let actual = format!("{:x}", md5::compute(data));
    if !actual.eq_ignore_ascii_case(expected.trim()) {
        return Err(LidError::ChecksumMismatch {
            actual,
            expected: expected.to_string(),
        }
        .into());
    }
    Ok(())
}

/// 先校验再落盘，校验失败时不留下文件，下次启动会重新下载
pub(crate) fn install_model(path: &Path, data: &[u8], expected_md5: &str) -> Result<()> {
    verify_md5(data, expected_md5)?;
    save_model_atomic(path, data)
}

pub(crate) fn save_model_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if data.is_empty() {
        anyhow::bail!("模型内容为空");
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let unique_suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = path.with_extension(format!("tmp.{}", unique_suffix));

    {
        let mut tmp_file = std::fs::File::create(&tmp_path)?;
        use std::io::Write;
        tmp_file.write_all(data)?;
        tmp_file.sync_all()?;
    }

    if let Err(err) = replace_file(&tmp_path, path) {
        if let Err(cleanup_err) = std::fs::remove_file(&tmp_path) {
            tracing::warn!("替换模型文件失败后清理临时文件失败: {}", cleanup_err);
        }
        return Err(err);
    }

    Ok(())
}

fn replace_file(tmp_path: &Path, target_path: &Path) -> Result<()> {
    if target_path.exists() {
        std::fs::remove_file(target_path)?;
    }
    std::fs::rename(tmp_path, target_path)?;
    Ok(())
}

async fn fetch_model(url: &str) -> Result<Vec<u8>> {
    let client = get_http_client()?;

    let response = client.get(url).send().await.map_err(|err| {
        tracing::error!("模型下载失败 {}: {}", url, err);
        err
    })?;

    if !response.status().is_success() {
        anyhow::bail!("模型下载失败 {}: HTTP {}", url, response.status());
    }

    read_response_with_limit(response).await
}

fn get_http_client() -> Result<&'static reqwest::Client> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    let _ = CLIENT.set(client);
    CLIENT
        .get()
        .ok_or_else(|| anyhow::anyhow!("HTTP 客户端初始化失败"))
}

pub(crate) fn validate_response_content_length(content_length: Option<u64>) -> Result<()> {
    if let Some(content_length) = content_length {
        if content_length > MAX_MODEL_BYTES as u64 {
            anyhow::bail!("模型文件过大: {} bytes", content_length);
        }
    }
    Ok(())
}

pub(crate) fn append_chunk_with_limit(buffer: &mut Vec<u8>, chunk: &[u8]) -> Result<()> {
    if buffer.len().saturating_add(chunk.len()) > MAX_MODEL_BYTES {
        anyhow::bail!("模型文件过大");
    }
    buffer.extend_from_slice(chunk);
    Ok(())
}

async fn read_response_with_limit(response: reqwest::Response) -> Result<Vec<u8>> {
    validate_response_content_length(response.content_length())?;

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result?;
        append_chunk_with_limit(&mut bytes, &chunk)?;
    }

    Ok(bytes)
}
