// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model_fetch::{MODEL_MD5, MODEL_URL};
use crate::normalize::SpacingMethod;

// ============================================================================
// 检测配置
// ============================================================================

/// fastlid 配置
///
/// 保存在 `<config_dir>/FastLid/config.json`，缺失字段使用默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LidConfig {
    /// 模型文件路径（为 None 时使用数据目录下的 lid.176.ftz）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<PathBuf>,
    /// 模型缺失时的下载地址
    #[serde(default = "default_model_url")]
    pub model_url: String,
    /// 模型文件期望的 md5
    #[serde(default = "default_model_md5")]
    pub model_md5: String,
    /// 默认返回前 k 个结果
    #[serde(default = "default_k")]
    pub k: usize,
    /// 概率下限
    #[serde(default)]
    pub threshold: f32,
    /// 空格插入方式
    #[serde(default)]
    pub method: SpacingMethod,
    /// 限定语言（为空表示不限定）
    #[serde(default)]
    pub languages: Vec<String>,
}

fn default_model_url() -> String {
    MODEL_URL.to_string()
}

fn default_model_md5() -> String {
    MODEL_MD5.to_string()
}

fn default_k() -> usize {
    1
}

impl Default for LidConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LidConfig {
    pub fn new() -> Self {
        Self {
            model_path: None,
            model_url: default_model_url(),
            model_md5: default_model_md5(),
            k: default_k(),
            threshold: 0.0,
            method: SpacingMethod::default(),
            languages: Vec::new(),
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join("FastLid");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// 加载配置，返回 (配置, 是否来自文件)
    pub fn load() -> Result<(Self, bool)> {
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<(Self, bool)> {
        tracing::debug!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::debug!("配置文件不存在，使用默认配置");
            return Ok((Self::new(), false));
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<LidConfig>(&content) {
            Ok(config) => Ok((config, true)),
            Err(e) => {
                tracing::warn!("解析配置失败，使用默认配置: {}", e);
                Ok((Self::new(), false))
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to_path(&path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);

        // 先写临时文件，再原子替换
        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("重命名临时文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let (config, from_file) =
            LidConfig::load_from_path(&temp.path().join("config.json")).expect("load");
        assert!(!from_file);
        assert_eq!(config, LidConfig::default());
        assert_eq!(config.k, 1);
        assert_eq!(config.model_md5, MODEL_MD5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"k": 3, "languages": ["en", "de"], "method": "runs"}"#)
            .expect("write config");

        let (config, from_file) = LidConfig::load_from_path(&path).expect("load");
        assert!(from_file);
        assert_eq!(config.k, 3);
        assert_eq!(config.languages, vec!["en", "de"]);
        assert_eq!(config.method, SpacingMethod::Runs);
        assert_eq!(config.model_url, MODEL_URL);
        assert_eq!(config.threshold, 0.0);
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("config.json");
        std::fs::write(&path, "not json").expect("write config");

        let (config, from_file) = LidConfig::load_from_path(&path).expect("load");
        assert!(!from_file);
        assert_eq!(config, LidConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("config.json");

        let mut config = LidConfig::new();
        config.model_path = Some(temp.path().join("lid.176.bin"));
        config.threshold = 0.25;
        config.save_to_path(&path).expect("save");

        let (reloaded, from_file) = LidConfig::load_from_path(&path).expect("load");
        assert!(from_file);
        assert_eq!(reloaded, config);
        assert!(!path.with_extension("json.tmp").exists());
    }
}
