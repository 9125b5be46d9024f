use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub const DEFAULT_SHLINK_URL: &str = "https://shlink.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

fn default_shlink_url() -> String {
    DEFAULT_SHLINK_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// 配置文件结构（用于生成示例配置）
///
/// 优先级：ENV (`SHRT_*`) > 配置文件 > 默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_shlink_url")]
    pub shlink_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            shlink_url: default_shlink_url(),
            api_key: String::new(),
            timeout: default_timeout(),
        }
    }
}

impl FileConfig {
    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> Result<String> {
        let sample = Self {
            api_key: "your-shlink-api-key".to_string(),
            ..Self::default()
        };
        Ok(toml::to_string_pretty(&sample)?)
    }

    /// 保存示例配置到文件
    pub fn save_sample<P: AsRef<Path>>(path: P) -> Result<()> {
        let content = Self::generate_sample_config()?;

        // Create parent directories if needed
        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
