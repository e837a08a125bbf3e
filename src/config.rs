//! 应用配置持久化
//!
//! 配置文件位于 `~/.taskman/config.toml`，缺失或解析失败时一律回退默认值。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskmanError};

/// 默认后端地址（与参考后端的监听端口一致）
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 后端连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 服务端根地址（如 "http://localhost:8080"）
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 单次请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Dark".to_string(),
        }
    }
}

/// 获取 ~/.taskman 目录
pub fn taskman_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".taskman"))
        .ok_or_else(|| TaskmanError::config("could not determine home directory"))
}

fn read_config(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// 加载配置（不存在则返回默认值）
pub fn load_config() -> Config {
    match taskman_dir() {
        Ok(dir) => read_config(&dir.join("config.toml")),
        Err(_) => Config::default(),
    }
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    let dir = taskman_dir()?;
    fs::create_dir_all(&dir)?;
    write_config(&dir.join("config.toml"), config)
}

/// 首次运行时落盘默认配置，方便用户直接编辑
pub fn init_config_if_missing() -> Result<()> {
    let path = taskman_dir()?.join("config.toml");
    if path.exists() {
        return Ok(());
    }
    save_config(&Config::default())
}
