//! CLI設定（`~/.config/foodscan/config.json`）

use crate::error::{FoodScanError, Result};
use foodscan_common::{LOOKUP_DELAY_MS, PROFILE_SAVE_DELAY_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 保存ファイルの場所を上書きする環境変数
pub const STORE_ENV: &str = "FOODSCAN_STORE";

const STORE_FILE: &str = "storage.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store_path: Option<PathBuf>,
    pub lookup_delay_ms: u64,
    pub profile_save_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            lookup_delay_ms: LOOKUP_DELAY_MS as u64,
            profile_save_delay_ms: PROFILE_SAVE_DELAY_MS as u64,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// ファイルが無ければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FoodScanError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("foodscan"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 保存ファイルのパス
    ///
    /// 優先順: `--store` → `FOODSCAN_STORE` → 設定値 → 既定パス
    pub fn resolve_store_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        let from_env = std::env::var_os(STORE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        if let Some(path) = pick_store_path(cli_override, from_env, self.store_path.as_deref()) {
            return Ok(path);
        }
        Ok(Self::config_dir()?.join(STORE_FILE))
    }
}

fn pick_store_path(
    cli_override: Option<&Path>,
    from_env: Option<PathBuf>,
    configured: Option<&Path>,
) -> Option<PathBuf> {
    cli_override
        .map(Path::to_path_buf)
        .or(from_env)
        .or_else(|| configured.map(Path::to_path_buf))
}
