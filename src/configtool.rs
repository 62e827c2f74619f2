//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___|  ___  _ __
// | |_) | |_) / _` \ \/\ / / _ \ | |  _  / _ \| '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| ||  __/| | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-17
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::{env, fs, io, path::{Path, PathBuf}};
use dirs::config_dir;
use log::warn;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::passgen::{PasswordOptions, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

pub const APP_DIR: &str = "rpawogen";
pub const CONFIG_FILE: &str = "config.json";
/// Overrides the configuration directory when set.
pub const HOME_ENV: &str = "RPAWOGEN_HOME";
pub const DEFAULT_CLEAR_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config directory error: {0}")]
    ConfigDirError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    /// 0 keeps the password in the clipboard.
    pub clipboard_clear_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            clipboard_clear_secs: DEFAULT_CLEAR_SECS,
        }
    }
}

impl AppConfig {
    /// Reads `config.json` from `dir`. A missing or malformed file yields defaults.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let config_file_path = dir.join(CONFIG_FILE);
        let config_data = match fs::read_to_string(&config_file_path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::IoError(e)),
        };
        let config = match serde_json::from_str::<Self>(&config_data) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring malformed config file {}: {}", config_file_path.display(), e);
                Self::default()
            }
        };
        Ok(config.normalized())
    }

    pub fn save_to(&self, dir: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(dir)?;
        let config_file = fs::File::create(dir.join(CONFIG_FILE))?;
        serde_json::to_writer_pretty(config_file, self)?;
        Ok(())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&get_config_dir()?)
    }

    pub fn password_options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.default_length,
            include_uppercase: self.uppercase,
            include_lowercase: self.lowercase,
            include_numbers: self.numbers,
            include_symbols: self.symbols,
        }
    }

    fn normalized(mut self) -> Self {
        self.default_length = self.default_length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    match config_dir() {
        Some(path) => Ok(path.join(APP_DIR)),
        None => Err(ConfigError::ConfigDirError("Could not determine configuration directory".to_string())),
    }
}
