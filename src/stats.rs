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
// Usage counters and their persistence

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::configtool::{get_config_dir, ConfigError};

/// Fixed name of the persisted stats record.
pub const STATS_KEY: &str = "password-stats";

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UsageStats {
    pub total_generated: u64,
    pub sessions_generated: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_generated_at: Option<DateTime<Utc>>,
}

impl UsageStats {
    pub fn record_generation(&mut self) {
        self.total_generated = self.total_generated.saturating_add(1);
        self.sessions_generated = self.sessions_generated.saturating_add(1);
        self.last_generated_at = Some(Utc::now());
    }

    /// Zeroes the session counter. The lifetime total is never reset.
    pub fn reset_session(&mut self) {
        self.sessions_generated = 0;
    }
}

/// Zeroes the session counter in `stats` and writes the record back.
pub fn reset_session<S: StatsStore + ?Sized>(stats: &mut UsageStats, store: &S) -> Result<(), StatsError> {
    stats.reset_session();
    store.save(stats)
}

pub trait StatsStore {
    /// Never fails: a missing or unreadable record loads as zeroed stats.
    fn load(&self) -> UsageStats;
    fn save(&self, stats: &UsageStats) -> Result<(), StatsError>;
}

impl<T: StatsStore + ?Sized> StatsStore for &T {
    fn load(&self) -> UsageStats {
        (**self).load()
    }

    fn save(&self, stats: &UsageStats) -> Result<(), StatsError> {
        (**self).save(stats)
    }
}

/// Stats kept as `<dir>/password-stats.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(format!("{}.json", STATS_KEY)) }
    }

    /// Store inside the application config directory.
    pub fn open_default() -> Result<Self, ConfigError> {
        Ok(Self::new(get_config_dir()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> UsageStats {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return UsageStats::default(),
            Err(e) => {
                warn!("Failed to read stats file {}: {}", self.path.display(), e);
                return UsageStats::default();
            }
        };
        serde_json::from_str(&data).unwrap_or_else(|e| {
            warn!("Ignoring malformed stats file {}: {}", self.path.display(), e);
            UsageStats::default()
        })
    }

    fn save(&self, stats: &UsageStats) -> Result<(), StatsError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;
        // 先写临时文件再改名，避免中断时留下半截记录
        let mut stats_file = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(stats_file.as_file_mut(), stats)?;
        stats_file.as_file().sync_all()?;
        stats_file.persist(&self.path).map_err(|e| e.error)?;
        info!("Saved usage stats to {}", self.path.display());
        Ok(())
    }
}

/// In-process store, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<UsageStats>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(stats: UsageStats) -> Self {
        Self { slot: RefCell::new(Some(stats)), saves: Cell::new(0) }
    }

    /// Currently stored record, if any.
    pub fn snapshot(&self) -> Option<UsageStats> {
        self.slot.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> UsageStats {
        self.slot.borrow().clone().unwrap_or_default()
    }

    fn save(&self, stats: &UsageStats) -> Result<(), StatsError> {
        *self.slot.borrow_mut() = Some(stats.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
