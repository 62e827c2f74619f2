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
// Generation session

use log::warn;

use crate::passgen::{generate_password, GenError, IndexSource, PasswordOptions};
use crate::stats::{reset_session, StatsError, StatsStore, UsageStats};

/// Owns the usage counters for one run and keeps them in sync with the store.
pub struct GenerationSession<S, R> {
    store: S,
    source: R,
    stats: UsageStats,
}

impl<S: StatsStore, R: IndexSource> GenerationSession<S, R> {
    pub fn new(store: S, source: R) -> Self {
        let stats = store.load();
        Self { store, source, stats }
    }

    /// Generates a password and, only on success, counts and persists it.
    ///
    /// A failed save is logged; the password is still returned.
    pub fn generate(&mut self, options: &PasswordOptions) -> Result<String, GenError> {
        let password = generate_password(options, &mut self.source)?;
        self.stats.record_generation();
        if let Err(e) = self.store.save(&self.stats) {
            warn!("Failed to persist usage stats: {}", e);
        }
        Ok(password)
    }

    pub fn reset_session(&mut self) -> Result<(), StatsError> {
        reset_session(&mut self.stats, &self.store)
    }

    pub fn stats(&self) -> &UsageStats {
        &self.stats
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
