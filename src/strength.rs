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
// Password strength scoring

use std::fmt;
use zxcvbn::zxcvbn;

/// Upper bound of [`score_password`]. The rules below top out at 7.
pub const MAX_SCORE: u8 = 10;

// 长度档位，逐档累加
const LENGTH_TIERS: [usize; 3] = [8, 12, 16];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthLevel::Weak,
            4..=6 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }

    /// Display color as a hex RGB string.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "#ef4444",
            StrengthLevel::Medium => "#eab308",
            StrengthLevel::Strong => "#22c55e",
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "🔴",
            StrengthLevel::Medium => "🟡",
            StrengthLevel::Strong => "🟢",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: u8,
    pub level: StrengthLevel,
}

/// Length tiers plus one point per character class present, clamped to [`MAX_SCORE`].
pub fn score_password(password: &str) -> u8 {
    let length = password.chars().count();
    let mut score = LENGTH_TIERS.iter().filter(|&&tier| length >= tier).count() as u8;

    if password.chars().any(|c| c.is_ascii_uppercase()) { score += 1; }
    if password.chars().any(|c| c.is_ascii_lowercase()) { score += 1; }
    if password.chars().any(|c| c.is_ascii_digit()) { score += 1; }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) { score += 1; }

    score.min(MAX_SCORE)
}

pub fn assess_password(password: &str) -> StrengthReport {
    let score = score_password(password);
    StrengthReport { score, level: StrengthLevel::from_score(score) }
}

/// zxcvbn's suggestions for the password. Informational only.
pub fn zxcvbn_suggestions(password: &str) -> Vec<String> {
    if password.is_empty() {
        return Vec::new();
    }
    let strength_result = zxcvbn(password, &[]);
    strength_result.feedback().map_or_else(
        Vec::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect(),
    )
}
