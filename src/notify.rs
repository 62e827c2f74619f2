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
// User-facing notifications

use std::fmt;

use crate::setclip::ClipboardHold;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A short titled message shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: &str, description: &str) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn no_class_selected() -> Self {
        Self::new(
            NotificationKind::Error,
            "No character set selected",
            "Select at least one of uppercase, lowercase, numbers or symbols.",
        )
    }

    pub fn generated(length: usize) -> Self {
        Self::new(
            NotificationKind::Success,
            "Password generated",
            &format!("A new {}-character password is ready.", length),
        )
    }

    pub fn copied(hold: ClipboardHold) -> Self {
        let description = match hold {
            ClipboardHold::Timed(secs) => {
                format!("Password copied to the clipboard. It will be cleared in {} seconds.", secs)
            }
            ClipboardHold::UntilExit if cfg!(target_os = "linux") => {
                "Password copied to the clipboard. It stays there only if a clipboard manager takes it over.".to_string()
            }
            ClipboardHold::UntilExit => "Password copied to the clipboard.".to_string(),
        };
        Self::new(NotificationKind::Success, "Copied", &description)
    }

    pub fn copy_failed(reason: &str) -> Self {
        Self::new(NotificationKind::Error, "Copy failed", reason)
    }

    pub fn stats_reset() -> Self {
        Self::new(
            NotificationKind::Info,
            "Stats reset",
            "Session counter set to 0. The lifetime total is kept.",
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }

    /// Errors go to stderr, everything else to stdout.
    pub fn emit(&self) {
        if self.is_error() {
            eprintln!("{}", self);
        } else {
            println!("{}", self);
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            NotificationKind::Info => "ℹ️",
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
        };
        write!(f, "{} {}: {}", marker, self.title, self.description)
    }
}
