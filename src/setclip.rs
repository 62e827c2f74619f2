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
// Clipboard handler

use arboard::Clipboard;
use log::{info, warn};
use std::{env, process, time::Duration};
use thiserror::Error;

pub const DAEMON_ENV: &str = "RPAWOGEN_CLIPBOARD_DAEMON";
const SECRET_ENV: &str = "RPAWOGEN_CLIPBOARD_SECRET";
const DELAY_ENV: &str = "RPAWOGEN_CLIPBOARD_DELAY";

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("No password has been generated yet")]
    NothingToCopy,
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("Clipboard daemon error: {0}")]
    Daemon(String),
}

fn spawn_daemon(secret: &str, delay_secs: u64) -> std::io::Result<()> {
    let exe_path = env::current_exe()?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, "1")
       .env(SECRET_ENV, secret)
       .env(DELAY_ENV, delay_secs.to_string())
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd.spawn()?;
    Ok(())
}

/// How long a copied password stays available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardHold {
    /// A daemon owns the clipboard and clears it after this many seconds.
    Timed(u64),
    /// Nothing keeps the content alive after this process exits. On X11 and
    /// Wayland it survives only if a clipboard manager takes it over.
    UntilExit,
}

// X11/Wayland 上内容随所有者退出而丢失，守护进程需持有选区直到超时
#[cfg(target_os = "linux")]
fn hold_selection(ctx: &mut Clipboard, secret: &str, delay_secs: u64) -> Result<(), ClipError> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    let deadline = Instant::now() + Duration::from_secs(delay_secs);
    ctx.set().wait_until(deadline).text(secret)?;
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn hold_selection(_ctx: &mut Clipboard, _secret: &str, delay_secs: u64) -> Result<(), ClipError> {
    std::thread::sleep(Duration::from_secs(delay_secs));
    Ok(())
}

fn daemon_task(secret: &str, delay_secs: u64) -> Result<(), ClipError> {
    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("[daemon] clipboard unavailable: {}", e);
            return Ok(());
        }
    };
    hold_selection(&mut ctx, secret, delay_secs)?;

    // 只清除仍是本次密码的内容
    let current_content = ctx.get_text().unwrap_or_default();
    if current_content == secret {
        ctx.set_text("")?;
        info!("[daemon] clipboard cleared");
    } else {
        info!("[daemon] clipboard changed, leaving it alone");
    }
    Ok(())
}

/// True when this process was started as the clipboard-clearing daemon.
pub fn is_daemon() -> bool {
    env::var_os(DAEMON_ENV).is_some()
}

/// Entry point of the daemon process; reads its job from the environment.
pub fn run_daemon() -> Result<(), ClipError> {
    let secret = env::var(SECRET_ENV)
        .map_err(|_| ClipError::Daemon(format!("{} is not set", SECRET_ENV)))?;
    let delay_secs = env::var(DELAY_ENV)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .ok_or_else(|| ClipError::Daemon(format!("{} is missing or invalid", DELAY_ENV)))?;
    daemon_task(&secret, delay_secs)
}

/// Copies `secret` to the clipboard.
///
/// With `clear_after_secs > 0` a detached daemon keeps the password available
/// and clears it after the delay, unless something else was copied meanwhile.
pub fn copy_to_clipboard(secret: &str, clear_after_secs: u64) -> Result<ClipboardHold, ClipError> {
    if secret.is_empty() {
        return Err(ClipError::NothingToCopy);
    }
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;

    if clear_after_secs == 0 {
        return Ok(ClipboardHold::UntilExit);
    }
    match spawn_daemon(secret, clear_after_secs) {
        Ok(()) => Ok(ClipboardHold::Timed(clear_after_secs)),
        Err(e) => {
            warn!("Could not start clipboard cleaner: {}", e);
            Ok(ClipboardHold::UntilExit)
        }
    }
}
