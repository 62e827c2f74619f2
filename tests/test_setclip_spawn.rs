use rpawogen::setclip::{is_daemon, run_daemon, ClipError, DAEMON_ENV};
use arboard::Clipboard;
use std::env;
use std::sync::Mutex;

const SECRET_ENV: &str = "RPAWOGEN_CLIPBOARD_SECRET";
const DELAY_ENV: &str = "RPAWOGEN_CLIPBOARD_DELAY";

// 守护进程读取进程级环境变量，测试之间需串行
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
#[ignore = "needs a desktop clipboard"]
fn test_daemon_clears_only_unmodified_content() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var(DAEMON_ENV, "1");
        env::set_var(SECRET_ENV, "test_password_456");
        env::set_var(DELAY_ENV, "1");
    }
    assert!(is_daemon());

    let mut clipboard = Clipboard::new().expect("Failed to initialize clipboard");
    let original = clipboard.get_text().ok();

    clipboard.set_text("test_password_456").unwrap();
    assert!(run_daemon().is_ok());
    assert_eq!(clipboard.get_text().unwrap_or_default(), "", "Should clear unmodified content");

    // Linux 上守护进程自己持有选区，改动只能来自其他程序
    #[cfg(not(target_os = "linux"))]
    {
        clipboard.set_text("different_content").unwrap();
        assert!(run_daemon().is_ok());
        assert_eq!(clipboard.get_text().unwrap_or_default(), "different_content", "Should not clear modified content");
    }

    unsafe {
        env::remove_var(DAEMON_ENV);
        env::remove_var(SECRET_ENV);
        env::remove_var(DELAY_ENV);
    }
    if let Some(original) = original {
        let _ = clipboard.set_text(original);
    }
}

#[test]
fn test_daemon_without_secret_reports_error() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::remove_var(SECRET_ENV);
        env::set_var(DELAY_ENV, "1");
    }
    let result = run_daemon();
    unsafe {
        env::remove_var(DELAY_ENV);
    }
    assert!(matches!(result, Err(ClipError::Daemon(_))));
}

#[test]
fn test_daemon_with_invalid_delay_reports_error() {
    let _env = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    unsafe {
        env::set_var(SECRET_ENV, "test_password_456");
        env::set_var(DELAY_ENV, "soon");
    }
    let result = run_daemon();
    unsafe {
        env::remove_var(SECRET_ENV);
        env::remove_var(DELAY_ENV);
    }
    assert!(matches!(result, Err(ClipError::Daemon(_))));
}
