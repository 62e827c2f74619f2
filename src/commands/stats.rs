use anyhow::{Context, Result};
use rpawogen::notify::Notification;
use rpawogen::stats::{self, JsonFileStore, StatsStore};

pub fn show_stats(reset_session: bool) -> Result<()> {
    let store = JsonFileStore::open_default().context("Failed to locate stats storage")?;
    let mut stats = store.load();

    if reset_session {
        stats::reset_session(&mut stats, &store).context("Failed to save usage stats")?;
        Notification::stats_reset().emit();
    }

    println!("{:<20} | {:<10}", "Counter", "Value");
    println!("{}", "-".repeat(33));
    println!("{:<20} | {:<10}", "Total generated", stats.total_generated);
    println!("{:<20} | {:<10}", "This session", stats.sessions_generated);
    let last = stats.last_generated_at.map_or("never".to_string(), |d| {
        d.format("%Y-%m-%d %H:%M:%S").to_string()
    });
    println!("{:<20} | {:<10}", "Last generated", last);
    println!("\nStored at: {}", store.path().display());
    Ok(())
}
