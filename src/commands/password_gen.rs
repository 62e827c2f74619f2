use anyhow::{Context, Result};
use log::warn;
use rpawogen::configtool::AppConfig;
use rpawogen::notify::Notification;
use rpawogen::passgen::{GenError, IndexSource, OsIndexSource, PasswordOptions, SeededIndexSource};
use rpawogen::session::GenerationSession;
use rpawogen::setclip::copy_to_clipboard;
use rpawogen::stats::{JsonFileStore, UsageStats};
use rpawogen::strength::{assess_password, zxcvbn_suggestions, MAX_SCORE};

use crate::GenArgs;

fn merge_options(config: &AppConfig, args: &GenArgs) -> PasswordOptions {
    let mut options = config.password_options();
    if let Some(length) = args.length {
        options.length = length;
    }
    options.include_uppercase &= !args.no_uppercase;
    options.include_lowercase &= !args.no_lowercase;
    options.include_numbers &= !args.no_numbers;
    options.include_symbols &= !args.no_symbols;
    options
}

fn generate_with<R: IndexSource>(
    store: JsonFileStore,
    source: R,
    options: &PasswordOptions,
) -> Result<(String, UsageStats), GenError> {
    let mut session = GenerationSession::new(store, source);
    let password = session.generate(options)?;
    Ok((password, session.stats().clone()))
}

pub fn generate_random(args: GenArgs) -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    let options = merge_options(&config, &args);
    let store = JsonFileStore::open_default().context("Failed to locate stats storage")?;

    let result = match args.seed {
        Some(seed) => {
            warn!("Seeded output is reproducible; do not use it as a real password");
            generate_with(store, SeededIndexSource::seeded(seed), &options)
        }
        None => generate_with(store, OsIndexSource::os(), &options),
    };
    let (password, stats) = match result {
        Ok(generated) => generated,
        Err(GenError::NoClassSelected) => {
            Notification::no_class_selected().emit();
            return Ok(());
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to generate password")),
    };

    println!("Generated password: {}", password);
    let report = assess_password(&password);
    println!(
        "{} Password strength: {} (score: {}/{}, color: {})",
        report.level.marker(),
        report.level,
        report.score,
        MAX_SCORE,
        report.level.color()
    );
    let suggestions = zxcvbn_suggestions(&password);
    if !suggestions.is_empty() {
        println!("Suggestions: {}", suggestions.join(" "));
    }
    Notification::generated(options.length).emit();
    println!(
        "Generated so far: {} total, {} this session",
        stats.total_generated, stats.sessions_generated
    );

    if args.copy {
        let notice = match copy_to_clipboard(&password, config.clipboard_clear_secs) {
            Ok(hold) => Notification::copied(hold),
            Err(e) => Notification::copy_failed(&e.to_string()),
        };
        notice.emit();
    }
    Ok(())
}
