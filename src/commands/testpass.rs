use anyhow::Result;
use rpawogen::strength::{assess_password, zxcvbn_suggestions, MAX_SCORE};

pub fn test_password(password: &str) -> Result<()> {
    let report = assess_password(password);
    println!(
        "{} Password strength: {} (score: {}/{}, color: {})",
        report.level.marker(),
        report.level,
        report.score,
        MAX_SCORE,
        report.level.color()
    );
    let suggestions = zxcvbn_suggestions(password);
    if !suggestions.is_empty() {
        println!("Suggestions: {}", suggestions.join(" "));
    }
    Ok(())
}
