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
// A small password generator written in Rust.

use anyhow::Context;
use clap::Parser;
use rpawogen::passgen::{MAX_LENGTH, MIN_LENGTH};
use rpawogen::setclip;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(version, about = "A small password generator written in Rust", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Score a password's strength
    Testpass {
        /// Password to test
        password: String,
    },

    /// Show usage counters
    Stats {
        /// Reset the session counter (the lifetime total is kept)
        #[arg(long, default_value_t = false)]
        reset_session: bool,
    },

    /// Show the configuration file and its values
    Config {
        /// Overwrite the configuration with defaults
        #[arg(long, default_value_t = false)]
        reset: bool,
    },
}

#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Length of the password [default: from config, 12]
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    pub no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    pub copy: bool,

    /// Seed the generator for reproducible output (testing only)
    #[arg(long)]
    pub seed: Option<u64>,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(format!("length must be between {} and {}", MIN_LENGTH, MAX_LENGTH));
    }
    Ok(length)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    if setclip::is_daemon() {
        return setclip::run_daemon().context("Clipboard daemon failed");
    }

    let cli = Cli::parse();
    match cli {
        Cli::Gen(args) => commands::password_gen::generate_random(args),
        Cli::Testpass { password } => commands::testpass::test_password(&password),
        Cli::Stats { reset_session } => commands::stats::show_stats(reset_session),
        Cli::Config { reset } => commands::config::show_config(reset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_must_fall_in_slider_range() {
        assert_eq!(parse_length("8"), Ok(8));
        assert_eq!(parse_length("32"), Ok(32));
        assert!(parse_length("7").is_err());
        assert!(parse_length("33").is_err());
        assert!(parse_length("twelve").is_err());
    }

    #[test]
    fn gen_flags_parse() {
        let cli = Cli::try_parse_from(["rpawogen", "gen", "-l", "16", "--no-symbols", "--seed", "7"]).unwrap();
        match cli {
            Cli::Gen(args) => {
                assert_eq!(args.length, Some(16));
                assert!(args.no_symbols);
                assert!(!args.no_uppercase);
                assert_eq!(args.seed, Some(7));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
