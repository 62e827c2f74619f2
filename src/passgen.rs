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
// Password generator

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use log::debug;
use thiserror::Error;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// 命令行可选长度范围
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 32;
pub const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenError {
    #[error("At least one character set must be included")]
    NoClassSelected,
    #[error("Password length must be at least 1")]
    InvalidLength,
}

/// Length plus the four character-class switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl PasswordOptions {
    pub fn has_any_class(&self) -> bool {
        self.include_uppercase || self.include_lowercase || self.include_numbers || self.include_symbols
    }
}

/// Source of uniformly distributed indices in `0..max`.
///
/// Callers never pass `max == 0`.
pub trait IndexSource {
    fn next_index(&mut self, max: usize) -> usize;
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    fn next_index(&mut self, max: usize) -> usize {
        (**self).next_index(max)
    }
}

/// Adapts any `rand` generator into an [`IndexSource`].
#[derive(Debug, Clone)]
pub struct RngIndexSource<R> {
    rng: R,
}

impl<R: RngCore> RngIndexSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> IndexSource for RngIndexSource<R> {
    fn next_index(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }
}

pub type OsIndexSource = RngIndexSource<OsRng>;
pub type SeededIndexSource = RngIndexSource<ChaCha20Rng>;

impl RngIndexSource<OsRng> {
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl RngIndexSource<ChaCha20Rng> {
    /// Same seed, same passwords. Only meant for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        debug!("Using seeded index source");
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

/// Concatenates the selected sets in the fixed order
/// uppercase, lowercase, numbers, symbols.
pub fn build_alphabet(options: &PasswordOptions) -> Vec<char> {
    let mut char_pool = String::new();
    if options.include_uppercase { char_pool.push_str(UPPERCASE); }
    if options.include_lowercase { char_pool.push_str(LOWERCASE); }
    if options.include_numbers { char_pool.push_str(NUMBERS); }
    if options.include_symbols { char_pool.push_str(SYMBOLS); }
    char_pool.chars().collect()
}

/// Samples `options.length` characters with replacement from the alphabet.
///
/// Fails before touching `source` when no class is selected.
pub fn generate_password<S>(options: &PasswordOptions, source: &mut S) -> Result<String, GenError>
where
    S: IndexSource + ?Sized,
{
    if !options.has_any_class() {
        return Err(GenError::NoClassSelected);
    }
    if options.length == 0 {
        return Err(GenError::InvalidLength);
    }
    let all_chars = build_alphabet(options);
    debug!("Sampling {} characters from a {}-character alphabet", options.length, all_chars.len());

    let password = (0..options.length)
        .map(|_| all_chars[source.next_index(all_chars.len())])
        .collect();
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_set_has_26_distinct_characters() {
        let mut chars: Vec<char> = SYMBOLS.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), 26);
        assert!(chars.iter().all(|c| !c.is_ascii_alphanumeric()));
    }

    #[test]
    fn full_alphabet_is_88_characters() {
        assert_eq!(build_alphabet(&PasswordOptions::default()).len(), 88);
    }
}
