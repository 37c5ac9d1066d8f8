// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::core::Config;
use crate::models::PasswordGenerationOptions;
use crate::patterns::{DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid argument: password length {length} is below the minimum of {minimum}")]
    InvalidArgument { length: usize, minimum: usize },

    #[error("Password length {length} exceeds the maximum of {maximum}")]
    LengthTooLong { length: usize, maximum: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Smallest length that still fits one character of every mandatory class.
pub fn minimum_length(include_symbols: bool) -> usize {
    if include_symbols {
        4
    } else {
        3
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8]) -> u8 {
    set[rng.gen_range(0..set.len())]
}

/// Generates a password using the thread-local generator.
pub fn generate(length: usize, include_symbols: bool) -> Result<String> {
    generate_with_rng(&mut rand::thread_rng(), length, include_symbols)
}

/// Generates a password of exactly `length` characters containing at least
/// one lowercase letter, uppercase letter and digit, plus a symbol when
/// `include_symbols` is set.
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    include_symbols: bool,
) -> Result<String> {
    let minimum = minimum_length(include_symbols);
    if length < minimum {
        log::debug!("rejected password length {} (minimum {})", length, minimum);
        return Err(GeneratorError::InvalidArgument { length, minimum });
    }

    let mut classes = vec![LOWERCASE.as_bytes(), UPPERCASE.as_bytes(), DIGITS.as_bytes()];
    if include_symbols {
        classes.push(SYMBOLS.as_bytes());
    }
    let charset: Vec<u8> = classes.concat();

    let mut password: Vec<u8> = Vec::with_capacity(length);

    // Ensure at least one character from each required set
    for class in &classes {
        password.push(pick(rng, class));
    }

    while password.len() < length {
        password.push(pick(rng, &charset));
    }

    password.shuffle(rng);

    log::debug!(
        "generated password of length {} (symbols: {})",
        length,
        include_symbols
    );

    // Every byte comes from an ASCII table
    Ok(password.into_iter().map(char::from).collect())
}

pub struct PasswordGenerator {
    config: Config,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        PasswordGenerator {
            config: config.clone(),
        }
    }

    pub fn default_options(&self) -> PasswordGenerationOptions {
        PasswordGenerationOptions {
            length: self.config.default_password_length,
            include_symbols: self.config.default_include_symbols,
        }
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        if options.length > self.config.max_password_length {
            return Err(GeneratorError::LengthTooLong {
                length: options.length,
                maximum: self.config.max_password_length,
            });
        }
        generate(options.length, options.include_symbols)
    }

    pub fn generate_default(&self) -> Result<String> {
        self.generate_password(&self.default_options())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
