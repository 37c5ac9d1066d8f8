// src/patterns.rs
use lazy_static::lazy_static;

use crate::models::WeakPatterns;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Well-known weak passwords. Matched case-insensitively as substrings.
pub const COMMON_PASSWORDS: [&str; 35] = [
    "123456",
    "password",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "1234567890",
    "qwerty",
    "abc123",
    "million2",
    "000000",
    "1234",
    "iloveyou",
    "aaron431",
    "password1",
    "qqww1122",
    "123",
    "omgpop",
    "123321",
    "654321",
    "qwertyuiop",
    "qwer1234",
    "admin",
    "Password",
    "QWERTY",
    "1q2w3e4r",
    "welcome",
    "monkey",
    "dragon",
    "letmein",
    "master",
    "sunshine",
    "princess",
    "azerty",
    "trustno1",
];

// Three-character ascending runs. "890" is a digit run as well.
const SEQUENTIAL_RUNS: [&str; 33] = [
    "012", "123", "234", "345", "456", "567", "678", "789", "890",
    "abc", "bcd", "cde", "def", "efg", "fgh", "ghi", "hij", "ijk", "jkl", "klm",
    "lmn", "mno", "nop", "opq", "pqr", "qrs", "rst", "stu", "tuv", "uvw", "vwx", "wxy",
    "xyz",
];

lazy_static! {
    static ref COMMON_PASSWORDS_LOWER: Vec<String> = {
        let mut entries: Vec<String> = COMMON_PASSWORDS
            .iter()
            .map(|p| p.to_lowercase())
            .collect();
        entries.sort();
        entries.dedup();
        entries
    };
}

pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// True if the password equals or contains a dictionary entry, ignoring case.
pub fn contains_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PASSWORDS_LOWER
        .iter()
        .any(|pattern| lower.contains(pattern.as_str()))
}

/// True if the same character appears three or more times in a row.
pub fn has_repeated_characters(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(3)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

/// True if the password contains an ascending letter or digit run like "abc" or "789".
pub fn has_sequential_characters(password: &str) -> bool {
    let chars: Vec<char> = password.chars().map(|c| c.to_ascii_lowercase()).collect();
    chars.windows(3).any(|w| {
        SEQUENTIAL_RUNS
            .iter()
            .any(|run| run.chars().eq(w.iter().copied()))
    })
}

pub fn detect(password: &str) -> WeakPatterns {
    WeakPatterns {
        common_password: contains_common_password(password),
        repeated_characters: has_repeated_characters(password),
        sequential_characters: has_sequential_characters(password),
    }
}
