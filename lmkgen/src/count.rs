// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

/// Number of keys generated, if no usable count was given.
pub const DEFAULT_COUNT: u64 = 1;

/// Parsed integer count argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntArg {
    /// Zero or a negative number.
    BelowOne,
    /// Positive number. Saturates at `u64::MAX`.
    Positive(u64),
}

/// Parse a decimal integer with optional sign.
///
/// Single underscores between digits are allowed, e.g. `1_000`.
fn parse_int(s: &str) -> Option<IntArg> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
        || !digits.bytes().all(|c| c.is_ascii_digit() || c == b'_')
    {
        return None;
    }
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if negative {
        return Some(IntArg::BelowOne);
    }
    // Only overflow can fail here. The digits have been checked above.
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    if value == 0 {
        Some(IntArg::BelowOne)
    } else {
        Some(IntArg::Positive(value))
    }
}

/// Get the number of keys to generate from the command line argument.
///
/// This never fails. Anything that is not an integer falls back to
/// [DEFAULT_COUNT] and integers below 1 are clamped to 1.
pub fn parse_count(arg: Option<&str>) -> u64 {
    let Some(arg) = arg else {
        return DEFAULT_COUNT;
    };
    match parse_int(arg.trim()) {
        Some(IntArg::Positive(count)) => count,
        Some(IntArg::BelowOne) => {
            log::debug!("Key count '{arg}' is below 1. Using 1.");
            1
        }
        None => {
            log::debug!("Ignoring invalid key count '{arg}'.");
            DEFAULT_COUNT
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None), 1);
        assert_eq!(parse_count(Some("1")), 1);
        assert_eq!(parse_count(Some("5")), 5);
        assert_eq!(parse_count(Some("+7")), 7);
        assert_eq!(parse_count(Some(" 12\n")), 12);
        assert_eq!(parse_count(Some("007")), 7);
        assert_eq!(parse_count(Some("1000000")), 1_000_000);
        assert_eq!(parse_count(Some("1_000")), 1000);
        assert_eq!(parse_count(Some("1_0_0")), 100);
        assert_eq!(parse_count(Some("99999999999999999999")), u64::MAX);
        assert_eq!(parse_count(Some("18446744073709551615")), u64::MAX);

        assert_eq!(parse_count(Some("0")), 1);
        assert_eq!(parse_count(Some("-0")), 1);
        assert_eq!(parse_count(Some("-3")), 1);
        assert_eq!(parse_count(Some("-9223372036854775808")), 1);
        assert_eq!(parse_count(Some("-99999999999999999999")), 1);
        assert_eq!(parse_count(Some("-1_000")), 1);

        assert_eq!(parse_count(Some("abc")), 1);
        assert_eq!(parse_count(Some("")), 1);
        assert_eq!(parse_count(Some("-")), 1);
        assert_eq!(parse_count(Some("+")), 1);
        assert_eq!(parse_count(Some("2.5")), 1);
        assert_eq!(parse_count(Some("0x10")), 1);
        assert_eq!(parse_count(Some("--foo")), 1);
        assert_eq!(parse_count(Some("+-5")), 1);
        assert_eq!(parse_count(Some("_100")), 1);
        assert_eq!(parse_count(Some("100_")), 1);
        assert_eq!(parse_count(Some("1__000")), 1);
        assert_eq!(parse_count(Some("1 000")), 1);
    }
}

// vim: ts=4 sw=4 expandtab
