// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

mod count;
mod mode;

use crate::{
    count::parse_count,
    mode::{
        check::run_mode_check,
        generate::{OutputFormat, run_mode_generate},
    },
};
use anyhow as ah;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Number of keys to generate.
    ///
    /// Values below 1 and values that are not a number
    /// generate a single key.
    #[arg(allow_hyphen_values = true)]
    count: Option<String>,

    /// Further positional arguments are ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    _rest: Vec<String>,

    /// Print each key as the head node serial command: #SMKEY <KEY>
    #[arg(long)]
    smkey: bool,

    /// Check a 32 hex character key instead of generating keys.
    ///
    /// The key is printed in its normalized uppercase form, if it is valid.
    #[arg(long, value_name = "HEX")]
    check: Option<String>,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

fn main() -> ah::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("LMKGEN_LOG", "warn")
            .write_style_or("LMKGEN_LOG_STYLE", "auto"),
    );

    let opts = Opts::parse();

    if opts.version {
        println!("lmkgen version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(key) = &opts.check {
        return run_mode_check(key);
    }

    let count = parse_count(opts.count.as_deref());
    let format = if opts.smkey {
        OutputFormat::Smkey
    } else {
        OutputFormat::Plain
    };
    run_mode_generate(count, format)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(args: &[&str]) -> Opts {
        Opts::try_parse_from(std::iter::once("lmkgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_opts() {
        let opts = parse(&[]);
        assert_eq!(opts.count, None);
        assert!(!opts.smkey);
        assert!(opts.check.is_none());
        assert!(!opts.version);

        assert_eq!(parse(&["5"]).count.as_deref(), Some("5"));
        assert_eq!(parse(&["abc"]).count.as_deref(), Some("abc"));
        assert_eq!(parse(&["-3"]).count.as_deref(), Some("-3"));
        assert_eq!(parse(&["--smkey", "2"]).count.as_deref(), Some("2"));
        assert!(parse(&["--smkey"]).smkey);
        assert!(parse(&["-v"]).version);
        assert!(parse(&["--version"]).version);
        assert_eq!(
            parse(&["--check", "00112233445566778899AABBCCDDEEFF"]).check.as_deref(),
            Some("00112233445566778899AABBCCDDEEFF")
        );

        assert_eq!(parse(&["1", "2"]).count.as_deref(), Some("1"));
        assert_eq!(parse(&["5", "extra"]).count.as_deref(), Some("5"));
        assert_eq!(parse(&["abc", "-x", "7"]).count.as_deref(), Some("abc"));
    }

    #[test]
    fn test_opts_count() {
        assert_eq!(parse_count(parse(&[]).count.as_deref()), 1);
        assert_eq!(parse_count(parse(&["1"]).count.as_deref()), 1);
        assert_eq!(parse_count(parse(&["5"]).count.as_deref()), 5);
        assert_eq!(parse_count(parse(&["abc"]).count.as_deref()), 1);
        assert_eq!(parse_count(parse(&["-3"]).count.as_deref()), 1);
        assert_eq!(parse_count(parse(&["0"]).count.as_deref()), 1);
        assert_eq!(parse_count(parse(&["5", "extra"]).count.as_deref()), 5);
        assert_eq!(parse_count(parse(&["1_000"]).count.as_deref()), 1000);
    }
}

// vim: ts=4 sw=4 expandtab
