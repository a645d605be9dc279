// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, Context as _};
use lmkgen_key::{EntropyUnavailable, generate_key};
use std::io::{BufWriter, Write};

/// How each generated key line is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The bare key.
    Plain,
    /// The head node serial command that sets the ESP-NOW LMK.
    Smkey,
}

/// Take `count` keys from `next_key` and write them to `out`.
///
/// Stops at the first key that can't be generated.
/// Lines written before that stay in `out`.
pub fn write_keys<W, F>(
    count: u64,
    format: OutputFormat,
    mut next_key: F,
    out: &mut W,
) -> ah::Result<()>
where
    W: Write,
    F: FnMut() -> Result<String, EntropyUnavailable>,
{
    log::debug!("Generating {count} key(s).");
    for _ in 0..count {
        let key = next_key().context("Generate key")?;
        let res = match format {
            OutputFormat::Plain => writeln!(out, "{key}"),
            OutputFormat::Smkey => writeln!(out, "#SMKEY {key}"),
        };
        res.context("Write key")?;
    }
    out.flush().context("Flush output")?;
    Ok(())
}

/// Generate `count` new truly random and secure keys to stdout.
pub fn run_mode_generate(count: u64, format: OutputFormat) -> ah::Result<()> {
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_keys(count, format, generate_key, &mut out)
}


// vim: ts=4 sw=4 expandtab
