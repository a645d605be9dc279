// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use anyhow::{self as ah, Context as _};
use lmkgen_key::Key;

/// Parse a key the way the head node does and return its normalized form.
pub fn check_key(key: &str) -> ah::Result<String> {
    let key: Key = key.parse().context("Invalid key")?;
    Ok(key.to_hex())
}

/// Check the given key and print it, if it is valid.
pub fn run_mode_check(key: &str) -> ah::Result<()> {
    let key = check_key(key)?;
    println!("{key}");
    Ok(())
}


// vim: ts=4 sw=4 expandtab
