// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

lmkgen_util::define_simple_error!(EntropyUnavailable);

/// Generate a cryptographically secure random token.
pub fn secure_random<const SZ: usize>() -> Result<[u8; SZ], EntropyUnavailable> {
    // Get secure random bytes from the operating system.
    let mut buf: [u8; SZ] = [0; SZ];
    if let Err(e) = getrandom::fill(&mut buf) {
        log::error!("getrandom: {e}");
        return Err(EntropyUnavailable::new(
            "Failed to read secure random bytes from the operating system. (getrandom failed)",
        ));
    }
    check_sanity(&buf)?;
    Ok(buf)
}

/// Check if the getrandom implementation is a no-op or otherwise trivially broken.
fn check_sanity(buf: &[u8]) -> Result<(), EntropyUnavailable> {
    // For lengths bigger than 11 bytes the likelyhood of the checks below
    // triggering on a good generator is low enough.
    if buf.len() < 12 {
        return Ok(());
    }
    let first = buf[0];
    if buf.iter().all(|x| *x == first) {
        return Err(EntropyUnavailable::new(
            "The operating system random source returned constant bytes.",
        ));
    }
    Ok(())
}


// vim: ts=4 sw=4 expandtab
