// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use anyhow::{self as ah, format_err as err};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encode `data` as an uppercase hex string.
pub fn hex(data: &[u8]) -> String {
    let mut s = String::with_capacity(data.len() * 2);
    for b in data {
        s.push(HEX_DIGITS[usize::from(b >> 4)].into());
        s.push(HEX_DIGITS[usize::from(b & 0xF)].into());
    }
    s
}

fn parse_hexdigit(c: char) -> ah::Result<u8> {
    let Some(d) = c.to_digit(16) else {
        return Err(err!("Invalid hex digit '{c}'"));
    };
    Ok(d.try_into()?)
}

/// Parse a hex string of exactly `SIZE` bytes.
///
/// Surrounding whitespace is ignored and both upper and lower case digits are accepted.
pub fn parse_hex<const SIZE: usize>(s: &str) -> ah::Result<[u8; SIZE]> {
    let s = s.trim();
    if !s.is_ascii() {
        return Err(err!("Hex string contains invalid characters."));
    }
    let len = s.len();
    if len != SIZE * 2 {
        return Err(err!(
            "Hex string is not correct: Expected {}, got {} chars",
            SIZE * 2,
            len,
        ));
    }
    let mut ret = [0; SIZE];
    for (r, pair) in ret.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
        *r = parse_hexdigit(pair[0].into())? << 4;
        *r |= parse_hexdigit(pair[1].into())?;
    }
    Ok(ret)
}


// vim: ts=4 sw=4 expandtab
