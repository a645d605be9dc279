// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

use crate::random::{EntropyUnavailable, secure_random};
use anyhow as ah;
use lmkgen_util::strings::{hex, parse_hex};
use subtle::ConstantTimeEq as _;

/// ESP-NOW keys are 128 bit in size.
pub const KEY_SIZE: usize = 128 / 8;

/// Pre-shared symmetric key.
#[derive(Clone)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Generate a new random key.
    pub fn random() -> Result<Self, EntropyUnavailable> {
        Ok(Self(secure_random()?))
    }

    /// Get the raw key.
    pub fn as_raw_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }

    /// Get the key as 32 uppercase hex characters.
    pub fn to_hex(&self) -> String {
        hex(&self.0)
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(raw: [u8; KEY_SIZE]) -> Self {
        Self(raw)
    }
}

impl PartialEq for Key {
    /// Constant-time compare.
    fn eq(&self, other: &Self) -> bool {
        self.as_raw_bytes().ct_eq(other.as_raw_bytes()).into()
    }
}

impl Eq for Key {}

impl std::str::FromStr for Key {
    type Err = ah::Error;

    fn from_str(s: &str) -> ah::Result<Self> {
        Ok(Self(parse_hex(s)?))
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_hex())
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "Key")
    }
}

/// Generate a new random key in its text form.
pub fn generate_key() -> Result<String, EntropyUnavailable> {
    Ok(Key::random()?.to_hex())
}


// vim: ts=4 sw=4 expandtab
