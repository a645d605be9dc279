// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

//! # ESP-NOW pre-shared key generation
//!
//! A [Key] is 16 bytes taken from the operating system's secure random source.
//! Its text form is 32 uppercase hex characters, as entered on the head node:
//!
//! `#SMKEY 00112233445566778899AABBCCDDEEFF`

#![forbid(unsafe_code)]

mod key;
mod random;

pub use key::{KEY_SIZE, Key, generate_key};
pub use random::{EntropyUnavailable, secure_random};

// vim: ts=4 sw=4 expandtab
