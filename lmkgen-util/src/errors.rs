// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Define a simple error type that carries a static reason text.
#[macro_export]
macro_rules! define_simple_error {
    ($name:ident) => {
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub struct $name(&'static str);

        impl $name {
            pub const fn new(reason: &'static str) -> Self {
                Self(reason)
            }

            pub fn reason(&self) -> &'static str {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
                write!(f, "{}: {}", std::stringify!($name), self.0)
            }
        }

        impl std::error::Error for $name {}
    };
}


// vim: ts=4 sw=4 expandtab
