// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and match evaluation for previewed literals.
//!
//! - `matcher`: turns (pattern, flags) into a [`CompiledMatcher`]
//! - `evaluate`: runs a matcher over a target text

pub mod evaluate;
pub mod matcher;

pub use evaluate::evaluate;
pub use matcher::{CompiledMatcher, Flags, PatternError, compile};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
