// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live regex-literal preview engine.
//!
//! Finds regex literals in source text, evaluates the one under the
//! caret against a sample text, and keeps the highlights of every
//! visible view in sync with it.
//!
//! - [`scanner`] and [`dialect`]: literal grammars and line scanning
//! - [`pattern`]: compiling literals and evaluating matches
//! - [`tracker`]: the literal under the caret, and per-document listing
//! - [`view`]: view roles and highlight synchronization
//! - [`session`]: event-driven session owning all preview state

pub mod cli;
pub mod color;
pub mod config;
pub mod dialect;
pub mod discovery;
pub mod document;
pub mod error;
pub mod host;
pub mod language;
pub mod literal;
pub mod pattern;
pub mod report;
pub mod sample;
pub mod scanner;
pub mod session;
pub mod tracker;
pub mod view;

#[cfg(test)]
pub mod test_utils;
