//! `ShopBuddy` - A Discord bot presenting a product catalog through a select menu
//!
//! Administrators post a shop message with `/setup` and fill its menu with
//! `/add`; members pick a product from the menu to see its details privately.
//! The catalog lives in memory for the lifetime of the process.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
)]

// Note: `missing_docs` is a warning because macro-generated code
// (e.g., `poise::command`) doesn't include docs

/// Discord bot interface - commands, handlers, and bot context
pub mod bot;
/// Configuration loading from config.toml and the environment
pub mod config;
/// Core logic - framework-agnostic catalog, rendering and shop workflow
pub mod core;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
