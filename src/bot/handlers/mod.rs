//! Discord interaction handlers
//!
//! This module provides handlers for everything that is not a slash command
//! invocation: gateway events, the shop select menu and framework errors.

/// Framework error handling and the private fallback reply
pub mod error;
/// Gateway event dispatch
pub mod event;
/// `shop_select` menu handler
pub mod select;
