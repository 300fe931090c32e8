//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord interface for the shop: the slash
//! commands, the select menu handler, conversion of rendered views into
//! serenity builders and the shared bot context.

/// Discord command implementations (general, shop)
pub mod commands;
/// Framework and client start-up
pub mod framework;
/// Discord interaction handlers (menu selection, errors, gateway events)
pub mod handlers;
/// User-facing reply texts
pub mod replies;
/// Serenity-backed [`ShopSurface`](crate::core::shop::ShopSurface)
pub mod surface;
/// Rendered views to serenity builders
pub mod views;

use crate::config::AppConfig;
use crate::core::shop::ShopState;
use crate::errors::Error;
use std::sync::Arc;

/// Shared data available to all bot commands and event handlers.
pub struct BotData {
    /// Application configuration loaded at start-up
    pub app_config: Arc<AppConfig>,
    /// Catalog and shop message bookkeeping
    pub shop: ShopState,
}

impl BotData {
    /// Creates bot data with an empty catalog.
    #[must_use]
    pub fn new(app_config: Arc<AppConfig>) -> Self {
        Self {
            app_config,
            shop: ShopState::new(),
        }
    }
}

/// Poise context used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

pub use framework::run_bot;
