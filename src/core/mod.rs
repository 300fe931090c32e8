//! Core logic - framework-agnostic catalog, rendering and shop workflow.
//!
//! Nothing in this module talks to Discord directly. The bot layer supplies a
//! [`shop::ShopSurface`] implementation and turns the rendered views into
//! serenity builders.

/// In-memory product catalog
pub mod catalog;
/// Cards and menus as plain data
pub mod render;
/// `/add` workflow, shop message lookup and menu selection
pub mod shop;
