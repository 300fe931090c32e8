//! Shared test utilities for the shop bot.
//!
//! Provides an in-memory [`MockSurface`] standing in for a Discord channel and
//! a few fixtures with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::config::{EmbedColor, ShopConfig};
use crate::core::render::ShopMenu;
use crate::core::shop::{PostedMessage, ShopIdentity, ShopSurface};
use crate::errors::{Error, Result};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// User id the bot runs as in tests
pub const TEST_BOT_ID: u64 = 900;
/// Some other member of the server
pub const OTHER_USER_ID: u64 = 901;
/// Channel the tests operate in
pub const TEST_CHANNEL: u64 = 500;
/// Shop title used by the fixtures
pub const TEST_SHOP_TITLE: &str = "Test Shop";

/// Shop configuration with a title, color and image set.
pub fn test_shop_config() -> ShopConfig {
    ShopConfig {
        title: TEST_SHOP_TITLE.to_string(),
        color: EmbedColor(0x0058_65F2),
        image: Some("https://example.com/shop.png".to_string()),
    }
}

/// Identity matching messages posted by [`TEST_BOT_ID`] titled [`TEST_SHOP_TITLE`].
pub fn test_identity() -> ShopIdentity {
    ShopIdentity {
        bot_user_id: TEST_BOT_ID,
        title: TEST_SHOP_TITLE.to_string(),
    }
}

/// An in-memory channel.
///
/// Messages are kept newest first, like Discord returns history. Every menu
/// replacement is recorded so tests can inspect what would have been sent.
#[derive(Debug, Default)]
pub struct MockSurface {
    messages: Mutex<Vec<PostedMessage>>,
    edits: Mutex<Vec<(u64, ShopMenu)>>,
    next_id: AtomicU64,
    history_requests: AtomicUsize,
    failing: AtomicBool,
}

impl MockSurface {
    /// Creates an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a message and returns its id.
    pub fn post(&self, author_id: u64, title: Option<&str>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.messages.lock().unwrap().insert(
            0,
            PostedMessage {
                id,
                author_id,
                title: title.map(str::to_string),
            },
        );
        id
    }

    /// Removes a message from the channel.
    pub fn delete(&self, id: u64) {
        self.messages.lock().unwrap().retain(|m| m.id != id);
    }

    /// Makes every subsequent request fail.
    pub fn fail_requests(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Menu replacements performed so far, oldest first.
    pub fn edits(&self) -> Vec<(u64, ShopMenu)> {
        self.edits.lock().unwrap().clone()
    }

    /// How many times recent history was fetched.
    pub fn history_requests(&self) -> usize {
        self.history_requests.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(Error::Platform {
                message: "simulated outage".to_string(),
            });
        }
        Ok(())
    }
}

impl ShopSurface for MockSurface {
    async fn recent_messages(&self, limit: u8) -> Result<Vec<PostedMessage>> {
        self.check()?;
        self.history_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .take(usize::from(limit))
            .cloned()
            .collect())
    }

    async fn message(&self, id: u64) -> Result<Option<PostedMessage>> {
        self.check()?;
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn replace_menu(&self, id: u64, menu: &ShopMenu) -> Result<()> {
        self.check()?;
        // Give other tasks a chance to run, as a real request would
        tokio::task::yield_now().await;
        if !self.messages.lock().unwrap().iter().any(|m| m.id == id) {
            return Err(Error::Platform {
                message: format!("unknown message {id}"),
            });
        }
        self.edits.lock().unwrap().push((id, menu.clone()));
        Ok(())
    }
}
