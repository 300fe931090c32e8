//! Shop workflow - catalog mutation, shop message location and product selection.
//!
//! [`ShopState`] is the only state shared between events. It is owned by the
//! bot's user data and handed to every handler, so the workflow runs the same
//! against Discord or against an in-memory [`ShopSurface`] in tests.

use crate::config::ShopConfig;
use crate::core::catalog::{Catalog, Product};
use crate::core::render::{self, Card, NO_PRODUCTS_VALUE, ShopMenu};
use crate::errors::Result;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument};

/// How many recent channel messages are searched for the shop message
pub const HISTORY_SCAN_LIMIT: u8 = 100;

/// The parts of a channel message needed to recognise the shop message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    /// Message id
    pub id: u64,
    /// Id of the user who posted it
    pub author_id: u64,
    /// Title of the first embed, if the message has one
    pub title: Option<String>,
}

/// What makes a message the shop message: posted by the bot, titled with the
/// configured shop title.
#[derive(Debug, Clone)]
pub struct ShopIdentity {
    /// The bot's own user id
    pub bot_user_id: u64,
    /// Configured shop title
    pub title: String,
}

impl ShopIdentity {
    /// Whether `message` is a shop message.
    #[must_use]
    pub fn matches(&self, message: &PostedMessage) -> bool {
        message.author_id == self.bot_user_id && message.title.as_deref() == Some(&self.title)
    }
}

/// The platform operations the workflow needs, scoped to one channel.
pub trait ShopSurface {
    /// Fetches up to `limit` of the newest messages, newest first.
    fn recent_messages(&self, limit: u8)
    -> impl Future<Output = Result<Vec<PostedMessage>>> + Send;

    /// Fetches one message, `None` if it no longer exists.
    fn message(&self, id: u64) -> impl Future<Output = Result<Option<PostedMessage>>> + Send;

    /// Replaces the components of message `id` with `menu`.
    fn replace_menu(&self, id: u64, menu: &ShopMenu) -> impl Future<Output = Result<()>> + Send;
}

/// Result of `/add` once the catalog has been updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The shop message's menu now lists the catalog
    MenuUpdated {
        /// The edited message
        message_id: u64,
    },
    /// No shop message exists in the channel yet
    ShopMissing,
    /// The caller is not a shop administrator; nothing was changed
    Rejected,
}

/// Result of `/setup`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Post a new shop message carrying this card and menu
    Post {
        /// The shop card
        card: Card,
        /// Always the placeholder menu
        menu: ShopMenu,
    },
    /// The caller is not a shop administrator
    Rejected,
}

/// Whether the caller may run an admin command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The caller holds the admin role
    Granted,
    /// The caller lacks the admin role
    Denied,
}

/// Result of choosing an option from the shop menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The placeholder option was chosen
    NoProducts,
    /// The chosen product
    Found(Product),
    /// The value names no product in the catalog
    NotFound,
}

/// State shared by every event handler.
#[derive(Debug, Default)]
pub struct ShopState {
    catalog: RwLock<Catalog>,
    /// Last known shop message per channel
    shop_messages: Mutex<HashMap<u64, u64>>,
    /// Serialises `/add` per channel
    channel_locks: Mutex<HashMap<u64, Arc<Mutex<()>>>>,
}

impl ShopState {
    /// Creates state with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a product by name.
    pub async fn product(&self, name: &str) -> Option<Product> {
        self.catalog.read().await.get(name).cloned()
    }

    /// Number of products in the catalog.
    pub async fn product_count(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Renders the menu for the current catalog.
    pub async fn catalog_menu(&self) -> ShopMenu {
        render::catalog_menu(&*self.catalog.read().await)
    }

    /// Records `message_id` as the shop message of `channel_id`.
    pub async fn remember_shop_message(&self, channel_id: u64, message_id: u64) {
        self.shop_messages
            .lock()
            .await
            .insert(channel_id, message_id);
    }

    /// The shop message last recorded for `channel_id`.
    pub async fn remembered_shop_message(&self, channel_id: u64) -> Option<u64> {
        self.shop_messages.lock().await.get(&channel_id).copied()
    }

    async fn forget_shop_message(&self, channel_id: u64) {
        self.shop_messages.lock().await.remove(&channel_id);
    }

    async fn channel_lock(&self, channel_id: u64) -> Arc<Mutex<()>> {
        Arc::clone(
            self.channel_locks
                .lock()
                .await
                .entry(channel_id)
                .or_default(),
        )
    }

    /// Drops the channel's lock entry once no other `/add` holds or awaits it.
    async fn release_channel_lock(&self, channel_id: u64, lock: Arc<Mutex<()>>) {
        let mut locks = self.channel_locks.lock().await;
        // Clones are only taken under `channel_locks`, so the count is stable here
        let only_map_left = locks
            .get(&channel_id)
            .is_some_and(|entry| Arc::ptr_eq(entry, &lock) && Arc::strong_count(&lock) == 2);
        if only_map_left {
            locks.remove(&channel_id);
        }
    }

    #[cfg(test)]
    pub(crate) async fn channel_lock_count(&self) -> usize {
        self.channel_locks.lock().await.len()
    }
}

/// Maps the caller's roles to [`Access`].
#[must_use]
pub fn authorize(member_roles: impl IntoIterator<Item = u64>, admin_role: u64) -> Access {
    if is_admin(member_roles, admin_role) {
        Access::Granted
    } else {
        Access::Denied
    }
}

/// Whether a member holding `member_roles` is a shop administrator.
#[must_use]
pub fn is_admin(member_roles: impl IntoIterator<Item = u64>, admin_role: u64) -> bool {
    member_roles.into_iter().any(|role| role == admin_role)
}

/// Finds the shop message of a channel.
///
/// The id remembered for the channel is tried first; when it no longer
/// resolves to a matching message the newest [`HISTORY_SCAN_LIMIT`] messages
/// are scanned instead and a hit is remembered.
///
/// # Errors
/// Returns an error if fetching messages from the platform fails.
pub async fn locate_shop_message<S: ShopSurface + Sync>(
    state: &ShopState,
    surface: &S,
    channel_id: u64,
    identity: &ShopIdentity,
) -> Result<Option<u64>> {
    if let Some(remembered) = state.remembered_shop_message(channel_id).await {
        match surface.message(remembered).await? {
            Some(message) if identity.matches(&message) => return Ok(Some(remembered)),
            _ => {
                debug!(
                    "Remembered shop message {} in channel {} no longer resolves",
                    remembered, channel_id
                );
                state.forget_shop_message(channel_id).await;
            }
        }
    }

    let found = surface
        .recent_messages(HISTORY_SCAN_LIMIT)
        .await?
        .into_iter()
        .find(|message| identity.matches(message))
        .map(|message| message.id);

    if let Some(message_id) = found {
        state.remember_shop_message(channel_id, message_id).await;
    }
    Ok(found)
}

/// Adds or overwrites a product and refreshes the channel's shop menu.
///
/// The catalog keeps the new entry even when no shop message is found or the
/// edit fails.
///
/// # Errors
/// Returns an error if fetching or editing the shop message fails.
#[instrument(skip(state, surface, identity, product), fields(product = %product.name))]
pub async fn add_product<S: ShopSurface + Sync>(
    state: &ShopState,
    surface: &S,
    channel_id: u64,
    identity: &ShopIdentity,
    product: Product,
) -> Result<AddOutcome> {
    let lock = state.channel_lock(channel_id).await;
    let outcome = {
        let _guard = lock.lock().await;
        upsert_and_refresh(state, surface, channel_id, identity, product).await
    };
    state.release_channel_lock(channel_id, lock).await;
    outcome
}

/// [`add_product`] for a caller whose [`Access`] is known.
///
/// A denied caller gets [`AddOutcome::Rejected`] and neither the catalog nor
/// the shop message is touched.
///
/// # Errors
/// Returns an error if fetching or editing the shop message fails.
pub async fn add_product_as<S: ShopSurface + Sync>(
    access: Access,
    state: &ShopState,
    surface: &S,
    channel_id: u64,
    identity: &ShopIdentity,
    product: Product,
) -> Result<AddOutcome> {
    match access {
        Access::Granted => add_product(state, surface, channel_id, identity, product).await,
        Access::Denied => {
            info!("Rejected product '{}' from non-admin", product.name);
            Ok(AddOutcome::Rejected)
        }
    }
}

/// What `/setup` posts, or a rejection for non-admins.
///
/// The menu always starts from the placeholder, whatever the catalog holds.
#[must_use]
pub fn setup_shop(access: Access, shop: &ShopConfig, now: DateTime<Utc>) -> SetupOutcome {
    match access {
        Access::Granted => SetupOutcome::Post {
            card: render::shop_card(shop, now),
            menu: render::placeholder_menu(),
        },
        Access::Denied => SetupOutcome::Rejected,
    }
}

async fn upsert_and_refresh<S: ShopSurface + Sync>(
    state: &ShopState,
    surface: &S,
    channel_id: u64,
    identity: &ShopIdentity,
    product: Product,
) -> Result<AddOutcome> {
    let name = product.name.clone();
    let replaced = state.catalog.write().await.upsert(product);
    info!(
        "{} product '{}' in catalog",
        if replaced { "Replaced" } else { "Added" },
        name
    );

    let Some(message_id) = locate_shop_message(state, surface, channel_id, identity).await? else {
        info!("No shop message in channel {}", channel_id);
        return Ok(AddOutcome::ShopMissing);
    };

    let menu = state.catalog_menu().await;
    surface.replace_menu(message_id, &menu).await?;
    debug!(
        "Shop message {} now lists {} options",
        message_id,
        menu.options.len()
    );

    Ok(AddOutcome::MenuUpdated { message_id })
}

/// Resolves the value picked from the shop menu.
pub async fn select_product(state: &ShopState, value: &str) -> Selection {
    if value == NO_PRODUCTS_VALUE {
        return Selection::NoProducts;
    }
    state
        .product(value)
        .await
        .map_or(Selection::NotFound, Selection::Found)
}
