//! Shop Discord commands - `setup` and `add`.
//!
//! Both commands are restricted to members holding the configured admin role.
//! `setup` posts the shop message; `add` stores a product and refreshes the
//! menu of the channel's shop message.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{Context, replies, surface::ChannelSurface, views},
        core::{
            catalog::Product,
            shop::{self, Access, SetupOutcome, ShopIdentity},
        },
        errors::Result,
    };
    use chrono::Utc;
    use tracing::{info, instrument, warn};

    /// Resolves whether the invoking member holds the admin role.
    async fn member_access(ctx: Context<'_>) -> Access {
        let admin_role = ctx.data().app_config.discord.admin_role_id.get();
        let Some(member) = ctx.author_member().await else {
            warn!(
                "Could not resolve member data for user {}",
                ctx.author().id
            );
            return Access::Denied;
        };
        shop::authorize(member.roles.iter().map(|role| role.get()), admin_role)
    }

    /// Posts the shop message with an empty product menu in this channel.
    #[poise::command(slash_command, guild_only)]
    #[instrument(skip(ctx))]
    pub async fn setup(ctx: Context<'_>) -> Result<()> {
        info!(
            "Setup command received from user: {} in channel {}",
            ctx.author().name,
            ctx.channel_id()
        );
        let data = ctx.data();
        let access = member_access(ctx).await;

        let SetupOutcome::Post { card, menu } =
            shop::setup_shop(access, &data.app_config.shop, Utc::now())
        else {
            ctx.send(replies::private(replies::ADMINS_ONLY)).await?;
            return Ok(());
        };

        let handle = ctx
            .send(
                poise::CreateReply::default()
                    .embed(views::card_embed(&card))
                    .components(vec![views::menu_row(&menu)]),
            )
            .await?;

        // `/add` falls back to a history scan when the id is unknown
        match handle.message().await {
            Ok(message) => {
                data.shop
                    .remember_shop_message(ctx.channel_id().get(), message.id.get())
                    .await;
            }
            Err(e) => warn!("Posted shop message but could not read it back: {}", e),
        }
        Ok(())
    }

    /// Adds a product to the shop, or replaces one with the same name.
    #[poise::command(slash_command, guild_only)]
    #[instrument(skip(ctx))]
    pub async fn add(
        ctx: Context<'_>,
        #[description = "Product name"]
        #[max_length = 100]
        name: String,
        #[description = "Product description"] description: String,
        #[description = "Product image URL (optional)"] image: Option<String>,
    ) -> Result<()> {
        info!(
            "Add command received from user: {} for product '{}'",
            ctx.author().name,
            name
        );
        let data = ctx.data();
        let access = member_access(ctx).await;
        let channel_id = ctx.channel_id();
        let surface = ChannelSurface::new(ctx.serenity_context(), channel_id);
        let identity = ShopIdentity {
            bot_user_id: ctx.framework().bot_id.get(),
            title: data.app_config.shop.title.clone(),
        };
        let image = image.filter(|url| !url.trim().is_empty());
        let product = Product::new(name.clone(), description, image);

        let outcome = shop::add_product_as(
            access,
            &data.shop,
            &surface,
            channel_id.get(),
            &identity,
            product,
        )
        .await?;

        ctx.send(replies::private(replies::add_reply(&outcome, &name)))
            .await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::{add, setup};
