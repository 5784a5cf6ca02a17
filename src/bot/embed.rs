//! Embeds for command replies.
//!
//! Rarity-dependent embeds use the tier's configured colour. Discord timestamps are
//! rendered with `<t:unix:style>` so every client shows them in its own timezone.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter};

use crate::model::{
    card::{CardStatsPage, CardStatsSort, CardView},
    currency::{ClaimOutcome, DailyBonusKind, TransferOutcome},
    inventory::{InventoryPage, InventorySort},
    profile::Profile,
    rarity::{RarityRate, RaritySetting, DEFAULT_RARITY_COLOR},
    roll::RollOutcome,
    settings::GachaSettings,
};

const SUCCESS_COLOR: u32 = 0x2ecc71;
const INFO_COLOR: u32 = 0x3498db;
const ERROR_COLOR: u32 = 0xe74c3c;

/// Formats a time as a Discord timestamp. `style` is one of Discord's format letters,
/// for example `R` (relative) or `f` (short date and time).
pub fn discord_timestamp(time: DateTime<Utc>, style: char) -> String {
    format!("<t:{}:{}>", time.timestamp(), style)
}

/// Formats a probability in `[0, 1]` as a percentage with two decimals.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

fn bonus_label(kind: DailyBonusKind) -> &'static str {
    match kind {
        DailyBonusKind::Standard => "Daily bonus",
        DailyBonusKind::Premium => "Booster daily bonus",
        DailyBonusKind::FirstTime => "First-time bonus",
        DailyBonusKind::FirstTimePremium => "First-time booster bonus",
    }
}

pub fn roll(outcome: &RollOutcome, settings: &GachaSettings) -> CreateEmbed {
    let card = &outcome.card;
    let mut embed = CreateEmbed::new()
        .title(format!("{} {}", outcome.rarity.stars, card.name))
        .description(format!("{} • {}", card.series, card.card_type))
        .color(outcome.rarity.color)
        .footer(CreateEmbedFooter::new(format!(
            "Balance: {} {} • ID: {}",
            outcome.balance,
            settings.currency(),
            card.id
        )));

    if let Some(image) = &card.image {
        embed = embed.image(image);
    }

    if outcome.is_new {
        embed = embed.field("New card!", "Added to your collection", false);
    } else {
        embed = embed.field(
            "Duplicate",
            format!("+{} {}", outcome.dupe_shards, settings.currency()),
            false,
        );
    }

    if outcome.forced {
        embed = embed.field("Pity", "Guaranteed by pity", true);
    }

    embed
}

pub fn daily(outcome: &ClaimOutcome, settings: &GachaSettings) -> CreateEmbed {
    if !outcome.granted {
        return CreateEmbed::new()
            .title("Daily already claimed")
            .description(format!(
                "Your next daily is available {}",
                discord_timestamp(outcome.next_claim_at, 'R')
            ))
            .color(INFO_COLOR)
            .footer(CreateEmbedFooter::new(format!(
                "Balance: {} {}",
                outcome.balance,
                settings.currency()
            )));
    }

    let label = outcome.bonus_kind.map(bonus_label).unwrap_or("Daily bonus");

    CreateEmbed::new()
        .title(label)
        .description(format!("+{} {}", outcome.amount, settings.currency()))
        .color(SUCCESS_COLOR)
        .field(
            "Next daily",
            discord_timestamp(outcome.next_claim_at, 'R'),
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Balance: {} {}",
            outcome.balance,
            settings.currency()
        )))
}

pub fn balance(user_id: u64, balance: i64, settings: &GachaSettings) -> CreateEmbed {
    CreateEmbed::new()
        .title(settings.currency())
        .description(format!("<@{}> has {} {}", user_id, balance, settings.currency()))
        .color(INFO_COLOR)
}

pub fn transfer(
    from_user_id: u64,
    to_user_id: u64,
    outcome: &TransferOutcome,
    settings: &GachaSettings,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("Shards sent")
        .description(format!(
            "<@{}> gave {} {} to <@{}>",
            from_user_id,
            outcome.amount,
            settings.currency(),
            to_user_id
        ))
        .color(SUCCESS_COLOR)
        .footer(CreateEmbedFooter::new(format!(
            "Your balance: {} {}",
            outcome.from_balance,
            settings.currency()
        )))
}

pub fn card(view: &CardView) -> CreateEmbed {
    let card = &view.card;
    let (stars, color) = view
        .rarity
        .as_ref()
        .map(|r| (r.stars.as_str(), r.color))
        .unwrap_or(("", DEFAULT_RARITY_COLOR));

    let mut embed = CreateEmbed::new()
        .title(format!("{} {}", stars, card.name).trim().to_string())
        .description(format!("{} • {}", card.series, card.card_type))
        .color(color)
        .field("Times rolled", view.total_rolled.to_string(), true)
        .field("Owners", view.owners.to_string(), true)
        .footer(CreateEmbedFooter::new(format!("ID: {}", card.id)));

    if card.unlisted {
        embed = embed.field("Unlisted", "No longer in the roster", true);
    }

    if let Some(image) = &card.image {
        embed = embed.image(image);
    }

    if let Some(owned) = &view.owned {
        embed = embed.field(
            "You own",
            format!(
                "{} cop{} since {}",
                owned.count,
                if owned.count == 1 { "y" } else { "ies" },
                discord_timestamp(owned.first_acquired, 'f')
            ),
            false,
        );
    }

    if let Some(first) = &view.first_acquirer {
        embed = embed.field(
            "First acquired by",
            format!("<@{}> {}", first.user_id, discord_timestamp(first.time, 'R')),
            true,
        );
    }

    if let Some(last) = &view.last_acquirer {
        embed = embed.field(
            "Last acquired by",
            format!("<@{}> {}", last.user_id, discord_timestamp(last.time, 'R')),
            true,
        );
    }

    embed
}

pub fn inventory(user_id: u64, page: &InventoryPage, sort: InventorySort) -> CreateEmbed {
    let description = if page.cards.is_empty() {
        "No cards yet".to_string()
    } else {
        page.cards
            .iter()
            .map(|owned| {
                format!(
                    "`{}` **{}** ({}) x{}",
                    owned.card.id, owned.card.name, owned.card.series, owned.entry.count
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title("Card collection")
        .description(format!("<@{}>\n\n{}", user_id, description))
        .color(INFO_COLOR)
        .footer(CreateEmbedFooter::new(format!(
            "Page {}/{} • {} cards • sorted by {}",
            page.page + 1,
            page.total_pages,
            page.total,
            sort.as_str()
        )))
}

/// One owned card per page, shown with its artwork.
pub fn gallery(
    user_id: u64,
    page: &InventoryPage,
    sort: InventorySort,
    rarity: Option<&RaritySetting>,
) -> CreateEmbed {
    let footer = CreateEmbedFooter::new(format!(
        "Card {}/{} • sorted by {}",
        page.page + 1,
        page.total_pages,
        sort.as_str()
    ));

    let Some(owned) = page.cards.first() else {
        return CreateEmbed::new()
            .title("Gallery")
            .description(format!("<@{}>\n\nNo cards yet", user_id))
            .color(INFO_COLOR)
            .footer(footer);
    };

    let (stars, color) = rarity
        .map(|r| (r.stars.as_str(), r.color))
        .unwrap_or(("", DEFAULT_RARITY_COLOR));

    let mut embed = CreateEmbed::new()
        .title(format!("{} {}", stars, owned.card.name).trim().to_string())
        .description(format!(
            "<@{}>\n{} • {}",
            user_id, owned.card.series, owned.card.card_type
        ))
        .color(color)
        .field("Copies", owned.entry.count.to_string(), true)
        .field(
            "Since",
            discord_timestamp(owned.entry.first_acquired, 'f'),
            true,
        )
        .footer(footer);

    if let Some(image) = &owned.card.image {
        embed = embed.image(image);
    }

    embed
}

/// Every stored card with roll and owner statistics, for administrators.
pub fn card_stats(page: &CardStatsPage, sort: CardStatsSort) -> CreateEmbed {
    let description = if page.cards.is_empty() {
        "No cards stored".to_string()
    } else {
        page.cards
            .iter()
            .map(|stats| {
                let stars = stats.rarity.as_ref().map(|r| r.stars.as_str()).unwrap_or("?");
                let mut line = format!(
                    "{} `{}` **{}** • rolled {} • {} owner{}",
                    stars,
                    stats.card.id,
                    stats.card.name,
                    stats.rolled,
                    stats.owners,
                    if stats.owners == 1 { "" } else { "s" }
                );
                if let Some(first) = &stats.first_acquirer {
                    line.push_str(&format!(" • first <@{}>", first.user_id));
                }
                if stats.card.unlisted {
                    line.push_str(" • unlisted");
                }
                line
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title("All cards")
        .description(description)
        .color(INFO_COLOR)
        .footer(CreateEmbedFooter::new(format!(
            "Page {}/{} • {} cards • sorted by {}",
            page.page + 1,
            page.total_pages,
            page.total,
            sort.as_str()
        )))
}

pub fn profile(user_id: u64, profile: &Profile, settings: &GachaSettings) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Gacha profile")
        .description(format!("<@{}>", user_id))
        .color(INFO_COLOR)
        .field(
            settings.currency(),
            profile.account.balance.to_string(),
            true,
        )
        .field("Total rolls", profile.total_rolls.to_string(), true);

    if let Some(first) = profile.account.first_daily {
        embed = embed.field("Playing since", discord_timestamp(first, 'D'), true);
    }

    if !profile.rarities.is_empty() {
        let collection = profile
            .rarities
            .iter()
            .map(|stats| {
                format!(
                    "{} {}/{} owned, {} rolled",
                    stats.stars, stats.owned, stats.available, stats.rolled
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        embed = embed.field("Collection", collection, false);
    }

    if !profile.pity.is_empty() {
        let pity = profile
            .pity
            .iter()
            .map(|status| format!("Rarity {}: {}/{}", status.rarity, status.count, status.threshold))
            .collect::<Vec<_>>()
            .join("\n");
        embed = embed.field("Pity", pity, false);
    }

    embed
}

pub fn rates(rates: &[RarityRate], settings: &GachaSettings) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Gacha details")
        .description(format!("Each roll costs {} {}", settings.cost, settings.currency()))
        .color(INFO_COLOR);

    for rate in rates {
        let mut value = format!(
            "{} • {} cards • duplicate +{}",
            format_percent(rate.probability),
            rate.cards,
            rate.setting.dupe_shards
        );
        if let Some(pity) = rate.setting.pity {
            value.push_str(&format!(" • guaranteed within {} rolls", pity));
        }
        embed = embed.field(rate.setting.stars.clone(), value, false);
    }

    embed
}

pub fn reload(card_count: usize, version: u64) -> CreateEmbed {
    CreateEmbed::new()
        .title("Roster reloaded")
        .description(format!("{} cards available (roster v{})", card_count, version))
        .color(SUCCESS_COLOR)
}

pub fn error(message: &str) -> CreateEmbed {
    CreateEmbed::new().description(message).color(ERROR_COLOR)
}
