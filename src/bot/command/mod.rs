//! Slash command definitions and option parsing.

pub mod admin;
pub mod gacha;

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, Permissions, ResolvedOption,
    ResolvedValue,
};

use crate::model::{card::CardStatsSort, inventory::InventorySort};

pub const GACHA_COMMAND: &str = "gacha";
pub const ADMIN_COMMAND: &str = "gacha-admin";

fn user_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, name, description).required(false)
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn page_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "page", "Page number")
        .required(false)
        .min_int_value(1)
}

fn sort_option<'a>(choices: impl IntoIterator<Item = &'a str>) -> CreateCommandOption {
    choices.into_iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "sort", "Card order").required(false),
        |option, choice| option.add_string_choice(choice, choice),
    )
}

fn inventory_sort_option() -> CreateCommandOption {
    sort_option(InventorySort::ALL.iter().map(InventorySort::as_str))
}

/// Every slash command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    let gacha = CreateCommand::new(GACHA_COMMAND)
        .description("Collect cards")
        .add_option(subcommand("roll", "Spend shards to roll a card"))
        .add_option(subcommand("daily", "Claim your daily shards"))
        .add_option(
            subcommand("shards", "Show a shard balance")
                .add_sub_option(user_option("user", "Whose balance to show")),
        )
        .add_option(
            subcommand("give", "Give shards to another user")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::User, "target", "Recipient")
                        .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "amount", "Shards to give")
                        .required(true)
                        .min_int_value(1),
                ),
        )
        .add_option(
            subcommand("view", "View a card").add_sub_option(
                CreateCommandOption::new(CommandOptionType::String, "card", "Card id or name")
                    .required(true),
            ),
        )
        .add_option(
            subcommand("cards", "List collected cards")
                .add_sub_option(inventory_sort_option())
                .add_sub_option(page_option())
                .add_sub_option(user_option("user", "Whose cards to list")),
        )
        .add_option(
            subcommand("gallery", "Browse collected cards one at a time")
                .add_sub_option(inventory_sort_option())
                .add_sub_option(page_option())
                .add_sub_option(user_option("user", "Whose cards to browse")),
        )
        .add_option(
            subcommand("profile", "Show a gacha profile")
                .add_sub_option(user_option("user", "Whose profile to show")),
        )
        .add_option(subcommand("details", "Show roll rates and costs"));

    let admin = CreateCommand::new(ADMIN_COMMAND)
        .description("Manage the gacha")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(subcommand(
            "reload",
            "Reload the economy settings and card roster from disk",
        ))
        .add_option(
            subcommand("cards", "List every card with roll statistics")
                .add_sub_option(sort_option(CardStatsSort::ALL.iter().map(CardStatsSort::as_str)))
                .add_sub_option(page_option()),
        );

    vec![gacha, admin]
}

/// Splits resolved options into the invoked subcommand and its options.
pub fn split_subcommand<'a>(
    options: Vec<ResolvedOption<'a>>,
) -> Option<(&'a str, Vec<ResolvedOption<'a>>)> {
    options.into_iter().find_map(|option| match option.value {
        ResolvedValue::SubCommand(options) => Some((option.name, options)),
        _ => None,
    })
}

pub fn get_user(options: &[ResolvedOption], name: &str) -> Option<u64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::User(user, _) if option.name == name => Some(user.id.get()),
        _ => None,
    })
}

pub fn get_integer(options: &[ResolvedOption], name: &str) -> Option<i64> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::Integer(value) if option.name == name => Some(value),
        _ => None,
    })
}

pub fn get_string(options: &[ResolvedOption], name: &str) -> Option<String> {
    options.iter().find_map(|option| match option.value {
        ResolvedValue::String(value) if option.name == name => Some(value.to_string()),
        _ => None,
    })
}

/// Zero-based page index from the one-based `page` option.
pub fn get_page(options: &[ResolvedOption]) -> u64 {
    get_integer(options, "page").unwrap_or(1).max(1) as u64 - 1
}
