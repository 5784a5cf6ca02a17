//! Discord bot front end.
//!
//! The bot exposes the gacha through slash commands. Each command invocation is
//! handled as one service call, rendered as an embed and sent as the interaction
//! response. Error replies only show user-facing messages; everything else is logged.
//!
//! # Gateway Intents
//!
//! The bot only requires `GUILDS`. Interactions carry the invoking member, including
//! their boost status, so no privileged intent is needed.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
