//! Scoreboard front-end logic: turns gateway payloads into score cards,
//! player lists and formation pitches on a data-bound rendering scene.

mod cancel;
mod client;
mod config;
mod error;
pub mod layout;
pub mod loader;
pub mod models;
pub mod palette;
pub mod player;
pub mod reconciler;
pub mod round;
pub mod scene;
pub mod session;
pub mod source;
pub mod squad;
pub mod status;

#[cfg(test)]
mod testing;

pub use cancel::CancelToken;
pub use client::GatewayClient;
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use palette::{KitColors, TeamColors, TeamPalette};
pub use session::{BoardSession, CardSlot};
pub use source::BoardDataSource;
