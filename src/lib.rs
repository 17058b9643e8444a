#![allow(dead_code)]

pub mod bot;
pub mod bot_server;
pub mod cards;
pub mod board;
pub mod deck;
pub mod eval;
pub mod hint;
pub mod search;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::collections::{HashMap, HashSet};
    }
}

pub mod prelude {
    pub use super::bot::*;
    pub use super::bot_server::*;
    pub use super::cards::*;
    pub use super::board::*;
    pub use super::deck::*;
    pub use super::eval::*;
    pub use super::hint::*;
    pub use super::search::*;
    pub use super::utils::prelude::*;
}
