use clap::Parser;

use crate::eval;
use crate::prelude::*;

/// Configuration for the `threesctl` diagnostic binary (§10): how deep to search, where the
/// card-count horizon sits, and which built-in evaluator to score leaves with.
#[derive(Clone, Debug, Parser)]
pub struct BotServerOptions {
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(short, long, default_value_t = 5)]
    pub depth: u8,

    #[arg(short = 'H', long = "horizon", default_value_t = 3)]
    pub horizon: u8,

    #[arg(short, long, default_value = "openness-matthew")]
    pub evaluator: String,
}

impl BotServerOptions {
    pub fn search_config(&self) -> Result<SearchConfig> {
        let evaluator = eval::by_name(&self.evaluator)
            .ok_or_else(|| anyhow!("unrecognized evaluator {}", self.evaluator))?;
        SearchConfig::new(self.depth, self.horizon, evaluator)
    }
}
