use clap::{Parser, Subcommand, ValueEnum};
use zap_core::{ConditionLogic, U256};

use crate::config::{OutputFormat, DEFAULT_CONFIG_PATH};

#[derive(Parser, Debug)]
#[command(name = "zap-cli")]
#[command(about = "Concentrated-liquidity position math for zap and exit previews")]
pub struct Args {
    /// Path to configuration file (defaults to zap.toml when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format, overriding the config file
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sqrt price and display price at a tick
    Price {
        #[arg(long, allow_negative_numbers = true)]
        tick: i32,

        #[arg(long)]
        decimals0: Option<u8>,

        #[arg(long)]
        decimals1: Option<u8>,
    },

    /// Tick at a Q64.96 sqrt price
    Tick {
        #[arg(long, value_parser = parse_u256)]
        sqrt_price: U256,
    },

    /// Token amounts a concentrated position holds now
    Amounts {
        /// Current pool tick
        #[arg(long, allow_negative_numbers = true)]
        tick: i32,

        #[arg(long, allow_negative_numbers = true)]
        tick_lower: i32,

        #[arg(long, allow_negative_numbers = true)]
        tick_upper: i32,

        /// Pool sqrt price; derived from the tick when omitted
        #[arg(long, value_parser = parse_u256)]
        sqrt_price: Option<U256>,

        #[arg(long)]
        liquidity: u128,

        /// Share of the position to withdraw, in basis points
        #[arg(long)]
        share_bps: Option<u32>,
    },

    /// Expected token amounts when a price-triggered exit fires
    Estimate {
        #[arg(long)]
        current: f64,

        #[arg(long)]
        min: f64,

        #[arg(long)]
        max: f64,

        #[arg(long)]
        amount0: f64,

        #[arg(long)]
        amount1: f64,

        /// Exit once price is at or above this
        #[arg(long)]
        gte: Option<f64>,

        /// Exit once price is at or below this
        #[arg(long)]
        lte: Option<f64>,

        /// Lower bound of a second condition
        #[arg(long)]
        second_gte: Option<f64>,

        /// Upper bound of a second condition
        #[arg(long)]
        second_lte: Option<f64>,

        /// How the second condition combines with the first
        #[arg(long, value_enum, default_value_t = Logic::And)]
        logic: Logic,
    },

    /// Gridline prices and labels for a price axis
    Axis {
        #[arg(long, allow_negative_numbers = true)]
        min: f64,

        #[arg(long, allow_negative_numbers = true)]
        max: f64,

        /// Requested gridline count; config value when omitted
        #[arg(long)]
        count: Option<usize>,
    },

    /// Zoom-acceleration intensity at a slider position
    Edge {
        #[arg(long, allow_negative_numbers = true)]
        position: f64,

        /// Edge band width; config value when omitted
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Write a default configuration file
    InitConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Logic {
    And,
    Or,
}

impl From<Logic> for ConditionLogic {
    fn from(logic: Logic) -> Self {
        match logic {
            Logic::And => ConditionLogic::And,
            Logic::Or => ConditionLogic::Or,
        }
    }
}

/// Parse a decimal U256 argument
pub fn parse_u256(value: &str) -> Result<U256, String> {
    U256::from_dec_str(value.trim()).map_err(|e| format!("invalid integer {}: {:?}", value, e))
}
