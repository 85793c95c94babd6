//! Command execution and report rendering

use std::fmt;
use std::path::Path;

use serde::Serialize;
use zap_core::math::{
    get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, invert_price, sqrt_price_to_price,
    tick_to_price,
};
use zap_core::types::u256_dec;
use zap_core::{
    calculate_expected_amounts, calculate_price_axis_ticks, format_axis_price, get_edge_intensity,
    merge_price_conditions, ExpectedAmounts, PoolPosition, PoolSnapshot, PositionAmounts,
    PositionRange, PositionSnapshot, PriceCondition, U256,
};

use crate::cli::Command;
use crate::config::{OutputFormat, ZapConfig};
use crate::error::{CliError, CliResult};

/// Result of one command, printable as text or JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Report {
    Price(PriceReport),
    Tick(TickReport),
    Amounts(AmountsReport),
    Estimate(EstimateReport),
    Axis(AxisReport),
    Edge(EdgeReport),
    InitConfig(InitConfigReport),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceReport {
    pub tick: i32,
    #[serde(with = "u256_dec")]
    pub sqrt_price_x96: U256,
    pub price: f64,
    pub inverted_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickReport {
    #[serde(with = "u256_dec")]
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmountsReport {
    pub in_range: bool,
    pub amounts: PositionAmounts,
    pub withdrawn: Option<PositionAmounts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub condition: PriceCondition,
    pub target_price: Option<f64>,
    pub expected: Option<ExpectedAmounts>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub price: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisReport {
    pub step: f64,
    pub ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeReport {
    pub position: f64,
    pub threshold: f64,
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InitConfigReport {
    pub path: String,
}

/// Run a command against the loaded configuration
pub fn execute(command: &Command, config: &ZapConfig) -> CliResult<Report> {
    log::debug!("Executing {:?}", command);

    let report = match command {
        Command::Price {
            tick,
            decimals0,
            decimals1,
        } => {
            let decimals0 = decimals0.unwrap_or(config.display.token0_decimals);
            let decimals1 = decimals1.unwrap_or(config.display.token1_decimals);
            let price = tick_to_price(*tick, decimals0, decimals1)?;

            Report::Price(PriceReport {
                tick: *tick,
                sqrt_price_x96: get_sqrt_ratio_at_tick(*tick)?,
                price,
                inverted_price: invert_price(price),
            })
        }

        Command::Tick { sqrt_price } => Report::Tick(TickReport {
            sqrt_price_x96: *sqrt_price,
            tick: get_tick_at_sqrt_ratio(*sqrt_price)?,
            price: sqrt_price_to_price(
                *sqrt_price,
                config.display.token0_decimals,
                config.display.token1_decimals,
            ),
        }),

        Command::Amounts {
            tick,
            tick_lower,
            tick_upper,
            sqrt_price,
            liquidity,
            share_bps,
        } => {
            let (decimals0, decimals1) = (
                config.display.token0_decimals,
                config.display.token1_decimals,
            );
            let pool = match sqrt_price {
                Some(sqrt_price) => PoolSnapshot::new(*tick, *sqrt_price, decimals0, decimals1)?,
                None => PoolSnapshot::at_tick(*tick, decimals0, decimals1)?,
            };
            let position = PoolPosition::ConcentratedLiquidity {
                pool,
                range: PositionRange::new(*tick_lower, *tick_upper)?,
                liquidity: *liquidity,
            };

            let amounts = position.amounts()?;
            let withdrawn = share_bps.map(|bps| amounts.scale_bps(bps)).transpose()?;

            Report::Amounts(AmountsReport {
                in_range: position.is_in_range(),
                amounts,
                withdrawn,
            })
        }

        Command::Estimate {
            current,
            min,
            max,
            amount0,
            amount1,
            gte,
            lte,
            second_gte,
            second_lte,
            logic,
        } => {
            let first = PriceCondition {
                gte: *gte,
                lte: *lte,
            };
            let condition = if second_gte.is_some() || second_lte.is_some() {
                let second = PriceCondition {
                    gte: *second_gte,
                    lte: *second_lte,
                };
                merge_price_conditions(&first, &second, (*logic).into())
            } else {
                first
            };

            let position = PositionSnapshot {
                current_price: *current,
                min_price: *min,
                max_price: *max,
                token0_amount: *amount0,
                token1_amount: *amount1,
            };
            let expected = calculate_expected_amounts(&position, &condition);
            if expected.is_none() {
                log::warn!("No estimate for {:?} under {:?}", position, condition);
            }

            Report::Estimate(EstimateReport {
                condition,
                target_price: condition.target_price(),
                expected,
            })
        }

        Command::Axis { min, max, count } => {
            let ticks = calculate_price_axis_ticks(*min, *max, count.unwrap_or(config.axis.tick_count));
            let step = ticks.step();

            Report::Axis(AxisReport {
                step,
                ticks: ticks
                    .map(|price| AxisTick {
                        price,
                        label: format_axis_price(price),
                    })
                    .collect(),
            })
        }

        Command::Edge {
            position,
            threshold,
        } => {
            let threshold = threshold.unwrap_or(config.slider.edge_threshold);
            Report::Edge(EdgeReport {
                position: *position,
                threshold,
                intensity: get_edge_intensity(*position, threshold),
            })
        }

        Command::InitConfig { path, force } => {
            if Path::new(path).exists() && !force {
                return Err(CliError::Io(format!(
                    "{} already exists (use --force to overwrite)",
                    path
                )));
            }
            ZapConfig::default().save(path)?;
            log::info!("Wrote default configuration to {}", path);

            Report::InitConfig(InitConfigReport { path: path.clone() })
        }
    };

    Ok(report)
}

/// Render a report in the requested format
pub fn render(report: &Report, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(report.to_string()),
    }
}

fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Price(report) => {
                writeln!(f, "tick:           {}", report.tick)?;
                writeln!(f, "sqrt_price_x96: {}", report.sqrt_price_x96)?;
                writeln!(f, "price:          {}", report.price)?;
                write!(f, "inverted price: {}", optional(report.inverted_price))
            }
            Report::Tick(report) => {
                writeln!(f, "sqrt_price_x96: {}", report.sqrt_price_x96)?;
                writeln!(f, "tick:           {}", report.tick)?;
                write!(f, "price:          {}", report.price)
            }
            Report::Amounts(report) => {
                writeln!(f, "in range: {}", report.in_range)?;
                writeln!(f, "amount0:  {}", report.amounts.amount0)?;
                write!(f, "amount1:  {}", report.amounts.amount1)?;
                if let Some(withdrawn) = &report.withdrawn {
                    write!(
                        f,
                        "\nwithdrawn: {} / {}",
                        withdrawn.amount0, withdrawn.amount1
                    )?;
                }
                Ok(())
            }
            Report::Estimate(report) => {
                writeln!(
                    f,
                    "condition: gte {} lte {}",
                    optional(report.condition.gte),
                    optional(report.condition.lte)
                )?;
                writeln!(f, "target:    {}", optional(report.target_price))?;
                match &report.expected {
                    Some(expected) => write!(
                        f,
                        "expected:  amount0 {} amount1 {}",
                        expected.amount0, expected.amount1
                    ),
                    None => write!(f, "expected:  no estimate"),
                }
            }
            Report::Axis(report) => {
                let labels: Vec<&str> = report.ticks.iter().map(|tick| tick.label.as_str()).collect();
                write!(f, "step {}: {}", report.step, labels.join(" | "))
            }
            Report::Edge(report) => write!(
                f,
                "intensity at {} (threshold {}): {}",
                report.position, report.threshold, report.intensity
            ),
            Report::InitConfig(report) => write!(f, "wrote {}", report.path),
        }
    }
}
