//! # Price Axis
//!
//! Helpers for drawing a price range chart: "nice" gridline values, compact
//! labels for them, and the zoom-acceleration intensity near slider edges.

use crate::constants::{AXIS_PRICE_CAP, AXIS_PRICE_FLOOR, AXIS_TICK_DECIMALS, SLIDER_MAX};

/// Step multipliers tried against each power of ten
const NICE_MULTIPLIERS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Largest magnitude f64 represents every integer up to
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

const CAP_LABEL: &str = ">999Q";
const FLOOR_LABEL: &str = "<0.00001";

/// Large-number suffixes, biggest first
const SUFFIXES: [(f64, &str); 4] = [(1e15, "Q"), (1e12, "T"), (1e9, "B"), (1e6, "M")];

/// Gridline values between two prices.
///
/// The iterator is lazy and can be restarted by cloning it before use or
/// calling [`PriceAxisTicks::reset`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAxisTicks {
    min_price: f64,
    max_price: f64,
    first: f64,
    step: f64,
    candidates: usize,
    index: usize,
    last: Option<f64>,
}

impl PriceAxisTicks {
    fn empty() -> Self {
        Self {
            min_price: 0.0,
            max_price: 0.0,
            first: 0.0,
            step: 0.0,
            candidates: 0,
            index: 0,
            last: None,
        }
    }

    /// Spacing between consecutive gridlines (0 when there are none)
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.last = None;
    }
}

impl Iterator for PriceAxisTicks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        while self.index < self.candidates {
            let candidate =
                round_to_decimals(self.first + self.index as f64 * self.step, AXIS_TICK_DECIMALS);
            self.index += 1;

            if candidate < self.min_price || candidate > self.max_price {
                continue;
            }
            if matches!(self.last, Some(last) if candidate <= last) {
                continue;
            }

            self.last = Some(candidate);
            return Some(candidate);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates - self.index))
    }
}

/// Round to a fixed number of decimal places, leaving values too large to
/// scale exactly untouched
fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if scaled.abs() >= MAX_SAFE_INTEGER {
        return value;
    }
    scaled.round() / factor
}

/// Smallest 1/2/2.5/5/10 multiple of a power of ten at or above `rough_step`
fn nice_step(rough_step: f64) -> f64 {
    let magnitude = 10f64.powf(rough_step.log10().floor());
    NICE_MULTIPLIERS
        .iter()
        .map(|multiplier| multiplier * magnitude)
        .find(|step| *step >= rough_step)
        .unwrap_or(10.0 * magnitude)
}

/// Evenly spaced, human-friendly gridline prices inside `[min_price, max_price]`
pub fn calculate_price_axis_ticks(
    min_price: f64,
    max_price: f64,
    target_tick_count: usize,
) -> PriceAxisTicks {
    let range = max_price - min_price;
    if !min_price.is_finite() || !max_price.is_finite() || !range.is_finite() || range <= 0.0 {
        return PriceAxisTicks::empty();
    }

    let step = nice_step(range / target_tick_count.max(1) as f64);
    if !step.is_finite() || step <= 0.0 {
        return PriceAxisTicks::empty();
    }

    let first = (min_price / step).ceil() * step;
    // Slack so a last gridline landing a hair past max still gets a look
    let span = ((max_price - first) / step + 1e-9).floor();
    let candidates = if span >= 0.0 { span as usize + 1 } else { 0 };

    PriceAxisTicks {
        min_price,
        max_price,
        first,
        step,
        candidates,
        index: 0,
        last: None,
    }
}

/// Compact axis label for a price
pub fn format_axis_price(price: f64) -> String {
    if price.is_nan() || price == 0.0 {
        return "0".to_string();
    }
    if price < 0.0 {
        let label = format_axis_price(-price);
        // Flip the comparison on capped and floored labels
        return if let Some(rest) = label.strip_prefix('>') {
            format!("<-{}", rest)
        } else if let Some(rest) = label.strip_prefix('<') {
            format!(">-{}", rest)
        } else {
            format!("-{}", label)
        };
    }

    if price >= AXIS_PRICE_CAP {
        return CAP_LABEL.to_string();
    }
    if price >= 1e6 {
        let (divisor, suffix) = SUFFIXES
            .iter()
            .copied()
            .find(|(divisor, _)| price >= *divisor)
            .unwrap_or(SUFFIXES[SUFFIXES.len() - 1]);
        return with_suffix(price, divisor, suffix, 2);
    }
    if price >= 1e5 {
        return with_suffix(price, 1e3, "K", 1);
    }
    if price >= 1e4 {
        return with_suffix(price, 1e3, "K", 2);
    }
    if price >= 1e3 {
        let rounded = price.round();
        if rounded >= 1e4 {
            return format_axis_price(rounded);
        }
        return group_thousands(rounded);
    }
    if price >= 100.0 {
        return fixed(price, 1, 1e3);
    }
    if price >= 1.0 {
        return fixed(price, 2, 100.0);
    }
    if price >= 0.01 {
        return fixed(price, 4, 1.0);
    }
    if price >= AXIS_PRICE_FLOOR {
        return fixed(price.max(0.000_01), 5, 0.01);
    }
    FLOOR_LABEL.to_string()
}

/// Fixed decimals with trailing zeros trimmed. A value that rounds up into
/// the next band is formatted by that band.
fn fixed(price: f64, decimals: i32, band_top: f64) -> String {
    let rounded = round_to_decimals(price, decimals);
    if rounded >= band_top {
        return format_axis_price(rounded);
    }
    trim_zeros(format!("{:.*}", decimals as usize, rounded))
}

fn with_suffix(price: f64, divisor: f64, suffix: &str, decimals: i32) -> String {
    let scaled = round_to_decimals(price / divisor, decimals);
    if scaled >= 1_000.0 {
        return format_axis_price(scaled * divisor);
    }
    format!("{}{}", trim_zeros(format!("{:.*}", decimals as usize, scaled)), suffix)
}

fn trim_zeros(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Whole number with comma thousands separators
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// How hard the slider should accelerate zoom at `position` (0 to 100).
///
/// Ramps linearly from 0 at `edge_threshold` from an edge to 1 at the edge.
pub fn get_edge_intensity(position: f64, edge_threshold: f64) -> f64 {
    if !position.is_finite() || !edge_threshold.is_finite() || edge_threshold <= 0.0 {
        return 0.0;
    }

    let intensity = if position <= edge_threshold {
        (edge_threshold - position) / edge_threshold
    } else if position >= SLIDER_MAX - edge_threshold {
        (position - (SLIDER_MAX - edge_threshold)) / edge_threshold
    } else {
        0.0
    };

    intensity.clamp(0.0, 1.0)
}
