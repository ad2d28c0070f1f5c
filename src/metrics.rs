//! Derived quote metrics
//!
//! Pure functions from a [`QuoteSnapshot`] to the values the dashboard draws:
//! change sign, signed text, volume bar heights and the volume insight.
//! Nothing here keeps state; deriving twice from the same snapshot yields the
//! same output.

use crate::quote::QuoteSnapshot;

/// Whether a volume sits above or below its trailing average.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Above,
    Below,
}

/// Distance of today's volume from its trailing average, in percent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VolumeDeviation {
    pub direction: Direction,
    /// Always non-negative for non-negative inputs.
    pub magnitude: f64,
}

/// Heights of the two volume bars relative to the taller one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VolumeBars {
    pub today: f64,
    pub average: f64,
}

/// Everything the price panel and volume chart need from one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub positive: bool,
    pub price_text: String,
    pub change_text: String,
    pub change_percent_text: String,
    pub volume_text: String,
    /// Present only when the snapshot carries a trailing average.
    pub volume_bars: Option<VolumeBars>,
    pub deviation: Option<VolumeDeviation>,
}

impl DerivedMetrics {
    pub fn from_snapshot(snapshot: &QuoteSnapshot) -> Self {
        let positive = is_positive(snapshot);
        let (volume_bars, deviation) = match snapshot.average_volume_20d {
            Some(average) => {
                let (today, avg) = bar_ratio(snapshot.volume as f64, average as f64);
                (
                    Some(VolumeBars {
                        today,
                        average: avg,
                    }),
                    Some(volume_deviation_percent(snapshot.volume, average)),
                )
            }
            None => (None, None),
        };

        Self {
            positive,
            price_text: format!("${:.2}", snapshot.price),
            change_text: format_signed_currency(snapshot.change, 2, positive),
            change_percent_text: format!(
                "{}%",
                format_signed(snapshot.change_percent, 2, positive)
            ),
            volume_text: format_volume(snapshot.volume),
            volume_bars,
            deviation,
        }
    }

    /// Insight sentence under the volume chart, e.g.
    /// `Trading volume is 17.5% above average`.
    pub fn volume_insight(&self) -> Option<String> {
        self.deviation.map(|d| {
            format!(
                "Trading volume is {:.1}% {} average",
                d.magnitude, d.direction
            )
        })
    }
}

/// True iff the snapshot's change is non-negative.
pub fn is_positive(snapshot: &QuoteSnapshot) -> bool {
    snapshot.change >= 0.0
}

/// Fixed-decimal text with a leading `+` when `positive`.
///
/// `positive` comes from the quote's change, not from `value`, so a value
/// whose sign disagrees with the change is printed as-is after the `+`.
pub fn format_signed(value: f64, decimals: usize, positive: bool) -> String {
    let value = normalize_zero(value);
    if positive {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Like [`format_signed`], with a `$` between the sign and the digits.
pub fn format_signed_currency(value: f64, decimals: usize, positive: bool) -> String {
    let value = normalize_zero(value);
    if positive {
        format!("+${:.*}", decimals, value)
    } else if value < 0.0 {
        format!("-${:.*}", decimals, -value)
    } else {
        format!("${:.*}", decimals, value)
    }
}

/// Each magnitude divided by the larger of the two.
///
/// The taller bar is exactly 1.0. Negative or non-finite inputs count as
/// zero, and two zeros give `(0.0, 0.0)`.
pub fn bar_ratio(a: f64, b: f64) -> (f64, f64) {
    let a = clamp_magnitude(a);
    let b = clamp_magnitude(b);
    let max = a.max(b);
    if max <= 0.0 {
        return (0.0, 0.0);
    }
    (a / max, b / max)
}

/// Percentage distance of `today` from `average`.
///
/// Above average uses `(today / average - 1) * 100`, otherwise
/// `(1 - today / average) * 100`. A zero average gives magnitude 0.
pub fn volume_deviation_percent(today: u64, average: u64) -> VolumeDeviation {
    let direction = if today > average {
        Direction::Above
    } else {
        Direction::Below
    };
    if average == 0 {
        return VolumeDeviation {
            direction,
            magnitude: 0.0,
        };
    }

    let ratio = today as f64 / average as f64;
    let magnitude = match direction {
        Direction::Above => (ratio - 1.0) * 100.0,
        Direction::Below => (1.0 - ratio) * 100.0,
    };
    VolumeDeviation {
        direction,
        magnitude,
    }
}

/// Volume with thousands separators, e.g. `45,230,000`.
pub fn format_volume(volume: u64) -> String {
    let digits = volume.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Volume in millions with one decimal, e.g. `45.2M`.
pub fn format_millions(volume: u64) -> String {
    format!("{:.1}M", volume as f64 / 1_000_000.0)
}

fn clamp_magnitude(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

// -0.0 + 0.0 == +0.0, so "-0.00" never reaches the screen.
fn normalize_zero(value: f64) -> f64 {
    value + 0.0
}
