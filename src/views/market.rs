//! Market page
//!
//! The CCX chart is regenerated each time the timeframe changes: 24 hourly
//! points scattered around the current price.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::StatCard;
use crate::config::SimulationConfig;
use crate::format::{inr_millions, inr_precise, millions, percent_change};

pub const BASE_PRICE: f64 = 18.45;
/// Total width of the band the chart points fall in
pub const PRICE_SPREAD: f64 = 4.0;
pub const SERIES_LEN: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketToken {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change_24h: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub supply: f64,
}

impl MarketToken {
    pub fn price_label(&self) -> String {
        inr_precise(self.price)
    }

    pub fn change_label(&self) -> String {
        percent_change(self.change_24h)
    }

    pub fn volume_label(&self) -> String {
        inr_millions(self.volume)
    }

    pub fn market_cap_label(&self) -> String {
        inr_millions(self.market_cap)
    }

    pub fn supply_label(&self) -> String {
        millions(self.supply)
    }
}

pub static TOKENS: [MarketToken; 4] = [
    MarketToken {
        symbol: "CCX",
        name: "Carbon Credit Token",
        price: 18.45,
        change_24h: 12.5,
        volume: 2_450_000.0,
        market_cap: 45_600_000.0,
        supply: 2_500_000.0,
    },
    MarketToken {
        symbol: "REDD",
        name: "REDD+ Forest Token",
        price: 22.75,
        change_24h: 8.2,
        volume: 1_200_000.0,
        market_cap: 25_000_000.0,
        supply: 1_100_000.0,
    },
    MarketToken {
        symbol: "AFFOR",
        name: "Afforestation Token",
        price: 15.20,
        change_24h: -2.1,
        volume: 850_000.0,
        market_cap: 14_500_000.0,
        supply: 950_000.0,
    },
    MarketToken {
        symbol: "SOLAR",
        name: "Solar Energy Credit",
        price: 28.90,
        change_24h: 15.7,
        volume: 3_200_000.0,
        market_cap: 57_800_000.0,
        supply: 2_000_000.0,
    },
];

/// Sidebar list
pub fn top_tokens() -> &'static [MarketToken] {
    &TOKENS[..3]
}

pub const STATS: [StatCard; 4] = [
    StatCard::new("Total Market Cap", "₹142.9M", "+8.7%"),
    StatCard::new("24h Volume", "₹7.7M", "+12.3%"),
    StatCard::new("Active Tokens", "4", "+1"),
    StatCard::new("Avg Price Change", "+8.6%", "+2.1%"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    Hour,
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "1y")]
    Year,
}

impl Timeframe {
    pub fn all() -> [Timeframe; 5] {
        [
            Timeframe::Hour,
            Timeframe::Day,
            Timeframe::Week,
            Timeframe::Month,
            Timeframe::Year,
        ]
    }

    pub fn id(self) -> &'static str {
        match self {
            Timeframe::Hour => "1h",
            Timeframe::Day => "24h",
            Timeframe::Week => "7d",
            Timeframe::Month => "30d",
            Timeframe::Year => "1y",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| format!("unknown timeframe '{}', expected one of 1h, 24h, 7d, 30d, 1y", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub label: String,
    pub price: f64,
}

/// 24 points labelled `23h ago` down to `0h ago`
pub fn generate_series<R: Rng>(rng: &mut R) -> Vec<PricePoint> {
    (0..SERIES_LEN)
        .rev()
        .map(|i| PricePoint {
            label: format!("{}h ago", i),
            price: BASE_PRICE + (rng.gen::<f64>() - 0.5) * PRICE_SPREAD,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct MarketView {
    timeframe: Timeframe,
    series: Vec<PricePoint>,
    rng: StdRng,
}

impl MarketView {
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(rng)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let series = generate_series(&mut rng);
        Self {
            timeframe: Timeframe::default(),
            series,
            rng,
        }
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn series(&self) -> &[PricePoint] {
        &self.series
    }

    /// Switch timeframe; the series is regenerated only when it changes
    pub fn select_timeframe(&mut self, timeframe: Timeframe) -> bool {
        if timeframe == self.timeframe {
            return false;
        }
        tracing::debug!(from = %self.timeframe, to = %timeframe, "Timeframe changed");
        self.timeframe = timeframe;
        self.series = generate_series(&mut self.rng);
        true
    }

    /// Lowest and highest price in the current series
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let first = self.series.first()?.price;
        Some(self.series.iter().fold((first, first), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_shape() {
        let view = MarketView::seeded(9);
        let series = view.series();
        assert_eq!(series.len(), 24);
        assert_eq!(series[0].label, "23h ago");
        assert_eq!(series[23].label, "0h ago");
        for point in series {
            assert!(point.price >= BASE_PRICE - 2.0 && point.price <= BASE_PRICE + 2.0);
        }
    }

    #[test]
    fn test_series_regenerates_only_on_change() {
        let mut view = MarketView::seeded(1);
        let before = view.series().to_vec();

        assert!(!view.select_timeframe(Timeframe::Day));
        assert_eq!(view.series(), before.as_slice());

        assert!(view.select_timeframe(Timeframe::Week));
        assert_ne!(view.series(), before.as_slice());
        assert_eq!(view.timeframe().id(), "7d");
    }

    #[test]
    fn test_token_labels() {
        let ccx = &TOKENS[0];
        assert_eq!(ccx.price_label(), "₹18.45");
        assert_eq!(TOKENS[3].volume_label(), "₹3.2M");
        assert_eq!(ccx.market_cap_label(), "₹45.6M");
        assert_eq!(TOKENS[2].change_label(), "-2.1%");
        assert_eq!(top_tokens().len(), 3);
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("1y".parse::<Timeframe>(), Ok(Timeframe::Year));
        assert!("2w".parse::<Timeframe>().is_err());
    }
}
