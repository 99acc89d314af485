//! Semantic item model.
//!
//! An [`Item`] is a displayed entity: a tradable gift with a price, a
//! percent change, a traded volume, and a rarity tier. The layout engine
//! only ever sees the derived display diameter; everything else feeds
//! filtering, trend counters, and rendering.

use serde::{Deserialize, Serialize};

use crate::identifier::ItemId;

/// Base diameter an item is drawn at before attribute multipliers apply.
const BASE_SIZE: f32 = 80.0;
/// Smallest and largest diameters an item may be drawn at.
const MIN_SIZE: f32 = 60.0;
const MAX_SIZE: f32 = 140.0;

/// Rarity tier of an item, from least to most scarce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Size multiplier applied to the display diameter.
    pub fn size_multiplier(self) -> f32 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.2,
            Rarity::Epic => 1.4,
            Rarity::Legendary => 1.6,
        }
    }

    /// Lowercase name as used in item files and SVG class attributes.
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// Direction of an item's recent price movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Neutral,
}

/// A tradable item displayed as one bubble in the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    price: f32,
    percent_change: f32,
    volume: f32,
    #[serde(default)]
    rarity: Rarity,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: f32,
        percent_change: f32,
        volume: f32,
        rarity: Rarity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            percent_change,
            volume,
            rarity,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f32 {
        self.price
    }

    pub fn percent_change(&self) -> f32 {
        self.percent_change
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Applies a repriced quote to this item.
    pub fn set_quote(&mut self, price: f32, percent_change: f32) {
        self.price = price;
        self.percent_change = percent_change;
    }

    /// Direction of the item's percent change.
    pub fn trend(&self) -> Trend {
        if self.percent_change > 0.0 {
            Trend::Rising
        } else if self.percent_change < 0.0 {
            Trend::Falling
        } else {
            Trend::Neutral
        }
    }

    /// Display diameter in field units.
    ///
    /// Larger percent moves, heavier volume, and scarcer rarity all grow the
    /// bubble, clamped to `[60, 140]`:
    ///
    /// ```text
    /// 80 + min(|pct|/10, 2)·20 + min(volume/1000, 1.5)·15 + rarity·10
    /// ```
    pub fn display_size(&self) -> f32 {
        let change = (self.percent_change.abs() / 10.0).min(2.0);
        let volume = (self.volume / 1000.0).min(1.5);
        let rarity = self.rarity.size_multiplier();

        (BASE_SIZE + change * 20.0 + volume * 15.0 + rarity * 10.0).clamp(MIN_SIZE, MAX_SIZE)
    }
}

/// Counts of rising, falling, and neutral items over a set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrendSummary {
    pub rising: usize,
    pub falling: usize,
    pub neutral: usize,
}

impl TrendSummary {
    /// Tallies the trend of every item in the slice.
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        let mut summary = Self::default();
        for item in items {
            match item.trend() {
                Trend::Rising => summary.rising += 1,
                Trend::Falling => summary.falling += 1,
                Trend::Neutral => summary.neutral += 1,
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(percent_change: f32, volume: f32, rarity: Rarity) -> Item {
        Item::new(
            ItemId::new("test_item"),
            "Test Item",
            100.0,
            percent_change,
            volume,
            rarity,
        )
    }

    #[test]
    fn test_display_size_base_common() {
        // No change, no volume, common rarity: 80 + 0 + 0 + 10
        assert_eq!(item(0.0, 0.0, Rarity::Common).display_size(), 90.0);
    }

    #[test]
    fn test_display_size_caps_at_max() {
        // 80 + 2*20 + 1.5*15 + 1.6*10 = 158.5, clamped
        let big = item(100.0, 10_000.0, Rarity::Legendary);
        assert_eq!(big.display_size(), 140.0);
    }

    #[test]
    fn test_display_size_rarity_ordering() {
        let common = item(5.0, 500.0, Rarity::Common).display_size();
        let legendary = item(5.0, 500.0, Rarity::Legendary).display_size();
        assert!(legendary > common);
    }

    #[test]
    fn test_trend() {
        assert_eq!(item(3.0, 0.0, Rarity::Common).trend(), Trend::Rising);
        assert_eq!(item(-0.5, 0.0, Rarity::Common).trend(), Trend::Falling);
        assert_eq!(item(0.0, 0.0, Rarity::Common).trend(), Trend::Neutral);
    }

    #[test]
    fn test_trend_summary() {
        let items = vec![
            item(3.0, 0.0, Rarity::Common),
            item(1.0, 0.0, Rarity::Common),
            item(-2.0, 0.0, Rarity::Rare),
            item(0.0, 0.0, Rarity::Epic),
        ];
        let summary = TrendSummary::from_items(&items);
        assert_eq!(
            summary,
            TrendSummary {
                rising: 2,
                falling: 1,
                neutral: 1
            }
        );
    }

    #[test]
    fn test_rarity_multipliers_increase() {
        let tiers = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];
        for pair in tiers.windows(2) {
            assert!(pair[0].size_multiplier() < pair[1].size_multiplier());
        }
        assert_eq!(Rarity::Epic.name(), "epic");
    }
}
