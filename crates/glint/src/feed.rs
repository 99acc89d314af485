//! Mock real-time data feed.
//!
//! The feed stands in for the market backend a real dashboard would stream
//! quotes from. It is an external collaborator to the layout engine: each
//! tick jitters every item's percent change and reprices it, returning the
//! batch of updates so the caller can re-derive sizes or trend counters.
//! Nothing here touches positions.

use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

use glint_core::{
    identifier::ItemId,
    item::{Item, Rarity},
};

/// One applied quote change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemUpdate {
    pub id: ItemId,
    pub price: f32,
    pub percent_change: f32,
}

/// Seeded jitter source for item quotes.
///
/// # Examples
///
/// ```
/// use glint::feed::{MockFeed, sample_items};
///
/// let mut items = sample_items(4, Some(1));
/// let mut feed = MockFeed::new(Some(1));
/// let updates = feed.tick(&mut items);
/// assert_eq!(updates.len(), 4);
/// ```
#[derive(Debug)]
pub struct MockFeed {
    rng: StdRng,
}

impl MockFeed {
    /// Creates a feed; a fixed seed makes the jitter sequence reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Applies one round of jitter to every item.
    ///
    /// Percent change drifts by a uniform ±1, price follows the drift and is
    /// floored at 1.0; both are rounded to two decimals as a feed would
    /// quote them.
    pub fn tick(&mut self, items: &mut [Item]) -> Vec<ItemUpdate> {
        let mut updates = Vec::with_capacity(items.len());
        for item in items.iter_mut() {
            let delta: f32 = self.rng.random_range(-1.0..1.0);
            let percent_change = round2(item.percent_change() + delta);
            let price = round2((item.price() * (1.0 + delta / 100.0)).max(1.0));

            item.set_quote(price, percent_change);
            updates.push(ItemUpdate {
                id: item.id(),
                price,
                percent_change,
            });
        }
        trace!(updated = updates.len(); "Feed tick applied");
        updates
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Names for the generated sample catalog.
const CATALOG: &[&str] = &[
    "Plush Pepe",
    "Durov's Cap",
    "Signet Ring",
    "Precious Peach",
    "Spy Agaric",
    "Homemade Cake",
    "Eternal Rose",
    "Berry Box",
    "Vintage Cigar",
    "Magic Potion",
    "Ion Gem",
    "Star Notepad",
    "Loot Bag",
    "Love Candle",
    "Jelly Bunny",
    "Hypno Lollipop",
    "Crystal Ball",
    "Swiss Watch",
    "Ginger Cookie",
    "Mini Oscar",
    "Lol Pop",
    "Perfume Bottle",
    "Sakura Flower",
    "Skull Flower",
];

/// Generates a sample item catalog for demos and tests.
///
/// Names cycle through a fixed gift catalog (numbered past its length);
/// quotes and rarity are drawn from the seeded RNG.
pub fn sample_items(count: usize, seed: Option<u64>) -> Vec<Item> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (0..count)
        .map(|i| {
            let base = CATALOG[i % CATALOG.len()];
            let name = if i < CATALOG.len() {
                base.to_string()
            } else {
                format!("{base} #{}", i / CATALOG.len() + 1)
            };
            let id = ItemId::new(&name.to_lowercase().replace([' ', '\'', '#'], "_"));

            let rarity = match rng.random_range(0..10u32) {
                0 => Rarity::Legendary,
                1 | 2 => Rarity::Epic,
                3..=5 => Rarity::Rare,
                _ => Rarity::Common,
            };

            Item::new(
                id,
                name,
                round2(rng.random_range(5.0..2500.0)),
                round2(rng.random_range(-10.0..10.0)),
                round2(rng.random_range(50.0..2000.0)),
                rarity,
            )
        })
        .collect()
}
