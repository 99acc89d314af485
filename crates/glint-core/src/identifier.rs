//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`ItemId`] type with an efficient
//! string-interner based approach. Layout state is keyed by `ItemId`, so the
//! type is `Copy` and cheap to hash and compare.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient item identifier using string interning.
///
/// # Examples
///
/// ```
/// use glint_core::identifier::ItemId;
///
/// let a = ItemId::new("plush_pepe");
/// let b = ItemId::new("plush_pepe");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "plush_pepe");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(DefaultSymbol);

impl ItemId {
    /// Creates an `ItemId` from a string, interning it if not already known.
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Resolves the identifier back to its string representation.
    pub fn resolve(&self) -> String {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("ItemId symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.resolve() == *other
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ItemId::new(&name))
    }
}
