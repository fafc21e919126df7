//! Food record domain model and the built-in sample list.
//!
//! This module defines the core [`FoodRecord`] type, one row of the popularity
//! table, along with loading of caller-provided record lists from JSON files.
//! Records are immutable once supplied; the table never mutates, sorts, or
//! deduplicates them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::Result;

/// One entry in the food popularity table.
///
/// A record pairs a display name with two counters: how often the food was
/// mentioned and how many upvotes it collected. Records carry no identity
/// beyond their position in the supplied list; duplicate names are permitted
/// and are rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// Display name of the food (e.g. "Ice cream").
    pub name: String,
    /// Number of times the food was mentioned.
    pub mentions: u32,
    /// Number of upvotes the food received.
    pub upvotes: u32,
}

impl FoodRecord {
    /// Creates a new record with the given name and counters.
    #[must_use]
    pub fn new(name: impl Into<String>, mentions: u32, upvotes: u32) -> Self {
        Self {
            name: name.into(),
            mentions,
            upvotes,
        }
    }
}

/// Returns the built-in 25-record sample list.
///
/// Used when no `food_file` is configured or when the configured file fails to
/// load. Order matters: the table preserves it, and page 1 of the unfiltered
/// view shows the first ten entries (Ice cream through Burgers).
#[must_use]
pub fn sample_foods() -> Vec<FoodRecord> {
    [
        ("Ice cream", 12, 145),
        ("Fried chicken", 9, 120),
        ("Soda", 7, 98),
        ("Pizza", 15, 210),
        ("Chocolate", 11, 132),
        ("Donuts", 6, 87),
        ("Cake", 8, 105),
        ("Cookies", 5, 76),
        ("Pasta", 10, 118),
        ("Burgers", 14, 189),
        ("French fries", 13, 156),
        ("Milkshakes", 4, 67),
        ("Tacos", 8, 112),
        ("Candy", 7, 94),
        ("Pastries", 5, 82),
        ("Bread", 6, 78),
        ("Pancakes", 4, 65),
        ("Waffles", 3, 59),
        ("Cupcakes", 5, 73),
        ("Brownies", 6, 88),
        ("Cheesecake", 7, 96),
        ("Popcorn", 4, 62),
        ("Nachos", 5, 79),
        ("Pretzels", 3, 54),
        ("Potato chips", 8, 103),
    ]
    .into_iter()
    .map(|(name, mentions, upvotes)| FoodRecord::new(name, mentions, upvotes))
    .collect()
}

/// Loads a food record list from a JSON file.
///
/// The file must contain a JSON array of objects with `name`, `mentions`, and
/// `upvotes` fields:
///
/// ```json
/// [
///   { "name": "Ramen", "mentions": 9, "upvotes": 101 }
/// ]
/// ```
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as a record
/// array. Callers fall back to [`sample_foods`] on failure.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let contents = std::fs::read_to_string(path)?;
    let foods: Vec<FoodRecord> = serde_json::from_str(&contents)?;
    Ok(foods)
}
