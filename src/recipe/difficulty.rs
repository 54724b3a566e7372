use serde::{Deserialize, Serialize};
use std::fmt;

/// Cooking times strictly below this many minutes count as quick.
pub const QUICK_COOKING_TIME: u32 = 10;

/// Recipes with at least this many ingredients count as involved.
pub const INVOLVED_INGREDIENT_COUNT: usize = 4;

/// The difficulty rating of a recipe, derived from its cooking time and ingredient count.
///
/// | cooking time | fewer than 4 ingredients | 4 or more |
/// |--------------|--------------------------|-----------|
/// | < 10 min     | `Easy`                   | `Medium`  |
/// | >= 10 min    | `Intermediate`           | `Hard`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Intermediate,
    Hard,
}

impl Difficulty {
    /// All classes in table order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Intermediate,
        Difficulty::Hard,
    ];

    /// Classifies a recipe. Total over every `(cooking_time, ingredient_count)` pair.
    pub fn classify(cooking_time: u32, ingredient_count: usize) -> Self {
        let quick = cooking_time < QUICK_COOKING_TIME;
        let involved = ingredient_count >= INVOLVED_INGREDIENT_COUNT;
        match (quick, involved) {
            (true, false) => Difficulty::Easy,
            (true, true) => Difficulty::Medium,
            (false, false) => Difficulty::Intermediate,
            (false, true) => Difficulty::Hard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
