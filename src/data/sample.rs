use crate::catalogue::RecipeCatalogue;
use crate::error::Result;
use crate::input::{BatchCollector, RecipeBatch, collect_into};
use crate::recipe::RecipeDraft;

/// The four walkthrough recipes: Tea, Coffee, Cake and Banana Smoothie.
pub fn sample_batch() -> RecipeBatch {
    RecipeBatch {
        recipes: vec![
            RecipeDraft::new("Tea", 5, ["Tea Leaves", "Sugar", "Water"]),
            RecipeDraft::new("Coffee", 5, ["Coffee Powder", "Sugar", "Water"]),
            RecipeDraft::new(
                "Cake",
                50,
                [
                    "Sugar",
                    "Butter",
                    "Eggs",
                    "Vanilla Essence",
                    "Flour",
                    "Baking Powder",
                    "Milk",
                ],
            ),
            RecipeDraft::new(
                "Banana Smoothie",
                5,
                ["Bananas", "Milk", "Peanut Butter", "Sugar", "Ice Cubes"],
            ),
        ],
    }
}

/// A catalogue pre-filled with [`sample_batch`].
pub fn sample_catalogue() -> Result<RecipeCatalogue> {
    let mut catalogue = RecipeCatalogue::new();
    collect_into(&mut BatchCollector::new(sample_batch()), &mut catalogue)?;
    Ok(catalogue)
}
