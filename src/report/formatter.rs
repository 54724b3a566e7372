use crate::recipe::{Difficulty, Recipe};
use itertools::Itertools;

/// Renders recipes, menus and summaries as human-readable text.
pub struct RecipeFormatter;

impl RecipeFormatter {
    /// Format a single recipe as an indented block.
    pub fn format_recipe(recipe: &Recipe) -> String {
        let mut result = format!(
            "Recipe: {}\n  Time: {} mins\n  Ingredients:\n",
            title_case(recipe.name()),
            recipe.cooking_time()
        );
        for ingredient in recipe.ingredients() {
            result.push_str(&format!("  - {}\n", title_case(ingredient)));
        }
        result.push_str(&format!("  Difficulty: {}", recipe.difficulty()));
        result
    }

    /// Numbered menu lines, starting at 1.
    pub fn format_ingredient_menu<S: AsRef<str>>(sorted: &[S]) -> String {
        sorted
            .iter()
            .enumerate()
            .map(|(i, ingredient)| format!("{}.) {}", i + 1, title_case(ingredient.as_ref())))
            .join("\n")
    }

    /// A bulleted list, one ingredient per line.
    pub fn format_ingredient_list<S: AsRef<str>>(sorted: &[S]) -> String {
        sorted
            .iter()
            .map(|ingredient| format!("- {}", title_case(ingredient.as_ref())))
            .join("\n")
    }

    /// The framed headline shown above search results.
    pub fn format_search_banner(count: usize, ingredient: &str) -> String {
        let noun = if count == 1 { "Recipe" } else { "Recipes" };
        let headline = format!(
            "{} {} found containing {}",
            count,
            noun,
            title_case(ingredient)
        );
        // The frame overhangs the headline by one column on each side.
        let frame = "-".repeat(headline.chars().count() + 2);
        format!("{}\n {} \n{}", frame, headline, frame)
    }

    /// A short heading framed by dashes above and below.
    pub fn format_heading(title: &str) -> String {
        let frame = "-".repeat(title.chars().count());
        format!("{}\n{}\n{}", frame, title, frame)
    }

    pub fn format_difficulty_summary(summary: &[(Difficulty, usize)]) -> String {
        let width = Difficulty::ALL
            .iter()
            .map(|d| d.as_str().len())
            .max()
            .unwrap_or(0);
        summary
            .iter()
            .map(|(difficulty, count)| {
                format!("{:<width$}  {}", difficulty.as_str(), count, width = width)
            })
            .join("\n")
    }
}

/// Upper-cases the first letter of every whitespace-separated word and lower-cases the rest.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .join(" ")
}
