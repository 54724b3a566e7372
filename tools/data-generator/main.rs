use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;
use recipe_catalogue::input::RecipeBatch;
use recipe_catalogue::recipe::RecipeDraft;
use std::fs;

const DISHES: &[&str] = &[
    "Pancakes",
    "Omelette",
    "Lentil Soup",
    "Fried Rice",
    "Banana Bread",
    "Guacamole",
    "Porridge",
    "Tomato Pasta",
    "Fruit Salad",
    "Chili",
    "Flatbread",
    "Iced Tea",
];

const PANTRY: &[&str] = &[
    "Flour",
    "Sugar",
    "Eggs",
    "Milk",
    "Butter",
    "Salt",
    "Water",
    "Rice",
    "Lentils",
    "Tomatoes",
    "Onion",
    "Garlic",
    "Olive Oil",
    "Bananas",
    "Avocado",
    "Lime",
    "Oats",
    "Honey",
    "Chili Powder",
    "Tea Leaves",
    "Baking Powder",
    "Pasta",
];

/// A CLI tool to generate recipe batches for `recipe-cli import`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_recipes.json")]
    output: String,

    /// How many recipes to generate
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// The minimum number of ingredients per recipe
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of ingredients per recipe
    #[arg(long, default_value_t = 8)]
    max: usize,

    /// The longest cooking time to generate, in minutes
    #[arg(long, default_value_t = 90)]
    max_minutes: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min == 0 || cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) must be at least 1 and not greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if cli.max_minutes == 0 {
        eprintln!("Error: --max-minutes must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating {} recipes ({} to {} ingredients each)...",
        cli.count, cli.min, cli.max
    );

    let batch = RecipeBatch {
        recipes: (0..cli.count)
            .map(|_| generate_recipe(&mut rng, cli.min, cli.max, cli.max_minutes))
            .collect(),
    };

    fs::write(&cli.output, batch.to_json()?)?;

    println!(
        "Successfully generated and saved {} recipes to '{}'",
        batch.len(),
        cli.output
    );

    Ok(())
}

/// Picks a dish, a cooking time and a distinct set of pantry ingredients.
fn generate_recipe(rng: &mut impl Rng, min: usize, max: usize, max_minutes: u32) -> RecipeDraft {
    let name = DISHES.choose(rng).copied().unwrap_or("Mystery Dish");
    let cooking_time = rng.random_range(1..=max_minutes);
    let count = rng.random_range(min..=max).min(PANTRY.len());
    let ingredients = PANTRY.choose_multiple(rng, count).copied();
    RecipeDraft::new(name, cooking_time, ingredients)
}
