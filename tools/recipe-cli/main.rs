use clap::{Parser, Subcommand, ValueEnum};
use recipe_catalogue::data::sample_catalogue;
use recipe_catalogue::prelude::*;
use std::path::{Path, PathBuf};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Binary,
    Json,
}

/// Manage a recipe catalogue: enter recipes, search them by ingredient, and report on difficulty
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Catalogue file (overrides CATALOGUE__DATA_FILE and catalogue.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// On-disk encoding. Inferred from the file extension when omitted.
    #[arg(long, value_enum, global = true)]
    format: Option<FormatCli>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Enter recipes interactively and save them
    Add {
        /// Number of recipes to enter. Asked for when omitted.
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Add every recipe from a JSON batch file and save them
    Import {
        /// Path to the recipe batch JSON file
        batch_path: PathBuf,
    },
    /// Find recipes containing an ingredient
    Search {
        /// Exact ingredient to search for. A numbered menu is shown when omitted.
        #[arg(short, long)]
        ingredient: Option<String>,
    },
    /// Show every recipe and the complete ingredient list
    List,
    /// Count recipes per difficulty class
    Report,
    /// Walk through the built-in sample recipes without touching any file
    Demo,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let store = resolve_store(&cli);
    match cli.command {
        Command::Add { count } => run_add(&store, count),
        Command::Import { batch_path } => run_import(&store, &batch_path),
        Command::Search { ingredient } => run_search(&store, ingredient),
        Command::List => run_list(&store),
        Command::Report => run_report(&store),
        Command::Demo => run_demo(),
    }
}

/// Layers the command-line flags over the loaded configuration.
fn resolve_store(cli: &Cli) -> FileStore {
    let mut config = CatalogueConfig::load()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load configuration: {}", e)));
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
        config.format = None;
    }
    if let Some(format) = cli.format {
        config.format = Some(match format {
            FormatCli::Binary => StorageFormat::Binary,
            FormatCli::Json => StorageFormat::Json,
        });
    }
    config.store()
}

fn open_catalogue(store: &FileStore) -> RecipeCatalogue {
    RecipeCatalogue::open(store).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load catalogue from '{}': {}",
            store.path().display(),
            e
        ))
    })
}

fn save_catalogue(catalogue: &RecipeCatalogue, store: &FileStore) {
    catalogue.save(store).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to save catalogue to '{}': {}",
            store.path().display(),
            e
        ))
    });
}

/// Runs the interactive entry loop, then saves.
fn run_add(store: &FileStore, count: Option<usize>) {
    println!("--- Recipe Input ---");
    let mut catalogue = open_catalogue(store);

    let mut collector = PromptCollector::stdio(0);
    let count = count.unwrap_or_else(|| {
        collector
            .prompt_count()
            .unwrap_or_else(|e| exit_with_error(&e.to_string()))
    });
    collector.set_remaining(count);

    let added = collect_into(&mut collector, &mut catalogue)
        .unwrap_or_else(|e| exit_with_error(&format!("Recipe entry failed: {}", e)));
    save_catalogue(&catalogue, store);
    println!(
        "\n{} recipe(s) saved successfully to '{}'!",
        added,
        store.path().display()
    );
}

fn run_import(store: &FileStore, batch_path: &Path) {
    let mut catalogue = open_catalogue(store);
    let batch = RecipeBatch::from_file(batch_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read batch '{}': {}",
            batch_path.display(),
            e
        ))
    });

    let added = collect_into(&mut BatchCollector::new(batch), &mut catalogue)
        .unwrap_or_else(|e| exit_with_error(&format!("Import failed: {}", e)));
    save_catalogue(&catalogue, store);
    println!(
        "Imported {} recipe(s); catalogue now holds {}.",
        added,
        catalogue.len()
    );
}

/// Runs the search either directly or through the numbered ingredient picker.
fn run_search(store: &FileStore, ingredient: Option<String>) {
    let catalogue = open_catalogue(store);
    if catalogue.index().is_empty() {
        println!("The catalogue has no ingredients yet. Add some recipes first.");
        return;
    }

    let ingredient = match ingredient {
        Some(ingredient) => ingredient,
        None => {
            let sorted = catalogue.sorted_ingredients();
            println!("\n{}", RecipeFormatter::format_heading(" Full Ingredients List "));
            println!("{}", RecipeFormatter::format_ingredient_menu(&sorted));
            PromptCollector::stdio(0)
                .prompt_selection(&sorted)
                .map(str::to_string)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
    };

    let matches = catalogue.search_by_ingredient(&ingredient);
    println!(
        "\n{}",
        RecipeFormatter::format_search_banner(matches.len(), &ingredient)
    );
    for recipe in matches {
        println!("\n{}", RecipeFormatter::format_recipe(recipe));
    }
}

fn run_list(store: &FileStore) {
    let catalogue = open_catalogue(store);
    println!("\n{}", RecipeFormatter::format_heading("Recipe Details"));
    for recipe in catalogue.recipes() {
        println!("{}\n", RecipeFormatter::format_recipe(recipe));
    }

    println!("\n{}", RecipeFormatter::format_heading("Complete Ingredients List"));
    println!(
        "{}",
        RecipeFormatter::format_ingredient_list(&catalogue.sorted_ingredients())
    );
}

fn run_report(store: &FileStore) {
    let catalogue = open_catalogue(store);
    println!("\n{}", RecipeFormatter::format_heading("Recipes by Difficulty"));
    println!(
        "{}",
        RecipeFormatter::format_difficulty_summary(&catalogue.difficulty_summary())
    );
    println!("Total: {}", catalogue.len());
}

/// Creates the sample recipes, prints them, and searches a few ingredients.
fn run_demo() {
    let catalogue = sample_catalogue()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build sample recipes: {}", e)));

    println!("{}\n", RecipeFormatter::format_heading("# Sample recipes"));
    for recipe in catalogue.recipes() {
        println!("{}\n", recipe);
    }

    println!(
        "{}",
        RecipeFormatter::format_heading("# Searching recipes by ingredient")
    );
    for ingredient in ["Water", "Sugar", "Bananas"] {
        let heading = format!("Recipes with {}:", ingredient);
        println!("\n{}", RecipeFormatter::format_heading(&heading));
        for recipe in catalogue.index().find_recipes(ingredient, &catalogue) {
            println!("{}\n", recipe);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
