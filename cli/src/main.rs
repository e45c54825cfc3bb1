mod formatter;
mod server;

use anyhow::Result;
use carte::{DietFilter, Engine, QualityLevel, QualityOverrides};
use clap::{Parser, Subcommand};
use formatter::Formatter;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "carte")]
#[command(about = "The menu that computes itself.")]
#[command(
    long_about = "Carte answers queries about a restaurant menu: prices and quality scores at chosen ingredient grades, dietary filtering, name search, and budget-constrained selection.\nThe CLI works against a JSON catalog file and can also serve the same queries over HTTP."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu, optionally filtered by diet
    ///
    /// With no flags the whole catalog is printed in order. The dietary flags
    /// keep only meals whose every ingredient belongs to the group.
    Meals {
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
        /// Only meals made entirely of vegetarian ingredients
        #[arg(long)]
        vegetarian: bool,
        /// Only meals made entirely of vegan ingredients
        #[arg(long)]
        vegan: bool,
    },
    /// Show one meal with its ingredients' pricing options
    Show {
        /// Meal id
        id: u64,
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
    },
    /// Search meals by name (case-insensitive substring)
    Search {
        /// Substring to look for in meal names
        query: String,
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
    },
    /// Price of a meal at chosen ingredient grades
    ///
    /// Grades are given as name=level pairs (level: low, medium or high).
    /// Ingredients without a pair default to high.
    ///
    /// Example: carte price 1 Beef=low Onion=medium
    Price {
        /// Meal id
        meal_id: u64,
        /// Per-ingredient grades (format: ingredient=level)
        overrides: Vec<String>,
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
    },
    /// Mean quality score of a meal at chosen ingredient grades
    Quality {
        /// Meal id
        meal_id: u64,
        /// Per-ingredient grades (format: ingredient=level)
        overrides: Vec<String>,
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
    },
    /// Roll a random meal with random ingredient grades
    Random {
        /// Cap the reported price at this budget
        #[arg(short, long)]
        budget: Option<Decimal>,
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
    },
    /// Find the highest-quality meal affordable within a budget
    ///
    /// With --meal, checks that one meal against the budget instead of
    /// searching the whole menu.
    Best {
        /// Budget to stay within
        budget: Decimal,
        /// Check this meal only
        #[arg(short, long)]
        meal: Option<u64>,
        /// Only meals made entirely of vegetarian ingredients
        #[arg(long)]
        vegetarian: bool,
        /// Only meals made entirely of vegan ingredients
        #[arg(long)]
        vegan: bool,
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
    },
    /// Start the HTTP API server (default: localhost:3000)
    ///
    /// Serves the catalog queries over HTTP: GET /listMeals, /getMeal,
    /// /search and POST /quality, /price, /random, /findHighest,
    /// /findHighestOfMeal.
    Server {
        /// Catalog JSON file
        #[arg(short = 'd', long = "data", default_value = "data.json")]
        data: PathBuf,
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Meals {
            data,
            vegetarian,
            vegan,
        } => meals_command(data, *vegetarian, *vegan),
        Commands::Show { id, data } => show_command(data, *id),
        Commands::Search { query, data } => search_command(data, query),
        Commands::Price {
            meal_id,
            overrides,
            data,
        } => price_command(data, *meal_id, overrides),
        Commands::Quality {
            meal_id,
            overrides,
            data,
        } => quality_command(data, *meal_id, overrides),
        Commands::Random { budget, data } => random_command(data, *budget),
        Commands::Best {
            budget,
            meal,
            vegetarian,
            vegan,
            data,
        } => best_command(data, *budget, *meal, *vegetarian, *vegan),
        Commands::Server { data, host, port } => server_command(data, host, *port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_engine(data: &Path) -> Result<Engine> {
    Ok(Engine::from_path(data)?)
}

fn diet_filter(vegetarian: bool, vegan: bool) -> DietFilter {
    DietFilter { vegetarian, vegan }
}

fn meals_command(data: &Path, vegetarian: bool, vegan: bool) -> Result<()> {
    let engine = load_engine(data)?;
    let menu = engine.list_meals(diet_filter(vegetarian, vegan));
    println!("{}", Formatter::new().format_menu(&menu));
    Ok(())
}

fn show_command(data: &Path, id: u64) -> Result<()> {
    let engine = load_engine(data)?;
    let meal = engine.get_meal(id)?;
    println!("{}", Formatter::new().format_meal_details(&meal));
    Ok(())
}

fn search_command(data: &Path, query: &str) -> Result<()> {
    let engine = load_engine(data)?;
    let matches = engine.search_meals(query)?;
    println!("{}", Formatter::new().format_menu(&matches));
    Ok(())
}

fn price_command(data: &Path, meal_id: u64, overrides: &[String]) -> Result<()> {
    let engine = load_engine(data)?;
    let overrides = parse_overrides(overrides)?;
    println!("{}", engine.price(meal_id, &overrides)?);
    Ok(())
}

fn quality_command(data: &Path, meal_id: u64, overrides: &[String]) -> Result<()> {
    let engine = load_engine(data)?;
    let overrides = parse_overrides(overrides)?;
    println!("{}", engine.quality(meal_id, &overrides)?);
    Ok(())
}

fn random_command(data: &Path, budget: Option<Decimal>) -> Result<()> {
    let engine = load_engine(data)?;
    let rolled = engine.random_meal(budget)?;
    println!("{}", Formatter::new().format_random_meal(&rolled));
    Ok(())
}

fn best_command(
    data: &Path,
    budget: Decimal,
    meal: Option<u64>,
    vegetarian: bool,
    vegan: bool,
) -> Result<()> {
    let engine = load_engine(data)?;
    let selection = match meal {
        Some(meal_id) => engine.find_highest_of_meal(meal_id, budget)?,
        None => engine.find_highest(budget, diet_filter(vegetarian, vegan))?,
    };
    println!("{}", Formatter::new().format_selection(&selection));
    Ok(())
}

fn server_command(data: &Path, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            let engine = load_engine(data)?;

            println!(
                "Starting HTTP server with {} meal(s) loaded",
                engine.catalog().meals().len()
            );
            server::http::start_server(engine, host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (data, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

/// Parse "ingredient=level" pairs into quality overrides
fn parse_overrides(pairs: &[String]) -> Result<QualityOverrides> {
    let mut overrides = QualityOverrides::new();
    for pair in pairs {
        let (name, level) = pair.split_once('=').ok_or_else(|| {
            anyhow::anyhow!("Invalid override '{}', expected ingredient=level", pair)
        })?;
        overrides.insert(name.to_string(), QualityLevel::from_str(level)?);
    }
    Ok(overrides)
}
