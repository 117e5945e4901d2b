use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cooksy::aggregator::ListScope;
use cooksy::config::AppConfig;
use cooksy::localization::t_args;
use cooksy::storage::FileStore;
use cooksy::store::AppStore;

#[derive(Parser, Debug)]
#[command(name = "cooksy")]
#[command(about = "Shopping lists and recipe ideas from your Cooksy meal plan", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Rebuild and print the shopping list from the saved meal plan
    List {
        /// Which days of the plan to shop for
        #[arg(value_enum, default_value_t = ListScope::Week)]
        scope: ListScope,
        /// Servings to scale every recipe to (default: COOKSY_DEFAULT_SERVINGS)
        servings: Option<u32>,
    },
    /// Ask the assistant for recipes using these ingredients, e.g. `paneer, peas`
    Suggest {
        ingredients: Vec<String>,
    },
}

/// Print the shopping list for the saved meal plan
fn print_shopping_list(
    store: &mut AppStore<FileStore>,
    scope: ListScope,
    servings: Option<u32>,
) -> Result<()> {
    if store.meal_plan().is_empty() {
        println!("{}", t_args("shopping-list-empty", &[]));
        return Ok(());
    }

    let servings = servings.unwrap_or(store.config().default_servings);
    let scope_label = match scope {
        ListScope::Today => t_args("shopping-scope-today", &[]),
        ListScope::Week => t_args("shopping-scope-week", &[]),
    };
    let list = store.generate_shopping_list_from_meal_plan(scope, Some(servings))?;

    let servings_text = servings.to_string();
    println!(
        "{}",
        t_args(
            "shopping-list-title",
            &[("scope", scope_label.as_str()), ("servings", servings_text.as_str())]
        )
    );
    for (category, items) in list.grouped_by_category() {
        println!("\n{category}");
        for item in items {
            println!("  [ ] {} {}", item.name, item.quantity);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    info!(data_dir = %config.data_dir.display(), "Starting Cooksy");

    let storage = FileStore::open(&config.data_dir)?;
    let mut store = AppStore::load(storage, config)?;

    let command = cli.command.unwrap_or(Commands::List {
        scope: ListScope::Week,
        servings: None,
    });
    match command {
        Commands::List { scope, servings } => {
            print_shopping_list(&mut store, scope, servings)?;
        }
        Commands::Suggest { ingredients } => {
            let reply = store.ask_assistant(&ingredients.join(" ")).await;
            for message in &reply.messages {
                println!("{}", message.text);
            }
            for recipe in &reply.suggestions {
                println!("  {} ({:.1}, {})", recipe.name, recipe.rating, recipe.cook_time);
            }
        }
    }

    Ok(())
}
