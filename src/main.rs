use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use property_search::catalog::{self, Catalog};
use property_search::config::Settings;
use property_search::display::{bedrooms_label, encode_html, excerpt, format_price};
use property_search::favourites::{FavouritesStore, FileSlot, PersistenceSlot};
use property_search::{Criteria, Listing, ListingId};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Search a property catalog and keep a shortlist of favourites
#[derive(Parser)]
#[command(name = "property-search", version)]
struct Cli {
    /// Catalog file path or http(s) URL
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Directory holding the favourites slot
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory containing config.json
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    /// HTML fragment with all listing text escaped
    Html,
}

#[derive(Subcommand)]
enum Commands {
    /// List listings matching the given criteria (all listings when none given)
    Search {
        /// Property type, or "any"
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        min_price: Option<String>,
        #[arg(long)]
        max_price: Option<String>,
        #[arg(long)]
        min_bedrooms: Option<String>,
        #[arg(long)]
        max_bedrooms: Option<String>,
        /// Earliest date added (YYYY-MM-DD)
        #[arg(long)]
        date_from: Option<String>,
        /// Latest date added (YYYY-MM-DD)
        #[arg(long)]
        date_to: Option<String>,
        /// Postcode fragment, case-insensitive
        #[arg(long)]
        postcode: Option<String>,
    },

    /// Show one listing in detail
    Show { id: String },

    /// List the property types present in the catalog
    Types,

    /// Manage favourites
    Favourites {
        #[command(subcommand)]
        action: FavouritesAction,
    },
}

#[derive(Subcommand)]
enum FavouritesAction {
    List,
    Add { id: String },
    Remove { id: String },
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    debug!("Using settings {:?}", settings);

    match cli.command {
        Commands::Search {
            kind,
            min_price,
            max_price,
            min_bedrooms,
            max_bedrooms,
            date_from,
            date_to,
            postcode,
        } => {
            let criteria = Criteria {
                kind,
                min_price,
                max_price,
                min_bedrooms,
                max_bedrooms,
                date_from,
                date_to,
                postcode,
            };
            let catalog = load_catalog(&settings).await?;
            let favourites = open_favourites(&settings)?;
            let results = catalog.search(&criteria);
            info!("{} of {} listings match", results.len(), catalog.len());
            print_listings(&results, &favourites, cli.format)?;
        }
        Commands::Show { id } => {
            let catalog = load_catalog(&settings).await?;
            let favourites = open_favourites(&settings)?;
            let listing = catalog
                .get(&ListingId::parse(&id))
                .with_context(|| format!("No listing with id {}", id))?;
            let is_favourite = favourites.contains(&listing.id);
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(listing)?),
                OutputFormat::Html => println!("{}", render_html(listing, is_favourite)),
                OutputFormat::Text => print_detail(listing, is_favourite),
            }
        }
        Commands::Types => {
            let catalog = load_catalog(&settings).await?;
            let types = catalog.property_types();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&types)?),
                OutputFormat::Html => {
                    for kind in types {
                        println!(r#"<option value="{0}">{0}</option>"#, encode_html(&kind));
                    }
                }
                OutputFormat::Text => {
                    for kind in types {
                        println!("{}", kind);
                    }
                }
            }
        }
        Commands::Favourites { action } => {
            let mut favourites = open_favourites(&settings)?;
            match action {
                FavouritesAction::List => {
                    print_listings(favourites.all(), &favourites, cli.format)?;
                }
                FavouritesAction::Add { id } => {
                    let catalog = load_catalog(&settings).await?;
                    let listing = catalog
                        .get(&ListingId::parse(&id))
                        .with_context(|| format!("No listing with id {}", id))?
                        .clone();
                    let listing_id = listing.id.clone();
                    if favourites.add(listing) {
                        println!("Added {} to favourites", listing_id);
                    } else {
                        println!("{} is already a favourite", listing_id);
                    }
                }
                FavouritesAction::Remove { id } => {
                    let wanted = ListingId::parse(&id);
                    let resolved = favourites
                        .all()
                        .iter()
                        .map(|fav| fav.id.clone())
                        .find(|fav_id| fav_id.same_as(&wanted))
                        .unwrap_or(wanted);
                    if favourites.remove(&resolved) {
                        println!("Removed {} from favourites", resolved);
                    } else {
                        println!("{} is not a favourite", resolved);
                    }
                }
                FavouritesAction::Clear => {
                    favourites.clear();
                    println!("Cleared favourites");
                }
            }
        }
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let config_dir = cli.config.clone().or_else(Settings::default_config_dir);
    let mut settings = match config_dir {
        Some(dir) => Settings::load(&dir)
            .with_context(|| format!("Failed to load config from {}", dir.display()))?,
        None => {
            warn!("No config directory available, using defaults");
            Settings::default()
        }
    };

    if let Some(catalog) = &cli.catalog {
        settings.catalog = catalog.clone();
    }
    if let Some(dir) = &cli.data_dir {
        settings.data_dir = Some(dir.clone());
    }
    Ok(settings)
}

async fn load_catalog(settings: &Settings) -> Result<Catalog> {
    let source = catalog::open_source(&settings.catalog)
        .with_context(|| format!("Failed to open catalog {}", settings.catalog))?;
    Ok(Catalog::load(source.as_ref()).await)
}

fn open_favourites(settings: &Settings) -> Result<FavouritesStore<FileSlot>> {
    let dir = settings
        .resolve_data_dir()
        .context("Failed to locate favourites storage")?;
    let slot = FileSlot::new(dir, settings.slot_key.clone());
    debug!("Favourites slot '{}' at {}", slot.name(), slot.path().display());
    Ok(FavouritesStore::load(slot))
}

fn print_listings<S: PersistenceSlot>(
    listings: &[Listing],
    favourites: &FavouritesStore<S>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(listings)?);
            return Ok(());
        }
        OutputFormat::Html => {
            for listing in listings {
                println!("{}", render_html(listing, favourites.contains(&listing.id)));
            }
            return Ok(());
        }
        OutputFormat::Text => {}
    }

    if listings.is_empty() {
        println!("No properties match your search criteria.");
        return Ok(());
    }

    for (i, listing) in listings.iter().enumerate() {
        let marker = if favourites.contains(&listing.id) { " ♥" } else { "" };
        println!(
            "{}. {} in {} ({}){}",
            i + 1,
            listing.kind,
            listing.location,
            format_price(listing.price),
            marker
        );
        println!(
            "   {}, {}, added {}",
            bedrooms_label(listing.bedrooms),
            listing.postcode,
            listing.added
        );
        if !listing.description.is_empty() {
            println!("   {}", excerpt(&listing.description, 100));
        }
        println!("   ID: {}", listing.id);
        println!();
    }
    Ok(())
}

fn print_detail(listing: &Listing, is_favourite: bool) {
    println!("{} in {}", listing.kind, listing.location);
    println!("Price: {}", format_price(listing.price));
    println!("Bedrooms: {}", listing.bedrooms);
    if let Some(tenure) = &listing.tenure {
        println!("Tenure: {}", tenure);
    }
    println!("Postcode: {}", listing.postcode);
    println!("Added: {}", listing.added);
    if let Some(url) = &listing.url {
        println!("URL: {}", url);
    }
    if let Some(coordinates) = &listing.coordinates {
        println!("Coordinates: {}, {}", coordinates.lat, coordinates.lng);
    }
    if !listing.pictures.is_empty() {
        println!("Pictures: {}", listing.pictures.len());
    }
    println!("Favourite: {}", if is_favourite { "yes" } else { "no" });
    if !listing.description.is_empty() {
        println!();
        println!("{}", listing.description);
    }
}

fn render_html(listing: &Listing, is_favourite: bool) -> String {
    let class = if is_favourite {
        "property-card favourite"
    } else {
        "property-card"
    };
    format!(
        r#"<article class="{}" data-id="{}">
  <h3>{} in {}</h3>
  <p class="price">{}</p>
  <p class="bedrooms">{}</p>
  <p class="postcode">{}</p>
  <p class="description">{}</p>
</article>"#,
        class,
        encode_html(&listing.id.to_string()),
        encode_html(&listing.kind),
        encode_html(&listing.location),
        encode_html(&format_price(listing.price)),
        bedrooms_label(listing.bedrooms),
        encode_html(&listing.postcode),
        encode_html(&excerpt(&listing.description, 100)),
    )
}
