use clap::{Parser, Subcommand};
use maze::app_config::AppConfig;
use maze::{GeoUri, Location, Maze};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "maze")]
#[command(about = "Parse geo URIs and look up locations", long_about = None)]
struct Args {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the location described by a geo URI as JSON
    Parse { uri: String },
    /// Print the canonical form of a geo URI
    Normalize { uri: String },
    /// Print the distance in meters between two geo URIs
    Distance { from: String, to: String },
    /// Look up the location at the coordinates of a geo URI
    Reverse {
        uri: String,
        /// Result language, defaults to the configured one
        #[arg(long)]
        lang: Option<String>,
    },
    /// Look up a location by name or address
    Search {
        query: String,
        /// Result language, defaults to the configured one
        #[arg(long)]
        lang: Option<String>,
    },
    /// Look up an airport by name, ICAO or IATA code
    Airport { query: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    match args.command {
        Command::Parse { uri } => {
            let location = Location::parse(&uri)?;
            println!("{}", serde_json::to_string_pretty(&location)?);
            println!("{}", location);
        }
        Command::Normalize { uri } => {
            let geo = GeoUri::parse(&uri)?;
            println!("{}", geo);
        }
        Command::Distance { from, to } => {
            let from = Location::parse(&from)?;
            let to = Location::parse(&to)?;
            println!("{}", from.distance(&to));
        }
        Command::Reverse { uri, lang } => {
            let (maze, config) = lookup()?;
            let lang = lang.unwrap_or_else(|| config.photon().language().to_string());
            println!("{}", maze.reverse_geo_uri(&lang, &uri).await?);
        }
        Command::Search { query, lang } => {
            let (maze, config) = lookup()?;
            let lang = lang.unwrap_or_else(|| config.photon().language().to_string());
            println!("{}", maze.search(&lang, &query).await?);
        }
        Command::Airport { query } => {
            let (maze, _) = lookup()?;
            println!("{}", maze.airport(&query).await?);
        }
    }

    Ok(())
}

fn lookup() -> Result<(Maze, AppConfig), Box<dyn std::error::Error>> {
    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");
    debug!("Configuration: {:?}", config);

    let maze = Maze::from_config(&config)?;
    Ok((maze, config))
}
