// src/main.rs
//
// cinedex command line entry point.
//
// ```bash
// cinedex load-preset classics
// cinedex movies --genre Thriller --year 2000
// cinedex --json crew 65f1c0...
// ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use serde::Serialize;
use std::path::PathBuf;

use cinedex::application::{
    catalog_commands, preset_commands, AppState, ErrorResponse, MovieDto, MovieSearchDto,
    NamedEntityDto, PresetSource,
};
use cinedex::{CatalogConfig, CatalogError, IngestionProgress, Preset};

/// Name-based client for the movie catalog backend
#[derive(Parser, Debug)]
#[command(name = "cinedex", version)]
#[command(about = "Load presets into and browse a movie catalog backend")]
struct Cli {
    /// Config file (defaults to {config_dir}/cinedex/config.json)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Backend base URL, overriding the config file
    #[arg(long, env = "CINEDEX_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds, overriding the config file
    #[arg(long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clear the catalog, then load a preset batch
    LoadPreset {
        /// Built-in preset name (test, classics)
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        name: Option<String>,

        /// JSON file holding an array of preset records
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Delete every movie, crew member and genre
    Clear,

    /// List movies, optionally filtered by names
    Movies {
        /// Title substring
        #[arg(long)]
        title: Option<String>,

        /// Director name (exact)
        #[arg(long)]
        director: Option<String>,

        /// Cast member name (exact)
        #[arg(long)]
        cast: Option<String>,

        /// Genre name (exact)
        #[arg(long)]
        genre: Option<String>,

        #[arg(long)]
        year: Option<i32>,
    },

    /// Show one movie
    Movie { id: String },

    /// Show a crew member with the movies they directed and starred in
    Crew { id: String },

    /// List every crew member
    People,

    /// List every genre
    Genres,

    /// List the built-in presets
    Presets,

    /// Check the backend is reachable
    Heartbeat,
}

fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stderr)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => CatalogConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CatalogConfig::load().context("Failed to load config")?,
    };

    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.request_timeout_secs = secs;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_movies(movies: &[MovieDto]) {
    if movies.is_empty() {
        println!("No movies found");
    }
    for movie in movies {
        match movie.release_year {
            Some(year) => println!("{}  {} ({})", movie.id, movie.title, year),
            None => println!("{}  {}", movie.id, movie.title),
        }
    }
}

fn print_named(entities: &[NamedEntityDto]) {
    for entity in entities {
        println!("{}  {}", entity.id, entity.name);
    }
}

fn progress_printer(json: bool) -> impl FnMut(&IngestionProgress) + Send {
    move |progress: &IngestionProgress| {
        if json {
            log::info!("{}", progress);
        } else {
            println!("{}", progress);
        }
    }
}

async fn run(state: &AppState, command: Command, json: bool) -> anyhow::Result<()> {
    match command {
        Command::LoadPreset { name, file } => {
            let source = match (name, file) {
                (_, Some(path)) => PresetSource::File(path),
                (Some(name), None) => PresetSource::Builtin(name),
                (None, None) => anyhow::bail!("Either a preset name or --file is required"),
            };
            let report =
                preset_commands::load_preset(state, &source, progress_printer(json)).await?;
            emit(json, &report, |r| {
                println!(
                    "Loaded {} of {} movies ({} crew created, {} genres created) in {} ms",
                    r.movies_created, r.total_records, r.crew_created, r.genres_created, r.duration_ms
                )
            })
        }

        Command::Clear => {
            preset_commands::clear_catalog(state, progress_printer(json)).await?;
            Ok(())
        }

        Command::Movies {
            title,
            director,
            cast,
            genre,
            year,
        } => {
            let search = MovieSearchDto {
                title,
                director,
                cast,
                genre,
                year,
            };
            let movies = catalog_commands::search_movies(state, &search).await?;
            emit(json, &movies, |m| print_movies(m))
        }

        Command::Movie { id } => {
            let movie = catalog_commands::get_movie(state, &id).await?;
            emit(json, &movie, |m| {
                println!("{} ({})", m.title, m.id);
                if let Some(year) = m.release_year {
                    println!("  Year:      {}", year);
                }
                if let Some(rating) = m.audience_rating {
                    println!("  Rating:    {}", rating);
                }
                println!("  Director:  {}", m.directed_by);
                println!("  Cast:      {}", m.cast.join(", "));
                println!("  Genres:    {}", m.genres.join(", "));
                if let Some(description) = &m.description {
                    println!("\n{}", description);
                }
            })
        }

        Command::Crew { id } => {
            let details = catalog_commands::get_crew_details(state, &id).await?;
            emit(json, &details, |d| {
                println!("{} ({})", d.name, d.id);
                println!("Directed:");
                print_movies(&d.directed);
                println!("Starring:");
                print_movies(&d.starring);
            })
        }

        Command::People => {
            let crew = catalog_commands::list_crew(state).await?;
            emit(json, &crew, |c| print_named(c))
        }

        Command::Genres => {
            let genres = catalog_commands::list_genres(state).await?;
            emit(json, &genres, |g| print_named(g))
        }

        Command::Presets => {
            let names: Vec<&str> = Preset::ALL.iter().map(Preset::name).collect();
            emit(json, &names, |n| n.iter().for_each(|name| println!("{}", name)))
        }

        Command::Heartbeat => {
            let status = catalog_commands::check_backend(state).await?;
            emit(json, &status, |s| println!("{}: {}", s.base_url, s.message))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let state = AppState::connect(&config).context("Failed to set up catalog client")?;
    log::debug!("Using catalog backend at {}", config.base_url());

    let json = cli.json;
    let result = run(&state, cli.command, json).await;

    // Catalog failures get a categorised message and exit code; anything else
    // falls through to anyhow's report
    if let Err(err) = &result {
        if let Some(catalog_err) = err.downcast_ref::<CatalogError>() {
            let response = ErrorResponse::from_catalog_error(catalog_err);
            if json {
                println!("{}", response.to_json());
            } else {
                eprintln!("Error: {}", response);
            }
            std::process::exit(response.error_type.exit_code());
        }
    }

    result
}
