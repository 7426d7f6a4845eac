//! Screendex - search movies and series, browse cast details, and bookmark
//! favorite people
//!
//! The binary is presentation glue only: it parses the command line, builds
//! the one `AppData` instance, and prints whatever the data-access layer
//! returns.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use screendex::app::AppData;
use screendex::cli::{self, Cli, Command, FavCommand, SearchKind};
use screendex::data::{ActorBio, ApiClient, ApiError, SearchReply, SeriesData};
use screendex::favorites::FavoritesStore;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_key = cli::resolve_api_key(cli.api_key, std::env::var(cli::API_KEY_ENV).ok());

    let favorites = match FavoritesStore::new() {
        Some(store) => store,
        None => {
            tracing::warn!("could not determine a data directory, using ./favorites.json");
            FavoritesStore::with_path(PathBuf::from("favorites.json"))
        }
    };
    let mut app = AppData::new(ApiClient::new(api_key), favorites);

    match run(&mut app, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Dispatches one parsed command against the facade
async fn run(app: &mut AppData, command: Command) -> Result<(), ApiError> {
    match command {
        Command::Search { query, kind } => run_search(app, &query, kind).await,
        Command::Title { id } => {
            let details = app.title_details(&id).await?;
            print_title(&details);
            Ok(())
        }
        Command::Person { id } => {
            let bio = app.actor_bio(&id).await?;
            print_bio(&bio, app.is_favorite(&bio.id));
            Ok(())
        }
        Command::Fav(fav) => run_fav(app, fav).await,
    }
}

/// Runs one or both searches; `both` runs them concurrently
async fn run_search(app: &AppData, query: &str, kind: SearchKind) -> Result<(), ApiError> {
    match kind {
        SearchKind::Series => print_reply("Series", &app.search_series(query).await?),
        SearchKind::Movies => print_reply("Movies", &app.search_movies(query).await?),
        SearchKind::Both => {
            let (series, movies) =
                futures::join!(app.search_series(query), app.search_movies(query));
            print_reply("Series", &series?);
            print_reply("Movies", &movies?);
        }
    }
    Ok(())
}

/// Handles the favorites subcommands, saving after every mutation
async fn run_fav(app: &mut AppData, command: FavCommand) -> Result<(), ApiError> {
    match command {
        FavCommand::List { bios } => {
            if app.favorites().is_empty() {
                println!("No favorites yet.");
                return Ok(());
            }
            if bios {
                let bio_futures: Vec<_> = app
                    .favorites()
                    .iter()
                    .map(|favorite| app.actor_bio(&favorite.id))
                    .collect();
                let results = futures::future::join_all(bio_futures).await;
                for (favorite, result) in app.favorites().iter().zip(results) {
                    match result {
                        Ok(bio) => print_bio(&bio, true),
                        Err(err) => println!("{}  {}  (bio unavailable: {})", favorite.id, favorite.name, err),
                    }
                }
            } else {
                for favorite in app.favorites() {
                    println!("{}  {}", favorite.id, favorite.name);
                }
            }
        }
        FavCommand::Add { id, name } => {
            if app.is_favorite(&id) {
                println!("{} is already a favorite.", id);
                return Ok(());
            }
            app.add_favorite(id.clone(), name.clone());
            if !app.save_favorites() {
                eprintln!("warning: favorites could not be saved");
            }
            println!("Added {} ({}).", name, id);
        }
        FavCommand::Rm { id } => {
            if !app.is_favorite(&id) {
                println!("{} is not a favorite.", id);
                return Ok(());
            }
            app.remove_favorite(&id);
            if !app.save_favorites() {
                eprintln!("warning: favorites could not be saved");
            }
            println!("Removed {}.", id);
        }
    }
    Ok(())
}

/// Prints one search reply as an id/title/description table
fn print_reply(heading: &str, reply: &SearchReply) {
    println!("{} matching \"{}\":", heading, reply.expression);
    if reply.results.is_empty() {
        println!("  (no results)");
        return;
    }
    for result in &reply.results {
        println!("  {}  {}  {}", result.id, result.title, result.description);
    }
}

/// Prints title details with the cast list
fn print_title(details: &SeriesData) {
    println!("{} ({})", details.title, details.year);
    if !details.plot.is_empty() {
        println!("{}", details.plot);
    }
    if !details.actor_list.is_empty() {
        println!("Cast:");
        for actor in &details.actor_list {
            println!("  {}  {} as {}", actor.id, actor.name, actor.as_character);
        }
    }
}

/// Prints a person's bio; bookmarked people get a star
fn print_bio(bio: &ActorBio, is_favorite: bool) {
    let marker = if is_favorite { " *" } else { "" };
    println!("{}{}  [{}]", bio.name, marker, bio.id);
    if !bio.summary.is_empty() {
        println!("{}", bio.summary);
    }
    if !bio.known_for.is_empty() {
        println!("Known for:");
        for role in &bio.known_for {
            println!("  {}  {} ({})", role.id, role.title, role.role);
        }
    }
}
