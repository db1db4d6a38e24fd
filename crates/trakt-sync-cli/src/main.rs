use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::build::{self, CollectOptions, CommentTarget, SeasonEpisodes, SyncBodyLists};
use commands::decode::{self, DecodeKind};
use output::{Output, OutputFormat};
use std::path::PathBuf;
use trakt_sync_config::{Config, PathManager};
use trakt_sync_models::{Audio, AudioChannels, Hdr, MediaType, Resolution, SyncId};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "traktsync")]
#[command(about = "traktsync - Build and inspect Trakt sync request bodies")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all messages except errors (bodies are still printed)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format [default: from config, else json-pretty]
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identifier object with Trakt and/or TMDB id
    SyncId {
        /// Trakt id (0 or omitted leaves it out of the body)
        #[arg(long, default_value_t = 0)]
        trakt: u64,

        #[arg(long)]
        tmdb: Option<u64>,
    },
    /// Flat TMDB identifier object
    TmdbId {
        #[arg(long)]
        tmdb: u64,
    },
    /// Bulk body with lists of Trakt ids (e.g. for /sync/watchlist)
    #[command(long_about = "Build a bulk sync body from comma-separated Trakt ids. A flag given with no values is sent as an empty list; a flag left out is left out of the body.")]
    SyncBody {
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        movies: Option<Vec<u64>>,

        #[arg(long, value_delimiter = ',', num_args = 0..)]
        shows: Option<Vec<u64>>,

        #[arg(long, value_delimiter = ',', num_args = 0..)]
        seasons: Option<Vec<u64>>,

        #[arg(long, value_delimiter = ',', num_args = 0..)]
        episodes: Option<Vec<u64>>,

        #[arg(long, value_delimiter = ',', num_args = 0..)]
        people: Option<Vec<u64>>,

        /// Raw ids, e.g. history entry ids
        #[arg(long, value_delimiter = ',', num_args = 0..)]
        ids: Option<Vec<u64>>,
    },
    /// History entry referenced by TMDB id
    HistoryItem {
        #[arg(long)]
        tmdb: u64,

        /// RFC 3339 timestamp, e.g. 2024-03-09T21:30:00Z
        #[arg(long)]
        watched_at: Option<DateTime<Utc>>,
    },
    /// Show with specific seasons and episodes to mark as watched
    ShowHistory {
        #[arg(long, required_unless_present = "tmdb")]
        trakt: Option<u64>,

        #[arg(long)]
        tmdb: Option<u64>,

        /// SEASON=EPISODES, e.g. 1=1,2,3 or 2=1-8 (repeatable)
        #[arg(long = "season", value_name = "SEASON=EPISODES", required = true, value_parser = build::parse_season_episodes)]
        seasons: Vec<SeasonEpisodes>,

        /// Applied to every episode; omitted lets Trakt pick the time
        #[arg(long)]
        watched_at: Option<DateTime<Utc>>,
    },
    /// Rating between 1 and 10
    Rating {
        #[arg(long)]
        trakt: u64,

        #[arg(long, value_parser = build::parse_rating)]
        rating: u8,

        #[arg(long)]
        rated_at: Option<DateTime<Utc>>,
    },
    /// Collection entry with optional media classification
    #[command(long_about = "Build a collection entry. Classification flags that are left out fall back to the [collection] section of the config file.")]
    Collect {
        #[arg(long)]
        trakt: u64,

        /// Defaults to now
        #[arg(long, conflicts_with = "released")]
        collected_at: Option<DateTime<Utc>>,

        /// Let Trakt use the initial release date
        #[arg(long, action = ArgAction::SetTrue)]
        released: bool,

        #[arg(long)]
        media_type: Option<MediaType>,

        #[arg(long)]
        resolution: Option<Resolution>,

        #[arg(long)]
        hdr: Option<Hdr>,

        #[arg(long)]
        audio: Option<Audio>,

        #[arg(long)]
        audio_channels: Option<AudioChannels>,

        /// Whether the copy is 3D
        #[arg(long = "3d", value_name = "BOOL")]
        is_3d: Option<bool>,
    },
    /// Comment on a movie, show, season, episode or list
    Comment {
        #[arg(long, value_enum)]
        on: CommentTarget,

        #[arg(long, default_value_t = 0)]
        trakt: u64,

        #[arg(long)]
        tmdb: Option<u64>,

        #[arg(long)]
        text: String,

        #[arg(long, action = ArgAction::SetTrue)]
        spoiler: bool,
    },
    /// Decode an identifier object from FILE or stdin and print it normalized
    Decode {
        #[arg(value_enum)]
        kind: DecodeKind,

        file: Option<PathBuf>,
    },
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = match cli.config {
        Some(ref path) => PathManager::for_config_file(path),
        None => PathManager::default(),
    };
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file());
    let config = Config::load_or_default(&config_path)
        .map_err(|e| eyre!("Failed to load {}: {}", config_path.display(), e))?;
    config.validate().map_err(|e| eyre!("{}", e))?;

    let log_file = config.logging.log_file(&paths);
    logging::init_logging(cli.verbose, cli.quiet, log_file.as_deref())
        .map_err(|e| eyre!("{}", e))?;

    let format = match cli.output {
        Some(format) => format,
        None => OutputFormat::from_str(&config.output.format).map_err(|e| eyre!(e))?,
    };
    let output = Output::new(format, cli.quiet);

    match cli.command {
        Commands::SyncId { trakt, tmdb } => build::run_sync_id(trakt, tmdb, &output),
        Commands::TmdbId { tmdb } => build::run_tmdb_id(tmdb, &output),
        Commands::SyncBody {
            movies,
            shows,
            seasons,
            episodes,
            people,
            ids,
        } => build::run_sync_body(
            SyncBodyLists {
                movies,
                shows,
                seasons,
                episodes,
                people,
                ids,
            },
            &output,
        ),
        Commands::HistoryItem { tmdb, watched_at } => build::run_history_item(tmdb, watched_at, &output),
        Commands::ShowHistory {
            trakt,
            tmdb,
            seasons,
            watched_at,
        } => {
            let ids = SyncId::new(trakt.unwrap_or_default(), tmdb);
            build::run_show_history(ids, seasons, watched_at, &output)
        }
        Commands::Rating {
            trakt,
            rating,
            rated_at,
        } => build::run_rating(trakt, rating, rated_at, &output),
        Commands::Collect {
            trakt,
            collected_at,
            released,
            media_type,
            resolution,
            hdr,
            audio,
            audio_channels,
            is_3d,
        } => build::run_collect(
            trakt,
            CollectOptions {
                collected_at,
                released,
                media_type,
                resolution,
                hdr,
                audio,
                audio_channels,
                is_3d,
            },
            &config.collection,
            &output,
        ),
        Commands::Comment {
            on,
            trakt,
            tmdb,
            text,
            spoiler,
        } => build::run_comment(on, SyncId::new(trakt, tmdb), text, spoiler, &output),
        Commands::Decode { kind, file } => decode::run_decode(kind, file.as_deref(), &output),
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => commands::config::run_show(&config, &config_path, &output),
            ConfigCommands::Init { force } => {
                commands::config::run_init(&config_path, &paths, force, &output)
            },
            ConfigCommands::Path => {
                commands::config::run_path(&config_path);
                Ok(())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["traktsync", "rating", "--trakt", "5", "--rating", "0"]).is_err());
        assert!(Cli::try_parse_from(["traktsync", "rating", "--trakt", "5", "--rating", "11"]).is_err());
        assert!(Cli::try_parse_from(["traktsync", "rating", "--trakt", "5", "--rating", "8"]).is_ok());
    }

    #[test]
    fn test_sync_body_empty_flag_is_present() {
        let cli = Cli::try_parse_from(["traktsync", "sync-body", "--movies", "1,2", "--shows"]).unwrap();
        match cli.command {
            Commands::SyncBody { movies, shows, seasons, .. } => {
                assert_eq!(movies, Some(vec![1, 2]));
                assert_eq!(shows, Some(Vec::new()));
                assert_eq!(seasons, None);
            }
            _ => panic!("expected sync-body"),
        }
    }

    #[test]
    fn test_collect_parses_wire_values() {
        let cli = Cli::try_parse_from([
            "traktsync",
            "collect",
            "--trakt",
            "28",
            "--released",
            "--resolution",
            "uhd_4k",
            "--audio-channels",
            "5.1",
            "--3d",
            "true",
        ])
        .unwrap();
        match cli.command {
            Commands::Collect {
                released,
                resolution,
                audio_channels,
                is_3d,
                ..
            } => {
                assert!(released);
                assert_eq!(resolution, Some(Resolution::Uhd4k));
                assert_eq!(audio_channels, Some(AudioChannels::Surround51));
                assert_eq!(is_3d, Some(true));
            }
            _ => panic!("expected collect"),
        }
    }

    #[test]
    fn test_collect_released_conflicts_with_timestamp() {
        let result = Cli::try_parse_from([
            "traktsync",
            "collect",
            "--trakt",
            "28",
            "--released",
            "--collected-at",
            "2020-01-01T00:00:00Z",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_history_requires_an_id() {
        assert!(Cli::try_parse_from(["traktsync", "show-history", "--season", "1=1"]).is_err());
        assert!(Cli::try_parse_from(["traktsync", "show-history", "--tmdb", "1399", "--season", "1=1-3"]).is_ok());
    }
}
