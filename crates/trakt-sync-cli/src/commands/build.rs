use crate::output::Output;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::Serialize;
use tracing::debug;
use trakt_sync_config::CollectionDefaults;
use trakt_sync_models::{
    encode, AddToHistoryEpisode, AddToHistoryId, AddToHistorySeason, AddToHistoryShow, Audio,
    AudioChannels, CollectedAt, CollectionId, CommentBody, Hdr, MediaBody, MediaType, RatingId,
    Resolution, SingleObjectBody, SyncId, TmdbSyncId,
};

const MIN_RATING: u8 = 1;
const MAX_RATING: u8 = 10;

/// Trakt rejects comments shorter than this many words
const MIN_COMMENT_WORDS: usize = 5;

/// Value parser for `--rating`: an integer from 1 to 10
pub fn parse_rating(s: &str) -> Result<u8, String> {
    let rating: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    check_rating(rating)
}

fn check_rating(rating: u8) -> Result<u8, String> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(format!(
            "rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, rating
        ));
    }
    Ok(rating)
}

/// One `--season` argument: a season number and the episodes watched in it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonEpisodes {
    pub number: u32,
    pub episodes: Vec<u32>,
}

/// Value parser for `--season N=EPISODES`, e.g. `1=1,2,3` or `2=1-4,7`.
/// Episodes keep the order they are written in.
pub fn parse_season_episodes(s: &str) -> Result<SeasonEpisodes, String> {
    let (number, episodes) = s
        .split_once('=')
        .ok_or_else(|| format!("expected SEASON=EPISODES, got '{}'", s))?;

    let number: u32 = number
        .trim()
        .parse()
        .map_err(|_| format!("invalid season number '{}'", number))?;

    let mut parsed = Vec::new();
    for part in episodes.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((start, end)) => {
                let start = parse_episode(start)?;
                let end = parse_episode(end)?;
                if end < start {
                    return Err(format!("episode range '{}' runs backwards", part));
                }
                parsed.extend(start..=end);
            }
            None => parsed.push(parse_episode(part)?),
        }
    }

    if parsed.is_empty() {
        return Err(format!("season {} lists no episodes", number));
    }

    Ok(SeasonEpisodes {
        number,
        episodes: parsed,
    })
}

fn parse_episode(s: &str) -> Result<u32, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid episode number '{}'", s))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommentTarget {
    Movie,
    Show,
    Season,
    Episode,
    List,
}

impl CommentTarget {
    fn reference(self, id: SyncId) -> SingleObjectBody<SyncId> {
        match self {
            CommentTarget::Movie => SingleObjectBody::movie(id),
            CommentTarget::Show => SingleObjectBody::show(id),
            CommentTarget::Season => SingleObjectBody::season(id),
            CommentTarget::Episode => SingleObjectBody::episode(id),
            CommentTarget::List => SingleObjectBody::list(id),
        }
    }
}

/// Lists for `sync-body`, each `None` when its flag was not given
#[derive(Debug, Default)]
pub struct SyncBodyLists {
    pub movies: Option<Vec<u64>>,
    pub shows: Option<Vec<u64>>,
    pub seasons: Option<Vec<u64>>,
    pub episodes: Option<Vec<u64>>,
    pub people: Option<Vec<u64>>,
    pub ids: Option<Vec<u64>>,
}

/// Classification flags for `collect`
#[derive(Debug, Default)]
pub struct CollectOptions {
    pub collected_at: Option<DateTime<Utc>>,
    pub released: bool,
    pub media_type: Option<MediaType>,
    pub resolution: Option<Resolution>,
    pub hdr: Option<Hdr>,
    pub audio: Option<Audio>,
    pub audio_channels: Option<AudioChannels>,
    pub is_3d: Option<bool>,
}

fn emit<T: Serialize>(kind: &str, body: &T, output: &Output) -> Result<()> {
    let value = encode(body).wrap_err_with(|| format!("Failed to encode {} body", kind))?;
    debug!(kind, "Encoded request body");
    output.body(&value);
    Ok(())
}

/// Warning for an id that will encode as an empty `ids` object
fn empty_ids_warning(id: &SyncId) -> Option<&'static str> {
    (id.trakt_id().is_none() && id.tmdb.is_none())
        .then_some("Neither --trakt nor --tmdb given; the ids object will be empty")
}

pub fn run_sync_id(trakt: u64, tmdb: Option<u64>, output: &Output) -> Result<()> {
    let id = SyncId::new(trakt, tmdb);
    if let Some(warning) = empty_ids_warning(&id) {
        output.warn(warning);
    }
    emit("sync id", &id, output)
}

pub fn run_tmdb_id(tmdb: u64, output: &Output) -> Result<()> {
    emit("tmdb id", &TmdbSyncId::new(tmdb), output)
}

fn to_sync_ids(ids: Option<Vec<u64>>) -> Option<Vec<SyncId>> {
    ids.map(|ids| ids.into_iter().map(SyncId::from_trakt).collect())
}

pub fn build_sync_body(lists: SyncBodyLists) -> MediaBody<SyncId> {
    MediaBody {
        movies: to_sync_ids(lists.movies),
        shows: to_sync_ids(lists.shows),
        seasons: to_sync_ids(lists.seasons),
        episodes: to_sync_ids(lists.episodes),
        ids: lists.ids,
        people: to_sync_ids(lists.people),
    }
}

pub fn run_sync_body(lists: SyncBodyLists, output: &Output) -> Result<()> {
    let body = build_sync_body(lists);
    if body.is_empty() {
        output.warn("No lists given; the body will be an empty object");
    }
    emit("sync", &body, output)
}

pub fn run_history_item(tmdb: u64, watched_at: Option<DateTime<Utc>>, output: &Output) -> Result<()> {
    emit("history item", &AddToHistoryId::new(TmdbSyncId::new(tmdb), watched_at), output)
}

pub fn build_show_history(
    ids: SyncId,
    seasons: Vec<SeasonEpisodes>,
    watched_at: Option<DateTime<Utc>>,
) -> AddToHistoryShow {
    let seasons = seasons
        .into_iter()
        .map(|season| {
            let episodes = season
                .episodes
                .into_iter()
                .map(|number| AddToHistoryEpisode { number, watched_at })
                .collect();
            AddToHistorySeason::new(season.number, episodes)
        })
        .collect();
    AddToHistoryShow::new(ids, seasons)
}

pub fn run_show_history(
    ids: SyncId,
    seasons: Vec<SeasonEpisodes>,
    watched_at: Option<DateTime<Utc>>,
    output: &Output,
) -> Result<()> {
    let show = build_show_history(ids, seasons, watched_at);
    let episode_count: usize = show.seasons.iter().map(|s| s.episodes.len()).sum();
    debug!(seasons = show.seasons.len(), episodes = episode_count, "Built show history");
    emit("show history", &show, output)
}

pub fn run_rating(trakt: u64, rating: u8, rated_at: Option<DateTime<Utc>>, output: &Output) -> Result<()> {
    check_rating(rating).map_err(|e| eyre!(e))?;
    emit("rating", &RatingId::new(trakt, rating, rated_at), output)
}

pub fn build_collection(
    trakt: u64,
    options: CollectOptions,
    defaults: &CollectionDefaults,
    now: DateTime<Utc>,
) -> CollectionId {
    let collected_at = if options.released {
        CollectedAt::Released
    } else {
        CollectedAt::At(options.collected_at.unwrap_or(now))
    };

    let item = CollectionId {
        media_type: options.media_type,
        resolution: options.resolution,
        hdr: options.hdr,
        audio: options.audio,
        audio_channels: options.audio_channels,
        is_3d: options.is_3d,
        ..CollectionId::new(trakt, collected_at)
    };
    defaults.apply(item)
}

pub fn run_collect(
    trakt: u64,
    options: CollectOptions,
    defaults: &CollectionDefaults,
    output: &Output,
) -> Result<()> {
    let item = build_collection(trakt, options, defaults, Utc::now());
    emit("collection", &item, output)
}

pub fn run_comment(
    target: CommentTarget,
    ids: SyncId,
    text: String,
    spoiler: bool,
    output: &Output,
) -> Result<()> {
    if let Some(warning) = empty_ids_warning(&ids) {
        output.warn(warning);
    }

    let words = text.split_whitespace().count();
    if words < MIN_COMMENT_WORDS {
        output.warn(format!(
            "Comment has {} words; Trakt rejects comments under {} words",
            words, MIN_COMMENT_WORDS
        ));
    }

    let mut body = CommentBody::new(target.reference(ids), text);
    if spoiler {
        body = body.with_spoiler(true);
    }
    emit("comment", &body, output)
}
