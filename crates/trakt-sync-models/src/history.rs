use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::ids::{SyncId, TmdbSyncId};

/// A show with the specific seasons and episodes to mark as watched.
///
/// Seasons and episodes are sent in the order given, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToHistoryShow {
    pub ids: SyncId,
    pub seasons: Vec<AddToHistorySeason>,
}

impl AddToHistoryShow {
    pub fn new(ids: SyncId, seasons: Vec<AddToHistorySeason>) -> Self {
        Self { ids, seasons }
    }
}

impl Serialize for AddToHistoryShow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AddToHistoryShow", 2)?;
        state.serialize_field("ids", &self.ids.ids_object())?;
        state.serialize_field("seasons", &self.seasons)?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToHistorySeason {
    pub number: u32,
    pub episodes: Vec<AddToHistoryEpisode>,
}

impl AddToHistorySeason {
    pub fn new(number: u32, episodes: Vec<AddToHistoryEpisode>) -> Self {
        Self { number, episodes }
    }
}

/// An episode within a season. Without `watched_at` Trakt picks the time itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddToHistoryEpisode {
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
}

impl AddToHistoryEpisode {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            watched_at: None,
        }
    }

    pub fn watched_at(number: u32, watched_at: DateTime<Utc>) -> Self {
        Self {
            number,
            watched_at: Some(watched_at),
        }
    }
}

/// A single movie / episode history entry referenced by TMDB id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AddToHistoryId {
    #[serde(rename = "ids")]
    pub id: TmdbSyncId,
    /// UTC datetime when the item was watched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
}

impl AddToHistoryId {
    pub fn new(id: TmdbSyncId, watched_at: Option<DateTime<Utc>>) -> Self {
        Self { id, watched_at }
    }
}
