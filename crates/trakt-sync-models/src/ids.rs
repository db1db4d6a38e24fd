use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// TMDB id used to sync with Trakt.
///
/// Encodes as a flat `{"tmdb": <id>}` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TmdbSyncId {
    pub tmdb: u64,
}

impl TmdbSyncId {
    pub fn new(tmdb: u64) -> Self {
        Self { tmdb }
    }
}

/// Trakt id of a movie / show / season / episode, optionally paired with its TMDB id.
///
/// Both ids travel inside a nested `ids` object. A `trakt` of `0` means "not
/// set" and is left out of that object entirely; decoding a missing `trakt`
/// yields `0` again. `tmdb` has no such sentinel, it is either present or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SyncId {
    pub trakt: u64,
    pub tmdb: Option<u64>,
}

impl SyncId {
    pub fn new(trakt: u64, tmdb: Option<u64>) -> Self {
        Self { trakt, tmdb }
    }

    pub fn from_trakt(trakt: u64) -> Self {
        Self { trakt, tmdb: None }
    }

    /// Reference an item by TMDB id only
    pub fn from_tmdb(tmdb: u64) -> Self {
        Self {
            trakt: UNSET_TRAKT_ID,
            tmdb: Some(tmdb),
        }
    }

    /// The Trakt id, or `None` when it holds the "not set" value `0`
    pub fn trakt_id(&self) -> Option<u64> {
        (self.trakt != UNSET_TRAKT_ID).then_some(self.trakt)
    }

    pub(crate) fn ids_object(&self) -> IdsObject {
        IdsObject {
            trakt: self.trakt,
            tmdb: self.tmdb,
        }
    }
}

impl Serialize for SyncId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SyncId", 1)?;
        state.serialize_field("ids", &self.ids_object())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for SyncId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct SyncIdHelper {
            ids: IdsObject,
        }

        let helper = SyncIdHelper::deserialize(deserializer)?;
        Ok(SyncId {
            trakt: helper.ids.trakt,
            tmdb: helper.ids.tmdb,
        })
    }
}

const UNSET_TRAKT_ID: u64 = 0;

fn is_unset(trakt: &u64) -> bool {
    *trakt == UNSET_TRAKT_ID
}

/// Reads an explicit `null` the same as a missing key.
fn trakt_or_unset<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(UNSET_TRAKT_ID))
}

/// The object written under `ids` for a [`SyncId`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct IdsObject {
    #[serde(
        default,
        deserialize_with = "trakt_or_unset",
        skip_serializing_if = "is_unset"
    )]
    pub(crate) trakt: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) tmdb: Option<u64>,
}

/// The object written under `ids` by rating and collection entries.
///
/// Unlike [`IdsObject`] the Trakt id is always written, `0` included.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct TraktIdsObject {
    pub(crate) trakt: u64,
}
