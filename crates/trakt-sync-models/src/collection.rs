use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::classification::{Audio, AudioChannels, Hdr, MediaType, Resolution};
use crate::ids::TraktIdsObject;

const RELEASED: &str = "released";

/// When an item was collected.
///
/// `Released` is sent as the literal `"released"`, which makes Trakt use the
/// item's initial release date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectedAt {
    At(DateTime<Utc>),
    Released,
}

impl From<DateTime<Utc>> for CollectedAt {
    fn from(at: DateTime<Utc>) -> Self {
        CollectedAt::At(at)
    }
}

impl Serialize for CollectedAt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CollectedAt::At(at) => at.serialize(serializer),
            CollectedAt::Released => serializer.serialize_str(RELEASED),
        }
    }
}

impl<'de> Deserialize<'de> for CollectedAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value == RELEASED {
            return Ok(CollectedAt::Released);
        }
        value
            .parse::<DateTime<Utc>>()
            .map(CollectedAt::At)
            .map_err(de::Error::custom)
    }
}

/// A collected item for `/sync/collection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionId {
    /// Trakt id of the movie / show / season / episode
    pub trakt: u64,
    pub collected_at: CollectedAt,
    pub media_type: Option<MediaType>,
    pub resolution: Option<Resolution>,
    pub hdr: Option<Hdr>,
    pub audio: Option<Audio>,
    pub audio_channels: Option<AudioChannels>,
    /// Set true if in 3D
    pub is_3d: Option<bool>,
}

impl CollectionId {
    pub fn new(trakt: u64, collected_at: impl Into<CollectedAt>) -> Self {
        Self {
            trakt,
            collected_at: collected_at.into(),
            media_type: None,
            resolution: None,
            hdr: None,
            audio: None,
            audio_channels: None,
            is_3d: None,
        }
    }

    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    pub fn with_hdr(mut self, hdr: Hdr) -> Self {
        self.hdr = Some(hdr);
        self
    }

    pub fn with_audio(mut self, audio: Audio) -> Self {
        self.audio = Some(audio);
        self
    }

    pub fn with_audio_channels(mut self, audio_channels: AudioChannels) -> Self {
        self.audio_channels = Some(audio_channels);
        self
    }

    pub fn with_3d(mut self, is_3d: bool) -> Self {
        self.is_3d = Some(is_3d);
        self
    }
}

fn serialize_if_present<S, T>(state: &mut S, key: &'static str, value: &Option<T>) -> Result<(), S::Error>
where
    S: SerializeStruct,
    T: Serialize,
{
    match value {
        Some(value) => state.serialize_field(key, value),
        None => state.skip_field(key),
    }
}

impl Serialize for CollectionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CollectionId", 8)?;
        state.serialize_field("ids", &TraktIdsObject { trakt: self.trakt })?;
        state.serialize_field("collected_at", &self.collected_at)?;
        serialize_if_present(&mut state, "media_type", &self.media_type)?;
        serialize_if_present(&mut state, "resolution", &self.resolution)?;
        serialize_if_present(&mut state, "hdr", &self.hdr)?;
        serialize_if_present(&mut state, "audio", &self.audio)?;
        serialize_if_present(&mut state, "audio_channels", &self.audio_channels)?;
        serialize_if_present(&mut state, "3d", &self.is_3d)?;
        state.end()
    }
}
