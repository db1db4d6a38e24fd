use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ids::TraktIdsObject;

/// A rating for `/sync/ratings`.
///
/// `rating` is expected to be between 1 and 10; that range is checked by
/// callers, this type sends whatever it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatingId {
    /// Trakt id of the movie / show / season / episode
    pub trakt: u64,
    pub rating: u8,
    /// UTC datetime when the item was rated
    pub rated_at: Option<DateTime<Utc>>,
}

impl RatingId {
    pub fn new(trakt: u64, rating: u8, rated_at: Option<DateTime<Utc>>) -> Self {
        Self {
            trakt,
            rating,
            rated_at,
        }
    }
}

impl Serialize for RatingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RatingId", 3)?;
        state.serialize_field("ids", &TraktIdsObject { trakt: self.trakt })?;
        state.serialize_field("rating", &self.rating)?;
        match &self.rated_at {
            Some(rated_at) => state.serialize_field("rated_at", rated_at)?,
            None => state.skip_field("rated_at")?,
        }
        state.end()
    }
}
