pub mod body;
pub mod classification;
pub mod collection;
pub mod error;
pub mod history;
pub mod ids;
pub mod rating;
pub mod wire;

pub use body::{CommentBody, MediaBody, SingleObjectBody};
pub use classification::{Audio, AudioChannels, Hdr, MediaType, Resolution};
pub use collection::{CollectedAt, CollectionId};
pub use error::{DecodeError, ParseClassificationError};
pub use history::{AddToHistoryEpisode, AddToHistoryId, AddToHistorySeason, AddToHistoryShow};
pub use ids::{SyncId, TmdbSyncId};
pub use rating::RatingId;
pub use wire::{decode, decode_str, encode, encode_to_string};
