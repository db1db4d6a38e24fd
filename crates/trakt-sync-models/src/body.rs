use serde::Serialize;

use crate::ids::SyncId;

/// Body for bulk endpoints like `/sync/history` or `/sync/watchlist`.
///
/// Every list is optional. An absent list is left out of the body, while a
/// present but empty list is sent as `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaBody<ID> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<ID>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shows: Option<Vec<ID>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<ID>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<ID>>,
    /// Raw ids, e.g. history entry ids for `/sync/history/remove`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub people: Option<Vec<ID>>,
}

impl<ID> MediaBody<ID> {
    pub fn new() -> Self {
        Self {
            movies: None,
            shows: None,
            seasons: None,
            episodes: None,
            ids: None,
            people: None,
        }
    }

    pub fn with_movies(mut self, movies: Vec<ID>) -> Self {
        self.movies = Some(movies);
        self
    }

    pub fn with_shows(mut self, shows: Vec<ID>) -> Self {
        self.shows = Some(shows);
        self
    }

    pub fn with_seasons(mut self, seasons: Vec<ID>) -> Self {
        self.seasons = Some(seasons);
        self
    }

    pub fn with_episodes(mut self, episodes: Vec<ID>) -> Self {
        self.episodes = Some(episodes);
        self
    }

    pub fn with_ids(mut self, ids: Vec<u64>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn with_people(mut self, people: Vec<ID>) -> Self {
        self.people = Some(people);
        self
    }

    /// True when no list is present at all (empty lists still count as present)
    pub fn is_empty(&self) -> bool {
        self.movies.is_none()
            && self.shows.is_none()
            && self.seasons.is_none()
            && self.episodes.is_none()
            && self.ids.is_none()
            && self.people.is_none()
    }
}

impl<ID> Default for MediaBody<ID> {
    fn default() -> Self {
        Self::new()
    }
}

/// Body referencing a single object.
///
/// Callers set exactly the one field the endpoint expects; the per-kind
/// constructors do that for the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleObjectBody<ID> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie: Option<ID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<ID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<ID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<ID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ID>,
}

impl<ID> SingleObjectBody<ID> {
    fn empty() -> Self {
        Self {
            movie: None,
            show: None,
            season: None,
            episode: None,
            list: None,
        }
    }

    pub fn movie(id: ID) -> Self {
        Self {
            movie: Some(id),
            ..Self::empty()
        }
    }

    pub fn show(id: ID) -> Self {
        Self {
            show: Some(id),
            ..Self::empty()
        }
    }

    pub fn season(id: ID) -> Self {
        Self {
            season: Some(id),
            ..Self::empty()
        }
    }

    pub fn episode(id: ID) -> Self {
        Self {
            episode: Some(id),
            ..Self::empty()
        }
    }

    pub fn list(id: ID) -> Self {
        Self {
            list: Some(id),
            ..Self::empty()
        }
    }
}

impl<ID> Default for SingleObjectBody<ID> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Body for posting a comment on a single object.
///
/// The referenced object is written at the top level next to `comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentBody {
    #[serde(flatten)]
    pub target: SingleObjectBody<SyncId>,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spoiler: Option<bool>,
}

impl CommentBody {
    pub fn new(target: SingleObjectBody<SyncId>, comment: impl Into<String>) -> Self {
        Self {
            target,
            comment: comment.into(),
            spoiler: None,
        }
    }

    pub fn with_spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = Some(spoiler);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TmdbSyncId;
    use crate::wire::encode;
    use serde_json::json;

    #[test]
    fn test_media_body_omits_absent_lists() {
        let body = MediaBody::new().with_movies(vec![SyncId::from_trakt(1), SyncId::from_tmdb(603)]);
        let value = encode(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "movies": [
                    { "ids": { "trakt": 1 } },
                    { "ids": { "tmdb": 603 } }
                ]
            })
        );
    }

    #[test]
    fn test_media_body_keeps_empty_lists() {
        let body: MediaBody<SyncId> = MediaBody::new().with_shows(Vec::new()).with_ids(Vec::new());
        let value = encode(&body).unwrap();
        assert_eq!(value, json!({ "shows": [], "ids": [] }));
        assert!(!body.is_empty());
    }

    #[test]
    fn test_media_body_all_fields() {
        let body = MediaBody::new()
            .with_movies(vec![TmdbSyncId::new(1)])
            .with_shows(vec![TmdbSyncId::new(2)])
            .with_seasons(vec![TmdbSyncId::new(3)])
            .with_episodes(vec![TmdbSyncId::new(4)])
            .with_ids(vec![5, 6])
            .with_people(vec![TmdbSyncId::new(7)]);
        let value = encode(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "movies": [{ "tmdb": 1 }],
                "shows": [{ "tmdb": 2 }],
                "seasons": [{ "tmdb": 3 }],
                "episodes": [{ "tmdb": 4 }],
                "ids": [5, 6],
                "people": [{ "tmdb": 7 }]
            })
        );
    }

    #[test]
    fn test_media_body_empty() {
        let body: MediaBody<SyncId> = MediaBody::default();
        assert!(body.is_empty());
        assert_eq!(encode(&body).unwrap(), json!({}));
    }

    #[test]
    fn test_media_body_preserves_order() {
        let body: MediaBody<SyncId> = MediaBody::new().with_ids(vec![9, 3, 9, 1]);
        assert_eq!(encode(&body).unwrap(), json!({ "ids": [9, 3, 9, 1] }));
    }

    #[test]
    fn test_single_object_body_sets_one_field() {
        let body = SingleObjectBody::episode(SyncId::from_trakt(73640));
        assert_eq!(
            encode(&body).unwrap(),
            json!({ "episode": { "ids": { "trakt": 73640 } } })
        );
    }

    #[test]
    fn test_single_object_body_does_not_enforce_exclusivity() {
        let body = SingleObjectBody {
            movie: Some(SyncId::from_trakt(1)),
            list: Some(SyncId::from_trakt(2)),
            ..SingleObjectBody::default()
        };
        assert_eq!(
            encode(&body).unwrap(),
            json!({
                "movie": { "ids": { "trakt": 1 } },
                "list": { "ids": { "trakt": 2 } }
            })
        );
    }

    #[test]
    fn test_comment_body_flattens_target() {
        let body = CommentBody::new(SingleObjectBody::movie(SyncId::new(28, Some(603))), "Great movie!");
        assert_eq!(
            encode(&body).unwrap(),
            json!({
                "movie": { "ids": { "trakt": 28, "tmdb": 603 } },
                "comment": "Great movie!"
            })
        );
    }

    #[test]
    fn test_comment_body_with_spoiler() {
        let body = CommentBody::new(SingleObjectBody::show(SyncId::from_trakt(1390)), "Winter came.")
            .with_spoiler(false);
        assert_eq!(
            encode(&body).unwrap(),
            json!({
                "show": { "ids": { "trakt": 1390 } },
                "comment": "Winter came.",
                "spoiler": false
            })
        );
    }
}
