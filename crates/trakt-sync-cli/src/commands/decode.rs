use crate::output::Output;
use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::io::Read;
use std::path::Path;
use tracing::debug;
use trakt_sync_models::{decode_str, encode, AddToHistoryEpisode, SyncId, TmdbSyncId};

/// Identifier shapes the API echoes back that can be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DecodeKind {
    SyncId,
    TmdbId,
    Episode,
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .wrap_err("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn describe_sync_id(id: &SyncId) -> String {
    let trakt = id.trakt_id().map_or_else(|| "not set".to_string(), |v| v.to_string());
    let tmdb = id.tmdb.map_or_else(|| "not set".to_string(), |v| v.to_string());
    format!("trakt: {}, tmdb: {}", trakt, tmdb)
}

/// Decode `text` as `kind`; returns a one-line summary and the re-encoded body
pub fn decode_text(kind: DecodeKind, text: &str) -> Result<(String, serde_json::Value)> {
    let (summary, value) = match kind {
        DecodeKind::SyncId => {
            let id: SyncId = decode_str(text)?;
            (describe_sync_id(&id), encode(&id)?)
        }
        DecodeKind::TmdbId => {
            let id: TmdbSyncId = decode_str(text)?;
            (format!("tmdb: {}", id.tmdb), encode(&id)?)
        }
        DecodeKind::Episode => {
            let episode: AddToHistoryEpisode = decode_str(text)?;
            let watched = episode
                .watched_at
                .map_or_else(|| "not set".to_string(), |at| at.to_rfc3339());
            (
                format!("episode {}, watched at: {}", episode.number, watched),
                encode(&episode)?,
            )
        }
    };
    Ok((summary, value))
}

pub fn run_decode(kind: DecodeKind, file: Option<&Path>, output: &Output) -> Result<()> {
    let text = read_input(file)?;
    debug!(?kind, bytes = text.len(), "Decoding body");

    let (summary, value) = decode_text(kind, &text)?;
    output.info(summary);
    output.body(&value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_decode_sync_id_normalizes() {
        let (summary, value) = decode_text(
            DecodeKind::SyncId,
            r#"{"ids": {"trakt": 0, "tmdb": 603, "slug": "the-matrix-1999"}}"#,
        )
        .unwrap();
        assert_eq!(summary, "trakt: not set, tmdb: 603");
        assert_eq!(value, json!({ "ids": { "tmdb": 603 } }));
    }

    #[test]
    fn test_decode_episode() {
        let (summary, value) =
            decode_text(DecodeKind::Episode, r#"{"number": 3, "watched_at": "2024-01-02T03:04:05Z"}"#).unwrap();
        assert!(summary.starts_with("episode 3"));
        assert_eq!(value["watched_at"], json!("2024-01-02T03:04:05Z"));
    }

    #[test]
    fn test_decode_reports_bad_input() {
        assert!(decode_text(DecodeKind::TmdbId, r#"{"trakt": 1}"#).is_err());
        assert!(decode_text(DecodeKind::SyncId, "not json").is_err());
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"tmdb": 550}}"#).unwrap();
        let text = read_input(Some(file.path())).unwrap();
        let (summary, _) = decode_text(DecodeKind::TmdbId, &text).unwrap();
        assert_eq!(summary, "tmdb: 550");
    }
}
