//! Text encodings for enum columns.
//!
//! The stored forms are part of the on-disk layout; decoding failures are
//! surfaced as `StorageError::Serialization` rather than panicking on
//! hand-edited databases.

use atelier_core::model::{Category, Track, TrackSelector, Year};

use crate::repository::StorageError;

pub(crate) fn encode_track(track: Track) -> String {
    match track {
        Track::ExamPrep => "exam-prep".to_string(),
        Track::Year(year) => format!("year-{year}"),
    }
}

pub(crate) fn decode_track(raw: &str) -> Result<Track, StorageError> {
    if raw == "exam-prep" {
        return Ok(Track::ExamPrep);
    }
    decode_year(raw)
        .map(Track::Year)
        .ok_or_else(|| StorageError::Serialization(format!("invalid study track: {raw}")))
}

pub(crate) fn encode_selector(selector: TrackSelector) -> String {
    match selector {
        TrackSelector::All => "all".to_string(),
        TrackSelector::ExamPrep => "exam-prep".to_string(),
        TrackSelector::Year(year) => format!("year-{year}"),
    }
}

pub(crate) fn decode_selector(raw: &str) -> Result<TrackSelector, StorageError> {
    match raw {
        "all" => Ok(TrackSelector::All),
        "exam-prep" => Ok(TrackSelector::ExamPrep),
        other => decode_year(other)
            .map(TrackSelector::Year)
            .ok_or_else(|| StorageError::Serialization(format!("invalid track selector: {other}"))),
    }
}

pub(crate) fn decode_category(raw: &str) -> Result<Category, StorageError> {
    raw.parse::<Category>()
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

fn decode_year(raw: &str) -> Option<Year> {
    let digits = raw.strip_prefix("year-")?;
    let value = digits.parse::<u8>().ok()?;
    Year::new(value).ok()
}
