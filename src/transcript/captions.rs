//! Caption track selection and parsing.
//!
//! yt-dlp lists a video's caption tracks in two maps keyed by language code:
//! `subtitles` (uploaded by the creator) and `automatic_captions` (speech
//! recognition, plus machine translations of it). Tracks are fetched in the
//! `json3` timed-text format and flattened to plain text.

use crate::error::{Result, StudyError};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Caption track listing from `yt-dlp --dump-json`.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionListing {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitles: Option<BTreeMap<String, Vec<CaptionFormat>>>,
    #[serde(default)]
    pub automatic_captions: Option<BTreeMap<String, Vec<CaptionFormat>>>,
}

/// One downloadable format of a caption track.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionFormat {
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub url: String,
}

/// The track chosen for a video.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionTrack {
    pub language: String,
    pub generated: bool,
    pub url: String,
}

const CAPTION_EXT: &str = "json3";

/// Pick a caption track by language preference.
///
/// For each language in order, a manually created track wins over an
/// auto-generated one. Machine-translated automatic tracks are skipped.
pub fn select_track(listing: &CaptionListing, languages: &[String]) -> Option<CaptionTrack> {
    for lang in languages {
        if let Some(track) = listing
            .subtitles
            .as_ref()
            .and_then(|tracks| find_in(tracks, lang, false))
        {
            return Some(track);
        }
        if let Some(track) = listing
            .automatic_captions
            .as_ref()
            .and_then(|tracks| find_in(tracks, lang, true))
        {
            return Some(track);
        }
    }
    None
}

fn find_in(
    tracks: &BTreeMap<String, Vec<CaptionFormat>>,
    lang: &str,
    generated: bool,
) -> Option<CaptionTrack> {
    // Exact code first, then regional variants such as "en-US" or "en-orig".
    let prefix = format!("{}-", lang);
    let candidates = tracks
        .get_key_value(lang)
        .into_iter()
        .chain(tracks.iter().filter(|(code, _)| code.starts_with(&prefix)));

    for (code, formats) in candidates {
        let format = formats
            .iter()
            .find(|f| f.ext == CAPTION_EXT && !f.url.is_empty() && !(generated && is_translated(&f.url)));
        if let Some(format) = format {
            return Some(CaptionTrack {
                language: code.clone(),
                generated,
                url: format.url.clone(),
            });
        }
    }
    None
}

fn is_translated(url: &str) -> bool {
    url.contains("&tlang=") || url.contains("?tlang=")
}

#[derive(Debug, Deserialize)]
struct Json3 {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(default)]
    segs: Vec<Json3Seg>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Flatten a `json3` caption payload to plain text.
///
/// Each event becomes one line of text with whitespace collapsed; empty
/// events are dropped and the rest joined with single spaces.
pub fn parse_json3(payload: &str) -> Result<String> {
    let doc: Json3 = serde_json::from_str(payload).map_err(|e| {
        StudyError::TranscriptUnavailable(format!("Failed to parse caption track: {}", e))
    })?;

    let lines: Vec<String> = doc
        .events
        .iter()
        .map(|event| {
            let raw: String = event.segs.iter().map(|s| s.utf8.as_str()).collect();
            raw.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect();

    Ok(lines.join(" "))
}
