//! Filename parsing for artist tags and folder counters
//!
//! A media filename may carry one artist tag as a bracketed segment:
//!
//! | Filename | Artist | Without artist |
//! |----------|--------|----------------|
//! | `song [Artist A].mp3` | `Artist A` | `song.mp3` |
//! | `[Artist A] song.mp3` | `Artist A` | `song.mp3` |
//! | `track.mp3` | none | `track.mp3` |
//! | `song [A] [B].mp3` | error | error |
//!
//! Folder names carry a trailing entry count, `Artist A (5)`.

use crate::{IndexError, Result};

const TAG_OPEN: char = '[';
const TAG_CLOSE: char = ']';

/// Byte ranges `(open, close)` of every bracketed segment in `file_name`
///
/// An opening bracket without a closing one is not a segment.
fn tag_spans(file_name: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(open) = file_name[pos..].find(TAG_OPEN).map(|i| i + pos) {
        let Some(close) = file_name[open + 1..].find(TAG_CLOSE).map(|i| i + open + 1) else {
            break;
        };
        spans.push((open, close));
        pos = close + 1;
    }

    spans
}

/// Find the single tag in `file_name`, rejecting ambiguous names
fn single_tag(file_name: &str) -> Result<Option<(usize, usize)>> {
    let spans = tag_spans(file_name);
    match spans.as_slice() {
        [] => Ok(None),
        [span] => Ok(Some(*span)),
        _ => Err(IndexError::AmbiguousArtist {
            file_name: file_name.to_string(),
            tags: spans.len(),
        }),
    }
}

/// Extract the artist from a bracketed tag in a filename
///
/// Returns `Ok(None)` when the name has no tag, or when the tag is blank.
/// Fails with [`IndexError::AmbiguousArtist`] if there is more than one tag.
pub fn get_artist(file_name: &str) -> Result<Option<String>> {
    let artist = single_tag(file_name)?
        .map(|(open, close)| file_name[open + 1..close].trim())
        .filter(|artist| !artist.is_empty())
        .map(str::to_string);

    Ok(artist)
}

/// Remove the bracketed tag and the whitespace around it
///
/// The extension is left intact. Names without a tag come back unchanged.
pub fn remove_artist(file_name: &str) -> Result<String> {
    let Some((open, close)) = single_tag(file_name)? else {
        return Ok(file_name.to_string());
    };

    let before = file_name[..open].trim_end();
    let after = file_name[close + 1..].trim_start();

    let stripped = if before.is_empty() {
        after.to_string()
    } else if after.is_empty() || after.starts_with('.') {
        format!("{}{}", before, after)
    } else {
        format!("{} {}", before, after)
    };

    Ok(stripped)
}

/// Split a filename into stem and extension without cutting into the tag
///
/// The last `.` only starts an extension when it comes after the tag's
/// closing bracket, so `track [Mr. X]` and `song.mp3 [Artist]` have no
/// extension. A leading dot (`.hidden`) is part of the stem.
pub fn split_extension(file_name: &str) -> Result<(&str, Option<&str>)> {
    let tag = single_tag(file_name)?;

    let split = file_name.rfind('.').filter(|&dot| {
        dot > 0 && dot + 1 < file_name.len() && !matches!(tag, Some((_, close)) if dot < close)
    });

    Ok(match split {
        Some(dot) => (&file_name[..dot], Some(&file_name[dot + 1..])),
        None => (file_name, None),
    })
}

/// Strip a trailing `" (<digits>)"` counter from a folder name
pub fn remove_counter(folder_name: &str) -> &str {
    folder_name
        .strip_suffix(')')
        .and_then(|rest| {
            let open = rest.rfind(" (")?;
            let digits = &rest[open + 2..];
            let is_counter = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());
            is_counter.then_some(&folder_name[..open])
        })
        .unwrap_or(folder_name)
}

/// Folder name with an entry count: `"{title} ({count})"`
pub fn with_counter(title: &str, count: usize) -> String {
    format!("{} ({})", title, count)
}

/// Canonical media filename: `"{title} [{artist}].{ext}"`
///
/// Runs of whitespace in the title collapse to single spaces.
pub fn canonical_file_name(title: &str, artist: Option<&str>, extension: Option<&str>) -> String {
    let mut name = title.split_whitespace().collect::<Vec<_>>().join(" ");

    if let Some(artist) = artist {
        if !name.is_empty() {
            name.push(' ');
        }
        name.push(TAG_OPEN);
        name.push_str(artist);
        name.push(TAG_CLOSE);
    }

    if let Some(extension) = extension {
        name.push('.');
        name.push_str(extension);
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_artist() {
        assert_eq!(
            get_artist("song [Artist A].mp3").unwrap(),
            Some("Artist A".to_string())
        );
        assert_eq!(get_artist("track.mp3").unwrap(), None);
        assert!(matches!(
            get_artist("song [Artist A] [Artist B].mp3"),
            Err(IndexError::AmbiguousArtist { tags: 2, .. })
        ));
    }

    #[test]
    fn test_get_artist_edge_cases() {
        assert_eq!(
            get_artist("[Artist A] song.mp3").unwrap(),
            Some("Artist A".to_string())
        );
        assert_eq!(
            get_artist("song [ Padded ].mp3").unwrap(),
            Some("Padded".to_string())
        );
        assert_eq!(get_artist("song [].mp3").unwrap(), None);
        assert_eq!(get_artist("song [   ].mp3").unwrap(), None);
        assert_eq!(get_artist("song [unclosed.mp3").unwrap(), None);
        assert_eq!(get_artist("").unwrap(), None);
    }

    #[test]
    fn test_remove_artist() {
        assert_eq!(remove_artist("song [Artist A].mp3").unwrap(), "song.mp3");
        assert_eq!(remove_artist("[Artist A] song.mp3").unwrap(), "song.mp3");
        assert_eq!(remove_artist("a [Artist A] b.mp3").unwrap(), "a b.mp3");
        assert_eq!(remove_artist("song [Artist A]").unwrap(), "song");
        assert_eq!(remove_artist("track.mp3").unwrap(), "track.mp3");
        assert!(remove_artist("x [A] [B].mp3").is_err());
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(
            split_extension("song [Artist A].mp3").unwrap(),
            ("song [Artist A]", Some("mp3"))
        );
        assert_eq!(
            split_extension("track [Mr. X]").unwrap(),
            ("track [Mr. X]", None)
        );
        assert_eq!(
            split_extension("song.mp3 [Artist]").unwrap(),
            ("song.mp3 [Artist]", None)
        );
        assert_eq!(
            split_extension("a.b [Mr. X].flac").unwrap(),
            ("a.b [Mr. X]", Some("flac"))
        );
        assert_eq!(split_extension("track.mp3").unwrap(), ("track", Some("mp3")));
        assert_eq!(split_extension(".hidden").unwrap(), (".hidden", None));
        assert_eq!(split_extension("trailing.").unwrap(), ("trailing.", None));
        assert!(split_extension("x [A] [B].mp3").is_err());
    }

    #[test]
    fn test_remove_counter() {
        assert_eq!(remove_counter("Artist A (5)"), "Artist A");
        assert_eq!(remove_counter("VA (10)"), "VA");
        assert_eq!(remove_counter("Artist A"), "Artist A");
        assert_eq!(remove_counter("Artist A ()"), "Artist A ()");
        assert_eq!(remove_counter("Artist A (live)"), "Artist A (live)");
        assert_eq!(remove_counter("Artist A(5)"), "Artist A(5)");
        assert_eq!(remove_counter("Best Of (1999) (3)"), "Best Of (1999)");
    }

    #[test]
    fn test_with_counter() {
        assert_eq!(with_counter("Artist A", 2), "Artist A (2)");
        assert_eq!(remove_counter(&with_counter("VA", 0)), "VA");
    }

    #[test]
    fn test_canonical_file_name() {
        assert_eq!(
            canonical_file_name("track1", Some("Artist A"), Some("mp3")),
            "track1 [Artist A].mp3"
        );
        assert_eq!(canonical_file_name("track3", None, Some("mp3")), "track3.mp3");
        assert_eq!(
            canonical_file_name("  two   words ", None, Some("flac")),
            "two words.flac"
        );
        assert_eq!(canonical_file_name("notes", None, None), "notes");
    }
}
