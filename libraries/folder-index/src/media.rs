//! A single media file and its derived attributes

use crate::{parser, IndexError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A media file identified by its path
///
/// Title and artist are derived from the filename on every call; nothing
/// is cached beyond the path itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    path: PathBuf,
}

impl Media {
    /// Wrap an existing file path. Does not touch the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Result<&str> {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| IndexError::InvalidPath(self.path.display().to_string()))
    }

    /// Filename stem with the artist tag removed
    ///
    /// Dots inside the tag (`[Mr. X]`) never start the extension.
    pub fn title(&self) -> Result<String> {
        let (stem, _) = parser::split_extension(self.file_name()?)?;
        parser::remove_artist(stem)
    }

    /// Artist from the bracketed tag, if any
    pub fn artist_name(&self) -> Result<Option<String>> {
        parser::get_artist(self.file_name()?)
    }

    pub fn extension(&self) -> Result<Option<&str>> {
        Ok(parser::split_extension(self.file_name()?)?.1)
    }

    /// The filename [`rename_update`](Self::rename_update) would write
    pub fn canonical_file_name(&self) -> Result<String> {
        let title = self.title()?;
        let artist = self.artist_name()?;
        Ok(parser::canonical_file_name(
            &title,
            artist.as_deref(),
            self.extension()?,
        ))
    }

    /// Rename the file on disk to its canonical name and follow it
    ///
    /// Returns `true` if the file was renamed, `false` if the name was
    /// already canonical.
    pub fn rename_update(&mut self) -> Result<bool> {
        let canonical = self.canonical_file_name()?;
        if self.file_name()? == canonical {
            return Ok(false);
        }

        let new_path = self.path.with_file_name(&canonical);
        if new_path.exists() {
            return Err(IndexError::DestinationExists(new_path));
        }

        fs::rename(&self.path, &new_path)?;
        tracing::debug!(
            "Renamed {} -> {}",
            self.path.display(),
            new_path.display()
        );
        self.path = new_path;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_media_title_and_artist() {
        let media = Media::new("song [Artist A].mp3");
        assert_eq!(media.title().unwrap(), "song");
        assert_eq!(media.artist_name().unwrap(), Some("Artist A".to_string()));
        assert_eq!(media.extension().unwrap(), Some("mp3"));
    }

    #[test]
    fn test_media_without_tag() {
        let media = Media::new("/music/Jazz/jazz_track1.flac");
        assert_eq!(media.title().unwrap(), "jazz_track1");
        assert_eq!(media.artist_name().unwrap(), None);
    }

    #[test]
    fn test_media_ambiguous_tag() {
        let media = Media::new("song [A] [B].mp3");
        assert!(media.artist_name().is_err());
        assert!(media.title().is_err());
    }

    #[test]
    fn test_rename_update_already_canonical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("track1 [Artist A].mp3");
        fs::write(&path, b"").unwrap();

        let mut media = Media::new(&path);
        assert!(!media.rename_update().unwrap());
        assert_eq!(media.path(), path);
        assert!(path.exists());
    }

    #[test]
    fn test_dotted_artist_without_extension() {
        let media = Media::new("track [Mr. X]");
        assert_eq!(media.title().unwrap(), "track");
        assert_eq!(media.artist_name().unwrap(), Some("Mr. X".to_string()));
        assert_eq!(media.extension().unwrap(), None);
        assert_eq!(media.canonical_file_name().unwrap(), "track [Mr. X]");
    }

    #[test]
    fn test_tag_after_extension_is_kept() {
        let temp = TempDir::new().unwrap();
        for name in ["track [Mr. X]", "song.mp3 [Artist]", "a.b [Mr. X].flac"] {
            let path = temp.path().join(name);
            fs::write(&path, b"data").unwrap();

            let mut media = Media::new(&path);
            let artist = media.artist_name().unwrap();
            assert!(!media.rename_update().unwrap(), "{} was renamed", name);
            assert_eq!(media.path(), path);
            assert_eq!(media.artist_name().unwrap(), artist);
            assert_eq!(fs::read(&path).unwrap(), b"data");
        }
    }

    #[test]
    fn test_rename_update_normalizes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("[Artist A]   track1.mp3");
        fs::write(&path, b"data").unwrap();

        let mut media = Media::new(&path);
        assert!(media.rename_update().unwrap());

        let expected = temp.path().join("track1 [Artist A].mp3");
        assert_eq!(media.path(), expected);
        assert!(expected.exists());
        assert!(!path.exists());
        assert_eq!(fs::read(&expected).unwrap(), b"data");
    }

    #[test]
    fn test_rename_update_refuses_to_clobber() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("[Artist A] track1.mp3");
        let taken = temp.path().join("track1 [Artist A].mp3");
        fs::write(&path, b"new").unwrap();
        fs::write(&taken, b"old").unwrap();

        let mut media = Media::new(&path);
        assert!(matches!(
            media.rename_update(),
            Err(IndexError::DestinationExists(_))
        ));
        assert_eq!(fs::read(&taken).unwrap(), b"old");
        assert_eq!(media.path(), path);
    }
}
