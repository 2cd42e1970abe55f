use log::{debug, error, info};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, Result};
use crate::interaction::Interaction;

pub const SOURCE_EXTENSION: &str = "zip";
pub const TARGET_EXTENSION: &str = "udf";

pub const INFO_TITLE: &str = "Completed";
pub const ERROR_TITLE: &str = "Error";

/// Checks that `path` names an existing `.zip` file and hands it back.
///
/// The checks run in a fixed order: empty path, extension, existence. Only
/// the last one touches the filesystem.
pub fn validate_source(path: &Path) -> Result<&Path> {
    if path.as_os_str().is_empty() {
        return Err(ConvertError::EmptyPath);
    }
    if !has_zip_suffix(path) {
        return Err(ConvertError::NotZip);
    }
    if !path.is_file() {
        return Err(ConvertError::NotFound);
    }
    Ok(path)
}

fn has_zip_suffix(path: &Path) -> bool {
    let suffix = format!(".{SOURCE_EXTENSION}");
    path.to_string_lossy().to_lowercase().ends_with(&suffix)
}

/// `<stem>.udf` for the given source. Only the last extension is replaced.
pub fn default_destination_name(source: &Path) -> String {
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    format!("{stem}.{TARGET_EXTENSION}")
}

/// Save dialogs hand back whatever the user typed; a bare name gets `.udf`.
pub fn with_target_extension(mut destination: PathBuf) -> PathBuf {
    if destination.extension().map_or(true, |ext| ext.is_empty()) {
        destination.set_extension(TARGET_EXTENSION);
    }
    destination
}

/// Copies `source` to `destination` byte for byte, creating missing parent
/// directories first. Returns the number of bytes written.
///
/// File metadata is not carried over, so re-running over an existing
/// destination simply rewrites it.
pub fn copy_to_destination(source: &Path, destination: &Path) -> Result<u64> {
    if let Some(dir) = destination.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.is_dir() {
            debug!("creating directory {}", dir.display());
            fs::create_dir_all(dir).map_err(|err| ConvertError::CreateDir {
                path: dir.to_path_buf(),
                source: err,
            })?;
        }
    }

    let wrap = |err: io::Error| ConvertError::Copy {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: err,
    };

    // Opening the destination for writing would truncate the source.
    if is_same_file(source, destination) {
        return Err(wrap(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        )));
    }

    let mut input = File::open(source).map_err(wrap)?;
    let mut output = File::create(destination).map_err(wrap)?;
    let written = io::copy(&mut input, &mut output).map_err(wrap)?;
    output.sync_all().map_err(wrap)?;
    Ok(written)
}

// Hard links count as the same file.
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => (a.dev(), a.ino()) == (b.dev(), b.ino()),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ConversionJob {
    pub fn run(self) -> Result<PathBuf> {
        info!(
            "copying {} -> {}",
            self.source.display(),
            self.destination.display()
        );
        let bytes = copy_to_destination(&self.source, &self.destination)?;
        info!("saved {} ({bytes} bytes)", self.destination.display());
        Ok(self.destination)
    }
}

/// How a single user action ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved(PathBuf),
    /// A prompt was dismissed or nothing was dropped. No dialog is shown.
    Cancelled,
    Failed(String),
}

pub fn first_dropped<I>(paths: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut paths = paths.into_iter();
    let first = paths.next()?;
    let ignored = paths.count();
    if ignored > 0 {
        debug!("ignoring {ignored} additional dropped file(s)");
    }
    Some(first)
}

/// Runs conversions against an [`Interaction`] provider.
///
/// Every entry point is one complete transaction: validate, ask for a
/// destination, copy, notify.
pub struct Converter<I> {
    interaction: I,
}

impl<I: Interaction> Converter<I> {
    pub fn new(interaction: I) -> Self {
        Self { interaction }
    }

    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    /// Validates `path` and asks for a destination.
    ///
    /// `Ok(None)` means the save prompt was cancelled.
    pub fn prepare(&mut self, path: &Path) -> Result<Option<ConversionJob>> {
        let source = validate_source(path)?;
        let default_name = default_destination_name(source);
        let Some(destination) = self.interaction.choose_destination(source, &default_name) else {
            debug!("save prompt cancelled for {}", source.display());
            return Ok(None);
        };
        Ok(Some(ConversionJob {
            source: source.to_path_buf(),
            destination: with_target_extension(destination),
        }))
    }

    /// Like [`Converter::prepare`], but reports failures to the user itself.
    pub fn begin(&mut self, path: &Path) -> Option<ConversionJob> {
        match self.prepare(path) {
            Ok(job) => job,
            Err(err) => {
                self.report(Err(err));
                None
            }
        }
    }

    pub fn report(&mut self, result: Result<PathBuf>) -> Outcome {
        match result {
            Ok(destination) => {
                let message = format!("Saved to:\n{}", destination.display());
                self.interaction.notify_info(INFO_TITLE, &message);
                Outcome::Saved(destination)
            }
            Err(err) => {
                let message = err.to_string();
                error!("{message}");
                self.interaction.notify_error(ERROR_TITLE, &message);
                Outcome::Failed(message)
            }
        }
    }

    /// Converts `path` synchronously, start to finish.
    pub fn handle_path(&mut self, path: &Path) -> Outcome {
        match self.prepare(path) {
            Ok(Some(job)) => {
                let result = job.run();
                self.report(result)
            }
            Ok(None) => Outcome::Cancelled,
            Err(err) => self.report(Err(err)),
        }
    }

    pub fn handle_select(&mut self) -> Outcome {
        match self.interaction.pick_source() {
            Some(path) => self.handle_path(&path),
            None => Outcome::Cancelled,
        }
    }

    /// Drop flow: only the first dropped path is converted.
    pub fn handle_drop<P>(&mut self, paths: P) -> Outcome
    where
        P: IntoIterator<Item = PathBuf>,
    {
        match first_dropped(paths) {
            Some(path) => self.handle_path(&path),
            None => Outcome::Cancelled,
        }
    }
}
