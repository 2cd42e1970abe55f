use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

use crate::converter::{SOURCE_EXTENSION, TARGET_EXTENSION};

/// The UI capabilities a conversion needs. Keeps the converter free of any
/// toolkit so it can be driven without a window.
pub trait Interaction {
    /// Ask for a source archive. `None` when the user cancels.
    fn pick_source(&mut self) -> Option<PathBuf>;

    /// Ask where to save the copy, pre-filled with `default_name`.
    fn choose_destination(&mut self, source: &Path, default_name: &str) -> Option<PathBuf>;

    fn notify_info(&mut self, title: &str, message: &str);

    fn notify_error(&mut self, title: &str, message: &str);
}

/// Native modal dialogs backed by `rfd`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl Interaction for NativeDialogs {
    fn pick_source(&mut self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Select ZIP")
            .add_filter("ZIP file", &[SOURCE_EXTENSION])
            .pick_file()
    }

    fn choose_destination(&mut self, source: &Path, default_name: &str) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Save")
            .add_filter("UDF file", &[TARGET_EXTENSION])
            .set_file_name(default_name);
        if let Some(dir) = source.parent().filter(|d| d.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }

    fn notify_info(&mut self, title: &str, message: &str) {
        show_message(MessageLevel::Info, title, message);
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        show_message(MessageLevel::Error, title, message);
    }
}

fn show_message(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
