use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{tempdir, TempDir};
use zip_to_udf::converter::{ERROR_TITLE, INFO_TITLE};
use zip_to_udf::{Converter, Interaction, Outcome};

/// Answers prompts from a script and records every dialog.
#[derive(Default)]
struct Scripted {
    sources: VecDeque<Option<PathBuf>>,
    destinations: VecDeque<Option<PathBuf>>,
    default_names: Vec<String>,
    dialogs: Vec<(String, String)>,
}

impl Interaction for Scripted {
    fn pick_source(&mut self) -> Option<PathBuf> {
        self.sources.pop_front().flatten()
    }

    fn choose_destination(&mut self, _source: &Path, default_name: &str) -> Option<PathBuf> {
        self.default_names.push(default_name.to_string());
        self.destinations.pop_front().flatten()
    }

    fn notify_info(&mut self, title: &str, message: &str) {
        self.dialogs.push((title.to_string(), message.to_string()));
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        self.dialogs.push((title.to_string(), message.to_string()));
    }
}

fn zip_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn converter_saving_to(destinations: &[Option<PathBuf>]) -> Converter<Scripted> {
    Converter::new(Scripted {
        destinations: destinations.iter().cloned().collect(),
        ..Default::default()
    })
}

#[test]
fn successful_conversion_copies_bytes_and_notifies() {
    let dir = tempdir().unwrap();
    let source = zip_fixture(&dir, "My.Report.zip", b"PK\x05\x06 not really a zip");
    let destination = dir.path().join("newfolder").join("out.udf");

    let mut converter = converter_saving_to(&[Some(destination.clone())]);
    let outcome = converter.handle_path(&source);

    assert_eq!(outcome, Outcome::Saved(destination.clone()));
    assert_eq!(fs::read(&destination).unwrap(), fs::read(&source).unwrap());

    let script = converter.interaction();
    assert_eq!(script.default_names, vec!["My.Report.udf"]);
    assert_eq!(
        script.dialogs,
        vec![(INFO_TITLE.to_string(), format!("Saved to:\n{}", destination.display()))]
    );
}

#[test]
fn rerunning_the_same_conversion_is_idempotent() {
    let dir = tempdir().unwrap();
    let source = zip_fixture(&dir, "archive.zip", &[0u8, 1, 2, 3, 255, 254]);
    let destination = dir.path().join("archive.udf");

    let mut converter = converter_saving_to(&[Some(destination.clone()), Some(destination.clone())]);
    converter.handle_path(&source);
    let first = fs::read(&destination).unwrap();
    converter.handle_path(&source);

    assert_eq!(fs::read(&destination).unwrap(), first);
    assert_eq!(first, fs::read(&source).unwrap());
}

#[test]
fn cancelled_save_prompt_is_silent() {
    let dir = tempdir().unwrap();
    let source = zip_fixture(&dir, "archive.zip", b"PK");

    let mut converter = converter_saving_to(&[None]);
    let outcome = converter.handle_path(&source);

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(converter.interaction().dialogs.is_empty());
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn validation_errors_are_reported_without_prompting() {
    let dir = tempdir().unwrap();
    let text = zip_fixture(&dir, "notes.txt", b"hello");

    let cases = [
        (PathBuf::new(), "File path is empty"),
        (text, "Please use a .zip file"),
        (dir.path().join("missing.ZIP"), "File not found"),
    ];
    for (path, expected) in cases {
        let mut converter = converter_saving_to(&[]);
        let outcome = converter.handle_path(&path);

        assert_eq!(outcome, Outcome::Failed(expected.to_string()));
        let script = converter.interaction();
        assert!(script.default_names.is_empty());
        assert_eq!(script.dialogs, vec![(ERROR_TITLE.to_string(), expected.to_string())]);
    }
}

#[test]
fn copy_failure_is_reported_as_error_dialog() {
    let dir = tempdir().unwrap();
    let source = zip_fixture(&dir, "archive.zip", b"PK");
    let blocker = zip_fixture(&dir, "blocker", b"");

    let mut converter = converter_saving_to(&[Some(blocker.join("out.udf"))]);
    let outcome = converter.handle_path(&source);

    assert!(matches!(outcome, Outcome::Failed(ref m) if m.starts_with("Could not create folder")));
    let dialogs = &converter.interaction().dialogs;
    assert_eq!(dialogs.len(), 1);
    assert_eq!(dialogs[0].0, ERROR_TITLE);
}

#[test]
fn bare_destination_name_gets_udf_extension() {
    let dir = tempdir().unwrap();
    let source = zip_fixture(&dir, "archive.zip", b"PK");

    let mut converter = converter_saving_to(&[Some(dir.path().join("result"))]);
    let outcome = converter.handle_path(&source);

    let expected = dir.path().join("result.udf");
    assert_eq!(outcome, Outcome::Saved(expected.clone()));
    assert!(expected.is_file());
}

#[test]
fn only_the_first_dropped_file_is_processed() {
    let dir = tempdir().unwrap();
    let first = zip_fixture(&dir, "first.zip", b"first");
    let second = zip_fixture(&dir, "second.zip", b"second");
    let out = dir.path().join("out");

    let mut converter = converter_saving_to(&[
        Some(out.join("first.udf")),
        Some(out.join("second.udf")),
    ]);
    let outcome = converter.handle_drop(vec![first, second]);

    assert_eq!(outcome, Outcome::Saved(out.join("first.udf")));
    assert!(!out.join("second.udf").exists());
    let script = converter.interaction();
    assert_eq!(script.default_names, vec!["first.udf"]);
    assert_eq!(script.dialogs.len(), 1);
}

#[test]
fn empty_drop_and_cancelled_picker_do_nothing() {
    let mut converter = converter_saving_to(&[]);
    assert_eq!(converter.handle_drop(Vec::new()), Outcome::Cancelled);
    assert_eq!(converter.handle_select(), Outcome::Cancelled);
    assert!(converter.interaction().dialogs.is_empty());
}

#[test]
fn picker_flow_converts_selected_file() {
    let dir = tempdir().unwrap();
    let source = zip_fixture(&dir, "picked.zip", b"picked");
    let destination = dir.path().join("picked.udf");

    let mut converter = Converter::new(Scripted {
        sources: VecDeque::from([Some(source)]),
        destinations: VecDeque::from([Some(destination.clone())]),
        ..Default::default()
    });

    assert_eq!(converter.handle_select(), Outcome::Saved(destination.clone()));
    assert_eq!(fs::read(destination).unwrap(), b"picked");
}
