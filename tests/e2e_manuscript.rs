// BashOut - tests/e2e_manuscript.rs
//
// End-to-end tests for manuscript persistence and word accounting.
//
// These drive the public library API against the real filesystem (no mocks):
// a configuration record on disk, manuscript files under a save directory,
// and fresh `AppState` instances standing in for application restarts.

use bashout::app::record::{self, RecordLoad};
use bashout::app::state::{AppState, Lifecycle};
use bashout::core::manuscript::{self, RenameOutcome};
use bashout::core::words::{count_text, count_words, WordCount};
use bashout::util::error::{BashOutError, ManuscriptError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

struct Workspace {
    _dir: TempDir,
    record_path: PathBuf,
    save_dir: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let record_path = dir.path().join("config").join("state.json");
        let save_dir = dir.path().join("Documents").join("BashOut");
        Self {
            _dir: dir,
            record_path,
            save_dir,
        }
    }

    /// A fresh application instance reading the same record.
    fn launch(&self) -> AppState {
        AppState::open(self.record_path.clone(), &self.save_dir)
    }

    fn file(&self, name: &str) -> PathBuf {
        self.save_dir.join(format!("{name}.txt"))
    }
}

fn counts(state: &AppState) -> (usize, usize, usize) {
    let tally = state.active().expect("manuscript should be active").tally;
    (tally.starting(), tally.session(), tally.total())
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// Word accounting
// =============================================================================

/// The worked example: empty draft, two sentences, then a restart.
#[test]
fn e2e_draft_example_counts_across_restart() {
    let ws = Workspace::new();

    let mut state = ws.launch();
    assert!(state.first_run);
    state.create("draft").unwrap();
    assert_eq!(counts(&state), (0, 0, 0));

    state.submit("Hello world.").unwrap();
    assert_eq!(counts(&state), (0, 2, 2));

    state.submit("It was raining.").unwrap();
    assert_eq!(counts(&state), (0, 5, 5));
    assert_eq!(state.word_count_label(), "[5/5]");
    drop(state);

    let reloaded = ws.launch();
    assert!(!reloaded.first_run);
    assert_eq!(reloaded.lifecycle(), Lifecycle::Active);
    assert_eq!(reloaded.active().unwrap().name, "draft");
    assert_eq!(counts(&reloaded), (5, 0, 5));
    assert_eq!(reloaded.active().unwrap().last_line, "It was raining.");
}

/// total = starting + sum of words appended, for a non-empty manuscript.
#[test]
fn e2e_total_is_starting_plus_appended_words() {
    let ws = Workspace::new();
    fs::create_dir_all(&ws.save_dir).unwrap();
    fs::write(ws.file("novel"), "Call me Ishmael.\nSome years ago\n").unwrap();

    let mut state = ws.launch();
    state.create("novel").unwrap();
    let (starting, session, total) = counts(&state);
    assert_eq!((starting, session, total), (6, 0, 6));

    let sentences = [
        "never mind how long precisely",
        "having little or no money in my purse,",
        "  and nothing particular to interest me on shore,  ",
        "I thought I would sail about a little",
    ];
    let mut expected = starting;
    for sentence in sentences {
        state.submit(sentence).unwrap();
        expected += count_text(sentence);
        let (s, session, total) = counts(&state);
        assert_eq!(s, starting);
        assert_eq!(total, expected);
        assert_eq!(session, total - starting);
    }

    // The incremental tally agrees with a full recount of the file.
    assert_eq!(count_words(&ws.file("novel")), WordCount::Counted(expected));
}

/// The lifetime total always equals the file's word count, even when the
/// file is edited or removed between two sentences.
#[test]
fn e2e_total_tracks_file_through_outside_changes() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();
    let path = ws.file("draft");
    let total = |state: &AppState| state.active().unwrap().tally.total();

    state.submit("a b c d e f").unwrap();
    fs::write(&path, "a\n").unwrap();
    state.submit("g").unwrap();
    assert_eq!(count_words(&path), WordCount::Counted(total(&state)));
    assert_eq!(total(&state), 2);

    // Appending by hand without a trailing newline.
    let mut content = read(&path);
    content.push_str("h i");
    fs::write(&path, content).unwrap();
    state.submit("j").unwrap();
    assert_eq!(count_words(&path), WordCount::Counted(total(&state)));
    assert_eq!(total(&state), 5);

    // A deleted file is reported, not silently recreated.
    fs::remove_file(&path).unwrap();
    assert!(state.submit("k").is_err());
    assert!(!path.exists());
}

/// Re-creating a manuscript by the same name resumes from its content.
#[test]
fn e2e_recreate_same_name_resumes_counting() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();
    state.submit("one two three").unwrap();

    state.create("draft").unwrap();
    assert_eq!(counts(&state), (3, 0, 3));
    assert_eq!(read(&ws.file("draft")), "one two three\n");
}

/// Counting a missing or empty file yields zero, never an error.
#[test]
fn e2e_missing_and_empty_files_count_zero() {
    let ws = Workspace::new();
    assert_eq!(count_words(&ws.file("nowhere")), WordCount::Counted(0));

    manuscript::ensure("empty", &ws.save_dir).unwrap();
    assert_eq!(count_words(&ws.file("empty")), WordCount::Counted(0));
}

// =============================================================================
// Append-only persistence
// =============================================================================

/// Old content is always a strict prefix of new content.
#[test]
fn e2e_appends_preserve_existing_bytes() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();

    let mut previous = fs::read(ws.file("draft")).unwrap();
    for sentence in ["First.", "Second, longer sentence.", "Third\nspans lines."] {
        state.submit(sentence).unwrap();
        let current = fs::read(ws.file("draft")).unwrap();
        assert!(current.len() > previous.len());
        assert_eq!(&current[..previous.len()], &previous[..]);
        previous = current;
    }
    assert_eq!(
        read(&ws.file("draft")),
        "First.\nSecond, longer sentence.\nThird\nspans lines.\n"
    );
}

/// A failed append leaves memory untouched so the caller can retry.
#[test]
fn e2e_failed_append_changes_nothing() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();
    state.submit("Saved.").unwrap();

    // Remove the whole save directory out from under the app.
    fs::remove_dir_all(&ws.save_dir).unwrap();

    let err = state.submit("Not saved.").unwrap_err();
    assert!(matches!(
        err,
        BashOutError::Manuscript(ManuscriptError::Io { .. })
    ));
    assert_eq!(counts(&state), (0, 1, 1));
    assert_eq!(state.active().unwrap().last_line, "Saved.");
}

// =============================================================================
// Rename
// =============================================================================

/// Renaming onto an existing manuscript fails and changes nothing.
#[test]
fn e2e_rename_collision_leaves_everything_unchanged() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("chapter-one").unwrap();
    state.submit("The other file.").unwrap();
    state.create("draft").unwrap();
    state.submit("The active file.").unwrap();

    let err = state.rename("chapter-one").unwrap_err();
    assert!(matches!(
        err,
        BashOutError::Manuscript(ManuscriptError::AlreadyExists { .. })
    ));

    assert_eq!(read(&ws.file("draft")), "The active file.\n");
    assert_eq!(read(&ws.file("chapter-one")), "The other file.\n");
    assert_eq!(state.active().unwrap().name, "draft");
    match record::load(&ws.record_path) {
        RecordLoad::Loaded(r) => assert_eq!(r.current_manuscript.as_deref(), Some("draft")),
        other => panic!("expected Loaded, got {other:?}"),
    }
}

/// Renaming to a fresh name moves content and the active pointer.
#[test]
fn e2e_rename_to_fresh_name_moves_file_and_pointer() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();
    state.submit("Hello world.").unwrap();
    let before = fs::read(ws.file("draft")).unwrap();

    let outcome = state.rename("novel").unwrap();
    assert_eq!(outcome, RenameOutcome::Renamed(ws.file("novel")));
    assert!(!ws.file("draft").exists());
    assert_eq!(fs::read(ws.file("novel")).unwrap(), before);
    assert_eq!(state.active().unwrap().name, "novel");

    // Counting continues on the renamed file.
    state.submit("It was raining.").unwrap();
    assert_eq!(counts(&state), (0, 5, 5));
    assert_eq!(read(&ws.file("novel")), "Hello world.\nIt was raining.\n");

    // A restart reopens the renamed manuscript.
    let reloaded = ws.launch();
    assert_eq!(reloaded.active().unwrap().name, "novel");
    assert_eq!(counts(&reloaded), (5, 0, 5));
}

/// Renaming to the current name is a no-op.
#[test]
fn e2e_rename_to_same_name_is_noop() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();
    assert_eq!(state.rename("draft").unwrap(), RenameOutcome::Unchanged);
    assert!(ws.file("draft").exists());
}

// =============================================================================
// Save directory
// =============================================================================

/// Switching directory moves no files and affects only later creates.
#[test]
fn e2e_switch_save_dir_affects_future_manuscripts_only() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();
    state.submit("Before the move.").unwrap();

    let new_dir = ws.save_dir.parent().unwrap().join("Elsewhere");
    state.switch_save_dir(new_dir.clone()).unwrap();
    state.submit("Still the same file.").unwrap();

    assert_eq!(
        read(&ws.file("draft")),
        "Before the move.\nStill the same file.\n"
    );
    assert_eq!(fs::read_dir(&new_dir).unwrap().count(), 0);

    state.create("sequel").unwrap();
    assert!(new_dir.join("sequel.txt").exists());

    match record::load(&ws.record_path) {
        RecordLoad::Loaded(r) => {
            assert_eq!(r.save_dir, new_dir);
            assert_eq!(r.current_manuscript.as_deref(), Some("sequel"));
        }
        other => panic!("expected Loaded, got {other:?}"),
    }
}

// =============================================================================
// Configuration record
// =============================================================================

/// A corrupt record is treated as absent: defaults and first-run setup.
#[test]
fn e2e_corrupt_record_starts_fresh() {
    let ws = Workspace::new();
    fs::create_dir_all(ws.record_path.parent().unwrap()).unwrap();
    fs::write(&ws.record_path, "{\"save_dir\": 42").unwrap();

    let mut state = ws.launch();
    assert!(state.first_run);
    assert_eq!(state.lifecycle(), Lifecycle::NoManuscript);
    assert_eq!(state.save_dir(), ws.save_dir.as_path());
    assert_eq!(state.take_warnings().len(), 1);
}

/// A record naming a manuscript whose file vanished recreates it empty.
#[test]
fn e2e_record_with_missing_file_reopens_empty() {
    let ws = Workspace::new();
    let mut state = ws.launch();
    state.create("draft").unwrap();
    state.submit("Gone soon.").unwrap();
    fs::remove_file(ws.file("draft")).unwrap();

    let reloaded = ws.launch();
    assert_eq!(reloaded.lifecycle(), Lifecycle::Active);
    assert_eq!(counts(&reloaded), (0, 0, 0));
    assert!(ws.file("draft").exists());
}
