// BashOut - core/words.rs
//
// Word counting and session/lifetime tallies.
//
// A "word" is a maximal run of non-whitespace characters, so counting is
// `split_whitespace().count()`. Files are streamed line by line; a token can
// never span a line break, so per-line counts sum to the whole-file count.

use std::io::{self, BufRead};
use std::path::Path;

/// Result of counting the words in a manuscript file.
///
/// Counting never fails outright: a file that cannot be read yields
/// `Unavailable` and the caller chooses whether to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// The file was read completely (a missing file counts as empty).
    Counted(usize),
    /// The file exists but could not be read.
    Unavailable,
}

impl WordCount {
    /// The count, treating `Unavailable` as zero.
    pub fn or_zero(self) -> usize {
        match self {
            Self::Counted(n) => n,
            Self::Unavailable => 0,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Counted(_))
    }
}

/// Count whitespace-separated words in `text`.
pub fn count_text(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count the words in the file at `path`.
///
/// Invalid UTF-8 is decoded lossily rather than rejecting the whole file.
pub fn count_words(path: &Path) -> WordCount {
    match count_file(path) {
        Ok(n) => WordCount::Counted(n),
        Err(e) if e.kind() == io::ErrorKind::NotFound => WordCount::Counted(0),
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "Word count unavailable"
            );
            WordCount::Unavailable
        }
    }
}

fn count_file(path: &Path) -> io::Result<usize> {
    let file = std::fs::File::open(path)?;
    let mut reader = io::BufReader::new(file);
    let mut line = Vec::new();
    let mut total = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        total += count_text(&String::from_utf8_lossy(&line));
    }
    Ok(total)
}

/// Session and lifetime word counts for the active manuscript.
///
/// `starting` is fixed when the manuscript is loaded; `total` follows the
/// file as sentences are appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordTally {
    starting: usize,
    total: usize,
}

impl WordTally {
    /// Tally for a manuscript that currently holds `count` words.
    pub fn from_count(count: usize) -> Self {
        Self {
            starting: count,
            total: count,
        }
    }

    /// Count `path` and start a new session from that count.
    pub fn load(path: &Path) -> (Self, WordCount) {
        let count = count_words(path);
        (Self::from_count(count.or_zero()), count)
    }

    /// Account for `words` newly appended to the manuscript.
    pub fn record_append(&mut self, words: usize) {
        self.total += words;
    }

    /// Re-read the manuscript and replace the total with the file's count.
    ///
    /// An unavailable count leaves the tally untouched.
    pub fn rescan(&mut self, path: &Path) -> WordCount {
        let count = count_words(path);
        if let WordCount::Counted(n) = count {
            self.total = n;
        }
        count
    }

    pub fn starting(&self) -> usize {
        self.starting
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Words added since load. Saturates at zero if the file shrank
    /// outside the application.
    pub fn session(&self) -> usize {
        self.total.saturating_sub(self.starting)
    }

    /// Display form: `[session/total]`.
    pub fn label(&self) -> String {
        format!("[{}/{}]", self.session(), self.total)
    }
}
