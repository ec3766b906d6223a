// BashOut - core/banner.rs
//
// Banner text sources: a random quote, a free-text note, or a generated
// style prompt. Every source tolerates missing resource files and falls back
// to a fixed message so the banner always has something to show.

use crate::util::constants::{NO_NOTE_MESSAGE, NO_QUOTES_MESSAGE};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// What the banner currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerStyle {
    #[default]
    Quote,
    Note,
    Prompt,
}

impl BannerStyle {
    pub const ALL: [BannerStyle; 3] = [Self::Quote, Self::Note, Self::Prompt];

    pub fn label(self) -> &'static str {
        match self {
            Self::Quote => "Quote",
            Self::Note => "Note",
            Self::Prompt => "Prompt",
        }
    }
}

const VOICES: &[&str] = &[
    "formal",
    "informal",
    "conversational",
    "professional",
    "academic",
    "playful",
    "sarcastic",
    "intimate",
    "detached",
];

const TONES: &[&str] = &[
    "light-hearted",
    "serious",
    "dark",
    "humorous",
    "whimsical",
    "melancholic",
    "uplifting",
    "suspenseful",
    "nostalgic",
];

const TENSES: &[&str] = &["past", "present", "future"];

const POINTS_OF_VIEW: &[&str] = &[
    "first-person",
    "second-person",
    "third-person (limited)",
    "third-person (omniscient)",
];

const PACES: &[&str] = &["fast", "slow", "steadily", "frenetically"];

/// Pick a random non-empty line from `content`.
pub fn pick_quote<'a, R: Rng + ?Sized>(content: &'a str, rng: &mut R) -> Option<&'a str> {
    let quotes: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .collect();
    quotes.choose(rng).copied()
}

/// A random quote from the file at `path`, or the fallback message.
pub fn random_quote<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> String {
    match std::fs::read(path) {
        Ok(bytes) => {
            let content = String::from_utf8_lossy(&bytes);
            let quote = pick_quote(&content, rng)
                .map(str::to_string)
                .unwrap_or_else(|| NO_QUOTES_MESSAGE.to_string());
            quote
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Quotes file unavailable");
            NO_QUOTES_MESSAGE.to_string()
        }
    }
}

/// The trimmed content of the note file at `path`, or the fallback message.
pub fn read_note(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Note file unavailable");
            NO_NOTE_MESSAGE.to_string()
        }
    }
}

/// Build a random writing-style prompt.
pub fn generate_prompt<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut pick = |options: &[&'static str]| *options.choose(&mut *rng).unwrap_or(&"");
    let tone = pick(TONES);
    let pace = pick(PACES);
    let voice = pick(VOICES);
    let tense = pick(TENSES);
    let pov = pick(POINTS_OF_VIEW);
    format!(
        "Create a {tone}, {pace}-paced story with a {voice} voice in {tense}-tense \
         from a {pov} point of view."
    )
}

/// Generate a prompt and record it at `path`, overwriting the previous one.
///
/// A failed write is logged; the prompt is still returned for display.
pub fn new_style_prompt<R: Rng + ?Sized>(path: &Path, rng: &mut R) -> String {
    let prompt = generate_prompt(rng);
    let written = path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| std::fs::write(path, prompt.as_bytes()));
    if let Err(e) = written {
        tracing::warn!(path = %path.display(), error = %e, "Could not save style prompt");
    }
    prompt
}

/// Banner text for `style`, reading resources from `resources_dir`.
pub fn banner_text<R: Rng + ?Sized>(style: BannerStyle, resources_dir: &Path, rng: &mut R) -> String {
    use crate::util::constants::{NOTE_FILE_NAME, QUOTES_FILE_NAME, STYLE_FILE_NAME};
    match style {
        BannerStyle::Quote => random_quote(&resources_dir.join(QUOTES_FILE_NAME), rng),
        BannerStyle::Note => read_note(&resources_dir.join(NOTE_FILE_NAME)),
        BannerStyle::Prompt => new_style_prompt(&resources_dir.join(STYLE_FILE_NAME), rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_pick_quote_ignores_blank_lines() {
        let content = "\n   \nOnly one quote.\n\n";
        assert_eq!(pick_quote(content, &mut rng()), Some("Only one quote."));
        assert_eq!(pick_quote("\n \n", &mut rng()), None);
    }

    #[test]
    fn test_random_quote_comes_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quotes.txt");
        std::fs::write(&path, "Write drunk.\nEdit sober.\n").unwrap();

        let quote = random_quote(&path, &mut rng());
        assert!(quote == "Write drunk." || quote == "Edit sober.", "got {quote}");
    }

    #[test]
    fn test_missing_resources_fall_back() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            banner_text(BannerStyle::Quote, dir.path(), &mut rng()),
            NO_QUOTES_MESSAGE
        );
        assert_eq!(
            banner_text(BannerStyle::Note, dir.path(), &mut rng()),
            NO_NOTE_MESSAGE
        );
    }

    #[test]
    fn test_read_note_trims() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "\n  Finish chapter three.  \n").unwrap();
        assert_eq!(read_note(&path), "Finish chapter three.");
    }

    #[test]
    fn test_prompt_is_written_and_overwritten() {
        let dir = TempDir::new().unwrap();
        let resources = dir.path().join("resources");
        let path = resources.join("style.txt");
        let mut rng = rng();

        let first = banner_text(BannerStyle::Prompt, &resources, &mut rng);
        assert!(first.starts_with("Create a "));
        assert!(first.ends_with(" point of view."));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first);

        let second = new_style_prompt(&path, &mut rng);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), second);
    }

    #[test]
    fn test_generate_prompt_uses_known_vocabulary() {
        let prompt = generate_prompt(&mut rng());
        assert!(TONES.iter().any(|t| prompt.contains(t)));
        assert!(TENSES.iter().any(|t| prompt.contains(&format!("{t}-tense"))));
        assert!(POINTS_OF_VIEW.iter().any(|p| prompt.contains(p)));
    }
}
