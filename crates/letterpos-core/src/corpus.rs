//! Corpus traversal and contiguous-window word sampling.
//!
//! A corpus is a directory tree of UTF-8 `.txt` documents. Each trial
//! shuffles the candidate files and takes one run of `word_sample_count`
//! accepted words from each until `source_count` files have contributed.

use std::io;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::frequency::WordCounter;
use crate::normalize::{Dictionary, NormalizeOptions, Word, normalize};
use crate::source::{SamplingOptions, WordSource};

/// Extension of candidate corpus documents.
pub const TEXT_EXTENSION: &str = "txt";

/// Path-substring filter deciding which corpus files are candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathFilter {
    /// If non-empty, a path must contain at least one of these.
    pub include: Vec<String>,
    /// A path containing any of these is dropped.
    pub exclude: Vec<String>,
}

impl PathFilter {
    /// Build from comma-separated lists (`"fiction,journal"`).
    pub fn from_lists(include: Option<&str>, exclude: Option<&str>) -> Self {
        fn split(list: Option<&str>) -> Vec<String> {
            list.map(|l| {
                l.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
        }
        Self {
            include: split(include),
            exclude: split(exclude),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.exclude.iter().any(|s| path.contains(s.as_str())) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|s| path.contains(s.as_str()))
    }
}

/// Recursively collect `.txt` files under `root` that pass `filter`, sorted.
///
/// Symlinked directories are not descended into.
pub fn discover_files(root: &Path, filter: &PathFilter) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if entry.file_type()?.is_dir() {
                pending.push(path);
                continue;
            }
            let is_text = path
                .extension()
                .is_some_and(|ext| ext == TEXT_EXTENSION);
            if is_text && filter.matches(&path.to_string_lossy()) {
                files.push(path);
            }
        }
    }
    files.sort();
    log::info!("found {} candidate files under {}", files.len(), root.display());
    Ok(files)
}

/// Every accepted word of a document, in order.
///
/// Fails if the file cannot be read or is not valid UTF-8.
pub fn list_words(
    path: &Path,
    options: &NormalizeOptions,
    dictionary: Option<&Dictionary>,
) -> io::Result<Vec<Word>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .split_whitespace()
        .filter_map(|token| normalize(token, options, dictionary))
        .collect())
}

/// One contiguous run of `count` words from `words`, or `None` if the run
/// would not be complete.
///
/// With `bias_to_front` the start is drawn from `[0, len - count)` (or is 0
/// when `len == count`) so the whole run always fits; a list shorter than
/// `count` yields nothing. Otherwise the start is drawn from `[0, len)` and
/// a run that overruns the end is discarded.
pub fn sample_window<R: Rng + ?Sized>(
    words: &[Word],
    count: usize,
    bias_to_front: bool,
    rng: &mut R,
) -> Option<Vec<Word>> {
    let start = if bias_to_front {
        words.len().checked_sub(count)?
    } else {
        words.len()
    };
    let pos = if start == 0 {
        0
    } else {
        rng.random_range(0..start)
    };
    let run: Vec<Word> = words.iter().skip(pos).take(count).cloned().collect();
    (run.len() == count).then_some(run)
}

/// Count every accepted word in every file.
pub fn count_words(
    files: &[PathBuf],
    options: &NormalizeOptions,
    dictionary: Option<&Dictionary>,
) -> io::Result<WordCounter> {
    let mut counter = WordCounter::new();
    for file in files {
        counter.extend(list_words(file, options, dictionary)?);
    }
    log::info!(
        "counted {} types / {} tokens across {} files",
        counter.len(),
        counter.total(),
        files.len()
    );
    Ok(counter)
}

// ---------------------------------------------------------------------------
// Corpus source
// ---------------------------------------------------------------------------

/// Samples contiguous word runs from shuffled corpus files.
pub struct CorpusSource<'a> {
    files: Vec<PathBuf>,
    sampling: SamplingOptions,
    normalize: NormalizeOptions,
    dictionary: Option<&'a Dictionary>,
}

impl<'a> CorpusSource<'a> {
    pub fn new(
        files: Vec<PathBuf>,
        sampling: SamplingOptions,
        normalize: NormalizeOptions,
        dictionary: Option<&'a Dictionary>,
    ) -> Self {
        Self {
            files,
            sampling,
            normalize,
            dictionary,
        }
    }

    /// Discover candidate files under `root` and build a source over them.
    pub fn open(
        root: &Path,
        filter: &PathFilter,
        sampling: SamplingOptions,
        normalize: NormalizeOptions,
        dictionary: Option<&'a Dictionary>,
    ) -> io::Result<Self> {
        let files = discover_files(root, filter)?;
        Ok(Self::new(files, sampling, normalize, dictionary))
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// One window from one file, or `None` if the file cannot supply a full run.
    pub fn sample_file<R: Rng + ?Sized>(&self, path: &Path, rng: &mut R) -> io::Result<Option<Vec<Word>>> {
        let words = list_words(path, &self.normalize, self.dictionary)?;
        Ok(sample_window(
            &words,
            self.sampling.word_sample_count,
            self.sampling.bias_to_front,
            rng,
        ))
    }
}

impl WordSource for CorpusSource<'_> {
    fn name(&self) -> &str {
        "corpus"
    }

    fn draw(&self, rng: &mut dyn RngCore) -> io::Result<Vec<Word>> {
        let mut order: Vec<&PathBuf> = self.files.iter().collect();
        order.shuffle(rng);

        let wanted = self.sampling.source_count;
        let mut collected = Vec::with_capacity(self.sampling.sample_size());
        let mut contributed = 0;
        for path in order {
            if contributed >= wanted {
                break;
            }
            if let Some(run) = self.sample_file(path, rng)? {
                collected.extend(run);
                contributed += 1;
            } else {
                log::debug!("{} cannot supply a full run", path.display());
            }
        }

        if contributed < wanted {
            log::warn!(
                "not enough sources to collect {} words from {} sources, only got {}",
                self.sampling.word_sample_count,
                wanted,
                contributed
            );
        }
        Ok(collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(text: &str) -> Vec<Word> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn filter_include_and_exclude() {
        let filter = PathFilter::from_lists(Some("fiction, journal"), Some("spoken"));
        assert!(filter.matches("corpus/written/fiction/a.txt"));
        assert!(filter.matches("corpus/journal/b.txt"));
        assert!(!filter.matches("corpus/letters/c.txt"));
        assert!(!filter.matches("corpus/spoken/fiction/d.txt"));

        let all = PathFilter::default();
        assert!(all.matches("anything.txt"));
    }

    #[test]
    fn window_with_bias_always_fits() {
        let list = words("ONE TWO SIX TEN MAP CAT DOG");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let run = sample_window(&list, 3, true, &mut rng).unwrap();
            assert_eq!(run.len(), 3);
            let start = list.iter().position(|w| *w == run[0]).unwrap();
            assert!(start < 4);
            assert_eq!(&list[start..start + 3], run.as_slice());
        }
    }

    #[test]
    fn window_exact_length_starts_at_zero() {
        let list = words("THE CAT SAT");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_window(&list, 3, true, &mut rng), Some(list.clone()));
    }

    #[test]
    fn window_too_short_is_skipped() {
        let list = words("THE CAT");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sample_window(&list, 3, true, &mut rng), None);
        assert_eq!(sample_window(&list, 3, false, &mut rng), None);
    }

    #[test]
    fn window_without_bias_discards_overruns() {
        let list = words("ONE TWO SIX TEN MAP");
        let mut rng = StdRng::seed_from_u64(99);
        let mut full = 0;
        let mut partial = 0;
        for _ in 0..500 {
            match sample_window(&list, 3, false, &mut rng) {
                Some(run) => {
                    assert_eq!(run.len(), 3);
                    full += 1;
                }
                None => partial += 1,
            }
        }
        // Starts 0..=2 fit, 3..=4 overrun.
        assert!(full > 0 && partial > 0);
    }

    #[test]
    fn discover_respects_extension_and_filter() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("written").join("fiction");
        let spoken = dir.path().join("spoken");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir_all(&spoken).unwrap();
        std::fs::write(nested.join("a.txt"), "text").unwrap();
        std::fs::write(nested.join("a.xml"), "<x/>").unwrap();
        std::fs::write(spoken.join("b.txt"), "text").unwrap();
        std::fs::write(dir.path().join("c.txt"), "text").unwrap();

        let all = discover_files(dir.path(), &PathFilter::default()).unwrap();
        assert_eq!(all.len(), 3);

        let filter = PathFilter::from_lists(None, Some("spoken"));
        let written = discover_files(dir.path(), &filter).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written.iter().all(|p| !p.to_string_lossy().contains("spoken")));
    }

    #[cfg(unix)]
    #[test]
    fn discover_skips_symlinked_directories() {
        let dir = tempfile::tempdir().unwrap();
        let written = dir.path().join("written");
        std::fs::create_dir_all(&written).unwrap();
        std::fs::write(written.join("a.txt"), "text").unwrap();
        std::os::unix::fs::symlink(dir.path(), written.join("loop")).unwrap();

        let files = discover_files(dir.path(), &PathFilter::default()).unwrap();
        assert_eq!(files, vec![written.join("a.txt")]);
    }

    #[test]
    fn list_words_normalizes_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "The cat, on the mat!\nCafé society").unwrap();
        let list = list_words(&path, &NormalizeOptions::default(), None).unwrap();
        assert_eq!(list, words("THE CAT THE MAT CAFE SOCIETY"));
    }

    #[test]
    fn list_words_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();
        assert!(list_words(&path, &NormalizeOptions::default(), None).is_err());
    }

    #[test]
    fn draw_stops_at_source_count() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..5 {
            std::fs::write(dir.path().join(format!("{i}.txt")), "ONE TWO SIX TEN").unwrap();
        }
        let sampling = SamplingOptions {
            source_count: 3,
            word_sample_count: 2,
            bias_to_front: true,
        };
        let source = CorpusSource::open(
            dir.path(),
            &PathFilter::default(),
            sampling,
            NormalizeOptions::default(),
            None,
        )
        .unwrap();
        assert_eq!(source.files().len(), 5);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(source.draw(&mut rng).unwrap().len(), 6);
    }

    #[test]
    fn draw_shortfall_returns_partial_sample() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("long.txt"), "ONE TWO SIX TEN").unwrap();
        std::fs::write(dir.path().join("short.txt"), "ONE").unwrap();
        let sampling = SamplingOptions {
            source_count: 5,
            word_sample_count: 4,
            bias_to_front: true,
        };
        let source = CorpusSource::open(
            dir.path(),
            &PathFilter::default(),
            sampling,
            NormalizeOptions::default(),
            None,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(source.draw(&mut rng).unwrap(), words("ONE TWO SIX TEN"));
    }

    #[test]
    fn count_words_over_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        std::fs::write(&a, "the cat").unwrap();
        std::fs::write(&b, "the dog ox").unwrap();
        let counter = count_words(&[a, b], &NormalizeOptions::default(), None).unwrap();
        assert_eq!(counter.get("THE"), 2);
        assert_eq!(counter.get("OX"), 0);
        assert_eq!(counter.total(), 4);
    }
}
