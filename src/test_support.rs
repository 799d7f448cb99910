use crate::dataset::{Category, Dataset, Entry};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn plain(items: &[&str]) -> Vec<Entry> {
    items.iter().map(|&s| Entry::plain(s)).collect()
}

pub(crate) fn illustrated(text: &str, images: &[&str]) -> Entry {
    Entry::illustrated(text, images.iter().copied()).unwrap()
}

/// A small dataset with every category populated and a few images.
pub(crate) fn sample_dataset() -> Dataset {
    Dataset::from_categories([
        (
            Category::People,
            vec![Entry::plain("Linus Torvalds"), illustrated("Ada Lovelace", &["ada.png"])],
        ),
        (Category::Companies, plain(&["Mozilla", "Oracle"])),
        (
            Category::Languages,
            vec![illustrated("Rust", &["rust.png"]), Entry::plain("Visual Basic")],
        ),
        (
            Category::Technologies,
            plain(&["Kubernetes", "Ruby on Rails"]),
        ),
        (Category::Problems, plain(&["memory leaks"])),
        (Category::Tlds, plain(&[".dev", ".io"])),
        (
            Category::Takes,
            vec![
                Entry::plain("{person} should rewrite {thing} in {language}"),
                illustrated("{company} will acquire {tld} by {year}", &["take.png"]),
            ],
        ),
    ])
}

/// Write `dataset` as JSON into a fresh temp dir and return both.
pub(crate) fn write_dataset(dataset: &Dataset, file_name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(file_name);
    std::fs::write(&path, dataset.to_json().unwrap()).unwrap();
    (temp_dir, path)
}
