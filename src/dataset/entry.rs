//! Entry model: the two shapes a category element can take.

use serde::{Deserialize, Serialize};

/// A single element of a category.
///
/// In the dataset document an entry is either a bare string or an object
/// `{ "take": "...", "image": "a.png" | ["a.png", "b.png"] }`. The object
/// form always carries at least one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry", into = "RawEntry")]
pub enum Entry {
    /// Text with no images.
    Plain(String),
    /// Text with one or more images attached.
    Illustrated { text: String, images: Vec<String> },
}

impl Entry {
    /// Create a plain entry.
    pub fn plain(text: impl Into<String>) -> Self {
        Entry::Plain(text.into())
    }

    /// Create an illustrated entry.
    ///
    /// Returns `None` when `images` is empty, since an illustrated entry
    /// without images is not a valid shape.
    pub fn illustrated<I, S>(text: impl Into<String>, images: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let images: Vec<String> = images.into_iter().map(Into::into).collect();
        if images.is_empty() {
            return None;
        }
        Some(Entry::Illustrated {
            text: text.into(),
            images,
        })
    }

    /// The text of the entry.
    pub fn value(&self) -> &str {
        match self {
            Entry::Plain(text) => text,
            Entry::Illustrated { text, .. } => text,
        }
    }

    /// The images attached to the entry; empty for plain entries.
    pub fn images(&self) -> &[String] {
        match self {
            Entry::Plain(_) => &[],
            Entry::Illustrated { images, .. } => images,
        }
    }

    /// Apply `f` to the text, keeping the image payload untouched.
    pub fn map_text<F>(&self, f: F) -> Entry
    where
        F: FnOnce(&str) -> String,
    {
        match self {
            Entry::Plain(text) => Entry::Plain(f(text)),
            Entry::Illustrated { text, images } => Entry::Illustrated {
                text: f(text),
                images: images.clone(),
            },
        }
    }
}

/// On-disk shape of an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Plain(String),
    Illustrated {
        #[serde(alias = "text")]
        take: String,
        image: RawImages,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawImages {
    One(String),
    Many(Vec<String>),
}

impl TryFrom<RawEntry> for Entry {
    type Error = String;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        match raw {
            RawEntry::Plain(text) => Ok(Entry::Plain(text)),
            RawEntry::Illustrated { take, image } => {
                let images = match image {
                    RawImages::One(image) => vec![image],
                    RawImages::Many(images) => images,
                };
                Entry::illustrated(take.as_str(), images)
                    .ok_or_else(|| format!("entry '{}' has an empty image list", take))
            }
        }
    }
}

impl From<Entry> for RawEntry {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Plain(text) => RawEntry::Plain(text),
            Entry::Illustrated { text, mut images } => {
                let image = if images.len() == 1 {
                    RawImages::One(images.remove(0))
                } else {
                    RawImages::Many(images)
                };
                RawEntry::Illustrated { take: text, image }
            }
        }
    }
}
