use relative_path::{RelativePath, RelativePathBuf};

/// Average silent reading speed used for the header estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// An article file under the articles directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Article {
    relative_path: RelativePathBuf,
    display_name: String,
    display_path: String,
}

impl Article {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_name()
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .unwrap_or("Untitled")
            .to_string();
        let display_path = {
            let path_str = relative_path.as_str();
            path_str.strip_suffix(".md").unwrap_or(path_str).to_string()
        };

        Self {
            relative_path,
            display_name,
            display_path,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File stem, shown as the article title
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Relative path without the `.md` extension
    pub fn display_path(&self) -> &str {
        &self.display_path
    }
}

impl From<RelativePathBuf> for Article {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Article {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

/// Whole minutes needed to read `source`, never less than one.
pub fn read_time_minutes(source: &str) -> usize {
    let words = source.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
