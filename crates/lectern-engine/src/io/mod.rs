use crate::models::Article;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Article not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid articles directory: {0}")]
    InvalidArticlesDir(String),
    #[error("Unsupported article path: {0}")]
    UnsupportedPath(PathBuf),
}

/// Read an article's raw source
pub fn read_article(relative_path: &RelativePath, articles_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(articles_root);
    if !absolute_path.is_file() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// List every `.md` file below the articles directory, sorted by path
pub fn scan_articles(articles_root: &Path) -> Result<Vec<Article>, IoError> {
    validate_articles_dir(articles_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(articles_root, &mut files)?;

    let mut articles = files
        .into_iter()
        .map(|path| relative_to(&path, articles_root).map(Article::new))
        .collect::<Result<Vec<_>, _>>()?;
    articles.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));

    log::debug!(
        "found {} articles under {}",
        articles.len(),
        articles_root.display()
    );
    Ok(articles)
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    let stripped = path
        .strip_prefix(root)
        .map_err(|_| IoError::UnsupportedPath(path.to_path_buf()))?;
    RelativePathBuf::from_path(stripped).map_err(|_| IoError::UnsupportedPath(path.to_path_buf()))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_articles_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidArticlesDir(format!(
            "articles directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_articles_dir, create_test_file};
    use pretty_assertions::assert_eq;

    fn paths(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.relative_path().as_str()).collect()
    }

    #[test]
    fn test_scan_finds_markdown_sorted() {
        let dir = create_test_articles_dir();
        create_test_file(&dir, "zebra.md", "# Zebra");
        create_test_file(&dir, "alpha.md", "# Alpha");

        let articles = scan_articles(dir.path()).unwrap();

        assert_eq!(paths(&articles), vec!["alpha.md", "zebra.md"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = create_test_articles_dir();
        create_test_file(&dir, "root.md", "# Root");
        create_test_file(&dir, "guides/nested.md", "# Nested");

        let articles = scan_articles(dir.path()).unwrap();

        assert_eq!(paths(&articles), vec!["guides/nested.md", "root.md"]);
        assert_eq!(articles[0].display_name(), "nested");
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        let dir = create_test_articles_dir();
        create_test_file(&dir, "article.md", "# Markdown");
        create_test_file(&dir, "image.png", "fake image data");
        create_test_file(&dir, "config.json", "{}");

        let articles = scan_articles(dir.path()).unwrap();

        assert_eq!(paths(&articles), vec!["article.md"]);
    }

    #[test]
    fn test_scan_invalid_directory() {
        let result = scan_articles(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidArticlesDir(_))));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("articles directory")
        );
    }

    #[test]
    fn test_validate_articles_dir() {
        let dir = create_test_articles_dir();
        assert!(validate_articles_dir(dir.path()).is_ok());

        let file = create_test_file(&dir, "file.md", "");
        assert!(matches!(
            validate_articles_dir(&file),
            Err(IoError::InvalidArticlesDir(_))
        ));
    }

    #[test]
    fn test_read_article() {
        let dir = create_test_articles_dir();
        create_test_file(&dir, "guides/intro.md", "# Intro\n\nText");

        let content = read_article(RelativePath::new("guides/intro.md"), dir.path()).unwrap();
        assert_eq!(content, "# Intro\n\nText");
    }

    #[test]
    fn test_read_article_not_found() {
        let dir = create_test_articles_dir();
        let result = read_article(RelativePath::new("missing.md"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
