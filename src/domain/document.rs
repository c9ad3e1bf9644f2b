use std::fmt;
use std::path::{Path, PathBuf};

const PDF_SUFFIX: &str = ".pdf";

/// Location of a document on disk.
///
/// Absolute names are kept as given, bare names are resolved against the
/// documents directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath(PathBuf);

impl DocumentPath {
    pub fn resolve(base_dir: &Path, name: &str) -> Self {
        let candidate = Path::new(name);
        if candidate.is_absolute() {
            Self(candidate.to_path_buf())
        } else {
            Self(base_dir.join(candidate))
        }
    }

    pub fn from_raw(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|name| name.to_str())
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Case-sensitive, matches what the directory listing shows.
pub fn is_pdf_name(name: &str) -> bool {
    name.ends_with(PDF_SUFFIX)
}
