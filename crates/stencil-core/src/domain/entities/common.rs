use super::DomainError;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A `/`-separated artifact path guaranteed to be relative.
///
/// Invariant: never absolute, never empty, never escapes its root through
/// `..`. Enforced at construction. Stored with forward slashes regardless of
/// platform so that generated results compare equal everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RelativePath(String);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let absolute = path.starts_with('/') || Path::new(&path).is_absolute();
        let escapes = path.split('/').any(|segment| segment == "..");

        if path.is_empty() || absolute || escapes {
            return Err(DomainError::AbsolutePathNotAllowed { path });
        }
        Ok(Self(path))
    }

    /// Prefix this path with a mount directory. An empty mount is a no-op.
    pub fn mounted_under(&self, mount: &str) -> Result<Self, DomainError> {
        let mount = mount.trim_end_matches('/');
        if mount.is_empty() {
            return Ok(self.clone());
        }
        Self::try_new(format!("{mount}/{}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_relative() {
        let p = RelativePath::try_new("src/main.ts").unwrap();
        assert_eq!(p.as_str(), "src/main.ts");
        assert_eq!(p.as_path(), Path::new("src/main.ts"));
    }

    #[test]
    fn rejects_absolute() {
        assert!(RelativePath::try_new("/etc/passwd").is_err());
    }

    #[test]
    fn rejects_parent_escape_and_empty() {
        assert!(RelativePath::try_new("../outside.ts").is_err());
        assert!(RelativePath::try_new("src/../../x").is_err());
        assert!(RelativePath::try_new("").is_err());
    }

    #[test]
    fn dotfiles_are_fine() {
        assert!(RelativePath::try_new(".vscode/launch.json").is_ok());
        assert!(RelativePath::try_new(".env").is_ok());
    }

    #[test]
    fn mounting() {
        let p = RelativePath::try_new("modules/health/adapter.ts").unwrap();
        assert_eq!(
            p.mounted_under("src/").unwrap().as_str(),
            "src/modules/health/adapter.ts"
        );
        assert_eq!(p.mounted_under("").unwrap(), p);
    }
}
