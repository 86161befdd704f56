use crate::{Error, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
const DEFAULT_PERMISSIONS: u32 = 0o644;

#[derive(Clone, Copy, Debug)]
pub struct AtomicWriteOptions {
    pub permissions: Option<u32>,
    pub sync:        bool,
    prefix:          &'static str,
    suffix:          &'static str,
}

impl Default for AtomicWriteOptions {
    fn default() -> Self { Self::new() }
}

impl AtomicWriteOptions {
    pub fn new() -> Self {
        Self {
            permissions: None,
            sync:        false,
            prefix:      ".",
            suffix:      ".chore",
        }
    }

    /// Mode for the written file. Without it an existing target keeps its
    /// permissions and a new file gets `0o644`. Ignored off unix.
    pub fn permissions(mut self, mode: u32) -> Self {
        self.permissions = Some(mode);
        self
    }

    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    fn resolve_permissions(&self, target: &Path) -> Option<fs::Permissions> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            match self.permissions {
                Some(mode) => Some(fs::Permissions::from_mode(mode)),
                None => Some(
                    fs::metadata(target)
                        .map(|m| m.permissions())
                        .unwrap_or_else(|_| fs::Permissions::from_mode(DEFAULT_PERMISSIONS)),
                ),
            }
        }

        #[cfg(not(unix))]
        {
            fs::metadata(target).map(|m| m.permissions()).ok()
        }
    }
}

/// Replaces `path` with `content` by writing a sibling temporary file and
/// renaming it over the target. The target is either fully old or fully new.
///
/// An existing target is resolved through symlinks first, so the file a link
/// points to is the one replaced and the link itself survives. A read-only
/// target is refused even when its directory is writable.
///
/// The parent directory must already exist. The temporary file is removed on
/// every failure path.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8], options: AtomicWriteOptions) -> Result<()> {
    let path = resolve_target(path.as_ref())?;
    let path = path.as_path();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(options.prefix)
        .suffix(options.suffix)
        .tempfile_in(parent)
        .map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;

    tracing::debug!(tmp = %tmp.path().display(), target = %path.display(), "staging atomic write");

    tmp.write_all(content).map_err(write_err)?;

    if let Some(perms) = options.resolve_permissions(path) {
        tmp.as_file().set_permissions(perms).map_err(write_err)?;
    }

    if options.sync {
        tmp.as_file().sync_all().map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Follows symlinks of an existing target and rejects read-only files.
/// A missing target is returned unchanged.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let resolved = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(path.to_path_buf()),
        Err(e) => return Err(write_err(e)),
    };

    let metadata = fs::metadata(&resolved).map_err(write_err)?;
    if metadata.permissions().readonly() {
        return Err(Error::Write {
            path:   resolved,
            source: std::io::Error::new(ErrorKind::PermissionDenied, "target is read-only"),
        });
    }

    Ok(resolved)
}

pub fn atomic_read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        source: e,
    })
}
