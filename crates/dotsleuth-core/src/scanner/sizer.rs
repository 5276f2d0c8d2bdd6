/// Per-entry size probing — the read-only query behind the report's size
/// descriptors.
///
/// The probe never mutates anything and caches nothing across calls. All
/// failure modes below a successful stat collapse into [`SizeInfo`]
/// sentinels; only a stat failure on the entry itself (in practice,
/// permission denied) is surfaced to the caller.
use crate::model::{EntryKind, SizeInfo};

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Determine an entry's kind and size descriptor.
///
/// Follows symlinks, so a link to a regular file reports the target's
/// length and a link to a directory is counted as one. A dangling link
/// surfaces as `NotFound` from the stat and is reported as a plain file
/// with an unavailable size, matching how the entry looks to a user.
pub fn probe(path: &Path) -> io::Result<(EntryKind, SizeInfo)> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok((EntryKind::File, SizeInfo::Bytes(meta.len()))),
        Ok(meta) if meta.is_dir() => Ok((EntryKind::Directory, count_files(path))),
        // Sockets, FIFOs, and other special files have no useful size.
        Ok(_) => Ok((EntryKind::File, SizeInfo::Unavailable)),
        // Dangling symlink: the entry exists but its target does not.
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Ok((EntryKind::File, SizeInfo::Unavailable))
        }
        Err(err) => Err(err),
    }
}

/// Recursively count regular files strictly beneath `dir`.
///
/// The walk runs on the calling thread (`Parallelism::Serial`) and does
/// not follow symlinks, so links never inflate the count. Any error
/// surfacing from the walk (an unreadable subtree, typically) invalidates
/// the whole count: the caller gets `Unavailable` rather than a partial
/// number.
fn count_files(dir: &Path) -> SizeInfo {
    let walker = jwalk::WalkDir::new(dir)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut count: u64 = 0;
    for entry in walker {
        match entry {
            Ok(e) => {
                if e.file_type().is_file() {
                    count += 1;
                }
            }
            Err(err) => {
                debug!("walk failed under {}: {err}", dir.display());
                return SizeInfo::Unavailable;
            }
        }
    }
    SizeInfo::Files(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_bytes(path: &Path, n: usize) {
        let mut f = File::create(path).unwrap();
        f.write_all(&vec![0u8; n]).unwrap();
    }

    #[test]
    fn probe_regular_file_reports_length() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".zshrc");
        write_bytes(&path, 100);

        let (kind, size) = probe(&path).unwrap();
        assert_eq!(kind, EntryKind::File);
        assert_eq!(size, SizeInfo::Bytes(100));
    }

    #[test]
    fn probe_empty_directory_counts_zero_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".vim");
        fs::create_dir(&dir).unwrap();

        let (kind, size) = probe(&dir).unwrap();
        assert_eq!(kind, EntryKind::Directory);
        assert_eq!(size, SizeInfo::Files(0));
    }

    /// The count is recursive and counts files only, not directories.
    #[test]
    fn probe_directory_counts_nested_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".config");
        let sub = dir.join("nvim");
        fs::create_dir_all(&sub).unwrap();
        write_bytes(&dir.join("starship.toml"), 10);
        write_bytes(&sub.join("init.lua"), 20);
        write_bytes(&sub.join("keymaps.lua"), 30);

        let (kind, size) = probe(&dir).unwrap();
        assert_eq!(kind, EntryKind::Directory);
        assert_eq!(size, SizeInfo::Files(3));
    }

    #[cfg(unix)]
    #[test]
    fn probe_dangling_symlink_is_unavailable() {
        let tmp = TempDir::new().unwrap();
        let link = tmp.path().join(".broken");
        std::os::unix::fs::symlink(tmp.path().join("missing-target"), &link).unwrap();

        let (kind, size) = probe(&link).unwrap();
        assert_eq!(kind, EntryKind::File);
        assert_eq!(size, SizeInfo::Unavailable);
    }

    /// A symlink to a file resolves to the target: counted as a file with
    /// the target's length.
    #[cfg(unix)]
    #[test]
    fn probe_follows_symlink_to_file() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("real");
        write_bytes(&target, 64);
        let link = tmp.path().join(".linked");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let (kind, size) = probe(&link).unwrap();
        assert_eq!(kind, EntryKind::File);
        assert_eq!(size, SizeInfo::Bytes(64));
    }

    /// Symlinks inside a counted directory are not followed and do not
    /// count as regular files.
    #[cfg(unix)]
    #[test]
    fn count_skips_symlinks_inside_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join(".dir");
        fs::create_dir(&dir).unwrap();
        write_bytes(&dir.join("real.txt"), 5);
        std::os::unix::fs::symlink(dir.join("real.txt"), dir.join("alias")).unwrap();

        let (_, size) = probe(&dir).unwrap();
        assert_eq!(size, SizeInfo::Files(1));
    }
}
