//! Ambient audio cache management
//!
//! Handles cache size calculation, orphan cleanup and eviction for the
//! directory the layer loader writes to.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

use crate::utils::format_bytes;

/// Information about a cached file
#[derive(Debug)]
struct CacheEntry {
    path: PathBuf,
    size: u64,
    modified: SystemTime,
}

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total size in bytes
    pub total_bytes: u64,
    /// Number of files
    pub file_count: usize,
}

/// Result of a cache cleanup operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearResult {
    pub files_deleted: usize,
    pub bytes_freed: u64,
    pub errors: usize,
}

impl ClearResult {
    fn merge(&mut self, other: ClearResult) {
        self.files_deleted += other.files_deleted;
        self.bytes_freed += other.bytes_freed;
        self.errors += other.errors;
    }
}

/// Cache operation errors
#[derive(Debug, Clone)]
pub enum CacheError {
    Io(String),
}

impl std::fmt::Display for CacheError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheError::Io(e) => write!(f, "Cache IO error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

fn is_temp(path: &Path) -> bool {
    path.extension().map(|e| e == "tmp").unwrap_or(false)
}

/// Collect finished cache files (temp files excluded)
fn collect_entries(dir: &Path) -> Result<Vec<CacheEntry>, CacheError> {
    let mut entries = Vec::new();

    if !dir.exists() {
        return Ok(entries);
    }

    let read_dir = fs::read_dir(dir).map_err(|e| CacheError::Io(format!("{:?}: {}", dir, e)))?;

    for entry in read_dir.flatten() {
        let path = entry.path();
        if !path.is_file() || is_temp(&path) {
            continue;
        }

        let Ok(metadata) = entry.metadata() else {
            continue;
        };

        entries.push(CacheEntry {
            path,
            size: metadata.len(),
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        });
    }

    Ok(entries)
}

/// Calculate cache statistics for `dir`
pub fn calculate_cache_stats(dir: &Path) -> CacheStats {
    let entries = match collect_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("{}", e);
            return CacheStats::default();
        }
    };

    CacheStats {
        total_bytes: entries.iter().map(|e| e.size).sum(),
        file_count: entries.len(),
    }
}

/// Enforce a size limit in MB by deleting the oldest files
pub fn enforce_cache_limit(dir: &Path, max_cache_mb: u64) -> Result<ClearResult, CacheError> {
    enforce_byte_limit(dir, max_cache_mb.saturating_mul(1024 * 1024))
}

fn enforce_byte_limit(dir: &Path, max_bytes: u64) -> Result<ClearResult, CacheError> {
    let mut result = ClearResult::default();
    let mut entries = collect_entries(dir)?;

    let current_size: u64 = entries.iter().map(|e| e.size).sum();
    if current_size <= max_bytes {
        debug!(
            "Cache size {} is within limit {}",
            format_bytes(current_size),
            format_bytes(max_bytes)
        );
        return Ok(result);
    }

    // Oldest first
    entries.sort_by(|a, b| a.modified.cmp(&b.modified));
    let target_free = current_size - max_bytes;

    for entry in entries {
        if result.bytes_freed >= target_free {
            break;
        }

        match fs::remove_file(&entry.path) {
            Ok(_) => {
                result.files_deleted += 1;
                result.bytes_freed += entry.size;
            }
            Err(e) => {
                warn!("Failed to delete cache file {:?}: {}", entry.path, e);
                result.errors += 1;
            }
        }
    }

    info!(
        "Cache cleanup: {} files deleted, {} freed (target was {})",
        result.files_deleted,
        format_bytes(result.bytes_freed),
        format_bytes(target_free)
    );

    Ok(result)
}

/// Remove orphan .tmp files left behind by interrupted downloads
pub fn cleanup_temp_files(dir: &Path) -> ClearResult {
    let mut result = ClearResult::default();

    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            if dir.exists() {
                warn!("Failed to read cache directory {:?}: {}", dir, e);
            }
            return result;
        }
    };

    for entry in read_dir.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_temp(&path) {
            continue;
        }

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        match fs::remove_file(&path) {
            Ok(_) => {
                debug!("Cleaned up orphan temp file: {:?} ({} bytes)", path, size);
                result.files_deleted += 1;
                result.bytes_freed += size;
            }
            Err(e) => {
                warn!("Failed to delete temp file {:?}: {}", path, e);
                result.errors += 1;
            }
        }
    }

    if result.files_deleted > 0 {
        info!(
            "Temp file cleanup: {} files deleted, {} freed",
            result.files_deleted,
            format_bytes(result.bytes_freed)
        );
    }

    result
}

/// Startup housekeeping: drop orphan temp files, then apply the size limit
pub fn prepare_cache(dir: &Path, max_cache_mb: u64) -> Result<ClearResult, CacheError> {
    let mut result = cleanup_temp_files(dir);
    result.merge(enforce_cache_limit(dir, max_cache_mb)?);

    let stats = calculate_cache_stats(dir);
    info!(
        "Ambient cache at {:?}: {} files, {}",
        dir,
        stats.file_count,
        format_bytes(stats.total_bytes)
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_aged(dir: &Path, name: &str, len: usize, age_secs: u64) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, vec![0u8; len]).unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
            .unwrap();
        path
    }

    #[test]
    fn test_stats_ignore_temp_files() {
        let dir = TempDir::new().unwrap();
        write_aged(dir.path(), "a.audio", 100, 0);
        write_aged(dir.path(), "b.audio", 50, 0);
        write_aged(dir.path(), "c.audio.tmp", 999, 0);

        let stats = calculate_cache_stats(dir.path());
        assert_eq!(stats.file_count, 2);
        assert_eq!(stats.total_bytes, 150);
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(calculate_cache_stats(&missing), CacheStats::default());
        assert_eq!(cleanup_temp_files(&missing), ClearResult::default());
        assert_eq!(
            enforce_cache_limit(&missing, 1).unwrap(),
            ClearResult::default()
        );
    }

    #[test]
    fn test_cleanup_removes_only_temp_files() {
        let dir = TempDir::new().unwrap();
        let kept = write_aged(dir.path(), "a.audio", 10, 0);
        let orphan = write_aged(dir.path(), "b.audio.tmp", 20, 0);

        let result = cleanup_temp_files(dir.path());
        assert_eq!(result.files_deleted, 1);
        assert_eq!(result.bytes_freed, 20);
        assert!(kept.exists());
        assert!(!orphan.exists());
    }

    #[test]
    fn test_limit_evicts_oldest_first() {
        let dir = TempDir::new().unwrap();
        let oldest = write_aged(dir.path(), "old.audio", 400, 300);
        let middle = write_aged(dir.path(), "mid.audio", 400, 200);
        let newest = write_aged(dir.path(), "new.audio", 400, 100);

        let result = enforce_byte_limit(dir.path(), 900).unwrap();
        assert_eq!(result.files_deleted, 1);
        assert_eq!(result.bytes_freed, 400);
        assert!(!oldest.exists());
        assert!(middle.exists());
        assert!(newest.exists());
    }

    #[test]
    fn test_within_limit_deletes_nothing() {
        let dir = TempDir::new().unwrap();
        write_aged(dir.path(), "a.audio", 100, 0);
        let result = enforce_byte_limit(dir.path(), 100).unwrap();
        assert_eq!(result, ClearResult::default());
    }
}
