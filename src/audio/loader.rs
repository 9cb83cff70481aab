//! Ambient layer downloads with an on-disk cache
//!
//! Layer audio is fetched in full before it is handed to the output (the
//! tracks are short loops). Downloads are cached under the xxh3 hash of the
//! URL. Each download writes its own `.tmp` file and renames it when complete,
//! so an interrupted download never looks like a valid cache entry and two
//! layers sharing a URL never write the same temp file.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result, anyhow};
use reqwest::Url;
use tracing::{debug, warn};
use xxhash_rust::xxh3::xxh3_64;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Cache file for a given audio URL
pub fn cache_path_for(cache_dir: &Path, url: &Url) -> PathBuf {
    cache_dir.join(format!("{:016x}.audio", xxh3_64(url.as_str().as_bytes())))
}

/// Fetch a layer's audio bytes, preferring the cache.
///
/// `file://` URLs are read directly and never cached.
pub async fn load_layer_audio(
    http: reqwest::Client,
    url: Url,
    cache_dir: PathBuf,
) -> Result<Arc<[u8]>> {
    if url.scheme() == "file" {
        let path = url
            .to_file_path()
            .map_err(|_| anyhow!("Invalid file url: {}", url))?;
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(bytes.into());
    }

    let cached = cache_path_for(&cache_dir, &url);
    if let Ok(bytes) = tokio::fs::read(&cached).await {
        debug!("Layer audio cache hit: {}", url);
        return Ok(bytes.into());
    }

    let response = http
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?
        .error_for_status()
        .with_context(|| format!("Audio server rejected {}", url))?;
    let bytes = response
        .bytes()
        .await
        .with_context(|| format!("Failed to download {}", url))?;

    if let Err(e) = store(&cached, &bytes).await {
        warn!("Failed to cache {}: {:#}", url, e);
    }

    Ok(Arc::from(&bytes[..]))
}

/// A temp path beside `path` that no other in-flight download uses
fn temp_path_for(path: &Path) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".{}-{}.tmp", std::process::id(), n));
    path.with_file_name(name)
}

async fn store(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .context("Failed to create cache directory")?;
    }
    let temp_path = temp_path_for(path);
    tokio::fs::write(&temp_path, bytes)
        .await
        .context("Failed to write temp file")?;
    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e).context("Failed to finalize cache file");
    }
    Ok(())
}
