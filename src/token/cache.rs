//! Token persistence.
//!
//! A [`TokenCache`] remembers the last bearer token together with the moment it
//! was issued so the provider can skip the refresh grant while it is still fresh.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use crate::core::TdaError;

/// Server-side lifetime of an access token.
pub const TOKEN_SERVER_EXPIRY: Duration = Duration::minutes(30);

/// Age at which a cached token stops being reused. Undercuts the server expiry
/// so a token never lapses in the middle of a request.
pub const TOKEN_FRESHNESS: Duration = Duration::minutes(25);

/// A persisted `(token, issued_at)` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
}

impl CachedToken {
    /// Age of the record measured against `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }

    /// Whether the record may be handed out without a refresh.
    /// An empty token is never fresh.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        !self.token.is_empty() && self.age(now) < TOKEN_FRESHNESS
    }
}

/// Storage for the most recent access token.
///
/// Implementations need not coordinate between processes: concurrent writers
/// race and the last one wins.
pub trait TokenCache: Send + Sync {
    /// Read the stored record. `Ok(None)` means there is nothing cached yet.
    fn load(&self) -> Result<Option<CachedToken>, TdaError>;

    /// Replace the stored record with `token`, issued now.
    fn store(&self, token: &str) -> Result<(), TdaError>;
}

/// The default cache: never hits, never writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTokenCache;

impl TokenCache for NoopTokenCache {
    fn load(&self) -> Result<Option<CachedToken>, TdaError> {
        Ok(None)
    }

    fn store(&self, _token: &str) -> Result<(), TdaError> {
        Ok(())
    }
}

/// In-process cache, useful in tests and for sharing a token between clients.
#[derive(Debug, Default)]
pub struct MemoryTokenCache {
    slot: RwLock<Option<CachedToken>>,
}

impl MemoryTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a record issued at an explicit time.
    pub fn with_token(token: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            slot: RwLock::new(Some(CachedToken {
                token: token.into(),
                issued_at,
            })),
        }
    }

    /// Current contents, if any.
    pub fn get(&self) -> Option<CachedToken> {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl TokenCache for MemoryTokenCache {
    fn load(&self) -> Result<Option<CachedToken>, TdaError> {
        Ok(self.get())
    }

    fn store(&self, token: &str) -> Result<(), TdaError> {
        let record = CachedToken {
            token: token.to_string(),
            issued_at: Utc::now(),
        };
        let mut guard = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(record);
        Ok(())
    }
}

/// File-backed cache.
///
/// The file holds the raw token bytes and its modification time is the
/// issuance time. Writes go to a temporary sibling which is then renamed over
/// the target, so a reader never sees a half-written token.
#[derive(Debug, Clone)]
pub struct FileTokenCache {
    path: PathBuf,
}

impl FileTokenCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_err(&self, source: io::Error) -> TdaError {
        TdaError::Storage {
            path: self.path.clone(),
            source,
        }
    }

    fn ensure_parent(&self) -> io::Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir),
            _ => Ok(()),
        }
    }

    /// Create the file empty so later loads find a (stale) record.
    fn initialize_empty(&self) -> io::Result<()> {
        self.ensure_parent()?;
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .map(drop)
    }
}

impl TokenCache for FileTokenCache {
    fn load(&self) -> Result<Option<CachedToken>, TdaError> {
        let meta = match fs::metadata(&self.path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.initialize_empty().map_err(|e| self.storage_err(e))?;
                return Ok(None);
            }
            Err(e) => return Err(self.storage_err(e)),
        };

        let modified = meta.modified().map_err(|e| self.storage_err(e))?;
        let bytes = fs::read(&self.path).map_err(|e| self.storage_err(e))?;
        // Undecodable contents read as an empty record, which is always stale
        // and gets overwritten by the next refresh.
        let token = String::from_utf8(bytes).unwrap_or_default();

        Ok(Some(CachedToken {
            token,
            issued_at: DateTime::<Utc>::from(modified),
        }))
    }

    fn store(&self, token: &str) -> Result<(), TdaError> {
        self.ensure_parent().map_err(|e| self.storage_err(e))?;
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.storage_err(e))?;
        tmp.write_all(token.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.storage_err(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.storage_err(e.error))?;
        Ok(())
    }
}
