//! TTL cache for raw response bodies
//!
//! Provides a `Cache` that stores byte payloads in memory and reclaims them
//! with a periodic sweep running on its own tokio task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::RwLock;
use tokio::runtime::{Handle, TryCurrentError};
use tokio::sync::watch;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// A cached payload together with its insertion time
#[derive(Debug)]
struct CacheEntry {
    /// Raw bytes, opaque to the cache
    value: Bytes,
    /// When the entry was inserted
    created_at: Instant,
}

type Entries = Arc<RwLock<HashMap<String, CacheEntry>>>;

/// Thread-safe in-memory cache with age-based expiry
///
/// Every entry becomes eligible for removal once it is `ttl` old. A background
/// task wakes up once per `ttl` and drops the eligible entries. `get` does not
/// look at entry ages, so expired entries stay visible until that sweep runs.
///
/// The sweep starts in [`Cache::new`] and stops on [`Cache::shutdown`] or when
/// the cache is dropped.
#[derive(Debug)]
pub struct Cache {
    entries: Entries,
    ttl: Duration,
    shutdown_tx: watch::Sender<bool>,
}

impl Cache {
    /// Creates a cache and starts its sweep task
    ///
    /// Fails when called outside a tokio runtime. `ttl` is expected to be
    /// non-zero; callers validate it before getting here.
    pub fn new(ttl: Duration) -> Result<Self, TryCurrentError> {
        let runtime = Handle::try_current()?;
        let entries: Entries = Arc::new(RwLock::new(HashMap::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        runtime.spawn(sweep_loop(Arc::clone(&entries), ttl, shutdown_rx));

        Ok(Self {
            entries,
            ttl,
            shutdown_tx,
        })
    }

    /// Inserts or replaces the payload for `key`, resetting its age
    pub fn put(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let entry = CacheEntry {
            value: value.into(),
            created_at: Instant::now(),
        };
        self.entries.write().insert(key.into(), entry);
    }

    /// Returns the payload stored under `key`, if any
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries
            .read()
            .get(key)
            .map(|entry| entry.value.clone())
    }

    /// The time-to-live this cache was built with
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of entries currently held, expired-but-unswept included
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Stops the background sweep
    ///
    /// Entries already stored stay readable; they are just no longer expired.
    /// Calling this more than once is harmless.
    pub fn shutdown(&self) {
        if !self.shutdown_tx.send_replace(true) {
            debug!("cache sweep shutdown requested");
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Runs one sweep per `ttl` until shutdown is signalled or the cache is gone
async fn sweep_loop(entries: Entries, ttl: Duration, mut shutdown_rx: watch::Receiver<bool>) {
    let mut ticker = time::interval(ttl);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => sweep(&entries, ttl),
            changed = shutdown_rx.changed() => {
                // An Err means the sender was dropped along with the cache
                if changed.is_err() || *shutdown_rx.borrow() {
                    break;
                }
            }
        }
    }

    debug!("cache sweep stopped");
}

/// Removes every entry whose age has reached `ttl`
fn sweep(entries: &RwLock<HashMap<String, CacheEntry>>, ttl: Duration) {
    let mut entries = entries.write();
    let before = entries.len();
    entries.retain(|_, entry| entry.created_at.elapsed() < ttl);

    let removed = before - entries.len();
    if removed > 0 {
        debug!(removed, remaining = entries.len(), "swept expired cache entries");
    }
}
