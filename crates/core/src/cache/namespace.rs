//! A single typed key space with get-or-compute semantics.

use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::Error;

/// Expiry and capacity knobs shared by every namespace.
///
/// Both default to `None`: entries live for the process lifetime and the
/// store grows without bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheSettings {
    pub time_to_live: Option<Duration>,
    pub max_entries: Option<u64>,
}

/// One isolated key space of the cache store.
///
/// Concurrent misses on the same key are coalesced: the first caller runs the
/// loader and every other caller for that key waits for its outcome.
#[derive(Debug, Clone)]
pub struct Namespace<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    name: &'static str,
    inner: Cache<K, V>,
}

impl<K, V> Namespace<K, V>
where
    K: Debug + Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, settings: CacheSettings) -> Self {
        let mut builder = Cache::builder().name(name);

        if let Some(ttl) = settings.time_to_live {
            builder = builder.time_to_live(ttl);
        }

        if let Some(max) = settings.max_entries {
            builder = builder.max_capacity(max);
        }

        Self { name, inner: builder.build() }
    }

    /// Return the cached value for `key`, or run `loader` and cache its result.
    ///
    /// `loader` is not invoked on a hit. A failing loader caches nothing and
    /// its error is handed to every caller that was waiting on the same key.
    pub async fn get_or_compute<F, Fut>(&self, key: K, loader: F) -> Result<V, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, Error>>,
    {
        let entry = self
            .inner
            .entry(key)
            .or_try_insert_with(async move { loader().await })
            .await
            .map_err(Arc::unwrap_or_clone)?;

        if entry.is_fresh() {
            tracing::debug!(namespace = self.name, key = ?entry.key(), "cache miss, value stored");
        } else {
            tracing::debug!(namespace = self.name, key = ?entry.key(), "cache hit");
        }

        Ok(entry.into_value())
    }

    /// Look up a key without computing anything.
    pub async fn get(&self, key: &K) -> Option<V> {
        self.inner.get(key).await
    }

    /// Number of live entries, after pending maintenance has run.
    pub async fn len(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every entry, returning how many were live.
    pub async fn purge(&self) -> u64 {
        let count = self.len().await;
        self.inner.invalidate_all();
        self.inner.run_pending_tasks().await;
        tracing::debug!(namespace = self.name, count, "namespace purged");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_miss_then_hit() {
        let ns: Namespace<u8, String> = Namespace::new("test", CacheSettings::default());
        let calls = AtomicUsize::new(0);

        let first = ns
            .get_or_compute(1, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("one".to_string())
            })
            .await
            .unwrap();

        let second = ns
            .get_or_compute(1, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("other".to_string())
            })
            .await
            .unwrap();

        assert_eq!(first, "one");
        assert_eq!(second, "one");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_loader_caches_nothing() {
        let ns: Namespace<u8, String> = Namespace::new("test", CacheSettings::default());

        let err = ns
            .get_or_compute(7, || async { Err(Error::UpstreamFailure("boom".into())) })
            .await
            .unwrap_err();
        assert_eq!(err, Error::UpstreamFailure("boom".into()));
        assert!(ns.get(&7).await.is_none());
        assert!(ns.is_empty().await);

        let value = ns.get_or_compute(7, || async { Ok("recovered".to_string()) }).await.unwrap();
        assert_eq!(value, "recovered");
    }

    #[tokio::test]
    async fn test_concurrent_misses_are_coalesced() {
        let ns: Namespace<u8, String> = Namespace::new("test", CacheSettings::default());
        let calls = Arc::new(AtomicUsize::new(0));

        let load = |calls: Arc<AtomicUsize>| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok::<_, Error>("shared".to_string())
        };

        let (a, b) = tokio::join!(
            ns.get_or_compute(3, || load(calls.clone())),
            ns.get_or_compute(3, || load(calls.clone())),
        );

        assert_eq!(a.unwrap(), "shared");
        assert_eq!(b.unwrap(), "shared");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_purge() {
        let ns: Namespace<u8, u8> = Namespace::new("test", CacheSettings::default());
        for k in 0..3 {
            ns.get_or_compute(k, || async move { Ok(k) }).await.unwrap();
        }
        assert_eq!(ns.len().await, 3);
        assert_eq!(ns.purge().await, 3);
        assert_eq!(ns.len().await, 0);
    }

    #[tokio::test]
    async fn test_time_to_live() {
        let settings = CacheSettings { time_to_live: Some(Duration::from_millis(50)), max_entries: None };
        let ns: Namespace<u8, u8> = Namespace::new("test", settings);

        ns.get_or_compute(1, || async { Ok(1) }).await.unwrap();
        assert_eq!(ns.get(&1).await, Some(1));

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(ns.get(&1).await.is_none());
    }

    #[tokio::test]
    async fn test_max_entries_bounds_namespace() {
        let settings = CacheSettings { time_to_live: None, max_entries: Some(2) };
        let ns: Namespace<u8, u8> = Namespace::new("test", settings);

        for k in 0..6 {
            ns.get_or_compute(k, || async move { Ok(k) }).await.unwrap();
        }

        assert!(ns.len().await <= 2);
    }
}
