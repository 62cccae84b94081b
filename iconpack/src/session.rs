//! Per-session memoization of the aggregated icon set.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::OnceCell;

/// Holds at most one value for the lifetime of a build session.
///
/// The first caller of [`get_or_populate`](Self::get_or_populate) runs the
/// population future; concurrent callers wait for it and share its result.
/// A failed population leaves the cache empty, so the next call retries.
#[derive(Debug)]
pub struct SessionCache<T> {
    cell: OnceCell<Arc<T>>,
}

impl<T> Default for SessionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SessionCache<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, populating it on first use.
    pub async fn get_or_populate<F, Fut, E>(&self, populate: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let value = self
            .cell
            .get_or_try_init(|| async move { populate().await.map(Arc::new) })
            .await?;
        Ok(Arc::clone(value))
    }

    /// The cached value, if populated.
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    pub fn is_populated(&self) -> bool {
        self.cell.initialized()
    }

    /// Drop the cached value so the next access repopulates.
    pub fn evict(&mut self) -> Option<Arc<T>> {
        self.cell.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_populates_once() {
        let cache = SessionCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_populate(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(42)
                })
                .await
                .unwrap();
            assert_eq!(*value, 42);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(cache.is_populated());
    }

    #[tokio::test]
    async fn test_failure_leaves_cache_empty() {
        let cache: SessionCache<u32> = SessionCache::new();

        let err = cache
            .get_or_populate(|| async { Err::<u32, _>("registry down".to_string()) })
            .await
            .unwrap_err();
        assert_eq!(err, "registry down");
        assert!(!cache.is_populated());

        let value = cache
            .get_or_populate(|| async { Ok::<_, String>(7) })
            .await
            .unwrap();
        assert_eq!(*value, 7);
    }

    #[tokio::test]
    async fn test_concurrent_first_callers_share_population() {
        let cache = Arc::new(SessionCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                cache
                    .get_or_populate(|| async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(20)).await;
                        Ok::<_, String>("icons".to_string())
                    })
                    .await
                    .unwrap()
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap().as_str(), "icons");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_evict_forces_repopulation() {
        let mut cache = SessionCache::new();

        cache
            .get_or_populate(|| async { Ok::<_, String>(1) })
            .await
            .unwrap();
        assert_eq!(cache.evict().as_deref(), Some(&1));
        assert!(cache.get().is_none());

        let value = cache
            .get_or_populate(|| async { Ok::<_, String>(2) })
            .await
            .unwrap();
        assert_eq!(*value, 2);
    }
}
