use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, OnceCell};

use crate::services::stats_client::StatsSource;

/// Ratings looked up during one run, keyed by external id.
///
/// The first caller for an id performs the fetch while concurrent callers for
/// the same id wait on the same cell, so the stats source sees at most one
/// request per id for the lifetime of the cache. Failed lookups are cached as 0.
#[derive(Default)]
pub struct RatingCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<u32>>>>,
}

impl RatingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn rating(&self, source: &dyn StatsSource, external_id: &str) -> u32 {
        let cell = {
            let mut entries = self.entries.lock().await;
            entries.entry(external_id.to_string()).or_default().clone()
        };
        *cell
            .get_or_init(|| async {
                tracing::debug!("rating cache miss for {}", external_id);
                source.profile_stats(external_id).await.rating
            })
            .await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{
        collections::HashMap,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::services::stats_client::{ArchivedGame, ProfileStats};

    /// In-memory stats source that counts profile lookups per id.
    #[derive(Default)]
    pub struct CountingSource {
        pub ratings: HashMap<String, u32>,
        pub calls: std::sync::Mutex<HashMap<String, usize>>,
        pub total: AtomicUsize,
        pub delay: Option<Duration>,
    }

    impl CountingSource {
        pub fn with_ratings(ratings: &[(&str, u32)]) -> Self {
            Self {
                ratings: ratings.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
                ..Default::default()
            }
        }

        pub fn calls_for(&self, id: &str) -> usize {
            self.calls.lock().unwrap().get(id).copied().unwrap_or(0)
        }
    }

    #[async_trait]
    impl StatsSource for CountingSource {
        async fn profile_stats(&self, external_id: &str) -> ProfileStats {
            self.total.fetch_add(1, Ordering::SeqCst);
            *self
                .calls
                .lock()
                .unwrap()
                .entry(external_id.to_string())
                .or_default() += 1;
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            ProfileStats {
                rating: self.ratings.get(external_id).copied().unwrap_or(0),
                ..Default::default()
            }
        }

        async fn archive_urls(&self, _external_id: &str) -> Vec<String> {
            Vec::new()
        }

        async fn archive_games(&self, _url: &str) -> Vec<ArchivedGame> {
            Vec::new()
        }
    }

    #[tokio::test]
    async fn fetches_each_id_once() {
        let source = CountingSource::with_ratings(&[("tal", 2705), ("petrosian", 2690)]);
        let cache = RatingCache::new();
        for _ in 0..5 {
            assert_eq!(cache.rating(&source, "tal").await, 2705);
        }
        assert_eq!(cache.rating(&source, "petrosian").await, 2690);
        assert_eq!(source.calls_for("tal"), 1);
        assert_eq!(source.calls_for("petrosian"), 1);
        assert_eq!(source.total.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn unknown_ids_are_cached_as_zero() {
        let source = CountingSource::default();
        let cache = RatingCache::new();
        assert_eq!(cache.rating(&source, "ghost").await, 0);
        assert_eq!(cache.rating(&source, "ghost").await, 0);
        assert_eq!(source.calls_for("ghost"), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_lookups_share_one_fetch() {
        let source = Arc::new(CountingSource {
            delay: Some(Duration::from_millis(20)),
            ..CountingSource::with_ratings(&[("botvinnik", 2616)])
        });
        let cache = Arc::new(RatingCache::new());
        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..16 {
            let source = source.clone();
            let cache = cache.clone();
            tasks.spawn(async move { cache.rating(source.as_ref(), "botvinnik").await });
        }
        while let Some(rating) = tasks.join_next().await {
            assert_eq!(rating.unwrap(), 2616);
        }
        assert_eq!(source.total.load(Ordering::SeqCst), 1);
    }
}
