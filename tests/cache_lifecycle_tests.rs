//! Integration Tests for the Expiring Cache
//!
//! Exercises the public cache surface: add/get, reaping and shutdown.

use std::sync::Arc;
use std::time::Duration;

use pokedex::Cache;

// == Add / Get ==

#[tokio::test]
async fn test_add_then_get_returns_value() {
    let cache = Cache::new(Duration::from_secs(5));

    cache.add("https://example.com", "testdata").await;

    let value = cache.get("https://example.com").await;
    assert_eq!(value.as_deref(), Some(&b"testdata"[..]));
    cache.shutdown().await;
}

#[tokio::test]
async fn test_get_never_inserted_is_none() {
    let cache = Cache::new(Duration::from_secs(5));
    assert!(cache.get("https://example.com").await.is_none());
    assert!(cache.is_empty().await);
    cache.shutdown().await;
}

// == Reaping ==

#[tokio::test(start_paused = true)]
async fn test_entry_reaped_after_interval() {
    let cache = Cache::new(Duration::from_millis(5));

    cache.add("https://example.com", "testdata").await;
    assert!(cache.get("https://example.com").await.is_some());

    // Step just past the 10ms sweep so it has run before the read.
    tokio::time::sleep(Duration::from_millis(11)).await;

    assert!(cache.get("https://example.com").await.is_none());
    cache.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_staleness_bounded_by_two_intervals() {
    let interval = Duration::from_secs(1);
    let cache = Cache::new(interval);

    for i in 0..10u64 {
        cache.add(format!("key_{}", i), vec![i as u8]).await;
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    tokio::time::sleep(interval * 2).await;
    assert!(cache.is_empty().await);
    cache.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_writers_with_active_reaper() {
    // Sweeps at 10, 20, 30, 40 and 50ms while writers add every 3ms until 57ms.
    let cache = Arc::new(Cache::new(Duration::from_millis(10)));

    let handles: Vec<_> = (0..8)
        .map(|writer| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                for i in 0..20u64 {
                    cache
                        .add(format!("https://example.com/{}/{}", writer, i), format!("{}", i))
                        .await;
                    if i < 19 {
                        tokio::time::sleep(Duration::from_millis(3)).await;
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }
    tokio::time::sleep(Duration::from_millis(1)).await;

    // The 50ms sweep removed everything written before 40ms; writes 14..20
    // (42ms onwards) must all be present.
    for writer in 0..8 {
        for i in 0..20u64 {
            let got = cache.get(&format!("https://example.com/{}/{}", writer, i)).await;
            if i >= 14 {
                assert_eq!(got.as_deref(), Some(i.to_string().as_bytes()), "writer {} write {}", writer, i);
            } else {
                assert!(got.is_none(), "writer {} write {} should be reaped", writer, i);
            }
        }
    }
    assert_eq!(cache.len().await, 8 * 6);
    assert!(cache.is_reaping());
}

// == Lifecycle ==

#[tokio::test]
async fn test_many_caches_created_and_released() {
    for _ in 0..100 {
        let cache = Cache::new(Duration::from_secs(3600));
        cache.add("key", "value").await;
        tokio::time::timeout(Duration::from_secs(5), cache.shutdown())
            .await
            .expect("shutdown should complete without waiting for a sweep");
    }
}
