mod common;

use dog_breeds::prelude::*;
use std::sync::Arc;

#[tokio::test]
async fn test_hound_and_cat_scenario() {
    let (local, cache) = common::create_local_cache();

    assert_eq!(
        cache.get_sub_breeds("hound").await.unwrap(),
        common::hound_sub_breeds()
    );
    assert_eq!(cache.calls_made(), 1);

    assert_eq!(
        cache.get_sub_breeds("HOUND").await.unwrap(),
        common::hound_sub_breeds()
    );
    assert_eq!(cache.calls_made(), 1);

    let err = cache.get_sub_breeds("cat").await.unwrap_err();
    assert_eq!(err, BreedNotFound::new("cat"));
    assert_eq!(cache.calls_made(), 2);

    assert!(cache.get_sub_breeds("cat").await.is_err());
    assert_eq!(cache.calls_made(), 3);

    assert_eq!(local.calls(), cache.calls_made());
    assert_eq!(cache.cached_breeds(), 1);
}

#[tokio::test]
async fn test_one_miss_then_one_hit() {
    let (local, cache) = common::create_local_cache();
    assert_eq!(cache.calls_made(), 0);

    cache.get_sub_breeds("hound").await.unwrap();
    cache.get_sub_breeds("hound").await.unwrap();

    assert_eq!(cache.calls_made(), 1);
    assert_eq!(local.calls(), 1);
}

#[tokio::test]
async fn test_mixed_case_first_lookup() {
    let (_local, cache) = common::create_local_cache();

    cache.get_sub_breeds("HoUnD").await.unwrap();
    cache.get_sub_breeds("hound").await.unwrap();
    cache.get_sub_breeds("Hound").await.unwrap();

    assert_eq!(cache.calls_made(), 1);
}

#[tokio::test]
async fn test_instances_do_not_share_state() {
    let local = Arc::new(LocalBreedFetcher::new());
    let first = CachingBreedFetcher::new(local.clone());
    let second = CachingBreedFetcher::new(local.clone());

    first.get_sub_breeds("hound").await.unwrap();
    second.get_sub_breeds("hound").await.unwrap();
    second.get_sub_breeds("hound").await.unwrap();

    assert_eq!(first.calls_made(), 1);
    assert_eq!(second.calls_made(), 1);
    assert_eq!(local.calls(), 2);
}

#[tokio::test]
async fn test_service_over_cache_counts_not_found_as_zero() {
    let (_local, cache) = common::create_local_cache();
    let cache = Arc::new(cache);
    let service = BreedService::new(cache.clone());

    assert_eq!(service.count_sub_breeds("hound").await, 2);
    assert_eq!(service.count_sub_breeds("Hound").await, 2);
    assert_eq!(service.count_sub_breeds("cat").await, 0);
    assert_eq!(service.count_sub_breeds("cat").await, 0);

    assert_eq!(cache.calls_made(), 3);
}

#[tokio::test]
async fn test_cache_over_dog_api() {
    let mut server = mockito::Server::new_async().await;
    let hound = server
        .mock("GET", "/api/breed/hound/list")
        .with_status(200)
        .with_body(r#"{"status":"success","message":["afghan","basset"]}"#)
        .expect(1)
        .create_async()
        .await;
    let cat = server
        .mock("GET", "/api/breed/cat/list")
        .with_status(404)
        .with_body(r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#)
        .expect(2)
        .create_async()
        .await;

    let remote = DogApiBreedFetcher::new(
        &format!("{}/api/breed/", server.url()),
        std::time::Duration::from_secs(5),
    )
    .unwrap();
    let cache = CachingBreedFetcher::new(Arc::new(remote));

    assert_eq!(cache.get_sub_breeds("Hound").await.unwrap(), vec!["afghan", "basset"]);
    assert_eq!(cache.get_sub_breeds("hound").await.unwrap(), vec!["afghan", "basset"]);
    assert!(cache.get_sub_breeds("cat").await.is_err());
    assert!(cache.get_sub_breeds("CAT").await.is_err());

    assert_eq!(cache.calls_made(), 3);
    hound.assert_async().await;
    cat.assert_async().await;
}
