// Integration tests for citrusmatch
use citrusmatch::prelude::*;
use serde_json::json;

fn mikan_request() -> UserPreference {
    UserPreference::new(TasteRatings {
        sweetness: 5,
        sourness: 2,
        bitterness: 1,
        aroma: 3,
        juiciness: 5,
        texture: 2,
    })
    .unwrap()
}

#[test]
fn single_row_catalog_end_to_end() {
    let records = vec![json!({
        "id": 1,
        "name": "Mikan",
        "brix": 5,
        "acid": 2,
        "bitterness": 1,
        "aroma": 3,
        "moisture": 5,
        "texture": 2,
        "season": "winter"
    })];
    let catalog = prepare(&RawTable::from_records(&records)).unwrap();

    let user = mikan_request().with_season(Season::Winter);
    let recommendation = Recommender::new().recommend(catalog.items(), &user).unwrap();

    assert_eq!(recommendation.top_ids(), vec![1]);
    let best = &recommendation.results()[0];
    assert_eq!(best.distance, 0.0);
    assert_eq!(best.score, 1.0);
}

#[test]
fn aliased_columns_prepare_and_rank() {
    // A catalog using request-style column names still normalizes: sweetness
    // is a brix alias, sourness an acid alias, juiciness a moisture alias.
    let records = vec![
        json!({
            "title": "Mikan",
            "sweetness": 5,
            "sourness": 2,
            "bitter": 1,
            "smell": 3,
            "juiciness": 5,
            "elastic": 2,
            "in_season": "winter"
        }),
        json!({
            "title": "Hassaku",
            "sweetness": 3,
            "sourness": 4,
            "bitter": 3,
            "smell": 2,
            "juiciness": 3,
            "elastic": 4,
            "in_season": "spring"
        }),
    ];
    let catalog = prepare(&RawTable::from_records(&records)).unwrap();
    assert_eq!(catalog.items()[0].name, "Mikan");

    let recommendation = Recommender::new()
        .recommend(catalog.items(), &mikan_request())
        .unwrap();
    assert_eq!(recommendation.top_ids()[0], 1);
}

#[test]
fn sample_catalog_prefers_the_closest_variety() {
    let catalog = prepare(&sample_table()).unwrap();
    let recommendation = Recommender::new()
        .recommend(catalog.items(), &mikan_request().with_season(Season::Winter))
        .unwrap();

    assert_eq!(recommendation.top_ids().len(), 3);
    assert_eq!(recommendation.top()[0].name, "Mikan");
    for result in recommendation.results() {
        assert!((0.0..=1.0).contains(&result.score));
    }
}

#[test]
fn raw_values_are_clipped_before_scoring() {
    let records = vec![
        json!({
            "name": "wild",
            "brix": 9,
            "acid": 0,
            "bitterness": 1,
            "aroma": 3,
            "moisture": 5,
            "texture": 2
        }),
        json!({
            "name": "tame",
            "brix": 6,
            "acid": 1,
            "bitterness": 1,
            "aroma": 3,
            "moisture": 5,
            "texture": 2
        }),
    ];
    let catalog = prepare(&RawTable::from_records(&records)).unwrap();

    // After clipping, both rows carry identical feature vectors, so they
    // tie and rank alphabetically.
    let user = mikan_request();
    let recommendation = Recommender::new().recommend(catalog.items(), &user).unwrap();
    let results = recommendation.results();
    assert_eq!(results[0].score, results[1].score);
    assert_eq!(results[0].name, "tame");
    assert_eq!(results[1].name, "wild");
}

#[test]
fn missing_feature_columns_fail_loudly() {
    let records = vec![json!({"name": "Mikan", "brix": 5})];
    let err = prepare(&RawTable::from_records(&records)).unwrap_err();
    match err {
        Error::Schema(SchemaError::MissingFeatures { missing, present }) => {
            assert!(missing.contains(&"acid"));
            assert!(present.contains(&"brix".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn cached_catalog_serves_repeat_requests() {
    use std::time::Duration;

    let cache = CatalogCache::new(Duration::from_secs(3600));
    let key = CacheKey::new("sample", 1);

    let mut loads = 0;
    for _ in 0..3 {
        let catalog = cache
            .get_or_insert_with(key.clone(), || {
                loads += 1;
                prepare(&sample_table())
            })
            .unwrap();
        let recommendation = Recommender::new()
            .recommend(catalog.items(), &mikan_request())
            .unwrap();
        assert_eq!(recommendation.top_ids()[0], 1);
    }
    assert_eq!(loads, 1);
}

#[test]
fn repeated_requests_are_deterministic() {
    let catalog = prepare(&sample_table()).unwrap();
    let user = mikan_request().with_season(Season::Winter);

    let ids: Vec<Vec<u64>> = (0..5)
        .map(|_| {
            Recommender::new()
                .recommend(catalog.items(), &user)
                .unwrap()
                .results()
                .iter()
                .map(|r| r.id)
                .collect()
        })
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
}
