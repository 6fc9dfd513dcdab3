use super::*;

#[test]
fn ratios_are_keyed_by_asset_family() {
    let ferrari = estimate_compression("/models/2016_ferrari_488_gtb.glb", 40.0);
    assert_eq!(ferrari.compression_ratio_pct, 75.0);
    assert_eq!(ferrari.compressed_size_mb, 10.0);

    let lambo = estimate_compression("/models/lamborghini_huracan_evo.glb", 40.0);
    assert_eq!(lambo.compression_ratio_pct, 65.0);
    assert_eq!(lambo.compressed_size_mb, 14.0);

    let other = estimate_compression("/models/mclaren_720s.glb", 40.0);
    assert_eq!(other.compression_ratio_pct, 70.0);
    assert_eq!(other.compressed_size_mb, 12.0);
}

#[test]
fn load_time_uses_connection_buckets() {
    assert_eq!(estimate_load_time(8.0, ConnectionSpeed::Fast), 1.0);
    assert_eq!(estimate_load_time(8.0, ConnectionSpeed::Medium), 4.0);
    assert_eq!(estimate_load_time(8.0, ConnectionSpeed::Slow), 16.0);
    // Rounded to a tenth of a second.
    assert_eq!(estimate_load_time(1.0, ConnectionSpeed::Slow), 2.0);
    assert_eq!(estimate_load_time(0.333, ConnectionSpeed::Fast), 0.0);
    assert_eq!(estimate_load_time(1.23, ConnectionSpeed::Medium), 0.6);
}

#[test]
fn estimate_includes_fast_connection_load_time() {
    let e = estimate_compression("/models/mclaren_720s.glb", 40.0);
    assert_eq!(e.estimated_load_time_s, estimate_load_time(12.0, ConnectionSpeed::Fast));
}

#[test]
fn recommendations_follow_size_thresholds() {
    let models = vec![
        ModelInfo {
            name: "Ferrari 488".to_string(),
            path: "/models/2016_ferrari_488_gtb.glb".to_string(),
            size_mb: 60.0,
        },
        ModelInfo {
            name: "Huracán".to_string(),
            path: "/models/lamborghini_huracan_evo.glb".to_string(),
            size_mb: 30.0,
        },
        ModelInfo {
            name: "720S".to_string(),
            path: "/models/mclaren_720s.glb".to_string(),
            size_mb: 12.0,
        },
        ModelInfo {
            name: "Placeholder".to_string(),
            path: "/models/box.glb".to_string(),
            size_mb: 1.0,
        },
    ];

    let recs = compression_recommendations(&models);
    assert_eq!(recs.len(), 3);
    assert!(recs[0].contains("DRACO"));
    assert!(recs[1].contains("LOD"));
    assert!(recs[2].contains("merge"));
}

#[test]
fn small_models_get_the_all_clear() {
    let models = vec![ModelInfo {
        name: "Tiny".to_string(),
        path: "/models/tiny.glb".to_string(),
        size_mb: 2.0,
    }];
    assert_eq!(
        compression_recommendations(&models),
        vec!["All models are already well optimized".to_string()]
    );

    assert_eq!(
        compression_recommendations(&[]),
        vec!["All models are already well optimized".to_string()]
    );
}

#[test]
fn strategy_table_is_complete() {
    let strategies = compression_strategies();
    assert_eq!(strategies.len(), 4);
    assert_eq!(strategies[0].size_reduction_pct, 85);
    assert_eq!(strategies[3].quality_loss_pct, 0);
    // Serializable for the dashboard payload.
    let json = serde_json::to_string(&strategies).unwrap();
    assert!(json.contains("DRACO"));
}
