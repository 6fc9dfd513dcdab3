use super::*;

#[test]
fn tiers_follow_memory_and_core_thresholds() {
    let profile = |memory_gb, cpu_cores| DeviceProfile {
        memory_gb,
        cpu_cores,
    };
    assert_eq!(quality_tier_for(profile(16, 12)), QualityTier::Ultra);
    assert_eq!(quality_tier_for(profile(8, 8)), QualityTier::Ultra);
    assert_eq!(quality_tier_for(profile(8, 4)), QualityTier::High);
    assert_eq!(quality_tier_for(profile(4, 4)), QualityTier::High);
    assert_eq!(quality_tier_for(profile(2, 8)), QualityTier::Medium);
    assert_eq!(quality_tier_for(profile(2, 2)), QualityTier::Medium);
    assert_eq!(quality_tier_for(profile(1, 8)), QualityTier::Low);
    assert_eq!(quality_tier_for(profile(4, 1)), QualityTier::Low);
}

#[test]
fn tier_settings_scale_monotonically() {
    let tiers = [
        QualityTier::Low,
        QualityTier::Medium,
        QualityTier::High,
        QualityTier::Ultra,
    ];
    for pair in tiers.windows(2) {
        let lower = pair[0].settings();
        let higher = pair[1].settings();
        assert!(lower.shadow_map_size < higher.shadow_map_size);
        assert!(lower.msaa_samples < higher.msaa_samples);
        assert!(lower.max_lights < higher.max_lights);
    }

    assert_eq!(QualityTier::Ultra.settings().max_triangles, None);
    assert_eq!(QualityTier::Low.settings().max_triangles, Some(50_000));
    assert!(!QualityTier::Low.settings().antialias);
    assert!(QualityTier::Low.settings().pixel_ratio_cap == Some(1.0));
}

#[test]
fn mobile_overrides_match_breakpoints() {
    let desktop = mobile_overrides(1440, false);
    assert_eq!(desktop, MobileOverrides::default());

    let tablet = mobile_overrides(700, false);
    assert!(tablet.reduce_quality);
    assert!(tablet.disable_auto_rotate);
    assert!(!tablet.simplify_geometry);

    let phone = mobile_overrides(390, true);
    assert!(phone.simplify_geometry);
    assert!(phone.reduced_animations);
}

#[test]
fn tier_ordering_supports_comparisons() {
    assert!(QualityTier::Low < QualityTier::Medium);
    assert!(QualityTier::High < QualityTier::Ultra);
    assert_eq!(
        serde_json::to_string(&QualityTier::Ultra).unwrap(),
        "\"ultra\""
    );
}
