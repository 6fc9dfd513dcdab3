use super::*;

#[test]
fn rotation_speed_doubles_on_hover() {
    let idle = rotation_step(false, 0.01);
    let hovered = rotation_step(true, 0.01);
    assert!((idle - 0.15 * 0.01).abs() < 1e-7);
    assert!((hovered - 0.3 * 0.01).abs() < 1e-7);
}

#[test]
fn rotation_delta_is_capped_at_sixty_fps() {
    // 50ms frame advances no further than a 16.6ms frame would.
    assert_eq!(rotation_step(false, 0.05), rotation_step(false, 1.0 / 60.0));
}

#[test]
fn rotation_stalls_on_large_deltas() {
    assert_eq!(rotation_step(false, 0.1), 0.0);
    assert_eq!(rotation_step(true, 2.0), 0.0);
    assert_eq!(rotation_step(false, 0.0), 0.0);
    assert_eq!(rotation_step(false, -0.5), 0.0);
    assert_eq!(rotation_step(false, f32::NAN), 0.0);
}

#[test]
fn tick_respects_auto_rotate_toggle() {
    let mut controls = ControlsState::new();
    assert!(controls.auto_rotate);

    controls.tick(0.01);
    let after_one = controls.rotation_y;
    assert!(after_one > 0.0);

    assert!(!controls.toggle_auto_rotate());
    controls.tick(0.01);
    assert_eq!(controls.rotation_y, after_one);

    controls.reset_camera();
    assert_eq!(controls.rotation_y, 0.0);
}

#[test]
fn hover_scale_and_environment_defaults() {
    let mut controls = ControlsState::new();
    assert_eq!(controls.environment, Environment::Studio);
    assert_eq!(controls.hover_scale(), 1.0);

    controls.set_hovered(true);
    assert_eq!(controls.hover_scale(), HOVER_SCALE);

    controls.set_environment(Environment::Sunset);
    assert_eq!(controls.environment, Environment::Sunset);
}

#[test]
fn environment_labels_cover_all_presets() {
    assert_eq!(Environment::ALL.len(), 5);
    for env in Environment::ALL {
        assert!(!env.label().is_empty());
    }
    assert_eq!(
        serde_json::to_string(&Environment::Warehouse).unwrap(),
        "\"warehouse\""
    );
}
