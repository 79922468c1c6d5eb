use super::*;

#[test]
fn root_path_mounts_as_hero() {
    assert_eq!(ModeState::at_path("/").mode(), Mode::Hero);
}

#[test]
fn non_root_deep_link_mounts_as_collapsed() {
    assert_eq!(ModeState::at_path("/about").mode(), Mode::Collapsed);
}

#[test]
fn toggle_opens_and_closes_the_overlay_off_root() {
    let mut m = ModeState::at_path("/about");
    m.toggle_overlay();
    assert_eq!(m.mode(), Mode::Overlay);
    m.toggle_overlay();
    assert_eq!(m.mode(), Mode::Collapsed);
}

#[test]
fn toggle_is_ignored_on_the_root_path() {
    let mut m = ModeState::at_path("/");
    m.toggle_overlay();
    assert_eq!(m.mode(), Mode::Hero);
    // Leaving the root afterward must not carry a phantom request.
    m.path_changed("/about");
    assert_eq!(m.mode(), Mode::Collapsed);
}

#[test]
fn returning_to_root_forces_hero_and_drops_the_request() {
    let mut m = ModeState::at_path("/about");
    m.toggle_overlay();
    assert_eq!(m.mode(), Mode::Overlay);

    m.path_changed("/");
    assert_eq!(m.mode(), Mode::Hero);

    // Re-opening is required after a round trip through the root.
    m.path_changed("/about");
    assert_eq!(m.mode(), Mode::Collapsed);
}

#[test]
fn overlay_survives_navigation_between_non_root_pages() {
    let mut m = ModeState::at_path("/about");
    m.toggle_overlay();
    m.path_changed("/projects");
    assert_eq!(m.mode(), Mode::Overlay);
}
