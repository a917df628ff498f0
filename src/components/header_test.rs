use super::*;
use crate::state::session::region_visibility;

// =============================================================
// Display adapter
// =============================================================

#[test]
fn display_value_maps_visible_to_region_style() {
    assert_eq!(display_value(true, "inline-block"), "inline-block");
    assert_eq!(display_value(true, "flex"), "flex");
}

#[test]
fn display_value_maps_hidden_to_none() {
    assert_eq!(display_value(false, "inline-block"), "none");
    assert_eq!(display_value(false, "flex"), "none");
}

#[test]
fn logged_out_header_shows_auth_buttons_and_hides_menu() {
    let visibility = region_visibility(false);
    assert_eq!(display_value(visibility.login_control, "inline-block"), "inline-block");
    assert_eq!(display_value(visibility.register_control, "inline-block"), "inline-block");
    assert_eq!(display_value(visibility.user_menu, "flex"), "none");
    assert_eq!(display_value(visibility.profile_control, "inline-block"), "none");
}

#[test]
fn logged_in_header_shows_menu_and_hides_auth_buttons() {
    let visibility = region_visibility(true);
    assert_eq!(display_value(visibility.login_control, "inline-block"), "none");
    assert_eq!(display_value(visibility.register_control, "inline-block"), "none");
    assert_eq!(display_value(visibility.user_menu, "flex"), "flex");
    assert_eq!(display_value(visibility.profile_control, "inline-block"), "inline-block");
}
