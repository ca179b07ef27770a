use super::*;

#[test]
fn toggle_shows_sun_in_dark_mode() {
    assert_eq!(toggle_icon(true), IconKind::Sun);
    assert_eq!(toggle_icon(false), IconKind::Moon);
}

#[test]
fn toggle_label_names_target_mode() {
    assert_eq!(toggle_label(true), "Light Mode");
    assert_eq!(toggle_label(false), "Dark Mode");
}
