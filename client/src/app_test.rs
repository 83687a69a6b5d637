use super::*;

#[test]
fn stylesheet_path_matches_site_name() {
    assert!(asset_url(&format!("pkg/{SITE_NAME}.css")).ends_with("pkg/skillhunter.css"));
}
