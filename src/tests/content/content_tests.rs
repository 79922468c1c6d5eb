use super::*;

#[test]
fn embedded_content_parses_and_is_populated() {
    let content = SiteContent::embedded();
    assert!(!content.identity.name.is_empty());
    assert!(!content.identity.home.is_empty());
    assert!(content.identity.email.contains('@'));
    assert!(!content.projects.is_empty());
    assert!(!content.posts.is_empty());
    assert!(!content.stack.is_empty());
    assert!(!content.contact.is_empty());
}

#[test]
fn load_reports_missing_files_with_the_path() {
    let err = SiteContent::load(std::path::Path::new("/nonexistent/site.json"))
        .expect_err("missing file must fail");
    assert!(format!("{:#}", err).contains("/nonexistent/site.json"));
}

#[test]
fn content_round_trips_through_json() {
    let content = SiteContent::embedded();
    let json = serde_json::to_string(&content).expect("serialize");
    let back: SiteContent = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back.identity.name, content.identity.name);
    assert_eq!(back.projects.len(), content.projects.len());
}
