use super::*;
use crate::content::SiteContent;

#[test]
fn known_paths_resolve_to_their_routes() {
    assert_eq!(Route::resolve("/"), Route::Home);
    assert_eq!(Route::resolve("/projects"), Route::Projects);
    assert_eq!(Route::resolve("/posts"), Route::Posts);
    assert_eq!(Route::resolve("/about"), Route::About);
    assert_eq!(Route::resolve("/contact"), Route::Contact);
    assert_eq!(Route::resolve("/status"), Route::Status);
}

#[test]
fn unknown_paths_resolve_to_not_found() {
    assert_eq!(Route::resolve("/nope"), Route::NotFound);
    assert_eq!(Route::resolve(""), Route::NotFound);
    assert_eq!(Route::resolve("/projects/x"), Route::NotFound);
}

#[test]
fn menu_routes_round_trip_through_their_paths() {
    for route in Route::menu() {
        assert_eq!(Route::resolve(route.path()), route);
    }
}

#[test]
fn navigation_updates_route_and_records_the_visit() {
    let mut site = Site::new(SiteContent::embedded(), "/");
    assert_eq!(site.route(), Route::Home);
    assert!(site.visits().is_empty());

    site.navigate("/about");
    assert_eq!(site.route(), Route::About);
    assert_eq!(site.path(), "/about");
    assert_eq!(site.visits(), ["/about"]);
}
