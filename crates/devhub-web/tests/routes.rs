// Route table and navigation entry derivation.
// cargo test -p devhub-web --test routes

use devhub_web::error::NavError;
use devhub_web::models::{NavEntries, NavIcon, NavId};
use devhub_web::routes::{resolve, route_table, Route};
use rstest::*;

#[fixture]
fn entries() -> NavEntries {
    NavEntries::standard()
}

#[rstest]
#[case(1, "Dashboard", "/dashboard", NavIcon::Dashboard)]
#[case(2, "Projects", "/projects", NavIcon::Projects)]
#[case(3, "Pipelines", "/pipelines", NavIcon::Pipelines)]
#[case(4, "Repos", "/repos", NavIcon::Repos)]
#[case(5, "Environments", "/environments", NavIcon::Environments)]
#[case(6, "Agents", "/agents", NavIcon::Agents)]
#[case(7, "Automations", "/automations", NavIcon::Automations)]
#[case(8, "Security", "/security", NavIcon::Security)]
#[case(9, "Extensions", "/extensions", NavIcon::Extensions)]
fn nav_entries_match_sections(
    entries: NavEntries,
    #[case] id: u32,
    #[case] label: &str,
    #[case] path: &str,
    #[case] icon: NavIcon,
) {
    let entry = entries.get(NavId::new(id)).unwrap();

    assert_eq!(entry.label, label);
    assert_eq!(entry.path(), path);
    assert_eq!(entry.icon, icon);
}

#[rstest]
fn nav_ids_are_dense_from_one(entries: NavEntries) {
    let ids: Vec<u32> = entries.iter().map(|entry| entry.id.get()).collect();

    assert_eq!(ids, (1..=9).collect::<Vec<_>>());
    assert_eq!(entries.first_id(), NavId::FIRST);
}

#[rstest]
fn nav_entries_exclude_landing_and_not_found(entries: NavEntries) {
    assert!(entries
        .iter()
        .all(|entry| entry.route != Route::Landing && entry.route != Route::NotFound));
}

#[rstest]
fn lookup_of_missing_id_fails(entries: NavEntries) {
    assert_eq!(entries.get(NavId::new(0)), Err(NavError::UnknownEntry(NavId::new(0))));
    assert_eq!(entries.get(NavId::new(10)), Err(NavError::UnknownEntry(NavId::new(10))));
    assert_eq!(
        NavError::UnknownEntry(NavId::new(10)).to_string(),
        "Unknown navigation entry: 10"
    );
}

#[rstest]
fn every_nav_entry_has_a_route_table_entry(entries: NavEntries) {
    let table = route_table();

    for entry in entries.iter() {
        assert!(
            table.iter().any(|row| row.path == entry.path() && row.route == entry.route),
            "missing route for {}",
            entry.path()
        );
    }
}

#[rstest]
fn route_table_has_root_plus_one_per_entry(entries: NavEntries) {
    let table = route_table();

    assert_eq!(table.len(), entries.iter().count() + 1);
    assert_eq!(table[0].path, "/");
    assert_eq!(table[0].route, Route::Landing);
    assert!(table.iter().all(|row| row.route != Route::NotFound));
}

#[rstest]
fn every_registered_path_resolves_to_itself() {
    for row in route_table() {
        assert_eq!(resolve(&row.path), row.route);
    }
}

#[rstest]
#[case("/")]
#[case("/dashboard")]
#[case("/security")]
fn resolve_is_exact_match(#[case] path: &str) {
    assert_ne!(resolve(path), Route::NotFound);
}

#[rstest]
#[case("/unknown")]
#[case("/dashboard/")]
#[case("/Dashboard")]
#[case("/projects/42")]
#[case("")]
#[case("/404")]
fn unregistered_paths_resolve_to_not_found(#[case] path: &str) {
    assert_eq!(resolve(path), Route::NotFound);
}

#[rstest]
fn find_by_path_uses_exact_match(entries: NavEntries) {
    assert_eq!(entries.find_by_path("/repos").map(|e| e.id), Some(NavId::new(4)));
    assert!(entries.find_by_path("/repos/").is_none());
    assert!(entries.find_by_path("/").is_none());
}

#[rstest]
fn section_paths_with_trailing_slash_are_not_found(entries: NavEntries) {
    for entry in entries.iter() {
        let path = format!("{}/", entry.path());
        assert_eq!(resolve(&path), Route::NotFound, "{} must not match", path);
    }
}

#[rstest]
#[case(Route::Landing, false)]
#[case(Route::NotFound, false)]
#[case(Route::Dashboard, true)]
#[case(Route::Pipelines, true)]
#[case(Route::Extensions, true)]
fn only_sections_render_inside_the_sidebar_layout(#[case] route: Route, #[case] expected: bool) {
    assert_eq!(route.has_sidebar(), expected);
}

#[rstest]
fn every_nav_entry_renders_inside_the_sidebar_layout(entries: NavEntries) {
    assert!(entries.iter().all(|entry| entry.route.has_sidebar()));
}

#[rstest]
fn fallback_pages_have_labels() {
    assert_eq!(Route::Landing.label(), "Home");
    assert_eq!(Route::NotFound.label(), "Not Found");
}
