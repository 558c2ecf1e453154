use super::*;

#[test]
fn paths_are_slash_prefixed_segments() {
    for route in AppRoute::ALL {
        assert_eq!(route.path(), format!("/{}", route.segment()));
    }
}

#[test]
fn paths_are_distinct() {
    for (i, a) in AppRoute::ALL.iter().enumerate() {
        for b in &AppRoute::ALL[i + 1..] {
            assert_ne!(a.path(), b.path(), "{a:?} and {b:?} share a path");
        }
    }
}

#[test]
fn only_home_search_and_messages_are_protected() {
    let protected: Vec<ProtectedPage> = ProtectedPage::all().collect();
    assert_eq!(protected, vec![ProtectedPage::Home, ProtectedPage::Search, ProtectedPage::Messages]);
}

#[test]
fn auth_routes_are_not_protected() {
    for route in [AppRoute::Root, AppRoute::Login, AppRoute::Register, AppRoute::ResetPassword] {
        assert_eq!(route.protected_page(), None, "{route:?}");
    }
}

#[test]
fn protected_pages_map_back_to_their_routes() {
    for page in ProtectedPage::all() {
        assert_eq!(page.route().protected_page(), Some(page));
    }
}
