//! Per-leaf query-string matching: strict arity, the `*` any-value and
//! catch-all-query markers, and `:name` query binding.

use urlmux::Router;

#[test]
fn strict_arity_rejects_unregistered_extra_parameters() {
    let mut router = Router::new();
    router.add_route("GET", "https://test.net/x?a=1", 1).unwrap();

    assert!(router.lookup("GET", "https://test.net/x?a=1").unwrap().is_some());
    assert!(router.lookup("GET", "https://test.net/x?a=1&b=2").unwrap().is_none());
}

#[test]
fn catch_all_query_marker_permits_additional_parameters() {
    let mut router = Router::new();
    router.add_route("GET", "https://test.net/x?a=1&*", 1).unwrap();

    assert!(router.lookup("GET", "https://test.net/x?a=1").unwrap().is_some());
    assert!(router.lookup("GET", "https://test.net/x?a=1&b=2").unwrap().is_some());
}

#[test]
fn query_literal_value_must_match_exactly() {
    let mut router = Router::new();
    router.add_route("GET", "https://test.net:443/v1/authinit?format=json&*", 1).unwrap();

    let found = router.lookup("GET", "https://test.net:443/v1/authinit?format=json&token=12&code=9").unwrap();
    assert!(found.is_some());

    assert!(router.lookup("GET", "https://test.net:443/v1/authinit?format=xml&token=12&code=9").unwrap().is_none());
}

#[test]
fn sibling_query_shapes_select_distinct_leaves() {
    let mut router = Router::new();
    router.add_route("GET", "https://api.github.com/repos/*?format=json&token=*&id=:id", 6).unwrap();
    router.add_route("GET", "https://api.github.com/repos/*?format=json&token=:token", 7).unwrap();
    router.add_route("GET", "https://api.github.com/repos/*?token=*&format=xml", 8).unwrap();

    let found = router
        .lookup("GET", "https://api.github.com/repos/repo-1?format=json&token=123456&id=12")
        .unwrap()
        .unwrap();
    assert_eq!(found.value, &6);
    assert_eq!(found.query_params.get("id"), Some("12"));

    let found =
        router.lookup("GET", "https://api.github.com/repos/repo-1/update?format=json&token=8797").unwrap().unwrap();
    assert_eq!(found.value, &7);
    assert_eq!(found.query_params.get("token"), Some("8797"));

    let found = router.lookup("GET", "https://api.github.com/repos/repo-2?format=xml&token=1234").unwrap().unwrap();
    assert_eq!(found.value, &8);
    assert!(found.query_params.is_empty());
}

#[test]
fn a_request_matching_no_registered_query_shape_is_rejected() {
    let mut router = Router::new();
    router.add_route("GET", "https://api.github.com/repos/*?format=json&token=*&id=:id", 6).unwrap();
    router.add_route("GET", "https://api.github.com/repos/*?token=*&format=xml", 8).unwrap();

    assert!(router.lookup("GET", "https://api.github.com/repos/repo-2?format=xml&token=1234&id=78").unwrap().is_none());
}

#[test]
fn duplicate_query_shape_is_rejected_at_registration() {
    use urlmux::InsertError;

    let mut router = Router::new();
    router.add_route("GET", "https://test.net/x?a=1&*", 1).unwrap();
    let err = router.add_route("GET", "https://test.net/x?a=1&*", 2).unwrap_err();
    assert_eq!(err, InsertError::AlreadyAdded);
}

#[test]
fn query_key_order_does_not_affect_the_query_shape() {
    use urlmux::InsertError;

    let mut router = Router::new();
    router.add_route("GET", "https://api.github.com/v1/authtoken?user=:user_id&api_key=*&format=json", 1).unwrap();
    let err = router
        .add_route("GET", "https://api.github.com/v1/authtoken?format=json&api_key=*&user=:user_id", 2)
        .unwrap_err();
    assert_eq!(err, InsertError::AlreadyAdded);
}

#[test]
fn percent_decoded_query_values_are_compared_byte_equal() {
    // https://test.net/disco/breadcrumb/offers?...&breadcrumb=Home%2FMen%2FAll%20Men&...
    let mut router = Router::new();
    router
        .add_route(
            "GET",
            "https://test.net/disco/breadcrumb/offers?orderby=Boosted&breadcrumb=Home%2FMen%2FAll%20Men&category=mens-view-all",
            101,
        )
        .unwrap();

    let found = router
        .lookup(
            "GET",
            "https://test.net/disco/breadcrumb/offers?orderby=Boosted&breadcrumb=Home%2FMen%2FAll%20Men&category=mens-view-all",
        )
        .unwrap()
        .unwrap();
    assert_eq!(found.value, &101);

    assert!(router
        .lookup(
            "GET",
            "https://test.net/disco/breadcrumb/offers?orderby=Boosted&breadcrumb=Home/Men/Some%20Men&category=mens-view-all",
        )
        .unwrap()
        .is_none());
}

#[test]
fn empty_query_value_matches_only_an_empty_request_value() {
    let mut router = Router::new();
    router
        .add_route(
            "GET",
            "https://test.net/v1.2/styleservice/style/4618153/shippingdescription?format=json&apikey=*&postalcode=",
            105,
        )
        .unwrap();

    let found = router
        .lookup(
            "GET",
            "https://test.net/v1.2/styleservice/style/4618153/shippingdescription?format=json&apikey=GQZExhNLtY7e4kiFCuZAaw72rkSUcFuY&postalcode=",
        )
        .unwrap();
    assert!(found.is_some());

    assert!(router
        .lookup(
            "GET",
            "https://test.net/v1.2/styleservice/style/4618153/shippingdescription?format=json&apikey=GQZExhNLtY7e4kiFCuZAaw72rkSUcFuY&postalcode=12345",
        )
        .unwrap()
        .is_none());
}

#[test]
fn multi_value_query_keys_are_joined_with_comma_before_matching() {
    let mut router = Router::new();
    router.add_route("GET", "https://test.net/tags?tag=a,b", 1).unwrap();

    assert!(router.lookup("GET", "https://test.net/tags?tag=a&tag=b").unwrap().is_some());
    assert!(router.lookup("GET", "https://test.net/tags?tag=a").unwrap().is_none());
}
