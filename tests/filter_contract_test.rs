use listing_route::core::registry::{is_recognized, PROPERTY_KEYS};
use listing_route::{
    reset_filters, AccessDecision, Credential, FilterNormalizer, GuardRequest, PageUrlBuilder,
    PaginationState, ParameterSet, RouteConfig, RouteGuard,
};

fn sample_queries() -> Vec<&'static str> {
    vec![
        "",
        "state=CA",
        "?state=CA&city=Fresno&minPrice=200000&page=2&utm_campaign=x",
        "page=-1&limit=abc&sortOrder=ASC&sortBy=price&amenities=pool%2Cgym",
        "search=ocean+view&isFeatured=true&radius=25&latitude=36.6&longitude=-121.9&fbclid=1",
        "state=&page=0&limit=0",
    ]
}

/// 測試正規化的冪等性與未知參數移除
#[test]
fn test_normalize_properties_over_sample_queries() {
    let normalizer = FilterNormalizer::default();

    for query in sample_queries() {
        let raw = ParameterSet::parse_query(query);
        let once = normalizer.normalize(&raw);
        let twice = normalizer.normalize(&once);

        assert_eq!(once, twice, "normalize not idempotent for {:?}", query);
        assert!(
            once.keys().all(is_recognized),
            "unknown key survived for {:?}: {}",
            query,
            once
        );
        for key in ["page", "limit", "sortBy", "sortOrder"] {
            assert!(once.contains_key(key), "{} missing for {:?}", key, query);
        }
    }
}

#[test]
fn test_reset_properties_over_sample_queries() {
    let normalizer = FilterNormalizer::default();

    for query in sample_queries() {
        let raw = ParameterSet::parse_query(query);
        let reset = reset_filters(&normalizer, &raw);

        assert!(PROPERTY_KEYS.iter().all(|key| !reset.contains_key(key)));
        for key in ["state", "city", "neighborhood", "zipCode", "latitude", "longitude", "radius"] {
            assert_eq!(reset.get(key), raw.get(key), "location key {} changed", key);
        }
        assert_eq!(reset.get("page"), Some("1"));
        assert_eq!(reset_filters(&normalizer, &reset), reset);
    }
}

#[test]
fn test_search_flow_normalize_then_paginate() {
    let config = RouteConfig::default();
    let normalizer = FilterNormalizer::new(&config);
    let builder = PageUrlBuilder::new(config.routes.results_path.clone());

    let params = normalizer.normalize(&ParameterSet::parse_query("state=CA&page=2&ref=home"));
    let state = PaginationState::new(2, 12, 30);

    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.display_range().to_string(), "Showing 13 to 24 of 30 results");
    assert_eq!(
        builder.page_url(&params, 3),
        "/results?state=CA&page=3&limit=12&sortBy=listedAt&sortOrder=desc"
    );
}

#[test]
fn test_page_url_keeps_existing_keys_only() {
    let builder = PageUrlBuilder::default();
    let params: ParameterSet = [("state", "CA"), ("page", "2")].into_iter().collect();

    let url = builder.page_url(&params, 5);
    assert!(url.contains("state=CA&page=5"));
    assert_eq!(url.matches('=').count(), 2);
}

#[test]
fn test_guard_decisions() {
    let guard = RouteGuard::new(&RouteConfig::default());
    let decide = |target: &str, credential: Credential| {
        guard.decide(&GuardRequest::from_target(target, credential))
    };

    assert_eq!(
        decide("/profile/edit", Credential::anonymous()),
        AccessDecision::RedirectUnauthenticated("/signin".to_string())
    );
    assert_eq!(decide("/results?state=CA", Credential::anonymous()), AccessDecision::Allow);
    assert_eq!(
        decide("/results", Credential::anonymous()),
        AccessDecision::RedirectMissingState("/".to_string())
    );
    assert_eq!(
        decide("/results?state=%20", Credential::anonymous()),
        AccessDecision::RedirectMissingState("/".to_string())
    );

    let cookie = Credential::from_cookie_header("token=xyz; theme=dark", "token");
    assert_eq!(decide("/profile/edit", cookie), AccessDecision::Allow);
}
