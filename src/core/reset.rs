use crate::core::normalizer::{FilterNormalizer, DEFAULT_PAGE};
use crate::core::registry::{category_of, FilterCategory};
use crate::domain::model::ParameterSet;

/// Clears every property filter while keeping the chosen location.
///
/// The result holds the input's location keys, `page=1` and the default sort.
/// `limit` is carried over only when the input already has one; otherwise the
/// normalizer supplies it downstream.
pub fn reset_filters(normalizer: &FilterNormalizer, params: &ParameterSet) -> ParameterSet {
    let mut reset: ParameterSet = params
        .iter()
        .filter(|(key, _)| category_of(key) == FilterCategory::Location)
        .collect();

    reset.set("page", DEFAULT_PAGE);
    if let Some(limit) = params.get("limit") {
        reset.set("limit", limit);
    }
    reset.set("sortBy", normalizer.default_sort_by());
    reset.set("sortOrder", normalizer.default_sort_order());

    tracing::debug!(
        "Reset filters: kept {} of {} parameters",
        reset.len(),
        params.len()
    );
    reset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::PROPERTY_KEYS;

    fn params(pairs: &[(&str, &str)]) -> ParameterSet {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_reset_keeps_location_and_drops_property() {
        let input = params(&[
            ("state", "CA"),
            ("city", "Oakland"),
            ("minPrice", "100000"),
            ("propertyType", "condo"),
            ("page", "4"),
            ("sortBy", "price"),
            ("sortOrder", "asc"),
            ("ref", "newsletter"),
        ]);

        let result = reset_filters(&FilterNormalizer::default(), &input);

        assert_eq!(
            result,
            params(&[
                ("state", "CA"),
                ("city", "Oakland"),
                ("page", "1"),
                ("sortBy", "listedAt"),
                ("sortOrder", "desc"),
            ])
        );
        assert!(PROPERTY_KEYS.iter().all(|key| !result.contains_key(key)));
        assert!(!result.contains_key("ref"));
    }

    #[test]
    fn test_reset_leaves_limit_untouched() {
        let normalizer = FilterNormalizer::default();

        let with_limit = reset_filters(&normalizer, &params(&[("limit", "48"), ("maxPrice", "9")]));
        assert_eq!(with_limit.get("limit"), Some("48"));

        let without_limit = reset_filters(&normalizer, &params(&[("maxPrice", "9")]));
        assert!(!without_limit.contains_key("limit"));
    }

    #[test]
    fn test_reset_twice_is_same_as_once() {
        let normalizer = FilterNormalizer::default();
        let input = params(&[("zipCode", "94110"), ("search", "loft"), ("limit", "24")]);

        let once = reset_filters(&normalizer, &input);
        let twice = reset_filters(&normalizer, &once);
        assert_eq!(once, twice);
    }
}
