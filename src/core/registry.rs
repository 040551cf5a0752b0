use serde::{Deserialize, Serialize};

/// Group a recognised query key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Location,
    Property,
    System,
    Unknown,
}

pub const LOCATION_KEYS: &[&str] = &[
    "state",
    "city",
    "neighborhood",
    "zipCode",
    "latitude",
    "longitude",
    "radius",
];

pub const PROPERTY_KEYS: &[&str] = &[
    "propertyType",
    "propertyFor",
    "minPrice",
    "maxPrice",
    "minBedrooms",
    "maxBedrooms",
    "minBathrooms",
    "maxBathrooms",
    "minSize",
    "maxSize",
    "amenities",
    "priceType",
    "includesUtilities",
    "yearBuiltFrom",
    "yearBuiltTo",
    "minFloors",
    "maxFloors",
    "minParking",
    "maxParking",
    "isFeatured",
    "isPremium",
    "search",
];

pub const SYSTEM_KEYS: &[&str] = &["page", "limit", "sortBy", "sortOrder"];

pub fn category_of(key: &str) -> FilterCategory {
    if LOCATION_KEYS.contains(&key) {
        FilterCategory::Location
    } else if PROPERTY_KEYS.contains(&key) {
        FilterCategory::Property
    } else if SYSTEM_KEYS.contains(&key) {
        FilterCategory::System
    } else {
        FilterCategory::Unknown
    }
}

pub fn is_recognized(key: &str) -> bool {
    category_of(key) != FilterCategory::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("state"), FilterCategory::Location);
        assert_eq!(category_of("zipCode"), FilterCategory::Location);
        assert_eq!(category_of("minPrice"), FilterCategory::Property);
        assert_eq!(category_of("search"), FilterCategory::Property);
        assert_eq!(category_of("sortOrder"), FilterCategory::System);
        assert_eq!(category_of("utm_source"), FilterCategory::Unknown);
        // 大小寫敏感
        assert_eq!(category_of("State"), FilterCategory::Unknown);
    }

    #[test]
    fn test_key_sets_are_disjoint() {
        let mut seen = HashSet::new();
        for key in LOCATION_KEYS.iter().chain(PROPERTY_KEYS).chain(SYSTEM_KEYS) {
            assert!(seen.insert(*key), "duplicate key in registry: {}", key);
        }
        assert_eq!(seen.len(), 7 + 22 + 4);
    }
}
