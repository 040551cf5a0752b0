use crate::config::toml_config::{RouteConfig, DEFAULT_LIMIT, DEFAULT_SORT_BY, DEFAULT_SORT_ORDER};
use crate::core::registry::{category_of, FilterCategory};
use crate::domain::model::ParameterSet;

pub const DEFAULT_PAGE: &str = "1";

/// Canonicalises raw listing query parameters.
///
/// Location and property values pass through untouched. System values are
/// checked and replaced by their defaults when missing or malformed, and any
/// key the registry does not know is dropped. Never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterNormalizer {
    default_limit: u32,
    default_sort_by: String,
    default_sort_order: String,
}

impl Default for FilterNormalizer {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            default_sort_by: DEFAULT_SORT_BY.to_string(),
            default_sort_order: DEFAULT_SORT_ORDER.to_string(),
        }
    }
}

impl FilterNormalizer {
    pub fn new(config: &RouteConfig) -> Self {
        Self {
            default_limit: config.listing.default_limit.max(1),
            default_sort_by: canonical_sort_by(Some(config.listing.sort_by.as_str()))
                .unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
            default_sort_order: canonical_sort_order(Some(config.listing.sort_order.as_str()))
                .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_string()),
        }
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub fn default_sort_by(&self) -> &str {
        &self.default_sort_by
    }

    pub fn default_sort_order(&self) -> &str {
        &self.default_sort_order
    }

    pub fn normalize(&self, raw: &ParameterSet) -> ParameterSet {
        let mut canonical = ParameterSet::new();

        for (key, value) in raw.iter() {
            match category_of(key) {
                FilterCategory::Location | FilterCategory::Property => canonical.set(key, value),
                FilterCategory::System => canonical.set(key, self.system_value(key, Some(value))),
                FilterCategory::Unknown => {
                    tracing::debug!("Dropping unrecognized query parameter '{}'", key);
                }
            }
        }

        // 補上缺少的系統參數
        for key in ["page", "limit", "sortBy", "sortOrder"] {
            if !canonical.contains_key(key) {
                canonical.set(key, self.system_value(key, None));
            }
        }

        canonical
    }

    fn system_value(&self, key: &str, value: Option<&str>) -> String {
        match key {
            "page" => value
                .and_then(parse_positive)
                .map(|page| page.to_string())
                .unwrap_or_else(|| DEFAULT_PAGE.to_string()),
            "limit" => value
                .and_then(parse_positive)
                .unwrap_or(u64::from(self.default_limit))
                .to_string(),
            "sortBy" => canonical_sort_by(value).unwrap_or_else(|| self.default_sort_by.clone()),
            "sortOrder" => {
                canonical_sort_order(value).unwrap_or_else(|| self.default_sort_order.clone())
            }
            _ => value.unwrap_or_default().to_string(),
        }
    }
}

fn canonical_sort_by(value: Option<&str>) -> Option<String> {
    value
        .filter(|sort_by| !sort_by.trim().is_empty())
        .map(str::to_string)
}

fn canonical_sort_order(value: Option<&str>) -> Option<String> {
    value
        .map(str::to_ascii_lowercase)
        .filter(|order| order == "asc" || order == "desc")
}

/// Parses a strictly positive integer, rejecting zero, signs and padding.
pub fn parse_positive(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<u64>().ok().filter(|n| *n > 0)
}
