use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

/// Query parameters of a listing request, keyed by name.
///
/// Keys are unique. Insertion order is kept so that serialized URLs stay
/// readable, but equality ignores order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an `application/x-www-form-urlencoded` query string.
    /// A leading `?` is ignored and the first occurrence of a repeated key wins.
    pub fn parse_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if !params.contains_key(&key) {
                params.entries.push((key.into_owned(), value.into_owned()));
            }
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Inserts or overwrites a value. An overwritten key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encodes the set in insertion order, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.entries.iter())
            .finish()
    }
}

impl PartialEq for ParameterSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for ParameterSet {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            let key = key.into();
            if !params.contains_key(&key) {
                params.entries.push((key, value.into()));
            }
        }
        params
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

/// Page position reported by the listing query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub current_page: u64,
    pub limit: u64,
    pub total_count: u64,
}

/// Outcome of the route access guard for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectUnauthenticated(String),
    RedirectMissingState(String),
}

impl AccessDecision {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::RedirectUnauthenticated(target)
            | AccessDecision::RedirectMissingState(target) => Some(target),
        }
    }
}

/// Authentication cookie value taken from the request, if any.
///
/// Only presence is meaningful to the route guard; the identity endpoint
/// decides whether the token is actually valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credential {
    token: Option<String>,
}

impl Credential {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.is_empty()).then_some(token),
        }
    }

    /// Extracts `cookie_name` from a raw `Cookie` header.
    pub fn from_cookie_header(header: &str, cookie_name: &str) -> Self {
        let token = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| name.trim() == cookie_name)
            .map(|(_, value)| value.trim().trim_matches('"').to_string());

        match token {
            Some(token) => Self::token(token),
            None => Self::anonymous(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.token.is_some()
    }

    pub fn value(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// User payload returned by the identity endpoint. Only `role` is relied upon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, alias = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub role: String,
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}
