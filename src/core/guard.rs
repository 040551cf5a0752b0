use crate::config::toml_config::RouteConfig;
use crate::domain::model::{AccessDecision, Credential, ParameterSet};

/// What the guard needs to know about one incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardRequest {
    pub path: String,
    pub query: ParameterSet,
    pub credential: Credential,
}

impl GuardRequest {
    pub fn new(path: impl Into<String>, query: ParameterSet, credential: Credential) -> Self {
        Self {
            path: path.into(),
            query,
            credential,
        }
    }

    /// Splits a request target such as `/results?state=CA` into path and query.
    pub fn from_target(target: &str, credential: Credential) -> Self {
        let target = target.split('#').next().unwrap_or_default();
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        Self::new(path, ParameterSet::parse_query(query), credential)
    }
}

/// Per-request access policy: authentication on protected prefixes first,
/// then the mandatory `state` parameter on the results path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuard {
    protected_prefixes: Vec<String>,
    results_path: String,
    sign_in_path: String,
    root_path: String,
}

impl RouteGuard {
    pub fn new(config: &RouteConfig) -> Self {
        let routes = &config.routes;
        Self {
            protected_prefixes: routes.protected_prefixes.clone(),
            results_path: routes.results_path.clone(),
            sign_in_path: routes.sign_in_path.clone(),
            root_path: routes.root_path.clone(),
        }
    }

    pub fn decide(&self, request: &GuardRequest) -> AccessDecision {
        let decision = self.check_auth(request).unwrap_or_else(|| {
            self.check_search_state(request)
                .unwrap_or(AccessDecision::Allow)
        });

        tracing::debug!(path = %request.path, ?decision, "Route guard decision");
        decision
    }

    fn check_auth(&self, request: &GuardRequest) -> Option<AccessDecision> {
        let protected = self
            .protected_prefixes
            .iter()
            .any(|prefix| path_matches(&request.path, prefix));

        (protected && !request.credential.is_present())
            .then(|| AccessDecision::RedirectUnauthenticated(self.sign_in_path.clone()))
    }

    fn check_search_state(&self, request: &GuardRequest) -> Option<AccessDecision> {
        if !path_matches(&request.path, &self.results_path) {
            return None;
        }

        let has_state = request
            .query
            .get("state")
            .is_some_and(|state| !state.trim().is_empty());

        // 重導向到根路徑時清除所有查詢參數
        (!has_state).then(|| AccessDecision::RedirectMissingState(self.root_path.clone()))
    }
}

/// True when `path` equals `prefix` or lies below it at a segment boundary.
pub fn path_matches(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
