use crate::utils::error::{Result, RouteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_LIMIT: u32 = 12;
pub const DEFAULT_SORT_BY: &str = "listedAt";
pub const DEFAULT_SORT_ORDER: &str = "desc";

/// Process-wide routing configuration, loaded once at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    pub routes: RoutesConfig,
    pub auth: AuthConfig,
    pub listing: ListingConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub results_path: String,
    pub root_path: String,
    pub sign_in_path: String,
    pub unauthorized_path: String,
    pub protected_prefixes: Vec<String>,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            results_path: "/results".to_string(),
            root_path: "/".to_string(),
            sign_in_path: "/signin".to_string(),
            unauthorized_path: "/unauthorized".to_string(),
            protected_prefixes: vec!["/profile".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub cookie_name: String,
    pub identity_endpoint: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            cookie_name: "token".to_string(),
            identity_endpoint: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub default_limit: u32,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: DEFAULT_SORT_ORDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl RouteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RouteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${IDENTITY_URL})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}").map_err(|e| RouteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The identity endpoint is only required by the authorization probe.
    pub fn identity_endpoint(&self) -> Result<&str> {
        validation::validate_required_field("auth.identity_endpoint", &self.auth.identity_endpoint)
            .map(String::as_str)
    }
}

impl Validate for RouteConfig {
    fn validate(&self) -> Result<()> {
        let routes = &self.routes;
        validation::validate_route_path("routes.results_path", &routes.results_path)?;
        validation::validate_route_path("routes.root_path", &routes.root_path)?;
        validation::validate_route_path("routes.sign_in_path", &routes.sign_in_path)?;
        validation::validate_route_path("routes.unauthorized_path", &routes.unauthorized_path)?;
        for prefix in &routes.protected_prefixes {
            validation::validate_route_path("routes.protected_prefixes", prefix)?;
        }

        validation::validate_non_empty_string("auth.cookie_name", &self.auth.cookie_name)?;
        if let Some(endpoint) = &self.auth.identity_endpoint {
            validation::validate_url("auth.identity_endpoint", endpoint)?;
        }

        validation::validate_positive_number("listing.default_limit", self.listing.default_limit, 1)?;
        validation::validate_non_empty_string("listing.sort_by", &self.listing.sort_by)?;
        validation::validate_one_of("listing.sort_order", &self.listing.sort_order, &["asc", "desc"])?;

        Ok(())
    }
}
