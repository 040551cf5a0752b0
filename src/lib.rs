pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::HttpIdentityClient;
pub use config::RouteConfig;
pub use crate::core::{
    guard::{GuardRequest, RouteGuard},
    normalizer::FilterNormalizer,
    pagination::PageUrlBuilder,
    probe::{AuthorizationProbe, AuthorizationStatus, AuthorizationWatcher, ProbeOutcome},
    registry::{category_of, FilterCategory},
    reset::reset_filters,
};
pub use domain::model::{AccessDecision, Credential, Identity, PaginationState, ParameterSet};
pub use utils::error::{Result, RouteError};
