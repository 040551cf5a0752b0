pub mod guard;
pub mod normalizer;
pub mod pagination;
pub mod probe;
pub mod registry;
pub mod reset;

pub use crate::domain::model::{AccessDecision, Credential, Identity, PaginationState, ParameterSet};
pub use crate::domain::ports::IdentityClient;
pub use crate::utils::error::Result;
