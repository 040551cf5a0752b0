use crate::config::toml_config::RouteConfig;
use crate::domain::model::{Credential, Identity};
use crate::domain::ports::IdentityClient;
use serde::Serialize;
use std::collections::BTreeSet;
use tokio::sync::watch;

pub type RequiredRoles = BTreeSet<String>;

pub fn roles<I, S>(names: I) -> RequiredRoles
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// What a page gate renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationStatus {
    pub loading: bool,
    pub is_authorized: bool,
    pub user: Option<Identity>,
}

impl AuthorizationStatus {
    pub fn loading() -> Self {
        Self {
            loading: true,
            is_authorized: false,
            user: None,
        }
    }
}

/// Result of one probe. Redirects are returned, not performed.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    Authorized(Identity),
    Unauthenticated { redirect: String },
    Forbidden { redirect: String, role: String },
}

impl ProbeOutcome {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            ProbeOutcome::Authorized(_) => None,
            ProbeOutcome::Unauthenticated { redirect } | ProbeOutcome::Forbidden { redirect, .. } => {
                Some(redirect)
            }
        }
    }

    pub fn status(&self) -> AuthorizationStatus {
        match self {
            ProbeOutcome::Authorized(identity) => AuthorizationStatus {
                loading: false,
                is_authorized: true,
                user: Some(identity.clone()),
            },
            ProbeOutcome::Unauthenticated { .. } | ProbeOutcome::Forbidden { .. } => {
                AuthorizationStatus {
                    loading: false,
                    is_authorized: false,
                    user: None,
                }
            }
        }
    }
}

/// Checks the caller's identity and role against the identity endpoint.
pub struct AuthorizationProbe<C: IdentityClient> {
    client: C,
    sign_in_path: String,
    unauthorized_path: String,
}

impl<C: IdentityClient> AuthorizationProbe<C> {
    pub fn new(client: C, config: &RouteConfig) -> Self {
        Self {
            client,
            sign_in_path: config.routes.sign_in_path.clone(),
            unauthorized_path: config.routes.unauthorized_path.clone(),
        }
    }

    /// Issues exactly one identity request. Any failure is treated as
    /// unauthenticated; an empty role set accepts every signed-in user.
    pub async fn check_authorization(
        &self,
        required_roles: &RequiredRoles,
        credential: &Credential,
    ) -> ProbeOutcome {
        let identity = match self.client.fetch_identity(credential).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!("Identity check failed, treating as signed out: {}", e);
                return ProbeOutcome::Unauthenticated {
                    redirect: self.sign_in_path.clone(),
                };
            }
        };

        if !required_roles.is_empty() && !required_roles.contains(&identity.role) {
            tracing::info!(
                "Role '{}' is not one of {:?}, redirecting",
                identity.role,
                required_roles
            );
            return ProbeOutcome::Forbidden {
                redirect: self.unauthorized_path.clone(),
                role: identity.role,
            };
        }

        ProbeOutcome::Authorized(identity)
    }
}

/// Keeps the latest [`AuthorizationStatus`] for a gated view and re-probes
/// whenever the required role set changes.
pub struct AuthorizationWatcher<C: IdentityClient> {
    probe: AuthorizationProbe<C>,
    last_roles: Option<RequiredRoles>,
    last_outcome: Option<ProbeOutcome>,
    status: watch::Sender<AuthorizationStatus>,
}

impl<C: IdentityClient> AuthorizationWatcher<C> {
    pub fn new(probe: AuthorizationProbe<C>) -> Self {
        let (status, _) = watch::channel(AuthorizationStatus::loading());
        Self {
            probe,
            last_roles: None,
            last_outcome: None,
            status,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthorizationStatus> {
        self.status.subscribe()
    }

    pub fn status(&self) -> AuthorizationStatus {
        self.status.borrow().clone()
    }

    /// Probes unless `required_roles` equals the set used last time, in which
    /// case the previous outcome is returned without a request.
    pub async fn sync(
        &mut self,
        required_roles: &RequiredRoles,
        credential: &Credential,
    ) -> ProbeOutcome {
        if let (Some(last_roles), Some(outcome)) = (&self.last_roles, &self.last_outcome) {
            if last_roles == required_roles {
                return outcome.clone();
            }
        }

        self.status.send_replace(AuthorizationStatus::loading());
        let outcome = self
            .probe
            .check_authorization(required_roles, credential)
            .await;
        self.status.send_replace(outcome.status());

        self.last_roles = Some(required_roles.clone());
        self.last_outcome = Some(outcome.clone());
        outcome
    }
}
