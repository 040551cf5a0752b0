use anyhow::Result;
use httpmock::prelude::*;
use listing_route::core::probe::{roles, RequiredRoles};
use listing_route::{
    AuthorizationProbe, AuthorizationWatcher, Credential, HttpIdentityClient, ProbeOutcome,
    RouteConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_for(server: &MockServer) -> Result<RouteConfig> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[routes]
sign_in_path = "/signin"
unauthorized_path = "/unauthorized"

[auth]
cookie_name = "token"
identity_endpoint = "{}"
"#,
        server.url("/api/auth/me")
    )?;

    Ok(RouteConfig::from_file(file.path())?)
}

/// 身份端點回傳 agent，但頁面只允許 admin
#[tokio::test]
async fn test_agent_is_redirected_from_admin_page() -> Result<()> {
    let server = MockServer::start();
    let identity_mock = server.mock(|when, then| {
        when.method(GET).path("/api/auth/me").header("cookie", "token=t-1");
        then.status(200)
            .json_body(serde_json::json!({"user": {"role": "agent"}}));
    });

    let config = config_for(&server)?;
    let probe = AuthorizationProbe::new(HttpIdentityClient::from_config(&config)?, &config);

    let outcome = probe
        .check_authorization(&roles(["admin"]), &Credential::token("t-1"))
        .await;

    identity_mock.assert();
    assert_eq!(outcome.redirect_target(), Some("/unauthorized"));
    assert!(!outcome.status().is_authorized);

    let outcome = probe
        .check_authorization(&RequiredRoles::new(), &Credential::token("t-1"))
        .await;
    assert!(matches!(outcome, ProbeOutcome::Authorized(_)));
    assert!(outcome.status().is_authorized);
    Ok(())
}

#[tokio::test]
async fn test_expired_session_redirects_to_sign_in() -> Result<()> {
    let server = MockServer::start();
    let identity_mock = server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(401);
    });

    let config = config_for(&server)?;
    let probe = AuthorizationProbe::new(HttpIdentityClient::from_config(&config)?, &config);

    let outcome = probe
        .check_authorization(&roles(["admin"]), &Credential::token("stale"))
        .await;

    identity_mock.assert_hits(1);
    assert_eq!(outcome.redirect_target(), Some("/signin"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_payload_redirects_to_sign_in() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200).body("<html>not json</html>");
    });

    let config = config_for(&server)?;
    let probe = AuthorizationProbe::new(HttpIdentityClient::from_config(&config)?, &config);

    let outcome = probe
        .check_authorization(&RequiredRoles::new(), &Credential::token("t"))
        .await;

    assert_eq!(
        outcome,
        ProbeOutcome::Unauthenticated {
            redirect: "/signin".to_string()
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_unreachable_identity_service_redirects_to_sign_in() -> Result<()> {
    let mut config = RouteConfig::default();
    config.auth.identity_endpoint = Some("http://127.0.0.1:9/me".to_string());
    let probe = AuthorizationProbe::new(HttpIdentityClient::from_config(&config)?, &config);

    let outcome = probe
        .check_authorization(&RequiredRoles::new(), &Credential::token("t"))
        .await;

    assert_eq!(outcome.redirect_target(), Some("/signin"));
    Ok(())
}

#[tokio::test]
async fn test_watcher_reprobes_after_role_change() -> Result<()> {
    let server = MockServer::start();
    let identity_mock = server.mock(|when, then| {
        when.method(GET).path("/api/auth/me");
        then.status(200)
            .json_body(serde_json::json!({"user": {"_id": "u-2", "role": "admin"}}));
    });

    let config = config_for(&server)?;
    let probe = AuthorizationProbe::new(HttpIdentityClient::from_config(&config)?, &config);
    let mut watcher = AuthorizationWatcher::new(probe);
    let credential = Credential::token("t-2");

    assert!(watcher.status().loading);

    watcher.sync(&roles(["admin"]), &credential).await;
    watcher.sync(&roles(["admin"]), &credential).await;
    identity_mock.assert_hits(1);

    watcher.sync(&roles(["admin", "agent"]), &credential).await;
    identity_mock.assert_hits(2);

    let status = watcher.status();
    assert!(!status.loading);
    assert!(status.is_authorized);
    assert_eq!(status.user.and_then(|u| u.user_id).as_deref(), Some("u-2"));
    Ok(())
}
