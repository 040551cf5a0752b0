use clap::Parser;
use listing_route::config::Command;
use listing_route::core::probe::roles;
use listing_route::presentation::{format_location, LocationParts};
use listing_route::utils::{logger, validation::Validate};
use listing_route::{
    reset_filters, AuthorizationProbe, CliConfig, Credential, FilterNormalizer, GuardRequest,
    HttpIdentityClient, PageUrlBuilder, PaginationState, ParameterSet, RouteConfig, RouteGuard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => match RouteConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => RouteConfig::default(),
    };

    // 初始化日誌
    match &config.logging {
        Some(logging) if logging.json.unwrap_or(false) => {
            logger::init_json_logger(logging.level.as_deref())
        }
        _ => logger::init_cli_logger(cli.verbose),
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let normalizer = FilterNormalizer::new(&config);

    match cli.command {
        Command::Normalize { query } => {
            let canonical = normalizer.normalize(&ParameterSet::parse_query(&query));
            println!("{}", canonical);
        }
        Command::Reset { query } => {
            let reset = reset_filters(&normalizer, &ParameterSet::parse_query(&query));
            println!("{}", reset);
        }
        Command::Paginate {
            query,
            total,
            target,
            window,
        } => {
            let params = normalizer.normalize(&ParameterSet::parse_query(&query));
            let page_of = |key: &str| params.get(key).and_then(|v| v.parse::<u64>().ok());
            let state = PaginationState::new(
                page_of("page").unwrap_or(1),
                page_of("limit").unwrap_or(u64::from(normalizer.default_limit())),
                total,
            );
            let builder = PageUrlBuilder::new(config.routes.results_path.clone());
            let target = target.unwrap_or(state.current_page + 1);

            let location = format_location(&LocationParts::from_params(&params));
            if !location.is_empty() {
                println!("📍 {}", location);
            }
            println!("{}", state.display_range());
            println!("Pages: {}", serde_json::to_string(&state.page_items(window))?);
            println!("{}", builder.page_url(&params, target));
        }
        Command::Guard { target, cookie } => {
            let credential = cookie
                .as_deref()
                .map(|header| Credential::from_cookie_header(header, &config.auth.cookie_name))
                .unwrap_or_else(Credential::anonymous);
            let request = GuardRequest::from_target(&target, credential);
            let decision = RouteGuard::new(&config).decide(&request);

            match decision.redirect_target() {
                Some(location) => println!("{:?} -> {}", decision, location),
                None => println!("{:?}", decision),
            }
        }
        Command::Probe {
            roles: role_names,
            token,
        } => {
            let client = HttpIdentityClient::from_config(&config)?;
            let probe = AuthorizationProbe::new(client, &config);
            let credential = token.map(Credential::token).unwrap_or_default();

            let outcome = probe
                .check_authorization(&roles(role_names), &credential)
                .await;
            println!("{}", serde_json::to_string_pretty(&outcome.status())?);
            if let Some(location) = outcome.redirect_target() {
                println!("↪ redirect to {}", location);
            }
        }
    }

    Ok(())
}
