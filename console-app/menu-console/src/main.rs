use std::sync::Arc;
use tracing::{error, info};

use rbac_core::domain::SysUser;
use rbac_core::services::MenuService;
use rbac_infrastructure::{load_fixture, JsonMenuRepository, JsonRoleMenuRepository};
use rbac_shared::config::AppConfig;

/// What to print, taken from the command line.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    /// `--all`: management tree, buttons included
    AllMenus,
    /// `[USER_ID]`: navigation tree for that user, or for nobody
    UserMenus(Option<i64>),
}

fn parse_args<I>(args: I) -> anyhow::Result<Request>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let request = match args.next().as_deref() {
        Some("--all") => Request::AllMenus,
        Some(raw) => {
            let user_id = raw
                .parse::<i64>()
                .map_err(|e| anyhow::anyhow!("invalid user id {:?}: {}", raw, e))?;
            Request::UserMenus(Some(user_id))
        }
        None => Request::UserMenus(None),
    };

    let extra: Vec<String> = args.collect();
    if !extra.is_empty() {
        anyhow::bail!("unexpected arguments: {}", extra.join(" "));
    }
    Ok(request)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize telemetry
    rbac_shared::telemetry::init_telemetry(&config.log);
    info!("{} starting ({})", config.app.name, config.app.env);

    let request = parse_args(std::env::args().skip(1))?;

    // Open the menu store
    let fixture = match load_fixture(&config.menu.fixture_path).await {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to load menus: {}", e);
            std::process::exit(1);
        }
    };

    let service = MenuService::new(
        Arc::new(JsonMenuRepository::new(fixture.clone())),
        Arc::new(JsonRoleMenuRepository::new(fixture)),
    );

    let tree = match request {
        Request::AllMenus => service.select_menu_tree_all().await?,
        Request::UserMenus(user_id) => {
            let user = user_id.map(|id| SysUser {
                user_id: Some(id),
                ..SysUser::default()
            });
            service.select_menus_by_user(user.as_ref()).await?
        }
    };

    info!("Built menu tree with {} top-level entries", tree.len());
    println!("{}", serde_json::to_string_pretty(&tree)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_requests() {
        assert_eq!(parse_args(args(&[])).unwrap(), Request::UserMenus(None));
        assert_eq!(parse_args(args(&["7"])).unwrap(), Request::UserMenus(Some(7)));
        assert_eq!(parse_args(args(&["--all"])).unwrap(), Request::AllMenus);
    }

    #[test]
    fn test_invalid_user_id_rejected() {
        assert!(parse_args(args(&["seven"])).is_err());
    }

    #[test]
    fn test_extra_arguments_rejected() {
        let err = parse_args(args(&["--all", "7"])).unwrap_err();
        assert!(err.to_string().contains("unexpected arguments: 7"));
        assert!(parse_args(args(&["2", "3"])).is_err());
    }
}
