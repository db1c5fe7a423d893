use std::path::PathBuf;
use crate::cli::commands::ValidateArgs;
use crate::config::{self, ServiceKind};
use crate::errors::NaviError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), NaviError> {
    let path = PathBuf::from(&args.config);
    let config = config::parse_config(&path).await?;

    println!("Configuration is valid: {}", args.config);
    for kind in [ServiceKind::Incidents, ServiceKind::Scans] {
        let (host, port) = config.bind_address(kind);
        println!("  {:<10} {}:{}", kind, host, port);
    }
    println!("  {:<10} {}", "database", config.database_path().unwrap_or(config::DEFAULT_DATABASE_PATH));
    Ok(())
}
