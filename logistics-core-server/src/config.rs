use clap::Parser;

/// Runtime configuration, read from command-line flags with environment fallbacks
#[derive(Debug, Clone, Parser)]
#[command(name = "logistics-core", version, about = "Package tracking service")]
pub struct ServiceConfig {
    /// SQLite database URL; the file is created when missing
    #[arg(long, env = "LOGISTICS_DATABASE_URL", default_value = "sqlite://logistics.db")]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "LOGISTICS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "LOGISTICS_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Login account as `email:password`, may be repeated
    #[arg(
        long = "user",
        env = "LOGISTICS_USERS",
        value_delimiter = ',',
        value_parser = parse_user
    )]
    pub users: Vec<UserCredential>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredential {
    pub email: String,
    pub password: String,
}

fn parse_user(value: &str) -> Result<UserCredential, String> {
    let (email, password) = value
        .split_once(':')
        .ok_or_else(|| format!("expected email:password, got '{value}'"))?;
    if email.is_empty() {
        return Err(format!("missing email in '{value}'"));
    }
    Ok(UserCredential {
        email: email.to_string(),
        password: password.to_string(),
    })
}
