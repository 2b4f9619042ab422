use serde::Serialize;
use std::path::PathBuf;

use super::{non_empty_var, Environment};

/// Where schema migrations live and which database they target
#[derive(Debug, Clone, Serialize)]
pub struct MigrationConfig {
    pub schema_dir: PathBuf,
    pub out_dir: PathBuf,
    pub dialect: String,
    #[serde(skip_serializing)]
    pub database_url: Option<String>,
    /// Env var the url was read from, for error messages
    pub url_source: &'static str,
    pub verbose: bool,
    pub strict: bool,
}

impl MigrationConfig {
    /// Primary database, `DATABASE_URL`
    pub fn primary() -> Self {
        Self::for_url_var("DATABASE_URL", Environment::from_env())
    }

    /// Development database, `DEV_DATABASE_URL`
    pub fn development() -> Self {
        Self::for_url_var("DEV_DATABASE_URL", Environment::from_env())
    }

    fn for_url_var(var: &'static str, environment: Environment) -> Self {
        let chatty = !environment.is_production();
        Self {
            schema_dir: PathBuf::from("migrations"),
            out_dir: PathBuf::from("migrations"),
            dialect: "postgresql".to_string(),
            database_url: non_empty_var(var),
            url_source: var,
            verbose: chatty,
            strict: chatty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_follow_environment() {
        let dev = MigrationConfig::for_url_var("PLAYFIELD_UNSET_URL_VAR", Environment::Development);
        assert!(dev.verbose);
        assert!(dev.strict);
        assert_eq!(dev.dialect, "postgresql");
        assert_eq!(dev.schema_dir, PathBuf::from("migrations"));
        assert!(dev.database_url.is_none());

        let prod = MigrationConfig::for_url_var("PLAYFIELD_UNSET_URL_VAR", Environment::Production);
        assert!(!prod.verbose);
        assert!(!prod.strict);
    }
}
