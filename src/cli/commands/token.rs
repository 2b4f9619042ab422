use clap::{Args, ValueEnum};
use serde_json::json;

use crate::auth::{issue_token, Role, SessionPayload, TOKEN_TTL_SECS};
use crate::cli::OutputFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoleArg {
    User,
    Admin,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::User => Role::User,
            RoleArg::Admin => Role::Admin,
        }
    }
}

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[arg(long, help = "Profile id to put in the token subject")]
    pub sub: String,
    #[arg(long, help = "Email claim")]
    pub email: Option<String>,
    #[arg(long, value_enum, default_value = "user")]
    pub role: RoleArg,
}

pub fn handle(args: TokenArgs, output_format: OutputFormat) -> anyhow::Result<()> {
    let payload = SessionPayload {
        sub: args.sub,
        email: args.email,
        role: args.role.into(),
    };
    let token = issue_token(&payload)?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "token": token,
                "expires_in": TOKEN_TTL_SECS,
                "payload": payload,
            }))?
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
