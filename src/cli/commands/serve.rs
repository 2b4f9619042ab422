use crate::config::config;
use crate::server;

pub async fn handle() -> anyhow::Result<()> {
    server::run(config().clone()).await
}
