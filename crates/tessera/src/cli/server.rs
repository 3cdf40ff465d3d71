//! `tessera serve`.

use tessera_error::TesseraResult;
use tessera_server::{SiteConfig, serve};

/// Load configuration, apply the CLI bind override, and serve.
pub async fn run_server(bind: Option<String>) -> TesseraResult<()> {
    let mut config = SiteConfig::load()?;
    if let Some(bind) = bind {
        config = config.with_bind(bind);
    }
    serve(config).await
}
