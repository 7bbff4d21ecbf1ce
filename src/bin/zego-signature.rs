//! Print the signed common parameters for a server API request.
//!
//! Reads `ZEGO_APP_ID` and `ZEGO_SERVER_SECRET` from the environment and
//! writes the query string to stdout, e.g. for use with curl:
//!
//! ```text
//! curl "https://rtc-api.zego.im/?Action=DescribeUserNum&$(zego-signature)"
//! ```

use anyhow::Context;
use zego_token::{init_tracing, ServerConfig, SignedParams};

fn main() -> anyhow::Result<()> {
    init_tracing("zego_token=info,warn");

    let config = ServerConfig::from_env().context("failed to load configuration")?;
    let params = SignedParams::new(config.app_id, &config.server_secret)
        .context("failed to generate signature nonce")?;
    tracing::debug!(
        app_id = params.app_id,
        timestamp = params.timestamp,
        "signed request parameters"
    );

    println!("{}", params.query_string());
    Ok(())
}
