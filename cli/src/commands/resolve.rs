//! Resolve command - run the port negotiation protocol.

use anyhow::Result;
use devport_core::{coerce_port, resolve_port};

pub async fn run(port: &str, host: &str, fallback_allowed: bool, json: bool) -> Result<()> {
    let port = coerce_port(port)?;

    match resolve_port(port, host, fallback_allowed, None).await? {
        Some(resolved) => {
            if json {
                println!("{}", serde_json::json!({ "port": resolved }));
            } else {
                println!("{}", resolved);
            }
            Ok(())
        }
        // Aborted: the conflict message has already been shown.
        None => std::process::exit(1),
    }
}
