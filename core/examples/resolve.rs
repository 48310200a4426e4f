//! Interactive testing for devport-core.
//!
//! Usage:
//!   cargo run --example resolve 3000             # Negotiate port 3000 on localhost
//!   cargo run --example resolve 3000 0.0.0.0     # Negotiate on another host
//!   cargo run --example resolve 80               # Reserved-range behavior

use std::env;

use devport_core::resolve_port;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: resolve <port> [hostname]");
        return;
    }

    let port = match args[1].parse() {
        Ok(port) => port,
        Err(_) => {
            eprintln!("Invalid port: {}", args[1]);
            return;
        }
    };
    let hostname = args.get(2).map(String::as_str).unwrap_or("localhost");

    match resolve_port(port, hostname, true, None).await {
        Ok(Some(resolved)) => println!("Using port {}.", resolved),
        Ok(None) => println!("No port agreed on."),
        Err(e) => eprintln!("{}", e),
    }
}
