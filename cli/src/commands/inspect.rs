//! Inspect command - show the process occupying a port.

use anyhow::Result;
use devport_core::ports::ProcessInspector;
use devport_core::{Reporter, SystemInspector};

pub async fn run(port: u16, json: bool) -> Result<()> {
    let inspector = SystemInspector::new();
    let process = inspector.process_for_port(port).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&process)?);
        return Ok(());
    }

    if !process.is_known() {
        println!("No process information available for port {}.", port);
        return Ok(());
    }

    println!("{}", Reporter::default().process_info_report(&process));
    Ok(())
}
