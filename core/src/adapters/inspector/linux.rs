//! Linux process lookup using ss and procfs.

use std::process::Stdio;

use regex::Regex;
use tokio::process::Command;

use super::{InspectError, ProcessRecord};

/// Linux-specific process inspector.
pub struct LinuxInspector;

impl LinuxInspector {
    /// Create a new Linux inspector.
    pub fn new() -> Self {
        Self
    }

    /// Find the PID listening on `port`.
    ///
    /// Executes: `ss -Htlnp`
    ///
    /// Flags explained:
    /// -H, --no-header     Suppress header line
    /// -t, --tcp           display only TCP sockets
    /// -l, --listening     display listening sockets
    /// -n, --numeric       don't resolve service names
    /// -p, --processes     show process using socket
    async fn pid_on_port(&self, port: u16) -> Result<String, InspectError> {
        let output = Command::new("/usr/sbin/ss")
            .args(["-Htlnp"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| InspectError::CommandFailed(format!("Failed to run ss: {}", e)))?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| InspectError::ParseError(format!("Invalid UTF-8 in ss output: {}", e)))?;

        Self::parse_pid(&stdout, port).ok_or(InspectError::NotFound(port))
    }

    /// Parse ss output for the PID bound to `port`.
    ///
    /// Expected ss output format:
    /// ```text
    /// LISTEN 0 4096 [::ffff:127.0.0.1]:3000 *:* users:(("node",pid=53561,fd=54))
    /// ```
    fn parse_pid(output: &str, port: u16) -> Option<String> {
        let regex = Regex::new(r#"users:\(\("(?:.+?)",pid=(\d+),fd=.+?\)"#).unwrap();

        for line in output.lines() {
            if line.is_empty() {
                continue;
            }

            // Columns: [State] [Recv-Q] [Send-Q] [Local Address:Port] [Peer Address:Port] [Process]
            let components: Vec<&str> = line.split_whitespace().collect();
            if components.len() < 6 {
                continue;
            }

            let Some(local_port) = Self::parse_local_port(components[3]) else {
                continue;
            };
            if local_port != port {
                continue;
            }

            if let Some(caps) = regex.captures(components[5]) {
                return Some(caps[1].to_string());
            }
        }

        None
    }

    /// Extract the port from a local address column such as
    /// "127.0.0.1:3000", "*:8080" or "[::1]:3000".
    fn parse_local_port(address: &str) -> Option<u16> {
        address.rsplit(':').next()?.parse().ok()
    }

    /// The command line of a process, from `/proc/<pid>/cmdline`.
    async fn command_of(&self, pid: &str) -> Result<String, InspectError> {
        let raw = tokio::fs::read(format!("/proc/{}/cmdline", pid))
            .await
            .map_err(|e| InspectError::CommandFailed(format!("Failed to read cmdline: {}", e)))?;

        let command = raw
            .split(|b| *b == 0)
            .filter(|part| !part.is_empty())
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(" ");

        if command.is_empty() {
            return Err(InspectError::ParseError(format!(
                "empty cmdline for pid {}",
                pid
            )));
        }
        Ok(command)
    }

    /// The working directory of a process, from `/proc/<pid>/cwd`.
    async fn directory_of(&self, pid: &str) -> Result<String, InspectError> {
        let path = tokio::fs::read_link(format!("/proc/{}/cwd", pid))
            .await
            .map_err(|e| InspectError::CommandFailed(format!("Failed to read cwd: {}", e)))?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Identify the process listening on `port`.
    pub async fn lookup(&self, port: u16) -> Result<ProcessRecord, InspectError> {
        let pid = self.pid_on_port(port).await?;
        let directory = self.directory_of(&pid).await?;
        let command = self.command_of(&pid).await?;

        Ok(ProcessRecord {
            pid,
            command,
            directory,
        })
    }
}

impl Default for LinuxInspector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pid_matches_port() {
        let output = r#"LISTEN 0 4096 [::ffff:127.0.0.1]:80 *:* users:(("nginx",pid=55316,fd=6))
LISTEN 0 50 [::ffff:127.0.0.1]:3000 *:* users:(("node",pid=53561,fd=187))"#;

        assert_eq!(LinuxInspector::parse_pid(output, 3000).unwrap(), "53561");
        assert_eq!(LinuxInspector::parse_pid(output, 80).unwrap(), "55316");
        assert!(LinuxInspector::parse_pid(output, 8080).is_none());
    }

    #[test]
    fn test_parse_pid_skips_malformed_lines() {
        let output = "LISTEN 0 4096\ngarbage\nLISTEN 0 50 127.0.0.1:3000 *:* users:((\"node\",pid=42,fd=5))";

        assert_eq!(LinuxInspector::parse_pid(output, 3000).unwrap(), "42");
    }

    #[test]
    fn test_parse_local_port() {
        assert_eq!(LinuxInspector::parse_local_port("127.0.0.1:3000"), Some(3000));
        assert_eq!(LinuxInspector::parse_local_port("*:8080"), Some(8080));
        assert_eq!(LinuxInspector::parse_local_port("[::1]:3000"), Some(3000));
        assert_eq!(LinuxInspector::parse_local_port("no-port"), None);
    }
}
