//! macOS process lookup using lsof and ps.

use std::process::Stdio;

use tokio::process::Command;

use super::{InspectError, ProcessRecord};

/// macOS-specific process inspector.
pub struct DarwinInspector;

impl DarwinInspector {
    /// Create a new macOS inspector.
    pub fn new() -> Self {
        Self
    }

    /// Find the PID listening on `port`.
    ///
    /// Executes: `lsof -i:<port> -P -t -sTCP:LISTEN`
    ///
    /// Flags explained:
    /// - -i:<port>: Select by internet address
    /// - -P: Show port numbers (don't resolve to service names)
    /// - -t: Terse output, PIDs only
    /// - -sTCP:LISTEN: Show only listening sockets
    async fn pid_on_port(&self, port: u16) -> Result<String, InspectError> {
        let output = Command::new("/usr/sbin/lsof")
            .args([&format!("-i:{}", port), "-P", "-t", "-sTCP:LISTEN"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| InspectError::CommandFailed(format!("Failed to run lsof: {}", e)))?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| InspectError::ParseError(format!("Invalid UTF-8 in lsof output: {}", e)))?;

        stdout
            .lines()
            .next()
            .map(|line| line.trim().to_string())
            .filter(|pid| !pid.is_empty())
            .ok_or(InspectError::NotFound(port))
    }

    /// The working directory of a process, from the `cwd` row of
    /// `lsof -p <pid>`.
    async fn directory_of(&self, pid: &str) -> Result<String, InspectError> {
        let output = Command::new("/usr/sbin/lsof")
            .args(["-p", pid])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| InspectError::CommandFailed(format!("Failed to run lsof: {}", e)))?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| InspectError::ParseError(format!("Invalid UTF-8 in lsof output: {}", e)))?;

        Self::parse_cwd(&stdout).ok_or_else(|| {
            InspectError::ParseError(format!("no cwd row in lsof output for pid {}", pid))
        })
    }

    /// Parse the NAME column of the `cwd` row.
    ///
    /// Expected lsof output format:
    /// ```text
    /// COMMAND  PID USER   FD   TYPE DEVICE SIZE/OFF     NODE NAME
    /// node    3158 dev  cwd    DIR    1,4      960 12345678 /Users/dev/demo-app
    /// ```
    fn parse_cwd(output: &str) -> Option<String> {
        for line in output.lines().skip(1) {
            // Columns: COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME
            let components: Vec<&str> = line.split_whitespace().collect();
            if components.len() < 9 {
                continue;
            }
            if components[3] != "cwd" {
                continue;
            }
            // NAME may contain spaces
            return Some(components[8..].join(" "));
        }
        None
    }

    /// The command line of a process.
    ///
    /// Executes: `ps -o command= -p <pid>`
    async fn command_of(&self, pid: &str) -> Result<String, InspectError> {
        let output = Command::new("/bin/ps")
            .args(["-o", "command=", "-p", pid])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| InspectError::CommandFailed(format!("Failed to run ps: {}", e)))?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| InspectError::ParseError(format!("Invalid UTF-8 in ps output: {}", e)))?;

        let command = stdout.trim();
        if command.is_empty() {
            return Err(InspectError::ParseError(format!(
                "no command reported for pid {}",
                pid
            )));
        }
        Ok(command.to_string())
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

impl Default for DarwinInspector {
    fn default() -> Self {
        Self::new()
    }
}
