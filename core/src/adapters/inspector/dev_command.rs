//! Friendly names for known dev-server launcher commands.
//!
//! A raw launcher command line like `node .../react-scripts/scripts/start.js`
//! says nothing about which app occupies the port; the package name from the
//! project manifest reads much better.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Whether the command line is a known dev-server launcher.
fn is_known_dev_launcher(command: &str) -> bool {
    static LAUNCHER: OnceLock<Regex> = OnceLock::new();
    let regex = LAUNCHER.get_or_init(|| {
        Regex::new(
            r"^node .*(react-scripts/scripts/start\.js|webpack-dev-server|vite/bin/vite\.js)\s*$",
        )
        .unwrap()
    });
    regex.is_match(command)
}

/// The `name` field of the package.json in `directory`, if readable.
async fn package_name_in_directory(directory: &str) -> Option<String> {
    let path = Path::new(directory.trim()).join("package.json");
    let bytes = tokio::fs::read(path).await.ok()?;
    let manifest: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    manifest.get("name")?.as_str().map(str::to_string)
}

/// Substitute a friendlier name for known dev-server launchers.
///
/// Returns `None` when the command is not a recognized launcher or the
/// manifest cannot be read; callers keep the raw command in that case.
pub(super) async fn friendly_command_name(command: &str, directory: &str) -> Option<String> {
    if !is_known_dev_launcher(command) {
        return None;
    }
    package_name_in_directory(directory).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_launchers() {
        assert!(is_known_dev_launcher(
            "node /home/dev/app/node_modules/react-scripts/scripts/start.js"
        ));
        assert!(is_known_dev_launcher(
            "node /home/dev/app/node_modules/.bin/webpack-dev-server"
        ));
        assert!(!is_known_dev_launcher("node server.js"));
        assert!(!is_known_dev_launcher("nginx -g daemon off;"));
    }

    #[tokio::test]
    async fn test_package_name_from_manifest() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            r#"{ "name": "demo-app", "version": "1.0.0" }"#,
        )
        .unwrap();

        let name = package_name_in_directory(dir.path().to_str().unwrap()).await;
        assert_eq!(name.as_deref(), Some("demo-app"));
    }

    #[tokio::test]
    async fn test_missing_manifest_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(package_name_in_directory(dir.path().to_str().unwrap())
            .await
            .is_none());
    }

    #[tokio::test]
    async fn test_unrecognized_command_keeps_raw_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), r#"{ "name": "demo-app" }"#).unwrap();

        let friendly =
            friendly_command_name("node server.js", dir.path().to_str().unwrap()).await;
        assert!(friendly.is_none());
    }
}
