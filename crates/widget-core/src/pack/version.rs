//! Version comparison for CLI and template pack compatibility

use semver::Version;

/// Compare the CLI version against the pack's declared version.
/// Returns a warning message when the CLI is older than the pack expects;
/// unparseable versions are skipped rather than failing the run.
pub fn check_compatibility(
    cli_version: &str,
    pack_version: &str,
    upgrade_command: &str,
) -> Option<String> {
    let cli_ver = Version::parse(cli_version).ok()?;
    let pack_ver = Version::parse(pack_version).ok()?;

    if cli_ver < pack_ver {
        Some(format!(
            "Warning: This template pack was designed for CLI version {} or newer.\n\
             You are running version {}.\n\
             Consider updating: {}",
            pack_version, cli_version, upgrade_command
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UPGRADE: &str = "cargo install widget-tools --force";

    #[test]
    fn test_cli_older_than_pack_warns() {
        let warning = check_compatibility("0.1.0", "0.2.0", UPGRADE);
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("0.2.0"));
    }

    #[test]
    fn test_cli_matching_pack_is_silent() {
        assert!(check_compatibility("0.1.0", "0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_cli_newer_than_pack_is_silent() {
        assert!(check_compatibility("0.2.0", "0.1.0", UPGRADE).is_none());
    }

    #[test]
    fn test_unparseable_versions_skip_the_check() {
        assert!(check_compatibility("not-a-version", "0.1.0", UPGRADE).is_none());
        assert!(check_compatibility("0.1.0", "latest", UPGRADE).is_none());
    }
}
