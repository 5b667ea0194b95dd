use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::models::config::{ConfigCandidate, ConfigPaths};

/// Directory holding the system-wide configuration files.
pub const SYSTEM_CONFIG_DIR: &str = "/etc/rhn";

/// Decides which configuration file is in effect.
///
/// Precedence (highest first):
/// 1. An explicit override (`--config`), sticky once set
/// 2. The per-user file `~/.config/<app>/config.conf`
///
/// The system-wide and session files are tracked so they can be reported,
/// but they only become active through an override.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    home: Option<PathBuf>,
    paths: ConfigPaths,
}

impl ConfigResolver {
    /// Build the default locations for `app` using the current user's home.
    pub fn new(app: &str) -> Self {
        Self::with_home(app, dirs::home_dir())
    }

    /// Build the default locations for `app` with an explicit home directory.
    ///
    /// `None` means the home directory could not be determined; `~/` paths
    /// are then kept as literals.
    pub fn with_home(app: &str, home: Option<PathBuf>) -> Self {
        let global = Path::new(SYSTEM_CONFIG_DIR).join(format!("{app}.conf"));
        let local = expand_home(home.as_deref(), &format!("~/.config/{app}/config.conf"));
        let session = expand_home(home.as_deref(), &format!("~/.config/{app}/session.conf"));

        Self {
            home,
            paths: ConfigPaths {
                global,
                active: local.clone(),
                local,
                session,
            },
        }
    }

    /// Expand a leading `~/` to the home directory.
    pub fn expand_path(&self, path: &str) -> PathBuf {
        expand_home(self.home.as_deref(), path)
    }

    /// Apply `override_path` (if non-empty) and return the active file.
    ///
    /// An empty override keeps whatever was active before, including an
    /// earlier override.
    pub fn resolve_active(&mut self, override_path: &str) -> &Path {
        if !override_path.is_empty() {
            let active = self.expand_path(override_path);
            debug!(path = %active.display(), "configuration override applied");
            self.paths.active = active;
        }
        &self.paths.active
    }

    pub const fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Every known location with whether a regular file exists there.
    pub fn candidates(&self) -> Vec<ConfigCandidate> {
        [
            ("active", &self.paths.active),
            ("local", &self.paths.local),
            ("session", &self.paths.session),
            ("global", &self.paths.global),
        ]
        .into_iter()
        .map(|(role, path)| ConfigCandidate {
            role,
            path: path.clone(),
            exists: file_exists(path),
        })
        .collect()
    }
}

/// True when `path` names an existing regular file.
pub fn file_exists(path: &Path) -> bool {
    path.metadata().is_ok_and(|meta| meta.is_file())
}

/// Expand a leading `~/` using the current user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_home(dirs::home_dir().as_deref(), path)
}

fn expand_home(home: Option<&Path>, path: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix("~/") else {
        return PathBuf::from(path);
    };

    match home {
        Some(home) => home.join(rest),
        None => {
            debug!(path, "home directory unknown, leaving path unexpanded");
            PathBuf::from(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn resolver() -> ConfigResolver {
        ConfigResolver::with_home("spaceman", Some(PathBuf::from("/home/u")))
    }

    #[test]
    fn test_default_paths() {
        let resolver = resolver();
        let paths = resolver.paths();
        assert_eq!(paths.global, PathBuf::from("/etc/rhn/spaceman.conf"));
        assert_eq!(paths.local, PathBuf::from("/home/u/.config/spaceman/config.conf"));
        assert_eq!(paths.session, PathBuf::from("/home/u/.config/spaceman/session.conf"));
        assert_eq!(paths.active, paths.local);
    }

    #[test]
    fn test_empty_override_keeps_local() {
        let mut resolver = resolver();
        assert_eq!(
            resolver.resolve_active(""),
            Path::new("/home/u/.config/spaceman/config.conf")
        );
    }

    #[test]
    fn test_override_expands_home() {
        let mut resolver = resolver();
        assert_eq!(
            resolver.resolve_active("~/.config/custom.conf"),
            Path::new("/home/u/.config/custom.conf")
        );
    }

    #[test]
    fn test_override_is_sticky() {
        let mut resolver = resolver();
        resolver.resolve_active("/tmp/a.conf");
        assert_eq!(resolver.resolve_active(""), Path::new("/tmp/a.conf"));

        resolver.resolve_active("/tmp/b.conf");
        assert_eq!(resolver.resolve_active(""), Path::new("/tmp/b.conf"));
    }

    #[test]
    fn test_override_only_changes_active() {
        let mut resolver = resolver();
        let before = resolver.paths().clone();
        resolver.resolve_active("/tmp/a.conf");

        let after = resolver.paths();
        assert_eq!(after.global, before.global);
        assert_eq!(after.local, before.local);
        assert_eq!(after.session, before.session);
    }

    #[test]
    fn test_unknown_home_leaves_tilde() {
        let mut resolver = ConfigResolver::with_home("spaceman", None);
        assert_eq!(
            resolver.paths().local,
            PathBuf::from("~/.config/spaceman/config.conf")
        );
        assert_eq!(resolver.resolve_active("~/x.conf"), Path::new("~/x.conf"));
    }

    #[test]
    fn test_bare_tilde_is_not_expanded() {
        let resolver = resolver();
        assert_eq!(resolver.expand_path("~"), PathBuf::from("~"));
        assert_eq!(resolver.expand_path("~other/x"), PathBuf::from("~other/x"));
        assert_eq!(resolver.expand_path("rel/x.conf"), PathBuf::from("rel/x.conf"));
    }

    #[test]
    fn test_candidates_report_existence() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(".config/spaceman");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.conf"), "a: 1\n").unwrap();

        let resolver = ConfigResolver::with_home("spaceman", Some(dir.path().to_path_buf()));
        let candidates = resolver.candidates();

        let roles: Vec<_> = candidates.iter().map(|c| c.role).collect();
        assert_eq!(roles, ["active", "local", "session", "global"]);

        let exists = |role: &str| candidates.iter().find(|c| c.role == role).unwrap().exists;
        assert!(exists("active"));
        assert!(exists("local"));
        assert!(!exists("session"));
    }

    #[test]
    fn test_file_exists_rejects_directories() {
        let dir = TempDir::new().unwrap();
        assert!(!file_exists(dir.path()));
        assert!(!file_exists(&dir.path().join("missing")));
    }
}
