pub mod config {
    use std::path::{Path, PathBuf};

    use anyhow::Context as _;
    use etcetera::BaseStrategy as _;
    use grouplist_core::locale::DEFAULT_PREFIX;
    use serde::{Deserialize, Serialize};

    /// Load a TOML config file, returning `T::default()` if the file doesn't exist.
    pub fn load_config<T: Default + serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file at {}, using defaults", path.display());
                Ok(T::default())
            }
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    /// Configuration for the group listing.
    #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Config {
        /// Where groups and tracks are stored.
        pub storage: Storage,
        /// How the listing command is invoked.
        pub command: Command,
        /// Message settings.
        pub locale: Locale,
    }
    impl Config {
        pub const FILENAME: &str = "grouplist.toml";

        /// Makes relative paths in the config relative to the directory of the config
        /// file it was read from, rather than the working directory.
        pub fn resolve_paths(&mut self, config_path: &Path) {
            let base = config_path.parent().unwrap_or(Path::new(""));
            self.storage.data_dir = base.join(&self.storage.data_dir);
            if let Some(file) = &mut self.locale.file {
                *file = base.join(&*file);
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Storage {
        /// Directory containing `groups/` and `tracks/`.
        pub data_dir: PathBuf,
    }
    impl Default for Storage {
        fn default() -> Self {
            Self {
                data_dir: default_data_dir(),
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Command {
        /// The label used when building click commands, without the leading `/`.
        pub label: String,
    }
    impl Default for Command {
        fn default() -> Self {
            Self {
                label: "lp".to_string(),
            }
        }
    }

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    pub struct Locale {
        /// Prefix for header and error messages. `&` formatting codes are allowed.
        pub prefix: String,
        /// Optional TOML file of message template overrides.
        pub file: Option<PathBuf>,
    }
    impl Default for Locale {
        fn default() -> Self {
            Self {
                prefix: DEFAULT_PREFIX.to_string(),
                file: None,
            }
        }
    }

    /// `<data dir>/grouplist`, or `./data` if the platform has no data directory.
    fn default_data_dir() -> PathBuf {
        etcetera::choose_base_strategy()
            .map(|strategy| strategy.data_dir().join("grouplist"))
            .unwrap_or_else(|_| PathBuf::from("data"))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_partial_config_fills_defaults() {
            let config: Config = toml::from_str(
                r#"
                [command]
                label = "perms"
                "#,
            )
            .unwrap();
            assert_eq!(config.command.label, "perms");
            assert_eq!(config.locale, Locale::default());
            assert_eq!(config.storage, Storage::default());
        }

        #[test]
        fn test_missing_file_is_default() {
            let dir = tempfile::tempdir().unwrap();
            let config: Config = load_config(&dir.path().join(Config::FILENAME)).unwrap();
            assert_eq!(config, Config::default());
        }

        #[test]
        fn test_invalid_file_is_an_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join(Config::FILENAME);
            std::fs::write(&path, "[storage]\ndata_dir = 5\n").unwrap();
            assert!(load_config::<Config>(&path).is_err());
        }

        #[test]
        fn test_reads_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join(Config::FILENAME);
            std::fs::write(
                &path,
                "[storage]\ndata_dir = \"/srv/perms\"\n[locale]\nprefix = \"\"\nfile = \"lang.toml\"\n",
            )
            .unwrap();
            let config: Config = load_config(&path).unwrap();
            assert_eq!(config.storage.data_dir, PathBuf::from("/srv/perms"));
            assert_eq!(config.locale.prefix, "");
            assert_eq!(config.locale.file, Some(PathBuf::from("lang.toml")));
        }

        #[test]
        fn test_relative_paths_follow_the_config_file() {
            let mut config = Config {
                storage: Storage {
                    data_dir: PathBuf::from("data"),
                },
                locale: Locale {
                    file: Some(PathBuf::from("lang.toml")),
                    ..Default::default()
                },
                ..Default::default()
            };
            config.resolve_paths(Path::new("demos/grouplist.toml"));
            assert_eq!(config.storage.data_dir, PathBuf::from("demos/data"));
            assert_eq!(config.locale.file, Some(PathBuf::from("demos/lang.toml")));
        }

        #[test]
        fn test_absolute_paths_are_kept() {
            let mut config = Config {
                storage: Storage {
                    data_dir: PathBuf::from("/srv/perms"),
                },
                ..Default::default()
            };
            config.resolve_paths(Path::new("demos/grouplist.toml"));
            assert_eq!(config.storage.data_dir, PathBuf::from("/srv/perms"));
            assert_eq!(config.locale.file, None);

            config.locale.file = Some(PathBuf::from("lang.toml"));
            config.resolve_paths(Path::new("grouplist.toml"));
            assert_eq!(config.locale.file, Some(PathBuf::from("lang.toml")));
        }

        #[test]
        fn test_default_prefix_matches_locale_default() {
            assert_eq!(Locale::default().prefix, DEFAULT_PREFIX);
        }
    }
}
