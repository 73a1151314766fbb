#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo2org::libs::config::Config;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points HOME/LOCALAPPDATA at a temporary directory for the duration of a test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.overwrite);
        assert!(config.summary);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            overwrite: false,
            summary: false,
        };
        let path = config.save().unwrap();
        assert!(path.ends_with("config.json"));
        assert!(path.exists());

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_fields_use_defaults(_ctx: &mut ConfigTestContext) {
        std::fs::write(Config::path().unwrap(), r#"{ "overwrite": false }"#).unwrap();

        let config = Config::read().unwrap();
        assert!(!config.overwrite);
        assert!(config.summary);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupt_config_is_an_error(_ctx: &mut ConfigTestContext) {
        std::fs::write(Config::path().unwrap(), "not json").unwrap();
        assert!(Config::read().is_err());
    }
}
