#[cfg(test)]
mod tests {

    use std::fs;
    use tempfile::TempDir;

    use crate::error::OmniError;
    use crate::settings::{app_dir_in, ConfigStore, Configuration};
    use crate::task_composer::task_draft::TaskDraft;
    use crate::task_composer::{compose, Composition};

    #[test]
    fn test_first_read_bootstraps_defaults_once() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(Some(dir.path())).unwrap();

        let first = store.read().unwrap();
        let written = fs::read_to_string(store.config_file()).unwrap();
        let second = store.read().unwrap();

        assert_eq!(
            first,
            Configuration {
                host: "smtp-mail.outlook.com".to_string(),
                port: 587,
                from_mail: "test@live.com".to_string(),
                to_mail: "test@sync.omnigroup.com".to_string(),
            }
        );
        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(store.config_file()).unwrap(), written);
        assert!(store.plugin_dir().is_dir());
    }

    #[test]
    fn test_written_configuration_reads_back() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        let config = Configuration {
            host: "smtp.fastmail.com".to_string(),
            port: 465,
            from_mail: "me@fastmail.com".to_string(),
            to_mail: "me_abc12@sync.omnigroup.com".to_string(),
        };

        store.create_with(&config).unwrap();

        assert_eq!(store.read().unwrap(), config);
    }

    #[test]
    fn test_quotes_and_backslashes_read_back_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        let config = Configuration {
            host: "smtp\\host".to_string(),
            port: 587,
            from_mail: "\"a b\"@example.com".to_string(),
            to_mail: "'me'@sync.omnigroup.com".to_string(),
        };

        store.create_with(&config).unwrap();

        assert_eq!(store.read().unwrap(), config);
    }

    #[test]
    fn test_sentence_mode_is_unchanged() {
        let text = compose(Composition::Sentence("Buy milk".to_string())).unwrap();

        assert_eq!(text, "Buy milk");
    }

    #[test]
    fn test_step_mode_full_task() {
        let draft = TaskDraft {
            title: "Fix bathroom wiring".to_string(),
            flagged: true,
            project: Some("maintenance".to_string()),
            tag: Some("house".to_string()),
            start_date: Some(String::new()),
            due_date: Some("friday".to_string()),
            duration: Some("30min".to_string()),
            note: Some("It's driving me crazy.".to_string()),
        };

        let text = compose(Composition::Steps(draft)).unwrap();

        assert_eq!(
            text,
            " --Fix bathroom wiring! >maintenance @house #friday $30min //It's driving me crazy."
        );
    }

    #[test]
    fn test_step_mode_needs_title() {
        for title in ["", "   "] {
            let result = compose(Composition::Steps(TaskDraft::new(title)));
            assert!(matches!(result, Err(OmniError::Validation(_))));
        }
    }

    #[test]
    fn test_missing_port_is_config_error() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::in_dir(dir.path());
        fs::write(
            store.config_file(),
            "[GENERAL]\n; host - SMTP server name\nhost = smtp-mail.outlook.com\nfrom = test@live.com\nto = test@sync.omnigroup.com\n",
        )
        .unwrap();

        let err = store.read().unwrap_err();

        assert!(matches!(err, OmniError::Config(ref msg) if msg.contains("'port'")));
    }

    #[test]
    fn test_existing_config_folder_resolves() {
        let base = TempDir::new().unwrap();
        let existing = base.path().join("omnifocus");
        fs::create_dir(&existing).unwrap();
        fs::write(existing.join("omni_config.ini"), "[GENERAL]\n").unwrap();

        assert_eq!(app_dir_in(base.path()).unwrap(), existing);
        assert!(existing.join("omni_config.ini").is_file());
    }
}
