use serde::Serialize;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use ini::{Ini, ParseOption};
use log::{debug, info};

use crate::error::{OmniError, Result};

const APP_DIR_NAME: &str = "omnifocus";
const CONFIG_FILE_NAME: &str = "omni_config.ini";
const PLUGIN_FOLDER_NAME: &str = "plugins";
const SECTION: &str = "GENERAL";

pub const DEFAULT_HOST: &str = "smtp-mail.outlook.com";
pub const DEFAULT_PORT: u16 = 587;
pub const DEFAULT_FROM: &str = "test@live.com";
pub const DEFAULT_TO: &str = "test@sync.omnigroup.com";

// Mail settings read from the GENERAL section
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub from_mail: String,
    pub to_mail: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            from_mail: DEFAULT_FROM.to_string(),
            to_mail: DEFAULT_TO.to_string(),
        }
    }
}

/// Owns `omni_config.ini` and the `plugins` folder next to it.
///
/// The folder is resolved once in [`ConfigStore::new`]; nothing else in the
/// crate looks up the default location.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_file: PathBuf,
    plugin_dir: PathBuf,
}

/// Folder that holds the configuration file.
///
/// An explicit folder is used as given. Otherwise the per-user local config
/// directory is used and created when missing.
pub fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        return Ok(path.to_path_buf());
    }

    let base = dirs::config_local_dir().ok_or_else(|| {
        OmniError::Config("cannot determine the user configuration directory".to_string())
    })?;
    app_dir_in(&base)
}

pub(crate) fn app_dir_in(base: &Path) -> Result<PathBuf> {
    let dir = base.join(APP_DIR_NAME);
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        // Someone else created it first
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(err) => Err(OmniError::io(
            format!("cannot create directory {}", dir.display()),
            err,
        )),
    }
}

impl ConfigStore {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let dir = resolve_path(config_path)?;
        Ok(Self::in_dir(&dir))
    }

    pub fn in_dir(dir: &Path) -> Self {
        ConfigStore {
            config_file: dir.join(CONFIG_FILE_NAME),
            plugin_dir: dir.join(PLUGIN_FOLDER_NAME),
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn plugin_dir(&self) -> &Path {
        &self.plugin_dir
    }

    pub fn exists(&self) -> bool {
        self.config_file.is_file()
    }

    /// Writes the default configuration and creates the plugin folder.
    pub fn create(&self) -> Result<()> {
        self.create_with(&Configuration::default())
    }

    /// Writes `config` to a new file. An existing file is never overwritten.
    pub fn create_with(&self, config: &Configuration) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.config_file)
            .map_err(|err| {
                OmniError::io(
                    format!("cannot create {}", self.config_file.display()),
                    err,
                )
            })?;

        if !self.plugin_dir.exists() {
            ensure_dir(&self.plugin_dir)?;
        }
        file.write_all(render(config).as_bytes()).map_err(|err| {
            OmniError::io(format!("cannot write {}", self.config_file.display()), err)
        })?;

        info!("-- created {}", self.config_file.display());
        Ok(())
    }

    pub fn read(&self) -> Result<Configuration> {
        if !self.exists() {
            self.create()?;
        }

        // Values are kept verbatim, quotes and backslashes included
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..Default::default()
        };
        let ini = Ini::load_from_file_opt(&self.config_file, options).map_err(|err| match err {
            ini::Error::Io(source) => OmniError::io(
                format!("cannot read {}", self.config_file.display()),
                source,
            ),
            ini::Error::Parse(parse) => {
                OmniError::Config(format!("{}: {}", self.config_file.display(), parse))
            }
        })?;

        let config = parse(&ini, &self.config_file)?;
        debug!("-- read {}", self.config_file.display());
        Ok(config)
    }

    pub fn remove_config(&self) -> Result<()> {
        fs::remove_file(&self.config_file).map_err(|err| {
            OmniError::io(format!("cannot remove {}", self.config_file.display()), err)
        })?;
        info!("-- removed {}", self.config_file.display());
        Ok(())
    }

    pub fn remove_plugin_folder(&self) -> Result<()> {
        fs::remove_dir_all(&self.plugin_dir).map_err(|err| {
            OmniError::io(format!("cannot remove {}", self.plugin_dir.display()), err)
        })?;
        info!("-- removed {}", self.plugin_dir.display());
        Ok(())
    }

    /// Hands the configuration file to the system's default editor,
    /// bootstrapping it first if needed.
    pub fn open_in_editor(&self) -> Result<()> {
        if !self.exists() {
            self.create()?;
        }
        opener::open(&self.config_file).map_err(|err| {
            OmniError::io(
                format!("cannot open {}", self.config_file.display()),
                io::Error::other(err),
            )
        })
    }
}

fn render(config: &Configuration) -> String {
    format!(
        "[{SECTION}]\n\
         ; host - SMTP server name. For example for live.com/outlook.com - smtp-mail.outlook.com\n\
         host = {}\n\
         ; port - SMTP port. For example for live.com/outlook.com - 587\n\
         port = {}\n\
         ; from - mail address from which you send mails\n\
         from = {}\n\
         ; to - mail address to which you send mails. You can read more here https://support.omnigroup.com/omnifocus-mail-drop/\n\
         to = {}\n",
        config.host, config.port, config.from_mail, config.to_mail,
    )
}

fn parse(ini: &Ini, source: &Path) -> Result<Configuration> {
    let section = ini.section(Some(SECTION)).ok_or_else(|| {
        OmniError::Config(format!("{}: missing [{SECTION}] section", source.display()))
    })?;

    let field = |key: &str| -> Result<String> {
        let value = section
            .iter()
            .find(|(name, _)| name.trim().eq_ignore_ascii_case(key))
            .map(|(_, value)| value.trim());
        match value {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            Some(_) => Err(OmniError::Config(format!(
                "{}: key '{key}' in [{SECTION}] is empty",
                source.display()
            ))),
            None => Err(OmniError::Config(format!(
                "{}: key '{key}' is missing from [{SECTION}]",
                source.display()
            ))),
        }
    };

    let host = field("host")?;
    let raw_port = field("port")?;
    let from_mail = field("from")?;
    let to_mail = field("to")?;

    let port = match raw_port.parse::<u16>() {
        Ok(port) if port != 0 => port,
        _ => {
            return Err(OmniError::Config(format!(
                "{}: port '{raw_port}' is not a number between 1 and 65535",
                source.display()
            )))
        }
    };

    Ok(Configuration {
        host,
        port,
        from_mail,
        to_mail,
    })
}
