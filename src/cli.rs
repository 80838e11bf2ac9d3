use std::path::PathBuf;

use clap::Parser;
use log::{error, info, LevelFilter};

use crate::error::Result;
use crate::logging::parse_level;
use crate::mail_sender;
use crate::settings::{ConfigStore, Configuration};
use crate::task_composer::prompt::{self, Prompter, TerminalPrompter};
use crate::task_composer::{self, Composition};

const SYNTAX_HELP: &str = "\
Launch 'omni -s' for step by step task creation or 'omni' to type the task as one sentence.

Example for 'omni':
  --Fix bathroom wiring! @house ::maintenance #friday #next monday $30 min //It's driving me crazy.

Syntax rules:
  --       Task/Action
  !        Flag, at the end of the Task/Action
  > or ::  Project
  @        Tag
  #        Start date, as a date expression
  #        Due date, as a date expression (a single date is the due date)
  $        Time estimate, like 5m, 1h
  //       Notes";

/// OmniFocus Mail Drop from the command line
#[derive(Parser, Debug)]
#[command(name = "omni", version, about, after_help = SYNTAX_HELP)]
pub struct Cli {
    /// Create the task/action step by step
    #[arg(short = 's', long = "step")]
    pub step: bool,

    /// Open the configuration file for editing
    #[arg(long = "config", conflicts_with = "step")]
    pub open_config: bool,

    /// Remove the configuration file and the plugin folder
    #[arg(long, conflicts_with_all = ["step", "open_config"])]
    pub reset: bool,

    /// Folder holding an external omni_config.ini
    #[arg(short = 'p', long = "config-path", value_parser = existing_dir)]
    pub config_path: Option<PathBuf>,

    /// ERROR, WARN, INFO, DEBUG or TRACE
    #[arg(
        short = 'l',
        long = "log-level",
        visible_alias = "log_level",
        default_value = "ERROR",
        value_parser = parse_level
    )]
    pub log_level: LevelFilter,
}

fn existing_dir(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("'{}' is not an existing directory", value))
    }
}

fn log_configuration(config: &Configuration) {
    match serde_json::to_string_pretty(config) {
        Ok(json) => info!("Configuration {}", json),
        Err(e) => error!("Error converting configuration to JSON: {}", e),
    }
}

/// Asks for the task in the chosen mode and returns the transport text.
pub fn compose_task(step: bool, prompter: &mut impl Prompter) -> Result<String> {
    let input = if step {
        Composition::Steps(prompt::ask_steps(prompter)?)
    } else {
        Composition::Sentence(prompt::ask_sentence(prompter)?)
    };
    let text = task_composer::compose(input)?;
    info!("TASK: {}", text);
    Ok(text)
}

pub async fn entrypoint(cli: Cli) -> Result<()> {
    let store = ConfigStore::new(cli.config_path.as_deref())?;
    info!("Configuration file {}", store.config_file().display());
    info!("Plugin folder {}", store.plugin_dir().display());

    if cli.reset {
        store.remove_config()?;
        return store.remove_plugin_folder();
    }
    if cli.open_config {
        return store.open_in_editor();
    }

    let config = store.read()?;
    log_configuration(&config);

    let mut prompter = TerminalPrompter::stdio();
    let text = compose_task(cli.step, &mut prompter)?;

    mail_sender::send_task(&config, &text).await
}
