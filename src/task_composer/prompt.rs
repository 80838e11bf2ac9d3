use std::io::{self, BufRead, Stdout, StdinLock, Write};

use log::info;

use crate::error::{OmniError, Result};
use crate::task_composer::task_draft::{Field, TaskDraft};

/// Blocking question/answer source used to collect a task.
pub trait Prompter {
    /// Asks for a line of text. With no default, blank answers are asked again.
    fn ask(&mut self, label: &str, default: Option<&str>) -> io::Result<String>;

    fn confirm(&mut self, label: &str, default: bool) -> io::Result<bool>;

    /// Shows a notice between questions.
    fn say(&mut self, message: &str) -> io::Result<()>;
}

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        TerminalPrompter::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompter { input, output }
    }

    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the question was answered",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, label: &str, default: Option<&str>) -> io::Result<String> {
        loop {
            let answer = self.read_answer(&format!("{}: ", label))?;
            match default {
                _ if !answer.is_empty() => return Ok(answer),
                Some(default) => return Ok(default.to_string()),
                None => continue,
            }
        }
    }

    fn confirm(&mut self, label: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let answer = self.read_answer(&format!("{} {}: ", label, hint))?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Error: invalid input")?,
            }
        }
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

enum Question {
    Title,
    Flag,
    Optional(Field),
}

// Step mode questions, asked in this order
const STEPS: [(&str, Question); 8] = [
    ("-- Task", Question::Title),
    ("! Flag the action/task?", Question::Flag),
    (">  Project", Question::Optional(Field::Project)),
    ("@  Tag", Question::Optional(Field::Tag)),
    ("#  Start date", Question::Optional(Field::StartDate)),
    ("#  Due date", Question::Optional(Field::DueDate)),
    ("$  Duration", Question::Optional(Field::Duration)),
    ("// Notes", Question::Optional(Field::Note)),
];

fn answer_error(err: io::Error) -> OmniError {
    OmniError::io("cannot read answer", err)
}

/// Walks through every step-mode question and collects the answers.
pub fn ask_steps(prompter: &mut impl Prompter) -> Result<TaskDraft> {
    let mut draft = TaskDraft::default();

    for (label, question) in &STEPS {
        match question {
            Question::Title => loop {
                let title = prompter.ask(label, None).map_err(answer_error)?;
                if !title.trim().is_empty() {
                    draft.set(Field::Title, &title);
                    break;
                }
                prompter.say("Error: a task needs a title").map_err(answer_error)?;
            },
            Question::Flag => {
                draft.flagged = prompter.confirm(label, false).map_err(answer_error)?;
            }
            Question::Optional(field) => {
                let answer = prompter.ask(label, Some("")).map_err(answer_error)?;
                draft.set(*field, &answer);
            }
        }
    }

    if draft.get(Field::StartDate).is_some() && draft.get(Field::DueDate).is_none() {
        prompter
            .say("Note: Mail Drop reads a single date as the due date")
            .map_err(answer_error)?;
    }

    info!("Collected draft {:?}", draft);
    Ok(draft)
}

pub fn ask_sentence(prompter: &mut impl Prompter) -> Result<String> {
    prompter.ask("Task", None).map_err(answer_error)
}
