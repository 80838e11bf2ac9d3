pub mod prompt;
pub mod task_draft;

use log::debug;

use crate::error::{OmniError, Result};
use crate::task_composer::task_draft::{TaskDraft, MARKED_FIELDS};

/// Where the task text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composition {
    /// Transport text typed by the user in one go
    Sentence(String),
    /// Fields collected one prompt at a time
    Steps(TaskDraft),
}

pub fn compose(input: Composition) -> Result<String> {
    match input {
        Composition::Sentence(sentence) => Ok(compose_sentence(&sentence)),
        Composition::Steps(draft) => compose_steps(&draft),
    }
}

// Mail Drop parses the sentence itself, nothing to check here
pub fn compose_sentence(sentence: &str) -> String {
    sentence.to_string()
}

/// Serializes a draft into Mail Drop transport text.
///
/// The output starts with ` --<title>`, followed by `!` when flagged, then
/// each non-blank field with its marker in fixed order:
/// `>project @tag #start #due $duration //note`.
pub fn compose_steps(draft: &TaskDraft) -> Result<String> {
    if draft.title.trim().is_empty() {
        return Err(OmniError::Validation("a task needs a title".to_string()));
    }

    let mut text = format!(" --{}", draft.title);
    if draft.flagged {
        text.push('!');
    }

    for (field, marker) in MARKED_FIELDS {
        if let Some(value) = draft.get(field) {
            text.push(' ');
            text.push_str(marker);
            text.push_str(value);
        }
    }

    debug!("Composed task text {:?}", text);
    Ok(text)
}
