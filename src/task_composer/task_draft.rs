// Fields of one task as collected in step mode
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub flagged: bool,
    pub project: Option<String>,
    pub tag: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub duration: Option<String>,
    pub note: Option<String>,
}

/// Slot a prompt answer is stored into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Project,
    Tag,
    StartDate,
    DueDate,
    Duration,
    Note,
}

// Marker written before each optional field, in output order
pub(crate) const MARKED_FIELDS: [(Field, &str); 6] = [
    (Field::Project, ">"),
    (Field::Tag, "@"),
    (Field::StartDate, "#"),
    (Field::DueDate, "#"),
    (Field::Duration, "$"),
    (Field::Note, "//"),
];

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        TaskDraft {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Stores a text answer. Blank answers clear the field.
    pub fn set(&mut self, field: Field, answer: &str) {
        let value = (!answer.is_empty()).then(|| answer.to_string());
        match field {
            Field::Title => self.title = answer.to_string(),
            Field::Project => self.project = value,
            Field::Tag => self.tag = value,
            Field::StartDate => self.start_date = value,
            Field::DueDate => self.due_date = value,
            Field::Duration => self.duration = value,
            Field::Note => self.note = value,
        }
    }

    /// Non-blank value of an optional field.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Title => Some(&self.title),
            Field::Project => self.project.as_ref(),
            Field::Tag => self.tag.as_ref(),
            Field::StartDate => self.start_date.as_ref(),
            Field::DueDate => self.due_date.as_ref(),
            Field::Duration => self.duration.as_ref(),
            Field::Note => self.note.as_ref(),
        };
        value.map(String::as_str).filter(|value| !value.is_empty())
    }
}
