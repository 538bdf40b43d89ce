//! Case task aggregate.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::CaseId;

/// Maximum length for a task description.
pub const DESCRIPTION_MAX: usize = 300;

/// Form wire format for due dates.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable task identifier backed by the store's integer primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(i32);

impl TaskId {
    /// Wrap a persisted identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier for persistence queries.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors returned by [`TaskDraft::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyDescription,
    DescriptionTooLong { max: usize },
    /// Due date is missing or not `YYYY-MM-DD`.
    InvalidDueDate,
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::DescriptionTooLong { max } => {
                write!(f, "description must be at most {max} characters")
            }
            Self::InvalidDueDate => write!(f, "due date must be in YYYY-MM-DD format"),
        }
    }
}

impl std::error::Error for TaskValidationError {}

/// Validated payload for adding a task to a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    description: String,
    due_date: NaiveDate,
}

impl TaskDraft {
    /// Construct a draft from raw form inputs.
    pub fn try_from_parts(description: &str, due_date: &str) -> Result<Self, TaskValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        if description.chars().count() > DESCRIPTION_MAX {
            return Err(TaskValidationError::DescriptionTooLong {
                max: DESCRIPTION_MAX,
            });
        }

        let due_date = NaiveDate::parse_from_str(due_date.trim(), DUE_DATE_FORMAT)
            .map_err(|_| TaskValidationError::InvalidDueDate)?;

        Ok(Self {
            description: description.to_owned(),
            due_date,
        })
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }
}

/// A to-do item scoped to exactly one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    case: CaseId,
    description: String,
    due_date: NaiveDate,
    completed: bool,
}

impl Task {
    /// Build a task from persisted parts.
    pub fn new(
        id: TaskId,
        case: CaseId,
        description: String,
        due_date: NaiveDate,
        completed: bool,
    ) -> Self {
        Self {
            id,
            case,
            description,
            due_date,
            completed,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Identifier of the owning case; ownership is transitive through it.
    pub fn case(&self) -> CaseId {
        self.case
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}
