//! Legal case aggregate.

use std::fmt;

use chrono::NaiveDateTime;

use crate::domain::UserId;

/// Maximum length for a case title.
pub const TITLE_MAX: usize = 200;
/// Maximum length for a client name.
pub const CLIENT_NAME_MAX: usize = 200;

/// Stable case identifier backed by the store's integer primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaseId(i32);

impl CaseId {
    /// Wrap a persisted identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier for persistence queries.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validation errors returned by [`CaseDraft::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseValidationError {
    EmptyTitle,
    TitleTooLong { max: usize },
    EmptyClientName,
    ClientNameTooLong { max: usize },
    EmptyDescription,
}

impl fmt::Display for CaseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::TitleTooLong { max } => write!(f, "title must be at most {max} characters"),
            Self::EmptyClientName => write!(f, "client name must not be empty"),
            Self::ClientNameTooLong { max } => {
                write!(f, "client name must be at most {max} characters")
            }
            Self::EmptyDescription => write!(f, "description must not be empty"),
        }
    }
}

impl std::error::Error for CaseValidationError {}

/// Validated payload for creating a case.
///
/// ## Invariants
/// - `title` and `client_name` are trimmed, non-empty, and bounded.
/// - `description` is trimmed and non-empty; free text otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDraft {
    title: String,
    client_name: String,
    description: String,
}

impl CaseDraft {
    /// Construct a draft from raw form inputs.
    pub fn try_from_parts(
        title: &str,
        client_name: &str,
        description: &str,
    ) -> Result<Self, CaseValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CaseValidationError::EmptyTitle);
        }
        if title.chars().count() > TITLE_MAX {
            return Err(CaseValidationError::TitleTooLong { max: TITLE_MAX });
        }

        let client_name = client_name.trim();
        if client_name.is_empty() {
            return Err(CaseValidationError::EmptyClientName);
        }
        if client_name.chars().count() > CLIENT_NAME_MAX {
            return Err(CaseValidationError::ClientNameTooLong {
                max: CLIENT_NAME_MAX,
            });
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(CaseValidationError::EmptyDescription);
        }

        Ok(Self {
            title: title.to_owned(),
            client_name: client_name.to_owned(),
            description: description.to_owned(),
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn client_name(&self) -> &str {
        self.client_name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// A legal matter owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    id: CaseId,
    owner: UserId,
    title: String,
    client_name: String,
    description: String,
    created_at: NaiveDateTime,
}

impl Case {
    /// Build a case from persisted parts.
    pub fn new(
        id: CaseId,
        owner: UserId,
        title: String,
        client_name: String,
        description: String,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            owner,
            title,
            client_name,
            description,
            created_at,
        }
    }

    pub fn id(&self) -> CaseId {
        self.id
    }

    /// Identifier of the owning user; the authorization comparand.
    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn client_name(&self) -> &str {
        self.client_name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
