use crate::model::{Action, AttributeType};
use chrono::NaiveDate;

pub mod init;
pub mod log;
pub mod status;
pub mod types;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One displayable line of the status table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub name: String,
    pub value: String,
    pub detail: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub cutoff: Option<NaiveDate>,
    pub status_rows: Vec<StatusRow>,
    pub listed_types: Vec<AttributeType>,
    pub appended: Option<Action>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_cutoff(mut self, cutoff: NaiveDate) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    pub fn with_status_rows(mut self, rows: Vec<StatusRow>) -> Self {
        self.status_rows = rows;
        self
    }

    pub fn with_listed_types(mut self, types: Vec<AttributeType>) -> Self {
        self.listed_types = types;
        self
    }

    pub fn with_appended(mut self, action: Action) -> Self {
        self.appended = Some(action);
        self
    }
}
