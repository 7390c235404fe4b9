use std::collections::HashMap;

pub const SLOT_PROJECT: &str = "Project";
pub const SLOT_TICKET_NUMBER: &str = "TicketNumber";
pub const SLOT_RANGE: &str = "Range";
pub const SLOT_USERNAME: &str = "Username";
pub const SLOT_STATUS: &str = "Status";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentKind {
    GetTicketStatus,
    GetDeveloperStatus,
    Help,
    Stop,
    Cancel,
    Other(String),
}

impl IntentKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "GetTicketStatus" => IntentKind::GetTicketStatus,
            "GetDeveloperStatus" => IntentKind::GetDeveloperStatus,
            "AMAZON.HelpIntent" => IntentKind::Help,
            "AMAZON.StopIntent" => IntentKind::Stop,
            "AMAZON.CancelIntent" => IntentKind::Cancel,
            other => IntentKind::Other(other.to_string()),
        }
    }
}

/// A recognized voice command and the slot values captured with it.
#[derive(Debug, Clone, Default)]
pub struct Intent {
    pub name: String,
    pub slots: HashMap<String, String>,
}

#[cfg(test)]
impl Intent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: HashMap::new(),
        }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        IntentKind::from_name(&self.name)
    }

    /// Slot value, treating an empty string the same as an absent slot.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
