use std::fmt;

use crate::domain::intent::{
    Intent, IntentKind, SLOT_PROJECT, SLOT_RANGE, SLOT_STATUS, SLOT_TICKET_NUMBER, SLOT_USERNAME,
};
use crate::error::{AppError, AppResult};

const OPEN_STATES: &str = "status in (Open, \"In Progress\", Reopened)";

/// A JQL string ready to hand to the search API. Slot values are interpolated
/// as spoken, without escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JqlQuery(pub String);

impl JqlQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a search intent asked for. Projects are stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Ticket {
        project: String,
        number: String,
    },
    ResolvedWithin {
        project: String,
        days: String,
    },
    OpenTickets {
        project: String,
    },
    Developer {
        project: String,
        username: Option<String>,
        status: Option<String>,
    },
}

impl Lookup {
    /// Reads the slots of a search intent. Intents that do not search are
    /// rejected.
    pub fn from_intent(intent: &Intent) -> AppResult<Self> {
        let kind = intent.kind();
        if !matches!(
            kind,
            IntentKind::GetTicketStatus | IntentKind::GetDeveloperStatus
        ) {
            return Err(AppError::Skill(format!(
                "intent {} does not search",
                intent.name
            )));
        }

        let project = intent
            .slot(SLOT_PROJECT)
            .map(str::to_uppercase)
            .ok_or_else(|| missing_slot(&intent.name, SLOT_PROJECT))?;

        let lookup = match kind {
            IntentKind::GetTicketStatus => {
                if let Some(number) = intent.slot(SLOT_TICKET_NUMBER) {
                    Lookup::Ticket {
                        project,
                        number: number.to_string(),
                    }
                } else if let Some(days) = intent.slot(SLOT_RANGE) {
                    Lookup::ResolvedWithin {
                        project,
                        days: days.to_string(),
                    }
                } else {
                    Lookup::OpenTickets { project }
                }
            }
            _ => {
                let username = intent.slot(SLOT_USERNAME).map(str::to_string);
                let status = intent.slot(SLOT_STATUS).map(str::to_string);
                if status.is_some() && username.is_none() {
                    return Err(missing_slot(&intent.name, SLOT_USERNAME));
                }
                Lookup::Developer {
                    project,
                    username,
                    status,
                }
            }
        };
        Ok(lookup)
    }

    pub fn jql(&self) -> JqlQuery {
        let jql = match self {
            Lookup::Ticket { project, number } => format!("key={project}-{number}"),
            Lookup::ResolvedWithin { project, days } => {
                format!("project={project} AND resolutiondate >= startOfDay(-{days})")
            }
            Lookup::Developer {
                project,
                username: Some(username),
                status: Some(status),
            } => format!("project={project} AND status = {status} AND assignee = {username}"),
            // Without a status the developer lookup degrades to the project's
            // open tickets; the username is not applied.
            Lookup::OpenTickets { project } | Lookup::Developer { project, .. } => {
                open_tickets(project)
            }
        };
        JqlQuery(jql)
    }
}

fn open_tickets(project: &str) -> String {
    format!("project={project} AND {OPEN_STATES} ORDER BY created DESC")
}

fn missing_slot(intent: &str, slot: &str) -> AppError {
    AppError::Skill(format!("intent {intent} is missing required slot {slot}"))
}
