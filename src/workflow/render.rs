//! Turns search outcomes into what the skill says.

use crate::domain::query::Lookup;
use crate::domain::search::SearchResult;
use crate::domain::speech::{OutputSpeech, SkillResponse};

const WELCOME: &str = "Welcome to the Jira Helper. You can ask a question like, what's the current status for this ticket? ... Now, what can I help you with.";
const WELCOME_REPROMPT: &str = "For instructions on what you can say, please say help me.";
const HELP: &str = "You can ask questions about Jira Status such as, what's the number of open tickets for Spring, or, you can say exit... Now, what can I help you with?";
const HELP_REPROMPT: &str = "You can say things like, what's the number of open tickets for Spring, or you can say exit... Now, what can I help you with?";
const GOODBYE: &str = "Goodbye";
const WHAT_ELSE: &str = "What else can I help with?";

pub fn welcome() -> SkillResponse {
    SkillResponse::ask(
        OutputSpeech::plain(WELCOME),
        OutputSpeech::plain(WELCOME_REPROMPT),
    )
}

pub fn help() -> SkillResponse {
    SkillResponse::ask(OutputSpeech::plain(HELP), OutputSpeech::plain(HELP_REPROMPT))
}

pub fn goodbye() -> SkillResponse {
    SkillResponse::tell(OutputSpeech::plain(GOODBYE))
}

/// Response for a search that returned, whatever the count.
pub fn search_succeeded(lookup: &Lookup, result: &SearchResult) -> SkillResponse {
    match lookup {
        Lookup::Ticket { project, number } => {
            let issue = match (result.total, result.first_issue()) {
                (0, _) | (_, None) => return unknown_ticket(project, number),
                (_, Some(issue)) => issue,
            };
            let mut speech = format!(
                "<speak><p>The Summary for ticket {} {} is the following:</p>",
                escape(project),
                digits(number)
            );
            let details = [
                ("Description", issue.summary()),
                ("Priority", issue.priority()),
                ("Reporter", issue.reporter()),
                ("Type", issue.issue_type()),
                ("Status", issue.status()),
            ];
            // Fields Jira left empty are skipped rather than spoken as blanks.
            for (label, value) in details {
                if let Some(value) = value {
                    speech.push_str(&format!(
                        "<p>{label}:<break time='0.5s'/>{}</p>",
                        escape(value)
                    ));
                }
            }
            speech.push_str("</speak>");
            ask_what_else(speech)
        }
        _ => SkillResponse::tell(OutputSpeech::ssml(format!(
            "<speak>There are {} tickets found with the specified criteria</speak>",
            result.total
        ))),
    }
}

/// Response for a search that could not be completed. The cause is logged by
/// the caller and never spoken.
pub fn search_failed(lookup: &Lookup) -> SkillResponse {
    match lookup {
        Lookup::Ticket { project, number } => unknown_ticket(project, number),
        Lookup::ResolvedWithin { project, .. } | Lookup::OpenTickets { project } => {
            ask_what_else(format!(
                "<speak>I'm sorry, I currently do not know the status for project: {}</speak>",
                escape(project)
            ))
        }
        Lookup::Developer {
            project,
            username,
            status,
        } => {
            let mut speech = format!(
                "<speak>I'm sorry, I currently cannot find tickets for user {} and project {}",
                escape(username.as_deref().unwrap_or("unknown")),
                escape(project)
            );
            if let Some(status) = status {
                speech.push_str(" with status ");
                speech.push_str(&escape(status));
            }
            speech.push_str("</speak>");
            ask_what_else(speech)
        }
    }
}

fn unknown_ticket(project: &str, number: &str) -> SkillResponse {
    ask_what_else(format!(
        "<speak>I'm sorry, I currently do not know the status for ticket: {} - {}</speak>",
        escape(project),
        digits(number)
    ))
}

fn ask_what_else(speech: String) -> SkillResponse {
    SkillResponse::ask(OutputSpeech::ssml(speech), OutputSpeech::plain(WHAT_ELSE))
}

fn digits(number: &str) -> String {
    format!("<say-as interpret-as='digits'>{}</say-as>", escape(number))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
