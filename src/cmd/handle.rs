use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::{Instrument, debug, info_span};

use crate::domain::envelope::{RequestEnvelope, ResponseEnvelope, SkillRequest};
use crate::domain::intent::Intent;
use crate::error::AppResult;
use crate::services::SkillHandler;

#[derive(Debug, Clone)]
pub struct HandleCommandArgs {
    pub request: Option<PathBuf>,
}

/// Reads one request envelope (file or stdin) and returns the response to emit.
pub async fn run(handler: &dyn SkillHandler, args: HandleCommandArgs) -> AppResult<ResponseEnvelope> {
    let raw = match &args.request {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let envelope: RequestEnvelope = serde_json::from_str(&raw)?;
    dispatch(handler, envelope).await
}

pub async fn dispatch(
    handler: &dyn SkillHandler,
    envelope: RequestEnvelope,
) -> AppResult<ResponseEnvelope> {
    let request_id = envelope
        .request
        .request_id()
        .unwrap_or("unknown")
        .to_string();
    let span = info_span!("skill_request", request_id = %request_id);

    async move {
        let attributes = envelope.session_attributes().cloned();

        if let Some(session) = envelope.session.as_ref().filter(|session| session.new) {
            handler.on_session_started(session).await?;
        }

        let response = match envelope.request {
            SkillRequest::LaunchRequest { .. } => Some(handler.on_launch().await?),
            SkillRequest::IntentRequest { intent, .. } => {
                let intent = Intent::from(intent);
                debug!(intent = %intent.name, slots = ?intent.slots, "dispatching intent");
                Some(handler.on_intent(&intent).await?)
            }
            SkillRequest::SessionEndedRequest { reason, .. } => {
                handler.on_session_ended(reason.as_deref()).await?;
                None
            }
        };

        Ok(ResponseEnvelope::new(response.as_ref(), attributes))
    }
    .instrument(span)
    .await
}
