//! JSON shapes exchanged with the voice platform.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::intent::Intent;
use crate::domain::speech::{OutputSpeech, SkillResponse, SpeechType};

const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub session: Option<Session>,
    pub request: SkillRequest,
}

impl RequestEnvelope {
    pub fn session_attributes(&self) -> Option<&Map<String, Value>> {
        self.session
            .as_ref()
            .and_then(|session| session.attributes.as_ref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum SkillRequest {
    LaunchRequest {
        #[serde(default)]
        request_id: Option<String>,
    },
    IntentRequest {
        #[serde(default)]
        request_id: Option<String>,
        intent: IntentPayload,
    },
    SessionEndedRequest {
        #[serde(default)]
        request_id: Option<String>,
        #[serde(default)]
        reason: Option<String>,
    },
}

impl SkillRequest {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SkillRequest::LaunchRequest { request_id }
            | SkillRequest::IntentRequest { request_id, .. }
            | SkillRequest::SessionEndedRequest { request_id, .. } => request_id.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SlotPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlotPayload {
    #[serde(default)]
    pub value: Option<String>,
}

impl From<IntentPayload> for Intent {
    fn from(payload: IntentPayload) -> Self {
        let slots = payload
            .slots
            .into_iter()
            .filter_map(|(name, slot)| slot.value.map(|value| (name, value)))
            .collect();
        Intent {
            name: payload.name,
            slots,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<Map<String, Value>>,
    pub response: ResponseBody,
}

impl ResponseEnvelope {
    /// Wraps a skill response, or an empty body when the platform expects no
    /// speech (session end).
    pub fn new(response: Option<&SkillResponse>, attributes: Option<Map<String, Value>>) -> Self {
        let response = match response {
            Some(response) => ResponseBody {
                output_speech: Some(SpeechPayload::from(&response.output)),
                reprompt: response.reprompt.as_ref().map(|reprompt| RepromptPayload {
                    output_speech: SpeechPayload::from(reprompt),
                }),
                should_end_session: Some(response.should_end_session),
            },
            None => ResponseBody::default(),
        };
        Self {
            version: RESPONSE_VERSION,
            session_attributes: attributes,
            response,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<SpeechPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<RepromptPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepromptPayload {
    pub output_speech: SpeechPayload,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum SpeechPayload {
    PlainText { text: String },
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl From<&OutputSpeech> for SpeechPayload {
    fn from(speech: &OutputSpeech) -> Self {
        match speech.kind {
            SpeechType::PlainText => SpeechPayload::PlainText {
                text: speech.speech.clone(),
            },
            SpeechType::Ssml => SpeechPayload::Ssml {
                ssml: speech.speech.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_intent_request() {
        let envelope: RequestEnvelope = serde_json::from_value(json!({
            "version": "1.0",
            "session": {
                "new": true,
                "sessionId": "amzn1.echo-api.session.1",
                "application": {"applicationId": "amzn1.ask.skill.1"},
                "attributes": {"lastProject": "CAM"},
                "user": {"userId": "amzn1.ask.account.1"}
            },
            "request": {
                "type": "IntentRequest",
                "requestId": "amzn1.echo-api.request.1",
                "timestamp": "2016-03-01T12:00:00Z",
                "intent": {
                    "name": "GetTicketStatus",
                    "slots": {
                        "Project": {"name": "Project", "value": "cam"},
                        "TicketNumber": {"name": "TicketNumber", "value": "42"},
                        "Range": {"name": "Range"}
                    }
                }
            }
        }))
        .unwrap();

        assert_eq!(envelope.request.request_id(), Some("amzn1.echo-api.request.1"));
        assert_eq!(
            envelope.session_attributes().unwrap()["lastProject"],
            json!("CAM")
        );
        let SkillRequest::IntentRequest { intent, .. } = envelope.request else {
            panic!("expected intent request");
        };
        let intent = Intent::from(intent);
        assert_eq!(intent.name, "GetTicketStatus");
        assert_eq!(intent.slot("TicketNumber"), Some("42"));
        assert!(!intent.slots.contains_key("Range"));
    }

    #[test]
    fn parses_launch_and_session_end() {
        let launch: RequestEnvelope =
            serde_json::from_value(json!({"request": {"type": "LaunchRequest"}})).unwrap();
        assert!(matches!(launch.request, SkillRequest::LaunchRequest { .. }));

        let ended: RequestEnvelope = serde_json::from_value(json!({
            "request": {"type": "SessionEndedRequest", "reason": "USER_INITIATED"}
        }))
        .unwrap();
        assert!(matches!(
            ended.request,
            SkillRequest::SessionEndedRequest { reason: Some(_), .. }
        ));
    }

    #[test]
    fn serializes_ask_response() {
        let response = SkillResponse::ask(
            OutputSpeech::ssml("<speak>Hi</speak>"),
            OutputSpeech::plain("Anything else?"),
        );
        let value = serde_json::to_value(ResponseEnvelope::new(Some(&response), None)).unwrap();
        assert_eq!(
            value,
            json!({
                "version": "1.0",
                "response": {
                    "outputSpeech": {"type": "SSML", "ssml": "<speak>Hi</speak>"},
                    "reprompt": {"outputSpeech": {"type": "PlainText", "text": "Anything else?"}},
                    "shouldEndSession": false
                }
            })
        );
    }

    #[test]
    fn session_end_has_empty_body() {
        let mut attributes = Map::new();
        attributes.insert("k".to_string(), json!(1));
        let value = serde_json::to_value(ResponseEnvelope::new(None, Some(attributes))).unwrap();
        assert_eq!(
            value,
            json!({"version": "1.0", "sessionAttributes": {"k": 1}, "response": {}})
        );
    }
}
