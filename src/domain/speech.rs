#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechType {
    PlainText,
    Ssml,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpeech {
    pub speech: String,
    pub kind: SpeechType,
}

impl OutputSpeech {
    pub fn plain(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            kind: SpeechType::PlainText,
        }
    }

    pub fn ssml(speech: impl Into<String>) -> Self {
        Self {
            speech: speech.into(),
            kind: SpeechType::Ssml,
        }
    }
}

/// What the skill says back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillResponse {
    pub output: OutputSpeech,
    pub reprompt: Option<OutputSpeech>,
    pub should_end_session: bool,
}

impl SkillResponse {
    /// Non-terminal turn; the user is reprompted if they stay silent.
    pub fn ask(output: OutputSpeech, reprompt: OutputSpeech) -> Self {
        Self {
            output,
            reprompt: Some(reprompt),
            should_end_session: false,
        }
    }

    /// Terminal turn.
    pub fn tell(output: OutputSpeech) -> Self {
        Self {
            output,
            reprompt: None,
            should_end_session: true,
        }
    }
}
