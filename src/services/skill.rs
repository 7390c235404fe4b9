use async_trait::async_trait;

use crate::domain::envelope::Session;
use crate::domain::intent::Intent;
use crate::domain::speech::SkillResponse;
use crate::error::AppResult;

/// Lifecycle hooks the request dispatcher drives for a voice skill.
#[async_trait]
pub trait SkillHandler: Send + Sync {
    async fn on_session_started(&self, _session: &Session) -> AppResult<()> {
        Ok(())
    }

    async fn on_launch(&self) -> AppResult<SkillResponse>;

    async fn on_intent(&self, intent: &Intent) -> AppResult<SkillResponse>;

    async fn on_session_ended(&self, reason: Option<&str>) -> AppResult<()>;
}
