use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::context::AppContext;
use crate::domain::envelope::Session;
use crate::domain::intent::{Intent, IntentKind};
use crate::domain::query::Lookup;
use crate::domain::speech::SkillResponse;
use crate::error::{AppError, AppResult};
use crate::services::SkillHandler;
use crate::workflow::render;

/// Voice skill answering ticket and developer status questions from Jira.
pub struct JiraSkill {
    ctx: AppContext,
}

impl JiraSkill {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    async fn search(&self, lookup: Lookup) -> SkillResponse {
        let query = lookup.jql();
        debug!(jql = %query, "built search query");

        match self
            .ctx
            .issue_tracker
            .search(&query, self.ctx.config.max_results)
            .await
        {
            Ok(result) => render::search_succeeded(&lookup, &result),
            Err(error) => {
                warn!(%error, jql = %query, "Jira search failed");
                render::search_failed(&lookup)
            }
        }
    }
}

#[async_trait]
impl SkillHandler for JiraSkill {
    async fn on_session_started(&self, session: &Session) -> AppResult<()> {
        let application_id = session
            .application
            .as_ref()
            .map(|application| application.application_id.as_str());
        info!(
            session_id = ?session.session_id,
            application_id = ?application_id,
            configured_app_id = ?self.ctx.config.app_id,
            "session started"
        );
        Ok(())
    }

    async fn on_launch(&self) -> AppResult<SkillResponse> {
        Ok(render::welcome())
    }

    async fn on_intent(&self, intent: &Intent) -> AppResult<SkillResponse> {
        match intent.kind() {
            IntentKind::Help => Ok(render::help()),
            IntentKind::Stop | IntentKind::Cancel => Ok(render::goodbye()),
            IntentKind::Other(name) => Err(AppError::Skill(format!("unsupported intent: {name}"))),
            IntentKind::GetTicketStatus | IntentKind::GetDeveloperStatus => {
                let lookup = Lookup::from_intent(intent)?;
                Ok(self.search(lookup).await)
            }
        }
    }

    async fn on_session_ended(&self, reason: Option<&str>) -> AppResult<()> {
        info!(reason = reason.unwrap_or("unspecified"), "session ended");
        Ok(())
    }
}
