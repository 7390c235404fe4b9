pub mod issue_tracker;
pub mod skill;

pub use issue_tracker::IssueTrackerService;
pub use skill::SkillHandler;
