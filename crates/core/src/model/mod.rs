mod ids;
mod progress;
mod session;
mod topic;
mod user;

pub use ids::{SubTopicId, TopicId, UserId};
pub use progress::{LevelCount, LevelStats, OverallProgress, ProgressSummary, TopicProgress};
pub use session::{Session, SessionEvent, SessionPhase};
pub use topic::{Level, SubTopic, Topic, TopicStatus};
pub use user::User;
