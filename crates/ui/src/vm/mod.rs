mod dashboard_vm;
mod progress_vm;
mod topics_vm;

pub use dashboard_vm::{DashboardVm, LevelLineVm, TopicProgressVm, map_dashboard};
pub use progress_vm::{
    AxisTickVm, BarChartVm, BarGroupVm, BarVm, DonutVm, LevelCardVm, ProgressReportVm, axis_step,
    map_progress_report,
};
pub use topics_vm::{SubTopicRowVm, TopicBoardVm, TopicCardVm};
