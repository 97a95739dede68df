mod components;
mod dashboard;
mod login;
mod progress;
mod register;
mod state;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use components::{LoadingPlaceholder, ProgressBar};
pub use dashboard::DashboardView;
pub use login::LoginView;
pub use progress::ProgressView;
pub use register::RegisterView;
pub use state::{ViewError, ViewState, fetch_failed, view_state_from_resource};
pub use topics::TopicsView;
