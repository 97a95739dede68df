pub mod app;
pub mod context;
pub mod guards;
pub mod platform;
pub mod routes;
pub mod session;
pub mod views;
pub mod vm;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use platform::{DesktopLinkOpener, LinkOpenerRef, UiLinkOpener};
pub use session::{SignalSession, UiSessionStore};
