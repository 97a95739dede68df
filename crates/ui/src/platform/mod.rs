use std::sync::Arc;

mod desktop;

/// Opens resource links (LeetCode, YouTube, articles) outside the app window.
pub trait UiLinkOpener: Send + Sync {
    fn open_url(&self, url: &str);
}

pub type LinkOpenerRef = Arc<dyn UiLinkOpener>;

pub use desktop::DesktopLinkOpener;
