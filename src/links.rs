//! Deep links into the GitHub web UI.

use log::{info, warn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkOpenError {
    #[error("cannot open {url}: {reason}")]
    Unsupported { url: String, reason: String },
}

/// Opens a URL outside the app (normally the system browser).
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkOpenError>;
}

/// `{web_root}/{path}`, with exactly one slash between the two.
pub fn web_url(web_root: &str, path: &str) -> String {
    format!(
        "{}/{}",
        web_root.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<(), LinkOpenError> {
        match webbrowser::open(url) {
            Ok(()) => {
                info!("Opened {} in browser", url);
                Ok(())
            }
            Err(err) => {
                warn!("Failed to open {}: {}", url, err);
                Err(LinkOpenError::Unsupported {
                    url: url.to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }
}
