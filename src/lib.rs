//! Workspace facade crate.
//!
//! Re-exports the workspace crates so host applications can depend on
//! `drive-recv` alone and pick the desktop bridges through the
//! `desktop-shims` feature.

pub use bridge_traits;
pub use core_runtime;
pub use provider_google_drive;

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop;

pub use provider_google_drive::{
    DownloadRequest, DriveReceiver, GoogleDriveError, ReceiveRequest,
};
