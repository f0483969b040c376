//! # Profile Session
//!
//! The identity currently on display: display name, handle and avatar.
//!
//! A [`ProfileIdentity`] is a value. It is built once, handed to a screen
//! inside its [`Destination`](crate::core::navigator::Destination), and
//! replaced wholesale when the session changes:
//!
//! ```text
//! launch ──► initialize(None) ──► anonymous
//! search ok ──► adopt_from(user) ──► new identity
//! follower picked ──► adopt_from(user) ──► new identity
//! reset ──► reset() ──► anonymous
//! ```
//!
//! There are no setters. Changing what a screen shows means building a new
//! identity and asking the navigator for a transition.

use crate::github::RemoteUser;

/// Avatar shown whenever no avatar can be resolved.
pub const PLACEHOLDER_AVATAR_URL: &str =
    "https://icons.veryicon.com/png/o/internet--web/prejudice/user-128.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileIdentity {
    display_name: Option<String>,
    login_handle: Option<String>,
    avatar_url: String,
}

impl Default for ProfileIdentity {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl ProfileIdentity {
    /// The launch state: no name, no handle, placeholder avatar.
    pub fn anonymous() -> Self {
        Self {
            display_name: None,
            login_handle: None,
            avatar_url: PLACEHOLDER_AVATAR_URL.to_string(),
        }
    }

    /// Builds an identity from explicit parts. Empty strings count as absent.
    ///
    /// Without a name or a handle the result is the anonymous identity, avatar included.
    pub fn new(
        display_name: Option<String>,
        login_handle: Option<String>,
        avatar_url: Option<String>,
    ) -> Self {
        let display_name = non_empty(display_name);
        let login_handle = non_empty(login_handle);
        if display_name.is_none() && login_handle.is_none() {
            return Self::anonymous();
        }
        Self {
            display_name,
            login_handle,
            avatar_url: non_empty(avatar_url)
                .unwrap_or_else(|| PLACEHOLDER_AVATAR_URL.to_string()),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn login_handle(&self) -> Option<&str> {
        self.login_handle.as_deref()
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn is_anonymous(&self) -> bool {
        self.display_name.is_none() && self.login_handle.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Identity for a freshly mounted root, optionally seeded by the caller.
pub fn initialize(seed: Option<ProfileIdentity>) -> ProfileIdentity {
    seed.unwrap_or_else(ProfileIdentity::anonymous)
}

/// Drops whatever was displayed and goes back to the anonymous identity.
pub fn reset() -> ProfileIdentity {
    ProfileIdentity::anonymous()
}

/// Builds the identity for a fetched user.
///
/// A missing or empty `avatar_url` falls back to [`PLACEHOLDER_AVATAR_URL`].
pub fn adopt_from(user: &RemoteUser) -> ProfileIdentity {
    ProfileIdentity::new(
        user.name.clone(),
        user.login.clone(),
        user.avatar_url.clone(),
    )
}
