//! Two-phase profile picture state.
//!
//! `Confirmed(current)` → `Pending { local, previous }` while an upload is in
//! flight → `Confirmed(server)` on success, or `Unconfirmed { local, previous }`
//! when the server never confirmed. An unconfirmed picture keeps showing the
//! local image; restoring `previous` only happens through [`ProfilePicture::revert`].

/// Profile picture as displayed by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePicture {
    /// Server-known picture URL, if any.
    Confirmed(Option<String>),
    /// Local image shown optimistically while the upload runs.
    Pending {
        local: String,
        previous: Option<String>,
    },
    /// Upload failed or was not acknowledged; local image still shown.
    Unconfirmed {
        local: String,
        previous: Option<String>,
    },
}

impl Default for ProfilePicture {
    fn default() -> Self {
        ProfilePicture::Confirmed(None)
    }
}

impl ProfilePicture {
    /// The image reference a screen should render.
    pub fn display(&self) -> Option<&str> {
        match self {
            ProfilePicture::Confirmed(url) => url.as_deref(),
            ProfilePicture::Pending { local, .. } | ProfilePicture::Unconfirmed { local, .. } => {
                Some(local.as_str())
            }
        }
    }

    /// Last picture the server confirmed.
    pub fn confirmed(&self) -> Option<&str> {
        match self {
            ProfilePicture::Confirmed(url) => url.as_deref(),
            ProfilePicture::Pending { previous, .. }
            | ProfilePicture::Unconfirmed { previous, .. } => previous.as_deref(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ProfilePicture::Pending { .. })
    }

    /// Starts an optimistic update with a local image.
    pub fn begin_upload(&self, local: impl Into<String>) -> Self {
        ProfilePicture::Pending {
            local: local.into(),
            previous: self.confirmed().map(str::to_string),
        }
    }

    /// Server echoed the stored picture.
    pub fn confirm(self, server_url: impl Into<String>) -> Self {
        ProfilePicture::Confirmed(Some(server_url.into()))
    }

    /// Server never confirmed the pending picture.
    pub fn fail(self) -> Self {
        match self {
            ProfilePicture::Pending { local, previous } => {
                ProfilePicture::Unconfirmed { local, previous }
            }
            other => other,
        }
    }

    /// Drops an unconfirmed or pending local image and shows the last confirmed one.
    pub fn revert(self) -> Self {
        let previous = self.confirmed().map(str::to_string);
        ProfilePicture::Confirmed(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_displays_local() {
        let picture = ProfilePicture::Confirmed(Some("http://h/uploads/old.jpg".to_string()))
            .begin_upload("file:///new.jpg");
        assert!(picture.is_pending());
        assert_eq!(picture.display(), Some("file:///new.jpg"));
        assert_eq!(picture.confirmed(), Some("http://h/uploads/old.jpg"));
    }

    #[test]
    fn test_confirm_replaces_with_server_url() {
        let picture = ProfilePicture::default()
            .begin_upload("file:///new.jpg")
            .confirm("http://h/uploads/pfp.jpg");
        assert_eq!(
            picture,
            ProfilePicture::Confirmed(Some("http://h/uploads/pfp.jpg".to_string()))
        );
    }

    #[test]
    fn test_failure_keeps_local_until_reverted() {
        let failed = ProfilePicture::Confirmed(Some("old".to_string()))
            .begin_upload("new")
            .fail();
        assert_eq!(failed.display(), Some("new"));
        assert!(!failed.is_pending());

        let reverted = failed.revert();
        assert_eq!(reverted.display(), Some("old"));
    }

    #[test]
    fn test_fail_on_confirmed_is_noop() {
        let picture = ProfilePicture::Confirmed(None).fail();
        assert_eq!(picture, ProfilePicture::Confirmed(None));
    }
}
