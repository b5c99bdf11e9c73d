//! Profile use case with the two-phase profile picture update.

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;

use cattle_core::CattleError;
use cattle_core::api::BreedApi;
use cattle_core::error::Result;
use cattle_core::media::resolve_media_url;
use cattle_core::scan::ImageRef;
use cattle_core::user::{ProfilePicture, ProfileUpdate, UserProfile};

use crate::store::SessionStore;

pub struct ProfileService {
    api: Arc<dyn BreedApi>,
    session_store: Arc<SessionStore>,
    picture: RwLock<ProfilePicture>,
    /// Serializes uploads so `previous` always refers to a confirmed picture.
    upload_lock: Mutex<()>,
}

impl ProfileService {
    pub fn new(api: Arc<dyn BreedApi>, session_store: Arc<SessionStore>) -> Self {
        Self {
            api,
            session_store,
            picture: RwLock::new(ProfilePicture::default()),
            upload_lock: Mutex::new(()),
        }
    }

    /// Fetches the current user's profile with its picture URL resolved.
    pub async fn load(&self) -> Result<UserProfile> {
        let mobile = self.session_store.effective_mobile();
        let mut profile = self.api.get_profile(&mobile).await?;
        profile.profile_picture = profile
            .profile_picture
            .map(|path| resolve_media_url(self.api.base_url(), &path));

        self.set_picture(ProfilePicture::Confirmed(profile.profile_picture.clone()));
        Ok(profile)
    }

    /// Sends edited fields and returns the backend's acknowledgement message.
    pub async fn save(&self, update: &ProfileUpdate) -> Result<String> {
        let mobile = self.session_store.effective_mobile();
        let ack = self.api.update_profile(&mobile, update).await?;
        tracing::info!("[ProfileService] Profile updated");
        Ok(ack.message)
    }

    pub fn picture(&self) -> ProfilePicture {
        self.picture.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Shows `local` immediately, then uploads it.
    ///
    /// On success the server URL replaces the local image. On failure, or
    /// when the server does not return a path, the local image stays shown
    /// as `Unconfirmed` and the error is returned.
    pub async fn upload_picture(&self, local: ImageRef) -> Result<ProfilePicture> {
        let _guard = self.upload_lock.lock().await;

        let pending = self.picture().begin_upload(local.to_string());
        self.set_picture(pending.clone());

        let mobile = self.session_store.effective_mobile();
        let outcome = match self.api.upload_profile_picture(&mobile, &local).await {
            Ok(upload) if upload.success => upload
                .profile_picture
                .ok_or_else(|| CattleError::rejected("Upload response did not include a picture")),
            Ok(_) => Err(CattleError::rejected("Profile picture upload was not accepted")),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(path) => {
                let confirmed = pending.confirm(resolve_media_url(self.api.base_url(), &path));
                self.set_picture(confirmed.clone());
                tracing::info!("[ProfileService] Profile picture confirmed");
                Ok(confirmed)
            }
            Err(e) => {
                tracing::warn!("[ProfileService] Profile picture not confirmed: {}", e);
                self.set_picture(pending.fail());
                Err(e)
            }
        }
    }

    /// Drops an unconfirmed local picture and shows the last confirmed one.
    pub fn revert_picture(&self) -> ProfilePicture {
        let reverted = self.picture().revert();
        self.set_picture(reverted.clone());
        reverted
    }

    fn set_picture(&self, picture: ProfilePicture) {
        *self.picture.write().unwrap_or_else(|e| e.into_inner()) = picture;
    }
}
