use std::path::PathBuf;

use anyhow::Result;

use cattle_application::AppContext;
use cattle_core::scan::ImageRef;
use cattle_core::user::{ProfilePicture, ProfileUpdate};

/// Fields given on the command line; `None` keeps the stored value.
pub struct ProfileEdits {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
}

pub async fn show(context: &AppContext) -> Result<()> {
    let profile = context.profile.load().await?;
    println!("Mobile:   {}", profile.mobile);
    println!("Name:     {}", profile.full_name);
    println!("Email:    {}", profile.email);
    println!("Location: {}", profile.location);
    println!("Role:     {}", profile.role);
    println!(
        "Picture:  {}",
        profile.profile_picture.as_deref().unwrap_or("(none)")
    );
    Ok(())
}

pub async fn update(context: &AppContext, edits: ProfileEdits) -> Result<()> {
    let current = context.profile.load().await?;
    let mut update = ProfileUpdate::from(&current);
    if let Some(full_name) = edits.full_name {
        update.full_name = full_name;
    }
    if let Some(email) = edits.email {
        update.email = email;
    }
    if let Some(location) = edits.location {
        update.location = location;
    }
    if let Some(role) = edits.role {
        update.role = role;
    }

    let message = context.profile.save(&update).await?;
    println!("✅ {}", message);
    Ok(())
}

pub async fn picture(context: &AppContext, image: PathBuf) -> Result<()> {
    context.profile.load().await?;

    match context.profile.upload_picture(ImageRef::new(image)).await {
        Ok(picture) => {
            if let ProfilePicture::Confirmed(Some(url)) = &picture {
                println!("✅ Profile picture updated: {}", url);
            }
            Ok(())
        }
        Err(e) => {
            let reverted = context.profile.revert_picture();
            println!(
                "⚠️  Upload not confirmed; keeping {}",
                reverted.display().unwrap_or("no picture")
            );
            Err(e.into())
        }
    }
}
