use anyhow::Result;

use cattle_application::AppContext;

pub async fn login(context: &AppContext, mobile: &str) -> Result<()> {
    let message = context.auth.request_otp(mobile).await?;
    println!("📨 {}", message);
    println!("💡 Next: cattle verify {} <otp>", mobile.trim());
    Ok(())
}

pub async fn verify(context: &AppContext, mobile: &str, otp: &str) -> Result<()> {
    let message = context.auth.verify(mobile, otp).await?;
    println!("✅ {}", message);
    Ok(())
}

pub fn logout(context: &AppContext) {
    context.auth.logout();
    println!("👋 Logged out");
}

pub fn whoami(context: &AppContext) {
    match context.session_store.user_mobile() {
        Some(mobile) => println!("Logged in as {}", mobile),
        None => println!("Not logged in (scans are uploaded as guest)"),
    }
}
