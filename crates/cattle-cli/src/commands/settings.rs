use anyhow::Result;
use clap::ValueEnum;

use cattle_application::AppContext;
use cattle_core::settings::Language;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Toggle {
    OfflineMode,
    AutoSync,
    Notifications,
    DarkMode,
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

pub fn show(context: &AppContext) {
    let settings = context.settings_store.snapshot();
    println!("Language:      {} ({})", settings.language.label(), settings.language);
    println!("Offline mode:  {}", on_off(settings.offline_mode));
    println!("Auto sync:     {}", on_off(settings.auto_sync));
    println!("Notifications: {}", on_off(settings.notifications));
    println!("Dark mode:     {}", on_off(settings.dark_mode));
}

pub fn language(context: &AppContext, code: &str) -> Result<()> {
    let language: Language = code.parse()?;
    context.settings_store.set_language(language);
    println!("✅ Language set to {}", language.label());
    Ok(())
}

pub fn toggle(context: &AppContext, setting: Toggle) {
    let store = &context.settings_store;
    match setting {
        Toggle::OfflineMode => store.toggle_offline_mode(),
        Toggle::AutoSync => store.toggle_auto_sync(),
        Toggle::Notifications => store.toggle_notifications(),
        Toggle::DarkMode => store.toggle_dark_mode(),
    }
    show(context);
}
