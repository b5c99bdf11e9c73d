use anyhow::Result;

use cattle_application::AppContext;
use cattle_core::scan::format_confidence;

pub async fn show(context: &AppContext) -> Result<()> {
    let dashboard = context.dashboard.load().await?;

    println!("🐄 Namaste, {}", dashboard.display_name);
    if let Some(picture) = &dashboard.profile_picture {
        println!("   Picture: {}", picture);
    }
    println!(
        "\n📊 Total scans: {}   This month: {}",
        dashboard.stats.total_scans, dashboard.stats.this_month
    );

    if dashboard.recent_scans.is_empty() {
        println!("\nNo scans yet. Try: cattle scan <image>");
        return Ok(());
    }

    println!("\n🕘 Recent scans:");
    for record in &dashboard.recent_scans {
        println!(
            "  {}  {:<14} {:>4}",
            record.date,
            record.breed,
            format_confidence(record.confidence)
        );
    }
    Ok(())
}
