use anyhow::Result;

use cattle_application::AppContext;
use cattle_core::record::{RecordPeriod, RecordQuery};
use cattle_core::scan::format_confidence;

pub async fn list(context: &AppContext, search: &str, this_month: bool) -> Result<()> {
    let period = if this_month {
        RecordPeriod::ThisMonth
    } else {
        RecordPeriod::All
    };
    let records = context
        .records
        .search(&RecordQuery::new(search, period))
        .await?;

    if records.is_empty() {
        println!("No records found");
        return Ok(());
    }

    for record in &records {
        println!(
            "#{:<5} {}  {:<14} {:>4}  {}",
            record.id,
            record.date,
            record.breed,
            format_confidence(record.confidence),
            record.location
        );
        println!("       {}", record.image);
    }
    println!("\n{} record(s)", records.len());
    Ok(())
}
