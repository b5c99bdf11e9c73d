use std::path::PathBuf;

use anyhow::{Result, bail};

use cattle_application::AppContext;
use cattle_core::breed_catalog::{MANUAL_BREEDS, is_known_breed};
use cattle_core::breed_library::find_breed;
use cattle_core::scan::{ImageRef, ScanPhase, ScanResultView, format_confidence};

pub async fn run(
    context: &AppContext,
    image: PathBuf,
    manual: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    if !image.is_file() {
        bail!("Image not found: {}", image.display());
    }

    let mut workflow = context.scan_workflow();
    workflow.capture(ImageRef::new(image))?;

    println!("🔍 Analyzing...");
    if let Err(e) = workflow.confirm_preview().await {
        if e.is_retryable() {
            println!("⚠️  Could not reach the classifier. Check the connection and try again.");
        }
        return Err(e.into());
    }

    let Some(view) = workflow.result_view() else {
        bail!("No result available in phase {}", workflow.phase());
    };
    print_result(&view, workflow.phase());

    if workflow.phase() == ScanPhase::ResultLow {
        match manual {
            Some(breed) => {
                if !is_known_breed(breed) {
                    tracing::debug!("[Scan] '{}' is not in the manual breed list", breed);
                }
                let view = workflow.select_manual_breed(breed)?;
                println!("✍️  Manually selected {}", view.top.breed);
            }
            None => {
                println!("\nNot sure? Pick a breed with --manual <breed>:");
                println!("  {}", MANUAL_BREEDS.join(", "));
                workflow.retake()?;
                return Ok(());
            }
        }
    }

    if dry_run {
        workflow.retake()?;
        println!("(dry run, result discarded)");
        return Ok(());
    }

    let saved = workflow.save()?;
    println!("💾 Saved {} ({})", saved.top.breed, saved.confidence_label());

    let lookup = find_breed(&saved.top.breed);
    if let Some(info) = lookup.is_known().then(|| lookup.info()) {
        println!("📖 {} from {}. More: cattle breed {}", info.name, info.origin, info.key);
    }
    Ok(())
}

fn print_result(view: &ScanResultView, phase: ScanPhase) {
    match phase {
        ScanPhase::ResultHigh => println!(
            "✅ {} ({} confidence)",
            view.top.breed,
            view.confidence_label()
        ),
        _ => println!(
            "🤔 Low confidence: best guess {} ({})",
            view.top.breed,
            view.confidence_label()
        ),
    }

    if !view.possible_matches.is_empty() {
        println!("   Possible matches:");
        for prediction in &view.possible_matches {
            println!(
                "   - {} ({})",
                prediction.breed,
                format_confidence(prediction.confidence)
            );
        }
    }
}
