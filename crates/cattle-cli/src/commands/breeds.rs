use anyhow::Result;

use cattle_core::breed_catalog::search_breeds;
use cattle_core::breed_library::{BreedInfo, find_breed, search_library};

/// Lists manual-selection breeds, or library entries with `details`.
pub fn search(query: &str, details: bool) -> Result<()> {
    if details {
        let breeds = search_library(query);
        if breeds.is_empty() {
            println!("No library breeds match '{}'", query);
        }
        for breed in breeds {
            println!("  {:<18} {:<8} {}", breed.name, breed.kind, breed.origin);
        }
        return Ok(());
    }

    let breeds = search_breeds(query);
    if breeds.is_empty() {
        println!("No breeds match '{}'", query);
        return Ok(());
    }
    for breed in breeds {
        println!("  {}", breed);
    }
    Ok(())
}

pub fn show(name: &str) -> Result<()> {
    let lookup = find_breed(name);
    print_info(lookup.name(), lookup.info());
    if !lookup.is_known() {
        println!("\n💡 Try: cattle breeds --details <origin or name>");
    }
    Ok(())
}

fn print_info(name: &str, info: &BreedInfo) {
    println!("🐄 {} ({})", name, info.kind);
    println!("   Origin:     {}", info.origin);
    println!("   Milk yield: {}", info.milk_yield);
    println!("   Traits:     {}", info.traits.join(", "));
    println!("\n{}", info.description);
}
