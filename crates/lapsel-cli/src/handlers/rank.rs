//! Rank command handler.
//!
//! Prints the selector table: laptops ordered by weighted price per
//! benchmark point, best value first.

use anyhow::Result;

use lapsel_core::{LaptopRepository, Priorities, rank};

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Execute the rank command.
pub async fn execute(ctx: &CliContext, cpu_weight: i64, gpu_weight: i64, quantity: usize) -> Result<()> {
    let views = ctx.repos().laptops.list_views().await?;

    if views.is_empty() {
        println!("No laptops to rank.");
        println!("Use 'lapsel import <file>' to load a catalog first.");
        return Ok(());
    }

    let priorities = Priorities {
        cpu: cpu_weight,
        gpu: gpu_weight,
        quantity,
    };
    let ranked = rank(&views, priorities);

    println!(
        "Top {} of {} laptop(s) (cpu weight {}, gpu weight {}):\n",
        ranked.len(),
        views.len(),
        priorities.clamped().cpu,
        priorities.clamped().gpu
    );

    println!("{:<7} {:<10} {:<40} Url", "Score", "Price", "Name");
    print_separator(110);

    for entry in &ranked {
        println!(
            "{:<7} {:<10} {:<40} {}",
            entry.total_score,
            entry.laptop.price,
            truncate_string(entry.laptop.short_description(), 39),
            entry.laptop.url
        );
    }

    Ok(())
}
