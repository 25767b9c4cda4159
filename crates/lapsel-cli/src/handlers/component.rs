//! Handlers for the `cpu` and `gpu` command families.
//!
//! Both families share these handlers; the `ComponentKind` picked at
//! dispatch decides which table is touched.

use anyhow::Result;

use lapsel_core::{ComponentKind, ComponentRepository, NewComponent};

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};
use crate::utils::input;

/// Add a benchmark entry.
pub async fn add(
    ctx: &CliContext,
    kind: ComponentKind,
    name: &str,
    url: &str,
    score: i64,
) -> Result<()> {
    let component = ctx
        .components(kind)
        .insert(&NewComponent::new(name, url, score))
        .await?;

    println!(
        "Added {kind} '{}' (ID {}, score {}).",
        component.display_name(kind),
        component.id,
        component.score
    );
    Ok(())
}

/// List all entries of one component table.
pub async fn list(ctx: &CliContext, kind: ComponentKind) -> Result<()> {
    let components = ctx.components(kind).list().await?;

    if components.is_empty() {
        println!("No {kind} entries in the database.");
        println!("Use 'lapsel {kind} add <name> --score <score>' to add one.");
        return Ok(());
    }

    println!("Found {} {kind} entr(ies):\n", components.len());

    println!("{:<5} {:<8} {:<40} Url", "ID", "Score", "Name");
    print_separator(90);

    for component in components {
        println!(
            "{:<5} {:<8} {:<40} {}",
            component.id,
            component.score,
            truncate_string(component.display_name(kind), 39),
            component.url
        );
    }

    Ok(())
}

/// Remove an entry, warning about the laptops the cascade will take.
pub async fn remove(ctx: &CliContext, kind: ComponentKind, id: i64, force: bool) -> Result<()> {
    let repo = ctx.components(kind);
    let component = repo.get_by_id(id).await?;
    let referencing = repo.referencing_laptops(id).await?;

    if !force {
        println!(
            "Removing {kind} '{}' (ID {id}).",
            component.display_name(kind)
        );
        if referencing > 0 {
            println!("Cascade will also delete {referencing} referencing laptop(s).");
        }

        let confirm = input::prompt_confirmation("Are you sure?")?;
        if !confirm {
            println!("Remove operation cancelled.");
            return Ok(());
        }
    }

    repo.delete(id).await?;

    if referencing > 0 {
        println!("Removed {kind} {id} and {referencing} referencing laptop(s).");
    } else {
        println!("Removed {kind} {id}.");
    }
    Ok(())
}
