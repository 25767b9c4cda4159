//! Handlers for the `laptop` command family.

use anyhow::{Result, bail};

use lapsel_core::{ComponentKind, ComponentRepository, LaptopRepository, NewLaptop, best_match};

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Arguments for `laptop add`, collected from clap.
pub struct AddArgs {
    pub image: String,
    pub description: String,
    pub composition: String,
    pub url: String,
    pub price: i64,
    pub cpu_id: Option<i64>,
    pub gpu_id: Option<i64>,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
}

/// Resolve a component selection to a database id.
///
/// An explicit id wins; otherwise the name is fuzzy-matched against the
/// stored entries and the resolution is echoed so the user can catch a
/// bad match.
async fn resolve_component(
    ctx: &CliContext,
    kind: ComponentKind,
    id: Option<i64>,
    name: Option<&str>,
) -> Result<i64> {
    if let Some(id) = id {
        return Ok(id);
    }
    let Some(name) = name else {
        bail!("provide --{kind}-id or --{kind} <name>");
    };

    let components = ctx.components(kind).list().await?;
    let Some(index) = best_match(&[name], &components, kind) else {
        bail!("no {kind} entry matches '{name}'; see 'lapsel {kind} list'");
    };

    let matched = &components[index];
    println!(
        "Resolved {kind} '{name}' -> '{}' (ID {}).",
        matched.display_name(kind),
        matched.id
    );
    Ok(matched.id)
}

/// Add a laptop offer.
pub async fn add(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let cpu_id = resolve_component(ctx, ComponentKind::Cpu, args.cpu_id, args.cpu.as_deref()).await?;
    let gpu_id = resolve_component(ctx, ComponentKind::Gpu, args.gpu_id, args.gpu.as_deref()).await?;

    let laptop = ctx
        .repos()
        .laptops
        .insert(&NewLaptop {
            image: args.image,
            description: args.description,
            composition: args.composition,
            url: args.url,
            price: args.price,
            cpu_id,
            gpu_id,
        })
        .await?;

    println!("Added laptop '{}' (ID {}).", laptop.description, laptop.id);
    Ok(())
}

/// List all laptops with their component references.
pub async fn list(ctx: &CliContext) -> Result<()> {
    let laptops = ctx.repos().laptops.list().await?;

    if laptops.is_empty() {
        println!("No laptops in the database.");
        println!("Use 'lapsel laptop add' or 'lapsel import <file>' to add some.");
        return Ok(());
    }

    println!("Found {} laptop(s):\n", laptops.len());

    println!(
        "{:<5} {:<10} {:<6} {:<6} {:<40} Url",
        "ID", "Price", "Cpu", "Gpu", "Description"
    );
    print_separator(110);

    for laptop in laptops {
        println!(
            "{:<5} {:<10} {:<6} {:<6} {:<40} {}",
            laptop.id,
            laptop.price,
            laptop.cpu_id,
            laptop.gpu_id,
            truncate_string(&laptop.description, 39),
            laptop.url
        );
    }

    Ok(())
}

/// Remove a laptop by id.
pub async fn remove(ctx: &CliContext, id: i64) -> Result<()> {
    ctx.repos().laptops.delete(id).await?;
    println!("Removed laptop {id}.");
    Ok(())
}
