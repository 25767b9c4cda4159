//! Import command handler.
//!
//! Loads a JSON catalog file and inserts it in dependency order:
//! components first, then the laptops that reference them. Laptop entries
//! may reference components by explicit id or by a free-form name that is
//! fuzzy-resolved against the rows already in the table.
//!
//! A reference that doesn't resolve fails the import before any laptop row
//! is written. Component rows inserted earlier in the run stay committed,
//! so re-running a fixed file re-adds those components.

use std::path::Path;

use anyhow::{Context, Result, bail};

use lapsel_core::{
    CatalogFile, Component, ComponentKind, ComponentRef, ComponentRepository, ImportComponent,
    LaptopRepository, NewComponent, NewLaptop, Repos, best_match,
};

use crate::bootstrap::CliContext;

/// What an import run inserted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub cpus: usize,
    pub gpus: usize,
    pub laptops: usize,
}

/// Execute the import command.
pub async fn execute(ctx: &CliContext, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let catalog: CatalogFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", file.display()))?;

    let summary = import_catalog(ctx.repos(), &catalog).await?;

    println!(
        "Imported {} cpu(s), {} gpu(s), {} laptop(s).",
        summary.cpus, summary.gpus, summary.laptops
    );
    Ok(())
}

/// Insert a catalog into the repositories, components before laptops.
pub async fn import_catalog(repos: &Repos, catalog: &CatalogFile) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for entry in &catalog.cpus {
        insert_component(repos, ComponentKind::Cpu, entry).await?;
        summary.cpus += 1;
    }
    for entry in &catalog.gpus {
        insert_component(repos, ComponentKind::Gpu, entry).await?;
        summary.gpus += 1;
    }

    if catalog.laptops.is_empty() {
        return Ok(summary);
    }

    // Listed once after the component inserts so name references can see
    // both pre-existing rows and the ones this file just added.
    let cpus = repos.cpus.list().await?;
    let gpus = repos.gpus.list().await?;

    // Resolve every reference before inserting any laptop: one bad entry
    // fails the file without a partial laptop set. Component rows inserted
    // above stay committed either way.
    let mut resolved = Vec::with_capacity(catalog.laptops.len());
    for entry in &catalog.laptops {
        let cpu_id = resolve_ref(&entry.cpu, &cpus, ComponentKind::Cpu)?;
        let gpu_id = resolve_ref(&entry.gpu, &gpus, ComponentKind::Gpu)?;
        resolved.push((entry, cpu_id, gpu_id));
    }

    for (entry, cpu_id, gpu_id) in resolved {
        repos
            .laptops
            .insert(&NewLaptop {
                image: entry.image.clone(),
                description: entry.description.clone(),
                composition: entry.composition.clone(),
                url: entry.url.clone(),
                price: entry.price,
                cpu_id,
                gpu_id,
            })
            .await
            .with_context(|| format!("importing laptop '{}'", entry.description))?;
        summary.laptops += 1;
    }

    tracing::info!(
        cpus = summary.cpus,
        gpus = summary.gpus,
        laptops = summary.laptops,
        "catalog imported"
    );
    Ok(summary)
}

async fn insert_component(
    repos: &Repos,
    kind: ComponentKind,
    entry: &ImportComponent,
) -> Result<()> {
    let component = NewComponent::new(entry.name.clone(), entry.url.clone(), entry.score);
    let repo = match kind {
        ComponentKind::Cpu => &repos.cpus,
        ComponentKind::Gpu => &repos.gpus,
    };

    match entry.id {
        Some(id) => repo.insert_with_id(id, &component).await?,
        None => repo.insert(&component).await?,
    };
    Ok(())
}

/// Resolve an import reference to a component id.
///
/// Explicit ids are checked against the listed rows so a dangling
/// reference is reported by entry instead of surfacing as a storage error.
fn resolve_ref(
    reference: &ComponentRef,
    components: &[Component],
    kind: ComponentKind,
) -> Result<i64> {
    match reference {
        ComponentRef::Id(id) => {
            if components.iter().any(|c| c.id == *id) {
                Ok(*id)
            } else {
                bail!("no {kind} entry with id {id}")
            }
        }
        ComponentRef::Name(name) => match best_match(&[name], components, kind) {
            Some(index) => Ok(components[index].id),
            None => bail!("no {kind} entry matches '{name}'"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapsel_db::TestDb;

    fn sample_catalog() -> CatalogFile {
        serde_json::from_str(
            r#"{
                "cpus": [
                    {"id": 1, "name": "Intel Core i7-12700H @ 2.30GHz", "score": 27000},
                    {"name": "AMD Ryzen 5 6600H", "score": 19000}
                ],
                "gpus": [
                    {"id": 1, "name": "GeForce RTX 3060 Mobile, 6GB", "score": 12500}
                ],
                "laptops": [
                    {
                        "image": "https://example.com/a.jpg",
                        "description": "Legion 5 Pro / 16\" / 16GB",
                        "url": "https://example.com/a",
                        "price": 52999,
                        "cpu": "Ryzen 5 6600H",
                        "gpu": 1
                    },
                    {
                        "image": "https://example.com/b.jpg",
                        "description": "Katana GF66",
                        "url": "https://example.com/b",
                        "price": 47999,
                        "cpu": 1,
                        "gpu": "RTX 3060"
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn import_wires_references_by_id_and_name() {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();

        let summary = import_catalog(&repos, &sample_catalog()).await.unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                cpus: 2,
                gpus: 1,
                laptops: 2
            }
        );

        let laptops = repos.laptops.list().await.unwrap();
        assert_eq!(laptops.len(), 2);

        // "Ryzen 5 6600H" resolved to the auto-assigned second cpu.
        let ryzen = repos.cpus.list().await.unwrap()[1].clone();
        assert_eq!(laptops[0].cpu_id, ryzen.id);
        assert_eq!(laptops[0].gpu_id, 1);
        assert_eq!(laptops[1].cpu_id, 1);
        assert_eq!(laptops[1].gpu_id, 1);
    }

    #[tokio::test]
    async fn import_rejects_unresolvable_name() {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();

        let mut catalog = sample_catalog();
        catalog.laptops[0].cpu = ComponentRef::Name("Snapdragon X Elite".to_string());

        let err = import_catalog(&repos, &catalog).await.unwrap_err();
        assert!(err.to_string().contains("Snapdragon"), "got {err}");
        assert!(repos.laptops.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn import_rejects_dangling_id() {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();

        let mut catalog = sample_catalog();
        catalog.laptops[1].gpu = ComponentRef::Id(99);

        let err = import_catalog(&repos, &catalog).await.unwrap_err();
        assert!(err.to_string().contains("99"), "got {err}");

        // The entry before the bad one was not inserted either.
        assert!(repos.laptops.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn execute_imports_a_file_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        std::fs::write(
            &catalog,
            serde_json::to_string(&sample_catalog()).unwrap(),
        )
        .unwrap();

        let config = crate::bootstrap::CliConfig {
            database_path: dir.path().join("laptops.db"),
        };
        let ctx = crate::bootstrap::bootstrap(config).await.unwrap();

        execute(&ctx, &catalog).await.unwrap();
        assert_eq!(ctx.repos().laptops.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn import_of_empty_catalog_is_a_noop() {
        let db = TestDb::new().await.unwrap();
        let repos = db.repos();

        let summary = import_catalog(&repos, &CatalogFile::default()).await.unwrap();
        assert_eq!(summary, ImportSummary::default());
        assert!(repos.laptops.list().await.unwrap().is_empty());
    }
}
