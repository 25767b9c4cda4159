//! Integrity behavior of the catalog schema: idempotent creation,
//! foreign-key rejection, cascade deletion.

use lapsel_core::{
    ComponentRepository, LaptopRepository, NewComponent, NewLaptop, Repos, RepositoryError,
};
use lapsel_db::{TestDb, setup_database};

fn new_laptop(cpu_id: i64, gpu_id: i64) -> NewLaptop {
    NewLaptop {
        image: "https://example.com/nitro5.jpg".to_string(),
        description: "Acer Nitro 5 / 15.6\" IPS / 16GB RAM".to_string(),
        composition: "15.6\" IPS 144Hz, 16GB, 512GB SSD".to_string(),
        url: "https://example.com/nitro5".to_string(),
        price: 34999,
        cpu_id,
        gpu_id,
    }
}

async fn seed_components(repos: &Repos) -> (i64, i64) {
    let cpu = repos
        .cpus
        .insert(&NewComponent::new(
            "Intel Core i5-12500H @ 2.50GHz",
            "https://example.com/cpu/i5-12500h",
            17500,
        ))
        .await
        .unwrap();
    let gpu = repos
        .gpus
        .insert(&NewComponent::new(
            "GeForce RTX 3050 Mobile, 4GB",
            "https://example.com/gpu/rtx3050m",
            8900,
        ))
        .await
        .unwrap();
    (cpu.id, gpu.id)
}

#[tokio::test]
async fn creating_the_schema_twice_does_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("laptops.db");

    let pool = setup_database(&db_path).await.unwrap();
    drop(pool);

    // Second run opens the existing file and re-applies the DDL.
    let pool = setup_database(&db_path).await.unwrap();
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM laptop")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn inserting_laptop_with_unknown_cpu_fails() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();
    let (_, gpu_id) = seed_components(&repos).await;

    let err = repos.laptops.insert(&new_laptop(999, gpu_id)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKey(_)), "got {err:?}");
}

#[tokio::test]
async fn inserting_laptop_with_unknown_gpu_fails() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();
    let (cpu_id, _) = seed_components(&repos).await;

    let err = repos.laptops.insert(&new_laptop(cpu_id, 999)).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKey(_)), "got {err:?}");
}

#[tokio::test]
async fn updating_laptop_to_dangling_reference_fails() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();
    let (cpu_id, gpu_id) = seed_components(&repos).await;

    let mut laptop = repos.laptops.insert(&new_laptop(cpu_id, gpu_id)).await.unwrap();
    laptop.gpu_id = 999;

    let err = repos.laptops.update(&laptop).await.unwrap_err();
    assert!(matches!(err, RepositoryError::ForeignKey(_)), "got {err:?}");
}

#[tokio::test]
async fn laptop_round_trips_with_identical_fields() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();
    let (cpu_id, gpu_id) = seed_components(&repos).await;

    let new = new_laptop(cpu_id, gpu_id);
    let inserted = repos.laptops.insert(&new).await.unwrap();
    let fetched = repos.laptops.get_by_id(inserted.id).await.unwrap();

    assert_eq!(fetched, inserted);
    assert_eq!(fetched.image, new.image);
    assert_eq!(fetched.description, new.description);
    assert_eq!(fetched.composition, new.composition);
    assert_eq!(fetched.url, new.url);
    assert_eq!(fetched.price, new.price);
    assert_eq!(fetched.cpu_id, cpu_id);
    assert_eq!(fetched.gpu_id, gpu_id);
}

#[tokio::test]
async fn deleting_referenced_cpu_cascades_to_laptops() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();

    // Explicit ids, as in a benchmark dump.
    repos
        .cpus
        .insert_with_id(1, &NewComponent::new("Intel Core i7-12700H @ 2.30GHz", "", 27000))
        .await
        .unwrap();
    repos
        .gpus
        .insert_with_id(1, &NewComponent::new("GeForce RTX 3060 Mobile, 6GB", "", 12500))
        .await
        .unwrap();

    let laptop = repos.laptops.insert(&new_laptop(1, 1)).await.unwrap();
    assert_eq!(repos.cpus.referencing_laptops(1).await.unwrap(), 1);

    repos.cpus.delete(1).await.unwrap();

    // The laptop went with its cpu; the gpu stayed.
    let err = repos.laptops.get_by_id(laptop.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound(_)));
    assert!(repos.laptops.list().await.unwrap().is_empty());
    assert_eq!(repos.gpus.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_referenced_gpu_cascades_to_laptops() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();
    let (cpu_id, gpu_id) = seed_components(&repos).await;

    repos.laptops.insert(&new_laptop(cpu_id, gpu_id)).await.unwrap();
    repos.laptops.insert(&new_laptop(cpu_id, gpu_id)).await.unwrap();

    repos.gpus.delete(gpu_id).await.unwrap();

    assert!(repos.laptops.list().await.unwrap().is_empty());
    assert_eq!(repos.cpus.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_unreferenced_component_leaves_laptops_alone() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();
    let (cpu_id, gpu_id) = seed_components(&repos).await;

    let spare = repos
        .gpus
        .insert(&NewComponent::new("Radeon 680M", "", 7800))
        .await
        .unwrap();

    repos.laptops.insert(&new_laptop(cpu_id, gpu_id)).await.unwrap();

    assert_eq!(repos.gpus.referencing_laptops(spare.id).await.unwrap(), 0);
    repos.gpus.delete(spare.id).await.unwrap();

    assert_eq!(repos.laptops.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_explicit_id_is_a_constraint_violation() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();

    repos
        .cpus
        .insert_with_id(7, &NewComponent::new("Apple M2", "", 15000))
        .await
        .unwrap();
    let err = repos
        .cpus
        .insert_with_id(7, &NewComponent::new("Apple M2 Pro", "", 21000))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::Constraint(_)), "got {err:?}");
}

#[tokio::test]
async fn deleting_missing_rows_reports_not_found() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();

    assert!(matches!(
        repos.cpus.delete(42).await.unwrap_err(),
        RepositoryError::NotFound(_)
    ));
    assert!(matches!(
        repos.laptops.delete(42).await.unwrap_err(),
        RepositoryError::NotFound(_)
    ));
}

#[tokio::test]
async fn views_join_component_scores_and_names() {
    let db = TestDb::new().await.unwrap();
    let repos = db.repos();
    let (cpu_id, gpu_id) = seed_components(&repos).await;

    let laptop = repos.laptops.insert(&new_laptop(cpu_id, gpu_id)).await.unwrap();
    let views = repos.laptops.list_views().await.unwrap();

    assert_eq!(views.len(), 1);
    let view = &views[0];
    assert_eq!(view.id, laptop.id);
    assert_eq!(view.cpu_score, 17500);
    assert_eq!(view.gpu_score, 8900);
    assert_eq!(view.cpu_name, "Intel Core i5-12500H @ 2.50GHz");
    assert_eq!(view.gpu_name, "GeForce RTX 3050 Mobile, 4GB");
}
