//! Row mapping and error mapping helpers for `SQLite` queries.

use lapsel_core::{Component, Laptop, LaptopView, RepositoryError};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for component queries.
pub const COMPONENT_SELECT_COLUMNS: &str = "id, name, url, score";

/// Shared SELECT column list for laptop queries.
pub const LAPTOP_SELECT_COLUMNS: &str =
    "id, image, description, composition, url, price, cpu_id, gpu_id";

/// Map an sqlx error into the domain error space.
///
/// `SQLite` reports which constraint failed through the database error
/// kind; that distinction is what lets callers tell a dangling foreign key
/// from plain bad input.
pub fn map_sqlx_error(context: &str, e: &sqlx::Error) -> RepositoryError {
    use sqlx::error::ErrorKind;

    match e {
        sqlx::Error::RowNotFound => RepositoryError::NotFound(context.to_string()),
        sqlx::Error::Database(db) => match db.kind() {
            ErrorKind::ForeignKeyViolation => {
                RepositoryError::ForeignKey(format!("{context}: {db}"))
            }
            ErrorKind::NotNullViolation
            | ErrorKind::UniqueViolation
            | ErrorKind::CheckViolation => RepositoryError::Constraint(format!("{context}: {db}")),
            _ => RepositoryError::Storage(format!("{context}: {db}")),
        },
        _ => RepositoryError::Storage(format!("{context}: {e}")),
    }
}

/// Decode one column, tagging failures with the column name.
fn column<'r, T>(row: &'r SqliteRow, name: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(name)
        .map_err(|e| RepositoryError::Storage(format!("column {name}: {e}")))
}

/// Parse a database row into a `Component`.
pub fn row_to_component(row: &SqliteRow) -> Result<Component, RepositoryError> {
    Ok(Component {
        id: column(row, "id")?,
        name: column(row, "name")?,
        url: column(row, "url")?,
        score: column(row, "score")?,
    })
}

/// Parse a database row into a `Laptop`.
pub fn row_to_laptop(row: &SqliteRow) -> Result<Laptop, RepositoryError> {
    Ok(Laptop {
        id: column(row, "id")?,
        image: column(row, "image")?,
        description: column(row, "description")?,
        composition: column(row, "composition")?,
        url: column(row, "url")?,
        price: column(row, "price")?,
        cpu_id: column(row, "cpu_id")?,
        gpu_id: column(row, "gpu_id")?,
    })
}

/// Parse a joined row into a `LaptopView`.
pub fn row_to_laptop_view(row: &SqliteRow) -> Result<LaptopView, RepositoryError> {
    Ok(LaptopView {
        id: column(row, "id")?,
        image: column(row, "image")?,
        description: column(row, "description")?,
        composition: column(row, "composition")?,
        url: column(row, "url")?,
        price: column(row, "price")?,
        cpu_id: column(row, "cpu_id")?,
        gpu_id: column(row, "gpu_id")?,
        cpu_score: column(row, "cpu_score")?,
        gpu_score: column(row, "gpu_score")?,
        cpu_name: column(row, "cpu_name")?,
        gpu_name: column(row, "gpu_name")?,
    })
}
