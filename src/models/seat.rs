use serde::Serialize;
use sqlx::FromRow;
use tracing::debug;

use crate::database::Database;

pub const DEFAULT_SEAT_COUNT: u32 = 20;
const DEFAULT_DEPARTMENT: &str = "Dept A";
const DEFAULT_PREFERENCE: &str = "Near Window";

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Seat {
    pub id: i64,
    pub name: String,
    #[serde(rename = "employeeId")]
    #[sqlx(rename = "employeeId")]
    pub employee_id: String,
    pub department: String,
    pub preference: String,
    pub assigned: bool,
}

/// Fields of a seat that does not exist yet; storage assigns the id.
#[derive(Debug, Clone)]
pub struct NewSeat {
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub preference: String,
}

impl Seat {
    // Все места в порядке первичного ключа
    pub async fn list(db: &Database) -> Result<Vec<Seat>, sqlx::Error> {
        let mut conn = db.pool.acquire().await?;
        sqlx::query_as::<_, Seat>(
            "SELECT id, name, employeeId, department, preference, assigned
             FROM seats
             ORDER BY id"
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// Marks the seat as assigned. Unknown or already assigned ids are not
    /// errors; the returned count is the number of rows touched.
    pub async fn assign(db: &Database, id: i64) -> Result<u64, sqlx::Error> {
        let mut tx = db.pool.begin().await?;
        let affected = sqlx::query("UPDATE seats SET assigned = 1 WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;

        debug!(seat_id = id, affected, "assign seat");
        Ok(affected)
    }

    pub async fn create(db: &Database, seat: &NewSeat) -> Result<i64, sqlx::Error> {
        let mut tx = db.pool.begin().await?;
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO seats (name, employeeId, department, preference, assigned)
             VALUES (?, ?, ?, ?, 0)
             RETURNING id"
        )
        .bind(&seat.name)
        .bind(&seat.employee_id)
        .bind(&seat.department)
        .bind(&seat.preference)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(seat_id = id, name = %seat.name, "seat added");
        Ok(id)
    }

    /// Inserts `Seat 1..Seat 20` when the table is empty. Returns how many
    /// rows were inserted (0 when seats already exist).
    pub async fn seed_defaults(db: &Database) -> Result<u64, sqlx::Error> {
        let mut tx = db.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM seats")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tx.commit().await?;
            return Ok(0);
        }

        for i in 1..=DEFAULT_SEAT_COUNT {
            sqlx::query(
                "INSERT INTO seats (name, employeeId, department, preference, assigned)
                 VALUES (?, ?, ?, ?, 0)"
            )
            .bind(format!("Seat {i}"))
            .bind(format!("EMP{i}"))
            .bind(DEFAULT_DEPARTMENT)
            .bind(DEFAULT_PREFERENCE)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        Ok(u64::from(DEFAULT_SEAT_COUNT))
    }
}
