use crate::models::FighterRecord;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the fighter store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("incomplete record for {fighter}: {attribute} is NULL")]
    IncompleteRecord {
        fighter: String,
        attribute: &'static str,
    },
}

/// SQLite-backed fighter attribute store
///
/// Rows are written by an offline bulk-ingestion process and read-only at
/// serving time. Lookups are keyed by the unique fighter name.
pub struct FighterStore {
    pool: SqlitePool,
}

impl FighterStore {
    /// Open the store and run pending migrations
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Look up a fighter's full attribute record by name
    ///
    /// Returns `Ok(None)` on a clean miss. A resolved row with a NULL
    /// required attribute fails with `IncompleteRecord` naming the
    /// attribute; stats are never defaulted to zero.
    pub async fn lookup(&self, name: &str) -> Result<Option<FighterRecord>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT name, gender, stance, rating, current_win_streak,
                   current_lose_streak, avg_sig_str_landed, avg_sig_str_pct,
                   avg_sub_att, avg_td_landed, avg_td_pct, wins, losses,
                   draws, wins_by_decision, wins_by_ko, wins_by_submission,
                   total_rounds_fought, total_title_bouts, height_cm,
                   reach_cm, weight_lb, age, days_since_last_fight,
                   last_fight_date
            FROM fighters
            WHERE name = ?
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(record_from_row(name, &row)?)),
            None => {
                tracing::debug!("No record for fighter: {}", name);
                Ok(None)
            }
        }
    }

    /// List every fighter name, for the autocomplete roster
    pub async fn all_names(&self) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query("SELECT name FROM fighters ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        let names: Vec<String> = rows.iter().map(|row| row.get("name")).collect();

        tracing::debug!("Loaded {} fighter names", names.len());

        Ok(names)
    }

    /// Weight classes a fighter has fought at
    pub async fn weight_classes(&self, name: &str) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT wc.weight_class
            FROM weight_classes wc
            JOIN fighters f ON f.id = wc.fighter_id
            WHERE f.name = ?
            ORDER BY wc.weight_class
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get("weight_class")).collect())
    }

    /// Insert a fighter record
    ///
    /// Serving traffic never writes; this backs ingestion tooling and test
    /// fixtures.
    pub async fn insert(&self, record: &FighterRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO fighters (
                name, gender, stance, rating, current_win_streak,
                current_lose_streak, avg_sig_str_landed, avg_sig_str_pct,
                avg_sub_att, avg_td_landed, avg_td_pct, wins, losses, draws,
                wins_by_decision, wins_by_ko, wins_by_submission,
                total_rounds_fought, total_title_bouts, height_cm, reach_cm,
                weight_lb, age, days_since_last_fight, last_fight_date
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(&record.gender)
        .bind(&record.stance)
        .bind(record.rating)
        .bind(record.current_win_streak)
        .bind(record.current_lose_streak)
        .bind(record.avg_sig_str_landed)
        .bind(record.avg_sig_str_pct)
        .bind(record.avg_sub_att)
        .bind(record.avg_td_landed)
        .bind(record.avg_td_pct)
        .bind(record.wins)
        .bind(record.losses)
        .bind(record.draws)
        .bind(record.wins_by_decision)
        .bind(record.wins_by_ko)
        .bind(record.wins_by_submission)
        .bind(record.total_rounds_fought)
        .bind(record.total_title_bouts)
        .bind(record.height_cm)
        .bind(record.reach_cm)
        .bind(record.weight_lb)
        .bind(record.age)
        .bind(record.days_since_last_fight)
        .bind(record.last_fight_date)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a weight class for an existing fighter
    pub async fn add_weight_class(
        &self,
        fighter_name: &str,
        weight_class: &str,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO weight_classes (fighter_id, weight_class)
            SELECT id, ? FROM fighters WHERE name = ?
            "#,
        )
        .bind(weight_class)
        .bind(fighter_name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Build a typed record from a row, failing fast on NULL attributes
fn record_from_row(name: &str, row: &SqliteRow) -> Result<FighterRecord, StoreError> {
    fn required<T>(
        fighter: &str,
        attribute: &'static str,
        value: Option<T>,
    ) -> Result<T, StoreError> {
        value.ok_or_else(|| StoreError::IncompleteRecord {
            fighter: fighter.to_string(),
            attribute,
        })
    }

    Ok(FighterRecord {
        name: row.try_get("name")?,
        gender: required(name, "gender", row.try_get("gender")?)?,
        stance: row.try_get("stance")?,
        rating: required(name, "rating", row.try_get("rating")?)?,
        current_win_streak: required(name, "current_win_streak", row.try_get("current_win_streak")?)?,
        current_lose_streak: required(name, "current_lose_streak", row.try_get("current_lose_streak")?)?,
        avg_sig_str_landed: required(name, "avg_sig_str_landed", row.try_get("avg_sig_str_landed")?)?,
        avg_sig_str_pct: required(name, "avg_sig_str_pct", row.try_get("avg_sig_str_pct")?)?,
        avg_sub_att: required(name, "avg_sub_att", row.try_get("avg_sub_att")?)?,
        avg_td_landed: required(name, "avg_td_landed", row.try_get("avg_td_landed")?)?,
        avg_td_pct: required(name, "avg_td_pct", row.try_get("avg_td_pct")?)?,
        wins: required(name, "wins", row.try_get("wins")?)?,
        losses: required(name, "losses", row.try_get("losses")?)?,
        draws: required(name, "draws", row.try_get("draws")?)?,
        wins_by_decision: required(name, "wins_by_decision", row.try_get("wins_by_decision")?)?,
        wins_by_ko: required(name, "wins_by_ko", row.try_get("wins_by_ko")?)?,
        wins_by_submission: required(name, "wins_by_submission", row.try_get("wins_by_submission")?)?,
        total_rounds_fought: required(name, "total_rounds_fought", row.try_get("total_rounds_fought")?)?,
        total_title_bouts: required(name, "total_title_bouts", row.try_get("total_title_bouts")?)?,
        height_cm: required(name, "height_cm", row.try_get("height_cm")?)?,
        reach_cm: required(name, "reach_cm", row.try_get("reach_cm")?)?,
        weight_lb: required(name, "weight_lb", row.try_get("weight_lb")?)?,
        age: required(name, "age", row.try_get("age")?)?,
        days_since_last_fight: required(name, "days_since_last_fight", row.try_get("days_since_last_fight")?)?,
        last_fight_date: row.try_get("last_fight_date")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_record_error_names_the_attribute() {
        let err = StoreError::IncompleteRecord {
            fighter: "Ghost".to_string(),
            attribute: "rating",
        };
        assert_eq!(
            err.to_string(),
            "incomplete record for Ghost: rating is NULL"
        );
    }
}
