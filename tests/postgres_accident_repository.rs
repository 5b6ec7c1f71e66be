//! PostgreSQL contract tests for `AccidentRepository`.
//!
//! These need a running PostgreSQL instance and are skipped by default.
//! Each test migrates a throwaway schema so they can run in parallel:
//!
//! ```text
//! DATABASE_URL=postgres://localhost/accidents_test cargo test -- --ignored
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use accidents::adapters::postgres::{run_migrations, PostgresAccidentRepository};
use accidents::domain::accident::{Accident, AccidentType, NewAccident, Rule, RuleSet};
use accidents::domain::foundation::{AccidentId, AccidentTypeId, RuleId};
use accidents::ports::AccidentRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Fixture {
    admin: PgPool,
    pool: PgPool,
    schema: String,
    repo: PostgresAccidentRepository,
}

impl Fixture {
    /// Connects to `DATABASE_URL` and migrates a fresh schema.
    ///
    /// Returns `None` when no database is configured.
    async fn connect() -> Option<Self> {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL contract test");
            return None;
        };

        let admin = PgPool::connect(&url).await.unwrap();
        let schema = format!("accidents_test_{}", Uuid::new_v4().simple());
        sqlx::query(&format!("CREATE SCHEMA {}", schema))
            .execute(&admin)
            .await
            .unwrap();

        let search_path = format!("SET search_path TO {}", schema);
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .after_connect(move |conn, _meta| {
                let sql = search_path.clone();
                Box::pin(async move {
                    sqlx::query(&sql).execute(&mut *conn).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .unwrap();
        run_migrations(&pool).await.unwrap();

        let repo = PostgresAccidentRepository::new(pool.clone());
        Some(Self {
            admin,
            pool,
            schema,
            repo,
        })
    }

    async fn count(&self, table: &str) -> i64 {
        sqlx::query(&format!("SELECT COUNT(*) AS n FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
            .get("n")
    }

    async fn accident_count(&self) -> i64 {
        self.count("accidents").await
    }

    async fn join_row_count(&self) -> i64 {
        self.count("accidents_rules").await
    }

    async fn teardown(self) {
        self.pool.close().await;
        sqlx::query(&format!("DROP SCHEMA {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .unwrap();
    }
}

fn accident_type(id: i32) -> AccidentType {
    let name = match id {
        1 => "Two cars",
        2 => "Car and person",
        _ => "Car and bicycle",
    };
    AccidentType::new(AccidentTypeId::new(id), name)
}

fn rules(ids: &[i32]) -> RuleSet {
    ids.iter()
        .map(|&id| Rule::new(RuleId::new(id), format!("Article {}", id)))
        .collect()
}

fn new_accident(type_id: i32, rule_ids: &[i32]) -> NewAccident {
    NewAccident {
        name: "Rear-end collision".to_string(),
        text: "Braked late at the light".to_string(),
        address: "Main st 1".to_string(),
        accident_type: accident_type(type_id),
        rules: rules(rule_ids),
    }
}

// =============================================================================
// Save / Find
// =============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn saved_accident_is_read_back_through_the_join() {
    let Some(fx) = Fixture::connect().await else { return };

    let saved = fx.repo.save(new_accident(1, &[1, 3])).await.unwrap();
    let found = fx.repo.find_by_id(saved.id).await.unwrap().unwrap();

    assert_eq!(found, saved);
    assert_eq!(found.accident_type.name, "Two cars");
    assert_eq!(found.rules, rules(&[1, 3]));
    assert_eq!(fx.join_row_count().await, 2);

    fx.teardown().await;
}

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn accident_without_rules_reads_back_with_empty_rules() {
    let Some(fx) = Fixture::connect().await else { return };

    let saved = fx.repo.save(new_accident(2, &[])).await.unwrap();
    let found = fx.repo.find_by_id(saved.id).await.unwrap().unwrap();

    assert!(found.rules.is_empty());
    assert_eq!(fx.join_row_count().await, 0);

    fx.teardown().await;
}

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn failed_rule_insert_rolls_back_the_whole_save() {
    let Some(fx) = Fixture::connect().await else { return };

    let result = fx.repo.save(new_accident(1, &[1, 99])).await;

    assert!(result.is_err());
    assert_eq!(fx.accident_count().await, 0);
    assert_eq!(fx.join_row_count().await, 0);

    fx.teardown().await;
}

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn find_all_lists_each_accident_once_in_id_order() {
    let Some(fx) = Fixture::connect().await else { return };
    let first = fx.repo.save(new_accident(1, &[1, 2, 3])).await.unwrap();
    let second = fx.repo.save(new_accident(2, &[])).await.unwrap();

    let all = fx.repo.find_all().await.unwrap();

    let ids: Vec<AccidentId> = all.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert_eq!(all[0].rules.len(), 3);
    assert!(all[1].rules.is_empty());

    fx.teardown().await;
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn update_of_unknown_id_leaves_join_table_alone() {
    let Some(fx) = Fixture::connect().await else { return };
    fx.repo.save(new_accident(1, &[1, 2])).await.unwrap();

    let ghost = new_accident(1, &[3]).into_accident(AccidentId::new(404));

    assert!(!fx.repo.update(&ghost).await.unwrap());
    assert_eq!(fx.join_row_count().await, 2);

    fx.teardown().await;
}

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn update_replaces_rules_and_type() {
    let Some(fx) = Fixture::connect().await else { return };
    let saved = fx.repo.save(new_accident(1, &[1])).await.unwrap();

    let edited = Accident {
        name: "Side impact".to_string(),
        accident_type: accident_type(3),
        rules: rules(&[2, 3]),
        ..saved.clone()
    };
    assert!(fx.repo.update(&edited).await.unwrap());

    let found = fx.repo.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(found, edited);
    assert_eq!(fx.join_row_count().await, 2);

    fx.teardown().await;
}

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn failed_update_keeps_previous_rules() {
    let Some(fx) = Fixture::connect().await else { return };
    let saved = fx.repo.save(new_accident(1, &[1])).await.unwrap();

    let edited = Accident {
        name: "Never stored".to_string(),
        rules: rules(&[2, 99]),
        ..saved.clone()
    };
    assert!(fx.repo.update(&edited).await.is_err());

    let found = fx.repo.find_by_id(saved.id).await.unwrap().unwrap();
    assert_eq!(found, saved);

    fx.teardown().await;
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
#[ignore = "Requires PostgreSQL via DATABASE_URL"]
async fn delete_removes_accident_and_its_join_rows_only() {
    let Some(fx) = Fixture::connect().await else { return };
    let keep = fx.repo.save(new_accident(1, &[1])).await.unwrap();
    let doomed = fx.repo.save(new_accident(1, &[1, 2, 3])).await.unwrap();

    assert!(fx.repo.delete_by_id(doomed.id).await.unwrap());
    assert!(!fx.repo.delete_by_id(doomed.id).await.unwrap());

    assert!(fx.repo.find_by_id(doomed.id).await.unwrap().is_none());
    assert!(fx.repo.find_by_id(keep.id).await.unwrap().is_some());
    assert_eq!(fx.join_row_count().await, 1);

    fx.teardown().await;
}
