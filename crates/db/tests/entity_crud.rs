//! Integration tests for the repository layer against a real database:
//! - Cat / mission / target CRUD round trips
//! - Cascade delete behaviour (mission -> targets)
//! - Unique constraint violations (target name within a mission)
//! - Foreign key violations

use sca_db::models::cat::CreateCat;
use sca_db::models::target::CreateTarget;
use sca_db::repositories::{CatRepo, MissionRepo, TargetRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_cat(name: &str) -> CreateCat {
    CreateCat {
        name: name.to_string(),
        years_of_experience: 3,
        breed: "Bengal".to_string(),
        salary: 900,
    }
}

fn new_target(name: &str, country: &str) -> CreateTarget {
    CreateTarget {
        name: name.to_string(),
        country: country.to_string(),
        notes: None,
    }
}

// ---------------------------------------------------------------------------
// Cats
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_cat_crud_round_trip(pool: PgPool) {
    let cat = CatRepo::create(&pool, &new_cat("Agent Whiskers")).await.unwrap();
    assert_eq!(cat.name, "Agent Whiskers");
    assert_eq!(cat.salary, 900);

    let found = CatRepo::find_by_id(&pool, cat.id).await.unwrap().unwrap();
    assert_eq!(found.id, cat.id);

    let updated = CatRepo::update_salary(&pool, cat.id, 1200)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.salary, 1200);
    assert_eq!(updated.name, "Agent Whiskers");

    let mut conn = pool.acquire().await.unwrap();
    assert!(CatRepo::delete(&mut conn, cat.id).await.unwrap());
    assert!(CatRepo::find_by_id(&pool, cat.id).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_cat_list_pagination(pool: PgPool) {
    for i in 0..5 {
        CatRepo::create(&pool, &new_cat(&format!("Cat {i}")))
            .await
            .unwrap();
    }

    let page = CatRepo::list(&pool, 1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].name, "Cat 1");
    assert_eq!(page[1].name, "Cat 2");
}

#[sqlx::test]
async fn test_update_salary_missing_cat_returns_none(pool: PgPool) {
    assert!(CatRepo::update_salary(&pool, 999_999, 100)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Missions and targets
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn test_mission_with_targets_round_trip(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let mission = MissionRepo::create(&mut tx).await.unwrap();
    TargetRepo::create(&mut tx, mission.id, &new_target("Dr. No", "Jamaica"))
        .await
        .unwrap();
    TargetRepo::create(&mut tx, mission.id, &new_target("Goldfinger", "Switzerland"))
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let found = MissionRepo::find_by_id(&pool, mission.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!found.is_complete);
    assert!(found.assigned_cat_id.is_none());

    let targets = TargetRepo::list_by_mission(&pool, mission.id).await.unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0].name, "Dr. No");
}

#[sqlx::test]
async fn test_cascade_delete_mission_removes_targets(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let mission = MissionRepo::create(&mut tx).await.unwrap();
    let target = TargetRepo::create(&mut tx, mission.id, &new_target("Jaws", "Egypt"))
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let mut conn = pool.acquire().await.unwrap();
    assert!(MissionRepo::delete(&mut conn, mission.id).await.unwrap());
    drop(conn);

    assert!(MissionRepo::find_by_id(&pool, mission.id)
        .await
        .unwrap()
        .is_none());
    let orphan_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM targets WHERE id = $1")
        .bind(target.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orphan_count, 0);
}

#[sqlx::test]
async fn test_duplicate_target_name_in_mission_rejected(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let mission = MissionRepo::create(&mut tx).await.unwrap();
    TargetRepo::create(&mut tx, mission.id, &new_target("Blofeld", "Japan"))
        .await
        .unwrap();
    let result = TargetRepo::create(&mut tx, mission.id, &new_target("Blofeld", "France")).await;
    assert!(result.is_err());
}

#[sqlx::test]
async fn test_target_fk_violation_missing_mission(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let result = TargetRepo::create(&mut conn, 999_999, &new_target("Nobody", "Nowhere")).await;
    assert!(result.is_err());
}

#[sqlx::test]
async fn test_completion_counts(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let mission = MissionRepo::create(&mut tx).await.unwrap();
    let t1 = TargetRepo::create(&mut tx, mission.id, &new_target("A", "X"))
        .await
        .unwrap();
    TargetRepo::create(&mut tx, mission.id, &new_target("B", "Y"))
        .await
        .unwrap();
    TargetRepo::update(&mut tx, t1.id, None, Some(true))
        .await
        .unwrap();

    let (total, completed) = TargetRepo::completion_counts(&mut tx, mission.id)
        .await
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(completed, 1);
}
