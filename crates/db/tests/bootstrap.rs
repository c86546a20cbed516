use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    portal_db::health_check(&pool).await.unwrap();

    let tables = [
        "users",
        "user_sessions",
        "student_profiles",
        "agent_profiles",
        "university_profiles",
        "university_programs",
        "applications",
        "documents",
        "tasks",
        "commissions",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Vocabulary CHECK constraints reject unknown values.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO users (email, password_hash, role) VALUES ('x@test.dev', 'h', 'superuser')",
    )
    .execute(&pool)
    .await;

    let err = result.unwrap_err();
    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
}
