//! In-memory SQLite fixtures shared by the service and handler tests.
//!
//! The schema is generated from the entities with `sea_orm::Schema`, so it
//! tracks the models rather than the Postgres migrations.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    EntityTrait, Schema, Set,
};

use crate::entities::{
    choices, driving_data_logs, driving_records, members, questions, reset_tokens, ResetMethod,
};

/// Password every fixture member is created with.
pub const TEST_PASSWORD: &str = "Password123";

/// Opens a fresh in-memory database with every table created.
///
/// Tables are created in foreign key order. A single connection keeps the
/// in-memory database alive for the whole test.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();

    create_table(&db, members::Entity).await;
    create_table(&db, driving_records::Entity).await;
    create_table(&db, driving_data_logs::Entity).await;
    create_table(&db, reset_tokens::Entity).await;
    create_table(&db, questions::Entity).await;
    create_table(&db, choices::Entity).await;

    db
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) {
    let schema = Schema::new(DbBackend::Sqlite);
    let stmt = schema.create_table_from_entity(entity);
    db.execute(db.get_database_backend().build(&stmt))
        .await
        .unwrap();
}

/// Inserts a member whose password is [`TEST_PASSWORD`].
///
/// Uses the minimum bcrypt cost to keep the suite fast.
pub async fn create_member(
    db: &DatabaseConnection,
    email: &str,
    phone_number: Option<&str>,
) -> members::Model {
    members::ActiveModel {
        name: Set("Test Driver".to_string()),
        email: Set(email.to_string()),
        age: Set(30),
        password: Set(bcrypt::hash(TEST_PASSWORD, 4).unwrap()),
        phone_number: Set(phone_number.map(str::to_string)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_driving_record(db: &DatabaseConnection, member_id: i32) -> driving_records::Model {
    let start = Utc::now() - Duration::hours(1);
    driving_records::ActiveModel {
        member_id: Set(member_id),
        start_time: Set(start),
        end_time: Set(start + Duration::minutes(45)),
        location_start: Set("Taipei".to_string()),
        location_end: Set("Taoyuan".to_string()),
        fatigue_level: Set(None),
        fatigue_detected: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn create_reset_token(
    db: &DatabaseConnection,
    member_id: i32,
    token: &str,
    method: ResetMethod,
    expires_at: DateTime<Utc>,
) -> reset_tokens::Model {
    reset_tokens::ActiveModel {
        member_id: Set(member_id),
        token: Set(token.to_string()),
        method: Set(method),
        expires_at: Set(expires_at),
        used: Set(false),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}
