//! Shared fixtures: an in-memory SQLite store seeded with the reference data set.
//!
//! Category{1,"tech"}, Category{2,"life"}, Category{3,"empty"}
//! Post{10,cat 1}, Post{11,cat 1}, Post{12,cat 2}, Post{13,no category}

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use sea_orm::{EntityTrait, Set};

use common::DatabaseConfig;
use content_service_lib::infra::Database;
use content_service_lib::repository::entities::{category, post};

pub async fn setup_database() -> Database {
    // One connection, otherwise each pooled connection opens its own in-memory db
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };

    let db = Database::connect(&config)
        .await
        .expect("in-memory database should migrate");
    seed(&db).await;
    db
}

async fn seed(db: &Database) {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();

    let categories = [(1, "tech", "Technology"), (2, "life", "Life"), (3, "empty", "Empty")]
        .into_iter()
        .map(|(id, key, name)| category::ActiveModel {
            id: Set(id),
            key: Set(key.to_string()),
            name: Set(name.to_string()),
            created_at: Set(ts),
            updated_at: Set(ts),
        });
    category::Entity::insert_many(categories)
        .exec(db.connection())
        .await
        .expect("seed categories");

    let posts = [(10, Some(1)), (11, Some(1)), (12, Some(2)), (13, None)]
        .into_iter()
        .map(|(id, category_id)| post::ActiveModel {
            id: Set(id),
            category_id: Set(category_id),
            title: Set(format!("Post {}", id)),
            body: Set(format!("Body of post {}", id)),
            created_at: Set(ts),
            updated_at: Set(ts),
        });
    post::Entity::insert_many(posts)
        .exec(db.connection())
        .await
        .expect("seed posts");
}
