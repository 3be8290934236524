//! Tests for SqliteCalendarEventRepository.

use crate::db::{
    CalendarEvent, CalendarEventRepository, Database, DbError, NewCalendarEvent, SqliteDatabase,
};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.initialize().await.expect("Schema creation should succeed");
    db
}

fn standup() -> NewCalendarEvent {
    NewCalendarEvent {
        title: "Standup".to_string(),
        date: "2024-03-04".to_string(),
        time: Some("09:15".to_string()),
        category: Some("meeting".to_string()),
        recurring: Some("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR".to_string()),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn event_create_and_list_round_trips() {
    let db = setup_db().await;
    let events = db.calendar_events();

    let id = events.create(&standup()).await.expect("Create should succeed");

    let listed = events.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    let event = &listed[0];
    assert_eq!(event.id, id);
    assert_eq!(event.title, "Standup");
    assert_eq!(event.date, "2024-03-04");
    assert_eq!(event.time.as_deref(), Some("09:15"));
    assert_eq!(event.category.as_deref(), Some("meeting"));
    assert_eq!(
        event.recurring.as_deref(),
        Some("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn event_optional_fields_stay_null() {
    let db = setup_db().await;
    let events = db.calendar_events();

    events
        .create(&NewCalendarEvent {
            title: "Birthday".to_string(),
            date: "2024-07-01".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let event = &events.list().await.unwrap()[0];
    assert!(event.time.is_none());
    assert!(event.category.is_none());
    assert!(event.recurring.is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn event_create_requires_date() {
    let db = setup_db().await;

    let result = db
        .calendar_events()
        .create(&NewCalendarEvent {
            title: "No date".to_string(),
            ..Default::default()
        })
        .await;
    assert!(matches!(result, Err(DbError::Validation { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn event_update_and_miss() {
    let db = setup_db().await;
    let events = db.calendar_events();

    let id = events.create(&standup()).await.unwrap();

    let moved = CalendarEvent {
        id,
        title: "Standup (moved)".to_string(),
        date: "2024-03-05".to_string(),
        time: None,
        category: None,
        recurring: None,
    };
    assert!(events.update(&moved).await.unwrap());

    let missing = CalendarEvent {
        id: id + 1,
        ..moved.clone()
    };
    assert!(!events.update(&missing).await.unwrap());

    assert_eq!(events.list().await.unwrap(), vec![moved]);
}

#[tokio::test(flavor = "multi_thread")]
async fn event_delete_is_idempotent() {
    let db = setup_db().await;
    let events = db.calendar_events();

    let id = events.create(&standup()).await.unwrap();
    assert!(events.delete(id).await.unwrap());
    assert!(!events.delete(id).await.unwrap());
    assert!(events.list().await.unwrap().is_empty());
}
