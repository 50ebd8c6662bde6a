use chrono::{TimeZone, Utc};
use clientdesk_core::{
    AppContext, EntityKind, EntityStore, LatencyProfile, NewNotification, Notification,
    NotificationKind, NotificationPatch, NotificationService, RecordId, SeedSet, ServiceError,
};
use std::sync::Arc;

fn id(value: u64) -> RecordId {
    RecordId::new(value).unwrap()
}

fn seeded(id_value: u64, read: bool) -> Notification {
    Notification {
        id: id(id_value),
        title: format!("note {id_value}"),
        message: "seeded".to_string(),
        kind: NotificationKind::Info,
        read,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        project_id: None,
    }
}

fn ids(notifications: &[Notification]) -> Vec<u64> {
    notifications.iter().map(|n| n.id.get()).collect()
}

fn warning(title: &str) -> NewNotification {
    NewNotification {
        title: title.to_string(),
        message: format!("{title} needs attention"),
        kind: NotificationKind::Warning,
        project_id: None,
    }
}

fn context_with(notifications: Vec<Notification>) -> AppContext {
    AppContext::with_seeds(
        LatencyProfile::instant(),
        SeedSet {
            notifications,
            ..SeedSet::default()
        },
    )
}

#[tokio::test]
async fn mark_all_as_read_clears_unread() {
    let context = context_with(vec![
        seeded(1, false),
        seeded(2, true),
        seeded(3, false),
        seeded(4, false),
    ]);
    let notifications = context.notifications();
    assert_eq!(notifications.get_unread().await.len(), 3);

    let all = notifications.mark_all_as_read().await;
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(|n| n.read));
    assert!(notifications.get_unread().await.is_empty());
    assert!(notifications.get_all().await.iter().all(|n| n.read));
}

#[tokio::test]
async fn mark_all_as_read_on_empty_store_is_a_no_op() {
    let context = AppContext::in_memory();
    assert!(context.notifications().mark_all_as_read().await.is_empty());
}

#[tokio::test]
async fn get_unread_preserves_store_order() {
    let context = context_with(vec![seeded(5, false), seeded(2, true), seeded(9, false)]);
    let unread: Vec<u64> = context
        .notifications()
        .get_unread()
        .await
        .iter()
        .map(|n| n.id.get())
        .collect();
    assert_eq!(unread, vec![5, 9]);
}

#[tokio::test]
async fn mark_as_read_returns_none_for_unknown_id() {
    let context = context_with(vec![seeded(1, false)]);
    let notifications = context.notifications();

    assert!(notifications.mark_as_read(id(8)).await.is_none());

    let marked = notifications.mark_as_read(id(1)).await.unwrap();
    assert!(marked.read);
    assert!(notifications.get_by_id(id(1)).await.unwrap().read);
}

#[tokio::test]
async fn create_forces_unread_and_inserts_newest_first() {
    let context = context_with(vec![seeded(1, true)]);
    let notifications = context.notifications();

    let created = notifications
        .create(NewNotification {
            title: "Invoice overdue".to_string(),
            message: "Invoice #12 is 5 days late".to_string(),
            kind: NotificationKind::Warning,
            project_id: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, id(2));
    assert!(!created.read);

    let order: Vec<u64> = notifications
        .get_all()
        .await
        .iter()
        .map(|n| n.id.get())
        .collect();
    assert_eq!(order, vec![2, 1]);
}

#[tokio::test]
async fn completion_convenience_builds_success_notification() {
    let context = AppContext::in_memory();
    let created = context
        .notifications()
        .create_project_completion_notification("Mobile App", id(4))
        .await
        .unwrap();

    assert_eq!(created.kind, NotificationKind::Success);
    assert_eq!(created.project_id, Some(id(4)));
    assert_eq!(
        created.message,
        "Mobile App project has been completed successfully!"
    );
}

#[tokio::test]
async fn update_and_delete_follow_generic_contract() {
    let context = context_with(vec![seeded(1, false)]);
    let notifications = context.notifications();

    let updated = notifications
        .update(
            id(1),
            NotificationPatch {
                project_id: Some(Some(id(3))),
                ..NotificationPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.project_id, Some(id(3)));
    assert_eq!(updated.title, "note 1");

    let removed = notifications.delete(id(1)).await.unwrap();
    assert_eq!(removed.id, id(1));

    let err = notifications.delete(id(1)).await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::NotFound {
            entity: EntityKind::Notification,
            id: id(1)
        }
    );
}

#[tokio::test]
async fn create_then_get_roundtrip() {
    let context = AppContext::in_memory();
    let notifications = context.notifications();

    let created = notifications
        .create(NewNotification {
            project_id: Some(id(6)),
            ..warning("Budget")
        })
        .await
        .unwrap();
    let loaded = notifications.get_by_id(created.id).await.unwrap();

    assert_eq!(loaded, created);
    assert_eq!(loaded.project_id, Some(id(6)));
    assert_eq!(notifications.get_by_project_id(id(6)).await, vec![created]);
}

#[tokio::test]
async fn ids_follow_max_plus_one_and_are_never_reused() {
    let context = context_with(vec![seeded(1, true), seeded(2, true)]);
    let notifications = context.notifications();

    let third = notifications.create(warning("third")).await.unwrap();
    assert_eq!(third.id, id(3));

    notifications.delete(third.id).await.unwrap();
    notifications.delete(id(1)).await.unwrap();
    let fourth = notifications.create(warning("fourth")).await.unwrap();
    assert_eq!(fourth.id, id(4));
    assert_eq!(ids(&notifications.get_all().await), vec![4, 2]);
}

#[tokio::test]
async fn front_insertion_still_assigns_max_plus_one() {
    let context = context_with(vec![seeded(2, true), seeded(9, false), seeded(4, true)]);
    let notifications = context.notifications();

    let created = notifications.create(warning("newest")).await.unwrap();
    assert_eq!(created.id, id(10));
    assert_eq!(ids(&notifications.get_all().await), vec![10, 2, 9, 4]);

    let next = notifications.create(warning("newer")).await.unwrap();
    assert_eq!(next.id, id(11));
    assert_eq!(ids(&notifications.get_all().await), vec![11, 10, 2, 9, 4]);
}

#[tokio::test]
async fn create_past_the_largest_id_fails_instead_of_duplicating() {
    let context = context_with(vec![seeded(u64::MAX, false)]);
    let notifications = context.notifications();

    let err = notifications.create(warning("overflow")).await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::IdsExhausted {
            entity: EntityKind::Notification
        }
    );
    assert_eq!(ids(&notifications.get_all().await), vec![u64::MAX]);

    let completion = notifications
        .create_project_completion_notification("Website", id(1))
        .await;
    assert!(completion.is_err());
    assert_eq!(notifications.get_all().await.len(), 1);
}

#[tokio::test]
async fn store_handles_cloned_before_the_service_also_insert_newest_first() {
    let store = EntityStore::seeded(vec![seeded(1, true)]);
    let early_handle = store.clone();
    let service = NotificationService::new(store, Arc::new(LatencyProfile::instant()));

    early_handle
        .insert_with(|assigned| seeded(assigned.get(), false))
        .unwrap();
    let created = service.create(warning("from service")).await.unwrap();

    assert_eq!(created.id, id(3));
    assert_eq!(ids(&early_handle.snapshot()), vec![3, 2, 1]);
}
