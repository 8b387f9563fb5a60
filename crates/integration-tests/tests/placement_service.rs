//! PlacementService CRUD behavior.


use std::sync::Arc;

use domains::error::AppError;
use domains::placement::{NewPlacement, PlacementUpdate};
use fixtures::InMemoryPlacementRepo;
use services::PlacementService;
use uuid::Uuid;

fn new_placement(student: &str) -> NewPlacement {
    NewPlacement {
        student_name: student.into(),
        course: "Fullstack Development".into(),
        company: "Acme Corp".into(),
        position: "Developer".into(),
        is_active: true,
    }
}

#[tokio::test]
async fn create_then_list_round_trips() {
    let repo = Arc::new(InMemoryPlacementRepo::new());
    let placements = PlacementService::new(repo);

    let created = placements.create(new_placement("Asha")).await.unwrap();
    assert_eq!(created.student_name, "Asha");
    assert!(created.is_active);

    let listed = placements.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
}

#[tokio::test]
async fn create_rejects_blank_fields() {
    let repo = Arc::new(InMemoryPlacementRepo::new());
    let placements = PlacementService::new(repo.clone());

    let mut placement = new_placement("Asha");
    placement.company = "".into();

    let result = placements.create(placement).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(repo.row_count(), 0);
}

#[tokio::test]
async fn update_toggles_the_active_flag() {
    let repo = Arc::new(InMemoryPlacementRepo::new());
    let placements = PlacementService::new(repo);

    let created = placements.create(new_placement("Asha")).await.unwrap();
    let updated = placements
        .update(
            created.id,
            PlacementUpdate {
                is_active: Some(false),
                ..PlacementUpdate::default()
            },
        )
        .await
        .unwrap();

    assert!(!updated.is_active);
    assert_eq!(updated.student_name, "Asha");
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let placements = PlacementService::new(Arc::new(InMemoryPlacementRepo::new()));
    let result = placements
        .update(Uuid::new_v4(), PlacementUpdate::default())
        .await;
    assert!(matches!(result, Err(AppError::NotFound(..))));
}

#[tokio::test]
async fn delete_removes_the_record_and_rejects_unknown_ids() {
    let repo = Arc::new(InMemoryPlacementRepo::new());
    let placements = PlacementService::new(repo.clone());

    let created = placements.create(new_placement("Asha")).await.unwrap();
    placements.delete(created.id).await.unwrap();
    assert_eq!(repo.row_count(), 0);

    let result = placements.delete(created.id).await;
    assert!(matches!(result, Err(AppError::NotFound(..))));
}
