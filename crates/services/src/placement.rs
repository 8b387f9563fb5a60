//! Placement-record orchestration.

use std::sync::Arc;

use domains::error::{AppError, Result};
use domains::placement::{NewPlacement, Placement, PlacementUpdate};
use domains::ports::PlacementRepo;
use uuid::Uuid;

pub struct PlacementService {
    repo: Arc<dyn PlacementRepo>,
}

impl PlacementService {
    pub fn new(repo: Arc<dyn PlacementRepo>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Placement>> {
        self.repo
            .list_newest_first()
            .await
            .map_err(AppError::persistence)
    }

    pub async fn create(&self, placement: NewPlacement) -> Result<Placement> {
        validate(&placement)?;
        self.repo
            .insert(placement)
            .await
            .map_err(AppError::persistence)
    }

    pub async fn update(&self, id: Uuid, update: PlacementUpdate) -> Result<Placement> {
        self.repo
            .update(id, update)
            .await
            .map_err(AppError::persistence)?
            .ok_or_else(|| AppError::NotFound("placement", id.to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let deleted = self.repo.delete(id).await.map_err(AppError::persistence)?;
        if !deleted {
            return Err(AppError::NotFound("placement", id.to_string()));
        }
        Ok(())
    }
}

fn validate(placement: &NewPlacement) -> Result<()> {
    let required = [
        ("studentName", &placement.student_name),
        ("course", &placement.course),
        ("company", &placement.company),
        ("position", &placement.position),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_required_fields() {
        let placement = NewPlacement {
            student_name: "  ".into(),
            course: "Fullstack".into(),
            company: "Acme".into(),
            position: "Developer".into(),
            is_active: true,
        };
        assert!(matches!(
            validate(&placement),
            Err(AppError::Validation(message)) if message.contains("studentName")
        ));
    }
}
