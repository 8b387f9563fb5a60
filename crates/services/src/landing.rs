//! Landing-content orchestration: read with an ephemeral default, save
//! with an explicit shallow merge.

use std::sync::Arc;

use domains::error::{AppError, Result};
use domains::landing::{LandingDocument, LandingPatch};
use domains::ports::LandingRepo;

use crate::defaults::default_landing_sections;

pub struct LandingService {
    repo: Arc<dyn LandingRepo>,
}

impl LandingService {
    pub fn new(repo: Arc<dyn LandingRepo>) -> Self {
        Self { repo }
    }

    /// Returns the stored document, or the built-in default when nothing
    /// has been saved yet. The default is never written by this path;
    /// persistence only happens through [`save`](Self::save) or the seed
    /// binary.
    pub async fn get(&self) -> Result<LandingDocument> {
        let existing = self.repo.find().await.map_err(AppError::persistence)?;
        Ok(existing
            .unwrap_or_else(|| LandingDocument::unsaved(default_landing_sections())))
    }

    /// Applies the submitted sections over the stored document (or an
    /// empty one when none exists) and persists the result. Concurrent
    /// saves race; the last upsert to land wins in full.
    pub async fn save(&self, patch: LandingPatch) -> Result<LandingDocument> {
        validate(&patch)?;

        let mut sections = self
            .repo
            .find()
            .await
            .map_err(AppError::persistence)?
            .map(|doc| doc.sections)
            .unwrap_or_default();

        sections.apply(patch);

        self.repo
            .upsert(&sections)
            .await
            .map_err(AppError::persistence)
    }
}

fn validate(patch: &LandingPatch) -> Result<()> {
    if let Some(testimonials) = &patch.testimonials {
        for testimonial in testimonials {
            if !(1..=5).contains(&testimonial.rating) {
                return Err(AppError::Validation(format!(
                    "testimonial rating {} for '{}' is outside the 1-5 range",
                    testimonial.rating, testimonial.name
                )));
            }
        }
    }
    Ok(())
}
