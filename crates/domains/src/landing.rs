//! Landing-page content: one mutable document of marketing copy.
//!
//! The document is a set of typed top-level sections. Saving applies a
//! [`LandingPatch`]: a section present in the patch replaces the stored
//! section wholesale, an absent section is left untouched. There is no
//! deep merge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub description: String,
}

/// One course card on the landing page. `career_opportunities` is a
/// comma-delimited role list kept as free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseCard {
    pub title: String,
    pub duration: String,
    pub career_opportunities: String,
    pub technologies: Vec<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// `value` is display text ("500+"), not a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub quote: String,
    /// Integer rating, expected in 1..=5.
    pub rating: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactDetails {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// All top-level sections of the landing document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingSections {
    pub hero: Hero,
    pub about: About,
    pub courses: Vec<CourseCard>,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub testimonials: Vec<Testimonial>,
    pub contact: ContactDetails,
}

impl LandingSections {
    /// Shallow merge: each section present in `patch` replaces the stored
    /// section wholesale; absent sections are kept as they are.
    pub fn apply(&mut self, patch: LandingPatch) {
        if let Some(hero) = patch.hero {
            self.hero = hero;
        }
        if let Some(about) = patch.about {
            self.about = about;
        }
        if let Some(courses) = patch.courses {
            self.courses = courses;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(stats) = patch.stats {
            self.stats = stats;
        }
        if let Some(testimonials) = patch.testimonials {
            self.testimonials = testimonials;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
    }
}

/// Admin-submitted update: any subset of the top-level sections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingPatch {
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub courses: Option<Vec<CourseCard>>,
    pub features: Option<Vec<Feature>>,
    pub stats: Option<Vec<Stat>>,
    pub testimonials: Option<Vec<Testimonial>>,
    pub contact: Option<ContactDetails>,
}

/// The landing document as served and stored: sections plus the
/// store-maintained timestamps. Timestamps are absent on the synthesized
/// default that is served before any save has happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingDocument {
    #[serde(flatten)]
    pub sections: LandingSections,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LandingDocument {
    /// A document that exists only in the response, never in the store.
    pub fn unsaved(sections: LandingSections) -> Self {
        Self {
            sections,
            created_at: None,
            updated_at: None,
        }
    }
}
