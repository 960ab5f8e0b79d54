use crate::dtos::GenerateRequest;
use service_core::error::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Both 'idea' and 'category' are required.";

/// A validated idea/category pair. Both fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingBrief {
    pub idea: String,
    pub category: String,
}

impl LandingBrief {
    pub fn new(idea: &str, category: &str) -> Result<Self, AppError> {
        let idea = idea.trim();
        let category = category.trim();

        if idea.is_empty() || category.is_empty() {
            return Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            idea: idea.to_string(),
            category: category.to_string(),
        })
    }
}

impl TryFrom<GenerateRequest> for LandingBrief {
    type Error = AppError;

    fn try_from(request: GenerateRequest) -> Result<Self, Self::Error> {
        match (request.idea.as_deref(), request.category.as_deref()) {
            (Some(idea), Some(category)) => Self::new(idea, category),
            _ => Err(AppError::BadRequest(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}
