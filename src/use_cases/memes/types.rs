use entities::meme;
use serde::{Deserialize, Serialize};

use crate::validation::{check_image_url, check_length, ValidationErrors};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct MemeVisible {
    pub id: uuid::Uuid,
    pub description: String,
    pub image_url: String,
    pub category_id: uuid::Uuid,
    pub creator_id: uuid::Uuid,
}

impl From<meme::Model> for MemeVisible {
    fn from(item: meme::Model) -> Self {
        MemeVisible {
            id: item.id,
            description: item.description,
            image_url: item.image_url,
            category_id: item.category_id,
            creator_id: item.creator_id,
        }
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct MemeCreateRequest {
    pub description: String,
    pub image_url: String,
    pub category: String,
}

impl MemeCreateRequest {
    pub fn normalized(self) -> Self {
        Self {
            description: self.description.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_length(&mut errors, "description", &self.description, 5, 200);
        check_image_url(&mut errors, "image_url", &self.image_url);
        check_length(&mut errors, "category", &self.category, 3, 50);
        errors.into_result()
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct MemeUpdateRequest {
    pub description: Option<String>,
    pub category: Option<String>,
}

impl MemeUpdateRequest {
    pub fn normalized(self) -> Self {
        Self {
            description: self.description.map(|d| d.trim().to_string()),
            category: self.category.map(|c| c.trim().to_string()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if let Some(description) = &self.description {
            check_length(&mut errors, "description", description, 5, 200);
        }
        if let Some(category) = &self.category {
            check_length(&mut errors, "category", category, 3, 50);
        }
        errors.into_result()
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct MemeListQuery {
    pub username: Option<String>,
    pub category: Option<String>,
}
