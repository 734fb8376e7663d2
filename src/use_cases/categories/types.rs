use entities::category;
use serde::{Deserialize, Serialize};

use crate::validation::{check_length, ValidationErrors};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct CategoryVisible {
    pub id: uuid::Uuid,
    pub name: String,
}

impl From<category::Model> for CategoryVisible {
    fn from(item: category::Model) -> Self {
        CategoryVisible {
            id: item.id,
            name: item.name,
        }
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct CategoryRequest {
    pub name: String,
}

impl CategoryRequest {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_length(&mut errors, "name", &self.name, 3, 50);
        errors.into_result()
    }
}
