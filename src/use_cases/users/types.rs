use entities::user;
use serde::{Deserialize, Serialize};

use crate::validation::{check_email, check_length, ValidationErrors};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct UserVisible {
    pub id: uuid::Uuid,
    pub username: String,
    pub email: String,
}

impl From<user::Model> for UserVisible {
    fn from(item: user::Model) -> Self {
        UserVisible {
            id: item.id,
            username: item.username,
            email: item.email,
        }
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpRequest {
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_length(&mut errors, "username", &self.username, 3, 20);
        check_email(&mut errors, "email", &self.email);
        check_length(&mut errors, "password", &self.password, 8, 50);
        errors.into_result()
    }
}

#[derive(Deserialize, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_length(&mut errors, "username", &self.username, 3, 20);
        check_length(&mut errors, "password", &self.password, 8, 50);
        errors.into_result()
    }
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize, Debug, Serialize)]
pub struct PasswordChangeRequest {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordChangeRequest {
    pub fn normalized(self) -> Self {
        Self {
            old_password: self.old_password.trim().to_string(),
            new_password: self.new_password.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_length(&mut errors, "new_password", &self.new_password, 8, 50);
        errors.into_result()
    }
}
