use serde::Serialize;

/// Field-level validation failures, independent of any validation library.
/// The web layer answers 422 with the serialized list.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub fn check_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let length = value.chars().count();
    if length < min || length > max {
        errors.add(
            field,
            format!("must be between {} and {} characters long", min, max),
        );
    }
}

pub fn check_email(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        errors.add(field, "must be a valid e-mail address");
    }
}

const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

pub fn check_image_url(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    let lowercased = value.to_lowercase();
    let scheme_ok = lowercased.starts_with("http://") || lowercased.starts_with("https://");
    let extension_ok = IMAGE_EXTENSIONS.iter().any(|ext| lowercased.ends_with(ext));
    if !scheme_ok || !extension_ok {
        errors.add(
            field,
            "must be an http(s) URL pointing at a jpg, jpeg, png or gif image",
        );
    }
}
