use chrono::Utc;
use entities::meme;
use sea_orm::Set;
use uuid::Uuid;

pub fn meme(creator_id: Uuid, category_id: Uuid) -> meme::ActiveModel {
    let now = Utc::now();
    meme::ActiveModel {
        id: Set(Uuid::now_v7()),
        description: Set("A meme for testing.".to_string()),
        image_url: Set(format!("https://memes.test/{}.png", Uuid::now_v7().simple())),
        category_id: Set(category_id),
        creator_id: Set(creator_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait MemeFactory {
    fn description(self, description: &str) -> meme::ActiveModel;
    fn image_url(self, image_url: &str) -> meme::ActiveModel;
}

impl MemeFactory for meme::ActiveModel {
    fn description(mut self, description: &str) -> meme::ActiveModel {
        self.description = Set(description.to_string());
        self
    }

    fn image_url(mut self, image_url: &str) -> meme::ActiveModel {
        self.image_url = Set(image_url.to_string());
        self
    }
}
