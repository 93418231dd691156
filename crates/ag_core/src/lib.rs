pub mod error;
pub mod models;
pub mod types;

pub use error::{Error, Result};
pub use models::GenerationModel;
pub use types::{ArticleLength, ArticleRequest, ArticleTone, GeneratedArticle};

pub mod prelude {
    pub use crate::{ArticleLength, ArticleRequest, ArticleTone, Error, GenerationModel, Result};
}
