pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, NewArticle};
pub use listing::{ArticleListing, ArticleSortColumn, SortOrder};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleBody, ArticleId, ArticleImageUrl, ArticleTitle, DEFAULT_ARTICLE_IMG_URL,
};
