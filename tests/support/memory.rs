// tests/support/memory.rs
//! In-memory stand-in for the Postgres repositories. Foreign keys and
//! uniqueness are enforced the way the store reports them: a missing
//! referenced row is `NotFound`, a duplicate topic slug is `Validation`.
use super::fixtures;
use async_trait::async_trait;
use newsboard_core::domain::{
    article::{
        Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSortColumn,
        ArticleSummary, ArticleWriteRepository, NewArticle, SortOrder,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    pagination::PageRequest,
    topic::{NewTopic, Topic, TopicRepository, TopicSlug},
    user::{User, UserRepository, Username},
    votes::VoteDelta,
};
use std::cmp::Ordering;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering as AtomicOrdering},
};

#[derive(Default)]
struct StoreState {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
}

impl StoreState {
    fn next_article_id(&self) -> i32 {
        self.articles.iter().map(|a| i32::from(a.id)).max().unwrap_or(0) + 1
    }

    fn next_comment_id(&self) -> i32 {
        self.comments.iter().map(|c| i32::from(c.id)).max().unwrap_or(0) + 1
    }

    fn counted(&self, article: &Article) -> Article {
        let mut article = article.clone();
        article.comment_count = self
            .comments
            .iter()
            .filter(|c| c.article_id == article.id)
            .count() as i64;
        article
    }

    fn has_topic(&self, slug: &TopicSlug) -> bool {
        self.topics.iter().any(|t| &t.slug == slug)
    }

    fn has_user(&self, username: &Username) -> bool {
        self.users.iter().any(|u| &u.username == username)
    }

    fn has_article(&self, id: ArticleId) -> bool {
        self.articles.iter().any(|a| a.id == id)
    }
}

/// Cloning shares the underlying state, so one store can back every
/// repository port of a test router.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
    topic_lookups: Arc<AtomicUsize>,
    article_lookups: Arc<AtomicUsize>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            state.topics = fixtures::topics();
            state.users = fixtures::users();
            state.articles = fixtures::articles();
            state.comments = fixtures::comments();
        }
        store
    }

    /// Number of `TopicRepository::exists` calls so far.
    pub fn topic_lookups(&self) -> usize {
        self.topic_lookups.load(AtomicOrdering::SeqCst)
    }

    /// Number of `ArticleReadRepository::exists` calls so far.
    pub fn article_lookups(&self) -> usize {
        self.article_lookups.load(AtomicOrdering::SeqCst)
    }

    pub fn comment_count(&self) -> usize {
        self.state.lock().unwrap().comments.len()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }
}

fn compare(a: &ArticleSummary, b: &ArticleSummary, column: ArticleSortColumn) -> Ordering {
    let primary = match column {
        ArticleSortColumn::Title => a.title.as_str().cmp(b.title.as_str()),
        ArticleSortColumn::Topic => a.topic.as_str().cmp(b.topic.as_str()),
        ArticleSortColumn::Author => a.author.as_str().cmp(b.author.as_str()),
        ArticleSortColumn::Votes => a.votes.cmp(&b.votes),
        ArticleSortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    primary.then_with(|| i32::from(a.id).cmp(&i32::from(b.id)))
}

#[async_trait]
impl ArticleWriteRepository for MemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if !state.has_user(&article.author) {
            return Err(DomainError::NotFound(format!("user {} not found", article.author)));
        }
        if !state.has_topic(&article.topic) {
            return Err(DomainError::NotFound(format!("topic {} not found", article.topic)));
        }

        let created = Article {
            id: ArticleId::new(state.next_article_id()),
            author: article.author,
            title: article.title,
            body: article.body,
            topic: article.topic,
            created_at: article.created_at,
            votes: 0,
            image_url: article.image_url,
            comment_count: 0,
        };
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn apply_vote(&self, id: ArticleId, delta: VoteDelta) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
        article.votes += delta.value();
        let updated = article.clone();
        Ok(state.counted(&updated))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if !state.has_article(id) {
            return Err(DomainError::NotFound(format!("article {id} not found")));
        }
        state.comments.retain(|c| c.article_id != id);
        state.articles.retain(|a| a.id != id);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .articles
            .iter()
            .find(|a| a.id == id)
            .map(|a| state.counted(a)))
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let state = self.state.lock().unwrap();
        let mut summaries: Vec<ArticleSummary> = state
            .articles
            .iter()
            .filter(|a| listing.topic.as_ref().is_none_or(|topic| &a.topic == topic))
            .map(|a| ArticleSummary::from(state.counted(a)))
            .collect();

        summaries.sort_by(|a, b| {
            let ordering = compare(a, b, listing.sort_by);
            match listing.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(listing.page.window(summaries))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        self.article_lookups.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.state.lock().unwrap().has_article(id))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn list_for_article(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Vec<Comment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<Comment> = state
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i32::from(b.id).cmp(&i32::from(a.id)))
        });
        Ok(page.window(comments))
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        if !state.has_article(comment.article_id) {
            return Err(DomainError::NotFound(format!(
                "article {} not found",
                comment.article_id
            )));
        }
        if !state.has_user(&comment.author) {
            return Err(DomainError::NotFound(format!("user {} not found", comment.author)));
        }

        let created = Comment {
            id: CommentId::new(state.next_comment_id()),
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            votes: 0,
            created_at: comment.created_at,
        };
        state.comments.push(created.clone());
        Ok(created)
    }

    async fn apply_vote(&self, id: CommentId, delta: VoteDelta) -> DomainResult<Comment> {
        let mut state = self.state.lock().unwrap();
        let comment = state
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("comment {id} not found")))?;
        comment.votes += delta.value();
        Ok(comment.clone())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.comments.len();
        state.comments.retain(|c| c.id != id);
        if state.comments.len() == before {
            return Err(DomainError::NotFound(format!("comment {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl TopicRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        let mut topics = self.state.lock().unwrap().topics.clone();
        topics.sort_by(|a, b| a.slug.as_str().cmp(b.slug.as_str()));
        Ok(topics)
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        self.topic_lookups.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(self.state.lock().unwrap().has_topic(slug))
    }

    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let mut state = self.state.lock().unwrap();
        if state.has_topic(&topic.slug) {
            return Err(DomainError::Validation(format!(
                "topic {} already exists",
                topic.slug
            )));
        }
        state.topics.push(topic.clone());
        Ok(topic)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users = self.state.lock().unwrap().users.clone();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(users)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }
}
