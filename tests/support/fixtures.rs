// tests/support/fixtures.rs
//! Seed data: three topics (one without articles), four users (one without
//! content), thirteen articles and eighteen comments.
use chrono::{DateTime, NaiveDate, Utc};
use newsboard_core::domain::{
    article::{Article, ArticleBody, ArticleId, ArticleImageUrl, ArticleTitle},
    comment::{Comment, CommentBody, CommentId},
    topic::{Topic, TopicDescription, TopicSlug},
    user::{User, Username},
};

pub const SEED_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

/// Article ids in the default listing order (newest first).
pub const NEWEST_FIRST: [i32; 13] = [3, 6, 2, 12, 13, 5, 1, 9, 10, 4, 8, 11, 7];

/// Comment ids of article 1, newest first.
pub const ARTICLE_ONE_COMMENTS: [i32; 11] = [5, 2, 18, 13, 7, 8, 6, 12, 3, 4, 9];

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid fixture timestamp")
        .and_utc()
}

pub fn topics() -> Vec<Topic> {
    [
        ("mitch", "The man, the Mitch, the legend"),
        ("cats", "Not dogs"),
        ("paper", "what books are made of"),
    ]
    .into_iter()
    .map(|(slug, description)| Topic {
        slug: TopicSlug::new(slug).unwrap(),
        description: TopicDescription::new(description).unwrap(),
    })
    .collect()
}

pub fn users() -> Vec<User> {
    [
        ("butter_bridge", "jonny", "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg"),
        ("icellusedkars", "sam", "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4"),
        ("rogersop", "paul", "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4"),
        ("lurker", "do_nothing", "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png"),
    ]
    .into_iter()
    .map(|(username, name, avatar)| User {
        username: Username::new(username).unwrap(),
        name: name.to_string(),
        avatar_url: Some(avatar.to_string()),
    })
    .collect()
}

pub fn articles() -> Vec<Article> {
    let rows = [
        (1, "Living in the shadow of a great man", "mitch", "butter_bridge", at(2020, 7, 9, 20, 11), 100),
        (2, "Sony Vaio; or, The Laptop", "mitch", "icellusedkars", at(2020, 10, 16, 5, 3), 0),
        (3, "Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", at(2020, 11, 3, 9, 12), 0),
        (4, "Student SUES Mitch!", "mitch", "rogersop", at(2020, 5, 6, 1, 14), 0),
        (5, "UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", at(2020, 8, 3, 13, 14), 0),
        (6, "A", "mitch", "icellusedkars", at(2020, 10, 18, 1, 0), 0),
        (7, "Z", "mitch", "icellusedkars", at(2020, 1, 7, 14, 8), 0),
        (8, "Does Mitch predate civilisation?", "mitch", "icellusedkars", at(2020, 4, 17, 2, 8), 0),
        (9, "They're not exactly dogs, are they?", "mitch", "butter_bridge", at(2020, 6, 6, 9, 10), 0),
        (10, "Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop", at(2020, 5, 14, 4, 15), 0),
        (11, "Am I a cat?", "mitch", "icellusedkars", at(2020, 1, 15, 22, 21), 0),
        (12, "Moustache", "mitch", "butter_bridge", at(2020, 10, 11, 12, 24), 0),
        (13, "Another article about Mitch", "mitch", "butter_bridge", at(2020, 10, 11, 11, 24), 0),
    ];

    rows.into_iter()
        .map(|(id, title, topic, author, created_at, votes)| Article {
            id: ArticleId::new(id),
            author: Username::new(author).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            body: ArticleBody::new(format!("{title}: the full story")).unwrap(),
            topic: TopicSlug::new(topic).unwrap(),
            created_at,
            votes,
            image_url: ArticleImageUrl::from(SEED_IMG_URL.to_string()),
            comment_count: 0,
        })
        .collect()
}

pub fn comments() -> Vec<Comment> {
    let rows = [
        (1, 9, "butter_bridge", 16, at(2020, 4, 6, 12, 17)),
        (2, 1, "butter_bridge", 14, at(2020, 10, 31, 3, 3)),
        (3, 1, "icellusedkars", 100, at(2020, 3, 1, 1, 13)),
        (4, 1, "icellusedkars", -100, at(2020, 2, 23, 12, 1)),
        (5, 1, "icellusedkars", 0, at(2020, 11, 3, 21, 0)),
        (6, 1, "icellusedkars", 0, at(2020, 4, 11, 21, 2)),
        (7, 1, "icellusedkars", 0, at(2020, 5, 15, 20, 19)),
        (8, 1, "icellusedkars", 0, at(2020, 4, 14, 20, 19)),
        (9, 1, "icellusedkars", 0, at(2020, 1, 1, 3, 8)),
        (10, 3, "icellusedkars", 0, at(2020, 6, 20, 7, 24)),
        (11, 3, "icellusedkars", 0, at(2020, 9, 19, 23, 10)),
        (12, 1, "icellusedkars", 0, at(2020, 3, 2, 7, 10)),
        (13, 1, "icellusedkars", 0, at(2020, 6, 15, 10, 25)),
        (14, 5, "icellusedkars", 16, at(2020, 6, 9, 5, 0)),
        (15, 5, "butter_bridge", 1, at(2020, 11, 24, 0, 8)),
        (16, 6, "butter_bridge", 1, at(2020, 10, 11, 15, 23)),
        (17, 9, "icellusedkars", 20, at(2020, 3, 14, 17, 2)),
        (18, 1, "butter_bridge", 16, at(2020, 7, 21, 0, 20)),
    ];

    rows.into_iter()
        .map(|(id, article_id, author, votes, created_at)| Comment {
            id: CommentId::new(id),
            article_id: ArticleId::new(article_id),
            author: Username::new(author).unwrap(),
            body: CommentBody::new(format!("comment number {id}")).unwrap(),
            votes,
            created_at,
        })
        .collect()
}
