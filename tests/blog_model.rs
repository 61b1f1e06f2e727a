use quillpad_core::{Blog, BlogValidationError};
use uuid::Uuid;

#[test]
fn new_sets_defaults() {
    let author = Uuid::new_v4();
    let blog = Blog::new("On Engines", "desc", author).unwrap();

    assert!(!blog.uuid.is_nil());
    assert_eq!(blog.title(), "On Engines");
    assert_eq!(blog.description, "desc");
    assert_eq!(blog.banner_url, "");
    assert_eq!(blog.content_json, "");
    assert!(blog.tags.is_empty());
    assert_eq!(blog.author_id(), author);
    assert!(blog.comments.is_empty());
    assert_eq!(blog.total_likes, 0);
    assert_eq!(blog.total_comments, 0);
}

#[test]
fn new_rejects_nil_author() {
    let err = Blog::new("On Engines", "desc", Uuid::nil()).unwrap_err();
    assert_eq!(err, BlogValidationError::NilAuthor);
}

#[test]
fn add_like_counts_exactly() {
    let mut blog = Blog::new("On Engines", "desc", Uuid::new_v4()).unwrap();

    for _ in 0..3 {
        blog.add_like();
    }
    assert_eq!(blog.total_likes, 3);
}

#[test]
fn likes_are_not_deduplicated() {
    let mut blog = Blog::new("On Engines", "desc", Uuid::new_v4()).unwrap();

    blog.add_like();
    blog.add_like();
    assert_eq!(blog.total_likes, 2);
}

#[test]
fn record_comment_appends_and_counts() {
    let mut blog = Blog::new("On Engines", "desc", Uuid::new_v4()).unwrap();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    blog.record_comment(first);
    blog.record_comment(second);

    assert_eq!(blog.comments, vec![first, second]);
    assert_eq!(blog.total_comments, 2);
}

#[test]
fn content_mutation_points_replace_fields() {
    let mut blog = Blog::new("On Engines", "desc", Uuid::new_v4()).unwrap();

    blog.add_tag("computing");
    blog.add_tag("history");
    blog.set_banner_url("https://cdn.example.com/banner.png");
    blog.set_content_json("{\"blocks\":[]}");

    assert_eq!(blog.tags, vec!["computing", "history"]);
    assert_eq!(blog.banner_url, "https://cdn.example.com/banner.png");
    assert_eq!(blog.content_json, "{\"blocks\":[]}");
}

#[test]
fn blog_serialization_round_trips() {
    let blog_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let author = Uuid::new_v4();
    let mut blog = Blog::with_id(blog_id, "On Engines", "desc", author).unwrap();
    blog.add_like();
    blog.add_tag("computing");

    let json = serde_json::to_value(&blog).unwrap();
    assert_eq!(json["uuid"], blog_id.to_string());
    assert_eq!(json["title"], "On Engines");
    assert_eq!(json["author"], author.to_string());
    assert_eq!(json["total_likes"], 1);

    let decoded: Blog = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, blog);
}
