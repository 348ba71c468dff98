//! Rejection of posts the index cannot represent.

use folio::build::{parse_posts, screen_posts};
use folio::types::PostDefect;
use std::path::Path;

#[test]
fn test_missing_fields_are_defaulted_then_screened() {
    let raw = br#"[
        {"slug": "ok", "date": "2024-01-01", "title": "Fine"},
        {"slug": "", "date": "2024-01-02"},
        {"slug": "undated"}
    ]"#;
    let posts = parse_posts(raw, Path::new("posts.json")).unwrap();
    assert_eq!(posts.len(), 3);

    let (kept, rejected) = screen_posts(posts);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].slug, "ok");

    assert_eq!(rejected.len(), 2);
    assert_eq!(rejected[0].position, 1);
    assert_eq!(rejected[0].defect, PostDefect::MissingSlug);
    assert_eq!(rejected[1].position, 2);
    assert_eq!(rejected[1].slug, "undated");
    assert_eq!(rejected[1].defect, PostDefect::MissingDate);
}

#[test]
fn test_non_array_payload_is_a_parse_error() {
    let err = parse_posts(br#"{"posts": []}"#, Path::new("posts.json")).unwrap_err();
    assert!(err.to_string().contains("posts.json"));
}

#[test]
fn test_optional_fields_accept_null() {
    let raw = br#"[{"slug": "a", "date": "2024-01-01", "excerpt": null, "thumbnail": null, "width": "large", "tags": ["x"]}]"#;
    let posts = parse_posts(raw, Path::new("posts.json")).unwrap();
    assert_eq!(posts[0].width, Some(folio::Width::Large));
    assert!(posts[0].excerpt.is_none());

    let album = br#"[{"slug": "iceland", "title": "Iceland", "date": "2023-06-01",
        "content": null, "tags": null, "author": null, "timezone": null}]"#;
    let posts = parse_posts(album, Path::new("posts.json")).unwrap();
    assert_eq!(posts[0].content, "");
    assert!(posts[0].tags.is_empty());
    assert_eq!(posts[0].author, "");
    assert!(posts[0].validate().is_ok());
}

#[test]
fn test_null_slug_is_a_row_reject_not_a_parse_error() {
    let raw = br#"[{"slug": "a", "date": "2024-01-01"}, {"slug": null, "date": "2024-01-01"}]"#;
    let posts = parse_posts(raw, Path::new("posts.json")).unwrap();
    assert_eq!(posts.len(), 2);

    let (kept, rejected) = screen_posts(posts);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].slug, "a");
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].position, 1);
    assert_eq!(rejected[0].defect, PostDefect::MissingSlug);
}
