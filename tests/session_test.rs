use std::io::Write;

use patternbook::{CatalogSource, FieldSet, MediaKind, PageSession, PageState, Selection};
use tempfile::NamedTempFile;

fn fixture_source() -> CatalogSource {
    CatalogSource::File(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json"),
    )
}

fn session() -> PageSession {
    PageSession::new(fixture_source(), FieldSet::default())
}

#[tokio::test]
async fn test_no_id_opens_gallery() {
    let state = session().open(&Selection::from_location("index.html")).await;
    match state {
        PageState::Gallery(view) => {
            assert_eq!(view.rows().len(), 3);
            assert_eq!(view.filter("teddy").len(), 1);
        }
        other => panic!("Expected gallery, got {}", other.name()),
    }
}

#[tokio::test]
async fn test_id_opens_tutorial_at_first_step() {
    let selection = Selection::from_location("working.html?id=teddy");
    let state = session().open(&selection).await;
    match state {
        PageState::Tutorial(cursor) => {
            assert_eq!(cursor.position(), 0);
            let snapshot = cursor.snapshot();
            assert_eq!(snapshot.title, "Classic Teddy Bear");
            assert_eq!(snapshot.step_count_text(), "Step 1 of 3");
            assert_eq!(snapshot.resolved_media, "videos/magic-ring.mp4");
            assert_eq!(snapshot.media_kind, MediaKind::Video);
        }
        other => panic!("Expected tutorial, got {}", other.name()),
    }
}

#[tokio::test]
async fn test_blank_step_media_falls_back_to_item_image() {
    let state = session().open(&Selection::Item("teddy".to_string())).await;
    let PageState::Tutorial(mut cursor) = state else {
        panic!("Expected tutorial");
    };
    cursor.advance();
    let media = cursor.resolved_media();
    assert_eq!(media.path, "images/teddy.jpg");
    assert_eq!(media.kind, MediaKind::Image);
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let state = session().open(&Selection::from_location("working.html?id=dragon")).await;
    match state {
        PageState::NotFound { id } => assert_eq!(id, "dragon"),
        other => panic!("Expected not-found, got {}", other.name()),
    }
}

#[tokio::test]
async fn test_tutorial_page_without_id_is_not_found() {
    for location in ["working.html", "working.html?id=", "index.html?id="] {
        let state = session().open(&Selection::from_location(location)).await;
        match state {
            PageState::NotFound { id } => assert!(id.is_empty(), "{location}"),
            other => panic!("Expected not-found for {location}, got {}", other.name()),
        }
    }
}

#[tokio::test]
async fn test_item_without_steps_is_misconfigured() {
    let state = session().open(&Selection::Item("shawl".to_string())).await;
    assert!(state.is_error());
    assert_eq!(state.name(), "misconfigured");
}

#[tokio::test]
async fn test_missing_file_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let source = CatalogSource::File(dir.path().join("missing.json"));
    let state = PageSession::new(source, FieldSet::default())
        .open(&Selection::All)
        .await;
    assert_eq!(state.name(), "unavailable");
}

#[tokio::test]
async fn test_malformed_file_is_unavailable() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{\"not\": \"a list\"}}").unwrap();

    let source = CatalogSource::File(file.path().to_path_buf());
    let state = PageSession::new(source, FieldSet::default())
        .open(&Selection::Item("teddy".to_string()))
        .await;
    match state {
        PageState::Unavailable { reason } => assert!(!reason.is_empty()),
        other => panic!("Expected unavailable, got {}", other.name()),
    }
}

#[test]
fn test_selection_parsing() {
    assert_eq!(Selection::from_location("index.html"), Selection::All);
    assert_eq!(
        Selection::from_location("working.html?id="),
        Selection::Item(String::new())
    );
    assert_eq!(
        Selection::from_location("working.html"),
        Selection::Item(String::new())
    );
    assert_eq!(
        Selection::from_location("working.html?page=2&id=granny%20square#top"),
        Selection::Item("granny square".to_string())
    );
    assert_eq!(
        Selection::from_location("?id=a&id=b"),
        Selection::Item("a".to_string())
    );
}
