//! Editing Flow Integration Tests
//!
//! Tests the full controlled-view loop across the editing surfaces:
//! - Canvas drag reorder round-tripping through the session
//! - Settings panel drafts feeding session updates
//! - Selection discipline across delete and switch
//! - Editable field save/cancel inside a link list

use builder_core::{
    Block, BlockType, CanvasView, EditableField, EditorIntent, EditorSession, LinkEntry,
    MoveDirection, Page, SettingsPanel,
};
use serde_json::json;

/// Build a three-block landing page: header, hero, footer.
fn landing_page() -> Page {
    Page::new("Landing").with_blocks(vec![
        Block::new(BlockType::Header).with_property(
            "navigationLinks",
            json!([
                {"label": "Home", "href": "#home"},
                {"label": "Features", "href": "#features"}
            ]),
        ),
        Block::new(BlockType::Hero)
            .with_property("headline", json!("Launch faster"))
            .with_property("subheading", json!("Ship today")),
        Block::new(BlockType::Footer)
            .with_property("companyName", json!("Acme"))
            .with_property("contactInfo", json!({"email": "hi@acme.io"})),
    ])
}

fn ids(blocks: &[Block]) -> Vec<builder_core::BlockId> {
    blocks.iter().map(|block| block.id).collect()
}

// ============================================================================
// Drag Reorder Round-Trip
// ============================================================================

#[test]
fn test_drag_reorder_round_trips_through_session() {
    let mut session = EditorSession::new(landing_page());
    let mut canvas = CanvasView::new();
    canvas.sync(session.page());

    let [a, b, c] = [
        session.page().blocks()[0].id,
        session.page().blocks()[1].id,
        session.page().blocks()[2].id,
    ];

    // Drag the header down across both other blocks; each hover emits a
    // full-sequence reorder the session applies immediately.
    canvas.begin_drag(0);
    let intent = canvas.hover(1).expect("crossing one position reorders");
    session.apply(intent);
    canvas.sync(session.page());

    let intent = canvas.hover(2).expect("crossing the next position reorders");
    session.apply(intent);
    canvas.end_drag();
    canvas.sync(session.page());

    assert_eq!(ids(session.page().blocks()), vec![b, c, a]);
    assert_eq!(ids(canvas.blocks()), vec![b, c, a]);
}

#[test]
fn test_mirror_stays_authoritative_until_owner_catches_up() {
    let mut session = EditorSession::new(landing_page());
    let mut canvas = CanvasView::new();
    canvas.sync(session.page());

    canvas.begin_drag(0);
    let intent = canvas.hover(2).expect("should reorder");

    // Before the session applies the intent, the mirror already shows the
    // new order while the owner still holds the old one.
    assert_ne!(ids(canvas.blocks()), ids(session.page().blocks()));

    session.apply(intent);
    canvas.sync(session.page());
    assert_eq!(ids(canvas.blocks()), ids(session.page().blocks()));
}

// ============================================================================
// Settings Panel to Session
// ============================================================================

#[test]
fn test_scalar_edit_round_trip_preserves_siblings() {
    let mut session = EditorSession::new(landing_page());
    let hero = session.page().blocks()[1].id;
    let mut panel = SettingsPanel::new();

    session.select_block(Some(hero));
    panel.sync(session.page().block(hero));

    let intent = panel
        .update_property("headline", json!("New headline"))
        .expect("bound panel emits");
    session.apply(intent);

    let updated = session.page().block(hero).expect("hero still exists");
    assert_eq!(updated.prop_str("headline"), Some("New headline"));
    assert_eq!(updated.prop_str("subheading"), Some("Ship today"));
}

#[test]
fn test_rapid_edits_to_different_keys_merge() {
    let mut session = EditorSession::new(landing_page());
    let hero = session.page().blocks()[1].id;
    let mut panel = SettingsPanel::new();
    panel.sync(session.page().block(hero));

    // Two keystroke-level updates land before any re-sync; last write
    // wins per key and neither loses the other.
    let first = panel
        .update_property("headline", json!("H"))
        .expect("should emit");
    let second = panel
        .update_property("ctaButtonText", json!("Go"))
        .expect("should emit");
    session.apply(first);
    session.apply(second);

    let updated = session.page().block(hero).expect("hero still exists");
    assert_eq!(updated.prop_str("headline"), Some("H"));
    assert_eq!(updated.prop_str("ctaButtonText"), Some("Go"));
}

#[test]
fn test_switching_selection_reseeds_panel() {
    let mut session = EditorSession::new(landing_page());
    let hero = session.page().blocks()[1].id;
    let footer = session.page().blocks()[2].id;
    let mut panel = SettingsPanel::new();

    session.select_block(Some(hero));
    panel.sync(session.page().block(hero));
    let intent = panel
        .update_property("headline", json!("Edited"))
        .expect("should emit");
    session.apply(intent);

    session.select_block(Some(footer));
    panel.sync(session.page().block(footer));
    assert_eq!(panel.draft_value("companyName"), Some(&json!("Acme")));
    assert_eq!(panel.draft_value("headline"), None);
}

#[test]
fn test_panel_delete_flows_through_session() {
    let mut session = EditorSession::new(landing_page());
    let hero = session.page().blocks()[1].id;
    let mut panel = SettingsPanel::new();

    session.select_block(Some(hero));
    panel.sync(session.page().block(hero));

    let intent = panel.delete_intent().expect("bound panel offers delete");
    session.apply(intent);

    assert_eq!(session.page().block_count(), 2);
    assert_eq!(session.selection().selected(), None);
    panel.sync(None);
    assert!(panel.is_empty());
}

// ============================================================================
// Selection Discipline
// ============================================================================

#[test]
fn test_inline_editing_follows_selection() {
    let mut session = EditorSession::new(landing_page());
    let hero = session.page().blocks()[1].id;
    let footer = session.page().blocks()[2].id;

    // Editing without selection is rejected.
    assert!(session.selection_mut().begin_editing(hero).is_err());

    session.select_block(Some(hero));
    session
        .selection_mut()
        .begin_editing(hero)
        .expect("selected block may edit");

    // Selecting another block drops edit mode.
    session.select_block(Some(footer));
    assert_eq!(session.selection().editing(), None);
}

// ============================================================================
// Editable Field Inside a Link List
// ============================================================================

#[test]
fn test_link_field_save_feeds_list_replace() {
    let mut session = EditorSession::new(landing_page());
    let header = session.page().blocks()[0].id;
    let mut panel = SettingsPanel::new();
    panel.sync(session.page().block(header));

    let links = panel.draft_links("navigationLinks");
    let mut field = EditableField::new(links[0].label.clone(), links[0].href.clone());

    field.activate();
    field.set_label("Homepage");
    field.set_href("/");
    let update = field.save().expect("editing field saves");

    let intent = panel
        .replace_link(
            "navigationLinks",
            0,
            LinkEntry::new(update.label, update.href),
        )
        .expect("should emit");
    session.apply(intent);

    let updated = session.page().block(header).expect("header still exists");
    assert_eq!(
        updated.links("navigationLinks"),
        vec![
            LinkEntry::new("Homepage", "/"),
            LinkEntry::new("Features", "#features"),
        ]
    );
}

#[test]
fn test_link_field_cancel_changes_nothing() {
    let session = EditorSession::new(landing_page());
    let header = session.page().blocks()[0].id;
    let block = session.page().block(header).expect("header exists");

    let links = block.links("navigationLinks");
    let mut field = EditableField::new(links[0].label.clone(), links[0].href.clone());

    field.activate();
    field.set_label("Scrapped");
    field.cancel();

    assert_eq!(field.label(), "Home");
    assert_eq!(field.href(), "#home");
}

// ============================================================================
// Duplicate and Move
// ============================================================================

#[test]
fn test_duplicate_then_moves_keep_count_stable() {
    let mut session = EditorSession::new(landing_page());
    let hero = session.page().blocks()[1].id;

    let copy = session.duplicate_block(hero).expect("hero duplicates");
    assert_eq!(session.page().block_count(), 4);
    assert_eq!(session.page().index_of(copy), Some(2));

    session.apply(EditorIntent::MoveBlock {
        id: copy,
        direction: MoveDirection::Down,
    });
    session.apply(EditorIntent::MoveBlock {
        id: copy,
        direction: MoveDirection::Down,
    });
    // Second move hits the end of the sequence and is a no-op.
    assert_eq!(session.page().index_of(copy), Some(3));
    assert_eq!(session.page().block_count(), 4);
}
