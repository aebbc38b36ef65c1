//! Settings panel draft logic.
//!
//! The panel keeps a local working copy of the selected block's
//! properties so typing stays responsive, and forwards the full merged
//! map upward on every change. The draft is re-seeded exactly when the
//! bound block's id changes; property changes arriving under the same id
//! (the update round-trip) must not clobber in-progress edits.

use serde_json::Value;
use tracing::debug;

use crate::block::links_from;
use crate::registry::{settings_form, SettingsForm};
use crate::{Block, BlockId, BlockType, EditorIntent, LinkEntry, Properties};

#[derive(Debug, Clone)]
struct BoundBlock {
    id: BlockId,
    block_type: BlockType,
    draft: Properties,
}

/// Draft mirror of the selected block's properties.
///
/// With no block bound the panel reports its empty state and every update
/// path is a no-op that emits nothing.
#[derive(Debug, Clone, Default)]
pub struct SettingsPanel {
    bound: Option<BoundBlock>,
}

impl SettingsPanel {
    /// Create a panel with no block bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the panel to the selected block, or to none.
    ///
    /// Seeds the draft from `block.properties` only when the id differs
    /// from the currently bound one, so the owner can call this on every
    /// render without resetting half-typed edits.
    pub fn sync(&mut self, block: Option<&Block>) {
        match block {
            None => self.bound = None,
            Some(block) => {
                let rebind = !self
                    .bound
                    .as_ref()
                    .is_some_and(|bound| bound.id == block.id);
                if rebind {
                    debug!("settings panel bound to block {}", block.id);
                    self.bound = Some(BoundBlock {
                        id: block.id,
                        block_type: block.block_type,
                        draft: block.properties.clone(),
                    });
                }
            }
        }
    }

    /// Whether the panel is showing its empty-state placeholder.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_none()
    }

    /// The bound block's id, if any.
    #[must_use]
    pub fn block_id(&self) -> Option<BlockId> {
        self.bound.as_ref().map(|bound| bound.id)
    }

    /// The form to render for the bound block, if any.
    #[must_use]
    pub fn form(&self) -> Option<SettingsForm> {
        self.bound
            .as_ref()
            .map(|bound| settings_form(bound.block_type))
    }

    /// Panel heading, e.g. `"Hero Settings"`.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.bound
            .as_ref()
            .map(|bound| format!("{} Settings", bound.block_type.title()))
    }

    /// The current draft value for a property key.
    #[must_use]
    pub fn draft_value(&self, key: &str) -> Option<&Value> {
        self.bound.as_ref().and_then(|bound| bound.draft.get(key))
    }

    /// The current draft link entries for a list-valued property.
    #[must_use]
    pub fn draft_links(&self, key: &str) -> Vec<LinkEntry> {
        self.bound
            .as_ref()
            .map(|bound| links_from(&bound.draft, key))
            .unwrap_or_default()
    }

    /// Merge one scalar property into the draft and emit the full merged
    /// map. Last write wins; sibling keys always survive.
    pub fn update_property(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Option<EditorIntent> {
        let bound = self.bound.as_mut()?;
        bound.draft.insert(key.into(), value);
        Some(EditorIntent::UpdateBlock {
            id: bound.id,
            properties: bound.draft.clone(),
        })
    }

    /// Merge one key a single level deep into an object-valued property,
    /// preserving sibling nested keys. A missing or non-object parent is
    /// treated as empty.
    pub fn update_nested_property(
        &mut self,
        parent: impl Into<String>,
        child: impl Into<String>,
        value: Value,
    ) -> Option<EditorIntent> {
        let bound = self.bound.as_mut()?;
        let parent = parent.into();
        let mut nested = match bound.draft.get(&parent) {
            Some(Value::Object(existing)) => existing.clone(),
            _ => Properties::new(),
        };
        nested.insert(child.into(), value);
        bound.draft.insert(parent, Value::Object(nested));
        Some(EditorIntent::UpdateBlock {
            id: bound.id,
            properties: bound.draft.clone(),
        })
    }

    /// Append the placeholder entry to a link-list property, creating the
    /// list when absent.
    pub fn append_link(&mut self, key: &str) -> Option<EditorIntent> {
        let mut links = self.draft_links(key);
        links.push(LinkEntry::placeholder());
        self.write_links(key, links)
    }

    /// Replace the entry at `index`. Out-of-range indexes are stale UI
    /// state and drop the edit.
    pub fn replace_link(&mut self, key: &str, index: usize, entry: LinkEntry) -> Option<EditorIntent> {
        let mut links = self.draft_links(key);
        if index >= links.len() {
            debug!("dropping link edit at stale index {index} for {key}");
            return None;
        }
        links[index] = entry;
        self.write_links(key, links)
    }

    /// Remove the entry at `index`, preserving the order of the rest.
    /// Out-of-range indexes are stale UI state and drop the edit.
    pub fn remove_link(&mut self, key: &str, index: usize) -> Option<EditorIntent> {
        let mut links = self.draft_links(key);
        if index >= links.len() {
            debug!("dropping link removal at stale index {index} for {key}");
            return None;
        }
        links.remove(index);
        self.write_links(key, links)
    }

    /// The delete intent for the bound block, when the owner offers the
    /// delete capability. Confirmation, if desired, is the owner's job.
    #[must_use]
    pub fn delete_intent(&self) -> Option<EditorIntent> {
        self.bound
            .as_ref()
            .map(|bound| EditorIntent::DeleteBlock { id: bound.id })
    }

    fn write_links(&mut self, key: &str, links: Vec<LinkEntry>) -> Option<EditorIntent> {
        let value = serde_json::to_value(links).ok()?;
        self.update_property(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hero_block() -> Block {
        Block::new(BlockType::Hero)
            .with_property("headline", json!("Launch faster"))
            .with_property("subheading", json!("Ship today"))
            .with_property("backgroundColor", json!("#f3f4f6"))
    }

    fn merged_properties(intent: EditorIntent) -> Properties {
        match intent {
            EditorIntent::UpdateBlock { properties, .. } => properties,
            other => panic!("expected UpdateBlock, got {other:?}"),
        }
    }

    #[test]
    fn test_unbound_panel_is_empty_and_inert() {
        let mut panel = SettingsPanel::new();
        assert!(panel.is_empty());
        assert!(panel.update_property("headline", json!("x")).is_none());
        assert!(panel.append_link("navigationLinks").is_none());
        assert!(panel.delete_intent().is_none());
    }

    #[test]
    fn test_scalar_update_preserves_sibling_keys() {
        let block = hero_block();
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        let intent = panel
            .update_property("headline", json!("New headline"))
            .expect("bound panel emits");
        let properties = merged_properties(intent);

        assert_eq!(properties["headline"], json!("New headline"));
        assert_eq!(properties["subheading"], json!("Ship today"));
        assert_eq!(properties["backgroundColor"], json!("#f3f4f6"));
    }

    #[test]
    fn test_draft_survives_same_id_property_round_trip() {
        let mut block = hero_block();
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        panel
            .update_property("headline", json!("Half-ty"))
            .expect("should emit");

        // The owner round-trips the update; same id, new properties.
        block.properties.insert("headline".into(), json!("Half-ty"));
        panel.sync(Some(&block));
        panel.sync(Some(&block));

        assert_eq!(panel.draft_value("headline"), Some(&json!("Half-ty")));
    }

    #[test]
    fn test_draft_reseeds_when_block_id_changes() {
        let first = hero_block();
        let second = Block::new(BlockType::Hero).with_property("headline", json!("Other"));
        let mut panel = SettingsPanel::new();

        panel.sync(Some(&first));
        panel
            .update_property("headline", json!("Edited"))
            .expect("should emit");

        panel.sync(Some(&second));
        assert_eq!(panel.draft_value("headline"), Some(&json!("Other")));
    }

    #[test]
    fn test_nested_update_preserves_nested_siblings() {
        let block = Block::new(BlockType::Footer)
            .with_property("contactInfo", json!({"email": "old@example.com", "phone": "555"}));
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        let intent = panel
            .update_nested_property("contactInfo", "email", json!("new@example.com"))
            .expect("should emit");
        let properties = merged_properties(intent);

        assert_eq!(
            properties["contactInfo"],
            json!({"email": "new@example.com", "phone": "555"})
        );
    }

    #[test]
    fn test_nested_update_treats_missing_parent_as_empty() {
        let block = Block::new(BlockType::Footer);
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        let intent = panel
            .update_nested_property("contactInfo", "phone", json!("555"))
            .expect("should emit");
        assert_eq!(
            merged_properties(intent)["contactInfo"],
            json!({"phone": "555"})
        );
    }

    #[test]
    fn test_append_link_to_absent_list() {
        let block = Block::new(BlockType::Header);
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        let intent = panel.append_link("navigationLinks").expect("should emit");
        assert_eq!(
            merged_properties(intent)["navigationLinks"],
            json!([{"label": "New Link", "href": "#"}])
        );
    }

    #[test]
    fn test_remove_link_preserves_order_of_rest() {
        let block = Block::new(BlockType::Header).with_property(
            "navigationLinks",
            json!([
                {"label": "Home", "href": "#home"},
                {"label": "About", "href": "#about"}
            ]),
        );
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        let intent = panel.remove_link("navigationLinks", 0).expect("should emit");
        assert_eq!(
            merged_properties(intent)["navigationLinks"],
            json!([{"label": "About", "href": "#about"}])
        );
    }

    #[test]
    fn test_link_edits_at_stale_indexes_are_dropped() {
        let block = Block::new(BlockType::Header);
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        assert!(panel.remove_link("navigationLinks", 0).is_none());
        assert!(panel
            .replace_link("navigationLinks", 3, LinkEntry::new("X", "#"))
            .is_none());
    }

    #[test]
    fn test_replace_link_by_index() {
        let block = Block::new(BlockType::Footer).with_property(
            "quickLinks",
            json!([
                {"label": "Docs", "href": "/docs"},
                {"label": "Blog", "href": "/blog"}
            ]),
        );
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        let intent = panel
            .replace_link("quickLinks", 1, LinkEntry::new("News", "/news"))
            .expect("should emit");
        assert_eq!(
            merged_properties(intent)["quickLinks"],
            json!([
                {"label": "Docs", "href": "/docs"},
                {"label": "News", "href": "/news"}
            ])
        );
    }

    #[test]
    fn test_unsupported_type_gets_unavailable_form() {
        let block = Block::new(BlockType::Pricing);
        let mut panel = SettingsPanel::new();
        panel.sync(Some(&block));

        assert_eq!(panel.form(), Some(SettingsForm::Unavailable));
        assert_eq!(panel.title().as_deref(), Some("Pricing Settings"));
    }
}
