//! Announces section changes while keyboard focus moves through a grid.

use std::sync::Arc;

use horizon_aria_core::logging::{span_names, targets};
use horizon_aria_core::{ConnectionId, PerfSpan};
use parking_lot::{Mutex, RwLock};

use crate::accessibility::{LiveAnnouncer, Platform, Politeness, SectionAnnouncementPolicy};
use crate::collection::{Collection, CollectionKey, SelectionManager};
use crate::config::AriaConfig;
use crate::i18n::{FormatValue, I18nError, LocalizedStringFormatter, SystemLocale};

/// Catalog namespace holding the grid messages.
const NAMESPACE: &str = "grid";

/// Speaks "<title>, section, <n> rows" when focus enters a different
/// section of a grid, on platforms whose screen reader does not do so itself.
///
/// The announcer remembers the last section focus was in. The first
/// evaluation only records that section; later evaluations announce when the
/// section differs. The remembered section is updated on every evaluation
/// made while the collection is focused, announced or not. Mounting while
/// unfocused records no section.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use accesskit::NodeId;
/// use horizon_aria::accessibility::{LiveRegion, Politeness};
/// use horizon_aria::collection::{CollectionNode, NodeType, SelectionManager, TreeCollection};
/// use horizon_aria::grid::GridSectionAnnouncer;
///
/// let mut grid = TreeCollection::new();
/// grid.add_root(CollectionNode::new("a", NodeType::Section).with_aria_label("Fruits"))?;
/// grid.add_child(&"a", CollectionNode::new("a-header", NodeType::Header))?;
/// grid.add_child(&"a", CollectionNode::new("apple", NodeType::Row))?;
/// grid.add_root(CollectionNode::new("b", NodeType::Section).with_aria_label("Vegetables"))?;
/// grid.add_child(&"b", CollectionNode::new("b-header", NodeType::Header))?;
/// grid.add_child(&"b", CollectionNode::new("carrot", NodeType::Row))?;
///
/// let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
/// let mut announcer = GridSectionAnnouncer::new(region.clone(), "en-US")?.with_policy(true);
///
/// let selection = SelectionManager::new();
/// selection.set_focused(true);
/// selection.set_focused_key(Some("apple"));
/// assert_eq!(announcer.update(&grid, &selection), None); // first evaluation
///
/// selection.set_focused_key(Some("carrot"));
/// assert_eq!(announcer.update(&grid, &selection).as_deref(), Some("Vegetables, section, 1 row"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct GridSectionAnnouncer<K: CollectionKey> {
    last_section: Option<K>,
    mounted: bool,
    formatter: LocalizedStringFormatter,
    announcer: Arc<dyn LiveAnnouncer>,
    policy: Box<dyn SectionAnnouncementPolicy>,
    politeness: Politeness,
}

impl<K: CollectionKey> GridSectionAnnouncer<K> {
    /// Create an announcer speaking `locale`, gated on the current platform.
    pub fn new(announcer: Arc<dyn LiveAnnouncer>, locale: &str) -> Result<Self, I18nError> {
        Ok(Self {
            last_section: None,
            mounted: false,
            formatter: LocalizedStringFormatter::new(NAMESPACE, locale)?,
            announcer,
            policy: Box::new(Platform::current()),
            politeness: Politeness::default(),
        })
    }

    /// Create an announcer from user configuration.
    ///
    /// `announcement.force` overrides the platform check when set.
    pub fn from_config(config: &AriaConfig, announcer: Arc<dyn LiveAnnouncer>) -> Result<Self, I18nError> {
        let locale = config.locale.clone().unwrap_or_else(SystemLocale::current);
        let announcer = Self::new(announcer, &locale)?.with_politeness(config.announcement.politeness);
        Ok(match config.announcement.force {
            Some(force) => announcer.with_policy(force),
            None => announcer,
        })
    }

    /// Set the platform policy using builder pattern.
    pub fn with_policy(mut self, policy: impl SectionAnnouncementPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Set the announcement politeness using builder pattern.
    pub fn with_politeness(mut self, politeness: Politeness) -> Self {
        self.politeness = politeness;
        self
    }

    /// Replace the message formatter using builder pattern.
    pub fn with_formatter(mut self, formatter: LocalizedStringFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// The section focus was in at the last evaluation.
    pub fn last_section(&self) -> Option<&K> {
        self.last_section.as_ref()
    }

    /// Whether the first evaluation has happened.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Evaluate the current focus of `selection` within `collection`.
    ///
    /// Returns the announced message, if any.
    pub fn update<C>(&mut self, collection: &C, selection: &SelectionManager<K>) -> Option<String>
    where
        C: Collection<Key = K>,
    {
        self.evaluate(collection, selection.focused_key().as_ref(), selection.is_focused())
    }

    /// Evaluate an explicit focus state.
    pub fn evaluate<C>(&mut self, collection: &C, focused_key: Option<&K>, is_focused: bool) -> Option<String>
    where
        C: Collection<Key = K>,
    {
        let message = self.next_announcement(collection, focused_key, is_focused)?;
        self.announcer.announce(&message, self.politeness);
        Some(message)
    }

    /// Advance the section state and format the message to announce, without
    /// announcing it.
    fn next_announcement<C>(&mut self, collection: &C, focused_key: Option<&K>, is_focused: bool) -> Option<String>
    where
        C: Collection<Key = K>,
    {
        let _span = PerfSpan::new(span_names::SECTION_ANNOUNCEMENT);
        // An unfocused collection has no focused item.
        let focused_key = focused_key.filter(|_| is_focused);
        let section = focused_key.and_then(|key| collection.enclosing_section(key));
        let section_key = section.map(|node| node.key().clone());

        if !self.mounted {
            tracing::trace!(target: targets::ANNOUNCE, ?section_key, "initial section recorded");
            self.mounted = true;
            self.last_section = section_key;
            return None;
        }

        if focused_key.is_none() {
            tracing::trace!(target: targets::ANNOUNCE, "collection not focused, skipping");
            return None;
        }

        if section_key == self.last_section {
            tracing::debug!(target: targets::ANNOUNCE, ?section_key, "section unchanged");
            return None;
        }

        let previous = std::mem::replace(&mut self.last_section, section_key);
        let section = section?;

        if !self.policy.should_announce_sections() {
            tracing::debug!(
                target: targets::ANNOUNCE,
                ?previous,
                section = ?section.key(),
                "platform announces sections natively"
            );
            return None;
        }

        // Untitled sections keep the template and speak an empty title.
        let size = collection.child_nodes(section.key()).len().saturating_sub(1);
        let formatted = self.formatter.format(
            "sectionAnnouncement",
            &[
                ("sectionTitle", section.accessible_title().into()),
                ("sectionSize", FormatValue::from(size)),
            ],
        );

        match formatted {
            Ok(message) => {
                tracing::debug!(target: targets::ANNOUNCE, section = ?section.key(), %message, "section changed");
                Some(message)
            }
            Err(err) => {
                tracing::warn!(target: targets::ANNOUNCE, error = %err, "failed to format section announcement");
                None
            }
        }
    }

    /// Evaluate on every focus change of `selection`.
    ///
    /// The announcer is mounted immediately with the current focus state.
    /// Disconnect with `selection.focus_changed.disconnect(id)`. The slot
    /// takes a read lock on `collection`, so do not hold its write lock while
    /// moving focus. Both locks are released before the message is announced,
    /// so a listener on the announcer may move focus again.
    pub fn attach<C>(mut self, collection: Arc<RwLock<C>>, selection: &SelectionManager<K>) -> ConnectionId
    where
        C: Collection<Key = K> + Send + Sync + 'static,
    {
        self.update(&*collection.read(), selection);

        let sink = Arc::clone(&self.announcer);
        let politeness = self.politeness;
        let announcer = Mutex::new(self);
        selection.focus_changed.connect(move |change| {
            let message = {
                let collection = collection.read();
                announcer
                    .lock()
                    .next_announcement(&*collection, change.focused_key.as_ref(), change.is_focused)
            };
            if let Some(message) = message {
                sink.announce(&message, politeness);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::LiveRegion;
    use crate::collection::{CollectionNode, NodeType, TreeCollection};
    use accesskit::NodeId;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn grid() -> TreeCollection<&'static str> {
        let mut grid = TreeCollection::new();
        for (section, label, header, rows) in [
            ("fruits", "Fruits", "fruits-header", &["apple", "banana", "cherry"][..]),
            ("veg", "Vegetables", "veg-header", &["carrot"][..]),
            ("nuts", "", "nuts-header", &["almond", "pecan"][..]),
        ] {
            grid.add_root(CollectionNode::new(section, NodeType::Section).with_aria_label(label))
                .unwrap();
            grid.add_child(&section, CollectionNode::new(header, NodeType::Header))
                .unwrap();
            for row in rows {
                grid.add_child(&section, CollectionNode::new(*row, NodeType::Row)).unwrap();
            }
        }
        grid.add_child(&"apple", CollectionNode::new("apple-cell", NodeType::Cell))
            .unwrap();
        grid.add_child(&"cherry", CollectionNode::new("cherry-cell", NodeType::Cell))
            .unwrap();
        grid.add_root(CollectionNode::new("loose", NodeType::Row)).unwrap();
        grid
    }

    fn announcer(region: &Arc<LiveRegion>) -> GridSectionAnnouncer<&'static str> {
        GridSectionAnnouncer::new(region.clone(), "en-US")
            .unwrap()
            .with_policy(true)
    }

    fn focus(selection: &SelectionManager<&'static str>, key: &'static str) {
        selection.set_focused(true);
        selection.set_focused_key(Some(key));
    }

    #[test]
    fn test_first_evaluation_never_announces() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let selection = SelectionManager::new();
        focus(&selection, "apple");

        let mut announcer = announcer(&region);
        assert_eq!(announcer.update(&grid, &selection), None);
        assert!(announcer.is_mounted());
        assert_eq!(announcer.last_section(), Some(&"fruits"));
        assert!(region.latest(Politeness::Assertive).is_none());
    }

    #[test]
    fn test_same_section_is_deduplicated() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let selection = SelectionManager::new();
        let mut announcer = announcer(&region);
        announcer.update(&grid, &selection);

        focus(&selection, "apple");
        assert!(announcer.update(&grid, &selection).is_some());
        for key in ["banana", "cherry-cell", "cherry", "apple-cell"] {
            focus(&selection, key);
            assert_eq!(announcer.update(&grid, &selection), None, "{key}");
        }
        assert_eq!(region.messages(Politeness::Assertive).len(), 1);
    }

    #[test]
    fn test_reentering_section_announces_again() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let selection = SelectionManager::new();
        focus(&selection, "apple");
        let mut announcer = announcer(&region);
        announcer.update(&grid, &selection);

        focus(&selection, "carrot");
        assert_eq!(announcer.update(&grid, &selection).as_deref(), Some("Vegetables, section, 1 row"));
        focus(&selection, "banana");
        assert_eq!(announcer.update(&grid, &selection).as_deref(), Some("Fruits, section, 3 rows"));
    }

    #[test]
    fn test_section_size_excludes_header_row() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let mut grid = TreeCollection::new();
        grid.add_root(CollectionNode::new(0u32, NodeType::Section).with_rendered("Numbers"))
            .unwrap();
        grid.add_child(&0, CollectionNode::new(1, NodeType::Header)).unwrap();
        for key in 2..12 {
            grid.add_child(&0, CollectionNode::new(key, NodeType::Row)).unwrap();
        }
        grid.add_root(CollectionNode::new(100, NodeType::Row)).unwrap();

        let mut announcer = GridSectionAnnouncer::new(region.clone(), "en-US")
            .unwrap()
            .with_policy(true);
        announcer.evaluate(&grid, Some(&100), true);
        assert_eq!(
            announcer.evaluate(&grid, Some(&5), true).as_deref(),
            Some("Numbers, section, 10 rows")
        );
    }

    #[test]
    fn test_untitled_section() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let mut announcer = announcer(&region);
        announcer.evaluate(&grid, Some(&"apple"), true);
        assert_eq!(announcer.evaluate(&grid, Some(&"pecan"), true).as_deref(), Some(", section, 2 rows"));
    }

    #[test]
    fn test_leaving_sections_updates_state_silently() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let mut announcer = announcer(&region);
        announcer.evaluate(&grid, Some(&"apple"), true);

        assert_eq!(announcer.evaluate(&grid, Some(&"loose"), true), None);
        assert_eq!(announcer.last_section(), None);
        assert_eq!(announcer.evaluate(&grid, Some(&"unknown-key"), true), None);

        // Fruits again: the intervening section-less item counts as a change.
        assert!(announcer.evaluate(&grid, Some(&"apple"), true).is_some());
    }

    #[test]
    fn test_focus_lost_skips_evaluation() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let mut announcer = announcer(&region);
        announcer.evaluate(&grid, Some(&"apple"), true);

        assert_eq!(announcer.evaluate(&grid, Some(&"carrot"), false), None);
        assert_eq!(announcer.last_section(), Some(&"fruits"));
        assert_eq!(announcer.evaluate(&grid, None, true), None);
        assert_eq!(announcer.last_section(), Some(&"fruits"));

        assert!(announcer.evaluate(&grid, Some(&"carrot"), true).is_some());
    }

    #[test]
    fn test_policy_suppresses_but_state_advances() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let enabled = Arc::new(AtomicBool::new(false));
        let enabled_clone = enabled.clone();
        let mut announcer = announcer(&region).with_policy(move || enabled_clone.load(Ordering::SeqCst));
        announcer.evaluate(&grid, Some(&"apple"), true);

        assert_eq!(announcer.evaluate(&grid, Some(&"carrot"), true), None);
        assert_eq!(announcer.last_section(), Some(&"veg"));

        enabled.store(true, Ordering::SeqCst);
        assert_eq!(announcer.evaluate(&grid, Some(&"carrot"), true), None);
        assert!(announcer.evaluate(&grid, Some(&"apple"), true).is_some());
    }

    #[test]
    fn test_localized_announcement() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let mut announcer = GridSectionAnnouncer::new(region.clone(), "de-DE")
            .unwrap()
            .with_policy(true)
            .with_politeness(Politeness::Polite);
        announcer.evaluate(&grid, Some(&"apple"), true);
        announcer.evaluate(&grid, Some(&"carrot"), true);
        assert_eq!(
            region.latest(Politeness::Polite).as_deref(),
            Some("Vegetables, Abschnitt, 1 Zeile")
        );
    }

    #[test]
    fn test_from_config() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let config = AriaConfig::from_toml_str(
            r#"
            locale = "fr-FR"

            [announcement]
            politeness = "polite"
            force = false
            "#,
        )
        .unwrap();
        let grid = grid();
        let mut announcer = GridSectionAnnouncer::from_config(&config, region.clone()).unwrap();
        announcer.evaluate(&grid, Some(&"apple"), true);
        assert_eq!(announcer.evaluate(&grid, Some(&"carrot"), true), None);
        assert_eq!(announcer.last_section(), Some(&"veg"));
    }

    #[test]
    fn test_attach_follows_focus_changes() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = Arc::new(RwLock::new(grid()));
        let selection = SelectionManager::new();
        focus(&selection, "apple");

        let id = announcer(&region).attach(grid.clone(), &selection);
        assert!(region.latest(Politeness::Assertive).is_none());

        selection.set_focused_key(Some("banana"));
        selection.set_focused_key(Some("carrot"));
        selection.set_focused(false);
        selection.set_focused_key(Some("almond"));
        selection.set_focused(true);

        assert_eq!(
            region.messages(Politeness::Assertive),
            vec!["Vegetables, section, 1 row".to_string(), ", section, 2 rows".to_string()]
        );

        assert!(selection.focus_changed.disconnect(id));
        selection.set_focused_key(Some("apple"));
        assert_eq!(region.messages(Politeness::Assertive).len(), 2);
    }

    #[test]
    fn test_mount_while_unfocused_records_no_section() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = grid();
        let selection = SelectionManager::new();
        selection.set_focused_key(Some("apple"));

        let mut announcer = announcer(&region);
        assert_eq!(announcer.update(&grid, &selection), None);
        assert_eq!(announcer.last_section(), None);

        selection.set_focused(true);
        assert_eq!(announcer.update(&grid, &selection).as_deref(), Some("Fruits, section, 3 rows"));
    }

    #[test]
    fn test_announcement_listener_may_move_focus() {
        let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
        let grid = Arc::new(RwLock::new(grid()));
        let selection = Arc::new(SelectionManager::new());
        focus(&selection, "apple");
        announcer(&region).attach(grid, &selection);

        // Jump past the first announced section once, from inside the announcement.
        let jumped = Arc::new(AtomicBool::new(false));
        region.announced.connect({
            let selection = selection.clone();
            let jumped = jumped.clone();
            move |_| {
                if !jumped.swap(true, Ordering::SeqCst) {
                    selection.set_focused_key(Some("almond"));
                }
            }
        });

        selection.set_focused_key(Some("carrot"));
        assert_eq!(selection.focused_key(), Some("almond"));
        assert_eq!(
            region.messages(Politeness::Assertive),
            vec!["Vegetables, section, 1 row".to_string(), ", section, 2 rows".to_string()]
        );
    }
}
