//! Live announcements for assistive technologies.
//!
//! A live announcement is a message delivered to the screen reader outside
//! the normal focus flow. [`LiveRegion`] keeps the pending messages and
//! exposes them as AccessKit live-region nodes; [`DeferredAnnouncer`] holds
//! them back until the current event handler returns, so the screen reader
//! speaks them after its own focus announcement.

use std::collections::VecDeque;
use std::sync::Arc;

use accesskit::{Live, Node, NodeId, Role};
use horizon_aria_core::logging::targets;
use horizon_aria_core::{Signal, post_deferred};
use parking_lot::Mutex;

/// How urgently a message interrupts the screen reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    /// Spoken when the user is idle.
    Polite,
    /// Interrupts whatever is being spoken.
    #[default]
    Assertive,
}

impl Politeness {
    /// The AccessKit live setting for this politeness.
    pub fn to_accesskit_live(self) -> Live {
        match self {
            Politeness::Polite => Live::Polite,
            Politeness::Assertive => Live::Assertive,
        }
    }

    /// The role of a live region with this politeness.
    pub fn region_role(self) -> Role {
        match self {
            Politeness::Polite => Role::Status,
            Politeness::Assertive => Role::Alert,
        }
    }
}

/// One delivered announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// The text to speak.
    pub message: String,
    /// How urgently to speak it.
    pub politeness: Politeness,
}

/// A sink for live announcements.
pub trait LiveAnnouncer: Send + Sync {
    /// Deliver `message`. Empty messages are ignored.
    fn announce(&self, message: &str, politeness: Politeness);

    /// Remove pending messages of the given politeness.
    fn clear(&self, politeness: Politeness);
}

impl<A: LiveAnnouncer + ?Sized> LiveAnnouncer for Arc<A> {
    fn announce(&self, message: &str, politeness: Politeness) {
        (**self).announce(message, politeness);
    }

    fn clear(&self, politeness: Politeness) {
        (**self).clear(politeness);
    }
}

/// Messages kept per region.
const MAX_MESSAGES: usize = 8;

#[derive(Default)]
struct RegionMessages {
    polite: VecDeque<String>,
    assertive: VecDeque<String>,
}

impl RegionMessages {
    fn queue(&mut self, politeness: Politeness) -> &mut VecDeque<String> {
        match politeness {
            Politeness::Polite => &mut self.polite,
            Politeness::Assertive => &mut self.assertive,
        }
    }
}

/// A pair of live regions (polite and assertive) in the accessibility tree.
///
/// Each region is a single node whose label is the most recent message.
pub struct LiveRegion {
    polite_id: NodeId,
    assertive_id: NodeId,
    messages: Mutex<RegionMessages>,

    /// Emitted for every accepted announcement.
    pub announced: Signal<Announcement>,
}

impl LiveRegion {
    /// Create a live region using the given node ids.
    pub fn new(polite_id: NodeId, assertive_id: NodeId) -> Self {
        Self {
            polite_id,
            assertive_id,
            messages: Mutex::new(RegionMessages::default()),
            announced: Signal::new(),
        }
    }

    /// The node id of the region for `politeness`.
    pub fn node_id(&self, politeness: Politeness) -> NodeId {
        match politeness {
            Politeness::Polite => self.polite_id,
            Politeness::Assertive => self.assertive_id,
        }
    }

    /// Messages currently held for `politeness`, oldest first.
    pub fn messages(&self, politeness: Politeness) -> Vec<String> {
        self.messages.lock().queue(politeness).iter().cloned().collect()
    }

    /// The most recent message for `politeness`.
    pub fn latest(&self, politeness: Politeness) -> Option<String> {
        self.messages.lock().queue(politeness).back().cloned()
    }

    /// Build the region nodes for an AccessKit tree update.
    pub fn build_nodes(&self) -> Vec<(NodeId, Node)> {
        [Politeness::Polite, Politeness::Assertive]
            .into_iter()
            .map(|politeness| {
                let mut node = Node::new(politeness.region_role());
                node.set_live(politeness.to_accesskit_live());
                node.set_live_atomic();
                if let Some(message) = self.latest(politeness) {
                    node.set_label(message);
                }
                (self.node_id(politeness), node)
            })
            .collect()
    }
}

impl LiveAnnouncer for LiveRegion {
    fn announce(&self, message: &str, politeness: Politeness) {
        if message.trim().is_empty() {
            tracing::debug!(target: targets::ANNOUNCE, "ignoring empty announcement");
            return;
        }

        {
            let mut messages = self.messages.lock();
            let queue = messages.queue(politeness);
            if queue.len() == MAX_MESSAGES {
                queue.pop_front();
            }
            queue.push_back(message.to_string());
        }

        tracing::debug!(target: targets::ANNOUNCE, message, ?politeness, "announce");
        self.announced.emit(Announcement {
            message: message.to_string(),
            politeness,
        });
    }

    fn clear(&self, politeness: Politeness) {
        self.messages.lock().queue(politeness).clear();
        tracing::trace!(target: targets::ANNOUNCE, ?politeness, "cleared live region");
    }
}

/// Delays announcements to the next drain of the deferred task queue.
///
/// The wrapped announcer only sees messages once
/// [`run_deferred`](horizon_aria_core::run_deferred) runs on the posting
/// thread.
pub struct DeferredAnnouncer<A: LiveAnnouncer + 'static> {
    inner: Arc<A>,
}

impl<A: LiveAnnouncer + 'static> DeferredAnnouncer<A> {
    /// Wrap an announcer.
    pub fn new(inner: Arc<A>) -> Self {
        Self { inner }
    }

    /// The wrapped announcer.
    pub fn inner(&self) -> &Arc<A> {
        &self.inner
    }
}

impl<A: LiveAnnouncer + 'static> LiveAnnouncer for DeferredAnnouncer<A> {
    fn announce(&self, message: &str, politeness: Politeness) {
        if message.trim().is_empty() {
            return;
        }
        let inner = self.inner.clone();
        let message = message.to_string();
        let id = post_deferred(move || inner.announce(&message, politeness));
        tracing::trace!(target: targets::ANNOUNCE, task = id.as_u64(), "deferred announcement");
    }

    fn clear(&self, politeness: Politeness) {
        let inner = self.inner.clone();
        post_deferred(move || inner.clear(politeness));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_aria_core::run_deferred;

    fn region() -> LiveRegion {
        LiveRegion::new(NodeId(100), NodeId(101))
    }

    #[test]
    fn test_announce_and_clear() {
        let region = region();
        region.announce("Fruits, section, 3 rows", Politeness::Assertive);
        region.announce("Saved", Politeness::Polite);

        assert_eq!(region.latest(Politeness::Assertive).as_deref(), Some("Fruits, section, 3 rows"));
        assert_eq!(region.messages(Politeness::Polite), vec!["Saved"]);

        region.clear(Politeness::Assertive);
        assert!(region.messages(Politeness::Assertive).is_empty());
        assert_eq!(region.messages(Politeness::Polite).len(), 1);
    }

    #[test]
    fn test_empty_message_ignored() {
        let region = region();
        let count = Arc::new(Mutex::new(0));
        let count_clone = count.clone();
        region.announced.connect(move |_| *count_clone.lock() += 1);

        region.announce("", Politeness::Assertive);
        region.announce("   ", Politeness::Polite);
        assert_eq!(*count.lock(), 0);
        assert!(region.latest(Politeness::Assertive).is_none());
    }

    #[test]
    fn test_message_history_is_bounded() {
        let region = region();
        for i in 0..20 {
            region.announce(&format!("message {i}"), Politeness::Polite);
        }
        let messages = region.messages(Politeness::Polite);
        assert_eq!(messages.len(), MAX_MESSAGES);
        assert_eq!(messages.last().map(String::as_str), Some("message 19"));
    }

    #[test]
    fn test_build_nodes() {
        let region = region();
        region.announce("Hello", Politeness::Assertive);
        let nodes = region.build_nodes();

        let (polite_id, polite) = &nodes[0];
        assert_eq!(*polite_id, NodeId(100));
        assert_eq!(polite.role(), Role::Status);
        assert_eq!(polite.live(), Some(Live::Polite));
        assert!(polite.label().is_none());

        let (assertive_id, assertive) = &nodes[1];
        assert_eq!(*assertive_id, NodeId(101));
        assert_eq!(assertive.role(), Role::Alert);
        assert_eq!(assertive.live(), Some(Live::Assertive));
        assert_eq!(assertive.label(), Some("Hello"));
    }

    #[test]
    fn test_deferred_announcer_waits_for_drain() {
        let region = Arc::new(region());
        let deferred = DeferredAnnouncer::new(region.clone());

        deferred.announce("Later", Politeness::Assertive);
        deferred.announce("", Politeness::Assertive);
        assert!(region.latest(Politeness::Assertive).is_none());

        assert_eq!(run_deferred(), 1);
        assert_eq!(region.latest(Politeness::Assertive).as_deref(), Some("Later"));

        deferred.clear(Politeness::Assertive);
        run_deferred();
        assert!(region.latest(Politeness::Assertive).is_none());
    }

    #[test]
    fn test_politeness_deserializes_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            politeness: Politeness,
        }
        let wrapper: Wrapper = toml::from_str("politeness = \"polite\"").unwrap();
        assert_eq!(wrapper.politeness, Politeness::Polite);
        assert_eq!(Politeness::default(), Politeness::Assertive);
    }
}
