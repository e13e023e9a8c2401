//! Walks keyboard focus through a sectioned grid and spins a color wheel,
//! printing everything a screen reader would be told.
//!
//! Run with `RUST_LOG=horizon_aria=debug` to see the decisions behind each
//! announcement.

use std::sync::Arc;

use accesskit::NodeId;
use parking_lot::RwLock;

use horizon_aria::prelude::*;
use horizon_aria::run_deferred;

fn main() -> horizon_aria::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AriaConfig::default();
    let region = Arc::new(LiveRegion::new(NodeId(1), NodeId(2)));
    region.announced.connect(|announcement| {
        println!("[{:?}] {}", announcement.politeness, announcement.message);
    });

    let mut grid = TreeCollection::new();
    for (section, title, rows) in [
        ("inbox", "Inbox", &["mail-1", "mail-2", "mail-3"][..]),
        ("archive", "Archive", &["mail-4"][..]),
    ] {
        grid.add_root(CollectionNode::new(section, NodeType::Section).with_aria_label(title))?;
        grid.add_child(&section, CollectionNode::new(title, NodeType::Header))?;
        for row in rows {
            grid.add_child(&section, CollectionNode::new(*row, NodeType::Row))?;
        }
    }
    let grid = Arc::new(RwLock::new(grid));

    let selection = SelectionManager::new();
    selection.set_focused(true);
    selection.set_focused_key(Some("mail-1"));

    GridSectionAnnouncer::from_config(&config, region.clone())?
        .with_policy(true)
        .attach(grid, &selection);

    for key in ["mail-2", "mail-4", "mail-3"] {
        println!("focus -> {key}");
        selection.set_focused_key(Some(key));
    }

    let mut wheel = ColorWheel::from_config(&config)?.with_default_value(Color::hsl(0.0, 100.0, 50.0));
    wheel.value_changed.connect(|color| println!("hue -> {}", color.format_channel_value(ColorChannel::Hue)));
    for key in [Key::ArrowLeft, Key::PageUp, Key::ArrowRight] {
        wheel.handle_key_press(&KeyPressEvent::new(key, KeyboardModifiers::NONE));
    }
    println!("thumb swatch: {}", wheel.thumb_swatch_css());

    run_deferred();
    Ok(())
}
