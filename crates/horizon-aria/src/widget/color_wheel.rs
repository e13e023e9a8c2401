//! Color wheel control.
//!
//! This module provides [`ColorWheel`], a circular hue slider. The hue ring
//! is a track of fixed thickness around the center of a square; a thumb sits
//! on the ring at the angle of the current hue.
//!
//! # Example
//!
//! ```
//! use horizon_aria::color::{Color, ColorFormat};
//! use horizon_aria::widget::{ColorWheel, PointerEvent};
//!
//! let mut wheel = ColorWheel::new("en-US")?
//!     .with_default_value(Color::hsl(0.0, 100.0, 50.0));
//!
//! wheel.value_changed.connect(|color| {
//!     println!("hue: {}", color.to_string(ColorFormat::Hsl));
//! });
//!
//! // Press on the track straight below the center: 90 degrees.
//! assert!(wheel.handle_pointer_down(&PointerEvent::mouse(80.0, 148.0)));
//! assert!(wheel.handle_pointer_up(&PointerEvent::mouse(80.0, 148.0)));
//! assert_eq!(wheel.hue(), 90.0);
//! # Ok::<(), horizon_aria::i18n::I18nError>(())
//! ```

use accesskit::{Action, ActionData, ActionRequest, NodeId};
use tracing::{debug, trace};

use horizon_aria_core::logging::{span_names, targets};
use horizon_aria_core::{PerfSpan, Signal};

use crate::accessibility::{Accessible, AccessibleRole};
use crate::color::{Color, ColorChannel, ColorFormat};
use crate::config::AriaConfig;
use crate::i18n::{I18nError, LocalizedStringFormatter, SystemLocale};

use super::events::{Key, KeyPressEvent, PointerEvent, PointerId, PointerTarget};
use super::gesture::GestureTracker;
use super::geometry::{Point, Rect};

/// Catalog namespace holding channel names.
const NAMESPACE: &str = "color";

/// Default edge length of the wheel in logical pixels.
pub const DEFAULT_SIZE: f32 = 160.0;

/// Default thickness of the hue ring in logical pixels.
pub const DEFAULT_TRACK_THICKNESS: f32 = 24.0;

/// Hue increment of one arrow key press.
const STEP: f64 = 1.0;

/// A circular slider that edits the hue of a [`Color`].
///
/// Saturation, lightness and alpha of the value are never touched by the
/// wheel. Pointer gestures are tracked per [`PointerId`]; each one started
/// emits `value_change_ended` exactly once when it is released.
///
/// In the default (uncontrolled) mode the wheel stores every committed
/// value. After [`with_value`](Self::with_value) it is controlled: it only
/// reports new values and the owner feeds them back with
/// [`set_value`](Self::set_value).
///
/// # Signals
///
/// - `value_changed(Color)`: the hue changed
/// - `value_change_ended(Color)`: a key step or pointer gesture finished
/// - `focus_requested(())`: a pointer press asks for keyboard focus
pub struct ColorWheel {
    value: Color,
    controlled: bool,
    size: f32,
    track_thickness: f32,
    page_step: f64,
    disabled: bool,
    label: Option<String>,
    labelled_by: Vec<NodeId>,
    formatter: LocalizedStringFormatter,
    gestures: GestureTracker<Color>,

    /// Signal emitted when the hue changes.
    pub value_changed: Signal<Color>,
    /// Signal emitted when an interaction finishes, with the final value.
    pub value_change_ended: Signal<Color>,
    /// Signal emitted when a press should move keyboard focus to the wheel.
    pub focus_requested: Signal<()>,
}

impl ColorWheel {
    /// Create a wheel whose accessible name is localized for `locale`.
    pub fn new(locale: &str) -> Result<Self, I18nError> {
        Ok(Self::from_formatter(LocalizedStringFormatter::new(NAMESPACE, locale)?))
    }

    /// Create a wheel localized for the system locale.
    pub fn for_system_locale() -> Result<Self, I18nError> {
        Ok(Self::from_formatter(LocalizedStringFormatter::for_system_locale(NAMESPACE)?))
    }

    /// Create a wheel from user configuration.
    pub fn from_config(config: &AriaConfig) -> Result<Self, I18nError> {
        let locale = config.locale.clone().unwrap_or_else(SystemLocale::current);
        Ok(Self::new(&locale)?
            .with_track_thickness(config.color_wheel.track_thickness)
            .with_page_step(config.color_wheel.page_step))
    }

    fn from_formatter(formatter: LocalizedStringFormatter) -> Self {
        Self {
            value: Color::hsl(0.0, 100.0, 50.0),
            controlled: false,
            size: DEFAULT_SIZE,
            track_thickness: DEFAULT_TRACK_THICKNESS,
            page_step: ColorChannel::Hue.range().page_step,
            disabled: false,
            label: None,
            labelled_by: Vec::new(),
            formatter,
            gestures: GestureTracker::new(),
            value_changed: Signal::new(),
            value_change_ended: Signal::new(),
            focus_requested: Signal::new(),
        }
    }

    // =========================================================================
    // Value
    // =========================================================================

    /// Get the current value.
    pub fn value(&self) -> Color {
        self.value
    }

    /// Get the hue of the current value in degrees.
    pub fn hue(&self) -> f64 {
        self.value.channel_value(ColorChannel::Hue)
    }

    /// Replace the value without emitting any signal.
    pub fn set_value(&mut self, value: Color) {
        self.value = value;
    }

    /// Set the initial value of an uncontrolled wheel.
    pub fn with_default_value(mut self, value: Color) -> Self {
        self.value = value;
        self.controlled = false;
        self
    }

    /// Make the wheel controlled, starting at `value`.
    pub fn with_value(mut self, value: Color) -> Self {
        self.value = value;
        self.controlled = true;
        self
    }

    /// Whether the owner drives the value through [`set_value`](Self::set_value).
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// The color painted inside the thumb: the current hue at full
    /// saturation, half lightness and full opacity.
    pub fn thumb_swatch_color(&self) -> Color {
        Color::hsla(self.hue(), 100.0, 50.0, 1.0)
    }

    /// [`thumb_swatch_color`](Self::thumb_swatch_color) as a CSS string.
    pub fn thumb_swatch_css(&self) -> String {
        self.thumb_swatch_color().to_string(ColorFormat::Css)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the edge length of the wheel.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Set the edge length using builder pattern.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size.max(0.0);
        self
    }

    /// Get the ring thickness.
    pub fn track_thickness(&self) -> f32 {
        self.track_thickness
    }

    /// Set the ring thickness using builder pattern.
    pub fn with_track_thickness(mut self, thickness: f32) -> Self {
        self.track_thickness = thickness.max(0.0);
        self
    }

    /// Get the page step in degrees.
    pub fn page_step(&self) -> f64 {
        self.page_step
    }

    /// Set the page step using builder pattern.
    pub fn with_page_step(mut self, step: f64) -> Self {
        self.page_step = step.max(STEP);
        self
    }

    /// Set an explicit accessible label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Name the wheel by other nodes using builder pattern.
    pub fn with_labelled_by(mut self, ids: Vec<NodeId>) -> Self {
        self.labelled_by = ids;
        self
    }

    /// Check if the wheel is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the wheel.
    ///
    /// Disabling ends every gesture in progress.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && !self.disabled {
            for gesture in self.gestures.drain() {
                self.value_change_ended.emit(gesture.final_value());
            }
        }
        self.disabled = disabled;
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Check if any pointer is dragging.
    pub fn is_dragging(&self) -> bool {
        self.gestures.active_count() > 0
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// The wheel's bounds in local coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::square(self.size)
    }

    pub fn outer_radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn inner_radius(&self) -> f32 {
        (self.outer_radius() - self.track_thickness).max(0.0)
    }

    /// Distance of the thumb center from the wheel center.
    pub fn thumb_radius(&self) -> f32 {
        (self.outer_radius() + self.inner_radius()) / 2.0
    }

    /// Thumb center for the current hue.
    pub fn thumb_position(&self) -> Point {
        self.bounds().center().offset_polar(self.thumb_radius(), self.hue())
    }

    /// Hue at `point`, measured clockwise from the positive x axis.
    pub fn hue_at(&self, point: Point) -> f64 {
        point.angle_around(self.bounds().center()).rem_euclid(360.0)
    }

    /// Check if `point` lies on the hue ring.
    pub fn is_on_track(&self, point: Point) -> bool {
        let distance = point.distance_to(self.bounds().center());
        distance >= self.inner_radius() && distance <= self.outer_radius()
    }

    // =========================================================================
    // Event Handlers
    // =========================================================================

    /// Snap to the step and wrap into `[0, 360)`, then commit if different.
    fn commit_hue(&mut self, hue: f64) -> Option<Color> {
        let hue = (hue / STEP).round() * STEP;
        let hue = hue.rem_euclid(360.0);
        if hue == self.hue() {
            return None;
        }

        let next = self.value.with_channel_value(ColorChannel::Hue, hue);
        trace!(target: targets::GESTURE, hue, controlled = self.controlled, "hue changed");
        if !self.controlled {
            self.value = next;
        }
        self.value_changed.emit(next);
        Some(next)
    }

    /// Step the hue by `delta` degrees as one complete interaction.
    fn step(&mut self, delta: f64) {
        if let Some(next) = self.commit_hue(self.hue() + delta) {
            self.value_change_ended.emit(next);
        }
    }

    /// Handle a key press. Returns whether the key was consumed.
    ///
    /// Arrows move by one degree, or by the page step while Shift is held;
    /// Page Up/Down move by the page step. Right and Up increase the hue.
    /// Presses with Ctrl, Alt or Meta held are left to the host's shortcuts.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if self.disabled || event.modifiers.has_command() {
            return false;
        }

        let arrow_step = if event.modifiers.shift {
            self.page_step
        } else {
            STEP
        };
        let delta = match event.key {
            Key::ArrowRight | Key::ArrowUp => arrow_step,
            Key::ArrowLeft | Key::ArrowDown => -arrow_step,
            Key::PageUp => self.page_step,
            Key::PageDown => -self.page_step,
            _ => return false,
        };

        self.step(delta);
        true
    }

    /// Handle a press. Returns whether a gesture started.
    ///
    /// A press on the track jumps to the hue under the pointer; a press on
    /// the thumb only grabs it. Both request focus.
    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> bool {
        if self.disabled {
            return false;
        }
        let _span = PerfSpan::new(span_names::WHEEL_GESTURE);

        if event.target == PointerTarget::Track && !self.is_on_track(event.position) {
            return false;
        }

        if let Some(previous) = self.gestures.begin(event.id, event.position, self.value) {
            self.value_change_ended.emit(previous.final_value());
        }
        self.focus_requested.emit(());

        if event.target == PointerTarget::Track {
            let hue = self.hue_at(event.position);
            if let Some(next) = self.commit_hue(hue) {
                self.gestures.commit(event.id, next);
            }
        }
        true
    }

    /// Handle a pointer move. Returns whether the pointer was dragging.
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) -> bool {
        if self.disabled {
            return false;
        }
        if self.gestures.update(event.id, event.position).is_none() {
            debug!(target: targets::GESTURE, pointer = %event.id, "move without press ignored");
            return false;
        }
        let _span = PerfSpan::new(span_names::WHEEL_GESTURE);

        let hue = self.hue_at(event.position);
        if let Some(next) = self.commit_hue(hue) {
            self.gestures.commit(event.id, next);
        }
        true
    }

    /// Handle a release. Returns whether a gesture ended.
    pub fn handle_pointer_up(&mut self, event: &PointerEvent) -> bool {
        if self.disabled {
            return false;
        }
        let Some(gesture) = self.gestures.end(event.id) else {
            debug!(target: targets::GESTURE, pointer = %event.id, "release without press ignored");
            return false;
        };

        self.value_change_ended.emit(gesture.final_value());
        true
    }

    /// Check if `id` is dragging.
    pub fn is_pointer_active(&self, id: PointerId) -> bool {
        self.gestures.is_active(id)
    }

    /// Handle an assistive technology action. Returns whether it was
    /// performed.
    pub fn handle_action(&mut self, request: &ActionRequest) -> bool {
        if self.disabled {
            return false;
        }
        match request.action {
            Action::Focus => {
                self.focus_requested.emit(());
                true
            }
            Action::Increment => {
                self.step(STEP);
                true
            }
            Action::Decrement => {
                self.step(-STEP);
                true
            }
            Action::SetValue => {
                let hue = match &request.data {
                    Some(ActionData::NumericValue(value)) => Some(*value),
                    Some(ActionData::Value(text)) => text.trim().trim_end_matches('°').parse().ok(),
                    _ => None,
                };
                match hue.filter(|h: &f64| h.is_finite()) {
                    Some(hue) => {
                        if let Some(next) = self.commit_hue(hue) {
                            self.value_change_ended.emit(next);
                        }
                        true
                    }
                    None => {
                        debug!(target: targets::GESTURE, "set value action without a number");
                        false
                    }
                }
            }
            _ => false,
        }
    }
}

impl Accessible for ColorWheel {
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn accessible_name(&self) -> Option<String> {
        if let Some(label) = &self.label {
            return Some(label.clone());
        }
        if !self.labelled_by.is_empty() {
            return None;
        }
        ColorChannel::Hue.localized_name(&self.formatter).ok()
    }

    fn accessible_value(&self) -> Option<String> {
        Some(self.value.format_channel_value(ColorChannel::Hue))
    }

    fn accessible_numeric_value(&self) -> Option<f64> {
        Some(self.hue())
    }

    fn accessible_min_value(&self) -> Option<f64> {
        Some(ColorChannel::Hue.range().min)
    }

    fn accessible_max_value(&self) -> Option<f64> {
        Some(ColorChannel::Hue.range().max)
    }

    fn accessible_value_step(&self) -> Option<f64> {
        Some(STEP)
    }

    fn is_accessible_disabled(&self) -> bool {
        self.disabled
    }

    fn accessible_actions(&self) -> Vec<Action> {
        if self.disabled {
            Vec::new()
        } else {
            vec![Action::Focus, Action::Increment, Action::Decrement, Action::SetValue]
        }
    }

    fn accessible_labelled_by(&self) -> Vec<NodeId> {
        self.labelled_by.clone()
    }
}

static_assertions::assert_impl_all!(ColorWheel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::events::KeyboardModifiers;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    fn wheel() -> ColorWheel {
        ColorWheel::new("en-US").unwrap()
    }

    fn counter(signal: &Signal<Color>) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();
        signal.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    fn key(key: Key) -> KeyPressEvent {
        KeyPressEvent::new(key, KeyboardModifiers::NONE)
    }

    #[test]
    fn test_geometry() {
        let wheel = wheel();
        assert_eq!(wheel.outer_radius(), 80.0);
        assert_eq!(wheel.inner_radius(), 56.0);
        assert_eq!(wheel.thumb_radius(), 68.0);

        let thumb = wheel.thumb_position();
        assert!((thumb.x - 148.0).abs() < 1e-3);
        assert!((thumb.y - 80.0).abs() < 1e-3);

        assert!(wheel.is_on_track(Point::new(80.0, 4.0)));
        assert!(!wheel.is_on_track(Point::new(80.0, 80.0)));
        assert!(!wheel.is_on_track(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_hue_at() {
        let wheel = wheel();
        assert_eq!(wheel.hue_at(Point::new(148.0, 80.0)), 0.0);
        assert!((wheel.hue_at(Point::new(80.0, 148.0)) - 90.0).abs() < 1e-9);
        assert!((wheel.hue_at(Point::new(12.0, 80.0)) - 180.0).abs() < 1e-9);
        assert!((wheel.hue_at(Point::new(80.0, 12.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_keyboard_wraps() {
        let mut wheel = wheel();
        let changed = counter(&wheel.value_changed);
        let ended = counter(&wheel.value_change_ended);

        assert!(wheel.handle_key_press(&key(Key::ArrowLeft)));
        assert_eq!(wheel.hue(), 359.0);
        assert!(wheel.handle_key_press(&key(Key::ArrowUp)));
        assert_eq!(wheel.hue(), 0.0);
        assert!(wheel.handle_key_press(&key(Key::PageUp)));
        assert_eq!(wheel.hue(), 15.0);
        assert!(wheel.handle_key_press(&KeyPressEvent::new(Key::ArrowDown, KeyboardModifiers::SHIFT)));
        assert_eq!(wheel.hue(), 0.0);

        assert_eq!(changed.load(Ordering::SeqCst), 4);
        assert_eq!(ended.load(Ordering::SeqCst), 4);
        assert!(!wheel.handle_key_press(&key(Key::Enter)));

        let ctrl = KeyboardModifiers::NONE.with_control(true);
        assert!(!wheel.handle_key_press(&KeyPressEvent::new(Key::ArrowRight, ctrl)));
        assert_eq!(wheel.hue(), 0.0);
    }

    #[test]
    fn test_custom_page_step() {
        let mut wheel = wheel().with_page_step(45.0);
        wheel.handle_key_press(&key(Key::PageDown));
        assert_eq!(wheel.hue(), 315.0);
    }

    #[test]
    fn test_controlled_wheel_reports_without_storing() {
        let mut wheel = wheel().with_value(Color::hsl(10.0, 50.0, 50.0));
        let last = Arc::new(parking_lot::Mutex::new(None));
        let last_clone = last.clone();
        wheel.value_changed.connect(move |color| {
            *last_clone.lock() = Some(*color);
        });

        wheel.handle_key_press(&key(Key::ArrowRight));
        assert_eq!(wheel.hue(), 10.0);
        let reported = last.lock().take().unwrap();
        assert_eq!(reported.channel_value(ColorChannel::Hue), 11.0);

        wheel.set_value(reported);
        assert_eq!(wheel.hue(), 11.0);
    }

    #[test]
    fn test_thumb_press_only_focuses() {
        let mut wheel = wheel();
        let changed = counter(&wheel.value_changed);
        let focus = Arc::new(AtomicUsize::new(0));
        let focus_clone = focus.clone();
        wheel.focus_requested.connect(move |_| {
            focus_clone.fetch_add(1, Ordering::SeqCst);
        });

        let press = PointerEvent::mouse(148.0, 80.0).with_target(PointerTarget::Thumb);
        assert!(wheel.handle_pointer_down(&press));
        assert_eq!(focus.load(Ordering::SeqCst), 1);
        assert_eq!(changed.load(Ordering::SeqCst), 0);
        assert!(wheel.is_dragging());
    }

    #[test]
    fn test_track_press_outside_ring_is_ignored() {
        let mut wheel = wheel();
        assert!(!wheel.handle_pointer_down(&PointerEvent::mouse(80.0, 80.0)));
        assert!(!wheel.is_dragging());
    }

    #[test]
    fn test_unmatched_move_and_release() {
        let mut wheel = wheel();
        let ended = counter(&wheel.value_change_ended);
        assert!(!wheel.handle_pointer_move(&PointerEvent::touch(4, 80.0, 148.0)));
        assert!(!wheel.handle_pointer_up(&PointerEvent::touch(4, 80.0, 148.0)));
        assert_eq!(ended.load(Ordering::SeqCst), 0);
        assert_eq!(wheel.hue(), 0.0);
    }

    #[test]
    fn test_disabling_ends_gestures() {
        let mut wheel = wheel();
        let ended = counter(&wheel.value_change_ended);
        wheel.handle_pointer_down(&PointerEvent::touch(1, 80.0, 148.0));
        wheel.set_disabled(true);
        assert_eq!(ended.load(Ordering::SeqCst), 1);
        assert!(!wheel.is_dragging());
        assert!(!wheel.handle_pointer_up(&PointerEvent::touch(1, 80.0, 148.0)));
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disabling_reports_each_gesture_value() {
        let mut wheel = wheel();
        let hues = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = hues.clone();
        wheel.value_change_ended.connect(move |color| sink.lock().push(color.channel_value(ColorChannel::Hue)));

        // The thumb grab never commits; the track press moves the value to 90°.
        wheel.handle_pointer_down(&PointerEvent::touch(1, 148.0, 80.0).with_target(PointerTarget::Thumb));
        wheel.handle_pointer_down(&PointerEvent::touch(2, 80.0, 148.0));
        assert_eq!(wheel.hue(), 90.0);

        wheel.set_disabled(true);
        let mut ended = hues.lock().clone();
        ended.sort_by(f64::total_cmp);
        assert_eq!(ended, vec![0.0, 90.0]);
    }

    #[test]
    fn test_accessible_node() {
        let wheel = wheel();
        assert_eq!(wheel.accessible_name().as_deref(), Some("Hue"));
        assert_eq!(wheel.accessible_value().as_deref(), Some("0°"));
        assert_eq!(wheel.accessible_min_value(), Some(0.0));
        assert_eq!(wheel.accessible_max_value(), Some(360.0));
        assert_eq!(wheel.accessible_value_step(), Some(1.0));

        let node = wheel.build_accessible_node(wheel.bounds(), &[]);
        assert_eq!(node.role(), accesskit::Role::Slider);
        assert!(node.supports_action(Action::Focus));
        assert!(!node.is_disabled());

        let disabled = ColorWheel::new("en-US").unwrap().with_disabled(true);
        let node = disabled.build_accessible_node(disabled.bounds(), &[]);
        assert!(node.is_disabled());
        assert!(!node.supports_action(Action::Focus));
    }

    #[test]
    fn test_labels() {
        let wheel = ColorWheel::new("de-DE").unwrap();
        assert_eq!(wheel.accessible_name().as_deref(), Some("Farbton"));

        let wheel = ColorWheel::new("en-US").unwrap().with_label("Color hue");
        assert_eq!(wheel.accessible_name().as_deref(), Some("Color hue"));

        let wheel = ColorWheel::new("en-US").unwrap().with_labelled_by(vec![NodeId(3)]);
        assert_eq!(wheel.accessible_name(), None);
        assert_eq!(wheel.accessible_labelled_by(), vec![NodeId(3)]);
    }

    #[test]
    fn test_actions() {
        let mut wheel = wheel();
        let request = |action, data| ActionRequest {
            action,
            target: NodeId(1),
            data,
        };

        assert!(wheel.handle_action(&request(Action::Decrement, None)));
        assert_eq!(wheel.hue(), 359.0);
        assert!(wheel.handle_action(&request(Action::SetValue, Some(ActionData::NumericValue(200.0)))));
        assert_eq!(wheel.hue(), 200.0);
        assert!(wheel.handle_action(&request(Action::SetValue, Some(ActionData::Value("45°".into())))));
        assert_eq!(wheel.hue(), 45.0);
        assert!(!wheel.handle_action(&request(Action::SetValue, None)));
        assert!(!wheel.handle_action(&request(Action::Click, None)));

        wheel.set_disabled(true);
        assert!(!wheel.handle_action(&request(Action::Increment, None)));
        assert_eq!(wheel.hue(), 45.0);
    }

    #[test]
    fn test_from_config() {
        let config = AriaConfig::from_toml_str(
            r#"
            locale = "fr-FR"

            [color_wheel]
            track_thickness = 30.0
            page_step = 30.0
            "#,
        )
        .unwrap();
        let wheel = ColorWheel::from_config(&config).unwrap();
        assert_eq!(wheel.track_thickness(), 30.0);
        assert_eq!(wheel.page_step(), 30.0);
        assert_eq!(wheel.accessible_name().as_deref(), Some("Teinte"));
    }
}
