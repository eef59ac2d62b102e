//! Ruler view
//!
//! A sectioned tick-mark ruler backed by a scrolling list host. The widget
//! owns the scale engine state and the frame-ticked scheduler; the host owns
//! the render loop and row recycling, queries the datasource methods here for
//! section layout and tick appearance, and feeds gesture events back in.
//!
//! Setup is deferred: construction schedules layout a short interval later,
//! and a nonzero seeded selection schedules one more task that issues the
//! initial programmatic scroll. Both tasks are cancellable via `teardown`.

use rulerkit_animation::{AnimationId, AnimationScheduler, Easing, ScrollAnimation, TaskId};
use rulerkit_core::events::{event_types, Event, EventData};
use rulerkit_paint::{Color, Rect, Transform2D};
use rulerkit_scale::{
    Orientation, RangeModel, ScaleDelegate, ScaleError, SelectionController, SnapPolicy, Tick,
    ValueMapper,
};

use crate::config::RulerConfig;
use crate::pointer::ScalePointer;
use crate::widget::{Widget, WidgetId, WidgetRegistry};

/// Delay before the deferred layout pass runs
const SETUP_DELAY: f32 = 0.1;
/// Additional delay before the initial programmatic scroll
const INITIAL_SCROLL_DELAY: f32 = 0.3;
/// Duration of a programmatic scroll animation
const SCROLL_DURATION: f32 = 0.25;
/// Height of the pointer overlay strip
const POINTER_HEIGHT: f32 = 60.0;
/// Height of a section footer label row
const FOOTER_HEIGHT: f32 = 32.0;
/// Minimum width of the tick strip
const MIN_STRIP_WIDTH: f32 = 60.0;

/// Appearance of one tick row, for the list host's row renderer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Mark frame relative to the row cell (right-aligned in the strip)
    pub frame: Rect,
    /// True for the longer, thicker mark on every 5th row
    pub major: bool,
    pub color: Color,
}

/// Layout produced by the deferred setup pass
#[derive(Clone, Debug)]
struct Layout {
    /// Axis-adjusted content frame (width/height swapped when horizontal)
    content: Rect,
    /// The right-aligned strip the tick list occupies
    list_frame: Rect,
    pointer: ScalePointer,
}

/// A scrollable tick-mark ruler that snaps to discrete values
pub struct RulerView {
    id: WidgetId,
    config: RulerConfig,
    model: RangeModel,
    controller: SelectionController,
    scheduler: AnimationScheduler,
    frame: Rect,
    layout: Option<Layout>,
    /// Current content offset along the scroll axis
    offset: f32,
    scroll_anim: Option<AnimationId>,
    setup_task: Option<TaskId>,
    initial_scroll_task: Option<TaskId>,
    /// Corrected deceleration target from the last drag release
    deceleration_target: Option<f32>,
    requests_issued: usize,
}

impl std::fmt::Debug for RulerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RulerView")
            .field("id", &self.id)
            .field("frame", &self.frame)
            .field("offset", &self.offset)
            .field("requests_issued", &self.requests_issued)
            .finish_non_exhaustive()
    }
}

impl RulerView {
    /// Validate the configuration and build the widget. Layout itself runs on
    /// the deferred setup task; nothing is rendered before then.
    pub fn new(
        registry: &mut WidgetRegistry,
        frame: Rect,
        config: RulerConfig,
        delegate: Box<dyn ScaleDelegate>,
    ) -> Result<Self, ScaleError> {
        let model = RangeModel::new(config.range, config.interval)?;
        let snap = SnapPolicy::new(config.row_height)?;
        let mapper = ValueMapper::sectioned(model, config.orientation);
        let controller = SelectionController::new(mapper, snap, config.label.clone(), delegate);

        let mut scheduler = AnimationScheduler::new();
        let setup_task = scheduler.schedule_once(SETUP_DELAY);

        tracing::debug!(
            label = %config.label,
            sections = model.section_count(),
            selection = controller.selection(),
            "ruler created"
        );

        Ok(Self {
            id: registry.register("ruler"),
            config,
            model,
            controller,
            scheduler,
            frame,
            layout: None,
            offset: 0.0,
            scroll_anim: None,
            setup_task: Some(setup_task),
            initial_scroll_task: None,
            deceleration_target: None,
            requests_issued: 0,
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Whether the deferred setup pass has run
    pub fn is_ready(&self) -> bool {
        self.layout.is_some()
    }

    fn finish_setup(&mut self) {
        let content = match self.config.orientation {
            Orientation::Horizontal => {
                // The host rotates the widget; lay out against the swapped frame
                Rect::new(self.frame.x, self.frame.y, self.frame.height, self.frame.width)
            }
            Orientation::Vertical => self.frame,
        };

        let strip_width = (content.width / 6.0).max(MIN_STRIP_WIDTH);
        let list_frame = Rect::new(content.width - strip_width, 0.0, strip_width, content.height);

        let pointer_frame = Rect::new(
            0.0,
            content.height / 2.0 - POINTER_HEIGHT / 2.0,
            content.width,
            POINTER_HEIGHT,
        );
        let mut pointer = ScalePointer::new(
            pointer_frame,
            self.config.selection_color,
            self.config.label.clone(),
            self.config.font_size,
        );
        pointer.set_value(self.controller.selection());

        self.layout = Some(Layout {
            content,
            list_frame,
            pointer,
        });

        if self.controller.selection() != 0 {
            self.initial_scroll_task = Some(self.scheduler.schedule_once(INITIAL_SCROLL_DELAY));
        }
        tracing::debug!(?list_frame, "ruler layout ready");
    }

    fn sync_pointer(&mut self) {
        let selection = self.controller.selection();
        if let Some(layout) = self.layout.as_mut() {
            layout.pointer.set_value(selection);
        }
    }

    // =========================================================================
    // List host datasource
    // =========================================================================

    pub fn section_count(&self) -> i32 {
        self.model.section_count()
    }

    pub fn rows_in_section(&self) -> i32 {
        self.model.rows_per_section()
    }

    pub fn row_height(&self) -> f32 {
        self.config.row_height
    }

    pub fn footer_height(&self) -> f32 {
        FOOTER_HEIGHT
    }

    /// Section footer label: the last value inside the section plus the unit
    pub fn footer_text(&self, section: i32) -> String {
        let value = (section + 1) * self.model.interval() + self.config.range.location - 1;
        format!("{:2}{}", value, self.config.label)
    }

    /// Appearance of the tick mark for a row. `None` before setup has run.
    pub fn tick_mark(&self, tick: Tick) -> Option<TickMark> {
        let layout = self.layout.as_ref()?;
        let strip = layout.list_frame.width;
        let major = tick.row % 5 == 0;
        let (width, thickness) = if major {
            (strip / 1.5, 1.5)
        } else {
            (strip / 2.0, 0.75)
        };
        Some(TickMark {
            frame: Rect::new(strip - width, 0.0, width, thickness),
            major,
            color: self.config.tick_color,
        })
    }

    /// Spacer above and below the ticks so the terminal values can reach the
    /// pointer line: half the scroll viewport
    pub fn edge_padding(&self) -> Option<f32> {
        self.layout.as_ref().map(|l| l.content.height / 2.0)
    }

    /// Strip the tick list occupies, right-aligned in the content frame
    pub fn list_frame(&self) -> Option<Rect> {
        self.layout.as_ref().map(|l| l.list_frame)
    }

    /// Mirror the list host applies when the ruler lies on its side
    pub fn list_transform(&self) -> Option<Transform2D> {
        self.controller
            .mapper()
            .axis_inverted()
            .then(Transform2D::flip_y)
    }

    pub fn pointer(&self) -> Option<&ScalePointer> {
        self.layout.as_ref().map(|l| &l.pointer)
    }

    pub fn deceleration_rate(&self) -> f32 {
        self.config.deceleration_rate
    }

    /// Curve the host should decelerate with after a drag release
    pub fn deceleration_easing(&self) -> Easing {
        Easing::Decelerate(self.config.deceleration_rate)
    }

    // =========================================================================
    // Gesture event sinks
    // =========================================================================

    /// Finger touched down on the scale
    pub fn on_drag_begin(&mut self) {
        self.controller.on_drag_begin();
    }

    /// A scroll frame from the host (during a drag or a deceleration). The
    /// pointer label tracks the raw, unsnapped offset.
    pub fn on_scroll(&mut self, offset: f32) {
        self.offset = offset;
        self.controller.on_scroll_frame(offset);
        self.sync_pointer();
    }

    /// The drag is ending with the host's deceleration headed for
    /// `proposed_target`; returns the tick-aligned target to decelerate to
    pub fn on_drag_will_end(&mut self, proposed_target: f32) -> f32 {
        let corrected = self.controller.on_drag_will_end(proposed_target);
        self.deceleration_target = Some(corrected);
        corrected
    }

    /// Corrected target from the last drag release, if a deceleration is
    /// outstanding
    pub fn deceleration_target(&self) -> Option<f32> {
        self.deceleration_target
    }

    /// The deceleration came to rest. Fires the delegate exactly once per
    /// user gesture.
    pub fn on_deceleration_end(&mut self, offset: f32) {
        self.deceleration_target = None;
        if let Some(value) = self.controller.on_settled(offset) {
            self.offset = self.controller.snap_policy().snap(offset);
            tracing::debug!(value, "ruler settled");
        }
        self.sync_pointer();
    }

    // =========================================================================
    // Programmatic navigation
    // =========================================================================

    /// Animate to `value`, issuing exactly one scroll-animation request.
    /// Does not notify the delegate. Out-of-domain values are errors.
    pub fn scroll_to(&mut self, value: i32) -> Result<(), ScaleError> {
        let request = self.controller.scroll_target(value)?;
        if let Some(previous) = self.scroll_anim.take() {
            self.scheduler.remove_animation(previous);
        }
        let animation =
            ScrollAnimation::new(self.offset, request.offset, SCROLL_DURATION, Easing::EaseInOut);
        self.scroll_anim = Some(self.scheduler.add_animation(animation));
        self.requests_issued += 1;
        tracing::debug!(value, target = request.offset, "programmatic scroll");
        Ok(())
    }

    /// Boundary policy for out-of-domain targets: clamp to the nearest valid
    /// value, then scroll. Returns the value actually used.
    pub fn scroll_to_clamped(&mut self, value: i32) -> i32 {
        let clamped = self.controller.mapper().clamp(value);
        if clamped != value {
            tracing::warn!(value, clamped, "scroll target clamped to domain");
        }
        // Clamped values are always in domain
        let _ = self.scroll_to(clamped);
        clamped
    }

    /// Number of scroll-animation requests issued so far
    pub fn scroll_requests_issued(&self) -> usize {
        self.requests_issued
    }

    /// Whether a programmatic scroll animation is in flight
    pub fn has_active_scroll_animation(&self) -> bool {
        self.scroll_anim.is_some()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn selected_value(&self) -> i32 {
        self.controller.selection()
    }

    pub fn gesture_state(&self) -> rulerkit_scale::GestureState {
        self.controller.state()
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }
}

impl Widget for RulerView {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn handle_event(&mut self, event: &Event) {
        match (event.event_type, &event.data) {
            (event_types::POINTER_DOWN, _) => self.on_drag_begin(),
            (event_types::DRAG, EventData::Scroll { offset }) => self.on_scroll(*offset),
            (event_types::DRAG_END, EventData::Scroll { offset }) => {
                self.on_drag_will_end(*offset);
            }
            (event_types::SETTLED, EventData::Scroll { offset }) => {
                self.on_deceleration_end(*offset);
            }
            (event_types::UNMOUNT, _) => self.teardown(),
            _ => {}
        }
    }

    fn update(&mut self, dt: f32) {
        self.scheduler.tick(dt);

        if let Some(task) = self.setup_task {
            if self.scheduler.take_fired(task) {
                self.setup_task = None;
                self.finish_setup();
            }
        }

        if let Some(task) = self.initial_scroll_task {
            if self.scheduler.take_fired(task) {
                self.initial_scroll_task = None;
                let seed = self.controller.selection();
                let _ = self.scroll_to(seed);
            }
        }

        if let Some(anim_id) = self.scroll_anim {
            if let Some(animation) = self.scheduler.get_animation(anim_id) {
                let value = animation.value();
                let finished = animation.is_finished();
                self.offset = value;
                self.controller.on_programmatic_arrival(value);
                self.sync_pointer();
                if finished {
                    self.scheduler.remove_animation(anim_id);
                    self.scroll_anim = None;
                }
            } else {
                self.scroll_anim = None;
            }
        }
    }

    fn teardown(&mut self) {
        if let Some(task) = self.setup_task.take() {
            self.scheduler.cancel(task);
        }
        if let Some(task) = self.initial_scroll_task.take() {
            self.scheduler.cancel(task);
        }
        if let Some(anim) = self.scroll_anim.take() {
            self.scheduler.remove_animation(anim);
        }
        tracing::debug!("ruler torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct SeedDelegate {
        seed: i32,
        settled: Arc<Mutex<Vec<i32>>>,
    }

    impl ScaleDelegate for SeedDelegate {
        fn initial_value(&self, _label: &str) -> i32 {
            self.seed
        }

        fn on_value_settled(&mut self, _label: &str, value: i32) {
            self.settled.lock().unwrap().push(value);
        }
    }

    fn ruler_with_seed(seed: i32) -> (RulerView, Arc<Mutex<Vec<i32>>>) {
        let settled = Arc::new(Mutex::new(Vec::new()));
        let delegate = SeedDelegate {
            seed,
            settled: settled.clone(),
        };
        let mut registry = WidgetRegistry::new();
        let ruler = RulerView::new(
            &mut registry,
            Rect::new(0.0, 0.0, 120.0, 480.0),
            RulerConfig::default(),
            Box::new(delegate),
        )
        .unwrap();
        (ruler, settled)
    }

    #[test]
    fn rejects_invalid_configuration_before_layout() {
        let mut registry = WidgetRegistry::new();
        let config = RulerConfig::default().interval(0);
        let err = RulerView::new(
            &mut registry,
            Rect::new(0.0, 0.0, 120.0, 480.0),
            config,
            Box::new(SeedDelegate {
                seed: 0,
                settled: Arc::new(Mutex::new(Vec::new())),
            }),
        )
        .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn setup_is_deferred_until_the_task_fires() {
        let (mut ruler, _) = ruler_with_seed(0);
        assert!(!ruler.is_ready());

        ruler.update(0.05);
        assert!(!ruler.is_ready());

        ruler.update(0.06);
        assert!(ruler.is_ready());
        assert!(ruler.pointer().is_some());
    }

    #[test]
    fn teardown_cancels_deferred_setup() {
        let (mut ruler, _) = ruler_with_seed(62);
        ruler.teardown();
        ruler.update(1.0);
        assert!(!ruler.is_ready());
        assert_eq!(ruler.scroll_requests_issued(), 0);
    }

    #[test]
    fn nonzero_seed_triggers_one_initial_scroll() {
        let (mut ruler, settled) = ruler_with_seed(62);
        ruler.update(0.11);
        assert!(ruler.is_ready());
        assert_eq!(ruler.scroll_requests_issued(), 0);

        ruler.update(0.31);
        assert_eq!(ruler.scroll_requests_issued(), 1);
        assert!(ruler.has_active_scroll_animation());

        // Run the animation out; selection follows, delegate stays silent
        for _ in 0..30 {
            ruler.update(1.0 / 60.0);
        }
        assert!(!ruler.has_active_scroll_animation());
        assert_eq!(ruler.selected_value(), 62);
        assert!(settled.lock().unwrap().is_empty());
    }

    #[test]
    fn zero_seed_skips_the_initial_scroll() {
        let (mut ruler, _) = ruler_with_seed(0);
        ruler.update(0.11);
        ruler.update(1.0);
        assert_eq!(ruler.scroll_requests_issued(), 0);
    }

    #[test]
    fn scroll_to_computes_the_tick_and_requests_once() {
        let (mut ruler, settled) = ruler_with_seed(0);
        ruler.update(0.11);

        let request = ruler.controller.scroll_target(62).unwrap();
        assert_eq!(request.tick, Tick::new(6, 2));

        ruler.scroll_to(62).unwrap();
        assert_eq!(ruler.scroll_requests_issued(), 1);
        assert!(settled.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_domain_scroll_is_an_error_and_clamping_is_explicit() {
        let (mut ruler, _) = ruler_with_seed(0);
        ruler.update(0.11);

        assert!(matches!(
            ruler.scroll_to(5000),
            Err(ScaleError::ValueOutOfRange { .. })
        ));
        assert_eq!(ruler.scroll_requests_issued(), 0);

        assert_eq!(ruler.scroll_to_clamped(5000), 999);
        assert_eq!(ruler.scroll_requests_issued(), 1);
    }

    #[test]
    fn drag_settle_cycle_notifies_once_with_the_snapped_value() {
        let (mut ruler, settled) = ruler_with_seed(0);
        ruler.update(0.11);

        ruler.on_drag_begin();
        ruler.on_scroll(123.0);
        ruler.on_scroll(491.2);

        // 61.4 ticks snap to tick 61 at rest
        let target = ruler.on_drag_will_end(491.2);
        assert_eq!(target, 488.0);
        assert_eq!(ruler.deceleration_target(), Some(488.0));

        ruler.on_deceleration_end(488.0);
        assert_eq!(ruler.selected_value(), 61);
        assert_eq!(*settled.lock().unwrap(), vec![61]);
        assert_eq!(ruler.deceleration_target(), None);
    }

    #[test]
    fn event_routing_matches_the_direct_calls() {
        let (mut ruler, settled) = ruler_with_seed(0);
        ruler.update(0.11);

        let down = Event {
            event_type: event_types::POINTER_DOWN,
            target: 0,
            data: EventData::None,
            timestamp: 0,
            propagation_stopped: false,
        };
        ruler.handle_event(&down);
        ruler.handle_event(&Event::scroll(event_types::DRAG, 0, 200.0));
        ruler.handle_event(&Event::scroll(event_types::DRAG_END, 0, 200.0));
        ruler.handle_event(&Event::scroll(event_types::SETTLED, 0, 200.0));

        assert_eq!(ruler.selected_value(), 25);
        assert_eq!(*settled.lock().unwrap(), vec![25]);
    }

    #[test]
    fn datasource_mirrors_the_section_layout() {
        let (mut ruler, _) = ruler_with_seed(0);
        assert_eq!(ruler.section_count(), 100);
        assert_eq!(ruler.rows_in_section(), 10);
        assert_eq!(ruler.row_height(), 8.0);
        assert_eq!(ruler.footer_text(0), " 9cm");
        assert_eq!(ruler.footer_text(6), "69cm");

        ruler.update(0.11);
        let major = ruler.tick_mark(Tick::new(0, 0)).unwrap();
        let minor = ruler.tick_mark(Tick::new(0, 3)).unwrap();
        assert!(major.major && !minor.major);
        assert!(major.frame.width > minor.frame.width);
        assert!(major.frame.height > minor.frame.height);

        // Horizontal default: frame axes swap, so the viewport is 120 wide
        assert_eq!(ruler.edge_padding(), Some(60.0));
        assert!(ruler.list_transform().is_some());
        assert_eq!(ruler.deceleration_easing(), Easing::Decelerate(0.1));
    }
}
