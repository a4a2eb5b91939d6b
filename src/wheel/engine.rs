//! The wheel engine: placement in, settle interpretation out.
//!
//! The engine owns no scroll view. The host reports what its view does
//! (scroll, drag release, deceleration start/end, timer ticks) and applies
//! the [`ScrollCommand`]s the engine returns. Selection is always derived
//! from the externally held value; the engine only reports what the user
//! settled on and leaves it to the owner to feed the value back.

use std::time::Instant;

use crate::config::WheelConfig;
use crate::error::{Result, WheelError};
use crate::log;

use super::appearance::{ItemAppearance, ItemStyle};
use super::guard::MountGuard;
use super::option::{OptionValue, PickerOption};
use super::resolver::resolve;
use super::sequence::{
    REPEAT, VirtualSequence, base_index, block_of, initial_top_index, placement_offset,
    top_index_for_offset,
};
use super::settle::SettleDebouncer;

/// Instruction for the host's scroll view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollCommand {
    /// Scroll so the view's top edge sits at `offset`.
    ToOffset { offset: f64, animated: bool },
    /// Scroll so sequence slot `index` sits at the top edge.
    ToIndex { index: usize, animated: bool },
}

impl ScrollCommand {
    pub fn offset(&self, item_height: f64) -> f64 {
        match *self {
            ScrollCommand::ToOffset { offset, .. } => offset,
            ScrollCommand::ToIndex { index, .. } => placement_offset(index, item_height),
        }
    }

    pub fn is_animated(&self) -> bool {
        match *self {
            ScrollCommand::ToOffset { animated, .. } | ScrollCommand::ToIndex { animated, .. } => {
                animated
            }
        }
    }
}

/// What a settle produced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettleOutcome {
    /// New value for the owner, always numeric
    pub report: Option<f64>,
    /// Silent jump back toward the middle block (looping only)
    pub recenter: Option<ScrollCommand>,
}

impl SettleOutcome {
    pub fn is_empty(&self) -> bool {
        self.report.is_none() && self.recenter.is_none()
    }
}

/// One on-screen slot for the row renderer.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    /// Index into the virtual sequence
    pub slot: usize,
    /// `None` for padding rows
    pub option: Option<&'a PickerOption>,
    /// Signed distance from the indicator, in items (negative = above)
    pub distance: f64,
    pub style: ItemStyle,
}

/// Stateful controller for one wheel instance.
#[derive(Debug, Clone)]
pub struct WheelEngine {
    options: Vec<PickerOption>,
    value: OptionValue,
    config: WheelConfig,
    appearance: ItemAppearance,
    sequence: VirtualSequence,
    /// Derived from `value` and `options`; never set from scrolling
    selected: Option<usize>,
    /// `None` until mounted
    guard: Option<MountGuard>,
    debouncer: SettleDebouncer,
    offset: f64,
    /// Index the wheel last reported, awaiting the owner's echo
    echo: Option<usize>,
}

impl WheelEngine {
    pub fn new(options: Vec<PickerOption>, value: impl Into<OptionValue>, config: WheelConfig) -> Self {
        let value = value.into();
        let sequence =
            VirtualSequence::build(options.len(), config.visible_rest, config.enable_looping);
        let selected = derive_selected(&value, &options);

        Self {
            debouncer: SettleDebouncer::new(config.grace_period()),
            options,
            value,
            config,
            appearance: ItemAppearance::default(),
            sequence,
            selected,
            guard: None,
            offset: 0.0,
            echo: None,
        }
    }

    pub fn with_appearance(mut self, appearance: ItemAppearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Mount (or re-mount) the wheel: disarm, and place the selection.
    ///
    /// Initial placement is never animated.
    pub fn mount(&mut self, now: Instant) -> Option<ScrollCommand> {
        self.guard = Some(MountGuard::new(now, self.config.arming_delay()));
        self.debouncer.reset();
        self.echo = None;
        log::log_event(&format!(
            "wheel mounted: {} options, selected {:?}, looping {}",
            self.options.len(),
            self.selected,
            self.sequence.is_looping()
        ));
        self.place(false)
    }

    /// The owner's value changed.
    ///
    /// Returns a re-placement unless the selection is unchanged or the value
    /// is the wheel's own report coming back. A non-numeric value is rejected
    /// and leaves the wheel untouched.
    pub fn set_value(&mut self, value: impl Into<OptionValue>) -> Result<Option<ScrollCommand>> {
        let value = value.into();
        let resolved = match resolve(&value, &self.options) {
            Ok(index) => Some(index),
            Err(WheelError::EmptyOptions) => None,
            Err(e) => return Err(e),
        };
        self.value = value;

        let echo = self.echo.take();
        if resolved == self.selected {
            return Ok(None);
        }
        self.selected = resolved;

        if resolved.is_some() && resolved == echo {
            return Ok(None);
        }
        Ok(self.place(self.config.animated_placement))
    }

    /// Replace the option list, rebuilding the virtual sequence.
    pub fn set_options(&mut self, options: Vec<PickerOption>) -> Option<ScrollCommand> {
        let old_len = self.options.len();
        let old_selected = self.selected;

        self.options = options;
        self.rebuild();
        self.selected = derive_selected(&self.value, &self.options);
        self.echo = None;

        if self.options.len() == old_len && self.selected == old_selected {
            return None;
        }
        self.place(self.config.animated_placement)
    }

    pub fn set_looping(&mut self, enable_looping: bool) -> Option<ScrollCommand> {
        if self.config.enable_looping == enable_looping {
            return None;
        }
        self.config.enable_looping = enable_looping;
        self.rebuild();
        self.place(false)
    }

    pub fn set_visible_rest(&mut self, visible_rest: usize) -> Option<ScrollCommand> {
        if self.config.visible_rest == visible_rest {
            return None;
        }
        self.config.visible_rest = visible_rest;
        self.rebuild();
        self.place(false)
    }

    pub fn set_item_height(&mut self, item_height: f64) -> Option<ScrollCommand> {
        if self.config.item_height == item_height {
            return None;
        }
        self.config.item_height = item_height;
        self.place(false)
    }

    /// The view scrolled (drag or animation in progress).
    pub fn on_scroll(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// The user touched the view. Interrupts any deceleration in progress.
    pub fn on_drag_begin(&mut self) {
        self.debouncer.drag_begin();
    }

    /// The user let go. Settles on its own after the grace period unless
    /// deceleration starts first.
    pub fn on_drag_end(&mut self, offset: f64, now: Instant) {
        self.offset = offset;
        self.debouncer.release(offset, now);
    }

    pub fn on_momentum_begin(&mut self) {
        self.debouncer.momentum_begin();
    }

    /// Deceleration finished: the view's own settle signal.
    pub fn on_momentum_end(&mut self, offset: f64, now: Instant) -> SettleOutcome {
        self.debouncer.momentum_end();
        self.offset = offset;
        self.settle(offset, now)
    }

    /// Advance timers: arming and the drag grace period.
    pub fn poll(&mut self, now: Instant) -> SettleOutcome {
        self.poll_guard(now);
        match self.debouncer.poll(now) {
            Some(offset) => self.settle(offset, now),
            None => SettleOutcome::default(),
        }
    }

    fn poll_guard(&mut self, now: Instant) {
        if let Some(guard) = self.guard.as_mut() {
            if guard.poll(now) {
                log::log_event("wheel armed");
            }
        }
    }

    fn settle(&mut self, raw_offset: f64, now: Instant) -> SettleOutcome {
        self.poll_guard(now);

        let len = self.options.len();
        if len == 0 {
            return SettleOutcome::default();
        }

        let top = top_index_for_offset(raw_offset, self.config.item_height)
            .min(self.sequence.max_top_index());

        if !self.is_armed() {
            log::log_event(&format!("settle at top index {} before arming, ignored", top));
            return SettleOutcome::default();
        }

        let looping = self.sequence.is_looping();
        let index = if looping { base_index(top as i64, len) } else { top };

        let mut outcome = SettleOutcome::default();

        if looping && self.config.recenter {
            let block = block_of(top, len);
            if block == 0 || block == REPEAT - 1 {
                let offset = placement_offset(
                    initial_top_index(index, len, true),
                    self.config.item_height,
                );
                log::log_event(&format!("recentering from block {} to offset {}", block, offset));
                self.offset = offset;
                outcome.recenter = Some(ScrollCommand::ToOffset {
                    offset,
                    animated: false,
                });
            }
        }

        if Some(index) != self.selected {
            match self.options[index].value.to_number() {
                Ok(value) => {
                    self.echo = Some(index);
                    outcome.report = Some(value);
                }
                Err(e) => {
                    self.echo = None;
                    log::log_warning(&format!("settled on option {}: {}", index, e));
                }
            }
        } else {
            // Back on the held selection: an earlier report is no longer what the view shows
            self.echo = None;
        }

        outcome
    }

    fn rebuild(&mut self) {
        self.sequence = VirtualSequence::build(
            self.options.len(),
            self.config.visible_rest,
            self.config.enable_looping,
        );
    }

    fn place(&mut self, animated: bool) -> Option<ScrollCommand> {
        let selected = self.selected?;
        let looping = self.sequence.is_looping();
        let top = initial_top_index(selected, self.options.len(), looping);
        self.offset = placement_offset(top, self.config.item_height);

        // Index placement is unreliable across repeated blocks
        Some(if looping {
            ScrollCommand::ToOffset {
                offset: self.offset,
                animated: false,
            }
        } else {
            ScrollCommand::ToIndex {
                index: top,
                animated,
            }
        })
    }

    /// Nearest offset the view should snap to.
    pub fn snap_offset(&self, offset: f64) -> f64 {
        let top = top_index_for_offset(offset, self.config.item_height)
            .min(self.sequence.max_top_index());
        placement_offset(top, self.config.item_height)
    }

    /// Largest scrollable offset that still centers an option.
    pub fn max_offset(&self) -> f64 {
        placement_offset(self.sequence.max_top_index(), self.config.item_height)
    }

    /// Slots intersecting the viewport at the current offset.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        let h = self.config.item_height;
        if h <= 0.0 {
            return vec![];
        }

        let position = self.offset / h;
        let center = position + self.config.visible_rest as f64;
        let first = position.floor() as i64;
        let last = (position + self.config.visible_rows() as f64).ceil() as i64;

        (first..last)
            .filter(|slot| *slot >= 0 && (*slot as usize) < self.sequence.len())
            .map(|slot| {
                let slot = slot as usize;
                let distance = slot as f64 - center;
                VisibleRow {
                    slot,
                    option: self.sequence.get(slot).map(|i| &self.options[i]),
                    distance,
                    style: self.appearance.at(distance),
                }
            })
            .collect()
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn value(&self) -> &OptionValue {
        &self.value
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_option(&self) -> Option<&PickerOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Whether the selection indicator should be drawn.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.guard.is_some_and(|g| g.is_armed())
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn sequence(&self) -> &VirtualSequence {
        &self.sequence
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn momentum_started(&self) -> bool {
        self.debouncer.momentum_started()
    }
}

fn derive_selected(value: &OptionValue, options: &[PickerOption]) -> Option<usize> {
    match resolve(value, options) {
        Ok(index) => Some(index),
        Err(WheelError::EmptyOptions) => None,
        Err(e) => {
            log::log_warning(&format!("no selection: {}", e));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::wheel::sequence::MID_BLOCK;

    const H: f64 = 40.0;

    fn numbered(start: u32, end: u32, step: usize) -> Vec<PickerOption> {
        (start..=end).step_by(step).map(PickerOption::numbered).collect()
    }

    fn config(looping: bool) -> WheelConfig {
        WheelConfig {
            enable_looping: looping,
            ..WheelConfig::default()
        }
    }

    /// Mount and let the arming delay pass.
    fn mounted(engine: &mut WheelEngine, start: Instant) -> Instant {
        engine.mount(start);
        let armed = start + Duration::from_millis(100);
        assert!(engine.poll(armed).is_empty());
        assert!(engine.is_armed());
        armed
    }

    #[test]
    fn test_quarter_hours_ceiling_and_user_settle() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 45, 15), 17, config(false));
        assert_eq!(engine.selected_index(), Some(2));

        assert_eq!(
            engine.mount(start),
            Some(ScrollCommand::ToIndex {
                index: 2,
                animated: false
            })
        );
        assert_eq!(engine.offset(), 2.0 * H);

        let now = mounted(&mut engine, start);
        let outcome = engine.on_momentum_end(0.0, now);
        assert_eq!(outcome.report, Some(0.0));
        assert_eq!(outcome.recenter, None);
    }

    #[test]
    fn test_looping_mount_places_in_middle_block() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 12, config(true));

        assert_eq!(
            engine.mount(start),
            Some(ScrollCommand::ToOffset {
                offset: 84.0 * H,
                animated: false
            })
        );
        assert_eq!(engine.sequence().len(), 24 * REPEAT + 4);
    }

    #[test]
    fn test_looping_settle_one_block_further_is_noop() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 12, config(true));
        let now = mounted(&mut engine, start);

        let outcome = engine.on_momentum_end(108.0 * H, now);
        assert_eq!(outcome, SettleOutcome::default());
    }

    #[test]
    fn test_looping_settle_wraps_to_base_index() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 12, config(true));
        let now = mounted(&mut engine, start);

        // One item above hour 0 of the middle block: hour 23
        let outcome = engine.on_momentum_end((MID_BLOCK * 24 - 1) as f64 * H, now);
        assert_eq!(outcome.report, Some(23.0));
        assert_eq!(outcome.recenter, None);
    }

    #[test]
    fn test_recenter_from_outer_block_is_silent() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 12, config(true));
        let now = mounted(&mut engine, start);

        // Block 0, same base index as the selection
        let outcome = engine.on_momentum_end(12.0 * H, now);
        assert_eq!(outcome.report, None);
        assert_eq!(
            outcome.recenter,
            Some(ScrollCommand::ToOffset {
                offset: 84.0 * H,
                animated: false
            })
        );
        assert_eq!(engine.offset(), 84.0 * H);

        // Last block, different value: report and recenter together
        let outcome = engine.on_momentum_end((6 * 24 + 3) as f64 * H, now);
        assert_eq!(outcome.report, Some(3.0));
        assert_eq!(
            outcome.recenter,
            Some(ScrollCommand::ToOffset {
                offset: (MID_BLOCK * 24 + 3) as f64 * H,
                animated: false
            })
        );
    }

    #[test]
    fn test_recenter_disabled() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(
            numbered(0, 23, 1),
            12,
            WheelConfig {
                recenter: false,
                ..config(true)
            },
        );
        let now = mounted(&mut engine, start);

        let outcome = engine.on_momentum_end(5.0 * H, now);
        assert_eq!(outcome.report, Some(5.0));
        assert_eq!(outcome.recenter, None);
    }

    #[test]
    fn test_no_report_before_arming() {
        for value in [0, 10] {
            let start = Instant::now();
            let mut engine = WheelEngine::new(numbered(0, 23, 1), value, config(false));
            engine.mount(start);

            // Settle from the placement landing, and even a real move
            assert!(engine.on_momentum_end(engine.offset(), start).is_empty());
            assert!(engine.on_momentum_end(5.0 * H, start + Duration::from_millis(99)).is_empty());
            assert!(!engine.is_armed());

            engine.on_drag_end(7.0 * H, start + Duration::from_millis(10));
            assert!(engine.poll(start + Duration::from_millis(60)).is_empty());
        }
    }

    #[test]
    fn test_unmounted_wheel_never_reports() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 4, config(false));
        assert!(engine.on_momentum_end(9.0 * H, start + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_slow_drag_synthesizes_settle() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 4, config(false));
        let now = mounted(&mut engine, start);

        engine.on_drag_end(6.0 * H + 5.0, now);
        assert!(engine.poll(now + Duration::from_millis(49)).is_empty());

        let outcome = engine.poll(now + Duration::from_millis(50));
        assert_eq!(outcome.report, Some(6.0));
    }

    #[test]
    fn test_momentum_suppresses_synthesized_settle() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 4, config(false));
        let now = mounted(&mut engine, start);

        engine.on_drag_end(6.0 * H, now);
        engine.on_momentum_begin();
        assert!(engine.poll(now + Duration::from_millis(50)).is_empty());

        let outcome = engine.on_momentum_end(9.0 * H, now + Duration::from_millis(300));
        assert_eq!(outcome.report, Some(9.0));
    }

    #[test]
    fn test_non_looping_clamps_to_last_option() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 45, 15), 0, config(false));
        let now = mounted(&mut engine, start);

        assert_eq!(engine.on_momentum_end(50.0 * H, now).report, Some(45.0));
        assert_eq!(engine.on_momentum_end(-80.0, now).report, None);
    }

    #[test]
    fn test_round_trip_at_placement_is_noop() {
        for looping in [false, true] {
            for selected in 0..12u32 {
                let start = Instant::now();
                let mut engine = WheelEngine::new(numbered(0, 11, 1), selected, config(looping));
                let command = engine.mount(start).unwrap();
                let now = mounted(&mut engine, start);

                let outcome = engine.on_momentum_end(command.offset(H), now);
                assert_eq!(outcome.report, None, "looping {} selected {}", looping, selected);
            }
        }
    }

    #[test]
    fn test_mixed_types_report_numbers() {
        let start = Instant::now();
        let options = vec![
            PickerOption::new("00", "00"),
            PickerOption::new(1, "01"),
            PickerOption::new(2, "02"),
        ];
        let mut engine = WheelEngine::new(options, 2, config(false));
        let now = mounted(&mut engine, start);

        let outcome = engine.on_momentum_end(0.0, now);
        assert_eq!(outcome.report, Some(0.0));

        // "00" resolves against the same list
        assert_eq!(engine.set_value("00").unwrap(), None);
        assert_eq!(engine.selected_index(), Some(0));
    }

    #[test]
    fn test_echo_of_own_report_does_not_replace() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 12, config(true));
        let now = mounted(&mut engine, start);

        // Three items down, still inside the middle block
        let offset = 87.0 * H;
        let outcome = engine.on_momentum_end(offset, now);
        assert_eq!(outcome.report, Some(15.0));

        assert_eq!(engine.set_value(15).unwrap(), None);
        assert_eq!(engine.selected_index(), Some(15));
        assert_eq!(engine.offset(), offset);
    }

    #[test]
    fn test_settle_back_on_selection_forgets_earlier_report() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 4, config(false));
        let now = mounted(&mut engine, start);

        assert_eq!(engine.on_momentum_end(9.0 * H, now).report, Some(9.0));

        // The owner has not applied 9 yet; the user comes back to 4
        assert_eq!(engine.on_momentum_end(4.0 * H, now).report, None);

        // Now 9 arrives as an outside change and must move the view
        assert_eq!(
            engine.set_value(9).unwrap(),
            Some(ScrollCommand::ToIndex {
                index: 9,
                animated: false
            })
        );
        assert_eq!(engine.offset(), 9.0 * H);
        assert_eq!(engine.selected_index(), Some(9));
    }

    #[test]
    fn test_drag_during_momentum_settles_after_grace() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 4, config(false));
        let now = mounted(&mut engine, start);

        engine.on_drag_end(4.0 * H, now);
        engine.on_momentum_begin();

        // Caught mid-deceleration and dragged to 7
        engine.on_drag_begin();
        assert!(!engine.momentum_started());
        engine.on_drag_end(7.0 * H, now);
        assert_eq!(engine.poll(now + Duration::from_millis(50)).report, Some(7.0));
    }

    #[test]
    fn test_external_change_replaces() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 12, config(false));
        mounted(&mut engine, start);

        assert_eq!(
            engine.set_value(20).unwrap(),
            Some(ScrollCommand::ToIndex {
                index: 20,
                animated: false
            })
        );
        assert_eq!(engine.offset(), 20.0 * H);

        // Same resolved index: nothing to do
        assert_eq!(engine.set_value(20).unwrap(), None);
    }

    #[test]
    fn test_animated_placement_only_non_looping() {
        let cfg = WheelConfig {
            animated_placement: true,
            ..config(false)
        };
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 1, cfg.clone());
        engine.mount(Instant::now());
        assert!(engine.set_value(5).unwrap().unwrap().is_animated());

        let mut engine = WheelEngine::new(
            numbered(0, 23, 1),
            1,
            WheelConfig {
                enable_looping: true,
                ..cfg
            },
        );
        engine.mount(Instant::now());
        assert!(!engine.set_value(5).unwrap().unwrap().is_animated());
    }

    #[test]
    fn test_malformed_value_rejected_and_state_kept() {
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 3, config(false));
        assert!(matches!(engine.set_value("three"), Err(WheelError::NotNumeric(_))));
        assert_eq!(engine.selected_index(), Some(3));
        assert_eq!(engine.value(), &OptionValue::from(3));
    }

    #[test]
    fn test_empty_options_guarded() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(vec![], 0, config(true));
        assert_eq!(engine.mount(start), None);
        assert!(!engine.has_selection());
        assert!(engine.selected_option().is_none());

        let now = start + Duration::from_secs(1);
        engine.poll(now);
        assert!(engine.on_momentum_end(120.0, now).is_empty());
        assert!(engine.visible_rows().iter().all(|row| row.option.is_none()));

        // Options arriving later place the wheel
        let command = engine.set_options(numbered(0, 23, 1));
        assert!(matches!(command, Some(ScrollCommand::ToOffset { .. })));
        assert_eq!(engine.selected_index(), Some(0));
    }

    #[test]
    fn test_set_options_rebuilds_and_replaces() {
        let mut engine = WheelEngine::new(numbered(0, 59, 1), 17, config(false));
        engine.mount(Instant::now());
        assert_eq!(engine.selected_index(), Some(17));

        let command = engine.set_options(numbered(0, 45, 15));
        assert_eq!(engine.selected_index(), Some(2));
        assert_eq!(engine.sequence().len(), 4 + 4);
        assert_eq!(
            command,
            Some(ScrollCommand::ToIndex {
                index: 2,
                animated: false
            })
        );
    }

    #[test]
    fn test_toggle_looping_replaces_by_offset() {
        let mut engine = WheelEngine::new(numbered(0, 11, 1), 6, config(false));
        engine.mount(Instant::now());

        assert_eq!(engine.set_looping(false), None);
        assert_eq!(
            engine.set_looping(true),
            Some(ScrollCommand::ToOffset {
                offset: 42.0 * H,
                animated: false
            })
        );
        assert_eq!(engine.sequence().content_len(), 12 * REPEAT);
    }

    #[test]
    fn test_visible_rows_distance() {
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 0, config(false));
        engine.mount(Instant::now());

        let rows = engine.visible_rows();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].option.is_none());
        assert!(rows[1].option.is_none());
        assert_eq!(rows[2].option.map(|o| o.label.as_str()), Some("0"));
        assert_eq!(rows[2].distance, 0.0);
        assert_eq!(rows[2].style.opacity, 1.0);
        assert_eq!(rows[0].distance, -2.0);
        assert_eq!(rows[4].distance, 2.0);

        // Half an item scrolled: six rows intersect the viewport
        engine.on_scroll(H / 2.0);
        let rows = engine.visible_rows();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2].distance, -0.5);
    }

    #[test]
    fn test_snap_offset() {
        let mut engine = WheelEngine::new(numbered(0, 3, 1), 0, config(false));
        engine.mount(Instant::now());
        assert_eq!(engine.snap_offset(61.0), 2.0 * H);
        assert_eq!(engine.snap_offset(9_999.0), 3.0 * H);
        assert_eq!(engine.max_offset(), 3.0 * H);
    }

    #[test]
    fn test_remount_disarms() {
        let start = Instant::now();
        let mut engine = WheelEngine::new(numbered(0, 23, 1), 4, config(false));
        let now = mounted(&mut engine, start);

        engine.mount(now);
        assert!(!engine.is_armed());
        assert!(engine.on_momentum_end(9.0 * H, now).is_empty());
    }
}
