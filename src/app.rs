use std::time::Instant;

use wheelpick::config::Config;
use wheelpick::log;
use wheelpick::time::{hour_options, minute_options, should_loop};
use wheelpick::wheel::{ScrollCommand, SettleOutcome, WheelEngine};

use crate::events::Action;
use crate::picker::Picker;
use crate::tui::interaction::InteractionRegistry;

/// Fling velocity at release, in items per millisecond
const FLING_ITEMS_PER_MS: f64 = 0.075;

/// Below this speed (items per millisecond) a fling comes to rest
const FLING_STOP_ITEMS_PER_MS: f64 = 0.002;

/// Which part of the time a column edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Hour,
    Minute,
}

impl ColumnKind {
    pub fn title(self) -> &'static str {
        match self {
            ColumnKind::Hour => "Hour",
            ColumnKind::Minute => "Minute",
        }
    }
}

/// Deceleration in progress after a fling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling {
    /// Offset units per millisecond, signed
    pub velocity: f64,
    pub last_tick: Instant,
}

/// One wheel plus the host-side scroll view state the engine doesn't own.
#[derive(Debug, Clone)]
pub struct WheelColumn {
    pub kind: ColumnKind,
    pub engine: WheelEngine,
    pub fling: Option<Fling>,
}

impl WheelColumn {
    fn apply(&mut self, command: ScrollCommand) {
        let offset = command.offset(self.engine.config().item_height);
        self.stop_fling();
        self.engine.on_scroll(offset);
    }

    /// Cut a running fling short; its momentum never reaches a natural end.
    fn stop_fling(&mut self) {
        if self.fling.take().is_some() {
            self.engine.on_drag_begin();
        }
    }

    fn item_height(&self) -> f64 {
        self.engine.config().item_height
    }

    fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.engine.max_offset())
    }
}

/// The time the owner of the wheels currently holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeldTime {
    pub hour: f64,
    pub minute: f64,
}

impl HeldTime {
    pub fn get(&self, kind: ColumnKind) -> f64 {
        match kind {
            ColumnKind::Hour => self.hour,
            ColumnKind::Minute => self.minute,
        }
    }

    fn set(&mut self, kind: ColumnKind, value: f64) {
        match kind {
            ColumnKind::Hour => self.hour = value,
            ColumnKind::Minute => self.minute = value,
        }
    }
}

pub struct App {
    pub config: Config,
    pub columns: Vec<WheelColumn>,
    pub focused: usize,
    pub held: HeldTime,
    pub show_help: bool,
    pub should_quit: bool,
    pub interactions: InteractionRegistry,
    /// Last value a wheel reported, for the status line
    pub last_report: Option<(ColumnKind, f64)>,
}

impl App {
    /// Build the hour and minute wheels around an initial `(hour, minute)`.
    ///
    /// `hour` is on the 0-23 clock; it is converted when 12-hour wheels are
    /// configured.
    pub fn new(config: Config, (hour, minute): (u32, u32)) -> Self {
        let hour = if config.use_12_hours {
            to_12_hour(hour)
        } else {
            hour
        };
        let held = HeldTime {
            hour: f64::from(hour),
            minute: f64::from(minute),
        };

        let columns = [
            (ColumnKind::Hour, hour_options(config.use_12_hours)),
            (ColumnKind::Minute, minute_options(config.minute_step)),
        ]
        .into_iter()
        .map(|(kind, options)| {
            let mut wheel = config.wheel.clone();
            wheel.enable_looping = should_loop(wheel.enable_looping, options.len());
            WheelColumn {
                kind,
                engine: WheelEngine::new(options, held.get(kind), wheel),
                fling: None,
            }
        })
        .collect();

        Self {
            config,
            columns,
            focused: 0,
            held,
            show_help: false,
            should_quit: false,
            interactions: InteractionRegistry::new(),
            last_report: None,
        }
    }

    /// Mount every wheel and apply its initial placement.
    pub fn mount(&mut self, now: Instant) {
        for column in &mut self.columns {
            if let Some(command) = column.engine.mount(now) {
                column.apply(command);
            }
        }
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        if action.is_loggable() {
            log::log_event(&format!("action {:?}", action));
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::CloseHelp => self.show_help = false,
            Action::FocusNext => self.select_next(),
            Action::FocusPrev => self.select_prev(),
            Action::FocusColumn(index) => self.select_index(index),
            Action::Step(items) => self.step(self.focused, items, now),
            Action::StepColumn { column, items } => self.step(column, items, now),
            Action::Fling(direction) => self.fling(self.focused, direction, now),
            Action::ToggleLooping => self.toggle_looping(),
            Action::ResetToNow => {
                let now_time = chrono::Local::now();
                self.set_time(clock_of(&now_time));
            }
            Action::None => {}
        }
    }

    /// Drag a wheel by whole items and let go without momentum.
    fn step(&mut self, index: usize, items: i32, now: Instant) {
        let Some(column) = self.columns.get_mut(index) else {
            return;
        };
        if column.engine.options().is_empty() {
            return;
        }

        column.stop_fling();
        let target = column.engine.offset() + f64::from(items) * column.item_height();
        let offset = column.engine.snap_offset(column.clamp_offset(target));
        column.engine.on_scroll(offset);
        column.engine.on_drag_end(offset, now);
    }

    /// Release with velocity: deceleration starts immediately.
    fn fling(&mut self, index: usize, direction: i32, now: Instant) {
        let Some(column) = self.columns.get_mut(index) else {
            return;
        };
        if column.engine.options().is_empty() {
            return;
        }

        let offset = column.engine.offset();
        column.engine.on_drag_end(offset, now);
        column.engine.on_momentum_begin();
        column.fling = Some(Fling {
            velocity: f64::from(direction.signum()) * FLING_ITEMS_PER_MS * column.item_height(),
            last_tick: now,
        });
    }

    /// Advance flings and wheel timers.
    pub fn tick(&mut self, now: Instant) {
        let rate = self.config.wheel.deceleration_rate.per_millisecond();

        for index in 0..self.columns.len() {
            let column = &mut self.columns[index];

            let mut outcome = SettleOutcome::default();
            if let Some(fling) = column.fling.as_mut() {
                let elapsed_ms = now.saturating_duration_since(fling.last_tick).as_secs_f64() * 1000.0;
                fling.last_tick = now;

                let raw = column.engine.offset() + fling.velocity * elapsed_ms;
                let offset = raw.clamp(0.0, column.engine.max_offset());
                fling.velocity *= rate.powf(elapsed_ms);

                let stopped = offset != raw
                    || fling.velocity.abs() < FLING_STOP_ITEMS_PER_MS * column.engine.config().item_height;
                if stopped {
                    column.fling = None;
                    let rest = column.engine.snap_offset(offset);
                    outcome = column.engine.on_momentum_end(rest, now);
                } else {
                    column.engine.on_scroll(offset);
                }
            }

            self.handle_outcome(index, outcome);
            let polled = self.columns[index].engine.poll(now);
            self.handle_outcome(index, polled);
        }
    }

    fn handle_outcome(&mut self, index: usize, outcome: SettleOutcome) {
        let column = &mut self.columns[index];

        if let Some(command) = outcome.recenter {
            column.apply(command);
        }

        if let Some(value) = outcome.report {
            let kind = column.kind;
            log::log_event(&format!("{} reported {}", kind.title(), value));
            self.held.set(kind, value);
            self.last_report = Some((kind, value));

            // Feed the value back the way an owner would
            match self.columns[index].engine.set_value(value) {
                Ok(Some(command)) => self.columns[index].apply(command),
                Ok(None) => {}
                Err(e) => log::log_warning(&format!("{} rejected {}: {}", kind.title(), value, e)),
            }
        }
    }

    /// Change the held time from outside the wheels.
    pub fn set_time(&mut self, (hour, minute): (u32, u32)) {
        let hour = if self.config.use_12_hours {
            to_12_hour(hour)
        } else {
            hour
        };
        self.held = HeldTime {
            hour: f64::from(hour),
            minute: f64::from(minute),
        };

        for column in &mut self.columns {
            match column.engine.set_value(self.held.get(column.kind)) {
                Ok(Some(command)) => column.apply(command),
                Ok(None) => {}
                Err(e) => log::log_warning(&format!("{}: {}", column.kind.title(), e)),
            }
        }
    }

    fn toggle_looping(&mut self) {
        self.config.wheel.enable_looping = !self.config.wheel.enable_looping;
        let requested = self.config.wheel.enable_looping;

        for column in &mut self.columns {
            let looping = should_loop(requested, column.engine.options().len());
            if let Some(command) = column.engine.set_looping(looping) {
                column.apply(command);
            }
        }
    }

    /// The held time as shown in the status line.
    pub fn held_time_label(&self) -> String {
        let hour = self.held.hour.max(0.0) as u32;
        let minute = self.held.minute.max(0.0) as u32;
        match chrono::NaiveTime::from_hms_opt(hour % 24, minute % 60, 0) {
            Some(time) if self.config.use_12_hours => time.format("%-I:%M").to_string(),
            Some(time) => time.format("%H:%M").to_string(),
            None => format!("{}:{}", hour, minute),
        }
    }
}

impl Picker for App {
    type Item = WheelColumn;

    fn items(&self) -> &[WheelColumn] {
        &self.columns
    }

    fn selected_index(&self) -> usize {
        self.focused
    }

    fn set_selected_index(&mut self, index: usize) {
        self.focused = index;
    }
}

fn to_12_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// `(hour, minute)` of a clock reading.
pub fn clock_of<T: chrono::Timelike>(time: &T) -> (u32, u32) {
    (time.hour(), time.minute())
}
