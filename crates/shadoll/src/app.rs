//! Application state and the terminal event loop.

use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::Stylize,
    text::Line,
};
use shadoll_background::{BackgroundClasses, BackgroundState};
use shadoll_config::{ConfigStore, StateFile};
use shadoll_core::{AnimationClock, DisplayConfig, palette};
use shadoll_logo::{LogoArt, LogoClasses, LogoPresentation, LogoWidget};
use shadoll_tilt::{
    InputChannel, ModeController, OrientationEvent, PermissionSource, PointerEvent, TiltSettings,
    Viewport,
};
use tracing::{debug, info, warn};

use crate::help::HelpOverlay;
use crate::host::TerminalHost;
use crate::sensor::SensorFeed;
use crate::toast::Toast;

/// Poll timeout, roughly 30 frames per second.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);
const TOAST_TITLE: &str = "Configuration Updated";

/// What a key press does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleBackground,
    CycleGradient,
    CycleLogo,
    CycleLogoAnimation,
    CycleElementAnimation,
    SpeedUp,
    SpeedDown,
    ResetSpeed,
    ResetAll,
    ToggleHelp,
    CloseHelp,
}

/// Map a key press to an action. Letters are case-insensitive.
pub fn action_for_key(key: KeyEvent, help_open: bool) -> Option<Action> {
    let action = match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Action::Quit,
        (_, KeyCode::Esc) if help_open => Action::CloseHelp,
        (_, KeyCode::Esc) => Action::Quit,
        (_, KeyCode::Char(c)) => match c.to_ascii_lowercase() {
            'q' => Action::Quit,
            'b' => Action::ToggleBackground,
            'g' => Action::CycleGradient,
            'l' => Action::CycleLogo,
            'a' => Action::CycleLogoAnimation,
            'e' => Action::CycleElementAnimation,
            '+' | '=' => Action::SpeedUp,
            '-' | '_' => Action::SpeedDown,
            '0' => Action::ResetSpeed,
            'r' => Action::ResetAll,
            'h' | '?' | '/' => Action::ToggleHelp,
            _ => return None,
        },
        _ => return None,
    };
    Some(action)
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    store: ConfigStore,
    controller: ModeController<LogoPresentation>,
    host: TerminalHost,
    sensor: Option<SensorFeed>,
    state_file: Option<StateFile>,
    background: BackgroundState,
    art: LogoArt,
    clock: AnimationClock,
    anim_ms: f64,
    toast: Toast,
    help: HelpOverlay,
    /// Terminal area of the last frame, used as the pointer viewport.
    area: Rect,
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(
        store: ConfigStore,
        tilt: TiltSettings,
        permission: PermissionSource,
        sensor: Option<SensorFeed>,
        state_file: Option<StateFile>,
    ) -> Self {
        Self {
            running: false,
            store,
            controller: ModeController::new(LogoPresentation::new(), tilt, permission),
            host: TerminalHost::new(),
            sensor,
            state_file,
            background: BackgroundState::new(),
            art: LogoArt::new(),
            clock: AnimationClock::new(),
            anim_ms: 0.0,
            toast: Toast::default(),
            help: HelpOverlay::default(),
            area: Rect::default(),
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.sync_controller();
        while self.running {
            self.tick();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.controller.stop(&mut self.host);
        info!(
            listeners = self.host.listener_count(),
            timers = self.host.pending_timers(),
            "shutting down"
        );
        Ok(())
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Let the tilt controller follow the current configuration.
    fn sync_controller(&mut self) {
        let config = *self.store.current();
        self.controller.apply_config(&mut self.host, &config);
    }

    /// Fire due timers, forward sensor readings and advance animation time.
    fn tick(&mut self) {
        let now = self.now_ms();
        self.host.set_now(now);

        for timer in self.host.take_due() {
            self.controller.on_timer(timer);
        }

        let readings = self.sensor.as_ref().map(SensorFeed::drain).unwrap_or_default();
        if self.host.is_subscribed(InputChannel::Orientation) {
            for reading in readings {
                let event = OrientationEvent {
                    beta: reading.beta,
                    gamma: reading.gamma,
                    timestamp_ms: now,
                };
                self.controller.on_orientation(&mut self.host, &event);
            }
        }

        self.anim_ms = self.clock.tick(now, self.store.current().speed);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        self.area = frame.area();
        let config = *self.store.current();

        self.background.render(frame, &config, self.anim_ms);

        let [stage, hint_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let classes = LogoClasses::for_config(&config);
        let pose = self.controller.sink().pose(classes.body, self.anim_ms);
        frame.render_widget(
            LogoWidget::new(&self.art)
                .pose(pose)
                .classes(classes)
                .anim_time(self.anim_ms),
            stage,
        );

        let hint = Line::from(vec![
            "h".bold().fg(palette::LOGO_S),
            " help  ".fg(palette::MUTED),
            "q".bold().fg(palette::LOGO_S),
            " quit".fg(palette::MUTED),
        ])
        .centered();
        frame.render_widget(hint, hint_area);

        self.help.render(frame);
        self.toast.render(frame, self.host.now_ms());
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => self.area = Rect::new(0, 0, width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        let Some(action) = action_for_key(key, self.help.is_open()) else {
            return;
        };
        debug!(?action, "key action");

        match action {
            Action::Quit => self.quit(),
            Action::ToggleHelp => self.help.toggle(),
            Action::CloseHelp => self.help.close(),
            Action::ToggleBackground => self.edit(ConfigStore::toggle_background),
            Action::CycleGradient => self.edit(ConfigStore::cycle_gradient),
            Action::CycleLogo => self.edit(ConfigStore::cycle_logo),
            Action::CycleLogoAnimation => self.edit(ConfigStore::cycle_logo_animation),
            Action::CycleElementAnimation => self.edit(ConfigStore::cycle_element_animation),
            Action::SpeedUp => self.edit(ConfigStore::speed_up),
            Action::SpeedDown => self.edit(ConfigStore::speed_down),
            Action::ResetSpeed => self.edit(ConfigStore::reset_speed),
            Action::ResetAll => self.edit(ConfigStore::reset),
        }
    }

    /// Apply a store operation, then follow up with the controller, the
    /// toast and the saved state.
    fn edit(&mut self, op: fn(&mut ConfigStore) -> &DisplayConfig) {
        let config = *op(&mut self.store);
        debug!(
            background = ?BackgroundClasses::for_config(&config).names(),
            logo = ?LogoClasses::for_config(&config).names(),
            "presentation classes"
        );
        self.controller.apply_config(&mut self.host, &config);
        self.toast.show(TOAST_TITLE, config.summary(), self.now_ms());
        self.persist();
    }

    fn persist(&self) {
        let Some(state) = &self.state_file else {
            return;
        };
        if let Err(e) = state.save(&self.store.to_query()) {
            warn!(error = %e, "failed to save configuration state");
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.on_pointer_moved(mouse.column, mouse.row)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.help.click(Position::new(mouse.column, mouse.row), self.area);
            }
            _ => {}
        }
    }

    fn on_pointer_moved(&mut self, column: u16, row: u16) {
        if !self.host.is_subscribed(InputChannel::Pointer) {
            return;
        }
        // The sample and any idle deadline it arms share one clock reading.
        let now = self.now_ms();
        self.host.set_now(now);
        // Edge cells map to the full tilt range.
        let event = PointerEvent {
            client_x: column as f64,
            client_y: row as f64,
            viewport: Viewport::new(
                self.area.width.saturating_sub(1) as f64,
                self.area.height.saturating_sub(1) as f64,
            ),
            timestamp_ms: now,
        };
        self.controller.on_pointer(&mut self.host, &event);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
