//! The landing terminal session: phases, history, input, and dispatch.
//!
//! A [`TerminalSession`] walks one visitor through
//! `Name → Greeting → Shell → Transition`. It is driven from outside by two
//! calls only: [`TerminalSession::handle_input`] for key events and
//! [`TerminalSession::tick`] for elapsed time. Typed characters, line
//! pauses and the final navigation are tasks on the session's
//! [`Scheduler`], and the exit fade reads its clock, so
//! [`TerminalSession::dispose`] can drop everything at once and leave the
//! session inert.

use folio_platform::{Services, VISITOR_NAME_KEY};
use folio_types::config::TerminalConfig;
use folio_types::input::{Button, InputEvent};

use crate::commands::{Section, ShellInput, normalize, parse_input};
use crate::fade::ExitFade;
use crate::greeting::{greeting_lines, resolve_visitor_name};
use crate::scheduler::{Scheduler, TaskHandle};
use crate::typing::{TypingEngine, TypingStep};

/// Top-level stage of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the visitor's name.
    Name,
    /// Typing out the greeting.
    Greeting,
    /// Accepting commands.
    Shell,
    /// Fading out before navigation. Accepts no input.
    Transition,
}

/// Continuation of a typing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterTyping {
    EnterShell,
    Navigate(Section),
}

/// Deferred work on the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    TypeStep,
    Navigate(&'static str),
}

/// One visitor's pass through the landing terminal.
pub struct TerminalSession {
    config: TerminalConfig,
    services: Services,
    phase: Phase,
    visitor_name: Option<String>,
    history: Vec<String>,
    pending_input: String,
    typing: TypingEngine<AfterTyping>,
    scheduler: Scheduler<Task>,
    navigation: Option<TaskHandle>,
    fade: Option<ExitFade>,
    disposed: bool,
}

impl TerminalSession {
    pub fn new(config: TerminalConfig, services: Services) -> Self {
        let typing = TypingEngine::new(config.char_delay_ms, config.line_delay_ms);
        Self {
            config,
            services,
            phase: Phase::Name,
            visitor_name: None,
            history: Vec::new(),
            pending_input: String::new(),
            typing,
            scheduler: Scheduler::new(),
            navigation: None,
            fade: None,
            disposed: false,
        }
    }

    // -- Accessors --

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// The resolved name, once submitted.
    pub fn visitor_name(&self) -> Option<&str> {
        self.visitor_name.as_deref()
    }

    /// Completed transcript lines.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Lines of the typing run in progress; empty when idle.
    pub fn typing_buffer(&self) -> &[String] {
        self.typing.buffer()
    }

    pub fn is_typing(&self) -> bool {
        self.typing.is_active()
    }

    /// Uncommitted text of the active input field.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Prompt prefix shown before shell input.
    pub fn prompt(&self) -> String {
        let name = self
            .visitor_name
            .as_deref()
            .unwrap_or(folio_platform::DEFAULT_VISITOR_NAME);
        format!("{name}@{} $", self.config.host)
    }

    /// Terminal opacity: 1.0 normally, fading to 0.0 during `Transition`.
    pub fn opacity(&self) -> f32 {
        self.fade
            .map_or(1.0, |fade| fade.opacity(self.scheduler.now_ms()))
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    // -- Driving --

    /// Feed one input event.
    pub fn handle_input(&mut self, event: &InputEvent) {
        if self.disposed {
            return;
        }
        let editable = matches!(self.phase, Phase::Name | Phase::Shell);
        match event {
            InputEvent::Quit => self.dispose(),
            InputEvent::TextInput(ch) if editable && !ch.is_control() => {
                self.pending_input.push(*ch);
            },
            InputEvent::Backspace if editable => {
                self.pending_input.pop();
            },
            InputEvent::ButtonPress(Button::Confirm) => match self.phase {
                Phase::Name => {
                    let raw = std::mem::take(&mut self.pending_input);
                    self.submit_name(&raw);
                },
                // Keep the field intact while typing so nothing is lost.
                Phase::Shell if !self.is_typing() => {
                    let raw = std::mem::take(&mut self.pending_input);
                    self.submit_command(&raw);
                },
                _ => {},
            },
            InputEvent::ButtonPress(Button::Down) => self.skip_to_home(),
            _ => {},
        }
    }

    /// Advance virtual time by `dt_ms`, running every task that falls due.
    pub fn tick(&mut self, dt_ms: u32) {
        if self.disposed {
            return;
        }
        let until = self.scheduler.now_ms() + u64::from(dt_ms);
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run_task(task);
        }
        self.scheduler.advance_to(until);
    }

    /// Tear the session down: cancel all timers and ignore further input.
    ///
    /// No history change or navigation happens after this returns.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let navigation_dropped = self
            .navigation
            .take()
            .is_some_and(|handle| self.scheduler.cancel(handle));
        if navigation_dropped {
            log::info!("pending navigation cancelled");
        }
        let cancelled = self.scheduler.cancel_all();
        self.typing.cancel();
        self.disposed = true;
        log::debug!("terminal session disposed ({cancelled} pending tasks cancelled)");
    }

    // -- Phase: Name --

    /// Commit the name field. Ignored outside `Phase::Name`.
    pub fn submit_name(&mut self, raw: &str) {
        if self.disposed || self.phase != Phase::Name {
            return;
        }
        let name = resolve_visitor_name(raw);
        if let Err(e) = self.services.store.set(VISITOR_NAME_KEY, &name) {
            log::warn!("could not persist visitor name: {e}");
        }
        let hour = self.services.clock.local_hour().unwrap_or_else(|e| {
            log::warn!("clock unavailable, using late-night greeting: {e}");
            0
        });
        let lines = greeting_lines(hour, &name);
        log::info!("visitor {name:?} arrived (hour {hour})");
        self.visitor_name = Some(name);
        self.set_phase(Phase::Greeting);
        self.start_typing(lines, Some(AfterTyping::EnterShell));
    }

    // -- Phase: Shell --

    /// Commit a shell line. Ignored outside `Phase::Shell` or while typing.
    pub fn submit_command(&mut self, raw: &str) {
        if self.disposed || self.phase != Phase::Shell || self.is_typing() {
            return;
        }
        let echoed = match raw.trim() {
            "" => "(enter)",
            text => text,
        };
        let echo = format!("{} {echoed}", self.prompt());
        self.history.push(echo);

        let input = normalize(raw);
        match parse_input(&input) {
            ShellInput::Empty => self.begin_transition(Section::Home),
            ShellInput::Cd(target) => match Section::from_key(target) {
                Some(section) => self.start_typing(
                    vec![format!("navigating to {}...", section.path())],
                    Some(AfterTyping::Navigate(section)),
                ),
                None => self.history.push(format!("cd: no such section: {target}")),
            },
            ShellInput::Clear => self.history.clear(),
            ShellInput::Command(cmd) => {
                log::debug!("running {}", cmd.name());
                self.start_typing(cmd.output(), None);
            },
            ShellInput::Unknown(name) => self
                .history
                .push(format!("command not found: {name}. type 'help' for a list.")),
        }
    }

    /// Leave for the home page without typing a command.
    ///
    /// Only honoured in `Phase::Shell` while nothing is being typed.
    pub fn skip_to_home(&mut self) {
        if self.disposed || self.phase != Phase::Shell || self.is_typing() {
            return;
        }
        self.begin_transition(Section::Home);
    }

    // -- Internals --

    fn set_phase(&mut self, phase: Phase) {
        log::info!("terminal phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    fn start_typing(&mut self, lines: Vec<String>, completion: Option<AfterTyping>) {
        match self.typing.start(lines, completion) {
            Some(step) => self.follow(step),
            None => log::warn!("typing run already active, dropping new run"),
        }
    }

    fn follow(&mut self, step: TypingStep<AfterTyping>) {
        match step {
            TypingStep::Pending(delay) => {
                self.scheduler.schedule(delay, Task::TypeStep);
            },
            TypingStep::Done { lines, completion } => {
                self.history.extend(lines);
                match completion {
                    Some(AfterTyping::EnterShell) => self.set_phase(Phase::Shell),
                    Some(AfterTyping::Navigate(section)) => self.begin_transition(section),
                    None => {},
                }
            },
        }
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::TypeStep => {
                if let Some(step) = self.typing.advance() {
                    self.follow(step);
                }
            },
            Task::Navigate(path) => {
                self.navigation = None;
                if let Err(e) = self.services.navigator.navigate(path) {
                    log::warn!("navigation to {path} failed: {e}");
                }
            },
        }
    }

    fn begin_transition(&mut self, section: Section) {
        let scheduled = self
            .navigation
            .is_some_and(|handle| self.scheduler.is_pending(handle));
        if scheduled || self.phase == Phase::Transition {
            return;
        }
        self.set_phase(Phase::Transition);
        let delay = self.config.transition_delay_ms;
        self.fade = Some(ExitFade::new(self.scheduler.now_ms(), delay));
        self.navigation = Some(self.scheduler.schedule(delay, Task::Navigate(section.path())));
        log::debug!("navigation to {} in {delay}ms", section.path());
    }
}
