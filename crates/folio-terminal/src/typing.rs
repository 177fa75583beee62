//! Typing engine: reveals lines one character at a time.
//!
//! The engine is a pure state machine. It does not own a timer; each call
//! to [`TypingEngine::start`] or [`TypingEngine::advance`] returns a
//! [`TypingStep`] telling the caller either how long to wait before the next
//! `advance`, or that the run is over. The caller schedules the wait on its
//! [`Scheduler`](crate::scheduler::Scheduler), which is what makes a run
//! cancellable.
//!
//! While a run is active, [`TypingEngine::buffer`] holds the partial
//! snapshot: every finished line plus the in-progress one. It is empty
//! exactly when no run is active.

/// What the caller must do after driving the engine one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingStep<C> {
    /// Call `advance` again after this many milliseconds.
    Pending(u32),
    /// The run finished. `lines` are fully revealed and `completion` is the
    /// continuation passed to `start`.
    Done {
        lines: Vec<String>,
        completion: Option<C>,
    },
}

/// Character-by-character line revealer.
///
/// `C` is the continuation type handed back on completion.
#[derive(Debug)]
pub struct TypingEngine<C> {
    char_delay_ms: u32,
    line_delay_ms: u32,
    source: Vec<Vec<char>>,
    line: usize,
    col: usize,
    buffer: Vec<String>,
    completion: Option<C>,
}

impl<C> TypingEngine<C> {
    pub fn new(char_delay_ms: u32, line_delay_ms: u32) -> Self {
        Self {
            char_delay_ms,
            line_delay_ms,
            source: Vec::new(),
            line: 0,
            col: 0,
            buffer: Vec::new(),
            completion: None,
        }
    }

    /// Whether a run is in progress.
    pub fn is_active(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Partially revealed lines of the current run.
    pub fn buffer(&self) -> &[String] {
        &self.buffer
    }

    /// Begin revealing `lines`.
    ///
    /// Returns `None` (and keeps the current run) if a run is already active.
    /// An empty `lines` finishes immediately with nothing revealed.
    pub fn start(&mut self, lines: Vec<String>, completion: Option<C>) -> Option<TypingStep<C>> {
        if self.is_active() {
            return None;
        }
        if lines.is_empty() {
            return Some(TypingStep::Done {
                lines: Vec::new(),
                completion,
            });
        }
        self.source = lines.iter().map(|l| l.chars().collect()).collect();
        self.line = 0;
        self.col = 0;
        self.buffer = vec![String::new()];
        self.completion = completion;
        Some(self.next_step())
    }

    /// Reveal the next character, or open the next line.
    ///
    /// Returns `None` when no run is active.
    pub fn advance(&mut self) -> Option<TypingStep<C>> {
        if !self.is_active() {
            return None;
        }
        let current = &self.source[self.line];
        if self.col < current.len() {
            let ch = current[self.col];
            self.col += 1;
            if let Some(last) = self.buffer.last_mut() {
                last.push(ch);
            }
        } else {
            self.line += 1;
            self.col = 0;
            self.buffer.push(String::new());
        }
        Some(self.next_step())
    }

    /// Abort the run, discarding the partial output and the continuation.
    pub fn cancel(&mut self) {
        self.source.clear();
        self.buffer.clear();
        self.completion = None;
        self.line = 0;
        self.col = 0;
    }

    fn next_step(&mut self) -> TypingStep<C> {
        if self.col < self.source[self.line].len() {
            TypingStep::Pending(self.char_delay_ms)
        } else if self.line + 1 < self.source.len() {
            TypingStep::Pending(self.line_delay_ms)
        } else {
            let lines = std::mem::take(&mut self.buffer);
            let completion = self.completion.take();
            self.source.clear();
            TypingStep::Done { lines, completion }
        }
    }
}
