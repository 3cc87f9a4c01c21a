//! Control-flow context for the function being checked
//!
//! Tracks conditional and loop nesting and whether a return has been seen
//! at the outermost level of the function body. Returns nested in any `if`
//! or loop never count, even when every branch returns.

/// Return-presence state of the current function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnState {
    /// No return at nesting depth zero yet
    #[default]
    Missing,
    /// A return was seen outside every conditional and loop
    Present,
}

#[derive(Debug, Clone, Default)]
pub struct FlowContext {
    if_depth: u32,
    loop_depth: u32,
    returns: ReturnState,
}

impl FlowContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new function
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn enter_conditional(&mut self) {
        self.if_depth += 1;
    }

    pub fn exit_conditional(&mut self) {
        self.if_depth = self.if_depth.saturating_sub(1);
    }

    pub fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    pub fn exit_loop(&mut self) {
        self.loop_depth = self.loop_depth.saturating_sub(1);
    }

    pub fn in_loop(&self) -> bool {
        self.loop_depth > 0
    }

    /// Neither inside a conditional nor a loop
    pub fn at_top_level(&self) -> bool {
        self.if_depth == 0 && self.loop_depth == 0
    }

    /// Record a return statement at the current nesting
    pub fn record_return(&mut self) {
        if self.at_top_level() {
            self.returns = ReturnState::Present;
        }
    }

    pub fn return_state(&self) -> ReturnState {
        self.returns
    }

    pub fn has_unconditional_return(&self) -> bool {
        self.returns == ReturnState::Present
    }
}
