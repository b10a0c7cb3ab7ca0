//! Message processing
//!
//! Runs a message through the TEA update function, following up on any
//! returned messages and handing actions to the timer set.

use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::timers::TimerSet;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, timers: &mut TimerSet) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            timers.handle_action(action);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
