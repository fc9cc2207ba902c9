//! Machines decide, effects execute.
//!
//! A flow is split in two halves:
//!
//! - a [`Machine`]: pure state, synchronous `decide`, no IO. It interprets an
//!   event (a fact: "the phone was submitted", "the code was issued") and
//!   returns at most one command.
//! - an [`Effect`]: stateless executor that performs the command's IO
//!   (timers, HTTP, navigation) and reports the outcome as the next event.
//!
//! [`drive`] feeds effect outcomes back into the machine until it stops
//! asking for work. Because `decide` is called through a closure, the
//! machine can live inside a Dioxus `Signal` and only be borrowed for the
//! synchronous part of each step, never across an await.
//!
//! ```text
//!   event ──► Machine::decide ──► Some(command) ──► Effect::execute
//!     ▲                                                  │
//!     └──────────────── Some(next event) ◄───────────────┘
//! ```

use async_trait::async_trait;

/// A state machine that interprets events and decides on commands.
pub trait Machine {
    type Event;
    type Command;

    /// Update internal state for `event` and optionally request IO.
    fn decide(&mut self, event: &Self::Event) -> Option<Self::Command>;
}

/// Executes a command and reports what happened.
#[async_trait(?Send)]
pub trait Effect {
    type Command;
    type Event;

    /// `None` ends the drive loop (terminal commands such as navigation).
    async fn execute(&self, command: Self::Command) -> Option<Self::Event>;
}

/// Run `event` through `decide`, executing commands until the machine goes
/// quiet or an effect returns no follow-up event.
pub async fn drive<Ev, Cmd, D, E>(mut decide: D, effect: &E, event: Ev)
where
    D: FnMut(&Ev) -> Option<Cmd>,
    E: Effect<Command = Cmd, Event = Ev> + ?Sized,
{
    let mut next = Some(event);
    while let Some(event) = next.take() {
        let Some(command) = decide(&event) else {
            break;
        };
        next = effect.execute(command).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Counts down to zero, one command per tick.
    struct Countdown {
        remaining: u32,
    }

    impl Machine for Countdown {
        type Event = u32;
        type Command = u32;

        fn decide(&mut self, event: &u32) -> Option<u32> {
            self.remaining = *event;
            (*event > 0).then(|| *event)
        }
    }

    struct Decrement {
        seen: RefCell<Vec<u32>>,
    }

    #[async_trait(?Send)]
    impl Effect for Decrement {
        type Command = u32;
        type Event = u32;

        async fn execute(&self, command: u32) -> Option<u32> {
            self.seen.borrow_mut().push(command);
            Some(command - 1)
        }
    }

    #[tokio::test]
    async fn test_drive_runs_until_machine_goes_quiet() {
        let mut machine = Countdown { remaining: 0 };
        let effect = Decrement {
            seen: RefCell::new(Vec::new()),
        };

        drive(|ev| machine.decide(ev), &effect, 3).await;

        assert_eq!(machine.remaining, 0);
        assert_eq!(*effect.seen.borrow(), vec![3, 2, 1]);
    }
}
