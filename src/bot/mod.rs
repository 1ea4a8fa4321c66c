//! The poll loop.
//!
//! [`Bot`] owns the cursor and runs fetch → validate → format → notify →
//! sleep forever.
//!
//! # Cursor
//!
//! The cursor only moves once a reply has been validated *and* its first
//! homework formatted. Any earlier fault leaves it in place so the next cycle
//! asks for the same window again.
//!
//! # Reports
//!
//! Every formatted status and every notifiable fault is sent, even when the
//! text matches the previous cycle's.

pub mod polling;

use std::time::Duration;

use crate::constants;
use crate::error::BotError;
use crate::practicum::StatusSource;
use crate::telegram::{Messenger, Notifier};

pub use polling::{poll_status, PollReport};

/// Blocks the loop between cycles.
pub trait Sleeper {
    /// Pauses for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// [`Sleeper`] backed by [`std::thread::sleep`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// State carried from one cycle to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (Unix seconds) of the next query window.
    pub cursor: i64,
}

impl PollState {
    /// Fresh state starting at `cursor`.
    pub fn new(cursor: i64) -> Self {
        Self { cursor }
    }
}

/// What a single cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was delivered.
    Delivered,
    /// A status change was found but Telegram did not take it.
    DeliveryFailed,
    /// The reply listed no homeworks.
    NoHomeworks,
    /// The cycle faulted before anything could be reported.
    Failed(BotError),
}

/// Poll loop over a status source and a chat.
#[derive(Debug)]
pub struct Bot<S, M, Z = ThreadSleeper> {
    source: S,
    notifier: Notifier<M>,
    sleeper: Z,
    retry_period: Duration,
    state: PollState,
}

impl<S, M> Bot<S, M, ThreadSleeper>
where
    S: StatusSource,
    M: Messenger,
{
    /// Creates a bot that starts querying at `cursor`.
    pub fn new(source: S, notifier: Notifier<M>, cursor: i64) -> Self {
        Self {
            source,
            notifier,
            sleeper: ThreadSleeper,
            retry_period: constants::RETRY_PERIOD,
            state: PollState::new(cursor),
        }
    }
}

impl<S, M, Z> Bot<S, M, Z>
where
    S: StatusSource,
    M: Messenger,
    Z: Sleeper,
{
    /// Overrides the pause between cycles.
    pub fn with_retry_period(mut self, retry_period: Duration) -> Self {
        self.retry_period = retry_period;
        self
    }

    /// Swaps the sleeper, keeping everything else.
    pub fn with_sleeper<Z2: Sleeper>(self, sleeper: Z2) -> Bot<S, M, Z2> {
        Bot {
            source: self.source,
            notifier: self.notifier,
            sleeper,
            retry_period: self.retry_period,
            state: self.state,
        }
    }

    /// Current loop state.
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Status source the bot queries.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Notifier the bot reports through.
    pub fn notifier(&self) -> &Notifier<M> {
        &self.notifier
    }

    /// Sleeper used between cycles.
    pub fn sleeper(&self) -> &Z {
        &self.sleeper
    }

    /// Runs cycles until the process is killed.
    pub fn run(&mut self) -> ! {
        log::info!(
            "Бот запущен: cursor={}, retry_period={}s",
            self.state.cursor,
            self.retry_period.as_secs()
        );
        loop {
            self.tick();
        }
    }

    /// Runs `cycles` cycles, each followed by the pause.
    pub fn run_cycles(&mut self, cycles: usize) -> Vec<CycleOutcome> {
        (0..cycles).map(|_| self.tick()).collect()
    }

    fn tick(&mut self) -> CycleOutcome {
        let outcome = self.run_cycle();
        self.sleeper.sleep(self.retry_period);
        outcome
    }

    /// Runs one fetch → validate → format → notify pass without sleeping.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        let report = match poll_status(&self.source, self.state.cursor) {
            Ok(report) => report,
            Err(e) => {
                self.handle_fault(&e);
                return CycleOutcome::Failed(e);
            }
        };

        self.state.cursor = report.next_cursor;

        let outcome = match report.message {
            None => {
                log::debug!("{}", constants::NO_UPDATES_MESSAGE);
                CycleOutcome::NoHomeworks
            }
            Some(message) => {
                if self.notifier.send_message(&message) {
                    CycleOutcome::Delivered
                } else {
                    CycleOutcome::DeliveryFailed
                }
            }
        };

        log::info!("Цикл опроса полностью отработал");
        outcome
    }

    fn handle_fault(&mut self, error: &BotError) {
        if !error.should_notify() {
            log::error!("{error}");
            return;
        }

        let message = format!("{}: {error}", constants::CYCLE_FAILURE_PREFIX);
        log::error!("{message}");
        self.notifier.send_message(&message);
    }
}
