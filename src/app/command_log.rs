//! Ringpuffer der zuletzt ausgeführten Commands (Diagnose und Tests).

use std::collections::VecDeque;

use super::AppCommand;

/// Standard-Kapazität
pub const DEFAULT_CAPACITY: usize = 512;

/// Hält die letzten `capacity` Commands, der älteste fällt zuerst heraus.
#[derive(Debug)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    capacity: usize,
    total: u64,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl CommandLog {
    /// Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log mit eigener Kapazität (mindestens 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            total: 0,
        }
    }

    /// Merkt sich einen Command.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        log::trace!("Command #{}: {:?}", self.total, command);
        self.entries.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl gehaltener Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch nichts aufgezeichnet wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals aufgezeichneten Commands
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Gehaltene Einträge, ältester zuerst
    pub fn iter(&self) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter()
    }
}
