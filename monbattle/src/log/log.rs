use std::{
    fmt,
    fmt::Display,
    mem,
};

/// A battle event that is added to the [`EventLog`].
///
/// Events are formatted as a title followed by `key:value` pairs, all separated by `|`. Use the
/// [`log_event`][`crate::log_event`] macro to construct them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    title: String,
    entries: Vec<(String, String)>,
}

impl Event {
    pub fn new<S>(title: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Sets a value on the event, replacing any existing value for the key.
    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Display,
    {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for (key, value) in &self.entries {
            write!(f, "|{key}:{value}")?;
        }
        Ok(())
    }
}

/// Constructs an [`Event`] to be added to the [`EventLog`].
///
/// This macro enforces a common format for all messages in the event log.
#[macro_export]
macro_rules! log_event {
    ($title:expr $(, ($key:expr, $value:expr))* $(,)?) => {{
        #[allow(unused_mut)]
        let mut event = $crate::log::Event::new($title);
        $(event.set($key, $value);)*
        event
    }};
}

/// A log of battle events that can be read out incrementally.
#[derive(Debug, Default)]
pub struct EventLog {
    logs: Vec<String>,
    last_read: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does the log contain new messages since the last call to [`Self::read_out`].
    pub fn has_new_messages(&self) -> bool {
        self.last_read < self.logs.len()
    }

    /// Pushes a new event to the log.
    pub fn push(&mut self, event: Event) {
        self.logs.push(event.to_string())
    }

    /// Returns an iterator over all logs.
    pub fn logs(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(|s| s.as_ref())
    }

    /// Reads out any new logs that have been added since the last call to [`Self::read_out`].
    pub fn read_out(&mut self) -> impl Iterator<Item = &str> {
        let i = mem::replace(&mut self.last_read, self.logs.len());
        self.logs[i..].iter().map(|s| s.as_ref())
    }
}
