//! Outbound selection notifications.

use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender};

use serde::Serialize;

/// Raised once per commit with the newly selected option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionChanged {
	pub value: String,
}

/// Handle returned by [`Combobox::subscribe`](super::Combobox::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "listener-{}", self.0)
	}
}

type Callback = Box<dyn FnMut(&SelectionChanged)>;

/// Observers and channel subscribers attached to a single combobox.
#[derive(Default)]
pub(crate) struct Listeners {
	next_id: u64,
	callbacks: Vec<(ListenerId, Callback)>,
	channels: Vec<Sender<SelectionChanged>>,
}

impl Listeners {
	pub(crate) fn subscribe<F>(&mut self, callback: F) -> ListenerId
	where
		F: FnMut(&SelectionChanged) + 'static,
	{
		let id = ListenerId(self.next_id);
		self.next_id += 1;
		self.callbacks.push((id, Box::new(callback)));
		id
	}

	pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
		let before = self.callbacks.len();
		self.callbacks.retain(|(existing, _)| *existing != id);
		before != self.callbacks.len()
	}

	pub(crate) fn channel(&mut self) -> Receiver<SelectionChanged> {
		let (tx, rx) = mpsc::channel();
		self.channels.push(tx);
		rx
	}

	pub(crate) fn len(&self) -> usize {
		self.callbacks.len() + self.channels.len()
	}

	/// Deliver `event` to every observer, dropping channels whose receiver is gone.
	pub(crate) fn emit(&mut self, event: &SelectionChanged) {
		for (_, callback) in &mut self.callbacks {
			callback(event);
		}
		self.channels.retain(|tx| tx.send(event.clone()).is_ok());
	}
}

impl fmt::Debug for Listeners {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Listeners")
			.field("callbacks", &self.callbacks.len())
			.field("channels", &self.channels.len())
			.finish()
	}
}
