// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Update;

/// Handle returned by [`Session::subscribe`](crate::Session::subscribe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

type Callback = Box<dyn FnMut(&Update<'_>)>;

/// Subscriber callbacks, called in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Callback)>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("next_id", &self.next_id)
            .field(
                "subscribers",
                &format_args!("[{} callbacks]", self.subscribers.len()),
            )
            .finish()
    }
}

impl Observers {
    pub(crate) fn subscribe(&mut self, callback: Callback) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn notify(&mut self, update: &Update<'_>) {
        for (_, callback) in &mut self.subscribers {
            callback(update);
        }
    }
}
