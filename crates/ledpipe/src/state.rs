//! The shared LED state store.
//!
//! One [`LedStore`] per gateway. Connection workers feed it decoded
//! [`LightingEvent`]s; consumers read consistent [`Snapshot`]s and can
//! subscribe to change notifications. All mutation happens under a single
//! lock, and notifications are sent only after the lock is released, so a
//! subscriber that immediately snapshots observes the change that woke it.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

use ledpipe_proto::{keymap, Color, DeviceTarget, LedId, LightingEvent};
use serde::Serialize;
use tracing::{debug, info};

pub struct LedStore {
    inner: Mutex<StoreInner>,
    subscribers: Mutex<Vec<Sender<()>>>,
}

#[derive(Default)]
struct StoreInner {
    colors: BTreeMap<LedId, Color>,
    background: Color,
    target: DeviceTarget,
    excluded: BTreeSet<LedId>,
}

/// A consistent copy of the store taken under the lock.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub target: DeviceTarget,
    pub background: Color,
    pub colors: BTreeMap<LedId, Color>,
    pub excluded: BTreeSet<LedId>,
}

impl Snapshot {
    /// Color of one LED. Never-written LEDs are unlit.
    pub fn color(&self, led: LedId) -> Color {
        self.colors.get(&led).copied().unwrap_or(Color::EMPTY)
    }
}

impl LedStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner::default()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Apply one decoded event.
    ///
    /// `Log` and `Ignore` never touch state and never notify. Everything
    /// else mutates under the lock and wakes subscribers afterwards.
    pub fn apply(&self, event: LightingEvent) {
        match event {
            LightingEvent::Log(line) => {
                info!(client_log = %line, "client log line");
                return;
            }
            LightingEvent::Ignore => return,
            event => {
                let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
                inner.apply(event);
            }
        }
        self.notify();
    }

    /// Register a change-notification channel.
    ///
    /// Each applied state change sends one `()`. Dropped receivers are
    /// pruned on the next notification.
    pub fn subscribe(&self) -> Receiver<()> {
        let (tx, rx) = mpsc::channel();
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    pub fn snapshot(&self) -> Snapshot {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Snapshot {
            target: inner.target,
            background: inner.background,
            colors: inner.colors.clone(),
            excluded: inner.excluded.clone(),
        }
    }

    fn notify(&self) {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|tx| tx.send(()).is_ok());
    }
}

impl Default for LedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreInner {
    fn apply(&mut self, event: LightingEvent) {
        match event {
            LightingEvent::SetGlobal(color) => {
                if self.target.contains(DeviceTarget::PER_KEY_RGB) {
                    for led in keymap::all_leds() {
                        self.colors.insert(led, color);
                    }
                } else {
                    self.background = color;
                }
            }
            LightingEvent::SetKey { led, color } => {
                self.colors.insert(led, color);
            }
            LightingEvent::SetBitmap(cells) => {
                for (led, color) in cells {
                    if !self.excluded.contains(&led) {
                        self.colors.insert(led, color);
                    }
                }
            }
            LightingEvent::SetMode(target) => {
                debug!(bits = target.bits(), "device target changed");
                self.target = target;
            }
            LightingEvent::ExcludeKeys(leds) => {
                self.excluded.extend(leds);
            }
            LightingEvent::Reset => {
                for color in self.colors.values_mut() {
                    *color = Color::EMPTY;
                }
                self.background = Color::EMPTY;
                self.target = DeviceTarget::ALL;
                self.excluded.clear();
            }
            // Filtered out in apply() before the lock is taken.
            LightingEvent::Log(_) | LightingEvent::Ignore => {}
        }
    }
}
