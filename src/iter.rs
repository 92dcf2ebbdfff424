//! The [`Iter`] handle and the sources that create one.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crossbeam::channel::{self, Receiver};

use crate::config::StageConfig;
use crate::error::Disconnected;
use crate::pair::Pair;
use crate::stage::{self, Emitter};

/// A single-pass sequence fed by a producer running on another thread.
///
/// Each combinator consumes the handle, starts one stage thread that reads
/// from it and returns a handle to that stage's output. Terminal operations
/// drain the handle on the calling thread.
///
/// Dropping an `Iter` before it is exhausted hangs up on its producer; the
/// producer notices on its next send and shuts down, which in turn releases
/// its own upstream.
pub struct Iter<T> {
    pub(crate) rx: Receiver<T>,
    pub(crate) config: Arc<StageConfig>,
}

impl<T: Send + 'static> Iter<T> {
    /// Stream the items of any sendable iterable, in order.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        Self::configured(StageConfig::default(), items)
    }

    /// Like [`Iter::new`], with stage threads built from `config`.
    pub fn configured<I>(config: StageConfig, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
    {
        let items = items.into_iter();
        let rx = stage::spawn(&config, "source", move |out| {
            for item in items {
                out.send(item)?;
            }
            Ok(())
        });
        Self {
            rx,
            config: Arc::new(config),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self::new(items)
    }

    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Self::new(items.to_vec())
    }

    /// Wrap a channel owned by someone else. No thread is started and
    /// nothing is copied; the sequence ends when the channel's senders are
    /// all dropped.
    pub fn from_chan(rx: Receiver<T>) -> Self {
        Self {
            rx,
            config: Arc::new(StageConfig::default()),
        }
    }

    /// Keys of `map`, in the map's (unspecified) iteration order.
    pub fn from_map_keys<V, S>(map: HashMap<T, V, S>) -> Self
    where
        V: Send + 'static,
    {
        Self::new(map.into_keys())
    }

    /// Values of `map`, in the map's (unspecified) iteration order.
    pub fn from_map_values<K, S>(map: HashMap<K, T, S>) -> Self
    where
        K: Send + 'static,
    {
        Self::new(map.into_values())
    }

    /// Use `config` for every stage spawned downstream of this one.
    pub fn with_config(mut self, config: StageConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Discard the first `n` elements, then hand back the same sequence.
    ///
    /// Runs on the calling thread and blocks until `n` elements were read or
    /// the sequence ended. Skipping past the end leaves an empty sequence.
    pub fn skip(self, n: usize) -> Self {
        for _ in 0..n {
            if self.rx.recv().is_err() {
                break;
            }
        }
        self
    }

    /// Chain a new stage that reads this sequence and writes a new one.
    pub(crate) fn then<U, F>(self, stage: &'static str, body: F) -> Iter<U>
    where
        U: Send + 'static,
        F: FnOnce(Receiver<T>, &Emitter<U>) -> Result<(), Disconnected> + Send + 'static,
    {
        let Iter { rx, config } = self;
        let rx = stage::spawn(&config, stage, move |out| body(rx, out));
        Iter { rx, config }
    }
}

impl<K, V> Iter<Pair<K, V>>
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Key/value pairs of `map`, in the map's (unspecified) iteration order.
    pub fn from_map<S>(map: HashMap<K, V, S>) -> Self {
        Self::new(map.into_iter().map(Pair::from))
    }
}

impl<T: Send + 'static> From<Receiver<T>> for Iter<T> {
    fn from(rx: Receiver<T>) -> Self {
        Self::from_chan(rx)
    }
}

/// Buffers the whole input into a `Vec` on the calling thread before the
/// source stage starts, so `(0..).collect::<Iter<_>>()` never returns. Use
/// [`Iter::new`] for lazy or endless inputs.
impl<T: Send + 'static> FromIterator<T> for Iter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::from_vec(items.into_iter().collect())
    }
}

impl<T> IntoIterator for Iter<T> {
    type Item = T;
    type IntoIter = channel::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rx.into_iter()
    }
}

impl<T> fmt::Debug for Iter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("config", &self.config)
            .field("buffered", &self.rx.len())
            .finish()
    }
}
