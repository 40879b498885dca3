//! Scoped scroll-event subscription.
//!
//! [`ScrollSubscription`] attaches a handler when it is created and detaches
//! it when it is dropped, so the listener can never outlive the component
//! that owns the guard.

use crate::error::Result;

/// Callback invoked with the current vertical scroll position.
pub type ScrollHandler = Box<dyn Fn(f64)>;

/// Something that emits scroll events: the browser window, or a test double.
pub trait ScrollSource {
    /// Handle needed to take the listener back off.
    type Listener;

    fn attach(&self, handler: ScrollHandler) -> Result<Self::Listener>;

    fn detach(&self, listener: Self::Listener);
}

/// Live scroll listener. Detached on drop.
pub struct ScrollSubscription<S: ScrollSource> {
    source: S,
    listener: Option<S::Listener>,
}

impl<S: ScrollSource> ScrollSubscription<S> {
    pub fn subscribe(source: S, handler: impl Fn(f64) + 'static) -> Result<Self> {
        let listener = source.attach(Box::new(handler))?;
        tracing::trace!("scroll listener attached");
        Ok(Self {
            source,
            listener: Some(listener),
        })
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Detaches now instead of waiting for the guard to go out of scope.
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.source.detach(listener);
            tracing::trace!("scroll listener detached");
        }
    }
}

impl<S: ScrollSource> Drop for ScrollSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: ScrollSource> std::fmt::Debug for ScrollSubscription<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}
