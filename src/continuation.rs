//! Single-resume bridge between callback-style code and `async` code.
//!
//! Functions rewritten by `#[add_async]` call [`suspend`] with a closure
//! that starts the callback-style operation; the operation's callback
//! resumes the suspended caller through the [`Continuation`] handle.

use std::sync::{Mutex, PoisonError};

use futures::channel::oneshot;

/// Resumes a future suspended by [`suspend`].
///
/// The handle must be resumed exactly once: a second [`resume`] panics, and
/// dropping every reference without resuming panics the suspended caller.
///
/// [`resume`]: Continuation::resume
pub struct Continuation<T> {
    sender: Mutex<Option<oneshot::Sender<T>>>,
}

impl<T> Continuation<T> {
    /// Resume the suspended caller with `value`.
    ///
    /// Takes `&self` so that callbacks of any `Fn*` flavor can call it; the
    /// single-resume invariant is enforced at runtime instead.
    ///
    /// # Panics
    ///
    /// Panics if the continuation has already been resumed.
    pub fn resume(&self, value: T) {
        let mut slot = self.sender.lock().unwrap_or_else(PoisonError::into_inner);
        let sender = slot.take().expect("continuation resumed more than once");
        // Send only fails when the suspended future was dropped, and then
        // the value has nowhere to go anyway.
        let _ = sender.send(value);
    }
}

/// Suspend the calling future until `operation`'s continuation is resumed,
/// and return the resumed value.
pub async fn suspend<T>(operation: impl FnOnce(Continuation<T>)) -> T {
    let (sender, receiver) = oneshot::channel();
    operation(Continuation {
        sender: Mutex::new(Some(sender)),
    });
    receiver
        .await
        .expect("continuation dropped without resuming")
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::thread;

    #[test]
    fn resumes_synchronously() {
        let value = block_on(suspend(|continuation| continuation.resume(7)));
        assert_eq!(value, 7);
    }

    #[test]
    fn resumes_from_another_thread() {
        let value = block_on(suspend(|continuation| {
            thread::spawn(move || continuation.resume("done"));
        }));
        assert_eq!(value, "done");
    }

    #[test]
    #[should_panic(expected = "continuation resumed more than once")]
    fn double_resume_panics() {
        block_on(suspend(|continuation| {
            continuation.resume(1);
            continuation.resume(2);
        }));
    }

    #[test]
    #[should_panic(expected = "continuation dropped without resuming")]
    fn dropping_without_resuming_panics() {
        block_on(suspend::<u8>(|continuation| drop(continuation)));
    }
}
