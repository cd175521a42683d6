//! One-shot asynchronous result.
//!
//! A [`Deferred`] settles at most once, through its [`Settler`]. If the settler is
//! dropped without settling, the deferred stays pending forever, like a promise
//! nobody resolves.

use futures_channel::oneshot;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

pub struct Settler<T, E> {
    sender: RefCell<Option<oneshot::Sender<Result<T, E>>>>,
}

pub struct Deferred<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

/// Creates a connected settler/deferred pair.
pub fn deferred<T, E>() -> (Settler<T, E>, Deferred<T, E>) {
    let (sender, receiver) = oneshot::channel();
    (
        Settler {
            sender: RefCell::new(Some(sender)),
        },
        Deferred { receiver },
    )
}

impl<T, E> Settler<T, E> {
    /// Settles with `outcome`. Returns `false` if an earlier call already settled.
    pub fn settle(&self, outcome: Result<T, E>) -> bool {
        let Some(sender) = self.sender.borrow_mut().take() else {
            return false;
        };
        // A dropped deferred still counts as settled.
        let _ = sender.send(outcome);
        true
    }

    pub fn resolve(&self, value: T) -> bool {
        self.settle(Ok(value))
    }

    pub fn reject(&self, error: E) -> bool {
        self.settle(Err(error))
    }

    pub fn is_settled(&self) -> bool {
        self.sender.borrow().is_none()
    }
}

impl<T, E> Deferred<T, E> {
    /// Takes the outcome if it is already available, without waiting.
    ///
    /// Once taken, the deferred never yields again.
    pub fn try_outcome(&mut self) -> Option<Result<T, E>> {
        self.receiver.try_recv().ok().flatten()
    }
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(oneshot::Canceled)) | Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_resolve_once() {
        let (settler, deferred) = deferred::<u32, String>();
        assert!(!settler.is_settled());
        assert!(settler.resolve(1));
        assert!(!settler.resolve(2));
        assert!(!settler.reject("late".to_string()));
        assert!(settler.is_settled());
        assert_eq!(block_on(deferred), Ok(1));
    }

    #[test]
    fn test_reject() {
        let (settler, deferred) = deferred::<u32, Option<String>>();
        settler.reject(None);
        assert_eq!(block_on(deferred), Err(None));
    }

    #[test]
    fn test_unsettled_stays_pending() {
        let (settler, mut deferred) = deferred::<u32, ()>();
        assert!(deferred.try_outcome().is_none());
        drop(settler);
        assert!(deferred.try_outcome().is_none());

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(Pin::new(&mut deferred).poll(&mut cx).is_pending());
    }

    #[test]
    fn test_settle_after_deferred_dropped() {
        let (settler, deferred) = deferred::<u32, ()>();
        drop(deferred);
        assert!(settler.resolve(3));
        assert!(settler.is_settled());
    }
}
