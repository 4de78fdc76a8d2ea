use futures::channel::oneshot;
use std::task::Poll;

use crate::ClientError;

/// The pending result of a request
///
/// Meant to be polled once per frame with [`AwaitingType::try_take`]
#[derive(Debug)]
pub struct AwaitingType<T>(oneshot::Receiver<Result<T, ClientError>>);

impl<T> AwaitingType<T> {
    pub fn new(rx: oneshot::Receiver<Result<T, ClientError>>) -> Self {
        Self(rx)
    }

    /// Already resolved with `result`
    pub fn ready(result: Result<T, ClientError>) -> Self {
        let (tx, rx) = oneshot::channel();
        // Receiver is still held so sending cannot fail
        let _ = tx.send(result);
        Self(rx)
    }

    /// Returns the result if it arrived
    ///
    /// Once this returns [`Poll::Ready`] it should not be called again
    pub fn try_take(&mut self) -> Poll<Result<T, ClientError>> {
        match self.0.try_recv() {
            Ok(Some(result)) => Poll::Ready(result),
            Ok(None) => Poll::Pending,
            Err(oneshot::Canceled) => Poll::Ready(Err(ClientError::Canceled)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_resolves_immediately() {
        let mut awaiting = AwaitingType::ready(Ok(5));
        assert_eq!(awaiting.try_take(), Poll::Ready(Ok(5)));
    }

    #[test]
    fn pending_until_sent() {
        let (tx, rx) = oneshot::channel();
        let mut awaiting: AwaitingType<u8> = AwaitingType::new(rx);

        assert_eq!(awaiting.try_take(), Poll::Pending);
        tx.send(Ok(1)).unwrap();
        assert_eq!(awaiting.try_take(), Poll::Ready(Ok(1)));
    }

    #[test]
    fn dropped_sender_is_canceled() {
        let (tx, rx) = oneshot::channel::<Result<(), ClientError>>();
        let mut awaiting = AwaitingType::new(rx);

        drop(tx);

        assert_eq!(awaiting.try_take(), Poll::Ready(Err(ClientError::Canceled)));
    }
}
