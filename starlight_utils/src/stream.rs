//! Collecting asynchronous streams into a `Vec`.

use std::pin::pin;

use futures_util::{Stream, StreamExt};

use crate::error::{Result, UtilsError};

/// Await every element of `source`, in order, and return them as a `Vec`.
///
/// # Errors
/// Returns [`UtilsError::MissingArgument`] when `source` is `None`; an absent
/// stream is a caller bug rather than an empty sequence.
pub async fn to_list_async<S>(source: Option<S>) -> Result<Vec<S::Item>>
where
    S: Stream,
{
    let Some(source) = source else {
        return Err(UtilsError::MissingArgument { name: "source" });
    };
    Ok(collect_in_order(source).await)
}

async fn collect_in_order<S>(source: S) -> Vec<S::Item>
where
    S: Stream,
{
    let mut source = pin!(source);
    let mut list = Vec::with_capacity(source.size_hint().0);
    while let Some(element) = source.next().await {
        list.push(element);
    }
    list
}

/// Method form of [`to_list_async`] for a stream that is known to be present.
pub trait StreamListExt: Stream + Sized {
    fn to_list(self) -> impl Future<Output = Vec<Self::Item>> {
        collect_in_order(self)
    }
}

impl<S: Stream> StreamListExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    #[tokio::test]
    async fn collects_in_order() {
        let list = to_list_async(Some(stream::iter(vec![3, 1, 2]))).await.expect("present source");
        assert_eq!(list, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn empty_stream_gives_empty_list() {
        let list = to_list_async(Some(stream::empty::<u8>())).await.expect("present source");
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn missing_source_is_an_error() {
        let err = to_list_async(None::<stream::Empty<u8>>).await.unwrap_err();
        assert!(matches!(err, UtilsError::MissingArgument { name: "source" }));
    }

    #[tokio::test]
    async fn awaits_pending_elements() {
        let delayed = stream::iter(0..5).then(|n| async move {
            tokio::task::yield_now().await;
            n * 10
        });
        assert_eq!(delayed.to_list().await, vec![0, 10, 20, 30, 40]);
    }
}
