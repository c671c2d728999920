//! Cursor-based batch pagination
//!
//! Every listing endpoint of the platform returns its results in batches: a
//! page of data, an opaque `next` cursor and, when the server knows it, the
//! total number of items. [`load_batch`] drives a provider through the full
//! sequence and concatenates the pages in API order.

use std::future::Future;

use serde::Deserialize;

use crate::error::Result;

/// Number of items requested per page, matching the platform maximum.
pub const BATCH_SIZE: u32 = 50;

/// Pagination parameters passed to a batch provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInfo {
    /// Opaque cursor; empty for the first page
    pub offset: String,
    /// Maximum number of items to return
    pub batch_size: u32,
}

impl BatchInfo {
    pub fn new(offset: impl Into<String>, batch_size: u32) -> Self {
        BatchInfo {
            offset: offset.into(),
            batch_size,
        }
    }

    /// First page of a listing at the default batch size
    pub fn first() -> Self {
        BatchInfo::new("", BATCH_SIZE)
    }
}

/// One page of a batched listing response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPage<T> {
    pub data: Vec<T>,
    pub next: String,
    #[serde(default)]
    pub total_count: Option<i64>,
}

/// Load every page of a batched listing and concatenate the results.
///
/// Termination contract:
/// - while the server declares a `total_count`, pagination continues as long
///   as fewer items than the total have been collected;
/// - without a declared total, pagination continues while pages are non-empty;
/// - a cursor that does not advance stops the loop in either mode, even if a
///   declared total has not been reached. A stationary cursor would otherwise
///   loop forever.
pub async fn load_batch<T, F, Fut>(mut provider: F) -> Result<Vec<T>>
where
    F: FnMut(BatchInfo) -> Fut,
    Fut: Future<Output = Result<BatchPage<T>>>,
{
    let mut items = Vec::new();
    let mut offset = String::new();

    loop {
        let page = provider(BatchInfo::new(offset.clone(), BATCH_SIZE)).await?;
        let page_len = page.data.len();
        items.extend(page.data);

        let has_next = match page.total_count {
            Some(total) => total > items.len() as i64,
            None => page_len > 0,
        };
        if !has_next || page.next == offset {
            break;
        }
        offset = page.next;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn pages(pages: Vec<BatchPage<u32>>) -> Mutex<VecDeque<BatchPage<u32>>> {
        Mutex::new(pages.into_iter().collect())
    }

    fn page(data: Vec<u32>, next: &str, total_count: Option<i64>) -> BatchPage<u32> {
        BatchPage {
            data,
            next: next.to_string(),
            total_count,
        }
    }

    #[tokio::test]
    async fn test_concatenates_pages_until_total_reached() {
        let queue = pages(vec![
            page(vec![1, 2], "a", Some(5)),
            page(vec![3, 4], "b", Some(5)),
            page(vec![5], "c", Some(5)),
        ]);

        let items = load_batch(|batch| {
            assert_eq!(batch.batch_size, BATCH_SIZE);
            let next = queue.lock().unwrap().pop_front().unwrap();
            async move { Ok(next) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert!(queue.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_single_page_covering_total() {
        let queue = pages(vec![page(vec![1, 2, 3], "a", Some(3))]);

        let items = load_batch(|_| {
            let next = queue.lock().unwrap().pop_front().unwrap();
            async move { Ok(next) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_missing_total_stops_on_empty_page() {
        let queue = pages(vec![
            page(vec![1, 2], "a", None),
            page(vec![3], "b", None),
            page(vec![], "c", None),
        ]);

        let items = load_batch(|_| {
            let next = queue.lock().unwrap().pop_front().unwrap();
            async move { Ok(next) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stationary_cursor_terminates() {
        // The server keeps declaring more data but never advances the
        // cursor. The loop must stop rather than spin forever.
        let calls = Mutex::new(0u32);

        let items = load_batch(|batch| {
            *calls.lock().unwrap() += 1;
            let offset = batch.offset.clone();
            async move { Ok(page(vec![7], &offset, Some(100))) }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![7]);
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_zero_total_returns_empty() {
        let items = load_batch(|_| async move { Ok(page(vec![], "", Some(0))) })
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let result: Result<Vec<u32>> = load_batch(|_| async move {
            Err(crate::error::Error::Api {
                status: 500,
                message: "boom".to_string(),
            })
        })
        .await;
        assert!(result.is_err());
    }
}
