//! Remote Data Loader
//!
//! Mount-time fetches are wrapped in an abortable future. The returned
//! [`LoadGuard`] aborts the fetch when dropped, so a completion can never reach
//! a form that has been torn down.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

use crate::api::SystemsApi;
use crate::domain::System;
use crate::error::ApiResult;

/// Aborts the guarded fetch on drop
#[derive(Debug)]
pub struct LoadGuard {
    handle: AbortHandle,
}

impl LoadGuard {
    pub fn is_aborted(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for LoadGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Tie `future` to the lifetime of the returned guard
pub fn guarded<F: Future>(future: F) -> (Abortable<F>, LoadGuard) {
    let (handle, registration) = AbortHandle::new_pair();
    (Abortable::new(future, registration), LoadGuard { handle })
}

/// Fetch the systems reference list once, cancelled with the guard
///
/// The future resolves to `Err(Aborted)` if the guard was dropped first.
pub fn load_systems<A>(api: A) -> (Abortable<impl Future<Output = ApiResult<Vec<System>>>>, LoadGuard)
where
    A: SystemsApi + 'static,
{
    guarded(async move { api.fetch_systems().await })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use std::cell::RefCell;

    struct PendingSystems {
        rx: RefCell<Option<oneshot::Receiver<Vec<System>>>>,
    }

    #[async_trait(?Send)]
    impl SystemsApi for PendingSystems {
        async fn fetch_systems(&self) -> ApiResult<Vec<System>> {
            let rx = self.rx.borrow_mut().take().expect("fetched once");
            Ok(rx.await.unwrap_or_default())
        }
    }

    fn system(id: u32) -> System {
        System {
            id: Some(id),
            name: format!("System {}", id),
            description: None,
            status: true,
        }
    }

    #[tokio::test]
    async fn test_load_completes_while_guard_alive() {
        let (tx, rx) = oneshot::channel();
        let api = PendingSystems { rx: RefCell::new(Some(rx)) };
        let (load, guard) = load_systems(api);
        tx.send(vec![system(1), system(2)]).unwrap();
        let systems = load.await.expect("not aborted").expect("fetched");
        assert_eq!(systems.len(), 2);
        assert!(!guard.is_aborted());
    }

    #[tokio::test]
    async fn test_dropped_guard_aborts_load() {
        let (tx, rx) = oneshot::channel();
        let api = PendingSystems { rx: RefCell::new(Some(rx)) };
        let (load, guard) = load_systems(api);
        drop(guard);
        let _ = tx.send(vec![system(1)]);
        assert!(load.await.is_err());
    }
}
