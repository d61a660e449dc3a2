//! Worker pool. Runs blocking, CPU-bound jobs (image codecs, CPU sampling)
//! on dedicated OS threads so request handlers never stall the async runtime.

use flume::{Receiver, Sender};
use futures::channel::oneshot;
use std::{sync::Arc, thread};

use crate::prelude::*;

type Job = Box<dyn FnOnce() + Send>;

#[derive(Debug)]
pub struct WorkerPool {
	tx: Sender<Job>,
	size: usize,
}

impl WorkerPool {
	/// Spawns `n` worker threads (at least one).
	pub fn new(n: usize) -> Self {
		let size = n.max(1);
		let (tx, rx) = flume::unbounded::<Job>();
		let rx = Arc::new(rx);

		for i in 0..size {
			let rx = Arc::clone(&rx);
			let spawned =
				thread::Builder::new().name(format!("worker-{}", i)).spawn(move || worker_loop(&rx));
			if let Err(err) = spawned {
				error!("Failed to spawn worker thread {}: {}", i, err);
			}
		}

		Self { tx, size }
	}

	pub fn size(&self) -> usize {
		self.size
	}

	/// Submit a closure → returns a Future for its result
	pub fn run<F, T>(&self, f: F) -> impl std::future::Future<Output = ClResult<T>>
	where
		F: FnOnce() -> T + Send + 'static,
		T: Send + 'static,
	{
		let (res_tx, res_rx) = oneshot::channel();

		let job = Box::new(move || {
			let result = f();
			let _ignore = res_tx.send(result);
		});

		if self.tx.send(job).is_err() {
			error!("Failed to send job to worker queue");
		}

		async move {
			res_rx.await.map_err(|_| {
				error!("Worker dropped result channel (task may have panicked)");
				Error::Internal("worker task failed".into())
			})
		}
	}

	/// Like `run`, but flattens `ClResult<ClResult<T>>` into `ClResult<T>`.
	pub fn try_run<F, T>(&self, f: F) -> impl std::future::Future<Output = ClResult<T>>
	where
		F: FnOnce() -> ClResult<T> + Send + 'static,
		T: Send + 'static,
	{
		let fut = self.run(f);
		async move { fut.await? }
	}
}

fn worker_loop(rx: &Receiver<Job>) {
	while let Ok(job) = rx.recv() {
		if let Err(e) = std::panic::catch_unwind(std::panic::AssertUnwindSafe(job)) {
			error!("Worker thread caught panic: {:?}", e);
		}
	}
	debug!("Worker queue closed, thread exiting");
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_run_returns_value() {
		let pool = WorkerPool::new(2);
		let res = pool.run(|| 21 * 2).await.unwrap();
		assert_eq!(res, 42);
	}

	#[tokio::test]
	async fn test_try_run_flattens_error() {
		let pool = WorkerPool::new(1);
		let res: ClResult<()> = pool.try_run(|| Err(Error::NotFound)).await;
		assert!(matches!(res, Err(Error::NotFound)));
	}

	#[tokio::test]
	#[allow(clippy::panic)]
	async fn test_panic_is_reported_and_pool_survives() {
		let pool = WorkerPool::new(1);
		let res: ClResult<()> = pool.run(|| panic!("boom")).await;
		assert!(matches!(res, Err(Error::Internal(_))));

		// The single worker thread must still be alive
		assert_eq!(pool.run(|| 7).await.unwrap(), 7);
	}

	#[test]
	fn test_zero_size_is_clamped() {
		assert_eq!(WorkerPool::new(0).size(), 1);
	}
}

// vim: ts=4
