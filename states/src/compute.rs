use crate::State;

/// Marker for cache-shaped states.
///
/// A `Compute` holds the latest status/result of some derived or asynchronous
/// work (idle / loading / loaded / error). It is registered with
/// [`StateCtx::record_compute`](crate::StateCtx::record_compute) and read via
/// [`StateCtx::cached`](crate::StateCtx::cached), which returns `None` until
/// the compute is registered.
///
/// Side effects must not run while a compute is being read; commands update
/// computes through [`Updater::set`](crate::Updater::set).
pub trait Compute: State {}
