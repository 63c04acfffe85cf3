use std::any::Any;

/// A value owned by the [`StateCtx`](crate::StateCtx).
///
/// States live on the UI thread. Commands never touch them directly; they
/// receive a clone through [`CommandSnapshot`](crate::CommandSnapshot) (which
/// requires [`State::snapshot`] to return `Some`) and publish replacements
/// through an [`Updater`](crate::Updater).
pub trait State: Any + Send {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a boxed value of the same concrete type.
    ///
    /// Implementations should delegate to [`state_assign_impl`]; a type
    /// mismatch is a wiring bug and is logged, not propagated.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);

    /// Clone for command inputs. `None` (the default) keeps the state out of
    /// command snapshots.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Shared `assign_box` body: downcast and overwrite in place.
pub fn state_assign_impl<T: State>(slot: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *slot = *value,
        Err(_) => log::error!(
            "assign_box: update payload is not a {}",
            std::any::type_name::<T>()
        ),
    }
}
