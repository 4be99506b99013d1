// Runs the picker's event loop on its own thread and waits for its single completion.

use std::thread;

use crate::{
    app::{Picker, Report},
    error::{Error, Result},
    event::EventSource,
    provider::Provider,
    tui::Surface,
};

/// Blocks until the picker terminates. The picker releases its surface on the
/// worker thread, so by the time this returns the terminal is back to normal.
pub fn run<S, P, E>(picker: Picker<S, P, E>) -> Result<Report>
where
    S: Surface + Send,
    P: Provider + Send,
    E: EventSource + Send,
{
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name("tfws-events".into())
            .spawn_scoped(scope, move || picker.run())
            .map_err(|e| Error::EventLoop(format!("failed to spawn event loop: {e}")))?;
        handle
            .join()
            .map_err(|_| Error::EventLoop("event loop panicked".into()))
    })
}
