// Workspace provider: the list/select/delete backend the picker drives.

pub mod terraform;

use std::io::Write;

use crate::error::ProviderError;
use crate::model::workspace::Item;

pub use terraform::TerraformProvider;

/// Synchronous workspace backend. Anything a command prints goes to `out`,
/// never straight to the terminal.
pub trait Provider {
    fn list(&mut self) -> Result<Vec<Item>, ProviderError>;

    fn select(&mut self, name: &str, out: &mut dyn Write) -> Result<(), ProviderError>;

    /// Delete `name` and return the refreshed list.
    fn delete(&mut self, name: &str, out: &mut dyn Write) -> Result<Vec<Item>, ProviderError>;
}

#[cfg(test)]
pub use fake::FakeProvider;
