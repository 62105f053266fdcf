use std::fmt;

/// Identifiers of the window commands exposed by the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeCommand {
    Minimize,
    Maximize,
    Close,
    ShowSystemMenu,
}

impl ChromeCommand {
    pub const ALL: [ChromeCommand; 4] = [
        ChromeCommand::Minimize,
        ChromeCommand::Maximize,
        ChromeCommand::Close,
        ChromeCommand::ShowSystemMenu,
    ];
}

/// An action that can be invoked without arguments and yields no value.
pub trait Command {
    type Error;

    fn execute(&self) -> Result<(), Self::Error>;
}

/// [`Command`] backed by a closure.
pub struct RelayCommand<E> {
    action: Box<dyn Fn() -> Result<(), E>>,
}

impl<E> RelayCommand<E> {
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> Result<(), E> + 'static,
    {
        Self {
            action: Box::new(action),
        }
    }
}

impl<E> Command for RelayCommand<E> {
    type Error = E;

    fn execute(&self) -> Result<(), E> {
        (self.action)()
    }
}

impl<E> fmt::Debug for RelayCommand<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCommand").finish_non_exhaustive()
    }
}
