#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Lines to show the operator.
    Output(Vec<String>),
    /// The server is stopped and the process should exit with status 0.
    Shutdown,
}
