#[derive(Debug, Clone)]
pub(crate) struct LoadedScript {
    pub(crate) path: String,
    pub(crate) source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChatCommandAction {
    NotHandled,
    Continue,
    Quit,
}
