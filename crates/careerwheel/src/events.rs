#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Spin,
    ConfigReload,
    Quit,
}
