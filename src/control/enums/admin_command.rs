#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    Shutdown,
    Restart,
    Ban(String),
    Unban(String),
    BanList,
    SetupSsl {
        keystore_path: String,
        keystore_password: String,
        key_password: String,
    },
    Stats,
    RequestLog(usize),
    Help,
}
