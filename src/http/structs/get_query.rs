use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct GetQuery {
    pub package: Option<String>,
    pub path: Option<String>,
}
