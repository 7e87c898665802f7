use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ListQuery {
    pub package: Option<String>,
}
