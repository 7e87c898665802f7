use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct InfoQuery {
    pub property: Option<String>,
}
