use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct ErrorPageQuery {
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
}
