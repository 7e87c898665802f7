use crate::control::structs::server_status::ServerStatus;

impl ServerStatus {
    pub fn listening_on(&self) -> String {
        match (self.bind_address, self.tls_address) {
            (Some(plain), Some(tls)) => format!("http://{plain} and https://{tls}"),
            (Some(plain), None) => format!("http://{plain}"),
            (None, Some(tls)) => format!("https://{tls}"),
            (None, None) => String::from("no listener"),
        }
    }
}
