use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Create a self-signed keystore for testing.
    #[arg(long)]
    pub create_selfsigned: bool,
    #[arg(long, requires = "create_selfsigned", default_value = "keystore.pem")]
    pub selfsigned_keystore: String,
    #[arg(long, requires = "create_selfsigned", default_value = "localhost")]
    pub selfsigned_domain: String,

    /// Do not read administrative commands from stdin.
    #[arg(long)]
    pub no_console: bool,
}
