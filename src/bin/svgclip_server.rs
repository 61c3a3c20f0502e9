use std::net::IpAddr;

use svgclip::server;

use clap::Parser;

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about="svgclip-server: web API for svgclip", long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "3004")]
    port: u16,
}

#[tokio::main]
async fn main() -> svgclip::Result<()> {
    let args = Arguments::parse();
    let address = if args.address.is_ipv6() {
        format!("[{}]:{}", args.address, args.port)
    } else {
        format!("{}:{}", args.address, args.port)
    };

    server::start_server(Some(&address)).await
}
