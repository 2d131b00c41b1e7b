use clap::Parser;
use mortgage_calc_core::{MortgageResult, RateStore, DEFAULT_INTEREST_RATE};
use rust_decimal::Decimal;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mortgage-calc-server",
    version,
    about = "HTTP API for mortgage payment and maximum mortgage calculations"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "MORTGAGE_CALC_BIND", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Annual interest rate in effect at startup (0.025 = 2.5%)
    #[arg(long, env = "MORTGAGE_CALC_INTEREST_RATE", default_value_t = DEFAULT_INTEREST_RATE)]
    pub interest_rate: Decimal,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    /// Rate store seeded with the configured rate; fails if it is not positive.
    pub fn rate_store(&self) -> MortgageResult<RateStore> {
        RateStore::new(self.interest_rate)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }
}
