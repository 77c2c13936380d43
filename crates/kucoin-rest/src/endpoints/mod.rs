//! Endpoint groups, one module per section of the KuCoin API docs

pub mod account;
pub mod earn;
pub mod funding;
pub mod futures;
pub mod hf;
pub mod margin;
pub mod market;
pub mod trading;
pub mod ws;

pub use account::AccountEndpoints;
pub use earn::EarnEndpoints;
pub use funding::FundingEndpoints;
pub use futures::FuturesEndpoints;
pub use hf::HfTradingEndpoints;
pub use margin::MarginEndpoints;
pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;
pub use ws::WsEndpoints;
