pub mod api;
pub mod commands;
pub mod dev_proxy;
pub mod disease;
pub mod http;
pub mod probe;
pub mod runtime;
