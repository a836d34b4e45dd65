use super::NetworkProvider;
use std::sync::Arc;

#[cfg(feature = "reqwest")]
pub mod net_provider_reqwest;

mod net_provider_noop;

pub use net_provider_noop::NetworkProviderNoop;

#[cfg(feature = "reqwest")]
lazy_static::lazy_static! {
    static ref DEFAULT_NETWORK_PROVIDER: Arc<dyn NetworkProvider> =
        Arc::new(net_provider_reqwest::NetworkProviderReqwest {});
}

#[cfg(not(feature = "reqwest"))]
lazy_static::lazy_static! {
    static ref DEFAULT_NETWORK_PROVIDER: Arc<dyn NetworkProvider> = Arc::new(NetworkProviderNoop {});
}

pub fn get_network_provider() -> Arc<dyn NetworkProvider> {
    DEFAULT_NETWORK_PROVIDER.clone()
}
