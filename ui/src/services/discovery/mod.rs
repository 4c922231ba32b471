pub mod resolver;

pub use resolver::{DiscoveryError, ServiceResolver, StaticResolver};
