/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod console;
pub mod filesystem;
pub mod loopback;
pub mod memory;
pub mod network;
pub mod renderers;
