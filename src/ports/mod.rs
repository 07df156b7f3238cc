/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the only seams this service needs:
/// the HTTP server is the single driving side and talks to use cases directly.
pub mod outbound;
