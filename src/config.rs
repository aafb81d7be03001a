use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Loopback only. Changing it means rebuilding.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 5555));
pub const DEFAULT_BACKLOG: i32 = 1024;

/// Compiled-in server settings. Nothing here is read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub backlog: i32,
    pub worker_threads: usize,
}

impl ServerConfig {
    pub fn with_addr(self, addr: SocketAddr) -> Self {
        Self { addr, ..self }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            backlog: DEFAULT_BACKLOG,
            worker_threads: num_cpus::get_physical().max(1),
        }
    }
}
