use std::collections::HashSet;
use std::fmt;
use std::sync::Mutex;

/// Identity of one live stream connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct RegistryState {
    next_id: u64,
    active: HashSet<u64>,
}

/// Hands out connection ids and keeps the set of live connections.
///
/// One registry is shared by every session of a server; sessions call
/// `register` when a connection arrives and `unregister` when it ends,
/// however it ends.
pub struct ConnectionRegistry {
    state: Mutex<RegistryState>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState {
                next_id: 1,
                active: HashSet::new(),
            }),
        }
    }

    pub fn register(&self) -> ConnectionId {
        let mut state = self.state.lock().unwrap();
        let id = ConnectionId(state.next_id);
        state.next_id += 1;
        state.active.insert(id.0);
        log::info!("Client {id} connected ({} active)", state.active.len());
        id
    }

    pub fn unregister(&self, id: ConnectionId) {
        let mut state = self.state.lock().unwrap();
        state.active.remove(&id.0);
        log::info!("Client {id} disconnected ({} active)", state.active.len());
    }

    pub fn active_count(&self) -> usize {
        self.state.lock().unwrap().active.len()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
