use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Best-effort in-memory request limiter with a fixed window per client.
///
/// The counter resets entirely at the window boundary instead of
/// sliding. Entries for distinct clients are never removed and all
/// state is lost on restart.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<HashMap<String, Window>>,
}

#[derive(Debug)]
struct Window {
    count: u32,
    reset_at: Instant,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Returns `false` if the client has exhausted its budget for the
    /// current window. Rejected requests do not extend the window.
    pub fn try_acquire(&self, client_id: &str) -> bool {
        self.try_acquire_at(client_id, Instant::now())
    }

    fn try_acquire_at(&self, client_id: &str, now: Instant) -> bool {
        let mut clients = self.clients.lock();
        match clients.get_mut(client_id) {
            Some(window) if now <= window.reset_at => {
                if window.count >= self.max_requests {
                    return false;
                }
                window.count += 1;
                true
            }
            _ => {
                clients.insert(
                    client_id.to_owned(),
                    Window {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                true
            }
        }
    }
}
