//! Default route provider, used for both message routes and forwarding routes.

use crate::domain::MessageRoute;
use crate::ports::MessageRouteProvider;
use parking_lot::RwLock;
use tracing::debug;

/// Ordered list of routes evaluated against a message type.
pub struct DefaultMessageRouteProvider {
    /// "message" or "forwarding"; only used in logs.
    role: &'static str,
    routes: RwLock<Vec<MessageRoute>>,
}

impl DefaultMessageRouteProvider {
    /// Provider for outgoing message routes.
    #[must_use]
    pub fn new() -> Self {
        Self::with_role("message")
    }

    /// Provider for forwarding handled messages.
    #[must_use]
    pub fn forwarding() -> Self {
        Self::with_role("forwarding")
    }

    fn with_role(role: &'static str) -> Self {
        Self {
            role,
            routes: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn role(&self) -> &'static str {
        self.role
    }
}

impl Default for DefaultMessageRouteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageRouteProvider for DefaultMessageRouteProvider {
    fn add(&self, route: MessageRoute) {
        let mut routes = self.routes.write();
        if routes.contains(&route) {
            debug!(role = self.role, uri = %route.uri, "Route already present");
            return;
        }

        debug!(
            role = self.role,
            uri = %route.uri,
            specifications = route.specifications.len(),
            "Route added"
        );
        routes.push(route);
    }

    fn get_route_uris(&self, message_type: &str) -> Vec<String> {
        let mut uris: Vec<String> = Vec::new();
        for route in self.routes.read().iter() {
            if route.is_satisfied_by(message_type) && !uris.contains(&route.uri) {
                uris.push(route.uri.clone());
            }
        }
        uris
    }

    fn route_count(&self) -> usize {
        self.routes.read().len()
    }
}
