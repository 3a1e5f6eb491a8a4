use std::sync::Arc;

use crate::{
    clients::{OrderDetailSource, UserDirectory},
    store::OrderStore,
};

/// Dependencies handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderStore>,
    pub users: Arc<dyn UserDirectory>,
    pub details: Arc<dyn OrderDetailSource>,
}

impl AppState {
    pub fn new(
        orders: Arc<dyn OrderStore>,
        users: Arc<dyn UserDirectory>,
        details: Arc<dyn OrderDetailSource>,
    ) -> Self {
        Self {
            orders,
            users,
            details,
        }
    }
}
