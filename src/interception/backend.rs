// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Event source binding shared by the strategies
//!
//! A backend names the raw event it listens to and the exchange type its
//! payloads are wrapped in. Tying both to one type keeps a backend's events
//! from ever reaching the other backend's exchange.

use std::sync::{Arc, Weak};

use serde_json::Value;

use super::{Listener, Phase};
use crate::debuggee::Debuggee;
use crate::exchange::Intercepted;

pub(crate) trait Backend: 'static {
    /// Raw event carrying both phases
    const EVENT: &'static str;

    /// Exchange type for this backend's payloads
    type Exchange: Intercepted + 'static;

    fn wrap(debuggee: Arc<dyn Debuggee>, payload: Value) -> Self::Exchange;
}

/// Subscribe `listener` to the backend event, filtered to `phase`
pub(crate) fn subscribe<B: Backend>(debuggee: &Arc<dyn Debuggee>, phase: Phase, listener: Listener) {
    // Held weakly: the handler ends up stored inside the connection itself.
    let connection: Weak<dyn Debuggee> = Arc::downgrade(debuggee);

    tracing::debug!(event = B::EVENT, ?phase, "Registering listener");
    debuggee.on(
        B::EVENT,
        Arc::new(move |payload: &Value| {
            if Phase::classify(payload) != phase {
                return;
            }
            let Some(debuggee) = connection.upgrade() else {
                return;
            };
            tracing::trace!(event = B::EVENT, ?phase, "Delivering intercepted exchange");
            listener(Box::new(B::wrap(debuggee, payload.clone())));
        }),
    );
}
