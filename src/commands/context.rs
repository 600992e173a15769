//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.2.0

use std::sync::Arc;

use crate::features::analytics::UsageTracker;
use crate::features::appointments::AppointmentService;
use crate::features::catalog::MessageCatalog;

/// Services available to every command handler
#[derive(Clone)]
pub struct CommandContext {
    pub appointments: AppointmentService,
    pub catalog: Arc<MessageCatalog>,
    pub usage_tracker: UsageTracker,
}

impl CommandContext {
    pub fn new(
        appointments: AppointmentService,
        catalog: Arc<MessageCatalog>,
        usage_tracker: UsageTracker,
    ) -> Self {
        Self {
            appointments,
            catalog,
            usage_tracker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_context_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<CommandContext>();
    }
}
