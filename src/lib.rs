// Core layer - configuration and response utilities
pub mod core;

// Features layer - appointments, message catalog, analytics
pub mod features;

// Application layer
pub mod command_handler;
pub mod commands;

pub use core::Config;

pub use features::{
    // Analytics
    CommandEvent, CommandOutcome, UsageTracker,
    // Appointments
    AppointmentError, AppointmentService, Appointments, CountdownCalculator,
    // Catalog
    CatalogEntry, CatalogError, MessageCatalog,
};
