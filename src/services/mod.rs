// Service module exports

pub mod geometry;
pub mod layout;
pub mod optimistic;
pub mod reschedule;
pub mod settings;
