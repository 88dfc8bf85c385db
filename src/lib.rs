// Calendar Grid Library
// Event layout and drag-to-reschedule engines for calendar day/week/month grids

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{Event, EventId};
pub use models::placement::{Placement, PlacementRole};
pub use models::ui::ViewKind;
pub use services::layout::LayoutEngine;
pub use services::reschedule::{CommitIntent, DragSession, RescheduleController, TrackGeometry};
