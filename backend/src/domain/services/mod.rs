//! Per-entity record services over the typed collection store.

mod enquiries;
mod notifications;
mod tickets;
mod tutorials;
mod users;

pub use enquiries::EnquiryService;
pub use notifications::NotificationService;
pub use tickets::TicketService;
pub use tutorials::TutorialService;
pub use users::{DocumentBroadcast, UserService};
