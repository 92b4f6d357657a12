//! Domain entities, services, and the application facade.
//!
//! Purpose: define the strongly typed portal model (users, tickets,
//! tutorials, enquiries, notifications) and the services that mutate it
//! through the [`ports::CollectionStore`] seam. Types stay transport and
//! framework agnostic; inbound adapters map them to DTOs.

pub mod enquiry;
pub mod error;
pub mod event;
pub mod ids;
pub mod notification;
pub mod notifier;
pub mod portal;
pub mod ports;
pub mod records;
pub mod seed;
pub mod services;
pub mod ticket;
pub mod tutorial;
pub mod user;
pub mod warranty;

pub use self::enquiry::{Enquiry, EnquiryStatus, NewEnquiry};
pub use self::error::{Error, ErrorCode};
pub use self::event::{PortalEvent, derive_notifications};
pub use self::ids::{
    DocumentId, EnquiryId, IdValidationError, MessageId, NotificationId, TicketId, TutorialId,
    UserId,
};
pub use self::notification::{Notification, NotificationKind};
pub use self::notifier::Notifier;
pub use self::portal::{Actioned, Portal, Toast};
pub use self::records::RecordStore;
pub use self::services::{
    DocumentBroadcast, EnquiryService, NotificationService, TicketService, TutorialService,
    UserService,
};
pub use self::ticket::{MessageDraft, MessageSender, NewTicket, Ticket, TicketMessage, TicketStatus};
pub use self::tutorial::{Tutorial, TutorialDraft};
pub use self::user::{Document, NewCustomer, NewDocument, SolarSystem, User, UserRole};
pub use self::warranty::{WarrantyItem, warranty_catalogue};

/// Convenient result alias for domain operations.
pub type DomainResult<T> = Result<T, Error>;
