//! Portal events and the pure notification-derivation rules.
//!
//! `derive_notifications` turns one event into the batch of notifications
//! it implies, given the current user collection. It is deliberately pure:
//! the [`crate::domain::Notifier`] supplies users and the timestamp and
//! persists the result.

use chrono::{DateTime, Utc};

use super::enquiry::Enquiry;
use super::ids::{DocumentId, NotificationId, UserId};
use super::notification::{Notification, NotificationKind};
use super::ticket::Ticket;
use super::user::User;

/// A domain occurrence that may fan out into notifications.
#[derive(Debug, Clone)]
pub enum PortalEvent {
    /// A customer opened a new ticket.
    TicketOpened { ticket: Ticket },
    /// An admin posted a reply on a ticket.
    AdminReplied { ticket: Ticket },
    /// The ticket's customer posted a reply.
    CustomerReplied { ticket: Ticket },
    /// An admin moved a ticket to a new status.
    TicketStatusChanged { ticket: Ticket },
    /// A document was attached to a single user.
    DocumentAdded {
        user_id: UserId,
        document_id: DocumentId,
        document_name: String,
    },
    /// A document was attached to every customer.
    DocumentBroadcast {
        document_name: String,
        copies: Vec<(UserId, DocumentId)>,
    },
    /// A prospective customer submitted an enquiry.
    EnquirySubmitted { enquiry: Enquiry },
}

/// Derive the notification batch an event implies.
///
/// Recipients that do not appear in `users` are skipped rather than
/// producing orphan notifications.
#[must_use]
pub fn derive_notifications(
    event: &PortalEvent,
    users: &[User],
    now: DateTime<Utc>,
) -> Vec<Notification> {
    match event {
        PortalEvent::TicketOpened { ticket } => to_admins(
            users,
            format!(
                "New ticket from {}: \"{}\"",
                ticket.customer_name, ticket.subject
            ),
            NotificationKind::Ticket,
            Some(ticket.id.to_string()),
            now,
        ),
        PortalEvent::AdminReplied { ticket } => to_user(
            users,
            &ticket.customer_id,
            format!("An admin replied to your ticket: \"{}\"", ticket.subject),
            NotificationKind::Ticket,
            Some(ticket.id.to_string()),
            now,
        ),
        PortalEvent::CustomerReplied { ticket } => {
            let author = users
                .iter()
                .find(|user| user.id == ticket.customer_id)
                .map_or("A customer", |user| user.full_name.as_str());
            to_admins(
                users,
                format!("{author} replied to ticket: \"{}\"", ticket.subject),
                NotificationKind::Ticket,
                Some(ticket.id.to_string()),
                now,
            )
        }
        PortalEvent::TicketStatusChanged { ticket } => to_user(
            users,
            &ticket.customer_id,
            format!(
                "The status of your ticket \"{}\" was updated to {}.",
                ticket.subject, ticket.status
            ),
            NotificationKind::Ticket,
            Some(ticket.id.to_string()),
            now,
        ),
        PortalEvent::DocumentAdded {
            user_id,
            document_id,
            document_name,
        } => to_user(
            users,
            user_id,
            format!("A new document \"{document_name}\" was added to your profile."),
            NotificationKind::Document,
            Some(document_id.to_string()),
            now,
        ),
        PortalEvent::DocumentBroadcast {
            document_name,
            copies,
        } => copies
            .iter()
            .filter(|(user_id, _)| users.iter().any(|user| &user.id == user_id))
            .map(|(user_id, document_id)| {
                notification(
                    user_id.clone(),
                    format!("A new document \"{document_name}\" was added to your profile."),
                    NotificationKind::Document,
                    Some(document_id.to_string()),
                    now,
                )
            })
            .collect(),
        PortalEvent::EnquirySubmitted { enquiry } => to_admins(
            users,
            format!("New access enquiry from {}.", enquiry.name),
            NotificationKind::Eoi,
            Some(enquiry.id.to_string()),
            now,
        ),
    }
}

fn to_admins(
    users: &[User],
    message: String,
    kind: NotificationKind,
    related_id: Option<String>,
    now: DateTime<Utc>,
) -> Vec<Notification> {
    users
        .iter()
        .filter(|user| user.is_admin())
        .map(|admin| {
            notification(
                admin.id.clone(),
                message.clone(),
                kind,
                related_id.clone(),
                now,
            )
        })
        .collect()
}

fn to_user(
    users: &[User],
    recipient: &UserId,
    message: String,
    kind: NotificationKind,
    related_id: Option<String>,
    now: DateTime<Utc>,
) -> Vec<Notification> {
    if !users.iter().any(|user| &user.id == recipient) {
        return Vec::new();
    }
    vec![notification(recipient.clone(), message, kind, related_id, now)]
}

fn notification(
    user_id: UserId,
    message: String,
    kind: NotificationKind,
    related_id: Option<String>,
    now: DateTime<Utc>,
) -> Notification {
    Notification {
        id: NotificationId::generate(),
        user_id,
        message,
        kind,
        related_id,
        is_read: false,
        created_at: now,
    }
}
