//! Application facade: one method per user-facing action.
//!
//! Each mutating action performs its primary write through the record
//! services, then (once the write has committed) asks the notifier to fan
//! out notifications. Emission failure never rolls the write back; the
//! returned [`Toast`] reflects the committed state.

use std::sync::Arc;

use mockable::Clock;
use serde::Serialize;
use utoipa::ToSchema;

use super::enquiry::{Enquiry, EnquiryStatus, NewEnquiry};
use super::error::Error;
use super::event::PortalEvent;
use super::ids::{EnquiryId, NotificationId, TicketId, UserId};
use super::notification::{Notification, NotificationKind};
use super::notifier::Notifier;
use super::records::RecordStore;
use super::services::{
    EnquiryService, NotificationService, TicketService, TutorialService, UserService,
};
use super::ticket::{MessageDraft, MessageSender, NewTicket, Ticket, TicketStatus};
use super::tutorial::{Tutorial, TutorialDraft};
use super::user::{Document, NewCustomer, NewDocument, User};
use super::warranty::{warranty_catalogue, WarrantyItem};
use super::DomainResult;

/// Transient confirmation message accompanying a successful action. Never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}

impl Toast {
    fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// A committed action result plus its toast.
#[derive(Debug, Clone)]
pub struct Actioned<T> {
    pub value: T,
    pub toast: Toast,
}

impl<T> Actioned<T> {
    fn new(value: T, toast: Toast) -> Self {
        Self { value, toast }
    }
}

/// Owns the record services and the notifier.
#[derive(Clone)]
pub struct Portal {
    users: UserService,
    tickets: TicketService,
    tutorials: TutorialService,
    enquiries: EnquiryService,
    notifications: NotificationService,
    notifier: Notifier,
}

impl Portal {
    #[must_use]
    pub fn new(records: RecordStore, clock: Arc<dyn Clock>) -> Self {
        let users = UserService::new(records.clone(), clock.clone());
        let notifications = NotificationService::new(records.clone());
        let notifier = Notifier::new(users.clone(), notifications.clone(), clock.clone());
        Self {
            users,
            tickets: TicketService::new(records.clone(), clock.clone()),
            tutorials: TutorialService::new(records.clone(), clock.clone()),
            enquiries: EnquiryService::new(records, clock),
            notifications,
            notifier,
        }
    }

    // Reads.

    pub async fn customers(&self) -> DomainResult<Vec<User>> {
        Ok(self
            .users
            .list()
            .await?
            .into_iter()
            .filter(User::is_customer)
            .collect())
    }

    pub async fn user(&self, id: &UserId) -> DomainResult<User> {
        self.users
            .find(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user '{id}' not found")))
    }

    pub async fn tickets(&self) -> DomainResult<Vec<Ticket>> {
        self.tickets.list().await
    }

    pub async fn ticket(&self, id: &TicketId) -> DomainResult<Ticket> {
        self.tickets
            .find(id)
            .await?
            .ok_or_else(|| Error::not_found(format!("ticket '{id}' not found")))
    }

    pub async fn tickets_for(&self, customer_id: &UserId) -> DomainResult<Vec<Ticket>> {
        self.tickets.list_for_customer(customer_id).await
    }

    pub async fn tutorials(&self) -> DomainResult<Vec<Tutorial>> {
        self.tutorials.list().await
    }

    pub async fn enquiries(&self) -> DomainResult<Vec<Enquiry>> {
        self.enquiries.list().await
    }

    pub async fn notifications_for(&self, user_id: &UserId) -> DomainResult<Vec<Notification>> {
        self.notifications.list_for_user(user_id).await
    }

    #[must_use]
    pub fn warranty(&self) -> Vec<WarrantyItem> {
        warranty_catalogue()
    }

    // Ticket actions.

    pub async fn open_ticket(&self, draft: NewTicket) -> DomainResult<Actioned<Ticket>> {
        let customer = self.user(&draft.customer_id).await?;
        let ticket = self.tickets.add_ticket(draft, &customer).await?;
        self.notifier
            .emit_after_write(&PortalEvent::TicketOpened {
                ticket: ticket.clone(),
            })
            .await;
        Ok(Actioned::new(
            ticket,
            Toast::new(
                "Your ticket has been submitted successfully!",
                NotificationKind::Ticket,
            ),
        ))
    }

    pub async fn reply_to_ticket(
        &self,
        id: &TicketId,
        draft: MessageDraft,
    ) -> DomainResult<Actioned<Ticket>> {
        let sender = draft.sender;
        let ticket = self.tickets.add_message(id, draft).await?;
        let event = match sender {
            MessageSender::Admin => PortalEvent::AdminReplied {
                ticket: ticket.clone(),
            },
            MessageSender::Customer => PortalEvent::CustomerReplied {
                ticket: ticket.clone(),
            },
        };
        self.notifier.emit_after_write(&event).await;
        Ok(Actioned::new(
            ticket,
            Toast::new("Your message has been sent.", NotificationKind::Ticket),
        ))
    }

    pub async fn set_ticket_status(
        &self,
        id: &TicketId,
        status: TicketStatus,
    ) -> DomainResult<Actioned<Ticket>> {
        let ticket = self.tickets.set_status(id, status).await?;
        self.notifier
            .emit_after_write(&PortalEvent::TicketStatusChanged {
                ticket: ticket.clone(),
            })
            .await;
        Ok(Actioned::new(
            ticket,
            Toast::new(
                format!("Ticket status updated to {status}."),
                NotificationKind::Ticket,
            ),
        ))
    }

    // Customer actions.

    pub async fn register_customer(&self, draft: NewCustomer) -> DomainResult<Actioned<User>> {
        let user = self.users.add_customer(draft).await?;
        let toast = Toast::new(
            format!("Customer account for {} created.", user.full_name),
            NotificationKind::General,
        );
        Ok(Actioned::new(user, toast))
    }

    pub async fn update_customer(&self, user: User) -> DomainResult<Actioned<User>> {
        let user = self.users.update(user).await?;
        let toast = Toast::new(
            format!("Customer \"{}\" updated.", user.full_name),
            NotificationKind::General,
        );
        Ok(Actioned::new(user, toast))
    }

    pub async fn remove_customer(&self, id: &UserId) -> DomainResult<Actioned<()>> {
        let name = self.users.find(id).await?.map(|user| user.full_name);
        self.users.remove(id).await?;
        let message = match name {
            Some(name) => format!("Customer \"{name}\" has been deleted."),
            None => "Customer has been deleted.".to_owned(),
        };
        Ok(Actioned::new(
            (),
            Toast::new(message, NotificationKind::General),
        ))
    }

    pub async fn attach_document(
        &self,
        id: &UserId,
        draft: NewDocument,
    ) -> DomainResult<Actioned<(User, Document)>> {
        let (user, document) = self.users.add_document(id, draft).await?;
        self.notifier
            .emit_after_write(&PortalEvent::DocumentAdded {
                user_id: user.id.clone(),
                document_id: document.id.clone(),
                document_name: document.name.clone(),
            })
            .await;
        let toast = Toast::new(
            format!(
                "Document \"{}\" added for {}.",
                document.name, user.full_name
            ),
            NotificationKind::Document,
        );
        Ok(Actioned::new((user, document), toast))
    }

    pub async fn broadcast_document(
        &self,
        draft: NewDocument,
    ) -> DomainResult<Actioned<Vec<User>>> {
        let broadcast = self.users.add_document_to_all_customers(draft).await?;
        self.notifier
            .emit_after_write(&PortalEvent::DocumentBroadcast {
                document_name: broadcast.document_name.clone(),
                copies: broadcast.copies,
            })
            .await;
        let toast = Toast::new(
            format!(
                "\"{}\" was sent to all customers.",
                broadcast.document_name
            ),
            NotificationKind::Document,
        );
        Ok(Actioned::new(broadcast.users, toast))
    }

    // Enquiry actions.

    pub async fn submit_enquiry(&self, draft: NewEnquiry) -> DomainResult<Actioned<Enquiry>> {
        let enquiry = self.enquiries.submit(draft).await?;
        self.notifier
            .emit_after_write(&PortalEvent::EnquirySubmitted {
                enquiry: enquiry.clone(),
            })
            .await;
        Ok(Actioned::new(
            enquiry,
            Toast::new(
                "Your enquiry has been submitted successfully!",
                NotificationKind::Eoi,
            ),
        ))
    }

    /// Approve an enquiry: create the customer account first, then mark
    /// the enquiry approved.
    pub async fn approve_enquiry(
        &self,
        id: &EnquiryId,
        account: NewCustomer,
    ) -> DomainResult<Actioned<(Enquiry, User)>> {
        // Validate the enquiry exists before creating the account, so a bad
        // id does not leave an orphan customer behind.
        if self.enquiries.find(id).await?.is_none() {
            return Err(Error::not_found(format!("enquiry '{id}' not found")));
        }
        let user = self.users.add_customer(account).await?;
        let enquiry = self
            .enquiries
            .set_status(id, EnquiryStatus::Approved)
            .await?;
        let toast = Toast::new(
            format!("Customer account for {} created.", user.full_name),
            NotificationKind::General,
        );
        Ok(Actioned::new((enquiry, user), toast))
    }

    pub async fn reject_enquiry(&self, id: &EnquiryId) -> DomainResult<Actioned<Enquiry>> {
        let enquiry = self
            .enquiries
            .set_status(id, EnquiryStatus::Rejected)
            .await?;
        let toast = Toast::new(
            format!("Enquiry from {} rejected.", enquiry.name),
            NotificationKind::General,
        );
        Ok(Actioned::new(enquiry, toast))
    }

    // Tutorial and notification actions.

    pub async fn replace_tutorials(
        &self,
        drafts: Vec<TutorialDraft>,
    ) -> DomainResult<Actioned<Vec<Tutorial>>> {
        let tutorials = self.tutorials.replace_all(drafts).await?;
        Ok(Actioned::new(
            tutorials,
            Toast::new("Tutorials updated.", NotificationKind::General),
        ))
    }

    pub async fn mark_notification_read(&self, id: &NotificationId) -> DomainResult<()> {
        self.notifications.mark_read(id).await
    }

    pub async fn mark_all_notifications_read(&self, user_id: &UserId) -> DomainResult<()> {
        self.notifications.mark_all_read(user_id).await
    }
}
