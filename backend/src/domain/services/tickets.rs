//! Support ticket records: creation, replies, and status transitions.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::error::Error;
use crate::domain::ids::{MessageId, TicketId, UserId};
use crate::domain::ports::CollectionKey;
use crate::domain::records::RecordStore;
use crate::domain::seed;
use crate::domain::ticket::{
    MessageDraft, NewTicket, Ticket, TicketMessage, TicketStatus,
};
use crate::domain::user::User;
use crate::domain::DomainResult;

/// CRUD over the ticket collection.
#[derive(Clone)]
pub struct TicketService {
    records: RecordStore,
    clock: Arc<dyn Clock>,
}

impl TicketService {
    #[must_use]
    pub fn new(records: RecordStore, clock: Arc<dyn Clock>) -> Self {
        Self { records, clock }
    }

    pub async fn list(&self) -> DomainResult<Vec<Ticket>> {
        self.records
            .load_or_seed(CollectionKey::Tickets, seed::tickets)
            .await
    }

    pub async fn find(&self, id: &TicketId) -> DomainResult<Option<Ticket>> {
        Ok(self.list().await?.into_iter().find(|ticket| &ticket.id == id))
    }

    /// Open a new ticket for `customer`, newest first in the collection.
    ///
    /// The draft's message becomes the ticket's first entry, attributed to
    /// the customer. The caller resolves the customer record so the stored
    /// `customerName` always matches an existing account.
    pub async fn add_ticket(&self, draft: NewTicket, customer: &User) -> DomainResult<Ticket> {
        if customer.id != draft.customer_id {
            return Err(Error::invalid_request(format!(
                "ticket draft addressed to '{}' but resolved user is '{}'",
                draft.customer_id, customer.id
            )));
        }
        let now = self.clock.utc();
        let ticket = Ticket {
            id: TicketId::generate(),
            customer_id: draft.customer_id,
            customer_name: customer.full_name.clone(),
            subject: draft.subject,
            status: TicketStatus::Open,
            created_at: now,
            complaint_type: draft.complaint_type,
            photo_urls: draft.photo_urls,
            messages: vec![TicketMessage {
                id: MessageId::generate(),
                sender: crate::domain::ticket::MessageSender::Customer,
                text: draft.message,
                timestamp: now,
            }],
        };
        let mut tickets = self.list().await?;
        tickets.insert(0, ticket.clone());
        self.records.save(CollectionKey::Tickets, &tickets).await?;
        Ok(ticket)
    }

    /// Append a message to an existing ticket.
    pub async fn add_message(
        &self,
        id: &TicketId,
        draft: MessageDraft,
    ) -> DomainResult<Ticket> {
        self.mutate(id, |ticket, now| {
            ticket.messages.push(TicketMessage {
                id: MessageId::generate(),
                sender: draft.sender,
                text: draft.text,
                timestamp: now,
            });
        })
        .await
    }

    /// Replace a ticket's status, leaving everything else untouched.
    pub async fn set_status(
        &self,
        id: &TicketId,
        status: TicketStatus,
    ) -> DomainResult<Ticket> {
        self.mutate(id, |ticket, _| ticket.status = status).await
    }

    /// Tickets belonging to one customer, preserving stored order.
    pub async fn list_for_customer(&self, customer_id: &UserId) -> DomainResult<Vec<Ticket>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|ticket| &ticket.customer_id == customer_id)
            .collect())
    }

    async fn mutate(
        &self,
        id: &TicketId,
        apply: impl FnOnce(&mut Ticket, chrono::DateTime<chrono::Utc>),
    ) -> DomainResult<Ticket> {
        let mut tickets = self.list().await?;
        let slot = tickets
            .iter_mut()
            .find(|ticket| &ticket.id == id)
            .ok_or_else(|| Error::not_found(format!("ticket '{id}' not found")))?;
        apply(slot, self.clock.utc());
        let ticket = slot.clone();
        self.records.save(CollectionKey::Tickets, &tickets).await?;
        Ok(ticket)
    }
}
