//! Fallback seed data written when a collection is missing or corrupt.
//!
//! Seeds use fixed timestamps so that repeated seeding is deterministic and
//! snapshot comparisons in tests stay stable.

use chrono::{DateTime, Utc};

use super::enquiry::{Enquiry, EnquiryStatus};
use super::ids::{
    DocumentId, EnquiryId, MessageId, NotificationId, TicketId, TutorialId, UserId,
};
use super::notification::{Notification, NotificationKind};
use super::ticket::{MessageSender, Ticket, TicketMessage, TicketStatus};
use super::tutorial::Tutorial;
use super::user::{Document, SolarSystem, User, UserRole};

const SAMPLE_PDF_URL: &str = "data:application/pdf;base64,JVBERi0xLjQK";
const SAMPLE_IMAGE_URL: &str = "data:image/png;base64,iVBORw0KGgo=";

fn seed_time(value: &str) -> DateTime<Utc> {
    value
        .parse()
        .unwrap_or_else(|err| panic!("invalid seed timestamp '{value}': {err}"))
}

fn seed_id<T>(value: &str) -> T
where
    T: TryFrom<String>,
    T::Error: std::fmt::Display,
{
    T::try_from(value.to_owned())
        .unwrap_or_else(|err| panic!("invalid seed id '{value}': {err}"))
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: seed_id::<UserId>("customer1"),
            role: UserRole::Customer,
            full_name: "John Doe".into(),
            nic_number: "123456789V".into(),
            contact_number: "+94 77 123 4567".into(),
            email: "john.doe@example.com".into(),
            password: Some("password".into()),
            address: "Colombo, Sri Lanka".into(),
            installed_by: "Archnix Solar Tech".into(),
            file_number: "FN-001".into(),
            system: SolarSystem {
                capacity: 5.5,
                inverter_details: "Solis S5-GR1P5K".into(),
                inverter_serial_number: "INV-SN-98765".into(),
                commissioning_date: Some(seed_time("2023-05-15T00:00:00Z")),
            },
            documents: vec![
                Document {
                    id: seed_id::<DocumentId>("doc1"),
                    name: "Signed Agreement.pdf".into(),
                    url: SAMPLE_PDF_URL.into(),
                    uploaded_at: seed_time("2023-05-10T00:00:00Z"),
                },
                Document {
                    id: seed_id::<DocumentId>("doc2"),
                    name: "Warranty Card.pdf".into(),
                    url: SAMPLE_PDF_URL.into(),
                    uploaded_at: seed_time("2023-05-15T00:00:00Z"),
                },
            ],
        },
        User {
            id: seed_id::<UserId>("customer2"),
            role: UserRole::Customer,
            full_name: "Jane Smith".into(),
            nic_number: "987654321V".into(),
            contact_number: "+94 71 987 6543".into(),
            email: "jane.smith@example.com".into(),
            password: Some("password".into()),
            address: "Kandy, Sri Lanka".into(),
            installed_by: "Archnix Solar Tech".into(),
            file_number: "FN-002".into(),
            system: SolarSystem {
                capacity: 8.0,
                inverter_details: "Huawei SUN2000".into(),
                inverter_serial_number: "INV-SN-11223".into(),
                commissioning_date: Some(seed_time("2022-11-20T00:00:00Z")),
            },
            documents: vec![Document {
                id: seed_id::<DocumentId>("doc3"),
                name: "Customer Agreement.pdf".into(),
                url: SAMPLE_PDF_URL.into(),
                uploaded_at: seed_time("2022-11-15T00:00:00Z"),
            }],
        },
        User {
            id: seed_id::<UserId>("admin1"),
            role: UserRole::Admin,
            full_name: "Admin User".into(),
            nic_number: String::new(),
            contact_number: String::new(),
            email: "admin@archnix.com".into(),
            password: None,
            address: String::new(),
            installed_by: String::new(),
            file_number: String::new(),
            system: SolarSystem::none(),
            documents: Vec::new(),
        },
    ]
}

pub fn tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial {
            id: seed_id::<TutorialId>("tut1"),
            title: "How to Read Your Solar Invoice".into(),
            youtube_url: "https://www.youtube.com/embed/dQw4w9WgXcQ".into(),
            created_at: seed_time("2024-05-27T09:00:00Z"),
        },
        Tutorial {
            id: seed_id::<TutorialId>("tut2"),
            title: "Basic Solar Panel Maintenance".into(),
            youtube_url: "https://www.youtube.com/embed/o-YBDTqX_ZU".into(),
            created_at: seed_time("2024-05-30T09:00:00Z"),
        },
        Tutorial {
            id: seed_id::<TutorialId>("tut3"),
            title: "Understanding Your Inverter Lights".into(),
            youtube_url: "https://www.youtube.com/embed/fC7oUOUEEi4".into(),
            created_at: seed_time("2024-06-01T09:00:00Z"),
        },
    ]
}

pub fn tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: seed_id::<TicketId>("ticket1"),
            customer_id: seed_id::<UserId>("customer1"),
            customer_name: "John Doe".into(),
            subject: "Inverter is showing a red light".into(),
            status: TicketStatus::Open,
            created_at: seed_time("2024-05-30T10:00:00Z"),
            complaint_type: "System Not Working".into(),
            photo_urls: vec![SAMPLE_IMAGE_URL.into()],
            messages: vec![TicketMessage {
                id: seed_id::<MessageId>("msg1"),
                sender: MessageSender::Customer,
                text: "My inverter has a constant red light and I am not seeing any \
                       production. Can you please advise?"
                    .into(),
                timestamp: seed_time("2024-05-30T10:00:00Z"),
            }],
        },
        Ticket {
            id: seed_id::<TicketId>("ticket2"),
            customer_id: seed_id::<UserId>("customer1"),
            customer_name: "John Doe".into(),
            subject: "Question about my last bill".into(),
            status: TicketStatus::Closed,
            created_at: seed_time("2024-05-22T10:00:00Z"),
            complaint_type: "Billing Inquiry".into(),
            photo_urls: Vec::new(),
            messages: vec![
                TicketMessage {
                    id: seed_id::<MessageId>("msg2"),
                    sender: MessageSender::Customer,
                    text: "I had a question regarding the breakdown of charges on my \
                           last electricity bill."
                        .into(),
                    timestamp: seed_time("2024-05-22T10:00:00Z"),
                },
                TicketMessage {
                    id: seed_id::<MessageId>("msg3"),
                    sender: MessageSender::Admin,
                    text: "Hi John, thanks for reaching out. We have reviewed your bill \
                           and will send you a detailed explanation via email."
                        .into(),
                    timestamp: seed_time("2024-05-23T10:00:00Z"),
                },
                TicketMessage {
                    id: seed_id::<MessageId>("msg4"),
                    sender: MessageSender::Customer,
                    text: "Thank you!".into(),
                    timestamp: seed_time("2024-05-23T12:00:00Z"),
                },
            ],
        },
        Ticket {
            id: seed_id::<TicketId>("ticket3"),
            customer_id: seed_id::<UserId>("customer2"),
            customer_name: "Jane Smith".into(),
            subject: "Schedule annual maintenance".into(),
            status: TicketStatus::InProgress,
            created_at: seed_time("2024-05-27T10:00:00Z"),
            complaint_type: "General Question".into(),
            photo_urls: Vec::new(),
            messages: vec![
                TicketMessage {
                    id: seed_id::<MessageId>("msg5"),
                    sender: MessageSender::Customer,
                    text: "I'd like to schedule my annual system check-up.".into(),
                    timestamp: seed_time("2024-05-27T10:00:00Z"),
                },
                TicketMessage {
                    id: seed_id::<MessageId>("msg6"),
                    sender: MessageSender::Admin,
                    text: "Hi Jane, our scheduling team will contact you within 24 \
                           hours to arrange a suitable time."
                        .into(),
                    timestamp: seed_time("2024-05-28T10:00:00Z"),
                },
            ],
        },
    ]
}

pub fn enquiries() -> Vec<Enquiry> {
    vec![
        Enquiry {
            id: seed_id::<EnquiryId>("eoi1"),
            name: "Prospective Client A".into(),
            email: "client.a@example.com".into(),
            phone: "+94 77 555 1234".into(),
            submitted_at: seed_time("2024-05-31T09:00:00Z"),
            status: EnquiryStatus::Pending,
        },
        Enquiry {
            id: seed_id::<EnquiryId>("eoi2"),
            name: "Prospective Client B".into(),
            email: "client.b@example.com".into(),
            phone: "+94 71 555 5678".into(),
            submitted_at: seed_time("2024-05-29T09:00:00Z"),
            status: EnquiryStatus::Pending,
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: seed_id::<NotificationId>("noti1"),
            user_id: seed_id::<UserId>("customer1"),
            message: "Welcome to your new portal!".into(),
            kind: NotificationKind::General,
            related_id: None,
            is_read: true,
            created_at: seed_time("2024-05-30T08:00:00Z"),
        },
        Notification {
            id: seed_id::<NotificationId>("noti2"),
            user_id: seed_id::<UserId>("customer1"),
            message: "Your warranty document has been uploaded.".into(),
            kind: NotificationKind::Document,
            related_id: Some("doc2".into()),
            is_read: false,
            created_at: seed_time("2024-05-31T08:00:00Z"),
        },
        Notification {
            id: seed_id::<NotificationId>("noti3"),
            user_id: seed_id::<UserId>("admin1"),
            message: "John Doe created a new ticket.".into(),
            kind: NotificationKind::Ticket,
            related_id: Some("ticket1".into()),
            is_read: true,
            created_at: seed_time("2024-06-01T07:00:00Z"),
        },
        Notification {
            id: seed_id::<NotificationId>("noti4"),
            user_id: seed_id::<UserId>("admin1"),
            message: "A new Expression of Interest was submitted.".into(),
            kind: NotificationKind::Eoi,
            related_id: Some("eoi1".into()),
            is_read: false,
            created_at: seed_time("2024-06-01T08:00:00Z"),
        },
    ]
}
