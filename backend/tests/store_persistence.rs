//! Behavioural tests for the file-backed collection store.
//!
//! These run the record layer over a real [`JsonFileStore`] in a temporary
//! directory, covering first-run seeding, survival across a restart, and
//! recovery from a corrupt document.

use std::sync::Arc;

use backend::domain::{seed, NewTicket, Portal, RecordStore, Ticket, User};
use backend::outbound::persistence::JsonFileStore;
use backend::test_support::cap_fs;
use mockable::DefaultClock;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> RecordStore {
    let store = JsonFileStore::open(dir.path()).expect("open store");
    RecordStore::new(Arc::new(store))
}

fn portal(dir: &TempDir) -> Portal {
    Portal::new(file_store(dir), Arc::new(DefaultClock))
}

#[tokio::test]
async fn first_load_seeds_the_collection_and_writes_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");

    let customers = portal(&dir).customers().await.expect("list customers");
    assert_eq!(customers.len(), 2);

    let users_file = dir.path().join("users.json");
    assert!(cap_fs::path_exists(&users_file));
    let on_disk: Vec<User> =
        serde_json::from_str(&cap_fs::read_file_to_string(&users_file).expect("read users.json"))
            .expect("decode users.json");
    assert_eq!(on_disk, seed::users());
}

#[tokio::test]
async fn writes_survive_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let opened = portal(&dir)
        .open_ticket(NewTicket {
            subject: "Panel cleaning request".into(),
            message: "Could you schedule a cleaning visit?".into(),
            customer_id: "customer2".to_owned().try_into().expect("valid id"),
            complaint_type: "General Question".into(),
            photo_urls: Vec::new(),
        })
        .await
        .expect("open ticket");

    // A fresh store over the same directory sees the committed write.
    let reopened = portal(&dir);
    let ticket = reopened
        .ticket(&opened.value.id)
        .await
        .expect("find ticket after restart");
    assert_eq!(ticket, opened.value);

    // The notification fan-out persisted too.
    let admin_feed = reopened
        .notifications_for(&"admin1".to_owned().try_into().expect("valid id"))
        .await
        .expect("list notifications");
    assert_eq!(
        admin_feed[0].message,
        "New ticket from Jane Smith: \"Panel cleaning request\""
    );
}

#[tokio::test]
async fn corrupt_collection_is_reseeded_in_place() {
    let dir = tempfile::tempdir().expect("tempdir");
    let tickets_file = dir.path().join("tickets.json");
    cap_fs::write_file(&tickets_file, b"{not json").expect("plant corrupt file");

    let tickets = portal(&dir).tickets().await.expect("list tickets");
    assert_eq!(tickets, seed::tickets());

    // The damaged document was replaced with a decodable one.
    let on_disk: Vec<Ticket> = serde_json::from_str(
        &cap_fs::read_file_to_string(&tickets_file).expect("read tickets.json"),
    )
    .expect("decode rewritten tickets.json");
    assert_eq!(on_disk, seed::tickets());
}

#[tokio::test]
async fn enquiries_keep_their_historical_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");

    portal(&dir).enquiries().await.expect("list enquiries");

    assert!(cap_fs::path_exists(
        &dir.path().join("expressions_of_interest.json")
    ));
    assert!(!cap_fs::path_exists(&dir.path().join("enquiries.json")));
}

#[tokio::test]
async fn staged_write_files_never_linger() {
    let dir = tempfile::tempdir().expect("tempdir");
    let portal = portal(&dir);

    portal.customers().await.expect("seed users");
    portal.tickets().await.expect("seed tickets");
    portal
        .mark_all_notifications_read(&"customer1".to_owned().try_into().expect("valid id"))
        .await
        .expect("mark all read");

    let names = cap_fs::list_file_names(dir.path()).expect("list data dir");
    assert!(
        names.iter().all(|name| !name.starts_with(".tmp-")),
        "staged files left behind: {names:?}"
    );
}
