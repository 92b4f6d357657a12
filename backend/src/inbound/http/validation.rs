//! Request-boundary validation helpers.

use serde_json::json;

use crate::domain::{Error, IdValidationError, TicketStatus};

/// Parse a path segment into an entity id, reporting the offending field
/// on failure.
pub fn parse_id<T>(raw: String, field: &str) -> Result<T, Error>
where
    T: TryFrom<String, Error = IdValidationError>,
{
    T::try_from(raw).map_err(|err| {
        Error::invalid_request(format!("{field} is not a valid id: {err}"))
            .with_details(json!({ "field": field }))
    })
}

/// Parse a client-supplied ticket status label.
pub fn parse_ticket_status(raw: &str) -> Result<TicketStatus, Error> {
    raw.parse().map_err(|_| {
        Error::invalid_request(format!("'{raw}' is not a valid ticket status"))
            .with_details(json!({
                "field": "status",
                "allowed": ["Open", "In Progress", "Closed"],
            }))
    })
}

/// Reject blank required string fields.
pub fn require_non_blank(value: &str, field: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(
            Error::invalid_request(format!("{field} must not be empty"))
                .with_details(json!({ "field": field })),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::{ErrorCode, UserId};

    #[test]
    fn parse_id_accepts_well_formed_input() {
        let id: UserId = parse_id("customer1".to_owned(), "userId").expect("valid id");
        assert_eq!(id.as_str(), "customer1");
    }

    #[test]
    fn parse_id_reports_the_field_name() {
        let err = parse_id::<UserId>("  ".to_owned(), "userId").expect_err("should fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details present");
        assert_eq!(details["field"], "userId");
    }

    #[rstest]
    #[case("Open", TicketStatus::Open)]
    #[case("In Progress", TicketStatus::InProgress)]
    #[case("Closed", TicketStatus::Closed)]
    fn parse_ticket_status_accepts_canonical_labels(
        #[case] raw: &str,
        #[case] expected: TicketStatus,
    ) {
        assert_eq!(parse_ticket_status(raw).expect("valid status"), expected);
    }

    #[test]
    fn parse_ticket_status_lists_allowed_values_on_failure() {
        let err = parse_ticket_status("Reopened").expect_err("should fail");
        let details = err.details().expect("details present");
        assert_eq!(details["allowed"][1], "In Progress");
    }

    #[test]
    fn require_non_blank_rejects_whitespace() {
        let err = require_non_blank(" \t", "subject").expect_err("should fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
