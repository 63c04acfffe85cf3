use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One guest-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: u64,
    pub name: String,
    /// Missing or blank email makes the guest ineligible for invitations.
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub party: GuestParty,
    #[serde(default)]
    pub rsvp: RsvpStatus,
    #[serde(default)]
    pub plus_ones: u8,
    /// Set by the backend once an invitation email went out.
    #[serde(default)]
    pub invited_at: Option<DateTime<Utc>>,
}

impl Guest {
    /// Bulk-selection eligibility: a stable id is guaranteed by the backend,
    /// so only the contact address gates it.
    pub fn is_invitable(&self) -> bool {
        self.email
            .as_deref()
            .is_some_and(|email| !email.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    #[default]
    Pending,
    Attending,
    Declined,
}

impl RsvpStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Attending => "Attending",
            Self::Declined => "Declined",
        }
    }
}

/// Which side of the aisle invited the guest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestParty {
    Bride,
    Groom,
    #[default]
    Shared,
}

impl GuestParty {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bride => "Bride",
            Self::Groom => "Groom",
            Self::Shared => "Shared",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGuestsResponse {
    pub guests: Vec<Guest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuestRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub party: GuestParty,
    pub plus_ones: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGuestRequest {
    pub name: String,
    pub email: Option<String>,
    pub party: GuestParty,
    pub plus_ones: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendInvitationsRequest {
    pub guest_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendInvitationsResponse {
    /// How many invitation emails actually went out.
    pub sent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_email_is_not_invitable() {
        let mut guest = Guest {
            id: 1,
            name: "Ada".to_owned(),
            email: Some("  ".to_owned()),
            party: GuestParty::Shared,
            rsvp: RsvpStatus::Pending,
            plus_ones: 0,
            invited_at: None,
        };
        assert!(!guest.is_invitable());

        guest.email = None;
        assert!(!guest.is_invitable());

        guest.email = Some("ada@example.com".to_owned());
        assert!(guest.is_invitable());
    }

    #[test]
    fn test_guest_deserializes_with_defaults() {
        let guest: Guest = serde_json::from_str(r#"{"id": 3, "name": "Grace"}"#).unwrap();
        assert_eq!(guest.rsvp, RsvpStatus::Pending);
        assert_eq!(guest.party, GuestParty::Shared);
        assert_eq!(guest.plus_ones, 0);
        assert!(guest.email.is_none());
    }
}
