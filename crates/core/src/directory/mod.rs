//! CRM directory records.
//!
//! The directory holds two kinds of people: [`Member`]s (paying clients)
//! and [`Lead`]s (prospects). Both carry a name and an email, which is all
//! the search [`filter`] looks at, so the filter is written once against the
//! [`DirectoryRecord`] trait and works for either collection.
//!
//! Records are immutable sample data; nothing here creates, updates or
//! deletes them.

mod filter;

pub use filter::{filter, matches};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Email, LeadId, LeadStatus, MemberId, MemberStatus, Price};

/// Anything the directory search can match against.
pub trait DirectoryRecord {
    /// Full display name.
    fn name(&self) -> &str;

    /// Contact email address.
    fn email(&self) -> &str;
}

impl<T: DirectoryRecord + ?Sized> DirectoryRecord for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn email(&self) -> &str {
        (**self).email()
    }
}

/// A studio member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub status: MemberStatus,
    /// Plan name, e.g. `Basic` or `Premium`.
    pub membership_type: String,
    pub join_date: NaiveDate,
    pub total_spent: Price,
    pub last_visit: NaiveDate,
}

impl DirectoryRecord for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// A prospective member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub status: LeadStatus,
    /// Where the lead came from, e.g. `Instagram` or `Referral`.
    pub source: String,
    /// What the lead asked about, e.g. `Yoga Classes`.
    pub interest: String,
    pub created_at: NaiveDate,
}

impl DirectoryRecord for Lead {
    fn name(&self) -> &str {
        &self.name
    }

    fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Either kind of directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DirectoryEntry {
    Member(Member),
    Lead(Lead),
}

impl DirectoryRecord for DirectoryEntry {
    fn name(&self) -> &str {
        match self {
            Self::Member(member) => member.name(),
            Self::Lead(lead) => lead.name(),
        }
    }

    fn email(&self) -> &str {
        match self {
            Self::Member(member) => member.email(),
            Self::Lead(lead) => lead.email(),
        }
    }
}

impl From<Member> for DirectoryEntry {
    fn from(member: Member) -> Self {
        Self::Member(member)
    }
}

impl From<Lead> for DirectoryEntry {
    fn from(lead: Lead) -> Self {
        Self::Lead(lead)
    }
}
