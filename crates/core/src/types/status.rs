//! Status enums for directory records, campaigns and admin users.
//!
//! Serialized names match the labels shown in the dashboard (`"Active"`,
//! `"Social Media"`, ...), so sample data files read naturally.

use serde::{Deserialize, Serialize};

/// Implements `as_str`, `Display` and `FromStr` from one label table.
macro_rules! labelled_enum {
    ($name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Display label, identical to the serialized form.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", stringify!($name), ": {}"), s)),
                }
            }
        }
    };
}

/// Membership status of a studio member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
}

labelled_enum!(MemberStatus {
    Active => "Active",
    Inactive => "Inactive",
});

/// Pipeline stage of a sales lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Scheduled,
}

labelled_enum!(LeadStatus {
    New => "New",
    Contacted => "Contacted",
    Scheduled => "Scheduled",
});

/// Lifecycle state of a marketing campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
}

labelled_enum!(CampaignStatus {
    Draft => "Draft",
    Active => "Active",
    Paused => "Paused",
    Completed => "Completed",
});

/// Channel a marketing campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignChannel {
    Email,
    #[serde(rename = "Social Media")]
    SocialMedia,
}

labelled_enum!(CampaignChannel {
    Email => "Email",
    SocialMedia => "Social Media",
});

/// Admin role. The dashboard has a single administrator role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    #[default]
    Admin,
}

labelled_enum!(AdminRole {
    Admin => "admin",
});
