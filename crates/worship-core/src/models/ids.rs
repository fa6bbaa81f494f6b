// ABOUTME: Type-safe identifier newtypes for church domain entities
// ABOUTME: String-backed ids matching document-store keys (users, tenants, songs, plans, events)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Worship Planner Contributors

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares a transparent string-backed id with the conversions shared by all entity ids.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw document key
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw document key
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identity-provider user id
    UserId
}

string_id! {
    /// Church (tenant) id; all membership and plan data is scoped to one tenant
    TenantId
}

string_id! {
    /// Song catalog id
    SongId
}

string_id! {
    /// Service plan id, unique within its tenant
    PlanId
}

string_id! {
    /// Set-list id
    SetListId
}

string_id! {
    /// Calendar event id
    EventId
}

impl PlanId {
    /// Generate a fresh plan id for a newly seeded plan
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
