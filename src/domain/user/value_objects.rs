use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Returns
    /// * `Ok(Email)` - If email is valid
    /// * `Err(String)` - If email is invalid
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Access level assigned to an account, validated at creation time only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    MasterAdmin,
    SuperAdmin,
    ShowroomManager,
    SalesOperator,
}

impl Role {
    /// All roles an account may be created with
    pub const ALL: [Role; 4] = [
        Role::MasterAdmin,
        Role::SuperAdmin,
        Role::ShowroomManager,
        Role::SalesOperator,
    ];

    /// Returns the role's wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::MasterAdmin => "MasterAdmin",
            Role::SuperAdmin => "SuperAdmin",
            Role::ShowroomManager => "ShowroomManager",
            Role::SalesOperator => "SalesOperator",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Please provide valid role {}",
                    Role::ALL.map(|role| role.as_str()).join("||")
                )
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
