//! Role-specific identity records.
//!
//! The backend embeds one of these in every token payload and returns the
//! same shape from the login and who-am-i endpoints. The `role` tag selects
//! the profile variant.

use serde::{Deserialize, Serialize};

use crate::roles::Role;
use crate::types::DbId;

/// Profile embedded in admin tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// Profile embedded in teacher tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Teaching department, when the backend has one on record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Profile embedded in student tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Enrolled class, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Profile embedded in clerk tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClerkProfile {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

/// The identity record decoded from a token payload or an auth response.
///
/// Internally tagged on `"role"`, so the wire shape is flat:
/// `{"role": "admin", "id": 7, "name": "...", "email": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Identity {
    Admin(AdminProfile),
    Teacher(TeacherProfile),
    Student(StudentProfile),
    Clerk(ClerkProfile),
}

impl Identity {
    /// The role this identity belongs to.
    pub fn role(&self) -> Role {
        match self {
            Identity::Admin(_) => Role::Admin,
            Identity::Teacher(_) => Role::Teacher,
            Identity::Student(_) => Role::Student,
            Identity::Clerk(_) => Role::Clerk,
        }
    }

    /// The backend entity id of the underlying profile.
    pub fn id(&self) -> DbId {
        match self {
            Identity::Admin(p) => p.id,
            Identity::Teacher(p) => p.id,
            Identity::Student(p) => p.id,
            Identity::Clerk(p) => p.id,
        }
    }

    /// Human-readable name for greetings and logs.
    pub fn display_name(&self) -> &str {
        match self {
            Identity::Admin(p) => &p.name,
            Identity::Teacher(p) => &p.name,
            Identity::Student(p) => &p.name,
            Identity::Clerk(p) => &p.name,
        }
    }

    /// Email address on record.
    pub fn email(&self) -> &str {
        match self {
            Identity::Admin(p) => &p.email,
            Identity::Teacher(p) => &p.email,
            Identity::Student(p) => &p.email,
            Identity::Clerk(p) => &p.email,
        }
    }
}
