//! The four login roles recognized by the backend.
//!
//! Each role has its own login route, REST namespace, and session storage
//! keys; the role name doubles as the wire string in all three places.

use serde::{Deserialize, Serialize};

/// A login role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
    Clerk,
}

impl Role {
    /// All roles, in display order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Teacher, Role::Student, Role::Clerk];

    /// The lowercase wire name (`"admin"`, `"teacher"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
            Role::Clerk => "clerk",
        }
    }

    /// Route the client navigates to when this role's session is invalid.
    pub fn login_path(self) -> String {
        format!("/{}/login", self.as_str())
    }

    /// Path segment used in backend REST URLs (`/api/<segment>/...`).
    pub fn api_segment(self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_round_trip() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).expect("role should serialize");
            assert_eq!(json, format!("\"{}\"", role.as_str()));

            let back: Role = serde_json::from_str(&json).expect("role should deserialize");
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_login_paths_are_role_specific() {
        assert_eq!(Role::Admin.login_path(), "/admin/login");
        assert_eq!(Role::Teacher.login_path(), "/teacher/login");
        assert_eq!(Role::Student.login_path(), "/student/login");
        assert_eq!(Role::Clerk.login_path(), "/clerk/login");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"principal\"");
        assert!(result.is_err(), "unknown role names must not deserialize");
    }
}
