use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::AppError;

/// Portal role. Every role-dependent branch in the app matches on this
/// exhaustively, so a new role surfaces as a compile error at each site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

/// All roles in login-selector order.
pub const ALL_ROLES: &[Role] = &[Role::Student, Role::Teacher, Role::Admin];

impl Role {
    /// Lowercase string used in persisted storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Parse a stored or user-supplied role string. Exact lowercase match only.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            other => Err(AppError::invalid_role(other)),
        }
    }

    /// Label shown on the login role selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Student => "Студент",
            Role::Teacher => "Преподаватель",
            Role::Admin => "Админ",
        }
    }

    /// Caption under the brand name in the shell sidebar.
    pub fn portal_caption(&self) -> &'static str {
        match self {
            Role::Student => "Студент",
            Role::Teacher => "Преподаватель",
            Role::Admin => "Admin Portal",
        }
    }

    /// Where a session of this role lands after login or a role mismatch.
    pub fn landing(&self) -> Landing {
        match self {
            Role::Student => Landing::StudentHome,
            Role::Teacher => Landing::TeacherHome,
            Role::Admin => Landing::AdminHome,
        }
    }

    /// Demo account prefilled in the login form.
    pub fn demo_email(&self) -> &'static str {
        match self {
            Role::Student => "29402@iitu.edu.kz",
            Role::Teacher => "teacher@iitu.edu.kz",
            Role::Admin => "admin@iitu.edu.kz",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

/// Redirect targets the guard can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Login,
    StudentHome,
    TeacherHome,
    AdminHome,
}

impl Landing {
    pub fn path(&self) -> &'static str {
        match self {
            Landing::Login => "/login",
            Landing::StudentHome => "/",
            Landing::TeacherHome => "/teacher",
            Landing::AdminHome => "/admin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    #[test]
    fn as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()).unwrap(), *role);
        }
    }

    #[test]
    fn parse_rejects_unknown_and_case_variants() {
        for raw in ["", "none", "Student", "ADMIN", "dean", " teacher"] {
            let err = Role::parse(raw).unwrap_err();
            assert_eq!(err.kind, AppErrorKind::InvalidRole);
        }
    }

    #[test]
    fn landing_paths_per_role() {
        assert_eq!(Role::Student.landing().path(), "/");
        assert_eq!(Role::Teacher.landing().path(), "/teacher");
        assert_eq!(Role::Admin.landing().path(), "/admin");
        assert_eq!(Landing::Login.path(), "/login");
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn from_str_delegates_to_parse() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert!("guest".parse::<Role>().is_err());
    }
}
