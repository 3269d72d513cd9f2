//! The [`User`] capability and its three role implementations.

use super::UserError;
use std::fmt::{self, Debug, Display};
use std::io::{self, Write};
use std::str::FromStr;

/// The closed set of roles the factory can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    Client,
    Admin,
    Operator,
}

impl UserKind {
    pub const ALL: [UserKind; 3] = [UserKind::Client, UserKind::Admin, UserKind::Operator];

    /// The lowercase discriminator that selects this kind.
    pub fn key(self) -> &'static str {
        match self {
            UserKind::Client => "cliente",
            UserKind::Admin => "admin",
            UserKind::Operator => "operador",
        }
    }
}

impl Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Case-insensitive lookup over [`UserKind::key`]. Anything else is rejected.
impl FromStr for UserKind {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        UserKind::ALL
            .into_iter()
            .find(|kind| kind.key() == wanted)
            .ok_or_else(|| UserError::InvalidArgument(s.to_string()))
    }
}

/// A role-bearing user with a single access capability.
pub trait User: Debug {
    fn kind(&self) -> UserKind;

    /// One-line description of what this role may do.
    fn describe_access(&self) -> &'static str;

    fn access(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.describe_access())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Client;

#[derive(Debug, Clone, Copy, Default)]
pub struct Admin;

#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;

impl User for Client {
    fn kind(&self) -> UserKind {
        UserKind::Client
    }

    fn describe_access(&self) -> &'static str {
        "Cliente: puede comprar productos."
    }
}

impl User for Admin {
    fn kind(&self) -> UserKind {
        UserKind::Admin
    }

    fn describe_access(&self) -> &'static str {
        "Admin: puede gestionar el sistema."
    }
}

impl User for Operator {
    fn kind(&self) -> UserKind {
        UserKind::Operator
    }

    fn describe_access(&self) -> &'static str {
        "Operador: puede supervisar operaciones."
    }
}
