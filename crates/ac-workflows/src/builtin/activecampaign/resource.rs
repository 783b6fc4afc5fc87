//! Resource and operation selectors

use ac_core::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Contact,
    Deal,
    Connection,
    EcommerceOrder,
    EcommerceCustomer,
    EcommerceOrderProducts,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Contact,
        Resource::Deal,
        Resource::Connection,
        Resource::EcommerceOrder,
        Resource::EcommerceCustomer,
        Resource::EcommerceOrderProducts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Contact => "contact",
            Resource::Deal => "deal",
            Resource::Connection => "connection",
            Resource::EcommerceOrder => "ecommerceOrder",
            Resource::EcommerceCustomer => "ecommerceCustomer",
            Resource::EcommerceOrderProducts => "ecommerceOrderProducts",
        }
    }

    /// Operations offered for this resource, default first
    pub fn operations(&self) -> &'static [Operation] {
        use Operation::*;
        match self {
            Resource::Contact => &[Create, Delete, Get, GetAll, Update],
            Resource::Deal => &[Create, Delete, Get, GetAll, Update, CreateNote, UpdateNote],
            Resource::Connection
            | Resource::EcommerceOrder
            | Resource::EcommerceCustomer => &[Create, Delete, Get, GetAll, Update],
            Resource::EcommerceOrderProducts => &[GetAll, GetByProductId, GetByOrderId],
        }
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.operations().contains(&operation)
    }

    /// Parse an operation string, rejecting ones this resource does not offer
    pub fn operation(&self, operation: &str) -> Result<Operation> {
        operation
            .parse::<Operation>()
            .ok()
            .filter(|op| self.supports(*op))
            .ok_or_else(|| Error::unknown_operation(operation))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::unknown_resource(s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Delete,
    Get,
    GetAll,
    Update,
    CreateNote,
    UpdateNote,
    GetByProductId,
    GetByOrderId,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Create,
        Operation::Delete,
        Operation::Get,
        Operation::GetAll,
        Operation::Update,
        Operation::CreateNote,
        Operation::UpdateNote,
        Operation::GetByProductId,
        Operation::GetByOrderId,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Delete => "delete",
            Operation::Get => "get",
            Operation::GetAll => "getAll",
            Operation::Update => "update",
            Operation::CreateNote => "createNote",
            Operation::UpdateNote => "updateNote",
            Operation::GetByProductId => "getByProductId",
            Operation::GetByOrderId => "getByOrderId",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Error::unknown_operation(s))
    }
}
