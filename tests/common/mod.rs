//! Shared fixtures for the integration test suites.
//!
//! Import via `mod common;` from any test file. The fixture types stand in
//! for application domain objects: the core never sees them except through
//! the `Reconstructible` contract.

#![allow(dead_code)]

use blueprint::{
    ConstructorSignature, ConvertError, Parameter, Reconstructible, Result, Value, ValueType,
};

/// Plain convertible fixture: no argument-value validation.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

impl Reconstructible for User {
    fn signature() -> ConstructorSignature {
        ConstructorSignature::new(
            "User",
            vec![
                Parameter::new("id", ValueType::Int),
                Parameter::new("username", ValueType::Str),
                Parameter::new("email", ValueType::Str),
            ],
        )
    }

    fn arguments(&self) -> Vec<Value> {
        vec![
            Value::Int(self.id),
            Value::Str(self.username.clone()),
            Value::Str(self.email.clone()),
        ]
    }

    fn construct(arguments: &[Value]) -> Result<Self> {
        let signature = Self::signature();
        Ok(User {
            id: int_at(&signature, arguments, 0, "id")?,
            username: str_at(&signature, arguments, 1, "username")?,
            email: str_at(&signature, arguments, 2, "email")?,
        })
    }
}

/// Validating convertible fixture: the constructor rejects bad values.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub email: String,
}

impl Account {
    /// Validating constructor: ids are non-negative, emails contain `@`.
    pub fn new(id: i64, email: impl Into<String>) -> std::result::Result<Self, String> {
        let email = email.into();
        if id < 0 {
            return Err(format!("negative account id: {id}"));
        }
        if !email.contains('@') {
            return Err(format!("invalid email: {email:?}"));
        }
        Ok(Self { id, email })
    }
}

impl Reconstructible for Account {
    fn signature() -> ConstructorSignature {
        ConstructorSignature::new(
            "Account",
            vec![
                Parameter::new("id", ValueType::Int),
                Parameter::new("email", ValueType::Str),
            ],
        )
    }

    fn arguments(&self) -> Vec<Value> {
        vec![Value::Int(self.id), Value::Str(self.email.clone())]
    }

    fn construct(arguments: &[Value]) -> Result<Self> {
        let signature = Self::signature();
        let id = int_at(&signature, arguments, 0, "id")?;
        let email = str_at(&signature, arguments, 1, "email")?;
        Account::new(id, email).map_err(|reason| ConvertError::construction(&signature, reason))
    }
}

fn int_at(
    signature: &ConstructorSignature,
    arguments: &[Value],
    index: usize,
    name: &str,
) -> Result<i64> {
    let value = arguments
        .get(index)
        .ok_or_else(|| ConvertError::arity_mismatch(signature, arguments.len()))?;
    value.as_int().ok_or_else(|| {
        ConvertError::type_mismatch(signature, name, ValueType::Int, value.type_of())
    })
}

fn str_at(
    signature: &ConstructorSignature,
    arguments: &[Value],
    index: usize,
    name: &str,
) -> Result<String> {
    let value = arguments
        .get(index)
        .ok_or_else(|| ConvertError::arity_mismatch(signature, arguments.len()))?;
    value.as_str().map(str::to_owned).ok_or_else(|| {
        ConvertError::type_mismatch(signature, name, ValueType::Str, value.type_of())
    })
}
