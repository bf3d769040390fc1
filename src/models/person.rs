use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ids::PersonId;

/// Optional leading `+`, a first digit of 1-9, then 7 to 14 more digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{7,14}$").expect("phone pattern compiles"));

#[derive(Serialize, Deserialize, Clone)]
pub struct PersonRecord {
    /// Monotonic id of the record, assigned by the store
    pub id: PersonId,
    /// First name, the first token of the full name
    pub first_name: String,
    /// Last name, the remaining tokens of the full name
    pub last_name: String,
    /// Postal address
    pub address: String,
    /// Phone number, validated at construction
    pub phone_number: String,
    /// Email address
    pub email: String,
    /// Position within the company
    pub position: String,
    /// Rank within the position
    pub rank: String,
    /// Stored salary value
    pub salary: f64,
}

#[derive(Debug, Error)]
pub enum PersonRecordError {
    #[error("Full name '{0}' must have at least a first and a last name")]
    MalformedFullName(String),

    #[error("Phone number '{0}' is not valid")]
    InvalidPhoneNumber(String),
}

pub struct PersonDetails {
    pub full_name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub position: String,
    pub rank: String,
    pub salary: f64,
}

impl PersonRecord {
    /// Builds a record with a placeholder id; the store assigns the real one.
    ///
    /// The full name is split on whitespace. The first token becomes the first
    /// name and everything after it joins into the last name.
    pub fn new(details: PersonDetails) -> Result<PersonRecord, PersonRecordError> {
        let mut tokens = details.full_name.split_whitespace();
        let first_name = match tokens.next() {
            Some(token) => token.to_string(),
            None => return Err(PersonRecordError::MalformedFullName(details.full_name)),
        };
        let last_name = tokens.collect::<Vec<_>>().join(" ");
        if last_name.is_empty() {
            return Err(PersonRecordError::MalformedFullName(details.full_name));
        }

        if !PHONE_PATTERN.is_match(&details.phone_number) {
            return Err(PersonRecordError::InvalidPhoneNumber(details.phone_number));
        }

        Ok(PersonRecord {
            id: PersonId::default(),
            first_name,
            last_name,
            address: details.address,
            phone_number: details.phone_number,
            email: details.email,
            position: details.position,
            rank: details.rank,
            salary: details.salary,
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
