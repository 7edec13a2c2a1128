use std::fmt;

use crate::domain::{FieldLabel, Record};

pub const CARRIER_ENTITY_TYPE: &str = "CARRIER";
pub const ACCEPTED_OPERATING_STATUSES: [&str; 2] = ["AUTHORIZED", "AUTHORIZED FOR Property"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reject {
    NotCarrier { entity_type: Option<String> },
    NotAuthorized { operating_status: Option<String> },
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reject::NotCarrier { entity_type } => write!(
                f,
                "Entity Type is not {} (found {:?})",
                CARRIER_ENTITY_TYPE,
                entity_type.as_deref().unwrap_or_default()
            ),
            Reject::NotAuthorized { operating_status } => write!(
                f,
                "Operating Status is not AUTHORIZED (found {:?})",
                operating_status.as_deref().unwrap_or_default()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Accept(Record),
    Reject(Reject),
}

/// Gate on entity type, then operating status. Both comparisons are exact.
pub fn verdict(fields: &Record) -> Result<(), Reject> {
    let entity_type = fields.get(FieldLabel::EntityType);
    if entity_type != Some(CARRIER_ENTITY_TYPE) {
        return Err(Reject::NotCarrier {
            entity_type: entity_type.map(str::to_string),
        });
    }

    let operating_status = fields.get(FieldLabel::OperatingStatus);
    match operating_status {
        Some(status) if ACCEPTED_OPERATING_STATUSES.contains(&status) => Ok(()),
        _ => Err(Reject::NotAuthorized {
            operating_status: operating_status.map(str::to_string),
        }),
    }
}

pub fn classify(fields: Record) -> Classification {
    match verdict(&fields) {
        Ok(()) => Classification::Accept(fields),
        Err(reject) => Classification::Reject(reject),
    }
}
