// models/src/medical/resource.rs
use serde::Serialize;

use crate::errors::{ValidationError, ValidationResult};

/// A tracked hospital resource (beds, oxygen, blood units, ventilators).
///
/// `available` is always derived from `total - occupied` by the
/// constructor and by `set_occupancy`; a record with an inconsistent
/// availability cannot be built through this type. There is deliberately
/// no `Deserialize`: the factory is the only way in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: String,
    /// Resource category, e.g. "bed", "oxygen", "blood", "ventilator".
    pub kind: String,
    pub name: String,
    pub total: u32,
    pub occupied: u32,
    available: u32,
    pub threshold: Option<u32>,
    pub hospital_id: Option<String>,
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        total: u32,
        occupied: u32,
        threshold: Option<u32>,
        hospital_id: Option<String>,
    ) -> ValidationResult<Self> {
        if occupied > total {
            return Err(ValidationError::OccupancyExceedsTotal { occupied, total });
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }
        Ok(Resource {
            id: id.into(),
            kind: kind.into(),
            name,
            total,
            occupied,
            available: total - occupied,
            threshold,
            hospital_id,
        })
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    /// Replace capacity and occupancy together, re-deriving availability.
    pub fn set_occupancy(&mut self, total: u32, occupied: u32) -> ValidationResult<()> {
        if occupied > total {
            return Err(ValidationError::OccupancyExceedsTotal { occupied, total });
        }
        self.total = total;
        self.occupied = occupied;
        self.available = total - occupied;
        Ok(())
    }

    /// Below-threshold resources drive the low-stock notifications.
    pub fn is_below_threshold(&self) -> bool {
        match self.threshold {
            Some(threshold) => self.available <= threshold,
            None => false,
        }
    }
}

/// A resource advertised by another hospital in the network view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkResource {
    pub resource: Resource,
    pub hospital: String,
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_is_always_derived() {
        let r = Resource::new("1", "bed", "ICU", 30, 27, Some(5), None).unwrap();
        assert_eq!(r.available(), 3);
    }

    #[test]
    fn occupied_beyond_total_is_rejected() {
        let err = Resource::new("1", "bed", "ICU", 30, 31, None, None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OccupancyExceedsTotal {
                occupied: 31,
                total: 30
            }
        );
    }

    #[test]
    fn set_occupancy_rederives_availability() {
        let mut r = Resource::new("4", "oxygen", "Oxygen Cylinders", 200, 145, Some(30), None)
            .unwrap();
        r.set_occupancy(200, 180).unwrap();
        assert_eq!(r.available(), 20);
        assert!(r.set_occupancy(200, 201).is_err());
        // Failed update leaves the record untouched
        assert_eq!(r.occupied, 180);
        assert_eq!(r.available(), 20);
    }

    #[test]
    fn threshold_check() {
        let r = Resource::new("9", "blood", "AB- Blood", 20, 18, Some(5), None).unwrap();
        assert!(r.is_below_threshold());
        let r = Resource::new("6", "blood", "A+ Blood", 50, 35, Some(10), None).unwrap();
        assert!(!r.is_below_threshold());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            Resource::new("1", "bed", "  ", 10, 0, None, None).unwrap_err(),
            ValidationError::MissingField("name".into())
        );
    }
}
