// app_state/src/mock.rs
//! Hardcoded and randomized resource data. These stand in for real
//! occupancy feeds; every record is built through the validated
//! `Resource` factory, so availability always equals total minus
//! occupied.

use rand::Rng;

use models::medical::{NetworkResource, Resource};

fn resource(
    id: u32,
    kind: &str,
    name: &str,
    total: u32,
    occupied: u32,
    threshold: u32,
    hospital_id: &str,
) -> Resource {
    Resource::new(
        id.to_string(),
        kind,
        name,
        total,
        occupied,
        Some(threshold),
        Some(hospital_id.to_string()),
    )
    .expect("static mock resource is consistent")
}

/// The fixed occupancy picture for the operator's own hospital.
pub fn hospital_resources() -> Vec<Resource> {
    vec![
        resource(1, "bed", "General Ward", 120, 95, 20, "mock-1"),
        resource(2, "bed", "ICU", 30, 27, 5, "mock-1"),
        resource(3, "bed", "Private Room", 40, 32, 8, "mock-1"),
        resource(4, "oxygen", "Oxygen Cylinders", 200, 145, 30, "mock-1"),
        resource(5, "oxygen", "Oxygen Concentrators", 50, 38, 10, "mock-1"),
        resource(6, "blood", "A+ Blood", 50, 35, 10, "mock-1"),
        resource(7, "blood", "B+ Blood", 40, 28, 8, "mock-1"),
        resource(8, "blood", "O+ Blood", 60, 48, 15, "mock-1"),
        resource(9, "blood", "AB- Blood", 20, 18, 5, "mock-1"),
        resource(10, "ventilator", "Ventilators", 50, 38, 10, "mock-1"),
        resource(11, "ventilator", "BiPAP Machines", 25, 20, 5, "mock-1"),
    ]
}

const NETWORK_HOSPITALS: &[(&str, &str, &str)] = &[
    ("1", "City General Hospital", "New York"),
    ("2", "Metro Care Hospital", "Los Angeles"),
    ("3", "St. Mary's Medical Center", "Chicago"),
    ("4", "Apollo Healthcare", "Houston"),
    ("5", "Fortis Hospital", "Phoenix"),
];

// (kind, name, base total, total spread, base occupied, occupied spread, threshold)
const NETWORK_SHAPES: &[(&str, &str, u32, u32, u32, u32, u32)] = &[
    ("bed", "General Ward", 100, 100, 70, 50, 20),
    ("bed", "ICU", 20, 40, 15, 30, 5),
    ("oxygen", "Oxygen Cylinders", 150, 150, 100, 100, 30),
    ("blood", "O+ Blood", 40, 50, 25, 30, 10),
    ("blood", "A+ Blood", 30, 40, 20, 25, 8),
    ("ventilator", "Ventilators", 30, 40, 20, 30, 8),
];

/// Randomized occupancy for the other hospitals in the network view.
/// Occupancy is clamped to capacity before construction; the factory
/// rejects anything else.
pub fn network_resources<R: Rng>(rng: &mut R) -> Vec<NetworkResource> {
    let mut records = Vec::new();
    let mut id = 1u32;

    for (hospital_id, hospital, city) in NETWORK_HOSPITALS {
        for (kind, name, base_total, total_spread, base_occupied, occupied_spread, threshold) in
            NETWORK_SHAPES
        {
            let total = base_total + rng.gen_range(0..*total_spread);
            let occupied = (base_occupied + rng.gen_range(0..*occupied_spread)).min(total);
            let resource = Resource::new(
                id.to_string(),
                *kind,
                *name,
                total,
                occupied,
                Some(*threshold),
                Some(hospital_id.to_string()),
            )
            .expect("occupancy clamped to capacity");
            records.push(NetworkResource {
                resource,
                hospital: hospital.to_string(),
                city: city.to_string(),
            });
            id += 1;
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hospital_set_has_the_expected_shape() {
        let resources = hospital_resources();
        assert_eq!(resources.len(), 11);
        for r in &resources {
            assert_eq!(r.available(), r.total - r.occupied);
        }
        // ICU sits at its threshold boundary in the fixture picture
        let icu = resources.iter().find(|r| r.name == "ICU").unwrap();
        assert_eq!(icu.available(), 3);
        assert!(icu.is_below_threshold());
    }

    #[test]
    fn network_generation_always_satisfies_the_occupancy_invariant() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            for record in network_resources(&mut rng) {
                let r = &record.resource;
                assert!(r.occupied <= r.total);
                assert_eq!(r.available(), r.total - r.occupied);
            }
        }
    }

    #[test]
    fn network_covers_every_hospital() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = network_resources(&mut rng);
        assert_eq!(records.len(), 30);
        assert!(records.iter().any(|r| r.hospital == "Fortis Hospital"));
        assert!(records.iter().any(|r| r.city == "Chicago"));
    }
}
