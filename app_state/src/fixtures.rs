// app_state/src/fixtures.rs
//! Startup seed data. Everything here is fictional and lives only for
//! the process lifetime; nothing is reconciled with the backend.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

use models::audit::{AuditEntry, AuditStatus};
use models::medical::{
    CaseStatus, Doctor, DoctorStatus, EmergencyCase, Patient, PatientStatus, RequestStatus,
    ServiceRequest, Urgency,
};
use models::notification::{Notification, NotificationKind};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("fixture time is valid")
}

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".into(),
            name: "Rahul Sharma".into(),
            age: 45,
            contact: "+91 98765 11111".into(),
            last_visit: date(2026, 2, 18),
            status: PatientStatus::Active,
            gender: "Male".into(),
            blood_group: "O+".into(),
        },
        Patient {
            id: "2".into(),
            name: "Anita Desai".into(),
            age: 32,
            contact: "+91 98765 22222".into(),
            last_visit: date(2026, 2, 20),
            status: PatientStatus::Active,
            gender: "Female".into(),
            blood_group: "A+".into(),
        },
        Patient {
            id: "3".into(),
            name: "Vikram Joshi".into(),
            age: 58,
            contact: "+91 98765 33333".into(),
            last_visit: date(2026, 2, 15),
            status: PatientStatus::Critical,
            gender: "Male".into(),
            blood_group: "B+".into(),
        },
        Patient {
            id: "4".into(),
            name: "Sneha Reddy".into(),
            age: 27,
            contact: "+91 98765 44444".into(),
            last_visit: date(2026, 2, 10),
            status: PatientStatus::Discharged,
            gender: "Female".into(),
            blood_group: "AB-".into(),
        },
    ]
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "1".into(),
            name: "Dr. Priya Patel".into(),
            department: "Cardiology".into(),
            availability: "Mon-Fri 9AM-5PM".into(),
            status: DoctorStatus::Available,
            slot_duration_minutes: 30,
        },
        Doctor {
            id: "2".into(),
            name: "Dr. Amit Singh".into(),
            department: "Neurology".into(),
            availability: "Mon-Sat 10AM-4PM".into(),
            status: DoctorStatus::Available,
            slot_duration_minutes: 45,
        },
        Doctor {
            id: "3".into(),
            name: "Dr. Neha Gupta".into(),
            department: "Orthopedics".into(),
            availability: "Tue-Sat 8AM-2PM".into(),
            status: DoctorStatus::InSurgery,
            slot_duration_minutes: 30,
        },
        Doctor {
            id: "4".into(),
            name: "Dr. Rajesh Kumar".into(),
            department: "Dermatology".into(),
            availability: "Mon-Fri 11AM-6PM".into(),
            status: DoctorStatus::OnLeave,
            slot_duration_minutes: 20,
        },
    ]
}

pub fn emergency_cases() -> Vec<EmergencyCase> {
    vec![
        EmergencyCase {
            id: "1".into(),
            patient_name: "Emergency Patient 1".into(),
            severity: Urgency::Critical,
            arrival_time: time(8, 15),
            assigned_resource: "ICU Bed 3".into(),
            status: CaseStatus::InTreatment,
        },
        EmergencyCase {
            id: "2".into(),
            patient_name: "Emergency Patient 2".into(),
            severity: Urgency::High,
            arrival_time: time(9, 30),
            assigned_resource: "ER Bay 5".into(),
            status: CaseStatus::Waiting,
        },
        EmergencyCase {
            id: "3".into(),
            patient_name: "Emergency Patient 3".into(),
            severity: Urgency::Medium,
            arrival_time: time(10, 0),
            assigned_resource: "General Ward".into(),
            status: CaseStatus::InTreatment,
        },
    ]
}

/// Seed notifications, stamped relative to `now` (5, 15, 60 and 120
/// minutes ago) the way the dashboard shows them on first load.
pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: "1".into(),
            title: "ICU Near Capacity".into(),
            message: "ICU occupancy has reached 90%. Consider resource allocation.".into(),
            kind: NotificationKind::Resource,
            timestamp: now - Duration::minutes(5),
            read: false,
        },
        Notification {
            id: "2".into(),
            title: "New Appointment".into(),
            message: "Rahul Sharma has booked an appointment with Dr. Priya Patel.".into(),
            kind: NotificationKind::Appointment,
            timestamp: now - Duration::minutes(15),
            read: false,
        },
        Notification {
            id: "3".into(),
            title: "Blood Bank Alert".into(),
            message: "AB- blood units are critically low (2 units remaining).".into(),
            kind: NotificationKind::Crisis,
            timestamp: now - Duration::minutes(60),
            read: true,
        },
        Notification {
            id: "4".into(),
            title: "Service Request Approved".into(),
            message: "Request for 10 oxygen cylinders has been approved.".into(),
            kind: NotificationKind::Service,
            timestamp: now - Duration::minutes(120),
            read: true,
        },
    ]
}

pub fn service_requests() -> Vec<ServiceRequest> {
    vec![
        ServiceRequest {
            id: "SR001".into(),
            hospital_name: "City General Hospital".into(),
            resource_type: "Oxygen Cylinders".into(),
            quantity: 10,
            urgency: Urgency::High,
            message: "ICU running low".into(),
            status: RequestStatus::Approved,
            date: date(2026, 2, 20),
        },
        ServiceRequest {
            id: "SR002".into(),
            hospital_name: "Metro Care Hospital".into(),
            resource_type: "Blood Units (O+)".into(),
            quantity: 5,
            urgency: Urgency::Critical,
            message: "Emergency surgery scheduled".into(),
            status: RequestStatus::Pending,
            date: date(2026, 2, 20),
        },
        ServiceRequest {
            id: "SR003".into(),
            hospital_name: "City General Hospital".into(),
            resource_type: "Ventilators".into(),
            quantity: 2,
            urgency: Urgency::Medium,
            message: "Preventive maintenance replacement".into(),
            status: RequestStatus::Completed,
            date: date(2026, 2, 19),
        },
    ]
}

pub fn audit_log() -> Vec<AuditEntry> {
    let stamp = |y, mo, d, h, mi, s| {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .expect("fixture timestamp is valid")
    };
    vec![
        AuditEntry {
            id: "1".into(),
            action: "Created Appointment".into(),
            module: "Appointments".into(),
            timestamp: stamp(2026, 2, 20, 9, 0, 0),
            status: AuditStatus::Success,
            user: "Admin".into(),
        },
        AuditEntry {
            id: "2".into(),
            action: "Updated Bed Status".into(),
            module: "Resources".into(),
            timestamp: stamp(2026, 2, 20, 8, 45, 0),
            status: AuditStatus::Success,
            user: "Admin".into(),
        },
        AuditEntry {
            id: "3".into(),
            action: "Activated Crisis Mode".into(),
            module: "Crisis Panel".into(),
            timestamp: stamp(2026, 2, 19, 22, 30, 0),
            status: AuditStatus::Success,
            user: "Admin".into(),
        },
        AuditEntry {
            id: "4".into(),
            action: "Service Request Created".into(),
            module: "Service Requests".into(),
            timestamp: stamp(2026, 2, 19, 20, 15, 0),
            status: AuditStatus::Success,
            user: "Admin".into(),
        },
    ]
}
