// models/src/medical/mod.rs
pub mod appointment;
pub mod doctor;
pub mod emergency;
pub mod patient;
pub mod resource;
pub mod service_request;

pub use appointment::{
    Appointment, AppointmentChange, AppointmentRow, AppointmentStatus, NewAppointment,
};
pub use doctor::{Doctor, DoctorStatus};
pub use emergency::{CaseStatus, EmergencyCase};
pub use patient::{Patient, PatientStatus};
pub use resource::{NetworkResource, Resource};
pub use service_request::{RequestStatus, ServiceRequest, Urgency};
