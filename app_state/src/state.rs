// app_state/src/state.rs
use chrono::Utc;
use tokio::sync::RwLock;

use models::audit::{AuditEntry, AuditStatus};
use models::medical::{
    Appointment, Doctor, EmergencyCase, Patient, Resource, ServiceRequest,
};
use models::notification::Notification;

use crate::fixtures;

/// The shared mutable home for the dashboard collections. Collections
/// are independent: no operation here touches more than one of them, and
/// cross-collection consistency is the caller's concern.
///
/// Reads hand out snapshots and writes replace a collection wholesale,
/// so a snapshot held by one view is never changed underneath it by
/// another.
pub struct AppState {
    appointments: RwLock<Vec<Appointment>>,
    patients: RwLock<Vec<Patient>>,
    doctors: RwLock<Vec<Doctor>>,
    resources: RwLock<Vec<Resource>>,
    service_requests: RwLock<Vec<ServiceRequest>>,
    emergency_cases: RwLock<Vec<EmergencyCase>>,
    notifications: RwLock<Vec<Notification>>,
    audit_log: RwLock<Vec<AuditEntry>>,
    crisis_mode: RwLock<bool>,
}

async fn snapshot<T: Clone>(lock: &RwLock<Vec<T>>) -> Vec<T> {
    lock.read().await.clone()
}

async fn replace<T>(lock: &RwLock<Vec<T>>, items: Vec<T>) {
    *lock.write().await = items;
}

async fn apply<T, F>(lock: &RwLock<Vec<T>>, f: F)
where
    F: FnOnce(Vec<T>) -> Vec<T>,
{
    let mut guard = lock.write().await;
    let current = std::mem::take(&mut *guard);
    *guard = f(current);
}

impl AppState {
    /// A store seeded the way the application starts: fixture patients,
    /// doctors, emergency cases, notifications, service requests and
    /// audit entries; appointments and resources empty.
    pub fn seeded() -> Self {
        let now = Utc::now();
        AppState {
            appointments: RwLock::new(Vec::new()),
            patients: RwLock::new(fixtures::patients()),
            doctors: RwLock::new(fixtures::doctors()),
            resources: RwLock::new(Vec::new()),
            service_requests: RwLock::new(fixtures::service_requests()),
            emergency_cases: RwLock::new(fixtures::emergency_cases()),
            notifications: RwLock::new(fixtures::notifications(now)),
            audit_log: RwLock::new(fixtures::audit_log()),
            crisis_mode: RwLock::new(false),
        }
    }

    /// A completely empty store. Tests build isolated instances with
    /// this instead of sharing a seeded one.
    pub fn empty() -> Self {
        AppState {
            appointments: RwLock::new(Vec::new()),
            patients: RwLock::new(Vec::new()),
            doctors: RwLock::new(Vec::new()),
            resources: RwLock::new(Vec::new()),
            service_requests: RwLock::new(Vec::new()),
            emergency_cases: RwLock::new(Vec::new()),
            notifications: RwLock::new(Vec::new()),
            audit_log: RwLock::new(Vec::new()),
            crisis_mode: RwLock::new(false),
        }
    }

    // -- appointments (local collection; the durable rows are a separate
    //    data source and are never merged in here) --

    pub async fn appointments(&self) -> Vec<Appointment> {
        snapshot(&self.appointments).await
    }

    pub async fn set_appointments(&self, items: Vec<Appointment>) {
        replace(&self.appointments, items).await;
    }

    pub async fn update_appointments<F>(&self, f: F)
    where
        F: FnOnce(Vec<Appointment>) -> Vec<Appointment>,
    {
        apply(&self.appointments, f).await;
    }

    // -- patients --

    pub async fn patients(&self) -> Vec<Patient> {
        snapshot(&self.patients).await
    }

    pub async fn set_patients(&self, items: Vec<Patient>) {
        replace(&self.patients, items).await;
    }

    pub async fn update_patients<F>(&self, f: F)
    where
        F: FnOnce(Vec<Patient>) -> Vec<Patient>,
    {
        apply(&self.patients, f).await;
    }

    // -- doctors --

    pub async fn doctors(&self) -> Vec<Doctor> {
        snapshot(&self.doctors).await
    }

    pub async fn set_doctors(&self, items: Vec<Doctor>) {
        replace(&self.doctors, items).await;
    }

    pub async fn update_doctors<F>(&self, f: F)
    where
        F: FnOnce(Vec<Doctor>) -> Vec<Doctor>,
    {
        apply(&self.doctors, f).await;
    }

    // -- resources --

    pub async fn resources(&self) -> Vec<Resource> {
        snapshot(&self.resources).await
    }

    pub async fn set_resources(&self, items: Vec<Resource>) {
        replace(&self.resources, items).await;
    }

    pub async fn update_resources<F>(&self, f: F)
    where
        F: FnOnce(Vec<Resource>) -> Vec<Resource>,
    {
        apply(&self.resources, f).await;
    }

    // -- service requests --

    pub async fn service_requests(&self) -> Vec<ServiceRequest> {
        snapshot(&self.service_requests).await
    }

    pub async fn set_service_requests(&self, items: Vec<ServiceRequest>) {
        replace(&self.service_requests, items).await;
    }

    pub async fn update_service_requests<F>(&self, f: F)
    where
        F: FnOnce(Vec<ServiceRequest>) -> Vec<ServiceRequest>,
    {
        apply(&self.service_requests, f).await;
    }

    // -- emergency cases --

    pub async fn emergency_cases(&self) -> Vec<EmergencyCase> {
        snapshot(&self.emergency_cases).await
    }

    pub async fn set_emergency_cases(&self, items: Vec<EmergencyCase>) {
        replace(&self.emergency_cases, items).await;
    }

    pub async fn update_emergency_cases<F>(&self, f: F)
    where
        F: FnOnce(Vec<EmergencyCase>) -> Vec<EmergencyCase>,
    {
        apply(&self.emergency_cases, f).await;
    }

    // -- notifications --

    pub async fn notifications(&self) -> Vec<Notification> {
        snapshot(&self.notifications).await
    }

    pub async fn set_notifications(&self, items: Vec<Notification>) {
        replace(&self.notifications, items).await;
    }

    pub async fn update_notifications<F>(&self, f: F)
    where
        F: FnOnce(Vec<Notification>) -> Vec<Notification>,
    {
        apply(&self.notifications, f).await;
    }

    /// Flip the matching entry's `read` flag to true. Unknown ids are a
    /// silent no-op; a read entry stays read, so repeating the call
    /// changes nothing.
    pub async fn mark_notification_read(&self, id: &str) {
        apply(&self.notifications, |items| {
            items
                .into_iter()
                .map(|mut notification| {
                    if notification.id == id {
                        notification.read = true;
                    }
                    notification
                })
                .collect()
        })
        .await;
    }

    // -- audit log --

    pub async fn audit_log(&self) -> Vec<AuditEntry> {
        snapshot(&self.audit_log).await
    }

    /// Record a successful action, newest first. The trail is unbounded;
    /// there is no retention or eviction.
    pub async fn add_audit_log(&self, action: &str, module: &str) {
        self.add_audit_log_with_status(action, module, AuditStatus::Success)
            .await;
    }

    /// Same as `add_audit_log` with an explicit status, so failure paths
    /// can record `Failed` entries.
    pub async fn add_audit_log_with_status(
        &self,
        action: &str,
        module: &str,
        status: AuditStatus,
    ) {
        let entry = AuditEntry::new(action, module, status, Utc::now());
        apply(&self.audit_log, |mut items| {
            items.insert(0, entry);
            items
        })
        .await;
    }

    // -- crisis flag --

    pub async fn crisis_mode(&self) -> bool {
        *self.crisis_mode.read().await
    }

    pub async fn set_crisis_mode(&self, active: bool) {
        *self.crisis_mode.write().await = active;
    }
}
