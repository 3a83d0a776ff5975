use anyhow::Result;
use application::{Backend, FacilityStore, StorageMode};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use domain::DomainError;
use domain::clock::{parse_date, parse_time};
use domain::equipment::{
    Equipment, EquipmentRepository, EquipmentType, NewEquipment,
};
use domain::maintenance::{
    MaintenanceOrder, MaintenanceRepository, MaintenanceStatus, MaintenanceType,
    NewMaintenanceOrder,
};
use domain::report::ReportMonth;
use domain::reservation::{
    NewReservation, Reservation, ReservationCategory, ReservationRepository,
};
use domain::safety::{
    ComplianceStatus, NewSafetyRecord, RegulationType, SafetyRecord, SafetyRepository,
};
use infrastructure::cache::{
    CachedEquipmentBlacklist, CachedEquipmentRepository, CachedMaintenanceRepository,
    CachedReservationRepository, CachedSafetyRepository, LocalCache,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

// --- Mock remote with an on/off switch ---

/// Stands in for the remote database: data lives in its own cache, and every
/// call fails while `online` is false. Like the real remote it starts without
/// equipment and answers `InvalidId` for ids it never issued.
#[derive(Clone)]
struct FlakyRemote {
    online: Arc<AtomicBool>,
    issued: Arc<Mutex<HashSet<String>>>,
    equipment: CachedEquipmentRepository,
    reservations: CachedReservationRepository,
    maintenance: CachedMaintenanceRepository,
    safety: CachedSafetyRepository,
}

impl FlakyRemote {
    async fn new() -> Self {
        let cache = LocalCache::in_memory().await.unwrap();
        let equipment = CachedEquipmentRepository::new(cache.clone());
        equipment.save_all(&[]).await.unwrap();
        Self {
            online: Arc::new(AtomicBool::new(true)),
            issued: Arc::new(Mutex::new(HashSet::new())),
            equipment,
            reservations: CachedReservationRepository::new(cache.clone()),
            maintenance: CachedMaintenanceRepository::new(cache.clone()),
            safety: CachedSafetyRepository::new(cache),
        }
    }

    fn issue(&self, id: &str) {
        self.issued.lock().unwrap().insert(id.to_string());
    }

    fn check_id(&self, id: &str) -> Result<(), DomainError> {
        self.check()?;
        if self.issued.lock().unwrap().contains(id) {
            Ok(())
        } else {
            Err(DomainError::InvalidId(format!("Not a remote id: {id}")))
        }
    }

    fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::Storage("connection refused".to_string()))
        }
    }

    fn backend(&self) -> Backend {
        let this = Arc::new(self.clone());
        Backend {
            equipment: this.clone(),
            reservations: this.clone(),
            maintenance: this.clone(),
            safety: this,
        }
    }
}

#[async_trait]
impl EquipmentRepository for FlakyRemote {
    async fn find_all(&self, include_inactive: bool) -> Result<Vec<Equipment>, DomainError> {
        self.check()?;
        self.equipment.find_all(include_inactive).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Equipment>, DomainError> {
        self.check_id(id)?;
        self.equipment.find_by_id(id).await
    }

    async fn insert(&self, equipment: NewEquipment) -> Result<Equipment, DomainError> {
        self.check()?;
        let item = self.equipment.insert(equipment).await?;
        self.issue(&item.id);
        Ok(item)
    }

    async fn save(&self, equipment: &Equipment) -> Result<(), DomainError> {
        self.check_id(&equipment.id)?;
        self.equipment.save(equipment).await
    }
}

#[async_trait]
impl ReservationRepository for FlakyRemote {
    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Reservation>, DomainError> {
        self.check()?;
        self.reservations.find_by_date(date).await
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, DomainError> {
        self.check()?;
        self.reservations.find_all().await
    }

    async fn insert(&self, reservation: NewReservation) -> Result<Reservation, DomainError> {
        self.check()?;
        let stored = self.reservations.insert(reservation).await?;
        self.issue(&stored.id);
        Ok(stored)
    }

    async fn save(&self, reservation: &Reservation) -> Result<(), DomainError> {
        self.check_id(&reservation.id)?;
        self.reservations.save(reservation).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.check_id(id)?;
        self.reservations.delete(id).await
    }
}

#[async_trait]
impl MaintenanceRepository for FlakyRemote {
    async fn find_by_type(
        &self,
        kind: MaintenanceType,
    ) -> Result<Vec<MaintenanceOrder>, DomainError> {
        self.check()?;
        self.maintenance.find_by_type(kind).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceOrder>, DomainError> {
        self.check_id(id)?;
        self.maintenance.find_by_id(id).await
    }

    async fn insert(&self, order: MaintenanceOrder) -> Result<MaintenanceOrder, DomainError> {
        self.check()?;
        let stored = self.maintenance.insert(order).await?;
        self.issue(&stored.id);
        Ok(stored)
    }

    async fn save(&self, order: &MaintenanceOrder) -> Result<(), DomainError> {
        self.check_id(&order.id)?;
        self.maintenance.save(order).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.check_id(id)?;
        self.maintenance.delete(id).await
    }
}

#[async_trait]
impl SafetyRepository for FlakyRemote {
    async fn find_by_regulation(
        &self,
        nr_type: RegulationType,
    ) -> Result<Vec<SafetyRecord>, DomainError> {
        self.check()?;
        self.safety.find_by_regulation(nr_type).await
    }

    async fn insert(&self, record: NewSafetyRecord) -> Result<SafetyRecord, DomainError> {
        self.check()?;
        let stored = self.safety.insert(record).await?;
        self.issue(&stored.id);
        Ok(stored)
    }

    async fn save(&self, record: &SafetyRecord) -> Result<(), DomainError> {
        self.check_id(&record.id)?;
        self.safety.save(record).await
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.check_id(id)?;
        self.safety.delete(id).await
    }
}

// --- Helpers ---

async fn online_store() -> (FacilityStore, FlakyRemote, LocalCache) {
    let remote = FlakyRemote::new().await;
    let cache = LocalCache::in_memory().await.unwrap();
    let store = FacilityStore::new(
        Some(remote.backend()),
        Backend::local(cache.clone()),
        Arc::new(CachedEquipmentBlacklist::new(cache.clone())),
    );
    (store, remote, cache)
}

async fn offline_store() -> FacilityStore {
    FacilityStore::offline(LocalCache::in_memory().await.unwrap())
}

fn t(value: &str) -> NaiveTime {
    parse_time(value).unwrap()
}

fn d(value: &str) -> NaiveDate {
    parse_date(value).unwrap()
}

fn booking(resource: &str, date: &str, start: &str, end: &str) -> NewReservation {
    NewReservation {
        resource_id: resource.to_string(),
        resource_name: format!("Vehicle Lift {resource}"),
        category: ReservationCategory::Workshop,
        date: d(date),
        start_time: t(start),
        end_time: t(end),
        requester: "Carlos".to_string(),
        observation: None,
        scaffolding_type: None,
        cost_saved: None,
    }
}

// --- Reservations ---

#[tokio::test]
async fn test_offline_store_reports_mode() {
    let store = offline_store().await;
    assert_eq!(store.mode(), StorageMode::Offline);

    let (online, _remote, _cache) = online_store().await;
    assert_eq!(online.mode(), StorageMode::Online);
}

#[tokio::test]
async fn test_overlapping_reservation_is_rejected() -> Result<()> {
    let store = offline_store().await;

    let first = store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;
    assert_eq!(first.cost_saved, Some(0.0));

    let err = store
        .create_reservation(booking("1", "2024-05-17", "09:00", "11:00"))
        .await
        .unwrap_err();
    match err {
        DomainError::ReservationConflict {
            existing_id,
            start,
            end,
            ..
        } => {
            assert_eq!(existing_id, first.id);
            assert_eq!(start, "08:00");
            assert_eq!(end, "10:00");
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    // Back-to-back, other resource and other day are all fine
    store
        .create_reservation(booking("1", "2024-05-17", "10:00", "11:00"))
        .await?;
    store
        .create_reservation(booking("2", "2024-05-17", "08:00", "10:00"))
        .await?;
    store
        .create_reservation(booking("1", "2024-05-18", "08:00", "10:00"))
        .await?;

    assert_eq!(store.get_all_reservations().await?.len(), 4);
    Ok(())
}

#[tokio::test]
async fn test_invalid_time_range_is_rejected() -> Result<()> {
    let store = offline_store().await;

    let err = store
        .create_reservation(booking("1", "2024-05-17", "10:00", "10:00"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTimeRange { .. }));

    let err = store
        .check_overlap(d("2024-05-17"), t("11:00"), t("09:00"), "1", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidTimeRange { .. }));
    Ok(())
}

#[tokio::test]
async fn test_check_overlap_respects_exclusion() -> Result<()> {
    let store = offline_store().await;
    let existing = store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;

    let date = d("2024-05-17");
    assert!(store.check_overlap(date, t("09:30"), t("10:30"), "1", None).await?);
    assert!(!store.check_overlap(date, t("10:00"), t("10:30"), "1", None).await?);
    assert!(
        !store
            .check_overlap(date, t("09:30"), t("10:30"), "1", Some(&existing.id))
            .await?
    );
    Ok(())
}

#[tokio::test]
async fn test_reschedule_checks_other_reservations_only() -> Result<()> {
    let store = offline_store().await;
    let mut morning = store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;
    store
        .create_reservation(booking("1", "2024-05-17", "13:00", "15:00"))
        .await?;

    // Extending into its own slot is fine
    morning.end_time = t("11:00");
    let moved = store.reschedule_reservation(morning.clone()).await?;
    assert_eq!(moved.end_time, t("11:00"));

    morning.end_time = t("14:00");
    let err = store.reschedule_reservation(morning).await.unwrap_err();
    assert!(matches!(err, DomainError::ReservationConflict { .. }));

    let day = store.get_reservations_by_date(d("2024-05-17")).await?;
    assert_eq!(day[0].end_time, t("11:00"));
    Ok(())
}

#[tokio::test]
async fn test_scaffolding_location_becomes_resource_id() -> Result<()> {
    let store = offline_store().await;
    let mut draft = booking("Boiler Room", "2024-05-17", "08:00", "12:00");
    draft.category = ReservationCategory::Scaffolding;
    let stored = store.create_reservation(draft.clone()).await?;
    assert_eq!(stored.resource_id, "boiler-room");

    draft.resource_id = "boiler  room ".to_string();
    draft.start_time = t("11:00");
    draft.end_time = t("13:00");
    let err = store.create_reservation(draft).await.unwrap_err();
    assert!(matches!(err, DomainError::ReservationConflict { .. }));

    let scaffolding = store
        .get_reservations_by_category(ReservationCategory::Scaffolding)
        .await?;
    assert_eq!(scaffolding.len(), 1);
    Ok(())
}

fn scaffolding(location: &str, start: &str, end: &str) -> NewReservation {
    let mut draft = booking(location, "2024-05-17", start, end);
    draft.category = ReservationCategory::Scaffolding;
    draft.resource_name = location.to_string();
    draft
}

#[tokio::test]
async fn test_overlap_check_matches_scaffolding_location_spelling() -> Result<()> {
    let store = offline_store().await;
    store
        .create_reservation(scaffolding("Boiler Room", "08:00", "12:00"))
        .await?;

    let date = d("2024-05-17");
    for spelling in ["Boiler Room", "boiler-room", " BOILER   room "] {
        assert!(
            store
                .check_overlap(date, t("09:00"), t("10:00"), spelling, None)
                .await?,
            "{spelling}"
        );
    }
    assert!(!store.check_overlap(date, t("09:00"), t("10:00"), "Tank 3", None).await?);
    Ok(())
}

#[tokio::test]
async fn test_reschedule_normalizes_scaffolding_location() -> Result<()> {
    let store = offline_store().await;
    store
        .create_reservation(scaffolding("Boiler Room", "08:00", "12:00"))
        .await?;
    let tank = store
        .create_reservation(scaffolding("Tank 3", "13:00", "15:00"))
        .await?;
    assert_eq!(tank.resource_id, "tank-3");

    let mut moved = tank.clone();
    moved.resource_id = "Boiler Room".to_string();
    moved.start_time = t("10:00");
    moved.end_time = t("11:00");
    let err = store.reschedule_reservation(moved).await.unwrap_err();
    assert!(matches!(err, DomainError::ReservationConflict { .. }));

    let mut later = tank;
    later.resource_id = "Tank  3".to_string();
    later.end_time = t("16:00");
    let stored = store.reschedule_reservation(later).await?;
    assert_eq!(stored.resource_id, "tank-3");

    let day = store.get_reservations_by_date(d("2024-05-17")).await?;
    assert!(day.iter().all(|r| r.resource_id == "boiler-room" || r.resource_id == "tank-3"));
    Ok(())
}

#[tokio::test]
async fn test_concurrent_offline_bookings_admit_one() -> Result<()> {
    let store = offline_store().await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store
                .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
                .await
        }));
    }

    let mut booked = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => booked += 1,
            Err(e) => assert!(matches!(e, DomainError::ReservationConflict { .. })),
        }
    }
    assert_eq!(booked, 1);
    assert_eq!(store.get_all_reservations().await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_offline_updates_of_unknown_ids_are_not_found() {
    let store = offline_store().await;

    let stray = booking("1", "2024-05-17", "08:00", "10:00").into_reservation("nope");
    let err = store.reschedule_reservation(stray).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = store.delete_reservation("nope").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    let err = store.delete_maintenance_order("nope").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    let err = store.delete_safety_record("nope").await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_reservation_frees_slot() -> Result<()> {
    let store = offline_store().await;
    let booked = store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;

    store.delete_reservation(&booked.id).await?;
    store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;
    Ok(())
}

// --- Fallback behaviour ---

#[tokio::test]
async fn test_online_writes_go_remote_and_are_mirrored() -> Result<()> {
    let (store, remote, cache) = online_store().await;

    let created = store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;

    assert_eq!(remote.reservations.find_all().await?.len(), 1);
    let mirror = CachedReservationRepository::new(cache);
    let local = mirror.find_all().await?;
    assert_eq!(local.len(), 1);
    assert_eq!(local[0].id, created.id);
    Ok(())
}

#[tokio::test]
async fn test_outage_falls_back_to_mirrored_state() -> Result<()> {
    let (store, remote, _cache) = online_store().await;
    store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;

    remote.set_online(false);

    // Mode describes configuration, not health
    assert_eq!(store.mode(), StorageMode::Online);

    let day = store.get_reservations_by_date(d("2024-05-17")).await?;
    assert_eq!(day.len(), 1);

    // Conflict detection still works against the mirror
    let err = store
        .create_reservation(booking("1", "2024-05-17", "09:00", "09:30"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ReservationConflict { .. }));

    // Writes during the outage land in the local cache only
    let offline_booking = store
        .create_reservation(booking("1", "2024-05-17", "10:00", "11:00"))
        .await?;
    assert_eq!(store.get_all_reservations().await?.len(), 2);

    remote.set_online(true);
    let remote_view = store.get_all_reservations().await?;
    assert_eq!(remote_view.len(), 1);
    assert!(remote_view.iter().all(|r| r.id != offline_booking.id));
    Ok(())
}

#[tokio::test]
async fn test_remote_reads_refresh_the_mirror() -> Result<()> {
    let (store, remote, _cache) = online_store().await;

    // Written straight into the remote, behind the store's back
    remote
        .reservations
        .insert(booking("3", "2024-06-01", "07:00", "08:00"))
        .await?;
    assert_eq!(store.get_reservations_by_date(d("2024-06-01")).await?.len(), 1);

    remote.set_online(false);
    assert_eq!(store.get_reservations_by_date(d("2024-06-01")).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_remote_not_found_is_not_replayed_on_the_mirror() -> Result<()> {
    let (store, remote, cache) = online_store().await;
    let booked = store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:00"))
        .await?;

    // Removed on the remote by someone else; the mirror still holds it
    remote.reservations.delete(&booked.id).await?;

    let mut moved = booked.clone();
    moved.end_time = t("11:00");
    let err = store.reschedule_reservation(moved).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = store.delete_reservation(&booked.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let mirror = CachedReservationRepository::new(cache).find_all().await?;
    assert_eq!(mirror.len(), 1);
    assert_eq!(mirror[0].end_time, t("10:00"));
    Ok(())
}

#[tokio::test]
async fn test_offline_records_stay_editable_once_back_online() -> Result<()> {
    let (store, remote, _cache) = online_store().await;

    remote.set_online(false);
    let order = store
        .create_maintenance_order(NewMaintenanceOrder {
            kind: MaintenanceType::Board,
            item_name: "Inverter board".to_string(),
            description: "capacitor swap".to_string(),
            status: MaintenanceStatus::default(),
            cost_saved: 450.0,
            technician: None,
            entry_date: Some(d("2024-04-02")),
        })
        .await?;
    remote.set_online(true);

    // The remote rejects the id it never issued, so the cache answers
    let done = store
        .set_maintenance_status(&order.id, MaintenanceStatus::Completed, d("2024-04-05"))
        .await?;
    assert_eq!(done.completion_date, Some(d("2024-04-05")));
    store.delete_maintenance_order(&order.id).await?;

    assert!(remote.maintenance.find_by_id(&order.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_equipment_mirror_holds_only_remote_rows() -> Result<()> {
    let (store, _remote, cache) = online_store().await;

    let lift = store
        .create_equipment(NewEquipment {
            name: "Vehicle Lift 9".to_string(),
            kind: EquipmentType::Tool,
            is_active: true,
        })
        .await?;
    let listed = store.get_equipment(true).await?;
    assert_eq!(listed.len(), 1);

    let mirror = CachedEquipmentRepository::new(cache).find_all(true).await?;
    assert_eq!(mirror.len(), 1);
    assert_eq!(mirror[0].id, lift.id);
    Ok(())
}

// --- Equipment ---

#[tokio::test]
async fn test_hidden_equipment_never_listed() -> Result<()> {
    let store = offline_store().await;
    assert_eq!(store.get_equipment(false).await?.len(), 5);

    store.hide_equipment("seed-3").await?;

    let items = store.get_equipment(true).await?;
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|e| e.id != "seed-3"));
    Ok(())
}

#[tokio::test]
async fn test_inactive_equipment_and_bookable_list() -> Result<()> {
    let store = offline_store().await;

    let chamber = store
        .create_equipment(NewEquipment {
            name: "Cold Chamber 1".to_string(),
            kind: EquipmentType::Area,
            is_active: true,
        })
        .await?;
    let bookable = store
        .get_bookable_equipment(ReservationCategory::Refrigeration)
        .await?;
    assert_eq!(bookable.len(), 1);
    assert_eq!(bookable[0].id, chamber.id);

    let updated = store.set_equipment_active(&chamber.id, false).await?;
    assert!(!updated.is_active);
    assert!(
        store
            .get_bookable_equipment(ReservationCategory::Refrigeration)
            .await?
            .is_empty()
    );
    assert!(
        store
            .get_equipment(true)
            .await?
            .iter()
            .any(|e| e.id == chamber.id)
    );

    let err = store.set_equipment_active("missing", true).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    Ok(())
}

#[tokio::test]
async fn test_equipment_name_required() {
    let store = offline_store().await;
    let err = store
        .create_equipment(NewEquipment {
            name: "  ".to_string(),
            kind: EquipmentType::Tool,
            is_active: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidValue(_)));
}

// --- Maintenance and safety ---

#[tokio::test]
async fn test_maintenance_status_lifecycle() -> Result<()> {
    let store = offline_store().await;

    let order = store
        .create_maintenance_order(NewMaintenanceOrder {
            kind: MaintenanceType::Motor,
            item_name: "Exhaust fan motor".to_string(),
            description: "bearing noise".to_string(),
            status: MaintenanceStatus::default(),
            cost_saved: 900.0,
            technician: None,
            entry_date: Some(d("2024-03-01")),
        })
        .await?;
    assert_eq!(order.status, MaintenanceStatus::Pending);
    assert_eq!(order.completion_date, None);

    let done = store
        .set_maintenance_status(&order.id, MaintenanceStatus::Completed, d("2024-03-08"))
        .await?;
    assert_eq!(done.completion_date, Some(d("2024-03-08")));

    let reopened = store
        .set_maintenance_status(&order.id, MaintenanceStatus::InProgress, d("2024-03-09"))
        .await?;
    assert_eq!(reopened.completion_date, None);

    let motors = store.get_maintenance_orders(MaintenanceType::Motor).await?;
    assert_eq!(motors.len(), 1);
    assert_eq!(motors[0].status, MaintenanceStatus::InProgress);

    store.delete_maintenance_order(&order.id).await?;
    assert!(
        store
            .get_maintenance_orders(MaintenanceType::Motor)
            .await?
            .is_empty()
    );
    Ok(())
}

#[tokio::test]
async fn test_safety_records_survive_outage() -> Result<()> {
    let (store, remote, _cache) = online_store().await;

    let record = store
        .create_safety_record(NewSafetyRecord {
            nr_type: RegulationType::Nr13,
            asset_name: "Boiler B-01".to_string(),
            description: "annual inspection".to_string(),
            last_inspection: d("2024-01-15"),
            next_inspection: d("2025-01-15"),
            status: ComplianceStatus::Compliant,
            responsible: "Eng. Costa".to_string(),
            document_url: None,
        })
        .await?;

    remote.set_online(false);
    let mut nr13 = store.get_safety_records(RegulationType::Nr13).await?;
    assert_eq!(nr13.len(), 1);
    assert_eq!(nr13[0].id, record.id);

    nr13[0].status = ComplianceStatus::Attention;
    store.update_safety_record(&nr13[0]).await?;
    assert_eq!(
        store.get_safety_records(RegulationType::Nr13).await?[0].status,
        ComplianceStatus::Attention
    );

    store.delete_safety_record(&record.id).await?;
    assert!(store.get_safety_records(RegulationType::Nr13).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_usage_report_for_month() -> Result<()> {
    let store = offline_store().await;
    store
        .create_reservation(booking("1", "2024-05-17", "08:00", "10:30"))
        .await?;
    store
        .create_reservation(booking("1", "2024-05-20", "08:00", "09:00"))
        .await?;
    store
        .create_reservation(booking("2", "2024-05-20", "08:00", "09:00"))
        .await?;
    store
        .create_reservation(booking("2", "2024-06-01", "08:00", "18:00"))
        .await?;

    let report = store.usage_report("2024-05".parse::<ReportMonth>()?).await?;
    assert_eq!(report.len(), 2);
    assert_eq!(report[0].resource_name, "Vehicle Lift 1");
    assert_eq!(report[0].hours, 3.5);
    assert_eq!(report[0].reservations, 2);
    assert_eq!(report[1].hours, 1.0);
    Ok(())
}
