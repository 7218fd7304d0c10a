//! Parking service
//!
//! Owns the slot registry behind a single async mutex. Every operation that
//! reads and then writes the registry does both under one guard, so a
//! uniqueness or capacity check can never go stale before its mutation.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::domain::{
    ChargeBreakdown, DomainError, DomainResult, FacilitySnapshot, HolidayRecord, RateTable, SharedClock, Slot, SlotNumber, SlotRegistry, TariffEngine,
    VehicleType,
};

use super::allocation::{self, ArrivalRequest, ReservationRequest};
use super::billing::{self, ParkingBill};
use super::reports::{self, FacilityReport, OccupancyStats};
use super::reservation;

/// How a vehicle came to occupy its slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrivalSource {
    Walk,
    Reservation,
    Conversion,
}

impl ArrivalSource {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Walk => "walk_in",
            Self::Reservation => "reservation",
            Self::Conversion => "conversion",
        }
    }
}

fn record_rejection(operation: &'static str, err: &DomainError) {
    metrics::counter!("parking_rejections_total", "reason" => err.reason()).increment(1);
    warn!(operation, reason = err.reason(), "{}", err);
}

fn record_slot_gauges(registry: &SlotRegistry) {
    let counts = registry.counts();
    metrics::gauge!("parking_slots", "status" => "empty").set(counts.empty as f64);
    metrics::gauge!("parking_slots", "status" => "reserved").set(counts.reserved as f64);
    metrics::gauge!("parking_slots", "status" => "occupied").set(counts.occupied as f64);
}

/// Facility state shared by every request handler
pub struct ParkingService {
    registry: Mutex<SlotRegistry>,
    /// Written only by `restore`
    engine: RwLock<Arc<TariffEngine>>,
    clock: SharedClock,
}

pub type SharedParkingService = Arc<ParkingService>;

impl ParkingService {
    pub fn new(registry: SlotRegistry, engine: TariffEngine, clock: SharedClock) -> Self {
        record_slot_gauges(&registry);
        Self {
            registry: Mutex::new(registry),
            engine: RwLock::new(Arc::new(engine)),
            clock,
        }
    }

    /// Current instant according to the injected clock
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    async fn engine(&self) -> Arc<TariffEngine> {
        self.engine.read().await.clone()
    }

    pub async fn capacity(&self) -> usize {
        self.registry.lock().await.capacity()
    }

    // ── Mutations ──────────────────────────────────────────────

    /// Reserve the lowest empty slot and return it as written.
    pub async fn place_reservation(&self, request: ReservationRequest) -> DomainResult<Slot> {
        let vehicle_type = request.vehicle_type;
        let mut registry = self.registry.lock().await;

        let placed = allocation::place_reservation(&mut registry, request)
            .and_then(|slot| registry.get(slot).cloned());

        match placed {
            Ok(reserved) => {
                record_slot_gauges(&registry);
                drop(registry);
                metrics::counter!("parking_reservations_total", "vehicle_type" => vehicle_type.as_str())
                    .increment(1);
                info!(slot = reserved.slot, vehicle_type = %vehicle_type, "Reservation placed");
                Ok(reserved)
            }
            Err(e) => {
                drop(registry);
                record_rejection("place_reservation", &e);
                Err(e)
            }
        }
    }

    /// Park an arriving vehicle and return the slot as written.
    pub async fn place_arrival(&self, request: ArrivalRequest) -> DomainResult<Slot> {
        let vehicle_type = request.vehicle_type;
        let mut registry = self.registry.lock().await;

        let placed = allocation::place_arrival(&mut registry, request).and_then(|placement| {
            let slot = registry.get(placement.slot)?.clone();
            let source = if placement.reservation.is_some() {
                ArrivalSource::Reservation
            } else {
                ArrivalSource::Walk
            };
            Ok((slot, source))
        });

        match placed {
            Ok((parked, source)) => {
                record_slot_gauges(&registry);
                drop(registry);
                metrics::counter!(
                    "parking_arrivals_total",
                    "vehicle_type" => vehicle_type.as_str(),
                    "source" => source.as_str()
                )
                .increment(1);
                info!(
                    slot = parked.slot,
                    plate = parked.plate().unwrap_or_default(),
                    vehicle_type = %vehicle_type,
                    source = source.as_str(),
                    "Vehicle parked"
                );
                Ok(parked)
            }
            Err(e) => {
                drop(registry);
                record_rejection("place_arrival", &e);
                Err(e)
            }
        }
    }

    /// Occupy a reserved slot starting now.
    pub async fn convert(&self, slot: SlotNumber) -> DomainResult<Slot> {
        let now = self.clock.now();
        let mut registry = self.registry.lock().await;

        let converted = reservation::convert(&mut registry, slot, now)
            .and_then(|record| Ok((registry.get(slot)?.clone(), record)));

        match converted {
            Ok((occupied, record)) => {
                record_slot_gauges(&registry);
                drop(registry);
                metrics::counter!(
                    "parking_arrivals_total",
                    "vehicle_type" => record.vehicle_type.as_str(),
                    "source" => ArrivalSource::Conversion.as_str()
                )
                .increment(1);
                info!(slot, plate = %record.vehicle_number, "Reservation converted to occupancy");
                Ok(occupied)
            }
            Err(e) => {
                drop(registry);
                record_rejection("convert", &e);
                Err(e)
            }
        }
    }

    /// Drop the reservation on `slot` and return the freed slot.
    pub async fn cancel(&self, slot: SlotNumber) -> DomainResult<Slot> {
        let mut registry = self.registry.lock().await;

        let cancelled = reservation::cancel(&mut registry, slot)
            .and_then(|dropped| Ok((registry.get(slot)?.clone(), dropped)));

        match cancelled {
            Ok((freed, dropped)) => {
                record_slot_gauges(&registry);
                drop(registry);
                info!(slot, plate = %dropped.vehicle_number, "Reservation cancelled");
                Ok(freed)
            }
            Err(e) => {
                drop(registry);
                record_rejection("cancel", &e);
                Err(e)
            }
        }
    }

    /// Bill the vehicle in `slot` as of `departure` and free the slot.
    pub async fn remove_and_bill(
        &self,
        slot: SlotNumber,
        departure: NaiveDateTime,
    ) -> DomainResult<ParkingBill> {
        let engine = self.engine().await;
        let mut registry = self.registry.lock().await;

        match billing::remove_and_bill(&mut registry, &engine, slot, departure) {
            Ok(bill) => {
                record_slot_gauges(&registry);
                drop(registry);
                let vehicle_type = bill.vehicle_type.as_str();
                metrics::counter!("parking_departures_total", "vehicle_type" => vehicle_type)
                    .increment(1);
                metrics::counter!("parking_revenue_minor_total", "vehicle_type" => vehicle_type)
                    .increment(u64::try_from(bill.total()).unwrap_or(0));
                info!(
                    slot,
                    plate = %bill.vehicle_number,
                    hours = bill.breakdown.total_hours,
                    total = %bill.breakdown.format_total(),
                    "Vehicle departed"
                );
                Ok(bill)
            }
            Err(e) => {
                drop(registry);
                record_rejection("remove_and_bill", &e);
                Err(e)
            }
        }
    }

    /// Replace the whole facility state with a stored snapshot.
    pub async fn restore(&self, snapshot: FacilitySnapshot) -> DomainResult<()> {
        let (restored, calendar) = match snapshot.into_parts() {
            Ok(parts) => parts,
            Err(e) => {
                record_rejection("restore", &e);
                return Err(e);
            }
        };

        let mut registry = self.registry.lock().await;
        let mut engine = self.engine.write().await;
        let rates = engine.rates().clone();
        *engine = Arc::new(TariffEngine::new(rates, calendar));
        *registry = restored;
        record_slot_gauges(&registry);

        info!(
            capacity = registry.capacity(),
            holidays = engine.calendar().len(),
            "Facility state restored"
        );
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────

    /// Price a stay without touching any slot.
    pub async fn calculate_charge(
        &self,
        arrival: NaiveDateTime,
        departure: NaiveDateTime,
        vehicle_type: VehicleType,
    ) -> DomainResult<ChargeBreakdown> {
        self.engine()
            .await
            .calculate_charge(arrival, departure, vehicle_type)
    }

    pub async fn list_slots(&self) -> Vec<Slot> {
        self.registry.lock().await.slots().to_vec()
    }

    pub async fn get_slot(&self, slot: SlotNumber) -> DomainResult<Slot> {
        self.registry.lock().await.get(slot).cloned()
    }

    pub async fn stats(&self) -> OccupancyStats {
        let registry = self.registry.lock().await;
        OccupancyStats::from_registry(&registry)
    }

    pub async fn report(&self) -> FacilityReport {
        let engine = self.engine().await;
        let registry = self.registry.lock().await;
        FacilityReport::from_registry(&registry, &engine.rates().currency)
    }

    pub async fn search(&self, term: &str) -> Vec<Slot> {
        let registry = self.registry.lock().await;
        reports::search(&registry, term)
    }

    pub async fn snapshot(&self) -> FacilitySnapshot {
        let engine = self.engine().await;
        let registry = self.registry.lock().await;
        FacilitySnapshot::capture(&registry, engine.calendar(), self.clock.now())
    }

    pub async fn holidays(&self) -> Vec<HolidayRecord> {
        self.engine().await.calendar().records().to_vec()
    }

    pub async fn rates(&self) -> RateTable {
        self.engine().await.rates().clone()
    }
}

// ── Tests ──────────────────────────────────────────────────────
