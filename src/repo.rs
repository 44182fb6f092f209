//! Collaborator seams: persistence and reference lookups are implemented by
//! the host. The in-memory variants back the test suite and embedders that
//! need no database.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::*;
use crate::scheduler::BookingError;

/// Booking persistence. Storage-layer failures surface as
/// [`BookingError::Storage`] and propagate to callers unchanged.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Booking>, BookingError>;
    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Booking>, BookingError>;
    async fn get_by_zone(&self, zone_id: &str) -> Result<Vec<Booking>, BookingError>;
    async fn get_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingError>;
    async fn get_by_user_and_zone(
        &self,
        user_id: &str,
        zone_id: &str,
    ) -> Result<Vec<Booking>, BookingError>;
    async fn insert(&self, booking: Booking) -> Result<(), BookingError>;
    async fn update(&self, booking: Booking) -> Result<(), BookingError>;
    /// Single-field status flip used by the expiration sweep.
    async fn mark_no_actual(&self, id: BookingId) -> Result<(), BookingError>;
    async fn delete(&self, id: BookingId) -> Result<(), BookingError>;
}

/// Zone existence and capacity lookup.
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    async fn get_by_id(&self, zone_id: &str) -> Result<Option<Zone>, BookingError>;
}

/// Package existence lookup.
#[async_trait]
pub trait PackageDirectory: Send + Sync {
    async fn get_by_id(&self, package_id: &str) -> Result<Option<Package>, BookingError>;
}

// ── In-memory implementations ────────────────────────────────────

#[derive(Default)]
pub struct MemoryBookings {
    bookings: DashMap<BookingId, Booking>,
}

impl MemoryBookings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for MemoryBookings {
    async fn get_all(&self) -> Result<Vec<Booking>, BookingError> {
        Ok(self.bookings.iter().map(|e| e.value().clone()).collect())
    }

    async fn get_by_user(&self, user_id: &str) -> Result<Vec<Booking>, BookingError> {
        Ok(self
            .bookings
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().clone())
            .collect())
    }

    async fn get_by_zone(&self, zone_id: &str) -> Result<Vec<Booking>, BookingError> {
        Ok(self
            .bookings
            .iter()
            .filter(|e| e.value().zone_id == zone_id)
            .map(|e| e.value().clone())
            .collect())
    }

    async fn get_by_id(&self, id: BookingId) -> Result<Option<Booking>, BookingError> {
        Ok(self.bookings.get(&id).map(|e| e.value().clone()))
    }

    async fn get_by_user_and_zone(
        &self,
        user_id: &str,
        zone_id: &str,
    ) -> Result<Vec<Booking>, BookingError> {
        Ok(self
            .bookings
            .iter()
            .filter(|e| e.value().user_id == user_id && e.value().zone_id == zone_id)
            .map(|e| e.value().clone())
            .collect())
    }

    async fn insert(&self, booking: Booking) -> Result<(), BookingError> {
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn update(&self, booking: Booking) -> Result<(), BookingError> {
        self.bookings.insert(booking.id, booking);
        Ok(())
    }

    async fn mark_no_actual(&self, id: BookingId) -> Result<(), BookingError> {
        match self.bookings.get_mut(&id) {
            Some(mut e) => {
                e.value_mut().status = BookingStatus::NoActual;
                Ok(())
            }
            None => Err(BookingError::BookingNotFound(id)),
        }
    }

    async fn delete(&self, id: BookingId) -> Result<(), BookingError> {
        self.bookings.remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryZones {
    zones: DashMap<ZoneId, Zone>,
}

impl MemoryZones {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, zone: Zone) {
        self.zones.insert(zone.id.clone(), zone);
    }
}

#[async_trait]
impl ZoneDirectory for MemoryZones {
    async fn get_by_id(&self, zone_id: &str) -> Result<Option<Zone>, BookingError> {
        Ok(self.zones.get(zone_id).map(|e| e.value().clone()))
    }
}

#[derive(Default)]
pub struct MemoryPackages {
    packages: DashMap<PackageId, Package>,
}

impl MemoryPackages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, package: Package) {
        self.packages.insert(package.id.clone(), package);
    }
}

#[async_trait]
impl PackageDirectory for MemoryPackages {
    async fn get_by_id(&self, package_id: &str) -> Result<Option<Package>, BookingError> {
        Ok(self.packages.get(package_id).map(|e| e.value().clone()))
    }
}
