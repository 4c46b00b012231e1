// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Duplicate detection over open reports.

use crate::error::CoreError;
use crate::ports::{OpenReport, Storage};
use urbia_domain::haversine_distance_meters;

/// Default dedup radius in meters.
pub const DEFAULT_DEDUP_RADIUS_METERS: f64 = 50.0;

/// A candidate duplicate found within the dedup radius.
///
/// Transient: used only to decide accept/reject during creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateCandidate {
    /// The existing open solicitation.
    pub solicitation_id: i64,
    /// Great-circle distance from the query point in meters.
    pub distance_meters: f64,
}

/// Finds an existing open report of the same category near a location.
///
/// Returns the nearest match within the radius. Any match blocks
/// creation, so nearest-first only affects which existing report gets
/// referenced in the duplicate error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuplicateDetector {
    /// The distance threshold in meters.
    pub radius_meters: f64,
}

impl DuplicateDetector {
    /// Creates a detector with a custom radius.
    #[must_use]
    pub const fn new(radius_meters: f64) -> Self {
        Self { radius_meters }
    }

    /// Searches the open reports of a category for one within the
    /// radius of the candidate location.
    ///
    /// Coordinate range validation happens upstream; an empty result
    /// set means no duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage query fails.
    pub fn find_nearby_open<S: Storage>(
        &self,
        storage: &mut S,
        latitude: f64,
        longitude: f64,
        category_id: i64,
    ) -> Result<Option<DuplicateCandidate>, CoreError> {
        let open_reports: Vec<OpenReport> = storage.query_open_by_category(category_id)?;
        Ok(nearest_within(
            &open_reports,
            latitude,
            longitude,
            self.radius_meters,
        ))
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new(DEFAULT_DEDUP_RADIUS_METERS)
    }
}

/// Returns the nearest report within `radius_meters` of the point.
#[must_use]
pub(crate) fn nearest_within(
    reports: &[OpenReport],
    latitude: f64,
    longitude: f64,
    radius_meters: f64,
) -> Option<DuplicateCandidate> {
    reports
        .iter()
        .map(|report| DuplicateCandidate {
            solicitation_id: report.id,
            distance_meters: haversine_distance_meters(
                latitude,
                longitude,
                report.latitude,
                report.longitude,
            ),
        })
        .filter(|candidate| candidate.distance_meters <= radius_meters)
        .min_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters))
}
