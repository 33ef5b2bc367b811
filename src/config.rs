//! Run configuration.
//!
//! Deserializable with defaults so a partial document (e.g. only
//! `staff_per_shift`) is enough:
//!
//! ```
//! use u_roster::config::RosterConfig;
//!
//! let cfg: RosterConfig = serde_json::from_str(r#"{"staff_per_shift": 2}"#).unwrap();
//! assert_eq!(cfg.staff_per_shift, 2);
//! assert_eq!(cfg.shift_hours.night, 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, RosterResult};
use crate::models::{FairnessSeed, ShiftHours, UnavailabilitySet};
use crate::scheduler::RosterRequest;

/// Headcount and shift durations for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// People required on every shift.
    pub staff_per_shift: usize,
    /// Hours per shift type, used for work statistics.
    pub shift_hours: ShiftHours,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            staff_per_shift: 1,
            shift_hours: ShiftHours::default(),
        }
    }
}

impl RosterConfig {
    /// Sets the headcount per shift.
    pub fn with_staff_per_shift(mut self, staff_per_shift: usize) -> Self {
        self.staff_per_shift = staff_per_shift;
        self
    }

    /// Sets the shift durations.
    pub fn with_shift_hours(mut self, shift_hours: ShiftHours) -> Self {
        self.shift_hours = shift_hours;
        self
    }

    /// Checks headcount ≥ 1 and every shift ≥ 1 hour.
    pub fn validate(&self) -> RosterResult<()> {
        if self.staff_per_shift == 0 {
            return Err(RosterError::InvalidHeadcount);
        }
        self.shift_hours.validate()
    }

    /// Builds a generation request for `staff` under this configuration.
    pub fn request(
        &self,
        staff: Vec<String>,
        prior_week: Option<FairnessSeed>,
        unavailability: UnavailabilitySet,
    ) -> RosterResult<RosterRequest> {
        self.validate()?;
        Ok(RosterRequest {
            staff,
            staff_per_shift: self.staff_per_shift,
            prior_week,
            unavailability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;

    #[test]
    fn test_defaults() {
        let cfg = RosterConfig::default();
        assert_eq!(cfg.staff_per_shift, 1);
        assert_eq!(cfg.shift_hours, ShiftHours::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let cfg: RosterConfig =
            serde_json::from_str(r#"{"shift_hours": {"night": 12}}"#).unwrap();
        assert_eq!(cfg.staff_per_shift, 1);
        assert_eq!(cfg.shift_hours.night, 12);
        assert_eq!(cfg.shift_hours.morning, 8);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let cfg = RosterConfig::default().with_staff_per_shift(0);
        assert_eq!(cfg.validate().unwrap_err(), RosterError::InvalidHeadcount);

        let cfg = RosterConfig::default().with_shift_hours(ShiftHours {
            morning: 8,
            day: 8,
            night: 0,
        });
        assert_eq!(
            cfg.validate().unwrap_err(),
            RosterError::InvalidShiftHours {
                shift: ShiftType::Night
            }
        );
    }

    #[test]
    fn test_request() {
        let cfg = RosterConfig::default().with_staff_per_shift(2);
        let req = cfg
            .request(vec!["A".into()], None, UnavailabilitySet::new())
            .unwrap();
        assert_eq!(req.staff_per_shift, 2);
        assert_eq!(req.staff, vec!["A".to_string()]);
    }
}
