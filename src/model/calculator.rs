/// Staffing arithmetic - how many people a role needs for a given load
///
/// The whole calculation is one pure function:
/// - split the daily load across shifts
/// - round staff per shift UP against the role norm
/// - round weekly headcount UP against one person's weekly shift capacity
///
/// Rounding up at both steps is the point: demand is never under-staffed.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input parameters for one staffing calculation
/// Deserializes directly from a JSON request file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingRequest {
    /// Orders / guests / dishes arriving per day
    pub items_per_day: f64,
    /// How many of those one person handles in a single shift
    pub norm_per_staff: f64,
    pub shifts_per_day: u32,
    pub restaurant_days_per_week: u32,
    pub staff_days_per_week: u32,
    /// Shifts one person covers on a working day (usually 1, sometimes 2)
    pub shifts_per_staff_per_day: u32,
    /// Label only, carried through to the report
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "Staff".to_string()
}

/// Everything derived from a request, fixed once computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingResult {
    pub role: String,
    pub items_per_day: f64,
    pub norm_per_staff: f64,
    pub shifts_per_day: u32,
    pub items_per_shift: f64,
    pub staff_per_shift: u32,
    pub total_weekly_shifts: u32,
    pub effective_shifts_per_staff: u32,
    pub required_staff: u32,
}

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("invalid input: {field} must be a positive number (got {value})")]
    InvalidInput { field: &'static str, value: f64 },
}

impl CalcError {
    fn invalid(field: &'static str, value: f64) -> Self {
        CalcError::InvalidInput { field, value }
    }
}

/// Compute the required headcount for one role
///
/// Fails on any non-positive divisor and on non-finite throughput or norm,
/// so the result can never carry NaN or infinity. A zero `items_per_day`
/// is accepted and yields zero required staff.
pub fn calculate(request: &StaffingRequest) -> Result<StaffingResult, CalcError> {
    if !request.items_per_day.is_finite() || request.items_per_day < 0.0 {
        return Err(CalcError::invalid("items_per_day", request.items_per_day));
    }
    if !request.norm_per_staff.is_finite() || request.norm_per_staff <= 0.0 {
        return Err(CalcError::invalid("norm_per_staff", request.norm_per_staff));
    }
    if request.shifts_per_day == 0 {
        return Err(CalcError::invalid("shifts_per_day", 0.0));
    }
    if request.staff_days_per_week == 0 {
        return Err(CalcError::invalid("staff_days_per_week", 0.0));
    }
    if request.shifts_per_staff_per_day == 0 {
        return Err(CalcError::invalid("shifts_per_staff_per_day", 0.0));
    }

    let items_per_shift = request.items_per_day / f64::from(request.shifts_per_day);
    let staff_per_shift = (items_per_shift / request.norm_per_staff).ceil() as u32;
    let total_weekly_shifts =
        staff_per_shift * request.shifts_per_day * request.restaurant_days_per_week;
    let effective_shifts_per_staff =
        request.staff_days_per_week * request.shifts_per_staff_per_day;
    let required_staff = total_weekly_shifts.div_ceil(effective_shifts_per_staff);

    Ok(StaffingResult {
        role: request.role.clone(),
        items_per_day: request.items_per_day,
        norm_per_staff: request.norm_per_staff,
        shifts_per_day: request.shifts_per_day,
        items_per_shift,
        staff_per_shift,
        total_weekly_shifts,
        effective_shifts_per_staff,
        required_staff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: f64, norm: f64, shifts: u32, rest_days: u32, staff_days: u32, per_day: u32) -> StaffingRequest {
        StaffingRequest {
            items_per_day: items,
            norm_per_staff: norm,
            shifts_per_day: shifts,
            restaurant_days_per_week: rest_days,
            staff_days_per_week: staff_days,
            shifts_per_staff_per_day: per_day,
            role: "Waiter".to_string(),
        }
    }

    #[test]
    fn test_busy_restaurant_two_shifts() {
        let result = calculate(&request(120.0, 30.0, 2, 7, 5, 1)).unwrap();
        assert_eq!(result.items_per_shift, 60.0);
        assert_eq!(result.staff_per_shift, 2);
        assert_eq!(result.total_weekly_shifts, 28);
        assert_eq!(result.effective_shifts_per_staff, 5);
        assert_eq!(result.required_staff, 6);
    }

    #[test]
    fn test_single_shift_full_week_staff() {
        let result = calculate(&request(100.0, 50.0, 1, 7, 7, 1)).unwrap();
        assert_eq!(result.items_per_shift, 100.0);
        assert_eq!(result.staff_per_shift, 2);
        assert_eq!(result.total_weekly_shifts, 14);
        assert_eq!(result.effective_shifts_per_staff, 7);
        assert_eq!(result.required_staff, 2);
    }

    #[test]
    fn test_minimal_operation_needs_one_person() {
        // Norm far above the load still rounds up to one person on shift
        let result = calculate(&request(20.0, 200.0, 1, 1, 1, 1)).unwrap();
        assert_eq!(result.items_per_shift, 20.0);
        assert_eq!(result.staff_per_shift, 1);
        assert_eq!(result.total_weekly_shifts, 1);
        assert_eq!(result.effective_shifts_per_staff, 1);
        assert_eq!(result.required_staff, 1);
    }

    #[test]
    fn test_exact_norm_does_not_over_round() {
        // 60 items per shift at norm 30 is exactly 2 people, not 3
        let result = calculate(&request(120.0, 30.0, 2, 7, 5, 1)).unwrap();
        assert_eq!(result.staff_per_shift, 2);
    }

    #[test]
    fn test_zero_throughput_means_zero_staff() {
        let result = calculate(&request(0.0, 30.0, 2, 7, 5, 1)).unwrap();
        assert_eq!(result.staff_per_shift, 0);
        assert_eq!(result.required_staff, 0);
    }

    #[test]
    fn test_more_items_never_need_fewer_staff() {
        let mut previous = 0;
        for items in (20..=500).step_by(10) {
            let result = calculate(&request(items as f64, 30.0, 2, 7, 5, 1)).unwrap();
            assert!(result.required_staff >= previous);
            previous = result.required_staff;
        }
    }

    #[test]
    fn test_higher_norm_never_needs_more_staff() {
        let mut previous = u32::MAX;
        for norm in (10..=200).step_by(5) {
            let result = calculate(&request(120.0, norm as f64, 2, 7, 5, 1)).unwrap();
            assert!(result.required_staff <= previous);
            previous = result.required_staff;
        }
    }

    #[test]
    fn test_same_request_same_result() {
        let req = request(120.0, 30.0, 2, 7, 5, 1);
        assert_eq!(calculate(&req).unwrap(), calculate(&req).unwrap());
    }

    #[test]
    fn test_rejects_zero_divisors() {
        assert!(calculate(&request(120.0, 30.0, 0, 7, 5, 1)).is_err());
        assert!(calculate(&request(120.0, 0.0, 2, 7, 5, 1)).is_err());
        assert!(calculate(&request(120.0, -30.0, 2, 7, 5, 1)).is_err());
        assert!(calculate(&request(120.0, 30.0, 2, 7, 0, 1)).is_err());
        assert!(calculate(&request(120.0, 30.0, 2, 7, 5, 0)).is_err());
    }

    #[test]
    fn test_rejects_non_finite_numbers() {
        assert!(calculate(&request(f64::NAN, 30.0, 2, 7, 5, 1)).is_err());
        assert!(calculate(&request(-1.0, 30.0, 2, 7, 5, 1)).is_err());
        assert!(calculate(&request(120.0, f64::INFINITY, 2, 7, 5, 1)).is_err());
    }

    #[test]
    fn test_invalid_input_names_the_field() {
        let err = calculate(&request(120.0, 30.0, 0, 7, 5, 1)).unwrap_err();
        assert_eq!(
            err,
            CalcError::InvalidInput {
                field: "shifts_per_day",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_request_parses_with_default_role() {
        let json = r#"{
            "items_per_day": 120,
            "norm_per_staff": 30,
            "shifts_per_day": 2,
            "restaurant_days_per_week": 7,
            "staff_days_per_week": 5,
            "shifts_per_staff_per_day": 1
        }"#;
        let req: StaffingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.role, "Staff");
        assert_eq!(calculate(&req).unwrap().required_staff, 6);
    }
}
