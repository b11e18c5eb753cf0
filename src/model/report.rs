/// Row-oriented presentation of a staffing result
///
/// One (label, value) row per field, in the order the result table is
/// shown and exported. All display formatting lives here: items per
/// shift gets exactly one decimal place, everything else prints plain.
use super::calculator::StaffingResult;

pub fn headers() -> Vec<&'static str> {
    vec!["Parameter", "Value"]
}

pub fn result_rows(result: &StaffingResult) -> Vec<(String, String)> {
    vec![
        ("Role".to_string(), result.role.clone()),
        (
            "Service items per day".to_string(),
            format!("{}", result.items_per_day),
        ),
        ("Shifts per day".to_string(), result.shifts_per_day.to_string()),
        (
            "Norm per staff member".to_string(),
            format!("{}", result.norm_per_staff),
        ),
        (
            "Items per shift".to_string(),
            format!("{:.1}", result.items_per_shift),
        ),
        (
            "Staff per shift".to_string(),
            result.staff_per_shift.to_string(),
        ),
        (
            "Weekly shifts (total)".to_string(),
            result.total_weekly_shifts.to_string(),
        ),
        (
            "Weekly shifts (one person)".to_string(),
            result.effective_shifts_per_staff.to_string(),
        ),
        (
            "Required staff".to_string(),
            result.required_staff.to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::calculator::{calculate, StaffingRequest};

    fn sample_result() -> StaffingResult {
        calculate(&StaffingRequest {
            items_per_day: 125.0,
            norm_per_staff: 30.0,
            shifts_per_day: 2,
            restaurant_days_per_week: 7,
            staff_days_per_week: 5,
            shifts_per_staff_per_day: 1,
            role: "Waiter".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_rows_keep_table_order() {
        let rows = result_rows(&sample_result());
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].0, "Role");
        assert_eq!(rows[0].1, "Waiter");
        assert_eq!(rows.last().unwrap().0, "Required staff");
    }

    #[test]
    fn test_items_per_shift_has_one_decimal() {
        // 125 / 2 = 62.5 must display as written, 120 / 2 as 60.0
        let rows = result_rows(&sample_result());
        assert_eq!(rows[4], ("Items per shift".to_string(), "62.5".to_string()));

        let request = StaffingRequest {
            items_per_day: 120.0,
            norm_per_staff: 30.0,
            shifts_per_day: 2,
            restaurant_days_per_week: 7,
            staff_days_per_week: 5,
            shifts_per_staff_per_day: 1,
            role: "Waiter".to_string(),
        };
        let rows = result_rows(&calculate(&request).unwrap());
        assert_eq!(rows[4].1, "60.0");
    }

    #[test]
    fn test_whole_inputs_print_plain() {
        let rows = result_rows(&sample_result());
        assert_eq!(rows[1].1, "125");
        assert_eq!(rows[3].1, "30");
    }

    #[test]
    fn test_headers() {
        assert_eq!(headers(), vec!["Parameter", "Value"]);
    }
}
