//! Overdue detection and per-company status tiers.
//!
//! Two day measures are used:
//! - the overdue list compares fractional elapsed days against the period;
//! - status tiers compare whole (floored) elapsed days, so a company exactly
//!   one period past its last contact reads `DueToday` for that whole day.

use crate::model::company::Company;
use crate::model::DAY_MS;
use crate::store::TrackerState;
use serde::{Deserialize, Serialize};

/// Dashboard status tier of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyStatus {
    /// Elapsed whole days exceed the periodicity.
    Overdue,
    /// Elapsed whole days equal the periodicity.
    DueToday,
    /// Still inside the periodicity window.
    Normal,
}

/// Whole days since the company's last communication, floored.
///
/// Returns `None` when the company has no last communication date.
pub fn days_since_last_communication(company: &Company, now: i64) -> Option<i64> {
    let last = company.last_communication_date?;
    Some(now.saturating_sub(last).div_euclid(DAY_MS))
}

/// Classifies a company into a status tier at `now`.
pub fn company_status(company: &Company, now: i64) -> CompanyStatus {
    let Some(days) = days_since_last_communication(company, now) else {
        return CompanyStatus::Overdue;
    };
    let period = i64::from(company.effective_periodicity_days());

    if days > period {
        CompanyStatus::Overdue
    } else if days == period {
        CompanyStatus::DueToday
    } else {
        CompanyStatus::Normal
    }
}

/// Returns whether fractional elapsed days strictly exceed the periodicity.
pub fn is_overdue(company: &Company, now: i64) -> bool {
    let Some(last) = company.last_communication_date else {
        return true;
    };
    let elapsed_ms = now.saturating_sub(last);
    let period_ms = i64::from(company.effective_periodicity_days()) * DAY_MS;
    elapsed_ms > period_ms
}

/// Lists overdue companies in stored order.
pub fn overdue_companies(state: &TrackerState, now: i64) -> Vec<&Company> {
    state
        .companies
        .iter()
        .filter(|company| is_overdue(company, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{company_status, days_since_last_communication, is_overdue, CompanyStatus};
    use crate::model::company::{Company, NewCompany};
    use crate::model::DAY_MS;

    fn company_at(last: i64, period: u32) -> Company {
        let mut input = NewCompany::named("Acme");
        input.communication_periodicity = Some(period);
        Company::from_new(input, 14, last)
    }

    #[test]
    fn status_boundaries_follow_whole_days() {
        let company = company_at(0, 10);
        assert_eq!(company_status(&company, 9 * DAY_MS), CompanyStatus::Normal);
        assert_eq!(
            company_status(&company, 10 * DAY_MS),
            CompanyStatus::DueToday
        );
        assert_eq!(
            company_status(&company, 10 * DAY_MS + DAY_MS / 2),
            CompanyStatus::DueToday
        );
        assert_eq!(company_status(&company, 11 * DAY_MS), CompanyStatus::Overdue);
    }

    #[test]
    fn overdue_predicate_uses_fractional_days() {
        let company = company_at(0, 10);
        assert!(!is_overdue(&company, 10 * DAY_MS));
        assert!(is_overdue(&company, 10 * DAY_MS + 1));
    }

    #[test]
    fn missing_date_is_overdue() {
        let mut company = company_at(0, 10);
        company.last_communication_date = None;
        assert!(is_overdue(&company, 0));
        assert_eq!(company_status(&company, 0), CompanyStatus::Overdue);
        assert_eq!(days_since_last_communication(&company, 0), None);
    }

    #[test]
    fn future_last_date_floors_below_zero() {
        let company = company_at(DAY_MS, 10);
        assert_eq!(days_since_last_communication(&company, 1), Some(-1));
        assert_eq!(company_status(&company, 1), CompanyStatus::Normal);
    }
}
