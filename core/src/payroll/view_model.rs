use chrono::NaiveDate;
use log::info;
use thiserror::Error;

use super::repository;
use super::window::{is_selectable_anchor, PayrollWindow};
use crate::api::{ApiClient, ApiError, TotalsOutcome, TripSummaryResponse};

/// Rejections of a proposed end anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("Payroll windows must end on a Saturday.")]
    NotAnAnchorDay,
    #[error("Payroll windows cannot end in the future.")]
    EndsInFuture,
}

/// Drives the gross-payroll page: pick a seven-day window, list the
/// trips that fall inside it, and ask the backend to compute and store
/// the totals.
pub struct GrossPayrollViewModel {
    api: ApiClient,
    window: Option<PayrollWindow>,
    trips: Vec<TripSummaryResponse>,
    totals: Option<TotalsOutcome>,
}

impl GrossPayrollViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            window: None,
            trips: Vec::new(),
            totals: None,
        }
    }

    pub fn window(&self) -> Option<PayrollWindow> {
        self.window
    }

    pub fn trips(&self) -> &[TripSummaryResponse] {
        &self.trips
    }

    pub fn totals_outcome(&self) -> Option<&TotalsOutcome> {
        self.totals.as_ref()
    }

    /// True once totals were computed for the current window; the UI
    /// disables the calculate action on this.
    pub fn totals_calculated(&self) -> bool {
        self.totals.is_some()
    }

    /// Anchors the window to a chosen end date. The anchor must be a
    /// Saturday no later than today; the start is derived, never picked.
    pub fn select_end_anchor(
        &mut self,
        end: NaiveDate,
        today: NaiveDate,
    ) -> Result<PayrollWindow, WindowError> {
        if end > today {
            return Err(WindowError::EndsInFuture);
        }
        if !is_selectable_anchor(end, today) {
            return Err(WindowError::NotAnAnchorDay);
        }
        let window = PayrollWindow::anchored_to_end(end);
        self.replace_window(window);
        Ok(window)
    }

    /// Derives the window forward from a chosen start date. Returns
    /// whether the end had to be clamped to today so the caller can
    /// notify the operator.
    pub fn select_start(&mut self, start: NaiveDate, today: NaiveDate) -> (PayrollWindow, bool) {
        let (window, clamped) = PayrollWindow::from_start(start, today);
        if clamped {
            info!(
                "Payroll window end adjusted to today ({}) since it exceeds the current date",
                today
            );
        }
        self.replace_window(window);
        (window, clamped)
    }

    pub fn clear(&mut self) {
        self.window = None;
        self.trips.clear();
        self.totals = None;
    }

    pub async fn load_trips(&mut self) -> Result<&[TripSummaryResponse], ApiError> {
        let window = self.selected_window()?;
        self.trips = repository::fetch_trips_in_window(&self.api, window).await?;
        Ok(&self.trips)
    }

    /// Asks the backend to compute and store the window's totals. Once
    /// an outcome exists for the current window it is returned as-is
    /// instead of re-posting.
    pub async fn calculate_totals(&mut self) -> Result<&TotalsOutcome, ApiError> {
        let window = self.selected_window()?;
        let outcome = match self.totals.take() {
            Some(outcome) => outcome,
            None => repository::calculate_totals(&self.api, window).await?,
        };
        Ok(self.totals.insert(outcome))
    }

    fn selected_window(&self) -> Result<PayrollWindow, ApiError> {
        self.window
            .ok_or_else(|| ApiError::validation("Select a payroll window first."))
    }

    fn replace_window(&mut self, window: PayrollWindow) {
        self.window = Some(window);
        self.trips.clear();
        self.totals = None;
    }
}
