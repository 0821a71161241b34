//! Per-session navigation state
//!
//! `SessionState` is only mutated through the named transitions below.
//! Each transition completes before the caller renders the next view.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::city_resolver::{CityResolver, normalize_city_name};
use crate::error::AetherisError;
use crate::models::{ComfortTier, Currency, ResolvedCityData, TripInputs};

pub const DEFAULT_ORIGIN: &str = "New Delhi";

/// Page the session is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Details,
}

/// Everything one user session remembers between interactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub page: Page,
    pub current_city: Option<String>,
    pub city_data: Option<ResolvedCityData>,
    pub user_origin: String,
    pub selected_place: Option<String>,
    /// Last submitted budget, trip length, currency and tier
    pub inputs: TripInputs,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN, TripInputs::default())
    }
}

/// Sidebar settings, available on every page. Absent fields are unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesRequest {
    /// Currency code (`"USD"`) or label (`"USD ($)"`)
    pub currency: Option<String>,
    pub tier: Option<ComfortTier>,
}

/// A Home page submission. Absent fields keep their previous values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    pub origin: Option<String>,
    pub budget: Option<u32>,
    pub days: Option<u32>,
    /// Currency code (`"USD"`) or label (`"USD ($)"`)
    pub currency: Option<String>,
    pub tier: Option<ComfortTier>,
}

impl SessionState {
    #[must_use]
    pub fn new(origin: impl Into<String>, inputs: TripInputs) -> Self {
        Self {
            page: Page::Home,
            current_city: None,
            city_data: None,
            user_origin: origin.into(),
            selected_place: None,
            inputs,
        }
    }

    /// Apply a Home submission.
    ///
    /// Origin and trip inputs are stored even when the query is blank; a blank
    /// query leaves the last resolved city in place.
    pub fn search(&mut self, request: SearchRequest) -> Result<(), AetherisError> {
        if self.page != Page::Home {
            return Err(AetherisError::invalid_transition(
                "Searching is only possible from the Home page",
            ));
        }

        let inputs = self.merge_inputs(&request)?;
        inputs.validate()?;
        self.inputs = inputs;

        if let Some(origin) = request.origin {
            self.user_origin = origin;
        }

        let city = normalize_city_name(&request.query);
        if city.is_empty() {
            return Ok(());
        }

        let data = CityResolver::resolve_normalized(&city);
        info!("Resolved destination {} ({} landmarks)", city, data.landmarks.len());
        self.current_city = Some(city);
        self.city_data = Some(data);
        Ok(())
    }

    /// Change display currency or comfort tier without leaving the current page
    pub fn set_preferences(&mut self, request: PreferencesRequest) -> Result<(), AetherisError> {
        if let Some(label) = request.currency.as_deref() {
            self.inputs.currency = label.parse::<Currency>()?;
        }
        if let Some(tier) = request.tier {
            self.inputs.tier = tier;
        }
        Ok(())
    }

    /// Home -> Details for one of the current city's landmarks
    pub fn show_details(&mut self, place: &str) -> Result<(), AetherisError> {
        if self.page != Page::Home {
            return Err(AetherisError::invalid_transition(
                "Details can only be opened from the Home page",
            ));
        }

        let data = self.city_data.as_ref().ok_or_else(|| {
            AetherisError::invalid_transition("Search for a destination before opening details")
        })?;

        if !data.has_landmark(place) {
            return Err(AetherisError::invalid_transition(format!(
                "'{place}' is not a landmark of the current destination"
            )));
        }

        self.selected_place = Some(place.to_string());
        self.page = Page::Details;
        info!("Opened details for {}", place);
        Ok(())
    }

    /// Details -> Home. The last search result and selection are kept.
    pub fn return_home(&mut self) {
        if self.page == Page::Details {
            info!("Returned to Home");
        }
        self.page = Page::Home;
    }

    /// Holds when Details always has city data and a selected landmark of it
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.page {
            Page::Home => true,
            Page::Details => match (&self.city_data, &self.selected_place) {
                (Some(data), Some(place)) => data.has_landmark(place),
                _ => false,
            },
        }
    }

    fn merge_inputs(&self, request: &SearchRequest) -> Result<TripInputs, AetherisError> {
        let currency = match request.currency.as_deref() {
            Some(label) => label.parse::<Currency>()?,
            None => self.inputs.currency,
        };

        Ok(TripInputs {
            budget: request.budget.unwrap_or(self.inputs.budget),
            days: request.days.unwrap_or(self.inputs.days),
            currency,
            tier: request.tier.unwrap_or(self.inputs.tier),
        })
    }
}
