//! Plain view models for the rendering collaborator
//!
//! Views are rebuilt in full from `SessionState` after every action. They
//! carry values and display strings only, never markup.

use serde::Serialize;

use crate::budget::{BudgetAllocator, BudgetBreakdown, format_amount};
use crate::error::AetherisError;
use crate::models::trip::{BUDGET_RANGE, DAYS_RANGE};
use crate::models::{ComfortTier, Currency, MapMarker, TripInputs};
use crate::session::{Page, SessionState};

pub const HOME_TITLE: &str = "AETHERIS NEURAL ENGINE";
pub const RETURN_LABEL: &str = "Return to Global Map";
pub const SECURITY_STATUS: &str = "Quantum-Secured Site.";

/// One step of the how-to-operate guide
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GuideStep {
    pub title: &'static str,
    pub text: &'static str,
}

pub const GUIDE: [GuideStep; 4] = [
    GuideStep {
        title: "Search",
        text: "Enter any global city to center the high-precision map.",
    },
    GuideStep {
        title: "Logistics",
        text: "Define your origin, total budget in ₹, and trip length.",
    },
    GuideStep {
        title: "Analysis",
        text: "Review the AI-calculated budget split.",
    },
    GuideStep {
        title: "Deep-Dive",
        text: "Click 'Details' for landmark-specific data.",
    },
];

/// Whatever page the session is on
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Home(HomeView),
    Details(DetailsView),
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub guide: &'static [GuideStep],
    pub inputs: InputsView,
    /// Present once a destination has been resolved in this session
    pub destination: Option<DestinationView>,
}

/// Current values and widget bounds for the Home inputs
#[derive(Debug, Clone, Serialize)]
pub struct InputsView {
    pub origin: String,
    pub budget: u32,
    pub budget_min: u32,
    pub budget_max: u32,
    pub days: u32,
    pub days_min: u32,
    pub days_max: u32,
    pub currency: Currency,
    pub currency_label: String,
    pub tier: ComfortTier,
}

#[derive(Debug, Clone, Serialize)]
pub struct DestinationView {
    pub city: String,
    pub map_heading: String,
    pub marker: MapMarker,
    pub budget: BudgetView,
    pub landmarks: Vec<LandmarkAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetView {
    #[serde(flatten)]
    pub breakdown: BudgetBreakdown,
    pub flight_display: String,
    pub hotel_per_night_display: String,
    pub total_display: String,
    pub total_label: String,
}

/// Button that opens the Details page for one landmark
#[derive(Debug, Clone, Serialize)]
pub struct LandmarkAction {
    pub place: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailsView {
    pub title: String,
    pub place: String,
    pub city: String,
    pub tier: ComfortTier,
    pub origin: String,
    pub analysis: String,
    pub security_status: &'static str,
    pub return_label: &'static str,
}

impl BudgetView {
    #[must_use]
    pub fn new(inputs: &TripInputs) -> Self {
        let breakdown = BudgetAllocator::for_trip(inputs);
        let currency = inputs.currency;

        Self {
            flight_display: format_amount(currency, breakdown.flight_estimate),
            hotel_per_night_display: format_amount(currency, breakdown.hotel_per_night_estimate),
            total_display: format_amount(currency, breakdown.total_converted),
            total_label: format!("Total ({currency})"),
            breakdown,
        }
    }
}

/// Build the full view for the page the session is on
pub fn render(state: &SessionState) -> Result<PageView, AetherisError> {
    match state.page {
        Page::Home => Ok(PageView::Home(render_home(state))),
        Page::Details => render_details(state).map(PageView::Details),
    }
}

fn render_home(state: &SessionState) -> HomeView {
    let inputs = &state.inputs;

    let destination = match (&state.current_city, &state.city_data) {
        (Some(city), Some(data)) => Some(DestinationView {
            city: city.clone(),
            map_heading: format!("Precision Map: {city}"),
            marker: data.marker(),
            budget: BudgetView::new(inputs),
            landmarks: data
                .landmarks
                .iter()
                .map(|place| LandmarkAction {
                    place: place.clone(),
                    label: format!("Details: {place}"),
                })
                .collect(),
        }),
        _ => None,
    };

    HomeView {
        title: HOME_TITLE,
        guide: &GUIDE,
        inputs: InputsView {
            origin: state.user_origin.clone(),
            budget: inputs.budget,
            budget_min: *BUDGET_RANGE.start(),
            budget_max: *BUDGET_RANGE.end(),
            days: inputs.days,
            days_min: *DAYS_RANGE.start(),
            days_max: *DAYS_RANGE.end(),
            currency: inputs.currency,
            currency_label: inputs.currency.label(),
            tier: inputs.tier,
        },
        destination,
    }
}

fn render_details(state: &SessionState) -> Result<DetailsView, AetherisError> {
    if !state.is_consistent() {
        return Err(AetherisError::general(
            "Details page requested without a selected landmark",
        ));
    }
    let (Some(place), Some(city)) = (&state.selected_place, &state.current_city) else {
        return Err(AetherisError::general(
            "Details page requested without a resolved city",
        ));
    };

    Ok(DetailsView {
        title: place.to_uppercase(),
        place: place.clone(),
        city: city.clone(),
        tier: state.inputs.tier,
        origin: state.user_origin.clone(),
        analysis: format!(
            "This sector has been verified for your travel duration. \
             Local transit links are synchronized with your starting point at {}.",
            state.user_origin
        ),
        security_status: SECURITY_STATUS,
        return_label: RETURN_LABEL,
    })
}

/// Sidebar assistant. Blank messages get no reply.
#[must_use]
pub fn assistant_reply(message: &str) -> Option<String> {
    if message.trim().is_empty() {
        return None;
    }
    Some(format!(
        "Analysis for '{message}' is complete. Logistics optimized."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SearchRequest;

    fn searched(query: &str, currency: &str) -> SessionState {
        let mut state = SessionState::default();
        state
            .search(SearchRequest {
                query: query.to_string(),
                currency: Some(currency.to_string()),
                ..SearchRequest::default()
            })
            .unwrap();
        state
    }

    #[test]
    fn test_home_without_destination() {
        let PageView::Home(home) = render(&SessionState::default()).unwrap() else {
            panic!("expected home view");
        };
        assert_eq!(home.title, HOME_TITLE);
        assert_eq!(home.guide.len(), 4);
        assert_eq!(home.inputs.origin, "New Delhi");
        assert_eq!(home.inputs.budget_min, 5_000);
        assert_eq!(home.inputs.days_max, 30);
        assert!(home.destination.is_none());
    }

    #[test]
    fn test_home_with_destination() {
        let state = searched("kyoto", "INR");
        let PageView::Home(home) = render(&state).unwrap() else {
            panic!("expected home view");
        };
        let destination = home.destination.unwrap();
        assert_eq!(destination.map_heading, "Precision Map: Kyoto");
        assert_eq!(destination.marker.latitude, 35.0116);
        assert_eq!(destination.budget.flight_display, "₹20,000");
        assert_eq!(destination.budget.hotel_per_night_display, "₹5,000");
        assert_eq!(destination.budget.total_display, "₹50,000");
        assert_eq!(destination.budget.total_label, "Total (INR (₹))");
        assert_eq!(destination.landmarks.len(), 3);
        assert_eq!(destination.landmarks[1].label, "Details: Kinkaku-ji");
    }

    #[test]
    fn test_home_budget_in_usd() {
        let state = searched("Paris", "USD ($)");
        let PageView::Home(home) = render(&state).unwrap() else {
            panic!("expected home view");
        };
        let budget = home.destination.unwrap().budget;
        assert_eq!(budget.flight_display, "$240");
        assert_eq!(budget.total_display, "$600");
        assert_eq!(budget.total_label, "Total (USD ($))");
    }

    #[test]
    fn test_details_view() {
        let mut state = searched("Kyoto", "EUR");
        state.search(SearchRequest {
            tier: Some(ComfortTier::Quantum),
            ..SearchRequest::default()
        })
        .unwrap();
        state.show_details("Kinkaku-ji").unwrap();

        let PageView::Details(details) = render(&state).unwrap() else {
            panic!("expected details view");
        };
        assert_eq!(details.title, "KINKAKU-JI");
        assert_eq!(details.city, "Kyoto");
        assert_eq!(details.tier, ComfortTier::Quantum);
        assert!(details.analysis.ends_with("starting point at New Delhi."));
        assert_eq!(details.return_label, RETURN_LABEL);
    }

    #[test]
    fn test_details_render_rejects_broken_state() {
        let mut state = SessionState::default();
        state.page = Page::Details;
        assert!(render(&state).is_err());
    }

    #[test]
    fn test_page_view_is_tagged() {
        let json = serde_json::to_value(render(&SessionState::default()).unwrap()).unwrap();
        assert_eq!(json["page"], "home");
        assert!(json["destination"].is_null());
    }

    #[test]
    fn test_assistant_reply() {
        assert_eq!(
            assistant_reply("best time to visit?").as_deref(),
            Some("Analysis for 'best time to visit?' is complete. Logistics optimized.")
        );
        assert!(assistant_reply("   ").is_none());
    }
}
