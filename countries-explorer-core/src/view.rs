//! Listing / detail state machine
//!
//! ```text
//! Loading ──ok──▶ Ready { Listing ⇄ Detail }
//!    │
//!    └──err──▶ Failed ──retry──▶ Loading
//! ```

use countries_explorer_provider::Country;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::filter::FilterState;

/// Identifies one catalog load. Only the newest ticket may complete.
pub type LoadTicket = u64;

/// Screen inside the `Ready` state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Screen {
    #[default]
    Listing,
    Detail {
        cca3: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ViewState {
    Loading { ticket: LoadTicket },
    Ready { catalog: Catalog, screen: Screen },
    Failed { message: String },
}

/// Result of [`ViewController::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStart {
    /// A new load was started; the caller must fetch and complete it.
    Started(LoadTicket),
    /// A load is already running; nothing to do.
    InFlight(LoadTicket),
}

impl LoadStart {
    pub fn ticket(self) -> LoadTicket {
        match self {
            Self::Started(t) | Self::InFlight(t) => t,
        }
    }

    pub fn is_started(self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// Owns the view state and the filter; every change goes through a transition
/// method.
///
/// Mutating methods return `true` when the state changed, so the caller knows
/// whether to redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewController {
    state: ViewState,
    filter: FilterState,
    last_ticket: LoadTicket,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewController {
    /// A controller whose first load (ticket 1) is pending.
    ///
    /// The host starts that load with [`current_ticket`](Self::current_ticket).
    pub fn new() -> Self {
        Self {
            state: ViewState::Loading { ticket: 1 },
            filter: FilterState::default(),
            last_ticket: 1,
        }
    }

    // ===== 查询 =====

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    /// The ticket of the running load, if any.
    pub fn current_ticket(&self) -> Option<LoadTicket> {
        match self.state {
            ViewState::Loading { ticket } => Some(ticket),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            ViewState::Ready { catalog, .. } => Some(catalog),
            _ => None,
        }
    }

    pub fn screen(&self) -> Option<&Screen> {
        match &self.state {
            ViewState::Ready { screen, .. } => Some(screen),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// The visible subset; empty unless `Ready`.
    pub fn visible(&self) -> Vec<&Country> {
        self.catalog()
            .map(|c| c.visible(&self.filter))
            .unwrap_or_default()
    }

    /// Regions for the region selector; empty unless `Ready`.
    pub fn regions(&self) -> Vec<String> {
        self.catalog()
            .map(Catalog::regions_present)
            .unwrap_or_default()
    }

    /// `true` in the listing when nothing matches the filter.
    pub fn has_no_results(&self) -> bool {
        matches!(self.screen(), Some(Screen::Listing)) && self.visible().is_empty()
    }

    /// The country shown on the detail screen.
    pub fn selected(&self) -> Option<&Country> {
        match &self.state {
            ViewState::Ready {
                catalog,
                screen: Screen::Detail { cca3 },
            } => catalog.get(cca3),
            _ => None,
        }
    }

    // ===== 加载 =====

    /// Enter `Loading` with a fresh ticket.
    ///
    /// While a load is already running its ticket is returned and no second
    /// load is started.
    pub fn begin_load(&mut self) -> LoadStart {
        if let ViewState::Loading { ticket } = self.state {
            return LoadStart::InFlight(ticket);
        }
        self.last_ticket += 1;
        self.state = ViewState::Loading {
            ticket: self.last_ticket,
        };
        log::debug!("Catalog load started (ticket {})", self.last_ticket);
        LoadStart::Started(self.last_ticket)
    }

    /// Leave `Failed` for a fresh load. `None` in any other state.
    pub fn retry(&mut self) -> Option<LoadTicket> {
        match self.state {
            ViewState::Failed { .. } => Some(self.begin_load().ticket()),
            _ => None,
        }
    }

    /// Deliver the result of load `ticket`.
    ///
    /// Stale tickets are dropped. A failure moves to `Failed` with the
    /// error's message; no partial catalog is kept.
    pub fn complete_load(&mut self, ticket: LoadTicket, result: CoreResult<Catalog>) -> bool {
        if self.current_ticket() != Some(ticket) {
            log::debug!("Dropping stale catalog load (ticket {ticket})");
            return false;
        }
        self.state = match result {
            Ok(catalog) => ViewState::Ready {
                catalog,
                screen: Screen::Listing,
            },
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Catalog load failed: {e}");
                } else {
                    log::error!("Catalog load failed: {e}");
                }
                ViewState::Failed {
                    message: e.to_string(),
                }
            }
        };
        true
    }

    // ===== 筛选 =====

    /// Replace the search term. Only honoured on the listing screen.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        if !self.is_listing() {
            return false;
        }
        let term = term.into();
        if self.filter.search_term == term {
            return false;
        }
        self.filter.search_term = term;
        true
    }

    /// Replace the region (`None` = all regions). Only honoured on the
    /// listing screen.
    pub fn set_region(&mut self, region: Option<String>) -> bool {
        if !self.is_listing() {
            return false;
        }
        let before = self.filter.region.clone();
        self.filter.set_region(region);
        self.filter.region != before
    }

    // ===== 导航 =====

    /// Listing → Detail for `cca3`. Unknown codes are ignored.
    pub fn select(&mut self, cca3: &str) -> bool {
        let ViewState::Ready { catalog, screen } = &mut self.state else {
            return false;
        };
        if *screen != Screen::Listing || catalog.get(cca3).is_none() {
            return false;
        }
        *screen = Screen::Detail {
            cca3: cca3.to_string(),
        };
        true
    }

    /// Detail → Listing. The filter is left as it was.
    pub fn back(&mut self) -> bool {
        let ViewState::Ready { screen, .. } = &mut self.state else {
            return false;
        };
        if *screen == Screen::Listing {
            return false;
        }
        *screen = Screen::Listing;
        true
    }

    fn is_listing(&self) -> bool {
        matches!(self.screen(), Some(Screen::Listing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::test_utils::sample_countries;

    fn ready() -> ViewController {
        let mut vc = ViewController::new();
        let ticket = vc.current_ticket().unwrap();
        assert!(vc.complete_load(ticket, Ok(Catalog::from_countries(sample_countries()))));
        vc
    }

    #[test]
    fn starts_loading_with_first_ticket() {
        let vc = ViewController::new();
        assert!(vc.is_loading());
        assert_eq!(vc.current_ticket(), Some(1));
        assert!(vc.visible().is_empty());
        assert!(!vc.has_no_results());
    }

    #[test]
    fn begin_load_while_loading_returns_current_ticket() {
        let mut vc = ViewController::new();
        assert_eq!(vc.begin_load(), LoadStart::InFlight(1));
        assert_eq!(vc.current_ticket(), Some(1));
    }

    #[test]
    fn failed_load_then_retry() {
        let mut vc = ViewController::new();
        assert!(vc.complete_load(1, Err(CoreError::NetworkError("refused".to_string()))));
        assert_eq!(vc.error_message(), Some("Network error: refused"));
        assert!(vc.catalog().is_none());

        let ticket = vc.retry().unwrap();
        assert_eq!(ticket, 2);
        assert!(vc.is_loading());
    }

    #[test]
    fn retry_is_only_valid_from_failed() {
        let mut vc = ViewController::new();
        assert_eq!(vc.retry(), None);
        let mut vc = ready();
        assert_eq!(vc.retry(), None);
        assert!(vc.catalog().is_some());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut vc = ViewController::new();
        vc.complete_load(1, Err(CoreError::NetworkError("refused".to_string())));
        vc.retry();

        assert!(!vc.complete_load(1, Ok(Catalog::from_countries(sample_countries()))));
        assert!(vc.is_loading());

        assert!(vc.complete_load(2, Ok(Catalog::from_countries(sample_countries()))));
        assert!(!vc.complete_load(2, Ok(Catalog::from_countries(Vec::new()))));
        assert_eq!(vc.catalog().map(Catalog::len), Some(5));
    }

    #[test]
    fn filter_ignored_until_ready() {
        let mut vc = ViewController::new();
        assert!(!vc.set_search_term("fr"));
        assert!(!vc.set_region(Some("Europe".to_string())));
        assert_eq!(vc.filter(), &FilterState::default());
    }

    #[test]
    fn unchanged_filter_reports_no_change() {
        let mut vc = ready();
        assert!(vc.set_search_term("fr"));
        assert!(!vc.set_search_term("fr"));
        assert!(vc.set_region(Some("Europe".to_string())));
        assert!(!vc.set_region(Some("Europe".to_string())));
        assert!(vc.set_region(None));
    }

    #[test]
    fn select_unknown_code_is_ignored() {
        let mut vc = ready();
        assert!(!vc.select("WAK"));
        assert_eq!(vc.screen(), Some(&Screen::Listing));
    }

    #[test]
    fn detail_ignores_filter_and_second_select() {
        let mut vc = ready();
        assert!(vc.select("FRA"));
        assert!(!vc.set_search_term("bra"));
        assert!(!vc.select("BRA"));
        assert_eq!(vc.selected().map(|c| c.cca3.as_str()), Some("FRA"));
        assert!(!vc.has_no_results());
    }

    #[test]
    fn back_outside_detail_is_noop() {
        let mut vc = ready();
        assert!(!vc.back());
        let mut loading = ViewController::new();
        assert!(!loading.back());
    }

    #[test]
    fn state_serializes_with_tags() {
        let mut vc = ready();
        vc.select("FRA");
        let json = serde_json::to_value(&vc).unwrap();
        assert_eq!(json["state"]["status"], "ready");
        assert_eq!(json["state"]["screen"]["mode"], "detail");
        assert_eq!(json["state"]["screen"]["cca3"], "FRA");

        let back: ViewController = serde_json::from_value(json).unwrap();
        assert_eq!(back, vc);
    }
}
