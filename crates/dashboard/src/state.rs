//! Application state for the dashboard.
//!
//! One explicit [`App`] struct owns everything the UI shows: the active
//! section, the latest snapshot per section, the transient alert, and the
//! per-region request generations. There is no ambient shared state;
//! update and render functions receive the struct explicitly.

use std::time::{Duration, Instant};

use skillgap_analysis::{GapSummary, RecommendationSummary};
use skillgap_client::ApiClient;
use skillgap_model::{Employee, Skill};
use tokio::sync::mpsc;

use crate::load::{self, DashboardData, LoadEvent};

/// How long an alert stays on screen before auto-dismissing.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

const EVENT_CHANNEL_CAPACITY: usize = 32;

/// The four navigable sections of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Employees,
    Skills,
    Analysis,
}

impl Section {
    /// Sections in tab order.
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Employees,
        Section::Skills,
        Section::Analysis,
    ];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Employees => "Employees",
            Section::Skills => "Skills",
            Section::Analysis => "Analysis",
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(&self) -> usize {
        Section::ALL
            .iter()
            .position(|section| section == self)
            .unwrap_or(0)
    }

    /// Next section, wrapping.
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// Previous section, wrapping.
    pub fn prev(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// Severity of a transient alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Info,
    Error,
}

/// A transient, dismissible status message.
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub level: AlertLevel,
    raised_at: Instant,
}

impl Alert {
    fn new(message: String, level: AlertLevel) -> Self {
        Self {
            message,
            level,
            raised_at: Instant::now(),
        }
    }

    /// True once the alert has outlived [`ALERT_TTL`].
    pub fn expired(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= ALERT_TTL
    }
}

/// Monotonic request generations, one per view region.
///
/// A load captures the generation at issue time; a result is applied only
/// while its generation is still current, which makes concurrent loads
/// deterministic: the latest issued request wins.
#[derive(Debug, Default)]
pub struct Generations {
    dashboard: u64,
    employees: u64,
    skills: u64,
    analysis: u64,
}

impl Generations {
    /// Issues a new generation for a region, invalidating in-flight loads.
    pub fn issue(&mut self, section: Section) -> u64 {
        let slot = self.slot_mut(section);
        *slot += 1;
        *slot
    }

    /// The generation a result must carry to be applied.
    pub fn current(&self, section: Section) -> u64 {
        match section {
            Section::Dashboard => self.dashboard,
            Section::Employees => self.employees,
            Section::Skills => self.skills,
            Section::Analysis => self.analysis,
        }
    }

    fn slot_mut(&mut self, section: Section) -> &mut u64 {
        match section {
            Section::Dashboard => &mut self.dashboard,
            Section::Employees => &mut self.employees,
            Section::Skills => &mut self.skills,
            Section::Analysis => &mut self.analysis,
        }
    }
}

/// All state behind the dashboard UI.
pub struct App {
    pub(crate) client: ApiClient,
    pub(crate) section: Section,
    pub(crate) should_quit: bool,
    /// Number of loads currently in flight (drives the loading indicator).
    pub(crate) in_flight: usize,
    pub(crate) alert: Option<Alert>,
    pub(crate) generations: Generations,

    // Latest snapshots, each replaced wholesale by its next load.
    pub(crate) dashboard: DashboardData,
    pub(crate) employees: Vec<Employee>,
    pub(crate) skills: Vec<Skill>,
    pub(crate) gap_summary: Option<GapSummary>,
    pub(crate) recommendations: Option<RecommendationSummary>,
    pub(crate) last_refresh: Option<time::OffsetDateTime>,

    pub(crate) events_tx: mpsc::Sender<LoadEvent>,
}

impl App {
    /// Creates the app with empty snapshots, returning the receiver the
    /// run loop drains load events from. Nothing is loaded until
    /// [`App::request`] is called (the run loop requests the dashboard
    /// immediately).
    pub fn new(client: ApiClient) -> (Self, mpsc::Receiver<LoadEvent>) {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let app = Self {
            client,
            section: Section::Dashboard,
            should_quit: false,
            in_flight: 0,
            alert: None,
            generations: Generations::default(),
            dashboard: DashboardData::default(),
            employees: Vec::new(),
            skills: Vec::new(),
            gap_summary: None,
            recommendations: None,
            last_refresh: None,
            events_tx,
        };
        (app, events_rx)
    }

    /// The active section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Signals the run loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Switches section and requests its data (the analysis section loads
    /// on demand only).
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
        match section {
            Section::Dashboard | Section::Employees | Section::Skills => self.request(section),
            Section::Analysis => {}
        }
    }

    /// Issues a fresh load for a region. The analysis region only loads
    /// via the explicit actions below, so requesting it is a no-op.
    pub fn request(&mut self, section: Section) {
        if section == Section::Analysis {
            return;
        }
        let generation = self.generations.issue(section);
        self.in_flight += 1;
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        match section {
            Section::Dashboard => load::spawn_dashboard(client, tx, generation),
            Section::Employees => load::spawn_employees(client, tx, generation),
            Section::Skills => load::spawn_skills(client, tx, generation),
            Section::Analysis => {}
        }
    }

    /// Triggers a gap-analysis run (the analysis region's generation
    /// covers both this and the recommendations request).
    pub fn run_analysis(&mut self) {
        let generation = self.generations.issue(Section::Analysis);
        self.in_flight += 1;
        load::spawn_analysis(self.client.clone(), self.events_tx.clone(), generation);
    }

    /// Requests training recommendations.
    pub fn fetch_recommendations(&mut self) {
        let generation = self.generations.issue(Section::Analysis);
        self.in_flight += 1;
        load::spawn_recommendations(self.client.clone(), self.events_tx.clone(), generation);
    }

    /// Applies a completed load. Results from superseded generations are
    /// dropped; errors raise an alert and leave the old snapshot in place.
    pub fn apply(&mut self, event: LoadEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match event {
            LoadEvent::Dashboard { generation, result } => {
                if self.stale(Section::Dashboard, generation) {
                    return;
                }
                match result {
                    Ok(data) => {
                        self.dashboard = data;
                        self.mark_refreshed();
                    }
                    Err(err) => self.alert_error(format!("Failed to load dashboard data: {err}")),
                }
            }
            LoadEvent::Employees { generation, result } => {
                if self.stale(Section::Employees, generation) {
                    return;
                }
                match result {
                    Ok(response) => {
                        self.employees = response.employees;
                        self.mark_refreshed();
                    }
                    Err(err) => self.alert_error(format!("Failed to load employees: {err}")),
                }
            }
            LoadEvent::Skills { generation, result } => {
                if self.stale(Section::Skills, generation) {
                    return;
                }
                match result {
                    Ok(response) => {
                        self.skills = response.skills;
                        self.mark_refreshed();
                    }
                    Err(err) => self.alert_error(format!("Failed to load skills: {err}")),
                }
            }
            LoadEvent::Analysis { generation, result } => {
                if self.stale(Section::Analysis, generation) {
                    return;
                }
                match result {
                    Ok(report) => {
                        self.alert_success(format!(
                            "Analysis completed! Found {} skill gaps across {} employees.",
                            report.total_gaps_found, report.analyzed_employees
                        ));
                        self.gap_summary = Some(GapSummary::from_report(Some(&report)));
                        self.mark_refreshed();
                        // A fresh run changes the headline tiles.
                        if self.section == Section::Dashboard {
                            self.request(Section::Dashboard);
                        }
                    }
                    Err(err) => self.alert_error(format!("Failed to run skill gap analysis: {err}")),
                }
            }
            LoadEvent::Recommendations { generation, result } => {
                if self.stale(Section::Analysis, generation) {
                    return;
                }
                match result {
                    Ok(response) => {
                        self.recommendations =
                            Some(RecommendationSummary::from_response(Some(&response)));
                        self.mark_refreshed();
                    }
                    Err(err) => {
                        self.alert_error(format!("Failed to get training recommendations: {err}"))
                    }
                }
            }
        }
    }

    fn stale(&self, section: Section, generation: u64) -> bool {
        let stale = generation != self.generations.current(section);
        if stale {
            tracing::debug!(
                target: "skillgap::dashboard",
                section = section.title(),
                generation,
                current = self.generations.current(section),
                "dropping stale load result"
            );
        }
        stale
    }

    fn mark_refreshed(&mut self) {
        self.last_refresh = Some(
            time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc()),
        );
    }

    /// Drops the alert once it expires.
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        if self.alert.as_ref().is_some_and(|alert| alert.expired(now)) {
            self.alert = None;
        }
    }

    /// Dismisses the alert immediately.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub(crate) fn alert_success(&mut self, message: String) {
        self.alert = Some(Alert::new(message, AlertLevel::Success));
    }

    pub(crate) fn alert_error(&mut self, message: String) {
        self.alert = Some(Alert::new(message, AlertLevel::Error));
    }

    /// True while any load is in flight.
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }
}
