//! Runs CLI commands against the session and the dashboard data.

use crate::{CliError, CliResult, Commands, Dashboard, ProjectDetail, ProjectListing};

use gp_core::{MetricSummary, ProjectFilter, trend};
use gp_session::{DurableStore, Identity, Navigation, Route, RouteGuard, SessionStore};

use std::str::FromStr;

use log::{info, warn};
use serde_json::{Value, json};

/// Footprint advice shown under every project.
pub const OPTIMIZATION_TIPS: [(&str, &str); 3] = [
    (
        "Image Optimization",
        "Compress and convert images to modern formats like WebP. Use responsive images with srcset.",
    ),
    (
        "Code Splitting",
        "Split your JavaScript bundles and load only what's needed for each page.",
    ),
    (
        "Database Queries",
        "Optimize database queries and implement caching strategies to reduce server load.",
    ),
];

const NO_PROJECTS_MESSAGE: &str = "No projects found with the selected filter.";

/// Composition root: owns the session and the data layer and hands them to
/// each command.
pub struct App<S: DurableStore> {
    session: SessionStore<S>,
    dashboard: Dashboard,
}

impl<S: DurableStore> App<S> {
    /// `session` should already be restored.
    pub fn new(session: SessionStore<S>, dashboard: Dashboard) -> Self {
        Self { session, dashboard }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub async fn run(&mut self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => {
                let identity = self.session.login(&email, &password)?;
                Ok(signed_in(&identity))
            }
            Commands::Signup {
                name,
                email,
                password,
            } => {
                let identity = self.session.create_account(&name, &email, &password)?;
                Ok(signed_in(&identity))
            }
            Commands::Guest => {
                let identity = self.session.login_as_guest()?;
                Ok(signed_in(&identity))
            }
            Commands::Logout => {
                self.session.logout()?;
                Ok(json!({
                    "authenticated": false,
                    "next": Route::Login.path(),
                }))
            }
            Commands::Whoami => Ok(json!({
                "authenticated": self.session.is_authenticated(),
                "user": self.session.identity(),
            })),
            Commands::Open { path } => {
                let requested = Route::from_str(&path)?;
                let navigation = RouteGuard::check(&self.session, requested.clone());
                Ok(json!({
                    "requested": requested.path(),
                    "navigation": if navigation.is_redirect() { "redirect" } else { "render" },
                    "target": navigation.target().path(),
                }))
            }
            Commands::Projects { filter } => {
                self.guard(Route::Dashboard)?;
                let filter = ProjectFilter::from_str(&filter)?;
                let listing = self.dashboard.load_projects().await?;
                Ok(self.render_listing(&listing, filter))
            }
            Commands::Project { id, refresh } => {
                self.guard(Route::project(&id)?)?;

                let refreshed = if refresh {
                    match self.dashboard.refresh_metrics(&id).await {
                        Ok(metric) => Some(metric),
                        Err(e) => {
                            warn!("Error updating metrics for project {id}: {e}");
                            None
                        }
                    }
                } else {
                    None
                };

                let detail = self.dashboard.load_project_detail(&id).await?;
                let mut view = render_detail(&detail);
                view["refreshed"] = json!(refreshed);
                Ok(view)
            }
        }
    }

    /// Evaluated fresh for every command, so a logout takes effect at once.
    fn guard(&self, requested: Route) -> CliResult<()> {
        match RouteGuard::check(&self.session, requested.clone()) {
            Navigation::Render(_) => Ok(()),
            Navigation::Redirect(to) => {
                info!("Redirecting {requested} to {to}");
                Err(CliError::login_required(requested.path()))
            }
        }
    }

    fn render_listing(&self, listing: &ProjectListing, filter: ProjectFilter) -> Value {
        let projects = filter.apply(&listing.projects);

        let mut view = json!({
            "source": listing.source,
            "filter": filter.to_string(),
            "user": self.session.identity().map(Identity::name),
            "count": projects.len(),
            "projects": projects,
        });

        if projects.is_empty() {
            view["message"] = json!(NO_PROJECTS_MESSAGE);
        }

        view
    }
}

fn signed_in(identity: &Identity) -> Value {
    json!({
        "authenticated": true,
        "user": identity,
        "next": Route::Dashboard.path(),
    })
}

fn render_detail(detail: &ProjectDetail) -> Value {
    let tips: Vec<Value> = OPTIMIZATION_TIPS
        .iter()
        .map(|(title, body)| json!({ "title": title, "body": body }))
        .collect();

    json!({
        "source": detail.source,
        "project": detail.project,
        "ecoRating": detail.project.eco_rating.display_name(),
        "latest": MetricSummary::latest(&detail.metrics),
        "trend": trend(&detail.metrics),
        "tips": tips,
    })
}
