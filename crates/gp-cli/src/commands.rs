use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and log into it
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Explore with the demo account
    Guest,
    /// End the current session
    Logout,
    /// Show who is logged in
    Whoami,
    /// Check where navigating to a path leads (e.g. /dashboard, /project/2)
    Open {
        path: String,
    },
    /// List projects on the dashboard
    Projects {
        /// all, online, maintenance, offline or development
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Show metrics and the CO2 trend for one project
    Project {
        id: String,
        /// Take a fresh measurement before showing the project
        #[arg(long)]
        refresh: bool,
    },
}
