//! Routes and the navigation contract

/// Destinations the app can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Wallet factory landing page
    Factory,
    /// Threshold signature wallet dashboard
    Dashboard,
    /// Detail of the selected wallet. The address travels with the route.
    Wallet { address: Option<String> },
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Factory => "/",
            Route::Dashboard => "/dashboard",
            Route::Wallet { .. } => "/wallet",
        }
    }

    /// Path plus route parameters, the inverse of [`Route::from_path`].
    pub fn to_url(&self) -> String {
        match self {
            Route::Wallet {
                address: Some(address),
            } => format!("{}?address={address}", self.path()),
            _ => self.path().to_string(),
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let (base, query) = path.split_once('?').unwrap_or((path, ""));
        match base.trim_end_matches('/') {
            "" => Some(Route::Factory),
            "/dashboard" => Some(Route::Dashboard),
            "/wallet" => {
                let address = query
                    .split('&')
                    .find_map(|pair| pair.strip_prefix("address="))
                    .filter(|value| !value.is_empty())
                    .map(str::to_string);
                Some(Route::Wallet { address })
            }
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Factory => "Factory",
            Route::Dashboard => "Dashboard",
            Route::Wallet { .. } => "Wallet",
        }
    }
}

/// Anything that can move the user to a route.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// History-keeping navigator backing the app views.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
    navigations: usize,
}

impl Router {
    pub fn new(start: Route) -> Self {
        Self {
            history: vec![start],
            navigations: 0,
        }
    }

    pub fn current(&self) -> &Route {
        // history is never empty: `back` keeps the root entry
        &self.history[self.history.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Total navigation requests served, `back` excluded.
    pub fn navigations(&self) -> usize {
        self.navigations
    }

    pub fn back(&mut self) -> bool {
        if self.history.len() > 1 {
            self.history.pop();
            true
        } else {
            false
        }
    }

    pub fn breadcrumb(&self) -> String {
        self.history
            .iter()
            .map(Route::title)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        tracing::info!(url = %route.to_url(), "navigate");
        self.navigations += 1;
        match route {
            // Top-level pages reset the history
            Route::Factory | Route::Dashboard => self.history = vec![route],
            Route::Wallet { .. } => {
                if matches!(self.current(), Route::Wallet { .. }) {
                    self.history.pop();
                }
                self.history.push(route);
            }
        }
    }
}
