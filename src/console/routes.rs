pub const DEFAULT_ROUTE: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Customers,
    Accounts,
}

/// How the server produces a route's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Bare shell; the page fills itself in the browser.
    Client,
    /// Shell rendered ahead of time with the route marked in the document.
    Prerender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Route),
    Redirect(&'static str),
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Customers, Route::Accounts];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => DEFAULT_ROUTE,
            Route::Customers => "/customers",
            Route::Accounts => "/accounts",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Customers => "Customers",
            Route::Accounts => "Accounts",
        }
    }

    pub fn render_mode(&self) -> RenderMode {
        match self {
            Route::Customers | Route::Accounts => RenderMode::Client,
            Route::Dashboard => RenderMode::Prerender,
        }
    }
}

/// Maps a request path (no query string) to a route; anything unknown,
/// including `/`, redirects to the dashboard.
pub fn resolve(path: &str) -> Resolution {
    let trimmed = path.trim_end_matches('/');
    Route::ALL
        .into_iter()
        .find(|route| route.path() == trimmed)
        .map(Resolution::Render)
        .unwrap_or(Resolution::Redirect(DEFAULT_ROUTE))
}
