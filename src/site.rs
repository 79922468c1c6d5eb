//! The host side of the terminal's contract: a current path the terminal can
//! read, and a navigation sink it can write to. The TUI plays the role the
//! site router plays in production.

use crate::content::SiteContent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Projects,
    Posts,
    About,
    Contact,
    Status,
    NotFound,
}

impl Route {
    pub fn resolve(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/projects" => Route::Projects,
            "/posts" => Route::Posts,
            "/about" => Route::About,
            "/contact" => Route::Contact,
            "/status" => Route::Status,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Projects => "/projects",
            Route::Posts => "/posts",
            Route::About => "/about",
            Route::Contact => "/contact",
            Route::Status => "/status",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
            Route::Posts => "Posts",
            Route::About => "About",
            Route::Contact => "Contact",
            Route::Status => "Status",
            Route::NotFound => "Not Found",
        }
    }

    /// Pages reachable from the navigation chrome, in menu order.
    pub fn menu() -> [Route; 6] {
        [
            Route::Home,
            Route::Projects,
            Route::Posts,
            Route::About,
            Route::Contact,
            Route::Status,
        ]
    }
}

/// The simulated site: fixed content plus a current location. Navigation is
/// fire-and-forget from the terminal's point of view; the site records every
/// transition so tests (and the status page) can observe it.
pub struct Site {
    pub content: SiteContent,
    route: Route,
    path: String,
    visits: Vec<String>,
}

impl Site {
    pub fn new(content: SiteContent, path: &str) -> Self {
        Self {
            content,
            route: Route::resolve(path),
            path: path.to_string(),
            visits: Vec::new(),
        }
    }

    pub fn navigate(&mut self, path: &str) {
        self.route = Route::resolve(path);
        self.path = path.to_string();
        self.visits.push(path.to_string());
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn visits(&self) -> &[String] {
        &self.visits
    }
}

#[cfg(test)]
#[path = "tests/site/route_tests.rs"]
mod tests;
