#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    Register,
    Scenarios,
    Scenario(String),
    NewScenario,
    Decklists,
    Decklist(String),
    NewDecklist,
}

impl Destination {
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let destination = match segments.as_slice() {
            [] => Destination::Home,
            ["login"] => Destination::Login,
            ["register"] => Destination::Register,
            ["scenarios"] => Destination::Scenarios,
            ["scenarios", "new"] => Destination::NewScenario,
            ["scenarios", id] => Destination::Scenario((*id).to_string()),
            ["decklists"] => Destination::Decklists,
            ["decklists", "new"] => Destination::NewDecklist,
            ["decklists", id] => Destination::Decklist((*id).to_string()),
            _ => return None,
        };

        Some(destination)
    }

    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Destination::Home => String::from("/"),
            Destination::Login => String::from("/login"),
            Destination::Register => String::from("/register"),
            Destination::Scenarios => String::from("/scenarios"),
            Destination::Scenario(id) => format!("/scenarios/{id}"),
            Destination::NewScenario => String::from("/scenarios/new"),
            Destination::Decklists => String::from("/decklists"),
            Destination::Decklist(id) => format!("/decklists/{id}"),
            Destination::NewDecklist => String::from("/decklists/new"),
        }
    }

    #[must_use]
    pub fn requires_auth(&self) -> bool {
        matches!(self, Destination::NewScenario | Destination::NewDecklist)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Send the user to the login page, then back to `redirect`.
    Login { redirect: String },
}

/// Decides whether navigation to `requested` may proceed. A refused
/// navigation redirects back to `requested` verbatim, query included.
#[must_use]
pub fn guard(requested: &str, authenticated: bool) -> Access {
    let protected = Destination::from_path(requested).is_some_and(|d| d.requires_auth());

    if protected && !authenticated {
        Access::Login {
            redirect: requested.to_string(),
        }
    } else {
        Access::Granted
    }
}
