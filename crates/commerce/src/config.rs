use telecart_core::{Environment, SessionId};

/// Session-scoped configuration the cart defers to when dispatching.
///
/// This replaces ambient application-context lookup: the host builds one of
/// these per session and hands it to the cart explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    session_id: SessionId,
    environment: Environment,
    opt_out: bool,
}

impl CartConfig {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            environment: Environment::default(),
            opt_out: false,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// An opted-out cart keeps full local state but dispatches nothing.
    pub fn with_opt_out(mut self, opt_out: bool) -> Self {
        self.opt_out = opt_out;
        self
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn opt_out(&self) -> bool {
        self.opt_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_production_and_opted_in() {
        let config = CartConfig::new(SessionId::new());
        assert_eq!(config.environment(), Environment::Production);
        assert!(!config.opt_out());
    }

    #[test]
    fn setters_chain() {
        let config = CartConfig::new(SessionId::new())
            .with_environment(Environment::Development)
            .with_opt_out(true);
        assert_eq!(config.environment(), Environment::Development);
        assert!(config.opt_out());
    }
}
