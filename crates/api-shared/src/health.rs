use crate::dto::HealthRes;

/// Simple health service shared by every Nexus API surface.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance.
    ///
    /// `cases_loaded` is reported so that a deployment pointing at an empty dataset shows up as
    /// unhealthy rather than silently producing only formal letters.
    pub fn check_health(cases_loaded: usize) -> HealthRes {
        if cases_loaded == 0 {
            return HealthRes {
                ok: false,
                message: "Nexus is alive but no historical cases are loaded".into(),
                cases_loaded,
            };
        }
        HealthRes {
            ok: true,
            message: "Nexus is alive".into(),
            cases_loaded,
        }
    }
}

impl Default for HealthService {
    fn default() -> Self {
        Self::new()
    }
}
