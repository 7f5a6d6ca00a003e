use crate::config::Config;
use calculator::RiskCalculator;
use types::trade::SizingPolicy;

#[derive(Clone)]
pub struct AppState {
    pub calculator: RiskCalculator,
    pub default_sizing_policy: SizingPolicy,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            calculator: RiskCalculator::new(config.calculator),
            default_sizing_policy: config.default_sizing_policy,
        }
    }
}
