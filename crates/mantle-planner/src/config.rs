//! Planner configuration and validation.

use std::fmt;

use mantle_core::Offset;

/// Configuration for constructing a [`Planner`](crate::Planner).
///
/// `validate()` checks structural invariants before the planner is built;
/// an invalid config never produces a half-working planner.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Seed for the plan-prefix RNG. Same seed, same prefix sequence.
    pub seed: u64,
    /// Upper bound on how many actions of a fetched path are cached.
    /// Default: 15. Must be at least 1.
    pub max_plan_prefix: usize,
    /// Manipulator offsets to attach, in order, as extender tokens become
    /// available. Decided once here; never recomputed.
    pub manipulator_layout: Vec<Offset>,
}

impl PlannerConfig {
    /// The fixed nine-offset column layout the original bot attaches,
    /// front to back.
    pub fn default_layout() -> Vec<Offset> {
        vec![
            Offset::new(1, 2),
            Offset::new(1, -2),
            Offset::new(0, 2),
            Offset::new(0, -2),
            Offset::new(-1, 2),
            Offset::new(-1, -2),
            Offset::new(-1, 1),
            Offset::new(-1, -1),
            Offset::new(-1, 0),
        ]
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_plan_prefix == 0 {
            return Err(ConfigError::ZeroPrefix);
        }
        for (index, offset) in self.manipulator_layout.iter().enumerate() {
            if *offset == Offset::new(0, 0) {
                return Err(ConfigError::SelfOffset { index });
            }
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plan_prefix: 15,
            manipulator_layout: Self::default_layout(),
        }
    }
}

/// Errors detected during [`PlannerConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_plan_prefix` is zero; the cache could never hold a plan.
    ZeroPrefix,
    /// A manipulator offset is `(0,0)`, the agent's own cell.
    SelfOffset {
        /// Index of the offending offset in the layout.
        index: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPrefix => write!(f, "max_plan_prefix must be at least 1"),
            Self::SelfOffset { index } => {
                write!(f, "manipulator offset {index} is (0,0)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn default_layout_matches_attachment_order() {
        let layout = PlannerConfig::default_layout();
        assert_eq!(layout.len(), 9);
        assert_eq!(layout[0], Offset::new(1, 2));
        assert_eq!(layout[8], Offset::new(-1, 0));
    }

    #[test]
    fn zero_prefix_rejected() {
        let cfg = PlannerConfig {
            max_plan_prefix: 0,
            ..PlannerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroPrefix));
    }

    #[test]
    fn self_offset_rejected() {
        let cfg = PlannerConfig {
            manipulator_layout: vec![Offset::new(1, 1), Offset::new(0, 0)],
            ..PlannerConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::SelfOffset { index: 1 }));
    }

    #[test]
    fn empty_layout_is_allowed() {
        let cfg = PlannerConfig {
            manipulator_layout: vec![],
            ..PlannerConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
