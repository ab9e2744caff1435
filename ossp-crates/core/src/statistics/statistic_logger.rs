use std::fmt::Display;

use convert_case::Case;
use convert_case::Casing;
use itertools::Itertools;
use log::info;

/// Responsible for logging statistics under a name made of the provided prefix.
///
/// Statistics are emitted through the [`log`] facade at the info level with the target
/// `ossp::statistics`, in the form `NAME=VALUE`.
#[derive(Debug, Default, Clone)]
pub struct StatisticLogger {
    /// The prefix which will be attached to the statistic name
    name_prefix: String,
    casing: Option<Case>,
}

impl StatisticLogger {
    pub fn new<Input: IntoIterator<Item = impl Display>>(name_prefix: Input) -> Self {
        Self {
            name_prefix: name_prefix.into_iter().join("_"),
            casing: None,
        }
    }

    /// Converts the name of every logged statistic to the provided casing.
    pub fn with_casing(mut self, casing: Case) -> Self {
        self.casing = Some(casing);
        self
    }

    /// Attaches the provided `addition_to_prefix` to the stored internal prefix and returns a new
    /// [`StatisticLogger`] with these two prefixes.
    pub fn attach_to_prefix(&self, addition_to_prefix: impl Display) -> Self {
        let name_prefix = if self.name_prefix.is_empty() {
            addition_to_prefix.to_string()
        } else {
            format!("{}_{}", self.name_prefix, addition_to_prefix)
        };

        Self {
            name_prefix,
            casing: self.casing,
        }
    }

    pub fn name(&self) -> String {
        match self.casing {
            Some(casing) => self.name_prefix.to_case(casing),
            None => self.name_prefix.clone(),
        }
    }

    pub fn log_statistic(&self, value: impl Display) {
        info!(target: "ossp::statistics", "{}={value}", self.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_joined() {
        let logger = StatisticLogger::new(["ossp", "search"]).attach_to_prefix("num_decisions");

        assert_eq!("ossp_search_num_decisions", logger.name());
    }

    #[test]
    fn casing_is_applied_to_the_full_name() {
        let logger = StatisticLogger::new(["search"])
            .with_casing(Case::Camel)
            .attach_to_prefix("max_depth");

        assert_eq!("searchMaxDepth", logger.name());
    }
}
