//! Algorithm selection as consumed by the command line.

use std::str::FromStr;

use crate::editing::solver::SolverParams;
use crate::error::Error;

/// Which subproblem solver to run on each connected component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverName {
    /// The built-in constructive heuristic.
    Heuristic,
    /// An integer-program backend supplied from outside the crate.
    Exact,
}

impl FromStr for SolverName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Error> {
        match name.to_ascii_lowercase().as_str() {
            "ch" | "heuristic" => Ok(SolverName::Heuristic),
            "ilp" | "exact" => Ok(SolverName::Exact),
            _ => Err(Error::UnknownSolver(name.to_string())),
        }
    }
}

/// Full algorithm configuration: the solver selector plus the knobs
/// that only the exact backend reads.
#[derive(Clone, Copy, Debug)]
pub struct Algorithm {
    pub solver: SolverName,
    /// Time limit in seconds for the exact backend, unlimited if not
    /// positive.
    pub time_limit: f64,
    /// Tune the exact model before optimizing.
    pub tune: bool,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm {
            solver: SolverName::Heuristic,
            time_limit: 60.0,
            tune: false,
        }
    }
}

impl Algorithm {
    pub fn params(&self) -> SolverParams {
        SolverParams {
            time_limit: self.time_limit,
            tune: self.tune,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_names_parse_case_insensitively() {
        assert_eq!("CH".parse::<SolverName>().unwrap(), SolverName::Heuristic);
        assert_eq!("heuristic".parse::<SolverName>().unwrap(), SolverName::Heuristic);
        assert_eq!("ILP".parse::<SolverName>().unwrap(), SolverName::Exact);
        assert_eq!("exact".parse::<SolverName>().unwrap(), SolverName::Exact);
    }

    #[test]
    fn unknown_solver_name_is_an_error() {
        let result = "simulated-annealing".parse::<SolverName>();
        assert!(matches!(result, Err(Error::UnknownSolver(name)) if name == "simulated-annealing"));
    }
}
