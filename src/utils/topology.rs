use super::Error;
use std::str::FromStr;

/// Describes how the field treats its edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Bounds of the field are stitched together.
    Torus,
    /// Cells outside the field are always dead.
    Bounded,
    /// Field is unbounded and can grow infinitely.
    Unbounded,
}

impl Topology {
    pub const ALL: [Topology; 3] = [Topology::Torus, Topology::Bounded, Topology::Unbounded];

    pub fn name(self) -> &'static str {
        match self {
            Topology::Torus => "torus",
            Topology::Bounded => "bounded",
            Topology::Unbounded => "unbounded",
        }
    }
}

impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "torus" | "toroidal" => Ok(Topology::Torus),
            "bounded" => Ok(Topology::Bounded),
            "unbounded" | "infinite" => Ok(Topology::Unbounded),
            other => Err(Error::Config(format!("unknown topology '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Torus".parse::<Topology>().unwrap(), Topology::Torus);
        assert_eq!(" bounded ".parse::<Topology>().unwrap(), Topology::Bounded);
        assert_eq!("INFINITE".parse::<Topology>().unwrap(), Topology::Unbounded);
        for t in Topology::ALL {
            assert_eq!(t.name().parse::<Topology>().unwrap(), t);
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!("klein".parse::<Topology>(), Err(Error::Config(_))));
    }
}
