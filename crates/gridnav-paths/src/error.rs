use std::fmt;

use gridnav_core::Cell;

/// Which end of a query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointFault {
    OutOfBounds,
    Blocked,
}

/// A path query that could not be answered.
///
/// "No path" is not an error: it is reported as `Ok(None)` by
/// [`GridPathfinder::find_path`](crate::GridPathfinder::find_path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// An endpoint lies outside the grid or on a blocked cell.
    InvalidEndpoint {
        endpoint: Endpoint,
        cell: Cell,
        fault: EndpointFault,
    },
    /// The caller's stop check asked the search to abort.
    Cancelled,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoint {
                endpoint,
                cell,
                fault: EndpointFault::OutOfBounds,
            } => write!(f, "{endpoint} position {cell} is out of bounds"),
            Self::InvalidEndpoint {
                endpoint,
                cell,
                fault: EndpointFault::Blocked,
            } => write!(f, "{endpoint} position {cell} is blocked"),
            Self::Cancelled => f.write_str("path search cancelled"),
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_distinguish_faults() {
        let oob = QueryError::InvalidEndpoint {
            endpoint: Endpoint::Start,
            cell: Cell::new(9, 9),
            fault: EndpointFault::OutOfBounds,
        };
        let blocked = QueryError::InvalidEndpoint {
            endpoint: Endpoint::End,
            cell: Cell::new(1, 2),
            fault: EndpointFault::Blocked,
        };
        assert_eq!(oob.to_string(), "start position (9, 9) is out of bounds");
        assert_eq!(blocked.to_string(), "end position (1, 2) is blocked");
        assert_eq!(QueryError::Cancelled.to_string(), "path search cancelled");
    }
}
