//! Algorithm enum for selecting how a generation is computed.
//!
//! Both strategies produce identical generations; the parallel one spreads
//! rows across the rayon pool and pays off on large grids.

/// Available evolution strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row by row on the calling thread
    #[default]
    Serial,
    /// Rows split across the rayon pool
    Parallel,
}

impl Algorithm {
    /// Display name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_serial() {
        assert_eq!(Algorithm::default(), Algorithm::Serial);
    }

    #[test]
    fn test_names_are_unique() {
        assert_ne!(Algorithm::Serial.name(), Algorithm::Parallel.name());
    }
}
