use crate::internal_prelude::*;
use strum::FromRepr;

/// A type-safe network discriminator.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, FromRepr)]
pub enum NetworkId {
    Mainnet = 1,
    Stokenet = 2,
    Simulator = 242,
}

impl NetworkId {
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn logical_name(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "mainnet",
            NetworkId::Stokenet => "stokenet",
            NetworkId::Simulator => "simulator",
        }
    }

    pub fn hrp_suffix(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => "rdx",
            NetworkId::Stokenet => "tdx_2_",
            NetworkId::Simulator => "sim",
        }
    }

    pub fn definition(&self) -> NetworkDefinition {
        match self {
            NetworkId::Mainnet => NetworkDefinition::mainnet(),
            NetworkId::Stokenet => NetworkDefinition::stokenet(),
            NetworkId::Simulator => NetworkDefinition::simulator(),
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.logical_name())
    }
}

/// Network Definition is intended to be the actual definition of a network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkDefinition {
    pub id: NetworkId,
    pub logical_name: String,
    pub hrp_suffix: String,
}

impl NetworkDefinition {
    pub fn mainnet() -> NetworkDefinition {
        NetworkDefinition {
            id: NetworkId::Mainnet,
            logical_name: String::from("mainnet"),
            hrp_suffix: String::from("rdx"),
        }
    }

    pub fn stokenet() -> NetworkDefinition {
        NetworkDefinition {
            id: NetworkId::Stokenet,
            logical_name: String::from("stokenet"),
            hrp_suffix: String::from("tdx_2_"),
        }
    }

    pub fn simulator() -> NetworkDefinition {
        NetworkDefinition {
            id: NetworkId::Simulator,
            logical_name: String::from("simulator"),
            hrp_suffix: String::from("sim"),
        }
    }
}

impl FromStr for NetworkDefinition {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(NetworkDefinition::mainnet()),
            "stokenet" => Ok(NetworkDefinition::stokenet()),
            "simulator" => Ok(NetworkDefinition::simulator()),
            _ => Err(ParseNetworkError::InvalidNetworkString),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNetworkError {
    InvalidNetworkString,
}

impl std::error::Error for ParseNetworkError {}

impl fmt::Display for ParseNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_definition_from_str() {
        assert_eq!(
            NetworkDefinition::from_str("Mainnet").unwrap(),
            NetworkDefinition::mainnet()
        );
        assert_eq!(
            NetworkDefinition::from_str("gumballnet"),
            Err(ParseNetworkError::InvalidNetworkString)
        );
    }

    #[test]
    fn network_id_round_trips_through_repr() {
        assert_eq!(NetworkId::from_repr(1), Some(NetworkId::Mainnet));
        assert_eq!(NetworkId::from_repr(2), Some(NetworkId::Stokenet));
        assert_eq!(NetworkId::from_repr(242), Some(NetworkId::Simulator));
        assert_eq!(NetworkId::from_repr(99), None);
    }
}
