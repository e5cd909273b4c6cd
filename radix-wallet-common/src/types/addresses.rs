use crate::crypto::{hash, PublicKey};
use crate::internal_prelude::*;
use bech32::{FromBase32, ToBase32, Variant};
use strum::FromRepr;

/// The byte length of an address body: one entity discriminator byte
/// followed by 29 bytes derived from the entity's origin.
pub const NODE_ID_LENGTH: usize = 30;

/// The entity discriminator carried in the first byte of an address body.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
pub enum EntityType {
    GlobalVirtualEd25519Account = 0x51,
    GlobalVirtualEd25519Identity = 0x52,
    GlobalFungibleResource = 0x5d,
    GlobalGenericComponent = 0xc0,
    GlobalAccount = 0xc1,
    GlobalIdentity = 0xc2,
    GlobalVirtualSecp256k1Account = 0xd1,
    GlobalVirtualSecp256k1Identity = 0xd2,
}

impl EntityType {
    pub fn is_account(&self) -> bool {
        matches!(
            self,
            EntityType::GlobalAccount
                | EntityType::GlobalVirtualEd25519Account
                | EntityType::GlobalVirtualSecp256k1Account
        )
    }

    pub fn is_identity(&self) -> bool {
        matches!(
            self,
            EntityType::GlobalIdentity
                | EntityType::GlobalVirtualEd25519Identity
                | EntityType::GlobalVirtualSecp256k1Identity
        )
    }

    pub fn is_resource(&self) -> bool {
        matches!(self, EntityType::GlobalFungibleResource)
    }

    pub fn is_component(&self) -> bool {
        matches!(self, EntityType::GlobalGenericComponent)
    }

    /// The entity part of the Bech32m HRP, e.g. `account` in `account_rdx`.
    pub fn hrp_prefix(&self) -> &'static str {
        if self.is_account() {
            "account"
        } else if self.is_identity() {
            "identity"
        } else if self.is_resource() {
            "resource"
        } else {
            "component"
        }
    }
}

//========
// errors
//========

/// Represents an error when parsing an address from its Bech32m string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAddressError {
    Bech32mDecodingError,
    InvalidVariant,
    InvalidLength(usize),
    InvalidEntityTypeId(u8),
    UnexpectedEntityType(EntityType),
    UnknownHrp(String),
}

impl std::error::Error for ParseAddressError {}

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

//========
// codec
//========

fn encode_address(
    f: &mut fmt::Formatter,
    network_id: NetworkId,
    node_id: &[u8; NODE_ID_LENGTH],
    entity_type: EntityType,
) -> fmt::Result {
    let hrp = format!("{}_{}", entity_type.hrp_prefix(), network_id.hrp_suffix());
    let encoded =
        bech32::encode(&hrp, node_id.to_base32(), Variant::Bech32m).map_err(|_| fmt::Error)?;
    write!(f, "{}", encoded)
}

fn decode_address(
    s: &str,
) -> Result<(NetworkId, EntityType, [u8; NODE_ID_LENGTH]), ParseAddressError> {
    let (actual_hrp, data, variant) =
        bech32::decode(s).map_err(|_| ParseAddressError::Bech32mDecodingError)?;

    match variant {
        Variant::Bech32m => {}
        _ => return Err(ParseAddressError::InvalidVariant),
    };

    let data =
        Vec::<u8>::from_base32(&data).map_err(|_| ParseAddressError::Bech32mDecodingError)?;
    if data.len() != NODE_ID_LENGTH {
        return Err(ParseAddressError::InvalidLength(data.len()));
    }

    let entity_type = EntityType::from_repr(data[0])
        .ok_or(ParseAddressError::InvalidEntityTypeId(data[0]))?;

    // The HRP binds both the entity type and the network
    let network_id = [NetworkId::Mainnet, NetworkId::Stokenet, NetworkId::Simulator]
        .into_iter()
        .find(|network_id| {
            actual_hrp == format!("{}_{}", entity_type.hrp_prefix(), network_id.hrp_suffix())
        })
        .ok_or_else(|| ParseAddressError::UnknownHrp(actual_hrp.clone()))?;

    let mut node_id = [0u8; NODE_ID_LENGTH];
    node_id.copy_from_slice(&data);
    Ok((network_id, entity_type, node_id))
}

macro_rules! define_typed_address {
    ($(#[$docs:meta])* $address_type:ident, $entity_predicate:ident) => {
        $(#[$docs])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $address_type {
            network_id: NetworkId,
            node_id: [u8; NODE_ID_LENGTH],
        }

        impl $address_type {
            pub fn new(
                network_id: NetworkId,
                node_id: [u8; NODE_ID_LENGTH],
            ) -> Result<Self, ParseAddressError> {
                let entity_type = EntityType::from_repr(node_id[0])
                    .ok_or(ParseAddressError::InvalidEntityTypeId(node_id[0]))?;
                if !entity_type.$entity_predicate() {
                    return Err(ParseAddressError::UnexpectedEntityType(entity_type));
                }
                Ok(Self {
                    network_id,
                    node_id,
                })
            }

            pub fn network_id(&self) -> NetworkId {
                self.network_id
            }

            pub fn node_id(&self) -> &[u8; NODE_ID_LENGTH] {
                &self.node_id
            }

            pub fn entity_type(&self) -> EntityType {
                EntityType::from_repr(self.node_id[0]).expect("address holds a valid entity byte")
            }
        }

        impl FromStr for $address_type {
            type Err = ParseAddressError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let (network_id, entity_type, node_id) = decode_address(s)?;
                if !entity_type.$entity_predicate() {
                    return Err(ParseAddressError::UnexpectedEntityType(entity_type));
                }
                Ok(Self {
                    network_id,
                    node_id,
                })
            }
        }

        impl fmt::Display for $address_type {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                encode_address(f, self.network_id, &self.node_id, self.entity_type())
            }
        }

        impl fmt::Debug for $address_type {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self)
            }
        }
    };
}

define_typed_address!(
    /// The address of an account component.
    AccountAddress,
    is_account
);
define_typed_address!(
    /// The address of an identity component, the on-ledger part of a persona.
    IdentityAddress,
    is_identity
);
define_typed_address!(
    /// The address of a resource manager.
    ResourceAddress,
    is_resource
);
define_typed_address!(
    /// The address of a generic global component.
    ComponentAddress,
    is_component
);

impl AccountAddress {
    /// Derives the pre-allocated account address controlled by the given key.
    pub fn new_virtual_from_public_key(public_key: &PublicKey, network_id: NetworkId) -> Self {
        let entity_type = match public_key {
            PublicKey::Secp256k1(_) => EntityType::GlobalVirtualSecp256k1Account,
            PublicKey::Ed25519(_) => EntityType::GlobalVirtualEd25519Account,
        };
        Self {
            network_id,
            node_id: virtual_node_id(entity_type, public_key),
        }
    }
}

impl IdentityAddress {
    /// Derives the pre-allocated identity address controlled by the given key.
    pub fn new_virtual_from_public_key(public_key: &PublicKey, network_id: NetworkId) -> Self {
        let entity_type = match public_key {
            PublicKey::Secp256k1(_) => EntityType::GlobalVirtualSecp256k1Identity,
            PublicKey::Ed25519(_) => EntityType::GlobalVirtualEd25519Identity,
        };
        Self {
            network_id,
            node_id: virtual_node_id(entity_type, public_key),
        }
    }
}

fn virtual_node_id(entity_type: EntityType, public_key: &PublicKey) -> [u8; NODE_ID_LENGTH] {
    let mut node_id = [0u8; NODE_ID_LENGTH];
    node_id[0] = entity_type as u8;
    node_id[1..].copy_from_slice(&hash(public_key.to_vec()).lower_29_bytes());
    node_id
}

impl ResourceAddress {
    /// The network's native token.
    pub fn xrd(network_id: NetworkId) -> Self {
        let mut node_id = [0u8; NODE_ID_LENGTH];
        node_id[0] = EntityType::GlobalFungibleResource as u8;
        Self {
            network_id,
            node_id,
        }
    }
}

impl HasSampleValues for AccountAddress {
    fn sample() -> Self {
        let key = Ed25519PrivateKey::from_u64(1)
            .expect("hardcoded key is valid")
            .public_key();
        Self::new_virtual_from_public_key(&key.into(), NetworkId::Mainnet)
    }

    fn sample_other() -> Self {
        let key = Ed25519PrivateKey::from_u64(2)
            .expect("hardcoded key is valid")
            .public_key();
        Self::new_virtual_from_public_key(&key.into(), NetworkId::Mainnet)
    }
}

impl HasSampleValues for IdentityAddress {
    fn sample() -> Self {
        let key = Ed25519PrivateKey::from_u64(101)
            .expect("hardcoded key is valid")
            .public_key();
        Self::new_virtual_from_public_key(&key.into(), NetworkId::Mainnet)
    }

    fn sample_other() -> Self {
        let key = Ed25519PrivateKey::from_u64(102)
            .expect("hardcoded key is valid")
            .public_key();
        Self::new_virtual_from_public_key(&key.into(), NetworkId::Mainnet)
    }
}

impl HasSampleValues for ResourceAddress {
    fn sample() -> Self {
        Self::xrd(NetworkId::Mainnet)
    }

    fn sample_other() -> Self {
        let mut node_id = [0u8; NODE_ID_LENGTH];
        node_id[0] = EntityType::GlobalFungibleResource as u8;
        node_id[1..].copy_from_slice(&hash("candy").lower_29_bytes());
        Self {
            network_id: NetworkId::Mainnet,
            node_id,
        }
    }
}

impl HasSampleValues for ComponentAddress {
    fn sample() -> Self {
        let mut node_id = [0u8; NODE_ID_LENGTH];
        node_id[0] = EntityType::GlobalGenericComponent as u8;
        node_id[1..].copy_from_slice(&hash("radiswap").lower_29_bytes());
        Self {
            network_id: NetworkId::Mainnet,
            node_id,
        }
    }

    fn sample_other() -> Self {
        let mut node_id = [0u8; NODE_ID_LENGTH];
        node_id[0] = EntityType::GlobalGenericComponent as u8;
        node_id[1..].copy_from_slice(&hash("gumball machine").lower_29_bytes());
        Self {
            network_id: NetworkId::Mainnet,
            node_id,
        }
    }
}

/// The address of an account or of a persona's identity, ordered and
/// deduplicated the way manifests reference them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressOfAccountOrPersona {
    Account(AccountAddress),
    Identity(IdentityAddress),
}

impl AddressOfAccountOrPersona {
    pub fn is_account(&self) -> bool {
        matches!(self, AddressOfAccountOrPersona::Account(_))
    }

    pub fn as_account(&self) -> Option<&AccountAddress> {
        match self {
            AddressOfAccountOrPersona::Account(address) => Some(address),
            AddressOfAccountOrPersona::Identity(_) => None,
        }
    }

    pub fn as_identity(&self) -> Option<&IdentityAddress> {
        match self {
            AddressOfAccountOrPersona::Account(_) => None,
            AddressOfAccountOrPersona::Identity(address) => Some(address),
        }
    }
}

impl From<AccountAddress> for AddressOfAccountOrPersona {
    fn from(address: AccountAddress) -> Self {
        Self::Account(address)
    }
}

impl From<IdentityAddress> for AddressOfAccountOrPersona {
    fn from(address: IdentityAddress) -> Self {
        Self::Identity(address)
    }
}

impl fmt::Display for AddressOfAccountOrPersona {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressOfAccountOrPersona::Account(address) => write!(f, "{}", address),
            AddressOfAccountOrPersona::Identity(address) => write!(f, "{}", address),
        }
    }
}

impl fmt::Debug for AddressOfAccountOrPersona {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl HasSampleValues for AddressOfAccountOrPersona {
    fn sample() -> Self {
        Self::Account(AccountAddress::sample())
    }

    fn sample_other() -> Self {
        Self::Identity(IdentityAddress::sample())
    }
}
