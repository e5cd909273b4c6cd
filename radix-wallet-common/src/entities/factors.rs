use crate::internal_prelude::*;

/// The kind of factor source protecting an entity.
///
/// Signing is orchestrated per kind so that e.g. all Ledger-protected
/// entities can be signed for in a single session with the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::FromRepr)]
#[repr(u8)]
#[strum(serialize_all = "camelCase")]
pub enum FactorSourceKind {
    Device,
    LedgerHqHardwareWallet,
    OffDeviceMnemonic,
    ArculusCard,
    SecurityQuestions,
}

impl HasSampleValues for FactorSourceKind {
    fn sample() -> Self {
        Self::Device
    }

    fn sample_other() -> Self {
        Self::LedgerHqHardwareWallet
    }
}

/// Canonical identifier of a factor source: its kind together with a hash
/// derived from the factor source's seed material.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactorSourceId {
    pub kind: FactorSourceKind,
    pub body: Hash,
}

impl FactorSourceId {
    pub fn new(kind: FactorSourceKind, body: Hash) -> Self {
        Self { kind, body }
    }

    /// Forms the id from a public key derived from the factor source's
    /// seed material, conventionally the key at the special GETID path.
    pub fn from_public_key(kind: FactorSourceKind, public_key: &PublicKey) -> Self {
        Self::new(kind, hash(public_key.to_vec()))
    }
}

impl fmt::Display for FactorSourceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.body)
    }
}

impl fmt::Debug for FactorSourceId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl HasSampleValues for FactorSourceId {
    fn sample() -> Self {
        Self::new(FactorSourceKind::sample(), hash("device"))
    }

    fn sample_other() -> Self {
        Self::new(FactorSourceKind::sample_other(), hash("ledger"))
    }
}

/// A source of cryptographic factors, e.g. a mnemonic on this device or a
/// Ledger hardware wallet.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FactorSource {
    pub id: FactorSourceId,
    /// User facing label, e.g. the device model or a name the user chose.
    pub label: String,
}

impl FactorSource {
    pub fn new(id: FactorSourceId, label: impl AsRef<str>) -> Self {
        Self {
            id,
            label: label.as_ref().to_owned(),
        }
    }

    pub fn kind(&self) -> FactorSourceKind {
        self.id.kind
    }
}

impl fmt::Debug for FactorSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

impl HasSampleValues for FactorSource {
    fn sample() -> Self {
        Self::new(FactorSourceId::sample(), "My Phone")
    }

    fn sample_other() -> Self {
        Self::new(FactorSourceId::sample_other(), "Ledger Nano S+")
    }
}

/// A BIP-32 style derivation path, e.g. `m/44H/1022H/1H/525H/1460H/0H`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DerivationPath(String);

impl DerivationPath {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self(path.as_ref().to_owned())
    }

    /// The CAP-26 path of the key signing transactions for an account,
    /// `m/44H/1022H/<network>H/525H/1460H/<index>H`.
    pub fn for_account_transaction_signing(network_id: NetworkId, index: u32) -> Self {
        Self(format!(
            "m/44H/1022H/{}H/525H/1460H/{}H",
            network_id.id(),
            index
        ))
    }

    /// The CAP-26 path of the key signing transactions for a persona,
    /// `m/44H/1022H/<network>H/618H/1460H/<index>H`.
    pub fn for_identity_transaction_signing(network_id: NetworkId, index: u32) -> Self {
        Self(format!(
            "m/44H/1022H/{}H/618H/1460H/{}H",
            network_id.id(),
            index
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl HasSampleValues for DerivationPath {
    fn sample() -> Self {
        Self::for_account_transaction_signing(NetworkId::Mainnet, 0)
    }

    fn sample_other() -> Self {
        Self::for_account_transaction_signing(NetworkId::Mainnet, 1)
    }
}

/// A public key tagged with the derivation path it was derived at.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HierarchicalDeterministicPublicKey {
    pub public_key: PublicKey,
    pub derivation_path: DerivationPath,
}

impl HierarchicalDeterministicPublicKey {
    pub fn new(public_key: PublicKey, derivation_path: DerivationPath) -> Self {
        Self {
            public_key,
            derivation_path,
        }
    }
}

impl fmt::Debug for HierarchicalDeterministicPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} @ {}", self.public_key.to_hex(), self.derivation_path)
    }
}

impl HasSampleValues for HierarchicalDeterministicPublicKey {
    fn sample() -> Self {
        Self::new(
            Ed25519PrivateKey::from_u64(1)
                .expect("hardcoded key is valid")
                .public_key()
                .into(),
            DerivationPath::sample(),
        )
    }

    fn sample_other() -> Self {
        Self::new(
            Ed25519PrivateKey::from_u64(2)
                .expect("hardcoded key is valid")
                .public_key()
                .into(),
            DerivationPath::sample_other(),
        )
    }
}

/// A key derived from a factor source: the public key together with the id
/// of the factor source able to produce signatures with its private part.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HierarchicalDeterministicFactorInstance {
    pub factor_source_id: FactorSourceId,
    pub public_key: HierarchicalDeterministicPublicKey,
}

impl HierarchicalDeterministicFactorInstance {
    pub fn new(
        factor_source_id: FactorSourceId,
        public_key: HierarchicalDeterministicPublicKey,
    ) -> Self {
        Self {
            factor_source_id,
            public_key,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key.public_key
    }

    pub fn factor_source_kind(&self) -> FactorSourceKind {
        self.factor_source_id.kind
    }
}

impl fmt::Debug for HierarchicalDeterministicFactorInstance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} of {}", self.public_key, self.factor_source_id)
    }
}

impl HasSampleValues for HierarchicalDeterministicFactorInstance {
    fn sample() -> Self {
        Self::new(
            FactorSourceId::sample(),
            HierarchicalDeterministicPublicKey::sample(),
        )
    }

    fn sample_other() -> Self {
        Self::new(
            FactorSourceId::sample_other(),
            HierarchicalDeterministicPublicKey::sample_other(),
        )
    }
}
