use crate::internal_prelude::*;
use async_trait::async_trait;

/// Why signatures are being collected. Hardware factor sources display
/// this to the user before signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigningPurpose {
    SignTransaction,
    SignAuth,
}

/// One entity that must sign, with the factor instances that produce its
/// signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySigner {
    pub entity: AccountOrPersona,
    pub factor_instances: IndexSet<HierarchicalDeterministicFactorInstance>,
}

impl EntitySigner {
    pub fn new(
        entity: AccountOrPersona,
        factor_instances: IndexSet<HierarchicalDeterministicFactorInstance>,
    ) -> Self {
        Self {
            entity,
            factor_instances,
        }
    }
}

/// A factor source together with every signer it serves for this
/// transaction. Signature collection visits each factor source once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningFactor {
    pub factor_source: FactorSource,
    pub signers: Vec<EntitySigner>,
}

impl SigningFactor {
    pub fn new(factor_source: FactorSource, signers: Vec<EntitySigner>) -> Self {
        Self {
            factor_source,
            signers,
        }
    }

    pub fn expected_signature_count(&self) -> usize {
        self.signers
            .iter()
            .map(|signer| signer.factor_instances.len())
            .sum()
    }
}

/// Signing factors grouped by factor source kind, the order the collection
/// UI walks through them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SigningFactors(IndexMap<FactorSourceKind, Vec<SigningFactor>>);

impl SigningFactors {
    pub fn new(factors: IndexMap<FactorSourceKind, Vec<SigningFactor>>) -> Self {
        Self(factors)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Groups loose factors by the kind of their factor source, keeping
    /// first-use order within and across kinds.
    pub fn grouping(factors: impl IntoIterator<Item = SigningFactor>) -> Self {
        let mut grouped = IndexMap::<FactorSourceKind, Vec<SigningFactor>>::new();
        for factor in factors {
            grouped
                .entry(factor.factor_source.kind())
                .or_default()
                .push(factor);
        }
        Self(grouped)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn factor_source_kinds(&self) -> IndexSet<FactorSourceKind> {
        self.0.keys().copied().collect()
    }

    pub fn factors_of_kind(&self, kind: FactorSourceKind) -> &[SigningFactor] {
        self.0.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// How many signatures collection will produce: one per factor instance
    /// of every signer, across all factor sources.
    pub fn expected_signature_count(&self) -> usize {
        self.0
            .values()
            .flatten()
            .map(SigningFactor::expected_signature_count)
            .sum()
    }
}

/// Maps the entities that must sign onto the wallet's factor sources.
#[async_trait]
pub trait FactorSourcesClient: Send + Sync {
    /// Groups each signer's transaction signing factor instances under the
    /// factor source that can produce them.
    async fn signing_factors(
        &self,
        network_id: NetworkId,
        signers: IndexSet<AccountOrPersona>,
        purpose: SigningPurpose,
    ) -> Result<SigningFactors, PortError>;
}
