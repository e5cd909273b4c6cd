use crate::internal_prelude::*;

/// An account the user controls on some network.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Account {
    pub network_id: NetworkId,
    pub address: AccountAddress,
    pub display_name: DisplayName,
    pub security_state: EntitySecurityState,
}

impl Account {
    /// Creates a new unsecured account whose address is derived from the
    /// public key of `transaction_signing`.
    pub fn new(
        display_name: DisplayName,
        transaction_signing: HierarchicalDeterministicFactorInstance,
        network_id: NetworkId,
    ) -> Self {
        let address = AccountAddress::new_virtual_from_public_key(
            transaction_signing.public_key(),
            network_id,
        );
        Self {
            network_id,
            address,
            display_name,
            security_state: EntitySecurityState::unsecured(transaction_signing),
        }
    }

    pub fn transaction_signing_factor_instances(
        &self,
    ) -> IndexSet<HierarchicalDeterministicFactorInstance> {
        self.security_state.transaction_signing_factor_instances()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} | {}", self.display_name, self.address)
    }
}

impl HasSampleValues for Account {
    fn sample() -> Self {
        Self::new(
            DisplayName::sample(),
            HierarchicalDeterministicFactorInstance::sample(),
            NetworkId::Mainnet,
        )
    }

    fn sample_other() -> Self {
        Self::new(
            DisplayName::sample_other(),
            HierarchicalDeterministicFactorInstance::sample_other(),
            NetworkId::Mainnet,
        )
    }
}

/// A persona the user controls on some network, used for dApp identities.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Persona {
    pub network_id: NetworkId,
    pub address: IdentityAddress,
    pub display_name: DisplayName,
    pub security_state: EntitySecurityState,
}

impl Persona {
    pub fn new(
        display_name: DisplayName,
        transaction_signing: HierarchicalDeterministicFactorInstance,
        network_id: NetworkId,
    ) -> Self {
        let address = IdentityAddress::new_virtual_from_public_key(
            transaction_signing.public_key(),
            network_id,
        );
        Self {
            network_id,
            address,
            display_name,
            security_state: EntitySecurityState::unsecured(transaction_signing),
        }
    }

    pub fn transaction_signing_factor_instances(
        &self,
    ) -> IndexSet<HierarchicalDeterministicFactorInstance> {
        self.security_state.transaction_signing_factor_instances()
    }
}

impl fmt::Debug for Persona {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} | {}", self.display_name, self.address)
    }
}

impl HasSampleValues for Persona {
    fn sample() -> Self {
        let network_id = NetworkId::Mainnet;
        let key = Ed25519PrivateKey::from_u64(101)
            .expect("hardcoded key is valid")
            .public_key();
        let instance = HierarchicalDeterministicFactorInstance::new(
            FactorSourceId::sample(),
            HierarchicalDeterministicPublicKey::new(
                key.into(),
                DerivationPath::for_identity_transaction_signing(network_id, 0),
            ),
        );
        Self::new(
            DisplayName::new("Satoshi").expect("hardcoded name is valid"),
            instance,
            network_id,
        )
    }

    fn sample_other() -> Self {
        let network_id = NetworkId::Mainnet;
        let key = Ed25519PrivateKey::from_u64(102)
            .expect("hardcoded key is valid")
            .public_key();
        let instance = HierarchicalDeterministicFactorInstance::new(
            FactorSourceId::sample_other(),
            HierarchicalDeterministicPublicKey::new(
                key.into(),
                DerivationPath::for_identity_transaction_signing(network_id, 1),
            ),
        );
        Self::new(
            DisplayName::new("Batman").expect("hardcoded name is valid"),
            instance,
            network_id,
        )
    }
}

/// Either an account or a persona, the two kinds of entities that can be
/// required to produce auth signatures for a transaction.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum AccountOrPersona {
    AccountEntity(Account),
    PersonaEntity(Persona),
}

impl AccountOrPersona {
    pub fn address(&self) -> AddressOfAccountOrPersona {
        match self {
            Self::AccountEntity(account) => account.address.into(),
            Self::PersonaEntity(persona) => persona.address.into(),
        }
    }

    pub fn network_id(&self) -> NetworkId {
        match self {
            Self::AccountEntity(account) => account.network_id,
            Self::PersonaEntity(persona) => persona.network_id,
        }
    }

    pub fn display_name(&self) -> &DisplayName {
        match self {
            Self::AccountEntity(account) => &account.display_name,
            Self::PersonaEntity(persona) => &persona.display_name,
        }
    }

    pub fn security_state(&self) -> &EntitySecurityState {
        match self {
            Self::AccountEntity(account) => &account.security_state,
            Self::PersonaEntity(persona) => &persona.security_state,
        }
    }

    pub fn transaction_signing_factor_instances(
        &self,
    ) -> IndexSet<HierarchicalDeterministicFactorInstance> {
        self.security_state().transaction_signing_factor_instances()
    }

    pub fn is_account(&self) -> bool {
        matches!(self, Self::AccountEntity(_))
    }

    pub fn as_account(&self) -> Option<&Account> {
        match self {
            Self::AccountEntity(account) => Some(account),
            Self::PersonaEntity(_) => None,
        }
    }

    pub fn as_persona(&self) -> Option<&Persona> {
        match self {
            Self::AccountEntity(_) => None,
            Self::PersonaEntity(persona) => Some(persona),
        }
    }
}

impl From<Account> for AccountOrPersona {
    fn from(value: Account) -> Self {
        Self::AccountEntity(value)
    }
}

impl From<Persona> for AccountOrPersona {
    fn from(value: Persona) -> Self {
        Self::PersonaEntity(value)
    }
}

impl fmt::Debug for AccountOrPersona {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AccountEntity(account) => write!(f, "{:?}", account),
            Self::PersonaEntity(persona) => write!(f, "{:?}", persona),
        }
    }
}

impl HasSampleValues for AccountOrPersona {
    fn sample() -> Self {
        Self::AccountEntity(Account::sample())
    }

    fn sample_other() -> Self {
        Self::PersonaEntity(Persona::sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_address_matches_signing_key() {
        let account = Account::sample();
        let instance = account
            .transaction_signing_factor_instances()
            .first()
            .cloned()
            .unwrap();
        assert_eq!(
            account.address,
            AccountAddress::new_virtual_from_public_key(
                instance.public_key(),
                account.network_id
            )
        );
    }

    #[test]
    fn persona_address_is_an_identity() {
        let persona = Persona::sample();
        assert!(persona.address.entity_type().is_identity());
    }

    #[test]
    fn account_or_persona_address_dispatch() {
        let account = Account::sample();
        let persona = Persona::sample();
        assert_eq!(
            AccountOrPersona::from(account.clone()).address(),
            account.address.into()
        );
        assert_eq!(
            AccountOrPersona::from(persona.clone()).address(),
            persona.address.into()
        );
    }

    #[test]
    fn as_account_and_as_persona() {
        let entity = AccountOrPersona::sample();
        assert!(entity.is_account());
        assert!(entity.as_account().is_some());
        assert!(entity.as_persona().is_none());

        let entity = AccountOrPersona::sample_other();
        assert!(!entity.is_account());
        assert!(entity.as_persona().is_some());
    }

    #[test]
    fn samples_are_distinct() {
        assert_ne!(Account::sample(), Account::sample_other());
        assert_ne!(Persona::sample(), Persona::sample_other());
        assert_ne!(
            AccountOrPersona::sample(),
            AccountOrPersona::sample_other()
        );
    }
}
