use crate::internal_prelude::*;

/// Utility for building transaction manifests.
pub struct ManifestBuilder {
    network_id: NetworkId,
    /// Instructions generated.
    instructions: Vec<Instruction>,
}

impl ManifestBuilder {
    /// Starts a new manifest builder for the given network.
    pub fn new(network_id: NetworkId) -> Self {
        Self {
            network_id,
            instructions: Vec::new(),
        }
    }

    /// Adds a raw instruction.
    pub fn add_instruction(&mut self, instruction: Instruction) -> &mut Self {
        self.instructions.push(instruction);
        self
    }

    /// Locks a transaction fee against the account's XRD vault.
    pub fn lock_fee(&mut self, account_address: AccountAddress, amount: Decimal) -> &mut Self {
        self.add_instruction(Instruction::LockFee {
            account_address,
            amount,
        })
    }

    /// Withdraws resource from an account into the worktop.
    pub fn withdraw_from_account(
        &mut self,
        account_address: AccountAddress,
        resource_address: ResourceAddress,
        amount: Decimal,
    ) -> &mut Self {
        self.add_instruction(Instruction::WithdrawFromAccount {
            account_address,
            resource_address,
            amount,
        })
    }

    /// Deposits the entire worktop into an account.
    pub fn deposit_entire_worktop(&mut self, account_address: AccountAddress) -> &mut Self {
        self.add_instruction(Instruction::DepositEntireWorktop { account_address })
    }

    /// Takes resource from the worktop and deposits it into an account.
    pub fn deposit_from_worktop(
        &mut self,
        account_address: AccountAddress,
        resource_address: ResourceAddress,
        amount: Decimal,
    ) -> &mut Self {
        self.add_instruction(Instruction::DepositFromWorktop {
            account_address,
            resource_address,
            amount,
        })
    }

    /// Creates a proof of resource held by an account.
    pub fn create_proof_from_account(
        &mut self,
        account_address: AccountAddress,
        resource_address: ResourceAddress,
        amount: Decimal,
    ) -> &mut Self {
        self.add_instruction(Instruction::CreateProofFromAccount {
            account_address,
            resource_address,
            amount,
        })
    }

    /// Sets a metadata entry on an account or persona.
    pub fn set_metadata(
        &mut self,
        address: impl Into<AddressOfAccountOrPersona>,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> &mut Self {
        self.add_instruction(Instruction::SetMetadata {
            address: address.into(),
            key: key.as_ref().to_owned(),
            value: value.as_ref().to_owned(),
        })
    }

    /// Calls a method on a global component.
    pub fn call_method(
        &mut self,
        component_address: ComponentAddress,
        method_name: impl AsRef<str>,
        args: Vec<String>,
    ) -> &mut Self {
        self.add_instruction(Instruction::CallMethod {
            component_address,
            method_name: method_name.as_ref().to_owned(),
            args,
        })
    }

    /// Builds the manifest.
    pub fn build(&self) -> TransactionManifest {
        TransactionManifest::new(self.network_id, self.instructions.clone())
    }
}
