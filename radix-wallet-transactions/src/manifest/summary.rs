use crate::internal_prelude::*;

/// Static analysis of a manifest: which accounts move funds and which
/// entities must produce auth signatures for the transaction to succeed.
///
/// Sets preserve first-use order of the instructions, so downstream
/// consumers iterating candidates see them in manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestSummary {
    /// Accounts withdrawn from.
    pub addresses_of_accounts_withdrawn_from: IndexSet<AccountAddress>,
    /// Accounts deposited into.
    pub addresses_of_accounts_deposited_into: IndexSet<AccountAddress>,
    /// Accounts whose auth is required by the instructions.
    pub addresses_of_accounts_requiring_auth: IndexSet<AccountAddress>,
    /// Personas whose auth is required by the instructions.
    pub addresses_of_personas_requiring_auth: IndexSet<IdentityAddress>,
}

impl ManifestSummary {
    pub fn of(instructions: &[Instruction]) -> Self {
        let mut summary = Self::default();
        for instruction in instructions {
            summary.add(instruction);
        }
        summary
    }

    fn add(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::WithdrawFromAccount {
                account_address, ..
            } => {
                self.addresses_of_accounts_withdrawn_from
                    .insert(*account_address);
                self.addresses_of_accounts_requiring_auth
                    .insert(*account_address);
            }
            Instruction::DepositEntireWorktop { account_address }
            | Instruction::DepositFromWorktop {
                account_address, ..
            } => {
                // Depositing into an account needs no auth from its owner.
                self.addresses_of_accounts_deposited_into
                    .insert(*account_address);
            }
            Instruction::LockFee {
                account_address, ..
            }
            | Instruction::CreateProofFromAccount {
                account_address, ..
            } => {
                self.addresses_of_accounts_requiring_auth
                    .insert(*account_address);
            }
            Instruction::SetMetadata { address, .. } => match address {
                AddressOfAccountOrPersona::Account(address) => {
                    self.addresses_of_accounts_requiring_auth.insert(*address);
                }
                AddressOfAccountOrPersona::Identity(address) => {
                    self.addresses_of_personas_requiring_auth.insert(*address);
                }
            },
            Instruction::CallMethod { .. } => {}
        }
    }

    /// All entity addresses requiring auth, accounts first.
    pub fn addresses_requiring_auth(&self) -> IndexSet<AddressOfAccountOrPersona> {
        self.addresses_of_accounts_requiring_auth
            .iter()
            .map(|address| AddressOfAccountOrPersona::from(*address))
            .chain(
                self.addresses_of_personas_requiring_auth
                    .iter()
                    .map(|address| AddressOfAccountOrPersona::from(*address)),
            )
            .collect()
    }
}
