use crate::internal_prelude::*;

/// A transaction manifest: the ordered instructions to execute, bound to the
/// network whose entities they reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionManifest {
    pub network_id: NetworkId,
    pub instructions: Vec<Instruction>,
}

impl TransactionManifest {
    pub fn new(network_id: NetworkId, instructions: Vec<Instruction>) -> Self {
        Self {
            network_id,
            instructions,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Statically analyzes the instructions.
    pub fn summary(&self) -> ManifestSummary {
        ManifestSummary::of(&self.instructions)
    }

    /// Returns a copy with a lock fee instruction for `fee_payer` prepended,
    /// leaving the original instructions untouched.
    pub fn with_lock_fee(&self, fee_payer: AccountAddress, amount: Decimal) -> Self {
        let mut instructions = Vec::with_capacity(self.instructions.len() + 1);
        instructions.push(Instruction::LockFee {
            account_address: fee_payer,
            amount,
        });
        instructions.extend(self.instructions.iter().cloned());
        Self {
            network_id: self.network_id,
            instructions,
        }
    }

    pub(crate) fn write_to(&self, encoder: &mut PayloadEncoder) {
        encoder.write_u32(self.instructions.len() as u32);
        for instruction in &self.instructions {
            instruction.write_to(encoder);
        }
    }
}

impl HasSampleValues for TransactionManifest {
    fn sample() -> Self {
        let network_id = NetworkId::Mainnet;
        let from = Account::sample();
        let to = Account::sample_other();
        let xrd = ResourceAddress::xrd(network_id);
        Self::new(
            network_id,
            vec![
                Instruction::WithdrawFromAccount {
                    account_address: from.address,
                    resource_address: xrd,
                    amount: dec!("330"),
                },
                Instruction::DepositFromWorktop {
                    account_address: to.address,
                    resource_address: xrd,
                    amount: dec!("330"),
                },
            ],
        )
    }

    fn sample_other() -> Self {
        let network_id = NetworkId::Mainnet;
        Self::new(
            network_id,
            vec![Instruction::SetMetadata {
                address: Account::sample().address.into(),
                key: "account_type".to_owned(),
                value: "dapp definition".to_owned(),
            }],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_lock_fee_prepends() {
        let manifest = TransactionManifest::sample();
        let fee_payer = Account::sample().address;
        let modified = manifest.with_lock_fee(fee_payer, dec!("25"));

        assert_eq!(modified.instructions.len(), manifest.instructions.len() + 1);
        assert_eq!(
            modified.instructions[0],
            Instruction::LockFee {
                account_address: fee_payer,
                amount: dec!("25"),
            }
        );
        assert_eq!(modified.instructions[1..], manifest.instructions[..]);
        assert_eq!(modified.network_id, manifest.network_id);
    }

    #[test]
    fn samples_are_distinct() {
        assert_ne!(
            TransactionManifest::sample(),
            TransactionManifest::sample_other()
        );
    }
}
