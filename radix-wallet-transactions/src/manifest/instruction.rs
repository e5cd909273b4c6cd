use crate::internal_prelude::*;

/// A single manifest instruction.
///
/// This is the subset of ledger instructions the wallet builds and analyzes
/// itself when preparing a transaction. Arbitrary dApp manifests reach the
/// wallet already built, carrying at most these shapes plus opaque method
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Withdraws an amount of a resource from an account into the worktop.
    WithdrawFromAccount {
        account_address: AccountAddress,
        resource_address: ResourceAddress,
        amount: Decimal,
    },

    /// Deposits everything on the worktop into an account, aborting if any
    /// bucket would be refused by the account's deposit rules.
    DepositEntireWorktop {
        account_address: AccountAddress,
    },

    /// Takes an amount of a resource from the worktop and deposits it into
    /// an account.
    DepositFromWorktop {
        account_address: AccountAddress,
        resource_address: ResourceAddress,
        amount: Decimal,
    },

    /// Locks a transaction fee against the account's XRD vault.
    LockFee {
        account_address: AccountAddress,
        amount: Decimal,
    },

    /// Creates a proof of an amount of a resource held by an account.
    CreateProofFromAccount {
        account_address: AccountAddress,
        resource_address: ResourceAddress,
        amount: Decimal,
    },

    /// Sets a metadata entry on an account or persona.
    SetMetadata {
        address: AddressOfAccountOrPersona,
        key: String,
        value: String,
    },

    /// Calls a method on a global component with pre-rendered arguments.
    CallMethod {
        component_address: ComponentAddress,
        method_name: String,
        args: Vec<String>,
    },
}

impl Instruction {
    pub(crate) fn write_to(&self, encoder: &mut PayloadEncoder) {
        match self {
            Self::WithdrawFromAccount {
                account_address,
                resource_address,
                amount,
            } => {
                encoder.write_u8(0);
                encoder.write_bytes(account_address.node_id());
                encoder.write_bytes(resource_address.node_id());
                encoder.write_str(&amount.to_string());
            }
            Self::DepositEntireWorktop { account_address } => {
                encoder.write_u8(1);
                encoder.write_bytes(account_address.node_id());
            }
            Self::DepositFromWorktop {
                account_address,
                resource_address,
                amount,
            } => {
                encoder.write_u8(2);
                encoder.write_bytes(account_address.node_id());
                encoder.write_bytes(resource_address.node_id());
                encoder.write_str(&amount.to_string());
            }
            Self::LockFee {
                account_address,
                amount,
            } => {
                encoder.write_u8(3);
                encoder.write_bytes(account_address.node_id());
                encoder.write_str(&amount.to_string());
            }
            Self::CreateProofFromAccount {
                account_address,
                resource_address,
                amount,
            } => {
                encoder.write_u8(4);
                encoder.write_bytes(account_address.node_id());
                encoder.write_bytes(resource_address.node_id());
                encoder.write_str(&amount.to_string());
            }
            Self::SetMetadata {
                address,
                key,
                value,
            } => {
                encoder.write_u8(5);
                match address {
                    AddressOfAccountOrPersona::Account(address) => {
                        encoder.write_u8(0);
                        encoder.write_bytes(address.node_id());
                    }
                    AddressOfAccountOrPersona::Identity(address) => {
                        encoder.write_u8(1);
                        encoder.write_bytes(address.node_id());
                    }
                }
                encoder.write_str(key);
                encoder.write_str(value);
            }
            Self::CallMethod {
                component_address,
                method_name,
                args,
            } => {
                encoder.write_u8(6);
                encoder.write_bytes(component_address.node_id());
                encoder.write_str(method_name);
                encoder.write_u32(args.len() as u32);
                for arg in args {
                    encoder.write_str(arg);
                }
            }
        }
    }
}
