/// Creates a `Decimal` from literals.
///
/// # Example
/// ```no_run
/// use radix_wallet_common::prelude::*;
///
/// let a = dec!(1);
/// let b = dec!("1.1");
/// ```
#[macro_export]
macro_rules! dec {
    ($x:literal) => {
        $crate::math::Decimal::try_from($x).expect("Invalid decimal literal")
    };
}
