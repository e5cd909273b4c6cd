/// Provides deterministic sample values of a type, used pervasively by tests.
///
/// `sample()` and `sample_other()` are guaranteed to be distinct, which makes
/// them convenient for equality and collection tests.
pub trait HasSampleValues {
    fn sample() -> Self;
    fn sample_other() -> Self;
}
