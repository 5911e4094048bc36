//! Randomised test data generation for block types.

use proptest::prelude::*;

use super::{Hash, Height};

impl Arbitrary for Height {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        (Height::MIN.0..=Height::MAX.0).prop_map(Height).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}

impl Arbitrary for Hash {
    type Parameters = ();

    fn arbitrary_with(_args: ()) -> Self::Strategy {
        any::<[u8; 32]>().prop_map(Hash).boxed()
    }

    type Strategy = BoxedStrategy<Self>;
}
