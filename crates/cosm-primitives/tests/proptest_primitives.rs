use proptest::prelude::*;

use cosm_primitives::address::{from_bech32, to_bech32};
use cosm_primitives::ec::private_key::PrivateKey;
use cosm_primitives::ec::signature::Signature;
use cosm_primitives::hd::{ChildIndex, HdPath};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn private_key_to_address_is_bech32(seed in prop::array::uniform32(any::<u8>())) {
        // Not all 32-byte arrays are valid private keys (must be < curve order, nonzero).
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let address = pk.pub_key().to_address("cosmos").unwrap();
            prop_assert!(address.starts_with("cosmos1"));
            let (hrp, raw) = from_bech32(&address).unwrap();
            prop_assert_eq!(hrp, "cosmos");
            prop_assert_eq!(raw, pk.pub_key().raw_address().to_vec());
        }
    }

    #[test]
    fn ecdsa_sign_verify_low_s(
        seed in prop::array::uniform32(any::<u8>()),
        msg in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        if let Ok(pk) = PrivateKey::from_bytes(&seed) {
            let sig = pk.sign(&msg).unwrap();
            prop_assert!(sig.is_low_s());
            prop_assert!(pk.pub_key().verify(&msg, &sig));
            let parsed = Signature::from_fixed(&sig.to_fixed()).unwrap();
            prop_assert_eq!(parsed, sig);
        }
    }

    #[test]
    fn bech32_accepts_arbitrary_payloads(data in prop::collection::vec(any::<u8>(), 0..40)) {
        let encoded = to_bech32("osmo", &data).unwrap();
        let (hrp, decoded) = from_bech32(&encoded).unwrap();
        prop_assert_eq!(hrp, "osmo");
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn hd_path_display_parses_back(steps in prop::collection::vec((0u32..0x8000_0000, any::<bool>()), 0..8)) {
        let path = HdPath::new(
            steps
                .into_iter()
                .map(|(i, h)| if h { ChildIndex::Hardened(i) } else { ChildIndex::Normal(i) })
                .collect(),
        );
        let parsed: HdPath = path.to_string().parse().unwrap();
        prop_assert_eq!(parsed, path);
    }
}
