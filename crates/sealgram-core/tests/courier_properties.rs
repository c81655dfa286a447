//! Property-based tests for the send/read pipeline.

use proptest::prelude::*;
use sealgram_core::{AccessProof, Courier, MemoryLedger, RecoveredKeyFormat, SimSealer};
use sealgram_proto::Address;

fn addr(fill: u8) -> Address {
    Address::from_bytes([fill; 20])
}

proptest! {
    // Full-pipeline runs draw real entropy per case; keep the case count
    // modest so the suite stays fast.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn any_text_round_trips_under_either_recovered_form(
        text in ".{0,512}",
        decimal in any::<bool>(),
    ) {
        let format =
            if decimal { RecoveredKeyFormat::Decimal } else { RecoveredKeyFormat::Hex };
        let courier = Courier::new(MemoryLedger::new(), SimSealer::new(format));
        let recipient = addr(2);

        let id = courier.send(addr(1), recipient, &text).unwrap();
        let opened = courier.read(id, &AccessProof::new(recipient, vec![0; 64])).unwrap();

        prop_assert_eq!(opened.plaintext, text);
    }

    #[test]
    fn sealed_records_never_contain_the_key_address(
        text in "[a-z ]{1,64}",
    ) {
        // The stored record must not leak the one-time key in any of the
        // forms this system renders it.
        let courier = Courier::new(
            MemoryLedger::new(),
            SimSealer::new(RecoveredKeyFormat::Hex),
        );
        let recipient = addr(2);

        let id = courier.send(addr(1), recipient, &text).unwrap();
        let opened = courier.read(id, &AccessProof::new(recipient, vec![0; 64])).unwrap();

        let key_hex = opened.key_address.to_string().to_lowercase();
        prop_assert!(!opened.record.payload.to_lowercase().contains(&key_hex));

        let sealed_hex = hex::encode(opened.record.sealed_key.as_bytes());
        prop_assert!(!sealed_hex.contains(&key_hex[2..]));
    }
}
