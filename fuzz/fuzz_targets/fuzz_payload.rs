#![no_main]

use libfuzzer_sys::fuzz_target;

use duocalc_core::constants::INT_SIZE;
use duocalc_orchestration::channel::{decode_payload, result_channel, TryReceive};

fuzz_target!(|data: &[u8]| {
    let decoded = decode_payload(data);
    assert_eq!(decoded.is_some(), data.len() >= INT_SIZE);

    // The channel must agree with the bare decoder.
    let (tx, rx) = result_channel();
    tx.send_raw(data);
    assert_eq!(rx.try_receive(), TryReceive::Ready(decoded));
});
