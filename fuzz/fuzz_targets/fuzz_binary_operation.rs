#![no_main]

use libfuzzer_sys::fuzz_target;

use duocalc_core::combine::binary_operation;

fn operand(tag: u8, value: i32) -> Option<i32> {
    match tag % 3 {
        0 => None,
        1 => Some(0),
        _ => Some(value),
    }
}

fuzz_target!(|input: (u8, i32, u8, i32)| {
    let (f_tag, f_value, g_tag, g_value) = input;
    let f = operand(f_tag, f_value);
    let g = operand(g_tag, g_value);
    let combined = binary_operation(f, g);

    assert_eq!(combined, binary_operation(g, f));
    if f == Some(0) || g == Some(0) {
        assert_eq!(combined, Some(0));
    } else if f.is_none() || g.is_none() {
        assert_eq!(combined, None);
    }
});
